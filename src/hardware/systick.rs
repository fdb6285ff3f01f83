use crate::time::{TickConfigError, systick_reload};
use cortex_m::peripheral::{SYST, syst::SystClkSource};

/// Starts SysTick on the core clock with its exception enabled.
///
/// Nothing is touched when the rate cannot be reached.
pub fn start_systick(syst: &mut SYST, core_hz: u32, tick_hz: u32) -> Result<(), TickConfigError> {
    let reload = systick_reload(core_hz, tick_hz)?;

    syst.set_clock_source(SystClkSource::Core);
    syst.set_reload(reload);
    syst.clear_current();
    syst.enable_counter();
    syst.enable_interrupt();

    Ok(())
}

//! Build-time configuration.

/// Core clock after the RCC setup in the firmware (HSE 8 MHz, PLL x9).
pub const SYSCLK_HZ: u32 = 72_000_000;

/// Tick interrupt rate.
pub const TICK_HZ: u32 = 1000;

/// Milliseconds added to the tick count per tick interrupt.
pub const TICK_STEP_MS: u32 = 1000 / TICK_HZ;

// The step must account for every millisecond of the tick period.
const _: () = assert!(TICK_HZ > 0 && TICK_HZ <= 1000 && 1000 % TICK_HZ == 0);

/// LED refresh period for both scheduling strategies.
pub const PERIOD_MS: u32 = 100;

/// Timing parameters shared by the schedulers.
///
/// The tick rate is not part of it: SysTick and the tick step are both
/// derived from [`TICK_HZ`] so they cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FusionConfig {
    /// Refresh period in milliseconds.
    pub period_ms: u32,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            period_ms: PERIOD_MS,
        }
    }
}

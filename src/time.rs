//! Millisecond tick counter and deadline helpers.

use core::cell::Cell;
use critical_section::Mutex;

use crate::config::TICK_STEP_MS;

/// Source of the current millisecond count.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

/// Wrapping millisecond counter advanced from the tick interrupt.
///
/// Only the tick handler calls [`tick`](Self::tick); everyone else reads.
/// Both sides go through a critical section.
pub struct TickCounter {
    ticks: Mutex<Cell<u32>>,
}

impl TickCounter {
    pub const fn new() -> Self {
        Self {
            ticks: Mutex::new(Cell::new(0)),
        }
    }

    /// Advances the count by one tick step and returns the new count.
    pub fn tick(&self) -> u32 {
        critical_section::with(|cs| {
            let ticks = self.ticks.borrow(cs);
            let now = ticks.get().wrapping_add(TICK_STEP_MS);
            ticks.set(now);
            now
        })
    }

    pub fn now(&self) -> u32 {
        critical_section::with(|cs| self.ticks.borrow(cs).get())
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TickCounter {
    fn now_ms(&self) -> u32 {
        self.now()
    }
}

/// A point `duration_ms` after `start_ms`, tolerant of counter wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Deadline {
    start_ms: u32,
    duration_ms: u32,
}

impl Deadline {
    pub fn after<C: Clock + ?Sized>(clock: &C, duration_ms: u32) -> Self {
        Self::starting_at(clock.now_ms(), duration_ms)
    }

    pub const fn starting_at(start_ms: u32, duration_ms: u32) -> Self {
        Self {
            start_ms,
            duration_ms,
        }
    }

    pub fn has_elapsed(&self, now_ms: u32) -> bool {
        now_ms.wrapping_sub(self.start_ms) >= self.duration_ms
    }
}

/// Spins until `duration_ms` milliseconds have passed on `clock`.
///
/// Nothing else runs on the calling context meanwhile; only interrupts
/// (which advance the clock) get in.
pub fn busy_wait<C: Clock + ?Sized>(clock: &C, duration_ms: u32) {
    let deadline = Deadline::after(clock, duration_ms);
    while !deadline.has_elapsed(clock.now_ms()) {
        core::hint::spin_loop();
    }
}

/// Reasons the tick timer cannot run at the requested rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickConfigError {
    ZeroRate,
    RateAboveCoreClock,
    /// The divider does not fit the 24-bit reload register.
    ReloadOutOfRange,
}

const SYST_RELOAD_MAX: u32 = 0x00FF_FFFF;

/// SysTick reload value for `tick_hz` interrupts from a `core_hz` clock.
pub fn systick_reload(core_hz: u32, tick_hz: u32) -> Result<u32, TickConfigError> {
    if tick_hz == 0 {
        return Err(TickConfigError::ZeroRate);
    }
    if tick_hz > core_hz {
        return Err(TickConfigError::RateAboveCoreClock);
    }

    let reload = core_hz / tick_hz - 1;
    if reload == 0 || reload > SYST_RELOAD_MAX {
        return Err(TickConfigError::ReloadOutOfRange);
    }
    Ok(reload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_advances_by_step() {
        let counter = TickCounter::new();
        assert_eq!(counter.now(), 0);
        assert_eq!(counter.tick(), 1);
        assert_eq!(counter.tick(), 2);
        assert_eq!(counter.now_ms(), 2);
    }

    #[test]
    fn deadline_survives_wraparound() {
        let deadline = Deadline::starting_at(u32::MAX - 10, 100);
        assert!(!deadline.has_elapsed(u32::MAX));
        assert!(!deadline.has_elapsed(88));
        assert!(deadline.has_elapsed(89));
    }

    #[test]
    fn zero_deadline_is_already_elapsed() {
        assert!(Deadline::starting_at(42, 0).has_elapsed(42));
    }

    #[test]
    fn reload_for_1khz_at_72mhz() {
        assert_eq!(systick_reload(72_000_000, 1000), Ok(71_999));
    }

    #[test]
    fn reload_rejects_unreachable_rates() {
        assert_eq!(systick_reload(72_000_000, 0), Err(TickConfigError::ZeroRate));
        assert_eq!(systick_reload(1000, 2000), Err(TickConfigError::RateAboveCoreClock));
        assert_eq!(systick_reload(1000, 1000), Err(TickConfigError::ReloadOutOfRange));
        assert_eq!(systick_reload(72_000_000, 1), Err(TickConfigError::ReloadOutOfRange));
    }
}

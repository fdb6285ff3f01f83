//! Button and touch-slider fusion for two LEDs.
//!
//! The library holds everything that is not board bring-up: the decision
//! table, the slider classifier, the millisecond tick counter and the two
//! scheduling strategies. It builds for the host as well as for the target,
//! so the logic is tested with the normal test harness.
//!
//! Features:
//! - `async` (default): edge-waiting button tasks via `embedded-hal-async`
//! - `defmt`: logging and `defmt::Format` derives
//! - `board`: the STM32F103 firmware binary

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
pub mod fusion;
pub mod hardware;
pub mod scheduler;
pub mod time;

pub use config::FusionConfig;
pub use fusion::{ButtonId, ButtonLevels, Buttons, LedPattern, Slider, SliderPosition, decide};
pub use scheduler::{Controller, EventDriven, Polling, SchedulingMode, TickSignal};
pub use time::{Clock, Deadline, TickConfigError, TickCounter};

/// Parks the core forever.
///
/// Used when the board cannot be brought into a working state; the LEDs keep
/// whatever level they had, which is the only visible symptom.
pub fn halt() -> ! {
    loop {
        core::hint::spin_loop();
    }
}

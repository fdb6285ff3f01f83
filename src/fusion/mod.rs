//! Input sources and the decision table that fuses them.

pub mod buttons;
pub mod decision;
pub mod slider;

pub use buttons::{ButtonId, ButtonLevels, Buttons};
pub use decision::{LedPattern, decide};
pub use slider::{Slider, SliderPosition, TouchSensor};

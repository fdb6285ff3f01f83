//! Button/slider to LED decision table.

use super::slider::SliderPosition;

/// Levels for the two LEDs, `true` meaning lit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedPattern {
    pub led0: bool,
    pub led1: bool,
}

impl LedPattern {
    pub const OFF: Self = Self::new(false, false);

    pub const fn new(led0: bool, led1: bool) -> Self {
        Self { led0, led1 }
    }
}

/// Maps the current button and slider state to LED levels.
///
/// Exactly one button pressed makes the buttons "active"; both or neither
/// pressed count as inactive and leave the slider alone in charge:
///
/// | buttons      | slider   | led0 | led1 |
/// |--------------|----------|------|------|
/// | inactive     | Inactive | off  | off  |
/// | inactive     | Left     | on   | off  |
/// | inactive     | Right    | off  | on   |
/// | pb0          | Left     | on   | off  |
/// | pb0          | Right    | on   | on   |
/// | pb0          | Inactive | on   | off  |
/// | other        | Left     | on   | on   |
/// | other        | Right    | off  | on   |
/// | other        | Inactive | off  | on   |
///
/// The "other" rows are taken whenever the buttons are active and `pb0` is
/// not set; `pb1` itself is never consulted there.
pub fn decide(pb0: bool, pb1: bool, slider: SliderPosition) -> LedPattern {
    let buttons_active = pb0 ^ pb1;

    if !buttons_active {
        return match slider {
            SliderPosition::Inactive => LedPattern::OFF,
            SliderPosition::Left => LedPattern::new(true, false),
            SliderPosition::Right => LedPattern::new(false, true),
        };
    }

    match (slider, pb0) {
        (SliderPosition::Left, true) => LedPattern::new(true, false),
        (SliderPosition::Left, false) => LedPattern::new(true, true),
        (SliderPosition::Right, true) => LedPattern::new(true, true),
        (SliderPosition::Right, false) => LedPattern::new(false, true),
        (SliderPosition::Inactive, true) => LedPattern::new(true, false),
        (SliderPosition::Inactive, false) => LedPattern::new(false, true),
    }
}

//! Scheduling of the sample/decide/drive cycle.
//!
//! A [`Controller`] owns everything the cycle touches: the slider, both LEDs
//! and the last known button levels. Two strategies feed it:
//!
//! - [`Polling`] samples everything itself and then spins on the tick
//!   counter for one period.
//! - [`EventDriven`] sleeps until interrupt context signals a tick, takes
//!   over the button levels latched by the edge handlers, and refreshes on
//!   period-boundary ticks.
//!
//! The strategy is picked at boot, see [`SchedulingMode`].

pub mod event;
pub mod polling;

pub use event::{EventDriven, TickSignal};
pub use polling::Polling;

use crate::fusion::{ButtonId, LedPattern, Slider, SliderPosition, TouchSensor, decide};
use crate::hardware::traits::Led;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SchedulingMode {
    Polling,
    InterruptDriven,
}

impl SchedulingMode {
    /// Reads the mode-select jumper: grounded selects interrupt-driven.
    pub fn from_select_level(is_low: bool) -> Self {
        if is_low {
            Self::InterruptDriven
        } else {
            Self::Polling
        }
    }
}

/// Everything the decision depends on, plus what it produced last.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FusionState {
    pub buttons: [bool; 2],
    pub slider: SliderPosition,
    pub leds: LedPattern,
}

pub struct Controller<S, L> {
    slider: Slider<S>,
    leds: [L; 2],
    state: FusionState,
}

impl<S: TouchSensor, L: Led> Controller<S, L> {
    /// Takes over the outputs and drives both LEDs off.
    pub fn new(sensor: S, mut led0: L, mut led1: L) -> Self {
        led0.off();
        led1.off();

        Self {
            slider: Slider::new(sensor),
            leds: [led0, led1],
            state: FusionState::default(),
        }
    }

    /// Takes over the latest button levels, `pb0` first.
    pub fn set_buttons(&mut self, levels: [bool; 2]) {
        for id in ButtonId::ALL {
            let pressed = levels[id.index()];
            if self.state.buttons[id.index()] != pressed {
                debug!("{} {}", id, if pressed { "pressed" } else { "released" });
            }
        }
        self.state.buttons = levels;
    }

    /// Senses the slider, applies the decision table and drives the LEDs.
    pub fn refresh(&mut self) -> LedPattern {
        let slider = self.slider.sense();
        let [pb0, pb1] = self.state.buttons;
        let pattern = decide(pb0, pb1, slider);

        self.leds[0].set(pattern.led0);
        self.leds[1].set(pattern.led1);

        if pattern != self.state.leds {
            info!("leds {} (buttons {}, slider {})", pattern, self.state.buttons, slider);
        }
        self.state.slider = slider;
        self.state.leds = pattern;
        pattern
    }

    pub fn state(&self) -> FusionState {
        self.state
    }
}

/// One scheduling round of a strategy, for driving either one step-wise.
pub trait SchedulingStrategy {
    /// Returns the pattern written to the LEDs if this round refreshed them.
    fn step<S: TouchSensor, L: Led>(&mut self, controller: &mut Controller<S, L>) -> Option<LedPattern>;
}

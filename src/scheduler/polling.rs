//! Busy-wait paced polling of all inputs.

use super::{Controller, SchedulingStrategy};
use crate::config::FusionConfig;
use crate::fusion::{Buttons, LedPattern, TouchSensor};
use crate::hardware::traits::{Button, Led};
use crate::time::{Clock, busy_wait};

/// Sample, decide, drive, then block for one period.
pub struct Polling<'a, B, C: ?Sized> {
    buttons: Buttons<B>,
    clock: &'a C,
    period_ms: u32,
}

impl<'a, B: Button, C: Clock + ?Sized> Polling<'a, B, C> {
    pub fn new(buttons: Buttons<B>, clock: &'a C, config: FusionConfig) -> Self {
        Self {
            buttons,
            clock,
            period_ms: config.period_ms,
        }
    }

    /// One pass without the trailing delay.
    pub fn cycle<S: TouchSensor, L: Led>(&mut self, controller: &mut Controller<S, L>) -> LedPattern {
        controller.set_buttons(self.buttons.sample_all());
        controller.refresh()
    }

    pub fn run<S: TouchSensor, L: Led>(mut self, mut controller: Controller<S, L>) -> ! {
        info!("polling every {} ms", self.period_ms);
        loop {
            self.step(&mut controller);
        }
    }
}

impl<B: Button, C: Clock + ?Sized> SchedulingStrategy for Polling<'_, B, C> {
    fn step<S: TouchSensor, L: Led>(&mut self, controller: &mut Controller<S, L>) -> Option<LedPattern> {
        let pattern = self.cycle(controller);
        busy_wait(self.clock, self.period_ms);
        Some(pattern)
    }
}

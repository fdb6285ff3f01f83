//! Interrupt-driven scheduling: edge handlers latch button levels, the tick interrupt wakes the scheduler.

use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, RawMutex};
use embassy_sync::signal::Signal;

use super::{Controller, SchedulingStrategy};
use crate::config::FusionConfig;
use crate::fusion::{ButtonLevels, LedPattern, TouchSensor};
use crate::hardware::traits::Led;

/// Tick count handed from the tick interrupt to the scheduler.
///
/// Holds one value: a tick the scheduler has not taken yet is replaced by
/// the next one.
pub type TickSignal = Signal<CriticalSectionRawMutex, u32>;

/// Refreshes on period-boundary ticks using the latest latched button levels.
///
/// A boundary tick that is overwritten before the scheduler takes it (or a
/// count that skips a multiple of the period) skips that period's refresh;
/// the next multiple catches up. Button levels are never lost that way,
/// they live in [`ButtonLevels`] and only the latest one matters.
pub struct EventDriven<'a, M: RawMutex> {
    ticks: &'a Signal<M, u32>,
    buttons: &'a ButtonLevels,
    period_ms: u32,
}

impl<'a, M: RawMutex> EventDriven<'a, M> {
    pub fn new(ticks: &'a Signal<M, u32>, buttons: &'a ButtonLevels, config: FusionConfig) -> Self {
        Self {
            ticks,
            buttons,
            period_ms: config.period_ms,
        }
    }

    /// Handles the tick interrupt having reached `now`.
    pub fn on_tick<S: TouchSensor, L: Led>(
        &self,
        controller: &mut Controller<S, L>,
        now: u32,
    ) -> Option<LedPattern> {
        controller.set_buttons(self.buttons.snapshot());
        if self.is_period_boundary(now) {
            Some(controller.refresh())
        } else {
            None
        }
    }

    fn is_period_boundary(&self, now: u32) -> bool {
        now.checked_rem(self.period_ms).is_none_or(|r| r == 0)
    }

    /// Waits for ticks forever. The executor idles the core between them.
    pub async fn run<S: TouchSensor, L: Led>(self, mut controller: Controller<S, L>) -> ! {
        info!("event driven, refresh every {} ms", self.period_ms);
        loop {
            let now = self.ticks.wait().await;
            self.on_tick(&mut controller, now);
        }
    }
}

impl<M: RawMutex> SchedulingStrategy for EventDriven<'_, M> {
    /// Takes a pending tick if there is one, without waiting.
    fn step<S: TouchSensor, L: Led>(&mut self, controller: &mut Controller<S, L>) -> Option<LedPattern> {
        match self.ticks.try_take() {
            Some(now) => self.on_tick(controller, now),
            None => {
                controller.set_buttons(self.buttons.snapshot());
                None
            }
        }
    }
}

/// Latches the level of `button` into `levels` after every edge.
///
/// Only returns if waiting for an edge fails; the latched level then stays
/// at the last good sample.
#[cfg(feature = "async")]
pub async fn forward_button_edges<P>(
    mut button: crate::hardware::GpioButton<P>,
    id: crate::fusion::ButtonId,
    levels: &ButtonLevels,
) -> Result<core::convert::Infallible, P::Error>
where
    P: embedded_hal::digital::InputPin + embedded_hal_async::digital::Wait,
{
    use crate::hardware::traits::Button;

    loop {
        button.wait_for_edge().await?;
        levels.set(id, button.is_pressed());
    }
}

use crate::fusion::slider::{CHANNELS, TouchSensor};
use embedded_hal::digital::InputPin;

/// Four touch pads with digital, active-high outputs (TTP223 style modules).
///
/// A scan latches all pads at once so the four channels read by the slider
/// come from the same instant.
pub struct GpioTouchPads<P> {
    pads: [P; CHANNELS as usize],
    latched: u8,
}

impl<P: InputPin> GpioTouchPads<P> {
    pub fn new(pads: [P; CHANNELS as usize]) -> Self {
        Self { pads, latched: 0 }
    }
}

impl<P: InputPin> TouchSensor for GpioTouchPads<P> {
    fn scan(&mut self) {
        self.latched = 0;
        for (channel, pad) in self.pads.iter_mut().enumerate() {
            if pad.is_high().unwrap_or(false) {
                self.latched |= 1 << channel;
            }
        }
    }

    fn is_pressed(&self, channel: u8) -> bool {
        channel < CHANNELS && self.latched & (1 << channel) != 0
    }
}

use super::traits::Led;
use embedded_hal::digital::StatefulOutputPin;

/// Pin level that lights the LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    High,
    Low,
}

pub struct GpioLed<P> {
    pin: P,
    active: ActiveLevel,
}

impl<P: StatefulOutputPin> GpioLed<P> {
    pub fn new(pin: P, active: ActiveLevel) -> Self {
        Self { pin, active }
    }
}

impl<P: StatefulOutputPin> Led for GpioLed<P> {
    fn on(&mut self) {
        match self.active {
            ActiveLevel::High => self.pin.set_high().ok(),
            ActiveLevel::Low => self.pin.set_low().ok(),
        };
    }

    fn off(&mut self) {
        match self.active {
            ActiveLevel::High => self.pin.set_low().ok(),
            ActiveLevel::Low => self.pin.set_high().ok(),
        };
    }

    fn toggle(&mut self) {
        self.pin.toggle().ok();
    }
}

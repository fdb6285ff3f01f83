use super::traits::Button;
use embedded_hal::digital::InputPin;

/// Pushbutton wired to ground with a pull-up: pressed reads low.
pub struct GpioButton<P> {
    pin: P,
}

impl<P: InputPin> GpioButton<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: InputPin> Button for GpioButton<P> {
    fn is_pressed(&mut self) -> bool {
        // A failed read counts as released.
        self.pin.is_low().unwrap_or(false)
    }
}

#[cfg(feature = "async")]
impl<P: InputPin + embedded_hal_async::digital::Wait> GpioButton<P> {
    /// Waits for the next press or release edge.
    pub async fn wait_for_edge(&mut self) -> Result<(), P::Error> {
        self.pin.wait_for_any_edge().await.inspect_err(|_| {
            warn!("button edge wait failed");
        })
    }
}

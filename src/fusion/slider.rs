//! Four-pad touch slider reduced to a left/right/inactive position.

/// Number of pads on the slider, numbered left to right.
pub const CHANNELS: u8 = 4;

/// Capacitive sensor with a scan-then-read protocol.
pub trait TouchSensor {
    /// Starts and completes one sense cycle over all channels.
    fn scan(&mut self);

    /// Whether `channel` registered a touch in the last scan.
    fn is_pressed(&self, channel: u8) -> bool;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SliderPosition {
    Left,
    Right,
    /// Untouched, or touched on both halves at once.
    #[default]
    Inactive,
}

impl SliderPosition {
    /// Classifies raw pad states, pads 0 and 1 forming the left half.
    pub fn from_channels(pads: [bool; CHANNELS as usize]) -> Self {
        let left = pads[0] || pads[1];
        let right = pads[2] || pads[3];

        match (left, right) {
            (true, true) => Self::Inactive,
            (true, false) => Self::Left,
            (false, true) => Self::Right,
            (false, false) => Self::Inactive,
        }
    }
}

pub struct Slider<S> {
    sensor: S,
}

impl<S: TouchSensor> Slider<S> {
    pub fn new(sensor: S) -> Self {
        Self { sensor }
    }

    /// Runs a scan and recomputes the position from scratch.
    pub fn sense(&mut self) -> SliderPosition {
        self.sensor.scan();

        let mut pads = [false; CHANNELS as usize];
        for (channel, pad) in (0..CHANNELS).zip(pads.iter_mut()) {
            *pad = self.sensor.is_pressed(channel);
        }

        let position = SliderPosition::from_channels(pads);
        trace!("slider pads {} -> {}", pads, position);
        position
    }
}

#![allow(dead_code)]

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};
use touch_fusion::fusion::TouchSensor;
use touch_fusion::time::{Clock, TickCounter};

/// Input pin whose level the test controls through a shared handle.
#[derive(Clone, Default)]
pub struct FakeInput {
    pub high: Rc<Cell<bool>>,
}

impl FakeInput {
    pub fn new(high: bool) -> Self {
        Self {
            high: Rc::new(Cell::new(high)),
        }
    }
}

impl ErrorType for FakeInput {
    type Error = Infallible;
}

impl InputPin for FakeInput {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.high.get())
    }
}

/// Output pin that remembers its level and how often it was written.
#[derive(Clone, Default)]
pub struct FakeOutput {
    pub high: Rc<Cell<bool>>,
    pub writes: Rc<Cell<usize>>,
}

impl ErrorType for FakeOutput {
    type Error = Infallible;
}

impl OutputPin for FakeOutput {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.high.set(false);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.high.set(true);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

impl StatefulOutputPin for FakeOutput {
    fn is_set_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.high.get())
    }

    fn is_set_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.high.get())
    }
}

/// Touch sensor fed directly from an array of pad states. Clones share
/// the pad states, so a test can keep one to touch pads and count scans.
#[derive(Clone, Default)]
pub struct Pads {
    pub touched: Rc<Cell<[bool; 4]>>,
    latched: [bool; 4],
    pub scans: Rc<Cell<usize>>,
}

impl Pads {
    pub fn touching(touched: [bool; 4]) -> Self {
        let pads = Self::default();
        pads.touched.set(touched);
        pads
    }
}

impl TouchSensor for Pads {
    fn scan(&mut self) {
        self.latched = self.touched.get();
        self.scans.set(self.scans.get() + 1);
    }

    fn is_pressed(&self, channel: u8) -> bool {
        self.latched[channel as usize]
    }
}

/// Clock over a real [`TickCounter`] where one tick interrupt fires after
/// every read.
#[derive(Default)]
pub struct InterruptingClock {
    pub ticks: TickCounter,
    pub last_seen: Cell<u32>,
    pub reads: Cell<u32>,
}

impl Clock for InterruptingClock {
    fn now_ms(&self) -> u32 {
        let now = self.ticks.now();
        self.last_seen.set(now);
        self.reads.set(self.reads.get() + 1);
        self.ticks.tick();
        now
    }
}

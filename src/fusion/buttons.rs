//! The two pushbuttons as a single input source.

use core::cell::Cell;
use critical_section::Mutex;

use crate::hardware::traits::Button;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    Pb0,
    Pb1,
}

impl ButtonId {
    pub const ALL: [ButtonId; 2] = [ButtonId::Pb0, ButtonId::Pb1];

    pub const fn index(self) -> usize {
        match self {
            ButtonId::Pb0 => 0,
            ButtonId::Pb1 => 1,
        }
    }
}

pub struct Buttons<B> {
    buttons: [B; 2],
}

impl<B: Button> Buttons<B> {
    pub fn new(pb0: B, pb1: B) -> Self {
        Self { buttons: [pb0, pb1] }
    }

    /// Current level of one button, `true` while held down. No debouncing.
    pub fn sample(&mut self, id: ButtonId) -> bool {
        self.buttons[id.index()].is_pressed()
    }

    /// Samples both buttons, `pb0` first.
    pub fn sample_all(&mut self) -> [bool; 2] {
        ButtonId::ALL.map(|id| self.sample(id))
    }
}

/// Last level seen on each button, written from edge handlers.
///
/// Each write replaces the previous level, so a reader always gets the most
/// recent sample and no edge can be lost to a full buffer.
pub struct ButtonLevels {
    levels: Mutex<Cell<[bool; 2]>>,
}

impl ButtonLevels {
    pub const fn new() -> Self {
        Self {
            levels: Mutex::new(Cell::new([false; 2])),
        }
    }

    pub fn set(&self, id: ButtonId, pressed: bool) {
        critical_section::with(|cs| {
            let levels = self.levels.borrow(cs);
            let mut current = levels.get();
            current[id.index()] = pressed;
            levels.set(current);
        });
    }

    pub fn snapshot(&self) -> [bool; 2] {
        critical_section::with(|cs| self.levels.borrow(cs).get())
    }
}

impl Default for ButtonLevels {
    fn default() -> Self {
        Self::new()
    }
}

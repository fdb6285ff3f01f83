pub trait Led {
    fn on(&mut self);
    fn off(&mut self);
    fn toggle(&mut self);

    fn set(&mut self, lit: bool) {
        if lit { self.on() } else { self.off() }
    }
}

pub trait Button {
    fn is_pressed(&mut self) -> bool;
}

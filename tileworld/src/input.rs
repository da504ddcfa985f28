#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
    Jump,
    /// Wired up but unused by the game.
    Action,
}

impl Button {
    const fn mask(self) -> u8 {
        1 << self as u8
    }
}

/// The buttons held during one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonSet(u8);

impl ButtonSet {
    pub const EMPTY: ButtonSet = ButtonSet(0);

    pub const fn with(self, button: Button) -> ButtonSet {
        ButtonSet(self.0 | button.mask())
    }

    pub fn insert(&mut self, button: Button) {
        self.0 |= button.mask();
    }

    pub const fn contains(self, button: Button) -> bool {
        self.0 & button.mask() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

pub trait Buttons {
    fn is_held(&self, button: Button) -> bool;
    fn was_just_pressed(&self, button: Button) -> bool;
}

/// Button state sampled once per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonState {
    current: ButtonSet,
    previous: ButtonSet,
}

impl ButtonState {
    pub const fn new() -> Self {
        ButtonState {
            current: ButtonSet::EMPTY,
            previous: ButtonSet::EMPTY,
        }
    }

    pub fn poll(&mut self, held: ButtonSet) {
        self.previous = self.current;
        self.current = held;
    }
}

impl Buttons for ButtonState {
    fn is_held(&self, button: Button) -> bool {
        self.current.contains(button)
    }

    fn was_just_pressed(&self, button: Button) -> bool {
        self.current.contains(button) && !self.previous.contains(button)
    }
}

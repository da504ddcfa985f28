use embedded_hal::digital::v2::InputPin;
use rp_pico::hal::gpio::dynpin::DynPin;
use tileworld::input::{Button, ButtonSet};

/// One active-low button.
struct Key {
    pin: DynPin,
}

impl Key {
    fn new(mut pin: DynPin) -> Key {
        pin.into_pull_up_input();
        Key { pin }
    }

    fn is_held(&self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }
}

/// The buttons the game reads. The d-pad up/down and X/Y buttons are left
/// unconfigured.
pub struct Input {
    left: Key,
    right: Key,
    jump: Key,
    action: Key,
}

impl Input {
    pub fn new(left_pin: DynPin, right_pin: DynPin, a_pin: DynPin, b_pin: DynPin) -> Self {
        Input {
            left: Key::new(left_pin),
            right: Key::new(right_pin),
            jump: Key::new(a_pin),
            action: Key::new(b_pin),
        }
    }

    /// Reads every button once.
    pub fn sample(&self) -> ButtonSet {
        [
            (Button::Left, &self.left),
            (Button::Right, &self.right),
            (Button::Jump, &self.jump),
            (Button::Action, &self.action),
        ]
        .into_iter()
        .filter(|(_, key)| key.is_held())
        .fold(ButtonSet::EMPTY, |held, (button, _)| held.with(button))
    }
}

// This file is only compiled during tests

use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

thread_local! {
    static MOCK_PINS: RefCell<HashMap<u8, Level>> = RefCell::new(HashMap::new());
}

pub struct Gpio;

impl Gpio {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        Ok(Gpio)
    }

    pub fn get(&self, pin: u8) -> Result<Pin, Box<dyn Error>> {
        Ok(Pin { pin })
    }
}

pub struct Pin {
    pin: u8,
}

impl Pin {
    pub fn into_output(self) -> OutputPin {
        MOCK_PINS.with(|pins| {
            pins.borrow_mut().insert(self.pin, Level::Low);
        });
        OutputPin { pin: self.pin }
    }
}

pub struct OutputPin {
    pin: u8,
}

impl OutputPin {
    pub fn set_high(&mut self) {
        MOCK_PINS.with(|pins| {
            pins.borrow_mut().insert(self.pin, Level::High);
        });
    }

    pub fn set_low(&mut self) {
        MOCK_PINS.with(|pins| {
            pins.borrow_mut().insert(self.pin, Level::Low);
        });
    }
}

// test helper to inspect the last level written to a pin
pub fn get_mock_pin_level(pin: u8) -> Level {
    MOCK_PINS.with(|pins| *pins.borrow().get(&pin).unwrap_or(&Level::Low))
}

// test helper to reset all pins
pub fn reset_mock_pins() {
    MOCK_PINS.with(|pins| {
        pins.borrow_mut().clear();
    });
}

// This file is only compiled during tests

use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Pwm0,
    Pwm1,
}

#[derive(Debug, Clone, Copy)]
pub enum Polarity {
    Normal,
}

thread_local! {
    static MOCK_DUTY: RefCell<HashMap<Channel, f64>> = RefCell::new(HashMap::new());
    static MOCK_ENABLED: RefCell<HashMap<Channel, bool>> = RefCell::new(HashMap::new());
}

pub struct Pwm {
    channel: Channel,
}

impl Pwm {
    pub fn with_frequency(
        channel: Channel,
        _frequency: f64,
        duty_cycle: f64,
        _polarity: Polarity,
        enabled: bool,
    ) -> Result<Self, Box<dyn Error>> {
        MOCK_DUTY.with(|duty| {
            duty.borrow_mut().insert(channel, duty_cycle);
        });
        MOCK_ENABLED.with(|en| {
            en.borrow_mut().insert(channel, enabled);
        });
        Ok(Pwm { channel })
    }

    pub fn set_duty_cycle(&self, duty_cycle: f64) -> Result<(), Box<dyn Error>> {
        MOCK_DUTY.with(|duty| {
            duty.borrow_mut().insert(self.channel, duty_cycle);
        });
        Ok(())
    }

    pub fn disable(&self) -> Result<(), Box<dyn Error>> {
        MOCK_ENABLED.with(|en| {
            en.borrow_mut().insert(self.channel, false);
        });
        Ok(())
    }
}

// test helper to inspect the last duty cycle written to a channel
pub fn get_mock_duty_cycle(channel: Channel) -> f64 {
    MOCK_DUTY.with(|duty| *duty.borrow().get(&channel).unwrap_or(&0.0))
}

// test helper to reset all channels
pub fn reset_mock_pwm() {
    MOCK_DUTY.with(|duty| duty.borrow_mut().clear());
    MOCK_ENABLED.with(|en| en.borrow_mut().clear());
}

use std::error::Error;

// Use rppal in production
#[cfg(not(test))]
use rppal::gpio::{Gpio, OutputPin};
#[cfg(not(test))]
use rppal::pwm::{Channel, Polarity, Pwm};

// Mock GPIO and PWM for testing
#[cfg(test)]
use crate::mocks::mock_gpio::{Gpio, OutputPin};
#[cfg(test)]
use crate::mocks::mock_pwm::{Channel, Polarity, Pwm};

use crate::config::MOTOR_PWM_FREQUENCY_HZ;

/// One side of the drivetrain: two H-bridge direction pins plus a hardware
/// PWM channel on the enable input. The Pi exposes exactly two hardware PWM
/// channels, one per motor.
pub struct Motor {
    pin_a: OutputPin,
    pin_b: OutputPin,
    pwm: Pwm,
}

impl Motor {
    /// Claims the direction pins and the PWM channel, starting stopped.
    pub fn new(pin_a: u8, pin_b: u8, channel: Channel) -> Result<Self, Box<dyn Error>> {
        let gpio = Gpio::new()?;
        let pin_a = gpio.get(pin_a)?.into_output();
        let pin_b = gpio.get(pin_b)?.into_output();

        let pwm = Pwm::with_frequency(
            channel,
            MOTOR_PWM_FREQUENCY_HZ,
            0.0, // stopped until the first command
            Polarity::Normal,
            true,
        )?;

        Ok(Self { pin_a, pin_b, pwm })
    }

    /// Throttle between 0 and 255 for 0% and 100%.
    pub fn set_speed(&mut self, speed: u8) -> Result<(), Box<dyn Error>> {
        self.pwm.set_duty_cycle(f64::from(speed) / 255.0)?;
        Ok(())
    }

    /// true: forwards, false: backwards. The pins are driven
    /// complementarily so the H-bridge never sees both legs high.
    pub fn set_direction(&mut self, forward: bool) {
        if forward {
            self.pin_a.set_low();
            self.pin_b.set_high();
        } else {
            self.pin_a.set_high();
            self.pin_b.set_low();
        }
    }

    pub fn stop(&mut self) -> Result<(), Box<dyn Error>> {
        self.set_speed(0)
    }
}

impl Drop for Motor {
    fn drop(&mut self) {
        // Don't leave a wheel spinning if the controller goes away.
        let _ = self.pwm.disable();
    }
}

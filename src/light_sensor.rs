use std::error::Error;

use crate::adc::Mcp3008;

/// One reflectance sensor over one ADC channel, with its individual
/// black/white threshold and a low-pass filter smoothing the raw value.
pub struct LightSensor {
    adc: Mcp3008,
    channel: u8,
    threshold: f32,
    gain: f32,
    filtered: f32,
}

impl LightSensor {
    /// Opens the ADC and seeds the filter with the first raw sample so the
    /// estimate doesn't have to climb from zero.
    pub fn new(channel: u8, threshold: f32, gain: f32) -> Result<Self, Box<dyn Error>> {
        if gain <= 0.0 || gain >= 1.0 {
            return Err(format!("Filter gain must be in (0, 1), got {}", gain).into());
        }

        let mut adc = Mcp3008::new()?;
        let filtered = f32::from(adc.read(channel)?);

        Ok(Self {
            adc,
            channel,
            threshold,
            gain,
            filtered,
        })
    }

    /// Samples the channel and moves the internal estimate toward it, with
    /// the gain deciding how much closer. Essentially a proportional
    /// controller on the reading.
    pub fn update(&mut self) -> Result<(), Box<dyn Error>> {
        let raw = f32::from(self.adc.read(self.channel)?);
        self.filtered += (raw - self.filtered) * self.gain;
        Ok(())
    }

    /// Is the filtered reading below the threshold? (Is the sensor seeing
    /// black?) Pure; same answer until the next `update`.
    pub fn read(&self) -> bool {
        self.filtered < self.threshold
    }

    /// The raw internal filtered reading, for calibration.
    pub fn filtered_reading(&self) -> f32 {
        self.filtered
    }
}

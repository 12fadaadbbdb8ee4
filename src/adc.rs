use std::error::Error;

// Use rppal in production
#[cfg(not(test))]
use rppal::spi::{Bus, Mode, SlaveSelect, Spi};

// Mock SPI for testing
#[cfg(test)]
use crate::mocks::mock_spi::{Bus, Mode, SlaveSelect, Spi};

/// SPI clock for the MCP3008. The datasheet allows up to 1.35 MHz at 2.7 V,
/// which is what the sensor board runs at.
const SPI_CLOCK_HZ: u32 = 1_350_000;

/// The Pi has no analog inputs, so the light sensors hang off an MCP3008
/// 8-channel 10-bit ADC on SPI0. Readings are 0-1023, same range the
/// sensors were calibrated against.
pub struct Mcp3008 {
    spi: Spi,
}

impl Mcp3008 {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let spi = Spi::new(Bus::Spi0, SlaveSelect::Ss0, SPI_CLOCK_HZ, Mode::Mode0)?;
        Ok(Self { spi })
    }

    /// Single-ended conversion on one channel (0-7).
    pub fn read(&mut self, channel: u8) -> Result<u16, Box<dyn Error>> {
        if channel > 7 {
            return Err(format!("Invalid MCP3008 channel: {}", channel).into());
        }

        // Start bit, then single-ended mode + channel in the top nibble of
        // the second byte. The 10-bit result straddles the last two bytes.
        let write_buf = [0x01, (0x08 | channel) << 4, 0x00];
        let mut read_buf = [0u8; 3];
        self.spi.transfer(&mut read_buf, &write_buf)?;

        Ok((u16::from(read_buf[1] & 0x03) << 8) | u16::from(read_buf[2]))
    }
}

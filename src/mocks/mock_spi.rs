// This file is only compiled during tests

use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;

thread_local! {
    static MOCK_CHANNELS: RefCell<HashMap<u8, u16>> = RefCell::new(HashMap::new());
}

#[derive(Debug, Clone, Copy)]
pub enum Bus {
    Spi0,
}

#[derive(Debug, Clone, Copy)]
pub enum SlaveSelect {
    Ss0,
}

#[derive(Debug, Clone, Copy)]
pub enum Mode {
    Mode0,
}

pub struct Spi;

impl Spi {
    pub fn new(
        _bus: Bus,
        _slave_select: SlaveSelect,
        _clock_speed: u32,
        _mode: Mode,
    ) -> Result<Self, Box<dyn Error>> {
        Ok(Spi)
    }

    /// Answers an MCP3008 conversion frame: the channel is in the upper
    /// nibble of the second written byte, the 10-bit result comes back in
    /// the last two read bytes.
    pub fn transfer(
        &mut self,
        read_buffer: &mut [u8],
        write_buffer: &[u8],
    ) -> Result<usize, Box<dyn Error>> {
        let channel = (write_buffer[1] >> 4) & 0x07;
        // Unset channels read fully bright (bare floor).
        let value =
            MOCK_CHANNELS.with(|channels| *channels.borrow().get(&channel).unwrap_or(&1023));

        read_buffer[0] = 0;
        read_buffer[1] = (value >> 8) as u8 & 0x03;
        read_buffer[2] = value as u8;

        Ok(read_buffer.len())
    }
}

// test helper to set the raw reading of one ADC channel
pub fn set_mock_channel(channel: u8, value: u16) {
    MOCK_CHANNELS.with(|channels| {
        channels.borrow_mut().insert(channel, value);
    });
}

// test helper to reset all channels
pub fn reset_mock_channels() {
    MOCK_CHANNELS.with(|channels| {
        channels.borrow_mut().clear();
    });
}

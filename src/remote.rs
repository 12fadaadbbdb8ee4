use std::error::Error;
use std::time::{Duration, Instant};

// Use rppal in production
#[cfg(not(test))]
use rppal::uart::{Parity, Uart};

// Mock UART for testing
#[cfg(test)]
use crate::mocks::mock_uart::{Parity, Uart};

use crate::config::{REMOTE_BAUD_RATE, REMOTE_TIMEOUT_MS};

/// Joystick direction from the remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Forwards,
    Right,
    Backwards,
}

/// Last decoded state of the handheld remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteState {
    pub speed: u8, // 0-7
    pub direction: Direction,
    pub fire: bool,
    pub manual: bool,
    pub drive: bool,
    pub connected: bool,
}

impl Default for RemoteState {
    fn default() -> Self {
        Self {
            speed: 0,
            direction: Direction::Forwards,
            fire: false,
            manual: false,
            drive: false,
            connected: false,
        }
    }
}

/// Receives remote state over the Bluetooth module on the primary UART.
/// The whole controller state arrives packed into a single byte per frame.
pub struct Remote {
    uart: Uart,
    state: RemoteState,
    last_seen: Instant,
    timeout: Duration,
}

impl Remote {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        Self::with_timeout(Duration::from_millis(REMOTE_TIMEOUT_MS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, Box<dyn Error>> {
        let mut uart = Uart::new(REMOTE_BAUD_RATE, Parity::None, 8, 1)?;
        // Non-blocking reads; the control loop must never stall on the radio.
        uart.set_read_mode(0, Duration::ZERO)?;

        Ok(Self {
            uart,
            state: RemoteState::default(),
            last_seen: Instant::now(),
            timeout,
        })
    }

    /// Drains any pending frames (the newest wins) and checks the
    /// connection timeout. Called once per control tick.
    pub fn tick(&mut self) -> Result<(), Box<dyn Error>> {
        let mut byte = [0u8; 1];
        while self.uart.read(&mut byte)? == 1 {
            self.state = parse_control_byte(byte[0]);
            self.state.connected = true;
            self.last_seen = Instant::now();
        }

        if self.state.connected && self.last_seen.elapsed() > self.timeout {
            eprintln!(
                "⚠ Remote has not been seen for over {} ms",
                self.timeout.as_millis()
            );
            self.state.connected = false;
        }

        Ok(())
    }

    /// A copy of the last known remote state.
    pub fn state(&self) -> RemoteState {
        self.state
    }
}

/// Unpacks one control frame. Layout, LSB first: drive, fire, manual,
/// speed (3 bits), direction (2 bits).
fn parse_control_byte(byte: u8) -> RemoteState {
    let direction = match (byte >> 6) & 0b11 {
        0 => Direction::Left,
        1 => Direction::Forwards,
        2 => Direction::Right,
        _ => Direction::Backwards,
    };

    RemoteState {
        drive: byte & 0b1 == 1,
        fire: (byte >> 1) & 0b1 == 1,
        manual: (byte >> 2) & 0b1 == 1,
        speed: (byte >> 3) & 0b111,
        direction,
        connected: false,
    }
}

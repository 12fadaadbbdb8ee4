// This file is only compiled during tests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::error::Error;
use std::time::Duration;

thread_local! {
    static MOCK_RX: RefCell<VecDeque<u8>> = RefCell::new(VecDeque::new());
}

#[derive(Debug, Clone, Copy)]
pub enum Parity {
    None,
}

pub struct Uart;

impl Uart {
    pub fn new(
        _baud_rate: u32,
        _parity: Parity,
        _data_bits: u8,
        _stop_bits: u8,
    ) -> Result<Self, Box<dyn Error>> {
        Ok(Uart)
    }

    pub fn set_read_mode(
        &mut self,
        _min_length: u8,
        _timeout: Duration,
    ) -> Result<(), Box<dyn Error>> {
        Ok(())
    }

    pub fn read(&mut self, buffer: &mut [u8]) -> Result<usize, Box<dyn Error>> {
        MOCK_RX.with(|rx| {
            let mut rx = rx.borrow_mut();
            let mut count = 0;
            for slot in buffer.iter_mut() {
                match rx.pop_front() {
                    Some(byte) => {
                        *slot = byte;
                        count += 1;
                    }
                    None => break,
                }
            }
            Ok(count)
        })
    }
}

// test helper to queue bytes as if the remote sent them
pub fn push_mock_rx(bytes: &[u8]) {
    MOCK_RX.with(|rx| {
        rx.borrow_mut().extend(bytes.iter().copied());
    });
}

// test helper to drop any queued bytes
pub fn reset_mock_rx() {
    MOCK_RX.with(|rx| {
        rx.borrow_mut().clear();
    });
}

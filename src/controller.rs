/// One tick's worth of drive output: throttle (0-255) and direction
/// (true = forwards) per wheel. Immutable snapshot once returned; the motor
/// driver applies direction before speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlCommand {
    pub left_speed: u8,
    pub right_speed: u8,
    pub left_forward: bool,
    pub right_forward: bool,
}

impl ControlCommand {
    /// Both wheels stopped.
    pub fn stop() -> Self {
        Self {
            left_speed: 0,
            right_speed: 0,
            left_forward: true,
            right_forward: true,
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.left_speed == 0 && self.right_speed == 0
    }
}

impl Default for ControlCommand {
    fn default() -> Self {
        Self::stop()
    }
}

/// Anything that can produce a drive command on demand. The main loop polls
/// exactly one implementation per tick; which one (manual or autonomy) is
/// external arbitration.
pub trait Controller {
    fn update(&mut self) -> ControlCommand;
}

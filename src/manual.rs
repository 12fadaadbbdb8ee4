use crate::controller::{ControlCommand, Controller};
use crate::remote::{Direction, RemoteState};

/// Throttle ceiling going straight ahead.
const MAX_FORWARD_SPEED: u8 = 120;
/// Outer/inner wheel ceilings while turning.
const MAX_OUTER_TURN_SPEED: u8 = 160;
const MAX_INNER_TURN_SPEED: u8 = 80;
/// Reversing is a fixed crawl.
const REVERSE_SPEED: u8 = 100;

/// Turns remote input into drive commands. The second `Controller`
/// implementation; the main loop picks between this and `Autonomy`.
pub struct ManualControl {
    input: RemoteState,
}

impl ManualControl {
    pub fn new() -> Self {
        Self {
            input: RemoteState::default(),
        }
    }

    /// Latches the remote state this tick's command is computed from.
    pub fn set_input(&mut self, input: RemoteState) {
        self.input = input;
    }
}

impl Default for ManualControl {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for ManualControl {
    fn update(&mut self) -> ControlCommand {
        // Dead-man: no drive button, no motion.
        if !self.input.drive {
            return ControlCommand::stop();
        }

        let speed = self.input.speed;
        match self.input.direction {
            Direction::Forwards => ControlCommand {
                left_speed: scale_speed(speed, MAX_FORWARD_SPEED),
                right_speed: scale_speed(speed, MAX_FORWARD_SPEED),
                left_forward: true,
                right_forward: true,
            },
            Direction::Backwards => ControlCommand {
                left_speed: REVERSE_SPEED,
                right_speed: REVERSE_SPEED,
                left_forward: false,
                right_forward: false,
            },
            Direction::Left => ControlCommand {
                left_speed: scale_speed(speed, MAX_INNER_TURN_SPEED),
                right_speed: scale_speed(speed, MAX_OUTER_TURN_SPEED),
                left_forward: true,
                right_forward: true,
            },
            Direction::Right => ControlCommand {
                left_speed: scale_speed(speed, MAX_OUTER_TURN_SPEED),
                right_speed: scale_speed(speed, MAX_INNER_TURN_SPEED),
                left_forward: true,
                right_forward: true,
            },
        }
    }
}

/// Maps the remote's 0-7 speed notches linearly onto 0..=max.
fn scale_speed(notch: u8, max: u8) -> u8 {
    (u16::from(notch.min(7)) * u16::from(max) / 7) as u8
}

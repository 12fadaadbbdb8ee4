use std::error::Error;

use crate::clock::{Clock, MonotonicClock};
use crate::config::{
    FORWARD_SPEED, LINE_LOST_DEBOUNCE_MS, SEARCH_KICK_MS, SEARCH_RETURN_MS, SEARCH_SPEED,
    SEARCH_SWEEP_MS, SEARCH_TRIES_PER_LEVEL, TIGHT_SPEED, TURN_SPEED,
};
use crate::controller::{ControlCommand, Controller};
use crate::light_sensor::LightSensor;

/// Which behavior owns command production this tick. Exactly one governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Following,
    Searching,
}

/// Sub-phase of the lost-line sweep. `Init` is the single entry tick that
/// resets the escalation counters; the rest run on elapsed-time transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SweepPhase {
    Init,
    Kick,
    SweepOut,
    SweepBack,
    Return,
}

/// The line-following controller. Owns the four floor sensors and decides a
/// drive command per tick: steer along the line while at least one sensor
/// sees it, dead-reckon briefly when blind, and run a widening rotational
/// sweep once the line is definitively lost.
pub struct Autonomy<C: Clock = MonotonicClock> {
    left: LightSensor,
    middle: LightSensor,
    right: LightSensor,
    bottom: LightSensor,
    clock: C,

    mode: Mode,
    /// Last computed steering bias, -2..=2. Persists across ticks where no
    /// sensor sees the line so the robot keeps steering toward where the
    /// line went.
    turn: i8,
    /// Timestamp of the first fully-blind tick, while following. None when
    /// any sensor sees the line.
    countdown_started: Option<u64>,

    phase: SweepPhase,
    phase_entered_ms: u64,
    /// Sweep cycles completed at the current escalation level, 1-based.
    sweep_try: u8,
    /// Multiplies the sweep leg duration; grows by one every
    /// `SEARCH_TRIES_PER_LEVEL` unsuccessful cycles.
    time_multiplier: u32,
}

impl Autonomy<MonotonicClock> {
    pub fn new(
        left: LightSensor,
        middle: LightSensor,
        right: LightSensor,
        bottom: LightSensor,
    ) -> Self {
        Self::with_clock(left, middle, right, bottom, MonotonicClock::new())
    }
}

impl<C: Clock> Autonomy<C> {
    pub fn with_clock(
        left: LightSensor,
        middle: LightSensor,
        right: LightSensor,
        bottom: LightSensor,
        clock: C,
    ) -> Self {
        Self {
            left,
            middle,
            right,
            bottom,
            clock,
            mode: Mode::Following,
            turn: 0,
            countdown_started: None,
            phase: SweepPhase::Init,
            phase_entered_ms: 0,
            sweep_try: 1,
            time_multiplier: 1,
        }
    }

    /// Refreshes all four sensor filters from the live channels. Called once
    /// per tick by the main loop, before the active controller is polled.
    pub fn refresh_sensors(&mut self) -> Result<(), Box<dyn Error>> {
        self.left.update()?;
        self.middle.update()?;
        self.right.update()?;
        self.bottom.update()?;
        Ok(())
    }

    /// Runs each tick while the robot believes it is on the line.
    fn follow(&mut self, left: bool, middle: bool, right: bool, bottom: bool) -> ControlCommand {
        if left || middle || right {
            self.turn = compute_turn(left, middle, right);
            self.countdown_started = None;
        } else if !bottom {
            // Fully blind. Don't give up immediately; line gaps and seams
            // read as a brief blank.
            let now = self.clock.now_ms();
            let started = *self.countdown_started.get_or_insert(now);
            if now - started >= LINE_LOST_DEBOUNCE_MS {
                self.mode = Mode::Searching;
                self.phase = SweepPhase::Init;
                self.countdown_started = None;
                return ControlCommand::stop();
            }
        } else {
            // Only the bottom sensor sees the line; keep the last steering
            // decision and stop any pending countdown.
            self.countdown_started = None;
        }

        turn_command(self.turn)
    }

    /// Runs each tick once the line has been declared lost. Rotates in
    /// place, alternating direction with a widening sweep, until one of the
    /// outer sensors picks the line back up.
    ///
    /// The bottom reading is accepted but not consulted; earlier firmware
    /// used it to spot the line before the outer sensors did.
    fn search(
        &mut self,
        left: bool,
        middle: bool,
        right: bool,
        _bottom: bool,
    ) -> ControlCommand {
        if left || middle || right {
            // Reacquired. Stop this tick; follow logic takes over next tick.
            self.mode = Mode::Following;
            return ControlCommand::stop();
        }

        let now = self.clock.now_ms();

        if self.phase == SweepPhase::Init {
            self.sweep_try = 1;
            self.time_multiplier = 1;
            self.phase = SweepPhase::Kick;
            self.phase_entered_ms = now;
        }

        // SweepOut rotates against the kick direction; everything else spins
        // with it.
        let command = match self.phase {
            SweepPhase::SweepOut => spin(false),
            _ => spin(true),
        };

        let sweep_ms = SEARCH_SWEEP_MS * u64::from(self.time_multiplier);
        let elapsed = now - self.phase_entered_ms;
        match self.phase {
            SweepPhase::Kick if elapsed >= SEARCH_KICK_MS => {
                self.enter_phase(SweepPhase::SweepOut, now);
            }
            SweepPhase::SweepOut if elapsed >= sweep_ms => {
                self.enter_phase(SweepPhase::SweepBack, now);
            }
            SweepPhase::SweepBack if elapsed >= sweep_ms => {
                self.enter_phase(SweepPhase::Return, now);
            }
            SweepPhase::Return if elapsed >= SEARCH_RETURN_MS => {
                if self.sweep_try >= SEARCH_TRIES_PER_LEVEL {
                    self.time_multiplier += 1;
                    self.sweep_try = 1;
                } else {
                    self.sweep_try += 1;
                }
                self.enter_phase(SweepPhase::SweepOut, now);
            }
            _ => {}
        }

        command
    }

    fn enter_phase(&mut self, phase: SweepPhase, now: u64) {
        self.phase = phase;
        self.phase_entered_ms = now;
    }
}

impl<C: Clock> Controller for Autonomy<C> {
    /// Reads all four sensors exactly once, so both behaviors see the same
    /// instant-in-time snapshot, then dispatches on the current mode.
    fn update(&mut self) -> ControlCommand {
        let left = self.left.read();
        let middle = self.middle.read();
        let right = self.right.read();
        let bottom = self.bottom.read();

        match self.mode {
            Mode::Searching => self.search(left, middle, right, bottom),
            Mode::Following => self.follow(left, middle, right, bottom),
        }
    }
}

/// Quantizes the three forward sensors into a steering bias of -2..=2.
/// Outer sensors pull the bias their way; the middle sensor halves it,
/// since seeing the line under the middle means the robot is closer to
/// centered than the outer hit alone suggests.
fn compute_turn(left: bool, middle: bool, right: bool) -> i8 {
    let mut bias = 0.0f32;
    if left {
        bias -= 1.0;
    }
    if right {
        bias += 1.0;
    }
    if middle {
        bias /= 2.0;
    }
    (bias * 2.0) as i8
}

/// Looks up motor speeds and directions for a steering bias. A mild turn
/// keeps the trailing wheel at a third throttle so the robot still makes
/// forward progress; a sharp turn pivots both wheels in opposition.
fn turn_command(turn: i8) -> ControlCommand {
    match turn {
        -2 => ControlCommand {
            left_speed: TIGHT_SPEED,
            right_speed: TIGHT_SPEED,
            left_forward: false,
            right_forward: true,
        },
        -1 => ControlCommand {
            left_speed: TURN_SPEED / 3,
            right_speed: TURN_SPEED,
            left_forward: false,
            right_forward: true,
        },
        0 => ControlCommand {
            left_speed: FORWARD_SPEED,
            right_speed: FORWARD_SPEED,
            left_forward: true,
            right_forward: true,
        },
        1 => ControlCommand {
            left_speed: TURN_SPEED,
            right_speed: TURN_SPEED / 3,
            left_forward: true,
            right_forward: false,
        },
        2 => ControlCommand {
            left_speed: TIGHT_SPEED,
            right_speed: TIGHT_SPEED,
            left_forward: true,
            right_forward: false,
        },
        _ => ControlCommand::stop(),
    }
}

/// Rotate in place at sweep speed. true spins with the kick direction
/// (left wheel forward), false against it.
fn spin(clockwise: bool) -> ControlCommand {
    ControlCommand {
        left_speed: SEARCH_SPEED,
        right_speed: SEARCH_SPEED,
        left_forward: clockwise,
        right_forward: !clockwise,
    }
}

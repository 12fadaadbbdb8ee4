// ** SENSOR CONFIGURATION ** //

/// MCP3008 channel assignments for the four light sensors.
/// The sensors point at the floor; left/middle/right sit ahead of the
/// wheel axis, bottom sits between the wheels.
pub const SENSOR_LEFT_CHANNEL: u8 = 0;
pub const SENSOR_MIDDLE_CHANNEL: u8 = 1;
pub const SENSOR_RIGHT_CHANNEL: u8 = 2;
pub const SENSOR_BOTTOM_CHANNEL: u8 = 3;

/// Black/white threshold per sensor, in raw ADC counts (0-1023).
/// A filtered reading BELOW the threshold means the sensor sees the line.
/// Obtained with the `calibrate` binary: hold each sensor over the tape and
/// over bare floor and pick a value between the two plateaus.
pub const SENSOR_LEFT_THRESHOLD: f32 = 500.0;
pub const SENSOR_MIDDLE_THRESHOLD: f32 = 500.0;
pub const SENSOR_RIGHT_THRESHOLD: f32 = 500.0;
pub const SENSOR_BOTTOM_THRESHOLD: f32 = 500.0;

/// Low-pass filter gain, 0 < gain < 1. Higher reacts faster, lower smooths
/// more. 0.5 settles within a few ticks at 50 Hz while still flattening
/// single-sample glints.
pub const SENSOR_FILTER_GAIN: f32 = 0.5;

// ** MOTOR CONFIGURATION ** //

/// H-bridge direction pins (BCM numbering).
pub const LEFT_MOTOR_PIN_A: u8 = 5;
pub const LEFT_MOTOR_PIN_B: u8 = 6;
pub const RIGHT_MOTOR_PIN_A: u8 = 16;
pub const RIGHT_MOTOR_PIN_B: u8 = 20;

/// Motor PWM frequency (Hz). The two hardware PWM channels on
/// GPIO 18 (PWM0) and GPIO 19 (PWM1) drive the enable inputs.
pub const MOTOR_PWM_FREQUENCY_HZ: f64 = 1000.0;

// ** FOLLOW MODE ** //

/// Straight-line cruise speed (0-255 throttle).
pub const FORWARD_SPEED: u8 = 80;
/// Leading-wheel speed during a mild (turn = ±1) correction.
pub const TURN_SPEED: u8 = 90;
/// Both-wheel speed during a sharp (turn = ±2) pivot.
pub const TIGHT_SPEED: u8 = 90;

/// How long all four sensors must stay blank before the line is declared
/// lost and the controller switches to search mode (ms).
pub const LINE_LOST_DEBOUNCE_MS: u64 = 1000;

// ** SEARCH MODE ** //

/// Rotation speed while sweeping for the line (0-255 throttle).
pub const SEARCH_SPEED: u8 = 80;
/// Initial kick before the timed sweep starts (ms).
pub const SEARCH_KICK_MS: u64 = 400;
/// Base duration of one sweep leg; multiplied by the escalation level (ms).
pub const SEARCH_SWEEP_MS: u64 = 1000;
/// Return spin at the end of a sweep cycle (ms).
pub const SEARCH_RETURN_MS: u64 = 200;
/// Full sweep cycles at one escalation level before the sweep widens.
pub const SEARCH_TRIES_PER_LEVEL: u8 = 8;

// ** REMOTE CONFIGURATION ** //

/// Baud rate of the HC-05 Bluetooth module on the primary UART.
pub const REMOTE_BAUD_RATE: u32 = 115_200;
/// Declare the remote disconnected after this long without a frame (ms).
pub const REMOTE_TIMEOUT_MS: u64 = 500;

// ** MAIN CONFIGURATION ** //

/// Control loop period (ms). 50 Hz gives the debounce and sweep timers
/// 20 ms resolution, well under the shortest 200 ms phase.
pub const TICK_INTERVAL_MS: u64 = 20;

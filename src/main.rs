use std::thread;
use std::time::Duration;

use rppal::pwm::Channel;

use line_rs::autonomy::Autonomy;
use line_rs::config::{
    LEFT_MOTOR_PIN_A, LEFT_MOTOR_PIN_B, RIGHT_MOTOR_PIN_A, RIGHT_MOTOR_PIN_B,
    SENSOR_BOTTOM_CHANNEL, SENSOR_BOTTOM_THRESHOLD, SENSOR_FILTER_GAIN, SENSOR_LEFT_CHANNEL,
    SENSOR_LEFT_THRESHOLD, SENSOR_MIDDLE_CHANNEL, SENSOR_MIDDLE_THRESHOLD, SENSOR_RIGHT_CHANNEL,
    SENSOR_RIGHT_THRESHOLD, TICK_INTERVAL_MS,
};
use line_rs::controller::Controller;
use line_rs::light_sensor::LightSensor;
use line_rs::manual::ManualControl;
use line_rs::motor::Motor;
use line_rs::remote::Remote;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Starting line follower...");

    let left = LightSensor::new(SENSOR_LEFT_CHANNEL, SENSOR_LEFT_THRESHOLD, SENSOR_FILTER_GAIN)?;
    let middle = LightSensor::new(
        SENSOR_MIDDLE_CHANNEL,
        SENSOR_MIDDLE_THRESHOLD,
        SENSOR_FILTER_GAIN,
    )?;
    let right = LightSensor::new(
        SENSOR_RIGHT_CHANNEL,
        SENSOR_RIGHT_THRESHOLD,
        SENSOR_FILTER_GAIN,
    )?;
    let bottom = LightSensor::new(
        SENSOR_BOTTOM_CHANNEL,
        SENSOR_BOTTOM_THRESHOLD,
        SENSOR_FILTER_GAIN,
    )?;
    println!("✓ Light sensors initialized (MCP3008 channels 0-3)");

    let mut left_motor = Motor::new(LEFT_MOTOR_PIN_A, LEFT_MOTOR_PIN_B, Channel::Pwm0)?;
    let mut right_motor = Motor::new(RIGHT_MOTOR_PIN_A, RIGHT_MOTOR_PIN_B, Channel::Pwm1)?;
    println!("✓ Motors initialized");

    let mut remote = Remote::new()?;
    println!("✓ Remote link open");

    let mut autonomy = Autonomy::new(left, middle, right, bottom);
    let mut manual = ManualControl::new();

    println!("\nControl loop started ({} ms tick)\n", TICK_INTERVAL_MS);

    let mut manual_active = false;

    loop {
        remote.tick()?;
        autonomy.refresh_sensors()?;

        let state = remote.state();
        manual.set_input(state);

        // Arbitration: the remote takes over while it is connected and the
        // manual switch is held; otherwise the robot follows the line.
        let take_manual = state.connected && state.manual;
        if take_manual != manual_active {
            manual_active = take_manual;
            if manual_active {
                println!("→ Manual control");
            } else {
                println!("→ Autonomous control");
            }
        }

        let active: &mut dyn Controller = if manual_active {
            &mut manual
        } else {
            &mut autonomy
        };
        let command = active.update();

        // Direction before speed, so a reversal never runs at full throttle
        // through the flip.
        left_motor.set_direction(command.left_forward);
        right_motor.set_direction(command.right_forward);
        left_motor.set_speed(command.left_speed)?;
        right_motor.set_speed(command.right_speed)?;

        thread::sleep(Duration::from_millis(TICK_INTERVAL_MS));
    }
}

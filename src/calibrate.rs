use std::thread;
use std::time::Duration;

use line_rs::config::{
    SENSOR_BOTTOM_CHANNEL, SENSOR_BOTTOM_THRESHOLD, SENSOR_FILTER_GAIN, SENSOR_LEFT_CHANNEL,
    SENSOR_LEFT_THRESHOLD, SENSOR_MIDDLE_CHANNEL, SENSOR_MIDDLE_THRESHOLD, SENSOR_RIGHT_CHANNEL,
    SENSOR_RIGHT_THRESHOLD,
};
use line_rs::light_sensor::LightSensor;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║     Light Sensor Calibration Tool                    ║");
    println!("╚══════════════════════════════════════════════════════╝\n");

    println!("Instructions:");
    println!("1. Place the robot so a sensor sits over the LINE (black tape)");
    println!("2. Note the filtered reading, then move it over BARE FLOOR");
    println!("3. Pick a threshold between the two plateaus");
    println!("4. Repeat for each sensor and update config.rs");
    println!("5. Press Ctrl+C when done\n");

    let mut sensors = [
        LightSensor::new(SENSOR_LEFT_CHANNEL, SENSOR_LEFT_THRESHOLD, SENSOR_FILTER_GAIN)?,
        LightSensor::new(
            SENSOR_MIDDLE_CHANNEL,
            SENSOR_MIDDLE_THRESHOLD,
            SENSOR_FILTER_GAIN,
        )?,
        LightSensor::new(
            SENSOR_RIGHT_CHANNEL,
            SENSOR_RIGHT_THRESHOLD,
            SENSOR_FILTER_GAIN,
        )?,
        LightSensor::new(
            SENSOR_BOTTOM_CHANNEL,
            SENSOR_BOTTOM_THRESHOLD,
            SENSOR_FILTER_GAIN,
        )?,
    ];

    println!(
        "{:^10} | {:^10} | {:^10} | {:^10}",
        "left", "middle", "right", "bottom"
    );
    println!("{:-<10}-+-{:-<10}-+-{:-<10}-+-{:-<10}", "", "", "", "");

    loop {
        for sensor in sensors.iter_mut() {
            sensor.update()?;
        }

        // B marks a sensor currently seeing black with the configured
        // thresholds.
        let cell = |sensor: &LightSensor| {
            format!(
                "{:>6.0} {}",
                sensor.filtered_reading(),
                if sensor.read() { "B" } else { "." }
            )
        };
        println!(
            "{:^10} | {:^10} | {:^10} | {:^10}",
            cell(&sensors[0]),
            cell(&sensors[1]),
            cell(&sensors[2]),
            cell(&sensors[3])
        );

        thread::sleep(Duration::from_millis(100));
    }
}

pub mod adc;
pub mod autonomy;
pub mod clock;
pub mod config;
pub mod controller;
pub mod light_sensor;
pub mod manual;
pub mod motor;
pub mod remote;

// Re-export commonly used types
pub use autonomy::Autonomy;
pub use controller::{ControlCommand, Controller};
pub use light_sensor::LightSensor;
pub use motor::Motor;
pub use remote::Remote;

#[cfg(test)]
pub(crate) mod mocks;

pub mod control;
pub mod mem;
pub mod bus;

pub mod pipeline;
pub mod config;
pub mod controller;

pub mod error;
pub mod stimulus;

pub use controller::{MemController, Outputs, Pins};
pub use control::{Bank, ControlFlags, ControlWord};

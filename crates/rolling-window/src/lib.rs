//! Rolling Window
//!
//! Provides a fixed-capacity FIFO buffer of the most recent readings of a sensor.

mod summation;
mod window;

pub use window::{RollingWindow, DEFAULT_CAPACITY};

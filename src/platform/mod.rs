//! Platform abstraction layer
//!
//! The environment the simulation samples once per frame:
//! - Time (elapsed seconds since the previous frame)
//! - Input (which controls are held)
//! - Scripted demo input for headless runs

pub mod demo;
pub mod input;
pub mod time;

pub use demo::DemoInput;
pub use input::{Control, InputSource, KeyboardState, sample};
pub use time::{Clock, FixedClock, SystemClock};

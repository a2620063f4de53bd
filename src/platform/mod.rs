//! Platform abstraction layer
//!
//! Handles the native boundary for:
//! - Input events (edge latching, scripted and autopilot sources)
//! - Time/frame pacing

pub mod input;
pub mod time;

pub use input::{Autopilot, HeldKeys, InputSource, KeyLatch, ScriptedInput};
pub use time::{FixedRateClock, FrameClock, ManualClock};

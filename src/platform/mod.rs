//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Time (monotonic clock for survival timing)
//! - Input (raw key state polled into a per-frame snapshot)

pub mod input;
pub mod time;

pub use input::{InputState, Key};
pub use time::{Clock, ManualClock, MonotonicClock, format_time};

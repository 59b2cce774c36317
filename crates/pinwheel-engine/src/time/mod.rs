//! Time subsystem.
//!
//! Provides stable, testable frame timing utilities without coupling to the runtime.
//! Intended usage:
//! - one `FrameClock` per animated scene (or per render loop)
//! - call `tick()` once per presented frame to obtain `FrameTime`
//! - inject a `TimeSource` where determinism matters (tests, replays)

mod frame_clock;
mod source;

pub use frame_clock::{FrameClock, FrameTime};
pub use source::{ManualTime, MonotonicTime, TimeSource, WallTime};

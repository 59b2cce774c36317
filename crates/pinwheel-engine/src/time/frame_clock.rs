use std::time::Duration;

use super::source::{MonotonicTime, TimeSource};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Time elapsed since the previous tick (or since construction / reset), in seconds.
    pub dt: f32,

    /// Source timestamp taken at the tick.
    pub now: f64,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped:
/// - a source that steps backwards (wall clock adjusted) yields `dt = 0`
/// - long stalls (debugger, minimized window) are capped at `dt_max`
///
/// The default minimum is zero so the very first tick after construction may
/// legitimately report `dt = 0`.
#[derive(Debug, Clone)]
pub struct FrameClock<T: TimeSource = MonotonicTime> {
    source: T,
    last: f64,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock<MonotonicTime> {
    /// Creates a monotonic clock with default clamps.
    pub fn new() -> Self {
        Self::with_source(MonotonicTime::new())
    }
}

impl Default for FrameClock<MonotonicTime> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimeSource> FrameClock<T> {
    /// Creates a clock reading from `source`, with default clamps.
    pub fn with_source(source: T) -> Self {
        Self::with_clamps(source, Duration::ZERO, Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(source: T, dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        let last = source.now();
        Self {
            source,
            last,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Resets the clock baseline.
    ///
    /// Useful after surface reconfigure events or when resuming from suspension.
    pub fn reset(&mut self) {
        self.last = self.source.now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = self.source.now();
        let raw = now - self.last;

        let dt = if raw.is_nan() {
            log::warn!("time source returned {now} (last {}); using dt = 0", self.last);
            0.0
        } else if raw < 0.0 {
            log::warn!("time source went backwards by {:.3}s; using dt = 0", -raw);
            0.0
        } else {
            raw.clamp(self.dt_min.as_secs_f64(), self.dt_max.as_secs_f64())
        };

        // A NaN reading would poison every later delta; keep the old baseline.
        if !now.is_nan() {
            self.last = now;
        }

        let ft = FrameTime {
            dt: dt as f32,
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Instant, UNIX_EPOCH};

/// Source of timestamps for a `FrameClock`.
///
/// Timestamps are seconds since an arbitrary origin that stays fixed for the
/// lifetime of the source. Only differences between readings are meaningful.
pub trait TimeSource {
    fn now(&self) -> f64;
}

impl<T: TimeSource + ?Sized> TimeSource for Box<T> {
    #[inline]
    fn now(&self) -> f64 {
        (**self).now()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    #[inline]
    fn now(&self) -> f64 {
        (**self).now()
    }
}

/// Monotonic time backed by `std::time::Instant`. Never goes backwards.
#[derive(Debug, Copy, Clone)]
pub struct MonotonicTime {
    origin: Instant,
}

impl MonotonicTime {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicTime {
    #[inline]
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Wall-clock time (seconds since the Unix epoch).
///
/// Follows system clock adjustments, so consecutive readings may decrease.
#[derive(Debug, Copy, Clone, Default)]
pub struct WallTime;

impl TimeSource for WallTime {
    fn now(&self) -> f64 {
        match std::time::SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs_f64(),
            Err(e) => -e.duration().as_secs_f64(),
        }
    }
}

/// Manually driven time.
///
/// Clones share the same underlying value, so a test can keep one handle while
/// a clock owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualTime {
    now: Rc<Cell<f64>>,
}

impl ManualTime {
    pub fn new(start: f64) -> Self {
        Self { now: Rc::new(Cell::new(start)) }
    }

    pub fn set(&self, now: f64) {
        self.now.set(now);
    }

    /// Moves time by `secs`. Negative values move it backwards.
    pub fn advance(&self, secs: f64) {
        self.now.set(self.now.get() + secs);
    }
}

impl TimeSource for ManualTime {
    #[inline]
    fn now(&self) -> f64 {
        self.now.get()
    }
}

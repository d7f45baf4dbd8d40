use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// A source of the current instant.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The real monotonic clock, read via [Instant::now].
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Any zero-argument closure returning an [Instant] is a valid clock.
impl<F: Fn() -> Instant> Clock for F {
    fn now(&self) -> Instant {
        self()
    }
}

/// A clock that stands still until it is advanced by hand.
///
/// Clones share the same reading, so a test can hand a clone to a
/// [Timeout](crate::timeout::Timeout) and keep advancing the original:
///
/// ```
/// use std::time::{Duration, Instant};
/// use total_timeout::clock::{Clock, ManualClock};
///
/// let clock = ManualClock::new(Instant::now());
/// let reading = clock.clone();
///
/// clock.advance(Duration::from_secs(7));
/// assert_eq!(reading.now(), clock.now());
/// ```
#[derive(Clone, Debug)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    pub fn new(start: Instant) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    /// Moves the clock forward by `step`.
    pub fn advance(&self, step: Duration) {
        *self.now.lock().unwrap() += step;
    }

    /// Moves the clock to an arbitrary instant, possibly backwards.
    pub fn set(&self, to: Instant) {
        *self.now.lock().unwrap() = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }
}

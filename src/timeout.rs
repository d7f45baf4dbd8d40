use std::fmt::{Debug, Formatter};
use std::time::{Duration, Instant};

use crate::clock::{Clock, SystemClock};

/// A simple object for keeping track of one time budget spread over many
/// operations. The countdown starts at construction and has a fixed total
/// duration; querying the remaining time after some of the budget has been
/// spent yields a correctly shrunk deadline to pass to the next operation.
///
/// This helps bounding the total elapsed time of a retry loop around an API
/// that only accepts a per-call timeout:
///
/// ```
/// use std::time::Duration;
/// use total_timeout::Timeout;
///
/// # fn fetch(timeout: Duration) -> Option<&'static str> { Some("response") }
/// let timeout = Timeout::new(Duration::from_secs(15));
/// let retry_delay = Duration::from_secs(2);
///
/// let mut response = None;
/// while timeout.has_time_left() {
///     response = fetch(timeout.remaining_time());
///     if response.is_some() {
///         break;
///     }
///     if timeout.remaining_time() < retry_delay {
///         break;
///     }
///     std::thread::sleep(retry_delay);
/// }
/// # assert!(response.is_some());
/// ```
///
/// A `Timeout` is an immutable value; there is no reset and no extend.
#[derive(Copy, Clone)]
pub struct Timeout<C: Clock = SystemClock> {
    total: Duration,
    start: Instant,
    clock: C,
}

impl Timeout {
    /// Creates a new `Timeout` lasting the given total duration, measured
    /// against the real clock.
    ///
    /// The countdown starts immediately, so this should only be called at
    /// the start of the code the timeout applies to.
    pub fn new(total: Duration) -> Self {
        Self::with_clock(total, SystemClock)
    }
}

impl<C: Clock> Timeout<C> {
    /// Like [Timeout::new], but reads the current instant from the given
    /// clock instead of [Instant::now]. The clock is read once here and
    /// then on every query.
    ///
    /// This helps testing and may enable some creative uses, like running
    /// the countdown against a simulated clock.
    pub fn with_clock(total: Duration, clock: C) -> Self {
        let start = clock.now();
        trace!("Starting {total:?} timeout");
        Self { total, start, clock }
    }

    /// Returns the time remaining in this `Timeout`.
    ///
    /// The result is never negative: once the budget is used up, this
    /// returns [Duration::ZERO] for the rest of the `Timeout`'s life. A
    /// clock reading from before the countdown started counts as no
    /// elapsed time at all.
    pub fn remaining_time(&self) -> Duration {
        self.total.saturating_sub(self.elapsed())
    }

    pub fn has_time_left(&self) -> bool {
        self.remaining_time() > Duration::ZERO
    }

    /// Returns the time consumed so far, according to the clock.
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.start)
    }

    /// Returns the fixed total budget this `Timeout` was created with.
    pub fn total_duration(&self) -> Duration {
        self.total
    }
}

impl<C: Clock> Debug for Timeout<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timeout")
            .field("total", &self.total)
            .field("elapsed", &self.elapsed())
            .field("remaining", &self.remaining_time())
            .finish()
    }
}

#[macro_use]
extern crate log;

pub mod clock;
pub mod timeout;

pub use clock::{Clock, ManualClock, SystemClock};
pub use timeout::Timeout;

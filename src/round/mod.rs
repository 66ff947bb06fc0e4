pub mod clock;
pub mod schedule;

pub use clock::{Clock, SystemClock};
pub use schedule::{lead_adjusted_seconds, RoundId, RoundSchedule, RoundSettings, RoundSnapshot};

#[cfg(test)]
pub use clock::ManualClock;

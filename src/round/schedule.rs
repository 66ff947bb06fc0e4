use chrono::{DateTime, Duration, FixedOffset, Timelike};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use super::Clock;
use crate::error::ConfigError;

/// Fixed-width round stamp, so string order equals time order
pub const ROUND_STAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Tunable parameters of the game clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSettings {
    pub utc_offset_hours: i32,
    pub length_secs: u32,
    /// Subtracted from the countdown shown to users
    pub countdown_lead_secs: u32,
    /// Subtracted when deriving the round identifier
    pub round_lead_secs: u32,
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self {
            utc_offset_hours: 6,
            length_secs: 30,
            countdown_lead_secs: 4,
            round_lead_secs: 7,
        }
    }
}

impl RoundSettings {
    pub fn validate(&self) -> Result<FixedOffset, ConfigError> {
        if !(1..=60).contains(&self.length_secs) {
            return Err(ConfigError::Round(format!(
                "round length {}s must be within 1..=60",
                self.length_secs
            )));
        }
        for (name, lead) in [
            ("countdown lead", self.countdown_lead_secs),
            ("round lead", self.round_lead_secs),
        ] {
            if lead == 0 || lead >= self.length_secs {
                return Err(ConfigError::Round(format!(
                    "{} {}s must be within 1..{}",
                    name, lead, self.length_secs
                )));
            }
        }
        if !(-23..=23).contains(&self.utc_offset_hours) {
            return Err(ConfigError::Round(format!(
                "UTC offset {}h is out of range",
                self.utc_offset_hours
            )));
        }
        FixedOffset::east_opt(self.utc_offset_hours * 3600).ok_or_else(|| {
            ConfigError::Round(format!("UTC offset {}h is invalid", self.utc_offset_hours))
        })
    }
}

/// Quantized timestamp naming one round
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RoundId(String);

impl RoundId {
    pub fn from_time(time: &DateTime<FixedOffset>) -> Self {
        Self(time.format(ROUND_STAMP_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Round id and countdown read from one clock sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSnapshot {
    pub round_id: RoundId,
    pub seconds_left: u32,
}

/// Seconds until the next round boundary, pulled earlier by `lead`.
///
/// Wraps into the following round instead of going negative, so the result
/// stays within `0..length` whenever `1 <= lead < length`.
pub fn lead_adjusted_seconds(second: u32, length: u32, lead: u32) -> u32 {
    let base = (length - second % length) as i64;
    let mut adjusted = base - lead as i64;
    if adjusted < 0 {
        adjusted += length as i64;
    }
    adjusted as u32
}

/// Derives round identifiers and countdowns from the injected clock
pub struct RoundSchedule {
    clock: Arc<dyn Clock>,
    offset: FixedOffset,
    settings: RoundSettings,
}

impl RoundSchedule {
    pub fn new(clock: Arc<dyn Clock>, settings: RoundSettings) -> Result<Self, ConfigError> {
        let offset = settings.validate()?;
        Ok(Self {
            clock,
            offset,
            settings,
        })
    }

    /// Current time in the game's fixed offset
    pub fn local_now(&self) -> DateTime<FixedOffset> {
        self.clock.now().with_timezone(&self.offset)
    }

    pub fn next_round_id(&self) -> RoundId {
        self.round_id_at(&self.local_now())
    }

    pub fn seconds_until_next_round(&self) -> u32 {
        self.countdown_at(&self.local_now())
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let now = self.local_now();
        RoundSnapshot {
            round_id: self.round_id_at(&now),
            seconds_left: self.countdown_at(&now),
        }
    }

    fn round_id_at(&self, now: &DateTime<FixedOffset>) -> RoundId {
        let ahead = lead_adjusted_seconds(
            now.second(),
            self.settings.length_secs,
            self.settings.round_lead_secs,
        );
        RoundId::from_time(&(*now + Duration::seconds(ahead as i64)))
    }

    fn countdown_at(&self, now: &DateTime<FixedOffset>) -> u32 {
        lead_adjusted_seconds(
            now.second(),
            self.settings.length_secs,
            self.settings.countdown_lead_secs,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::ManualClock;
    use chrono::{TimeZone, Utc};

    // 12:00:05 at UTC+6 is 06:00:05 UTC
    fn schedule_at(h: u32, m: u32, s: u32) -> (Arc<ManualClock>, RoundSchedule) {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 3, 1, h, m, s).unwrap(),
        ));
        let schedule = RoundSchedule::new(clock.clone(), RoundSettings::default()).unwrap();
        (clock, schedule)
    }

    #[test]
    fn test_worked_example() {
        let (_clock, schedule) = schedule_at(6, 0, 5);

        assert_eq!(schedule.next_round_id().as_str(), "20240301120023");
        assert_eq!(schedule.seconds_until_next_round(), 21);
    }

    #[test]
    fn test_countdown_always_in_range() {
        for second in 0..60 {
            let countdown = lead_adjusted_seconds(second, 30, 4);
            assert!(countdown <= 29, "second {} gave {}", second, countdown);
            let ahead = lead_adjusted_seconds(second, 30, 7);
            assert!(ahead <= 29, "second {} gave {}", second, ahead);
        }
    }

    #[test]
    fn test_countdown_wraps_near_boundary() {
        // base 2, minus 4 wraps to 28
        assert_eq!(lead_adjusted_seconds(28, 30, 4), 28);
        assert_eq!(lead_adjusted_seconds(26, 30, 4), 0);
        assert_eq!(lead_adjusted_seconds(0, 30, 4), 26);
    }

    #[test]
    fn test_round_id_stable_within_window() {
        let (clock, schedule) = schedule_at(6, 0, 0);
        let first = schedule.next_round_id();
        for _ in 0..23 {
            clock.advance(1);
            assert_eq!(schedule.next_round_id(), first);
        }

        clock.advance(1);
        let next = schedule.next_round_id();
        assert_eq!(next.as_str(), "20240301120053");
        assert!(next > first);
    }

    #[test]
    fn test_round_id_crosses_midnight_in_offset() {
        // 17:59:50 UTC is 23:59:50 at UTC+6; 30 - 20 - 7 = 3 seconds ahead
        let (_clock, schedule) = schedule_at(17, 59, 50);
        assert_eq!(schedule.next_round_id().as_str(), "20240301235953");

        let (_clock, schedule) = schedule_at(17, 59, 55);
        assert_eq!(schedule.next_round_id().as_str(), "20240302000023");
    }

    #[test]
    fn test_snapshot_matches_individual_reads() {
        let (_clock, schedule) = schedule_at(6, 0, 5);
        let snapshot = schedule.snapshot();
        assert_eq!(snapshot.round_id, schedule.next_round_id());
        assert_eq!(snapshot.seconds_left, schedule.seconds_until_next_round());
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let clock: Arc<dyn Clock> = Arc::new(crate::round::SystemClock);
        let bad_lead = RoundSettings {
            round_lead_secs: 30,
            ..RoundSettings::default()
        };
        assert!(RoundSchedule::new(clock.clone(), bad_lead).is_err());

        let bad_offset = RoundSettings {
            utc_offset_hours: 30,
            ..RoundSettings::default()
        };
        assert!(RoundSchedule::new(clock, bad_offset).is_err());
    }
}

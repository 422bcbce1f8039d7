//! When is a log file "old enough" to rotate? Not by wall-clock delta: a
//! file written at 23:59 is due at 00:00 under a daily schedule. Every
//! comparison here works on calendar-truncated values, meaning dates, week
//! starts and year-month pairs.

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone};
use serde::Deserialize;
use std::fmt;

/// Calendar cadence of the rotation schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationSchedule {
    /// Never rotate on age; only the size threshold (or force) triggers.
    SizeOnly,
    #[default]
    Daily,
    /// Weeks begin on Sunday.
    Weekly,
    Monthly,
}

impl RotationSchedule {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SizeOnly => "sizeonly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Whether `now` has crossed into a later calendar period than the one
    /// `reference` belongs to. `reference` is the age anchor of the data in
    /// the live file, typically the newest prior rotation's timestamp.
    ///
    /// Both instants come from the caller; nothing in here reads the clock.
    #[must_use]
    pub fn should_rotate<Tz: TimeZone>(self, reference: &DateTime<Tz>, now: &DateTime<Tz>) -> bool {
        match self {
            Self::SizeOnly => false,
            Self::Daily => now.date_naive() > reference.date_naive(),
            Self::Weekly => week_start(now.date_naive()) > week_start(reference.date_naive()),
            Self::Monthly => {
                (now.year(), now.month()) > (reference.year(), reference.month())
            }
        }
    }
}

impl fmt::Display for RotationSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The Sunday opening the week `day` falls in.
fn week_start(day: NaiveDate) -> NaiveDate {
    let offset = u64::from(day.weekday().num_days_from_sunday());
    day.checked_sub_days(Days::new(offset)).unwrap_or(day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn sizeonly_never_rotates_on_age() {
        let old = at(2020, 1, 1, 0);
        let now = at(2026, 8, 23, 12);
        assert!(!RotationSchedule::SizeOnly.should_rotate(&old, &now));
    }

    #[test]
    fn daily_rotates_across_midnight_only() {
        let daily = RotationSchedule::Daily;
        assert!(daily.should_rotate(&at(2026, 8, 22, 23), &at(2026, 8, 23, 0)));
        assert!(!daily.should_rotate(&at(2026, 8, 23, 0), &at(2026, 8, 23, 23)));
        // A reference in the future never triggers.
        assert!(!daily.should_rotate(&at(2026, 8, 24, 0), &at(2026, 8, 23, 0)));
    }

    #[test]
    fn weekly_weeks_start_on_sunday() {
        let weekly = RotationSchedule::Weekly;
        // 2026-08-22 is a Saturday, 2026-08-23 a Sunday.
        assert!(weekly.should_rotate(&at(2026, 8, 22, 10), &at(2026, 8, 23, 10)));
        // Sunday through the following Saturday share a week.
        assert!(!weekly.should_rotate(&at(2026, 8, 23, 0), &at(2026, 8, 29, 23)));
        assert!(weekly.should_rotate(&at(2026, 8, 23, 0), &at(2026, 8, 30, 0)));
    }

    #[test]
    fn weekly_handles_month_spanning_weeks() {
        // The week of Sunday 2026-06-28 runs into July; Wednesday 2026-07-01
        // is still the same week.
        let weekly = RotationSchedule::Weekly;
        assert!(!weekly.should_rotate(&at(2026, 6, 28, 0), &at(2026, 7, 1, 12)));
        assert!(weekly.should_rotate(&at(2026, 6, 28, 0), &at(2026, 7, 5, 0)));
    }

    #[test]
    fn monthly_rotates_on_month_change() {
        let monthly = RotationSchedule::Monthly;
        assert!(monthly.should_rotate(&at(2026, 7, 31, 23), &at(2026, 8, 1, 0)));
        assert!(!monthly.should_rotate(&at(2026, 8, 1, 0), &at(2026, 8, 31, 23)));
        // Year rollover counts as a later month.
        assert!(monthly.should_rotate(&at(2025, 12, 15, 0), &at(2026, 1, 2, 0)));
    }

    #[test]
    fn week_start_is_the_preceding_sunday() {
        // 2026-08-19 is a Wednesday.
        let wednesday = NaiveDate::from_ymd_opt(2026, 8, 19).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2026, 8, 16).unwrap();
        assert_eq!(week_start(wednesday), sunday);
        assert_eq!(week_start(sunday), sunday);
    }
}

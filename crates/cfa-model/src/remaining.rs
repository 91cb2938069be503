//! Human-readable renderings of the time left before a scheduled service.
//!
//! Two distinct shapes are produced: [`RemainingDuration::describe`] is tiered
//! prose picking the coarsest fitting unit, [`format_compact`] is a token list
//! such as `"2d 3h 15m"`.

use std::fmt;

use serde::{Deserialize, Serialize};

const MINUTES_PER_DAY: u64 = 24 * 60;
const MINUTES_PER_WEEK: u64 = 7 * MINUTES_PER_DAY;
const MINUTES_PER_MONTH: u64 = 29 * MINUTES_PER_DAY;

/// Backend-reported time until service. Only valid at the moment it was fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemainingDuration {
    pub hours_remaining: u32,
    pub minutes_remaining: u32,
}

impl RemainingDuration {
    pub fn new(hours_remaining: u32, minutes_remaining: u32) -> Self {
        Self {
            hours_remaining,
            minutes_remaining,
        }
    }

    pub fn total_minutes(&self) -> u64 {
        u64::from(self.hours_remaining) * 60 + u64::from(self.minutes_remaining)
    }

    /// Tiered prose, first match wins (all bounds strict):
    /// over 29 days, over 7 days (whole weeks), over 24 hours (whole days),
    /// else hours and minutes as reported.
    ///
    /// "hour" takes an `s` only above one, so zero hours reads "0 hour".
    pub fn describe(&self) -> String {
        let total = self.total_minutes();

        if total > MINUTES_PER_MONTH {
            return "Over a month away".to_string();
        }
        if total > MINUTES_PER_WEEK {
            let weeks = total / MINUTES_PER_WEEK;
            return format!("{weeks} week{} remaining", plural(weeks > 1));
        }
        if total > MINUTES_PER_DAY {
            let days = total / MINUTES_PER_DAY;
            return format!("{days} day{} remaining", plural(days > 1));
        }

        let hours = self.hours_remaining;
        let minutes = self.minutes_remaining;
        format!(
            "{hours} hour{} and {minutes} minute{} remaining",
            plural(hours > 1),
            plural(minutes != 1)
        )
    }

    /// Compact tokens with the hours split into days, e.g. 27h 5m -> `"1d 3h 5m"`.
    pub fn compact(&self) -> String {
        let days = self.hours_remaining / 24;
        let hours = self.hours_remaining % 24;
        format_compact(days, hours, self.minutes_remaining)
    }
}

impl fmt::Display for RemainingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// `"{d}d {h}h {m}m"` omitting zero components; `"0m"` when everything is zero.
pub fn format_compact(days: u32, hours: u32, minutes: u32) -> String {
    let parts: Vec<String> = [(days, 'd'), (hours, 'h'), (minutes, 'm')]
        .into_iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{value}{unit}"))
        .collect();

    if parts.is_empty() {
        "0m".to_string()
    } else {
        parts.join(" ")
    }
}

#[inline]
fn plural(yes: bool) -> &'static str {
    if yes { "s" } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(hours: u32, minutes: u32) -> String {
        RemainingDuration::new(hours, minutes).describe()
    }

    #[test]
    fn hours_tier_keeps_singular_hour_for_zero_and_one() {
        assert_eq!(describe(0, 0), "0 hour and 0 minutes remaining");
        assert_eq!(describe(1, 0), "1 hour and 0 minutes remaining");
        assert_eq!(describe(0, 1), "0 hour and 1 minute remaining");
        assert_eq!(describe(2, 1), "2 hours and 1 minute remaining");
        assert_eq!(describe(5, 45), "5 hours and 45 minutes remaining");
    }

    #[test]
    fn exactly_one_day_stays_in_hours_tier() {
        assert_eq!(describe(24, 0), "24 hours and 0 minutes remaining");
        assert_eq!(describe(23, 60), "23 hours and 60 minutes remaining");
        assert_eq!(describe(24, 1), "1 day remaining");
    }

    #[test]
    fn days_tier_truncates() {
        assert_eq!(describe(25, 0), "1 day remaining");
        assert_eq!(describe(47, 59), "1 day remaining");
        assert_eq!(describe(48, 1), "2 days remaining");
        assert_eq!(describe(168, 0), "7 days remaining");
    }

    #[test]
    fn weeks_tier_does_not_pluralize_one() {
        assert_eq!(describe(168, 1), "1 week remaining");
        assert_eq!(describe(319, 0), "1 week remaining");
        assert_eq!(describe(336, 1), "2 weeks remaining");
        assert_eq!(describe(696, 0), "4 weeks remaining");
    }

    #[test]
    fn month_tier_after_twenty_nine_days() {
        assert_eq!(describe(696, 1), "Over a month away");
        assert_eq!(describe(2834, 0), "Over a month away");
        assert_eq!(describe(u32::MAX, u32::MAX), "Over a month away");
    }

    #[test]
    fn describe_is_repeatable() {
        let d = RemainingDuration::new(30, 7);
        assert_eq!(d.describe(), d.describe());
        assert_eq!(d.to_string(), d.describe());
    }

    #[test]
    fn compact_omits_zero_components() {
        assert_eq!(format_compact(2, 3, 15), "2d 3h 15m");
        assert_eq!(format_compact(0, 3, 0), "3h");
        assert_eq!(format_compact(1, 0, 5), "1d 5m");
        assert_eq!(format_compact(0, 0, 0), "0m");
    }

    #[test]
    fn compact_splits_hours_into_days() {
        assert_eq!(RemainingDuration::new(27, 5).compact(), "1d 3h 5m");
        assert_eq!(RemainingDuration::new(48, 0).compact(), "2d");
        assert_eq!(RemainingDuration::new(0, 0).compact(), "0m");
    }
}

//! Fixed-length time units shared by the relative-time and duration formatters.
//!
//! Months are 30 days and years are 365 days. These are display
//! approximations, not calendar arithmetic.

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// A unit of time with a fixed length in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

/// Units in cascade order, largest first.
pub const CASCADE: [TimeUnit; 6] = [
    TimeUnit::Year,
    TimeUnit::Month,
    TimeUnit::Day,
    TimeUnit::Hour,
    TimeUnit::Minute,
    TimeUnit::Second,
];

impl TimeUnit {
    /// Length of one unit in seconds.
    pub const fn seconds(self) -> u64 {
        match self {
            TimeUnit::Year => 365 * DAY,
            TimeUnit::Month => 30 * DAY,
            TimeUnit::Day => DAY,
            TimeUnit::Hour => HOUR,
            TimeUnit::Minute => MINUTE,
            TimeUnit::Second => 1,
        }
    }

    /// Singular English name ("hour").
    pub const fn name(self) -> &'static str {
        match self {
            TimeUnit::Year => "year",
            TimeUnit::Month => "month",
            TimeUnit::Day => "day",
            TimeUnit::Hour => "hour",
            TimeUnit::Minute => "minute",
            TimeUnit::Second => "second",
        }
    }

    /// Compact suffix ("h"), never pluralized.
    pub const fn short_name(self) -> &'static str {
        match self {
            TimeUnit::Year => "y",
            TimeUnit::Month => "mo",
            TimeUnit::Day => "d",
            TimeUnit::Hour => "h",
            TimeUnit::Minute => "m",
            TimeUnit::Second => "s",
        }
    }

    /// `"<count> <name>"`, pluralized unless `count` is exactly 1.
    pub fn label(self, count: u64) -> String {
        let plural = if count == 1 { "" } else { "s" };
        format!("{count} {}{plural}", self.name())
    }

    /// Number of units in `seconds`, rounded half-up.
    pub(crate) fn rounded_count(self, seconds: u64) -> u64 {
        let divisor = self.seconds();
        let whole = seconds / divisor;
        if (seconds % divisor) * 2 >= divisor {
            whole + 1
        } else {
            whole
        }
    }
}

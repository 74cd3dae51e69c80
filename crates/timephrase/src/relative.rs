//! Coarse relative-time phrases ("3 hours ago", "in 2 days").

use crate::units::TimeUnit;

/// What a threshold rule emits once it matches.
#[derive(Debug, Clone, Copy)]
enum Step {
    JustNow,
    /// Exactly one of the unit.
    One(TimeUnit),
    /// The difference divided by the unit length, rounded half-up.
    Rounded(TimeUnit),
}

/// Ordered rules: the first whose exclusive upper bound exceeds the
/// difference (in seconds) wins.
const THRESHOLDS: &[(u64, Step)] = &[
    (45, Step::JustNow),
    (90, Step::One(TimeUnit::Minute)),
    (2_700, Step::Rounded(TimeUnit::Minute)),
    (5_400, Step::One(TimeUnit::Hour)),
    (79_200, Step::Rounded(TimeUnit::Hour)),
    (129_600, Step::One(TimeUnit::Day)),
    (2_246_400, Step::Rounded(TimeUnit::Day)),
    (3_974_400, Step::One(TimeUnit::Month)),
    (27_648_000, Step::Rounded(TimeUnit::Month)),
    (47_347_200, Step::One(TimeUnit::Year)),
    (u64::MAX, Step::Rounded(TimeUnit::Year)),
];

/// Describe `timestamp` relative to `reference` in coarse English.
///
/// `reference` is the caller's "now"; when omitted it defaults to
/// `timestamp` itself, which always yields `"just now"`. Events after the
/// reference read `"in N units"`, events before it read `"N units ago"`.
/// Months are 30 days and years 365 days.
///
/// # Examples
///
/// ```
/// use timephrase::timeago;
///
/// let now = 1_700_000_000;
/// assert_eq!(timeago(now - 3 * 3600, Some(now)), "3 hours ago");
/// assert_eq!(timeago(now + 2 * 86_400, Some(now)), "in 2 days");
/// assert_eq!(timeago(now, None), "just now");
/// ```
pub fn timeago(timestamp: i64, reference: Option<i64>) -> String {
    let reference = reference.unwrap_or(timestamp);
    let diff = reference.abs_diff(timestamp);
    let is_future = timestamp > reference;

    let step = THRESHOLDS
        .iter()
        .find(|(below, _)| diff < *below)
        .map_or(Step::Rounded(TimeUnit::Year), |(_, step)| *step);

    let (unit, count) = match step {
        Step::JustNow => return "just now".to_string(),
        Step::One(unit) => (unit, 1),
        Step::Rounded(unit) => (unit, unit.rounded_count(diff)),
    };

    let phrase = unit.label(count);
    if is_future {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

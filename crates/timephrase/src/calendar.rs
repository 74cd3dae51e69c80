//! Contextual calendar labels and compact date ranges, in UTC.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};

use crate::error::{PhraseError, Result};

const SECONDS_PER_DAY: i64 = 86_400;

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Label `timestamp` relative to the calendar day of `reference`.
///
/// `reference` defaults to `timestamp`. Decision order, first match wins:
///
/// 1. Same UTC day → `"Today"`
/// 2. The day before → `"Yesterday"`, the day after → `"Tomorrow"`
/// 3. 2–6 whole days earlier → `"Last <Weekday>"`
/// 4. 2–6 whole days later → `"This <Weekday>"`
/// 5. Same year → `"<Month> <Day>"`, otherwise `"<Month> <Day>, <Year>"`
///
/// Whole days are `floor((reference - timestamp) / 86400)`, and the weekday
/// is found by walking that many days from the reference's weekday.
///
/// # Errors
///
/// Returns [`PhraseError::InvalidTimestamp`] if either value lies outside the
/// representable calendar range.
///
/// # Examples
///
/// ```
/// use timephrase::human_date;
///
/// let wednesday_noon = 1_709_726_400; // 2024-03-06T12:00:00Z
/// assert_eq!(human_date(wednesday_noon, None).unwrap(), "Today");
/// assert_eq!(human_date(wednesday_noon - 3 * 86_400, Some(wednesday_noon)).unwrap(), "Last Sunday");
/// assert_eq!(human_date(1_703_462_400, Some(wednesday_noon)).unwrap(), "December 25, 2023");
/// ```
pub fn human_date(timestamp: i64, reference: Option<i64>) -> Result<String> {
    let reference = reference.unwrap_or(timestamp);
    let event = utc_datetime(timestamp)?;
    let now = utc_datetime(reference)?;

    let event_day = event.date_naive();
    let today = now.date_naive();
    let days_diff = (reference - timestamp).div_euclid(SECONDS_PER_DAY);

    if event_day == today {
        return Ok("Today".to_string());
    }
    if today.pred_opt() == Some(event_day) {
        return Ok("Yesterday".to_string());
    }
    if today.succ_opt() == Some(event_day) {
        return Ok("Tomorrow".to_string());
    }

    if (2..7).contains(&days_diff) {
        let weekday = (0..days_diff).fold(now.weekday(), |day, _| day.pred());
        return Ok(format!("Last {}", weekday_name(weekday)));
    }
    if (-6..-1).contains(&days_diff) {
        let weekday = (days_diff..0).fold(now.weekday(), |day, _| day.succ());
        return Ok(format!("This {}", weekday_name(weekday)));
    }

    if event_day.year() == today.year() {
        Ok(month_day(event_day))
    } else {
        Ok(format!("{}, {}", month_day(event_day), event_day.year()))
    }
}

/// Render two instants as a date range, repeating as little as possible.
///
/// The arguments may come in either order.
///
/// | span | output |
/// |---|---|
/// | same day | `March 6, 2024` |
/// | same month | `March 6–10, 2024` |
/// | same year | `March 6 – April 2, 2024` |
/// | across years | `December 25, 2023 – March 6, 2024` |
///
/// # Errors
///
/// Returns [`PhraseError::InvalidTimestamp`] if either value lies outside the
/// representable calendar range.
pub fn date_range(start: i64, end: i64) -> Result<String> {
    let (start, end) = if start > end { (end, start) } else { (start, end) };
    let first = utc_datetime(start)?.date_naive();
    let last = utc_datetime(end)?.date_naive();

    let range = if first == last {
        format!("{}, {}", month_day(first), first.year())
    } else if first.year() == last.year() && first.month() == last.month() {
        format!("{}–{}, {}", month_day(first), last.day(), first.year())
    } else if first.year() == last.year() {
        format!("{} – {}, {}", month_day(first), month_day(last), first.year())
    } else {
        format!(
            "{}, {} – {}, {}",
            month_day(first),
            first.year(),
            month_day(last),
            last.year()
        )
    };
    Ok(range)
}

// ── Internal helpers ────────────────────────────────────────────────────────

fn utc_datetime(timestamp: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp, 0).ok_or_else(|| {
        PhraseError::InvalidTimestamp(format!("{timestamp} is outside the calendar range"))
    })
}

fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_monday() as usize]
}

fn month_name(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// "March 6"
fn month_day(date: NaiveDate) -> String {
    format!("{} {}", month_name(date), date.day())
}

// ── Tests ───────────────────────────────────────────────────────────────────

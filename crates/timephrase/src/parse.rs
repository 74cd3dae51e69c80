//! Free-form duration parsing ("2h 30m", "1:30:00", "2 hours and 15 minutes").

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{PhraseError, Result};
use crate::units::TimeUnit;

const SECOND: f64 = TimeUnit::Second.seconds() as f64;
const MINUTE: f64 = TimeUnit::Minute.seconds() as f64;
const HOUR: f64 = TimeUnit::Hour.seconds() as f64;
const DAY: f64 = TimeUnit::Day.seconds() as f64;
const YEAR: f64 = TimeUnit::Year.seconds() as f64;

/// Unit spellings and their length in seconds. Matching is on whole letter
/// runs, so single-letter forms never shadow longer words.
const UNIT_ALIASES: &[(&[&str], f64)] = &[
    (&["year", "years", "y"], YEAR),
    (&["week", "weeks", "wk", "wks", "w"], 7.0 * DAY),
    (&["day", "days", "d"], DAY),
    (&["hour", "hours", "hr", "hrs", "h"], HOUR),
    (&["minute", "minutes", "min", "mins", "m"], MINUTE),
    (&["second", "seconds", "sec", "secs", "s"], SECOND),
];

struct DurationPatterns {
    /// A minus sign directly in front of a number, including `-.5`.
    negative: Regex,
    /// `H:MM` or `H:MM:SS` spanning the whole input.
    colon: Regex,
    /// Commas and the word "and" between components.
    connective: Regex,
    /// A number followed by the full run of letters after it.
    component: Regex,
}

fn patterns() -> &'static DurationPatterns {
    static PATTERNS: OnceLock<DurationPatterns> = OnceLock::new();
    PATTERNS.get_or_init(DurationPatterns::new)
}

impl DurationPatterns {
    fn new() -> Self {
        Self {
            negative: Regex::new(r"-\.?\d").unwrap(),
            colon: Regex::new(r"^(\d+):(\d{1,2})(?::(\d{1,2}))?$").unwrap(),
            connective: Regex::new(r",|\band\b").unwrap(),
            component: Regex::new(r"(\d+(?:\.\d+)?|\.\d+)\s*([a-z]+)").unwrap(),
        }
    }
}

/// Parse free-form duration text into seconds.
///
/// Colon notation (`H:MM[:SS]`) is tried first. Otherwise every
/// `<number><unit>` pair in the text is summed; commas, the word "and" and
/// any unrecognized words are ignored as long as one unit is found.
///
/// Recognized units: `year(s)`/`y`, `week(s)`/`wk(s)`/`w`, `day(s)`/`d`,
/// `hour(s)`/`hr(s)`/`h`, `minute(s)`/`min(s)`/`m`, `second(s)`/`sec(s)`/`s`.
/// A year counts as 365 days. Months are not recognized.
///
/// # Errors
///
/// Returns [`PhraseError::UnparseableDuration`] for blank input or when no
/// unit is recognized, and [`PhraseError::NegativeDuration`] if a minus sign
/// precedes any number.
///
/// # Examples
///
/// ```
/// use timephrase::parse_duration;
///
/// assert_eq!(parse_duration("2h 30m").unwrap(), 9000.0);
/// assert_eq!(parse_duration("1:30:00").unwrap(), 5400.0);
/// assert_eq!(parse_duration("2 hours and 15 minutes").unwrap(), 8100.0);
/// assert!(parse_duration("soon").is_err());
/// ```
pub fn parse_duration(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PhraseError::UnparseableDuration("empty input".to_string()));
    }

    let patterns = patterns();

    if patterns.negative.is_match(trimmed) {
        return Err(PhraseError::NegativeDuration(format!("'{trimmed}'")));
    }

    if let Some(seconds) = parse_colon_notation(patterns, trimmed) {
        tracing::trace!(input = trimmed, seconds, "parsed colon-notation duration");
        return Ok(seconds);
    }

    let lowered = trimmed.to_lowercase();
    let cleaned = patterns.connective.replace_all(&lowered, " ");

    let mut total = 0.0;
    let mut recognized = 0usize;

    for caps in patterns.component.captures_iter(&cleaned) {
        let Some(per_unit) = unit_seconds(&caps[2]) else {
            continue;
        };
        let value: f64 = caps[1].parse().map_err(|_| {
            PhraseError::UnparseableDuration(format!("bad number '{}'", &caps[1]))
        })?;
        total += value * per_unit;
        recognized += 1;
    }

    if recognized == 0 {
        return Err(PhraseError::UnparseableDuration(format!(
            "no time unit found in '{trimmed}'"
        )));
    }

    tracing::trace!(
        input = trimmed,
        components = recognized,
        seconds = total,
        "parsed mixed-unit duration"
    );
    Ok(total)
}

// ── Internal helpers ────────────────────────────────────────────────────────

fn parse_colon_notation(patterns: &DurationPatterns, s: &str) -> Option<f64> {
    let caps = patterns.colon.captures(s)?;
    let hours: f64 = caps[1].parse().ok()?;
    let minutes: f64 = caps[2].parse().ok()?;
    let seconds: f64 = match caps.get(3) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0.0,
    };
    Some(hours * HOUR + minutes * MINUTE + seconds)
}

fn unit_seconds(token: &str) -> Option<f64> {
    UNIT_ALIASES
        .iter()
        .find(|(aliases, _)| aliases.contains(&token))
        .map(|(_, seconds)| *seconds)
}

// ── Tests ───────────────────────────────────────────────────────────────────

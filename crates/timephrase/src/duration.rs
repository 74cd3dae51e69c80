//! Multi-unit duration rendering ("2 hours, 30 minutes", "2h 30m").

use serde::{Deserialize, Serialize};

use crate::error::{PhraseError, Result};
use crate::units::{TimeUnit, CASCADE};

/// Options for [`format_duration`].
///
/// Deserializes from a partial map: missing keys take their defaults and
/// unknown keys are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Use short suffixes (`2h 30m`) instead of words (`2 hours, 30 minutes`).
    pub compact: bool,
    /// Maximum number of non-zero units to emit. Values below 1 act as 1.
    pub max_units: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            compact: false,
            max_units: 2,
        }
    }
}

impl FormatOptions {
    /// Compact rendering with the default unit cap.
    pub fn compact() -> Self {
        Self {
            compact: true,
            ..Self::default()
        }
    }

    /// Cap the number of non-zero units emitted.
    pub fn with_max_units(mut self, max_units: usize) -> Self {
        self.max_units = max_units;
        self
    }
}

/// Render a non-negative number of seconds as a cascading multi-unit phrase.
///
/// Units cascade year (365 d) → month (30 d) → day → hour → minute → second,
/// skipping zero counts. Once `max_units` parts are emitted, the leftover is
/// rounded into the last emitted unit (half-up); the carry never ripples into
/// larger units, so `3599` with one unit renders as `"60 minutes"`.
///
/// # Errors
///
/// Returns [`PhraseError::NegativeDuration`] if `seconds` is negative.
///
/// # Examples
///
/// ```
/// use timephrase::{format_duration, FormatOptions};
///
/// assert_eq!(format_duration(9000, &FormatOptions::default()).unwrap(), "2 hours, 30 minutes");
/// assert_eq!(format_duration(9000, &FormatOptions::compact()).unwrap(), "2h 30m");
/// assert_eq!(format_duration(0, &FormatOptions::default()).unwrap(), "0 seconds");
/// ```
pub fn format_duration(seconds: i64, options: &FormatOptions) -> Result<String> {
    let total = u64::try_from(seconds)
        .map_err(|_| PhraseError::NegativeDuration(format!("{seconds} seconds")))?;
    let max_units = options.max_units.max(1);

    let mut parts: Vec<(TimeUnit, u64)> = Vec::with_capacity(max_units);
    let mut remaining = total;

    for unit in CASCADE {
        if parts.len() == max_units {
            break;
        }
        let count = remaining / unit.seconds();
        if count > 0 {
            parts.push((unit, count));
            remaining %= unit.seconds();
        }
    }

    if parts.len() == max_units && remaining > 0 {
        if let Some((unit, count)) = parts.last_mut() {
            if remaining * 2 >= unit.seconds() {
                *count += 1;
            }
        }
    }

    if parts.is_empty() {
        let zero = if options.compact {
            format!("0{}", TimeUnit::Second.short_name())
        } else {
            TimeUnit::Second.label(0)
        };
        return Ok(zero);
    }

    let rendered = if options.compact {
        parts
            .iter()
            .map(|(unit, count)| format!("{count}{}", unit.short_name()))
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        parts
            .iter()
            .map(|(unit, count)| unit.label(*count))
            .collect::<Vec<_>>()
            .join(", ")
    };
    Ok(rendered)
}

// ── Tests ───────────────────────────────────────────────────────────────────

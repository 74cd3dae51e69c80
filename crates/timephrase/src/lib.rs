//! # timephrase
//!
//! Deterministic conversion between machine time and English phrases.
//!
//! Every function is pure: there is no system clock access, and the caller
//! always supplies the reference "now" as epoch seconds. Calendar math is
//! done in UTC.
//!
//! ## Modules
//!
//! - [`timestamp`] — Normalize integers, ISO-8601 text and native date/time values to epoch seconds
//! - [`relative`] — Coarse relative phrases ("3 hours ago", "in 2 days")
//! - [`duration`] — Multi-unit duration rendering ("2 hours, 30 minutes", "2h 30m")
//! - [`parse`] — Free-form duration parsing ("2h 30m", "1:30:00") to seconds
//! - [`calendar`] — Contextual day labels ("Yesterday", "Last Friday") and date ranges
//! - [`units`] — Fixed-length unit table shared by the formatters
//! - [`error`] — Error types

pub mod calendar;
pub mod duration;
pub mod error;
pub mod parse;
pub mod relative;
pub mod timestamp;
pub mod units;

pub use calendar::{date_range, human_date};
pub use duration::{format_duration, FormatOptions};
pub use error::{PhraseError, Result};
pub use parse::parse_duration;
pub use relative::timeago;
pub use timestamp::{normalize_timestamp, IntoEpochSeconds};
pub use units::TimeUnit;

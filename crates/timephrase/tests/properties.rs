//! Property tests for the invariants every conversion must uphold.

use proptest::prelude::*;
use timephrase::{
    date_range, format_duration, human_date, normalize_timestamp, parse_duration, timeago,
    FormatOptions,
};

/// Roughly years 1653–2286, well inside the calendar range.
const CALENDAR_SPAN: std::ops::Range<i64> = -10_000_000_000..10_000_000_000;

proptest! {
    #[test]
    fn normalize_is_idempotent(t in any::<i64>()) {
        let once = normalize_timestamp(&t).unwrap();
        prop_assert_eq!(normalize_timestamp(&once).unwrap(), once);
    }

    #[test]
    fn timeago_same_instant_is_just_now(t in any::<i64>()) {
        prop_assert_eq!(timeago(t, Some(t)), "just now");
    }

    #[test]
    fn timeago_under_45_seconds_is_just_now(t in CALENDAR_SPAN, d in 0i64..45) {
        prop_assert_eq!(timeago(t, Some(t + d)), "just now");
        prop_assert_eq!(timeago(t + d, Some(t)), "just now");
    }

    #[test]
    fn timeago_direction_is_symmetric(t in CALENDAR_SPAN, d in 45i64..1_000_000_000) {
        let past = timeago(t, Some(t + d));
        let future = timeago(t + d, Some(t));
        let body = past.strip_suffix(" ago").expect("past phrase ends with 'ago'");
        prop_assert_eq!(future, format!("in {body}"));
    }

    #[test]
    fn human_date_same_instant_is_today(t in CALENDAR_SPAN) {
        prop_assert_eq!(human_date(t, Some(t)).unwrap(), "Today");
    }

    #[test]
    fn date_range_is_order_independent(a in CALENDAR_SPAN, b in CALENDAR_SPAN) {
        prop_assert_eq!(date_range(a, b).unwrap(), date_range(b, a).unwrap());
    }

    #[test]
    fn duration_respects_unit_cap(
        seconds in 0i64..i64::MAX,
        max_units in 1usize..7,
        compact in any::<bool>(),
    ) {
        let options = FormatOptions { compact, max_units };
        let rendered = format_duration(seconds, &options).unwrap();
        let separator = if compact { " " } else { ", " };
        prop_assert!(rendered.split(separator).count() <= max_units, "{}", rendered);
    }

    #[test]
    fn negative_durations_are_rejected(seconds in i64::MIN..0) {
        let err = format_duration(seconds, &FormatOptions::default()).unwrap_err();
        prop_assert_eq!(err.kind(), "NegativeDuration");
    }

    #[test]
    fn colon_notation_matches_components(h in 0u32..1000, m in 0u32..60, s in 0u32..60) {
        let text = format!("{h}:{m:02}:{s:02}");
        let expected = f64::from(h * 3600 + m * 60 + s);
        prop_assert_eq!(parse_duration(&text).unwrap(), expected);
    }
}

#[test]
fn test_duration_round_trip_keeps_breakdown() {
    for seconds in [9_000, 86_400, 31_536_000, 90, 3_600, 604_800] {
        for options in [FormatOptions::default(), FormatOptions::compact()] {
            let rendered = format_duration(seconds, &options).unwrap();
            let parsed = parse_duration(&rendered).unwrap();
            let again = format_duration(parsed as i64, &options).unwrap();
            assert_eq!(again, rendered, "seconds: {seconds}, options: {options:?}");
        }
    }
}

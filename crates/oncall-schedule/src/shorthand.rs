//! Duration shorthand such as `"1h30m"`, `"3d"` or `"2w"`.
//!
//! Shift lengths and rotation periods are stored by the scheduling API as
//! whole seconds. [`parse_duration_shorthand`] reads the compact form users
//! write; [`format_duration_shorthand`] produces the canonical form shown
//! back to them.
//!
//! # Grammar
//!
//! One or more `<digits><unit>` tokens with no separators, where unit is
//! one of `w` (week), `d` (day), `h` (hour), `m` (minute), `s` (second).
//! Units may repeat or appear in any order; their values are summed. The
//! literal `"0"` is also accepted. Signs, fractions, whitespace and
//! uppercase units are rejected.

use crate::error::ScheduleError;

pub const MINUTE: u64 = 60;
pub const HOUR: u64 = 60 * MINUTE;
pub const DAY: u64 = 24 * HOUR;
pub const WEEK: u64 = 7 * DAY;
pub const FORTNIGHT: u64 = 2 * WEEK;

/// Unit suffixes in the order [`format_duration_shorthand`] emits them.
const UNITS: [(char, u64); 5] = [
    ('w', WEEK),
    ('d', DAY),
    ('h', HOUR),
    ('m', MINUTE),
    ('s', 1),
];

fn unit_seconds(unit: char) -> Option<u64> {
    UNITS
        .iter()
        .find(|(suffix, _)| *suffix == unit)
        .map(|(_, seconds)| *seconds)
}

/// Parse duration shorthand into total seconds.
///
/// # Errors
///
/// Returns [`ScheduleError::MalformedDuration`] if `text` does not match the
/// grammar described in the [module docs](self), or if the total does not
/// fit in a `u64`.
///
/// # Examples
///
/// ```
/// use oncall_schedule::shorthand::parse_duration_shorthand;
///
/// assert_eq!(parse_duration_shorthand("1h30m").unwrap(), 5400);
/// assert_eq!(parse_duration_shorthand("90m").unwrap(), 5400);
/// assert!(parse_duration_shorthand("1.5h").is_err());
/// ```
pub fn parse_duration_shorthand(text: &str) -> Result<u64, ScheduleError> {
    if text.is_empty() {
        return Err(ScheduleError::MalformedDuration(
            "empty duration".to_string(),
        ));
    }
    if text == "0" {
        return Ok(0);
    }

    let mut total: u64 = 0;
    let mut num_buf = String::new();

    for ch in text.chars() {
        if ch.is_ascii_digit() {
            num_buf.push(ch);
            continue;
        }

        if num_buf.is_empty() {
            return Err(ScheduleError::MalformedDuration(format!(
                "expected number before '{ch}' in '{text}'"
            )));
        }
        let per_unit = unit_seconds(ch).ok_or_else(|| {
            ScheduleError::MalformedDuration(format!("unknown unit '{ch}' in '{text}'"))
        })?;
        let n: u64 = num_buf.parse().map_err(|_| {
            ScheduleError::MalformedDuration(format!("number too large in '{text}'"))
        })?;
        num_buf.clear();

        total = n
            .checked_mul(per_unit)
            .and_then(|secs| total.checked_add(secs))
            .ok_or_else(|| {
                ScheduleError::MalformedDuration(format!("'{text}' overflows"))
            })?;
    }

    if !num_buf.is_empty() {
        return Err(ScheduleError::MalformedDuration(format!(
            "number without unit at end of '{text}'"
        )));
    }

    Ok(total)
}

/// Format total seconds as canonical shorthand.
///
/// Greedily takes weeks, then days, hours, minutes and seconds, writing only
/// the non-zero ones. Zero seconds formats as the empty string.
///
/// The output always parses back to the same number of seconds, but the
/// text may differ from what the user originally wrote (`"90m"` comes back
/// as `"1h30m"`).
///
/// # Examples
///
/// ```
/// use oncall_schedule::shorthand::format_duration_shorthand;
///
/// assert_eq!(format_duration_shorthand(90_061), "1d1h1m1s");
/// assert_eq!(format_duration_shorthand(0), "");
/// ```
pub fn format_duration_shorthand(total_seconds: u64) -> String {
    let mut out = String::new();
    let mut remaining = total_seconds;
    for (suffix, per_unit) in UNITS {
        let count = remaining / per_unit;
        remaining %= per_unit;
        if count > 0 {
            out.push_str(&count.to_string());
            out.push(suffix);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use proptest::prelude::*;

    // ── parse_duration_shorthand tests ──────────────────────────────────

    #[test]
    fn test_parse_single_units() {
        assert_eq!(parse_duration_shorthand("24h").unwrap(), DAY);
        assert_eq!(parse_duration_shorthand("3d").unwrap(), 3 * DAY);
        assert_eq!(parse_duration_shorthand("2w").unwrap(), FORTNIGHT);
        assert_eq!(parse_duration_shorthand("45s").unwrap(), 45);
    }

    #[test]
    fn test_parse_combined() {
        assert_eq!(parse_duration_shorthand("1h30m").unwrap(), 5400);
        assert_eq!(
            parse_duration_shorthand("1w1d1h1m1s").unwrap(),
            WEEK + DAY + HOUR + MINUTE + 1
        );
    }

    #[test]
    fn test_parse_any_order_and_repeats() {
        assert_eq!(parse_duration_shorthand("30m1h").unwrap(), 5400);
        assert_eq!(parse_duration_shorthand("1h1h").unwrap(), 2 * HOUR);
    }

    #[test]
    fn test_parse_zero() {
        assert_eq!(parse_duration_shorthand("0").unwrap(), 0);
        assert_eq!(parse_duration_shorthand("0h").unwrap(), 0);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in [
            "", "1", "h", "1x", "1.5h", "-1h", "+1h", "1 h", "1H", "1ms", "1h30",
        ] {
            let err = parse_duration_shorthand(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedDuration, "input: {input:?}");
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let err = parse_duration_shorthand("99999999999999999999w").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedDuration);
        let err = parse_duration_shorthand("40000000000000w").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedDuration);
    }

    // ── format_duration_shorthand tests ─────────────────────────────────

    #[test]
    fn test_format_one_minute() {
        assert_eq!(format_duration_shorthand(60), "1m");
    }

    #[test]
    fn test_format_one_day() {
        assert_eq!(format_duration_shorthand(DAY), "1d");
    }

    #[test]
    fn test_format_one_week() {
        assert_eq!(format_duration_shorthand(WEEK), "1w");
    }

    #[test]
    fn test_format_day_hour_minute() {
        assert_eq!(format_duration_shorthand(DAY + HOUR + MINUTE), "1d1h1m");
    }

    #[test]
    fn test_format_week_day_hour_minute() {
        assert_eq!(
            format_duration_shorthand(WEEK + DAY + HOUR + MINUTE),
            "1w1d1h1m"
        );
    }

    #[test]
    fn test_format_zero_is_empty() {
        assert_eq!(format_duration_shorthand(0), "");
    }

    #[test]
    fn test_format_normalizes() {
        let secs = parse_duration_shorthand("90m").unwrap();
        assert_eq!(format_duration_shorthand(secs), "1h30m");
        assert_eq!(format_duration_shorthand(FORTNIGHT), "2w");
    }

    // ── properties ──────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_format_then_parse_keeps_value(secs in 1u64..=u64::MAX / 2) {
            let text = format_duration_shorthand(secs);
            prop_assert_eq!(parse_duration_shorthand(&text).unwrap(), secs);
        }

        #[test]
        fn prop_format_is_canonical(secs in 1u64..10 * FORTNIGHT) {
            let text = format_duration_shorthand(secs);
            let reparsed = parse_duration_shorthand(&text).unwrap();
            prop_assert_eq!(format_duration_shorthand(reparsed), text);
        }
    }
}

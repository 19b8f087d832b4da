//! Compact duration notation used by RouterOS for timeouts and TTLs.
//!
//! RouterOS reports durations as an optional day count followed by a sub-day
//! duration with unit suffixes, for example `10s`, `1d`, `2d3h` or `1d2h3m4.5s`.
//! [`parse_duration`] turns such a value into whole seconds and
//! [`format_duration`] renders whole seconds back into the same notation.
//!
//! Colon notation (`1d02:03:04`) is not part of this grammar and is rejected.
//!
//! ## Examples
//!
//! ```rust
//! use routeros_wire::{format_duration, parse_duration};
//!
//! assert_eq!(parse_duration("2d3h").unwrap(), 183_600);
//! assert_eq!(format_duration(183_600).unwrap(), "2d3h");
//! ```

use crate::{Error, Result};
use chrono::Duration;

const SECONDS_PER_DAY: i64 = 86_400;

/// Parses `[<days>d]<clock-duration>` into total seconds.
///
/// The day count must be a decimal integer. The clock part accepts the units
/// `h`, `m`, `s`, `ms`, `us`/`µs` and `ns`, with optional fractions. Sub-second
/// remainders are truncated.
///
/// # Examples
///
/// ```rust
/// use routeros_wire::parse_duration;
///
/// assert_eq!(parse_duration("10s").unwrap(), 10);
/// assert_eq!(parse_duration("1d").unwrap(), 86_400);
/// assert_eq!(parse_duration("0d5m").unwrap(), 300);
/// assert!(parse_duration("abc").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::MalformedDuration`] if the day count or the clock part
/// cannot be parsed. Malformed input is never defaulted to zero.
pub fn parse_duration(input: &str) -> Result<i64> {
    let parts: Vec<&str> = input.split('d').collect();

    let (days, clock) = match parts.as_slice() {
        [days, clock] => {
            let days: i64 = days.parse().map_err(|_| {
                Error::malformed_duration(input, "day count is not a decimal integer")
            })?;
            // A bare day count such as "1d" leaves an empty clock part.
            (days, if clock.is_empty() { "0s" } else { *clock })
        }
        _ => (0, input),
    };

    let clock = parse_clock(clock).map_err(|reason| Error::malformed_duration(input, &reason))?;

    days.checked_mul(SECONDS_PER_DAY)
        .and_then(|secs| secs.checked_add(clock.num_seconds()))
        .ok_or_else(|| Error::malformed_duration(input, "duration overflows"))
}

/// Renders whole seconds as `[<days>d][<h>h][<m>m][<s>s]`.
///
/// This is the inverse of [`parse_duration`] for non-negative values.
///
/// # Examples
///
/// ```rust
/// use routeros_wire::format_duration;
///
/// assert_eq!(format_duration(0).unwrap(), "0s");
/// assert_eq!(format_duration(86_400).unwrap(), "1d");
/// assert_eq!(format_duration(93_784).unwrap(), "1d2h3m4s");
/// ```
///
/// # Errors
///
/// Returns [`Error::MalformedDuration`] for negative values, which have no
/// wire form.
pub fn format_duration(seconds: i64) -> Result<String> {
    if seconds < 0 {
        return Err(Error::malformed_duration(
            &seconds.to_string(),
            "negative durations have no wire form",
        ));
    }

    let days = seconds / SECONDS_PER_DAY;
    let rem = seconds % SECONDS_PER_DAY;
    let (hours, minutes, secs) = (rem / 3600, rem % 3600 / 60, rem % 60);

    let mut out = String::new();
    if days > 0 {
        out.push_str(&format!("{}d", days));
    }
    for (value, unit) in [(hours, 'h'), (minutes, 'm'), (secs, 's')] {
        if value > 0 {
            out.push_str(&format!("{}{}", value, unit));
        }
    }
    if out.is_empty() {
        out.push_str("0s");
    }
    Ok(out)
}

/// Nanoseconds per unit suffix.
fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(1_000_000_000),
        "m" => Some(60 * 1_000_000_000),
        "h" => Some(3600 * 1_000_000_000),
        _ => None,
    }
}

/// Parses a unit-suffixed duration such as `2h45m` or `1.5s`.
fn parse_clock(s: &str) -> std::result::Result<Duration, String> {
    let (negative, mut rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    if rest == "0" {
        return Ok(Duration::zero());
    }
    if rest.is_empty() {
        return Err("empty duration".to_string());
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let (int_part, tail) = rest.split_at(int_len);
        rest = tail;

        let mut frac_part = "";
        if let Some(tail) = rest.strip_prefix('.') {
            let frac_len = tail.bytes().take_while(u8::is_ascii_digit).count();
            frac_part = &tail[..frac_len];
            rest = &tail[frac_len..];
            if int_part.is_empty() && frac_part.is_empty() {
                return Err("expected digits around '.'".to_string());
            }
        } else if int_part.is_empty() {
            return Err(format!("expected a number at {:?}", rest));
        }

        let unit_len = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        if unit_len == 0 {
            return Err("missing unit".to_string());
        }
        let (unit, tail) = rest.split_at(unit_len);
        rest = tail;
        let scale = unit_nanos(unit).ok_or_else(|| format!("unknown unit {:?}", unit))?;

        let whole: u64 = if int_part.is_empty() {
            0
        } else {
            int_part
                .parse()
                .map_err(|_| format!("number {:?} is out of range", int_part))?
        };
        let mut nanos = whole
            .checked_mul(scale)
            .ok_or_else(|| "duration overflows".to_string())?;

        if !frac_part.is_empty() {
            // Digits past nanosecond precision cannot contribute.
            let digits = &frac_part[..frac_part.len().min(18)];
            let numerator: u128 = digits.parse().map_err(|_| "bad fraction".to_string())?;
            let denominator = 10u128.pow(digits.len() as u32);
            nanos = nanos
                .checked_add((numerator * u128::from(scale) / denominator) as u64)
                .ok_or_else(|| "duration overflows".to_string())?;
        }

        total = total
            .checked_add(nanos)
            .ok_or_else(|| "duration overflows".to_string())?;
    }

    let total = i64::try_from(total).map_err(|_| "duration overflows".to_string())?;
    Ok(Duration::nanoseconds(if negative { -total } else { total }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table() {
        assert_eq!(parse_duration("10s").unwrap(), 10);
        assert_eq!(parse_duration("1d").unwrap(), 86_400);
        assert_eq!(parse_duration("2d3h").unwrap(), 183_600);
        assert_eq!(parse_duration("0d5m").unwrap(), 300);
        assert_eq!(parse_duration("1d2h3m4s").unwrap(), 93_784);
        assert_eq!(parse_duration("23h59m59s").unwrap(), 86_399);
    }

    #[test]
    fn test_parse_fractions_truncate() {
        assert_eq!(parse_duration("1.5h").unwrap(), 5400);
        assert_eq!(parse_duration("4.9s").unwrap(), 4);
        assert_eq!(parse_duration("500ms").unwrap(), 0);
        assert_eq!(parse_duration("1m500ms").unwrap(), 60);
    }

    #[test]
    fn test_parse_zero_forms() {
        assert_eq!(parse_duration("0").unwrap(), 0);
        assert_eq!(parse_duration("0s").unwrap(), 0);
        assert_eq!(parse_duration("0d").unwrap(), 0);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["abc", "", "d", "xd5s", "1d02:03:04", "5", "1d2d3h", "1h.m", "5x"] {
            let err = parse_duration(input).unwrap_err();
            assert!(
                matches!(err, Error::MalformedDuration { .. }),
                "expected malformed duration for {:?}, got {:?}",
                input,
                err
            );
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0).unwrap(), "0s");
        assert_eq!(format_duration(10).unwrap(), "10s");
        assert_eq!(format_duration(3600).unwrap(), "1h");
        assert_eq!(format_duration(183_600).unwrap(), "2d3h");
        assert_eq!(format_duration(86_401).unwrap(), "1d1s");
        assert!(format_duration(-1).is_err());
    }

    #[test]
    fn test_format_parses_back() {
        for secs in [0, 1, 59, 60, 3599, 86_399, 86_400, 93_784, 10 * 86_400 + 7] {
            let text = format_duration(secs).unwrap();
            assert_eq!(parse_duration(&text).unwrap(), secs, "via {:?}", text);
        }
    }
}

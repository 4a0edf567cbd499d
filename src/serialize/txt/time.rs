// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! BIND duration format, used wherever a TTL is expected
//!
//! Follows the rules from <https://tools.ietf.org/html/rfc2308> (NXCaching
//! RFC) and <https://www.zytrax.com/books/dns/apa/time.html>:
//!
//! ```text
//! default is seconds
//! #s = seconds = # x 1 seconds (really!)
//! #m = minutes = # x 60 seconds
//! #h = hours   = # x 3600 seconds
//! #d = day     = # x 86400 seconds
//! #w = week    = # x 604800 seconds
//! ```

use tracing::warn;

use crate::serialize::txt::errors::{ParseErrorKind, ParseResult};

const SECONDS: u64 = 1;
const MINUTES: u64 = 60;
const HOURS: u64 = 3_600;
const DAYS: u64 = 86_400;
const WEEKS: u64 = 604_800;

/// TTL values at or beyond 2^31 are out of the range RFC 2181 allows.
const MAX_TTL: u64 = 1 << 31;

/// Returns true if `value` is syntactically a TTL: a plain decimal number or
/// a sequence of decimal numbers with `w`/`d`/`h`/`m`/`s` unit suffixes,
/// case-insensitive, in any order.
pub fn is_time_format(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }

    let mut pending_digits = false;
    for c in value.chars() {
        match c {
            '0'..='9' => pending_digits = true,
            'S' | 's' | 'M' | 'm' | 'H' | 'h' | 'D' | 'd' | 'W' | 'w' => {
                // a unit must follow at least one digit
                if !pending_digits {
                    return false;
                }
                pending_digits = false;
            }
            _ => return false,
        }
    }

    true
}

/// Converts a duration string into seconds.
///
/// Unit components are summed; a trailing number without a unit counts as
/// seconds. Totals at or beyond 2^31 are out of TTL range and collapse to 0
/// rather than failing; zone files in the wild rely on this leniency.
///
/// # Example
/// ```
/// use bindzone::serialize::txt::time::to_seconds;
///
/// assert_eq!(to_seconds("0").unwrap(), 0);
/// assert_eq!(to_seconds("1800").unwrap(), 1800);
/// assert_eq!(to_seconds("1h30m").unwrap(), 5400);
/// assert_eq!(to_seconds("1W").unwrap(), 604800);
/// assert_eq!(to_seconds("1s2d3w4h2m").unwrap(), 1 + 2 * 86400 + 3 * 604800 + 4 * 3600 + 2 * 60);
/// assert_eq!(to_seconds("2147483648").unwrap(), 0);
/// assert!(to_seconds("s").is_err());
/// assert!(to_seconds("").is_err());
/// ```
pub fn to_seconds(value: &str) -> ParseResult<u32> {
    if value.is_empty() {
        return Err(ParseErrorKind::ParseTime(value.to_string()).into());
    }

    let mut total = 0_u64;
    let mut start: Option<usize> = None;
    for (i, c) in value.char_indices() {
        let digits = match (start, c) {
            (None, '0'..='9') => {
                start = Some(i);
                continue;
            }
            (Some(_), '0'..='9') => continue,
            (Some(s), 'S' | 's' | 'M' | 'm' | 'H' | 'h' | 'D' | 'd' | 'W' | 'w') => &value[s..i],
            _ => return Err(ParseErrorKind::ParseTime(value.to_string()).into()),
        };

        let multiplier = match c.to_ascii_lowercase() {
            's' => SECONDS,
            'm' => MINUTES,
            'h' => HOURS,
            'd' => DAYS,
            'w' => WEEKS,
            _ => unreachable!(),
        };

        // the slice is all ASCII digits, so a parse failure means overflow
        let number = digits.parse::<u64>().unwrap_or(u64::MAX);
        total = total.saturating_add(number.saturating_mul(multiplier));
        start = None;
    }

    if let Some(s) = start {
        let number = value[s..].parse::<u64>().unwrap_or(u64::MAX);
        total = total.saturating_add(number);
    }

    if total >= MAX_TTL {
        warn!("TTL out of range, using 0: {}", value);
        return Ok(0);
    }

    Ok(total as u32)
}

/// Renders seconds in the most compact duration form, largest units first.
///
/// The result always satisfies `to_seconds(&to_human_readable(n)) == n`.
///
/// # Example
/// ```
/// use bindzone::serialize::txt::time::to_human_readable;
///
/// assert_eq!(to_human_readable(0), "0");
/// assert_eq!(to_human_readable(1800), "30m");
/// assert_eq!(to_human_readable(5400), "1h30m");
/// assert_eq!(to_human_readable(907200), "1w3d12h");
/// ```
pub fn to_human_readable(seconds: u32) -> String {
    if seconds == 0 {
        return "0".to_string();
    }

    let mut remaining = u64::from(seconds);
    let mut out = String::new();
    for (multiplier, unit) in [(WEEKS, 'w'), (DAYS, 'd'), (HOURS, 'h'), (MINUTES, 'm'), (SECONDS, 's')] {
        let count = remaining / multiplier;
        if count > 0 {
            out.push_str(&count.to_string());
            out.push(unit);
            remaining -= count * multiplier;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_time_format() {
        assert!(is_time_format("0"));
        assert!(is_time_format("86400"));
        assert!(is_time_format("1h30m"));
        assert!(is_time_format("3W"));
        assert!(is_time_format("3w3w"));

        assert!(!is_time_format(""));
        assert!(!is_time_format("s"));
        assert!(!is_time_format("h1"));
        assert!(!is_time_format("1x"));
        assert!(!is_time_format("example.com."));
        assert!(!is_time_format("12.34"));
    }

    #[test]
    fn test_to_seconds_units() {
        assert_eq!(to_seconds("1").unwrap(), 1);
        assert_eq!(to_seconds("1S").unwrap(), 1);
        assert_eq!(to_seconds("1m").unwrap(), 60);
        assert_eq!(to_seconds("1H").unwrap(), 3600);
        assert_eq!(to_seconds("1d").unwrap(), 86400);
        assert_eq!(to_seconds("1w").unwrap(), 604800);
        assert_eq!(to_seconds("3w3w").unwrap(), 2 * 3 * 604800);
        assert_eq!(to_seconds("2d1").unwrap(), 2 * 86400 + 1);
    }

    #[test]
    fn test_out_of_range_collapses_to_zero() {
        assert_eq!(to_seconds("2147483647").unwrap(), 2147483647);
        assert_eq!(to_seconds("2147483648").unwrap(), 0);
        assert_eq!(to_seconds("10000w").unwrap(), 0);
        assert_eq!(to_seconds("99999999999999999999999999").unwrap(), 0);
    }

    #[test]
    fn test_round_trip() {
        for seconds in [0, 1, 59, 60, 61, 1800, 3600, 5400, 86401, 604800, 907200, 2147483647] {
            let human = to_human_readable(seconds);
            assert_eq!(to_seconds(&human).unwrap(), seconds, "via {human}");
        }
    }
}

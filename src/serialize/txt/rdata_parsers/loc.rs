// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for LOC text form
//!
//! `d1 [m1 [s1]] {N|S} d2 [m2 [s2]] {E|W} alt[m] [siz[m] [hp[m] [vp[m]]]]`
//! where minutes, seconds and the trailing sphere parameters are optional.

use crate::rr::rdata::LOC;
use crate::rr::rdata::loc::{
    DEFAULT_HORIZONTAL_PRECISION, DEFAULT_SIZE, DEFAULT_VERTICAL_PRECISION,
};
use crate::serialize::txt::errors::{ParseError, ParseErrorKind, ParseResult};

/// Parse the RData from a set of tokens.
pub(crate) fn parse<'i, I: Iterator<Item = &'i str>>(tokens: I) -> ParseResult<LOC> {
    let tokens: Vec<&str> = tokens.collect();
    let mut pos = 0;

    let latitude = parse_coordinate(&tokens, &mut pos, 'N', 'S', 90.0)?;
    let longitude = parse_coordinate(&tokens, &mut pos, 'E', 'W', 180.0)?;

    let altitude = match tokens.get(pos) {
        Some(token) => {
            pos += 1;
            parse_meters(token)?
        }
        None => return Err(ParseErrorKind::MissingToken("altitude".to_string()).into()),
    };

    let mut sphere = [
        DEFAULT_SIZE,
        DEFAULT_HORIZONTAL_PRECISION,
        DEFAULT_VERTICAL_PRECISION,
    ];
    for value in sphere.iter_mut() {
        match tokens.get(pos) {
            Some(token) => {
                pos += 1;
                *value = parse_meters(token)?;
            }
            None => break,
        }
    }
    let [size, horizontal_precision, vertical_precision] = sphere;

    if pos < tokens.len() {
        return Err(ParseError::from(format!(
            "trailing data in LOC record: {rest}",
            rest = tokens[pos..].join(" ")
        )));
    }

    Ok(LOC::new(
        latitude,
        longitude,
        altitude,
        size,
        horizontal_precision,
        vertical_precision,
    ))
}

/// Reads `deg [min [sec]] <hemisphere>` and folds it into signed decimal
/// degrees.
fn parse_coordinate(
    tokens: &[&str],
    pos: &mut usize,
    positive: char,
    negative: char,
    limit: f64,
) -> ParseResult<f64> {
    let mut parts = [0.0_f64; 3];
    let mut count = 0;
    let mut sign = None;

    while sign.is_none() {
        let token = match tokens.get(*pos) {
            Some(token) => *token,
            None => {
                return Err(ParseErrorKind::MissingToken(format!(
                    "hemisphere ({positive}/{negative})"
                ))
                .into())
            }
        };
        *pos += 1;

        match token.to_ascii_uppercase().as_str() {
            h if h.len() == 1 && h.starts_with(positive) => sign = Some(1.0),
            h if h.len() == 1 && h.starts_with(negative) => sign = Some(-1.0),
            _ => {
                if count == 3 {
                    return Err(ParseError::from(format!(
                        "expected {positive} or {negative} in LOC record, got: {token}"
                    )));
                }
                parts[count] = parse_number(token)?;
                count += 1;
            }
        }
    }

    if count == 0 {
        return Err(ParseErrorKind::MissingToken("degrees".to_string()).into());
    }

    let sign = sign.unwrap_or(1.0);
    let degrees = parts[0] + parts[1] / 60.0 + parts[2] / 3600.0;
    if degrees > limit {
        return Err(ParseError::from(format!(
            "coordinate out of range in LOC record: {degrees}"
        )));
    }

    Ok(sign * degrees)
}

/// Parses a meters value, with the optional `m` suffix.
fn parse_meters(token: &str) -> ParseResult<f64> {
    let trimmed = token
        .strip_suffix('m')
        .or_else(|| token.strip_suffix('M'))
        .unwrap_or(token);
    parse_number(trimmed)
}

fn parse_number(token: &str) -> ParseResult<f64> {
    token
        .parse::<f64>()
        .map_err(|_| ParseError::from(format!("invalid number in LOC record: {token}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_form() {
        let loc = parse(
            ["51", "30", "12.748", "N", "0", "7", "39.612", "W", "0.00m", "1m", "10000m", "10m"]
                .into_iter(),
        )
        .unwrap();
        assert!((loc.latitude() - 51.50354111).abs() < 1e-6);
        assert!((loc.longitude() + 0.12767).abs() < 1e-4);
        assert_eq!(loc.altitude(), 0.0);
        assert_eq!(loc.size(), 1.0);
    }

    #[test]
    fn test_parse_short_form_applies_defaults() {
        let loc = parse(["52", "N", "4", "E", "-2.00m"].into_iter()).unwrap();
        assert_eq!(loc.latitude(), 52.0);
        assert_eq!(loc.longitude(), 4.0);
        assert_eq!(loc.altitude(), -2.0);
        assert_eq!(loc.size(), 1.0);
        assert_eq!(loc.horizontal_precision(), 10_000.0);
        assert_eq!(loc.vertical_precision(), 10.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse(["52", "N", "4", "E"].into_iter()).is_err());
        assert!(parse(["52", "X", "4", "E", "0m"].into_iter()).is_err());
        assert!(parse(["52", "N", "4", "E", "0m", "1m", "2m", "3m", "4m"].into_iter()).is_err());
    }
}

// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for SOA text form

use crate::rr::rdata::SOA;
use crate::serialize::txt::errors::{ParseError, ParseErrorKind, ParseResult};
use crate::serialize::txt::time;

/// Parse the RData from a set of tokens.
///
/// The interval fields accept the duration notation (`2h`, `1w`) anywhere
/// a plain second count is allowed; the serial is a plain integer.
pub(crate) fn parse<'i, I: Iterator<Item = &'i str>>(mut tokens: I) -> ParseResult<SOA> {
    let mname: String = tokens
        .next()
        .map(str::to_string)
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("mname".to_string())))?;

    let rname: String = tokens
        .next()
        .map(str::to_string)
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("rname".to_string())))?;

    let serial: u32 = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("serial".to_string())))
        .and_then(|s| s.parse().map_err(ParseError::from))?;

    let refresh: i32 = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("refresh".to_string())))
        .and_then(time::to_seconds)?
        .try_into()
        .map_err(|_e| ParseError::from("refresh outside i32 range"))?;

    let retry: i32 = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("retry".to_string())))
        .and_then(time::to_seconds)?
        .try_into()
        .map_err(|_e| ParseError::from("retry outside i32 range"))?;

    let expire: i32 = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("expire".to_string())))
        .and_then(time::to_seconds)?
        .try_into()
        .map_err(|_e| ParseError::from("expire outside i32 range"))?;

    let minimum: u32 = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("minimum".to_string())))
        .and_then(time::to_seconds)?;

    Ok(SOA::new(
        mname, rname, serial, refresh, retry, expire, minimum,
    ))
}

#[test]
fn test_parse() {
    let tokens = [
        "ns.example.com.",
        "root.example.com.",
        "199609203",
        "8h",
        "120m",
        "7d",
        "24h",
    ];

    let parsed = parse(tokens.into_iter()).expect("failed to parse tokens");
    let expected = SOA::new(
        "ns.example.com.".to_string(),
        "root.example.com.".to_string(),
        199609203,
        28800,
        7200,
        604800,
        86400,
    );

    assert_eq!(parsed, expected);
}

#[test]
fn test_parse_missing_field() {
    let err = parse(["ns.example.com."].into_iter()).expect_err("rname is required");
    assert!(err.to_string().contains("rname"));
}

// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for SRV text form

use crate::rr::rdata::SRV;
use crate::serialize::txt::errors::{ParseError, ParseErrorKind, ParseResult};

/// Parse the RData from a set of tokens.
pub(crate) fn parse<'i, I: Iterator<Item = &'i str>>(mut tokens: I) -> ParseResult<SRV> {
    let priority: u16 = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("priority".to_string())))
        .and_then(|s| s.parse().map_err(ParseError::from))?;

    let weight: u16 = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("weight".to_string())))
        .and_then(|s| s.parse().map_err(ParseError::from))?;

    let port: u16 = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("port".to_string())))
        .and_then(|s| s.parse().map_err(ParseError::from))?;

    let target: String = tokens
        .next()
        .map(str::to_string)
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("target".to_string())))?;

    Ok(SRV::new(priority, weight, port, target))
}

#[test]
fn test_parse() {
    let srv = parse(["0", "5", "5060", "sip.example.com."].into_iter()).unwrap();
    assert_eq!(srv.priority(), 0);
    assert_eq!(srv.weight(), 5);
    assert_eq!(srv.port(), 5060);
    assert_eq!(srv.target(), "sip.example.com.");
}

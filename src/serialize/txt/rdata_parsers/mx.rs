// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for MX text form

use crate::rr::rdata::MX;
use crate::serialize::txt::errors::{ParseError, ParseErrorKind, ParseResult};

/// Parse the RData from a set of tokens.
pub(crate) fn parse<'i, I: Iterator<Item = &'i str>>(mut tokens: I) -> ParseResult<MX> {
    let preference: u16 = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("preference".to_string())))
        .and_then(|s| s.parse().map_err(ParseError::from))?;

    let exchange: String = tokens
        .next()
        .map(str::to_string)
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("exchange".to_string())))?;

    Ok(MX::new(preference, exchange))
}

#[test]
fn test_parse() {
    let mx = parse(["10", "mail.example.com."].into_iter()).unwrap();
    assert_eq!(mx.preference(), 10);
    assert_eq!(mx.exchange(), "mail.example.com.");

    assert!(parse(["ten", "mail.example.com."].into_iter()).is_err());
    assert!(parse(["10"].into_iter()).is_err());
}

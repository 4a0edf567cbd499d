// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for URI text form

use crate::rr::rdata::URI;
use crate::serialize::txt::entry::unquote;
use crate::serialize::txt::errors::{ParseError, ParseErrorKind, ParseResult};

/// Parse the RData from a set of tokens, `<priority> <weight> <target>`.
pub(crate) fn parse<'i, I: Iterator<Item = &'i str>>(mut tokens: I) -> ParseResult<URI> {
    let priority: u16 = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("priority".to_string())))
        .and_then(|s| s.parse().map_err(ParseError::from))?;

    let weight: u16 = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("weight".to_string())))
        .and_then(|s| s.parse().map_err(ParseError::from))?;

    let target = tokens
        .next()
        .map(unquote)
        .ok_or_else(|| ParseErrorKind::MissingToken("target".to_string()))?;

    Ok(URI::new(priority, weight, target))
}

#[test]
fn test_parse() {
    let uri = parse(["10", "1", "\"https://example.com/path\""].into_iter()).unwrap();
    assert_eq!(uri.priority(), 10);
    assert_eq!(uri.weight(), 1);
    assert_eq!(uri.target(), "https://example.com/path");
}

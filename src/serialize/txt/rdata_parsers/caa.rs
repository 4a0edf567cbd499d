// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for CAA text form

use crate::rr::rdata::CAA;
use crate::serialize::txt::entry::unquote;
use crate::serialize::txt::errors::{ParseError, ParseErrorKind, ParseResult};

/// Parse the RData from a set of tokens, `<flags> <tag> <value>`.
pub(crate) fn parse<'i, I: Iterator<Item = &'i str>>(mut tokens: I) -> ParseResult<CAA> {
    let flags: u8 = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("flags".to_string())))
        .and_then(|s| s.parse().map_err(ParseError::from))?;

    let tag = tokens
        .next()
        .map(str::to_string)
        .ok_or_else(|| ParseErrorKind::MissingToken("tag".to_string()))?;
    if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ParseError::from(format!("invalid CAA tag: {tag}")));
    }

    let value = tokens
        .next()
        .map(unquote)
        .ok_or_else(|| ParseErrorKind::MissingToken("value".to_string()))?;

    Ok(CAA::new(flags, tag, value))
}

#[test]
fn test_parse() {
    let caa = parse(["0", "issue", "\"letsencrypt.org\""].into_iter()).unwrap();
    assert_eq!(caa.flags(), 0);
    assert_eq!(caa.tag(), "issue");
    assert_eq!(caa.value(), "letsencrypt.org");

    assert!(parse(["0", "is sue", "\"x\""].into_iter()).is_err());
    assert!(parse(["256", "issue", "\"x\""].into_iter()).is_err());
}

// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for HINFO text form

use crate::rr::rdata::HINFO;
use crate::serialize::txt::entry::unquote;
use crate::serialize::txt::errors::{ParseErrorKind, ParseResult};

/// Parse the RData from a set of tokens.
pub(crate) fn parse<'i, I: Iterator<Item = &'i str>>(mut tokens: I) -> ParseResult<HINFO> {
    let cpu = tokens
        .next()
        .map(unquote)
        .ok_or_else(|| ParseErrorKind::MissingToken("cpu".to_string()))?;
    let os = tokens
        .next()
        .map(unquote)
        .ok_or_else(|| ParseErrorKind::MissingToken("os".to_string()))?;

    Ok(HINFO::new(cpu, os))
}

#[test]
fn test_parse() {
    let hinfo = parse(["\"Generic PC clone\"", "\"NetBSD-1.4\""].into_iter()).unwrap();
    assert_eq!(hinfo.cpu(), "Generic PC clone");
    assert_eq!(hinfo.os(), "NetBSD-1.4");
}

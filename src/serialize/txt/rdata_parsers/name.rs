// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for name-only record data: CNAME, NS, PTR, the SRV target, ...

use crate::serialize::txt::errors::{ParseErrorKind, ParseResult};

/// Parse a single domain name from the tokens.
pub(crate) fn parse<'i, I: Iterator<Item = &'i str>>(mut tokens: I) -> ParseResult<String> {
    tokens
        .next()
        .map(str::to_string)
        .ok_or_else(|| ParseErrorKind::MissingToken("name".to_string()).into())
}

#[test]
fn test_parse() {
    assert_eq!(parse(["ns1.example.com."].into_iter()).unwrap(), "ns1.example.com.");
    assert!(parse(std::iter::empty()).is_err());
}

// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for A text form

use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::rr::rdata::A;
use crate::serialize::txt::errors::{ParseError, ParseErrorKind, ParseResult};

/// Parse the RData from a set of tokens.
pub(crate) fn parse<'i, I: Iterator<Item = &'i str>>(mut tokens: I) -> ParseResult<A> {
    let address: Ipv4Addr = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("ipv4 address".to_string())))
        .and_then(|s| Ipv4Addr::from_str(s).map_err(Into::into))?;
    Ok(address.into())
}

#[test]
fn test_parse() {
    assert_eq!(
        parse(["192.0.2.1"].into_iter()).unwrap(),
        A::new(192, 0, 2, 1)
    );
    assert!(parse(["192.0.2"].into_iter()).is_err());
    assert!(parse(std::iter::empty()).is_err());
}

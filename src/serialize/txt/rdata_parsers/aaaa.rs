// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for AAAA text form

use std::net::Ipv6Addr;
use std::str::FromStr;

use crate::rr::rdata::AAAA;
use crate::serialize::txt::errors::{ParseError, ParseErrorKind, ParseResult};

/// Parse the RData from a set of tokens.
pub(crate) fn parse<'i, I: Iterator<Item = &'i str>>(mut tokens: I) -> ParseResult<AAAA> {
    let address: Ipv6Addr = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("ipv6 address".to_string())))
        .and_then(|s| Ipv6Addr::from_str(s).map_err(Into::into))?;
    Ok(address.into())
}

#[test]
fn test_parse() {
    assert_eq!(
        parse(["2001:db8::1"].into_iter()).unwrap(),
        AAAA("2001:db8::1".parse().unwrap())
    );
    assert!(parse(["not-an-address"].into_iter()).is_err());
}

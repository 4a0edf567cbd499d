// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for DNSKEY text form

use crate::rr::rdata::DNSKEY;
use crate::serialize::txt::errors::{ParseError, ParseErrorKind, ParseResult};

use super::decode_base64;

/// Parse the RData from a set of tokens,
/// `<flags> <protocol> <algorithm> <public key>`.
pub(crate) fn parse<'i, I: Iterator<Item = &'i str>>(mut tokens: I) -> ParseResult<DNSKEY> {
    let flags: u16 = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("flags".to_string())))
        .and_then(|s| s.parse().map_err(ParseError::from))?;

    let protocol: u8 = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("protocol".to_string())))
        .and_then(|s| s.parse().map_err(ParseError::from))?;

    let algorithm: u8 = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("algorithm".to_string())))
        .and_then(|s| s.parse().map_err(ParseError::from))?;

    // key material wraps over several tokens once collapsed from ( )
    let public_key = decode_base64(tokens, "public key")?;

    Ok(DNSKEY::new(flags, protocol, algorithm, public_key))
}

#[test]
fn test_parse() {
    let dnskey = parse(["256", "3", "8", "AwEAAag/59Oh", "US1ZC2OP5Nyw"].into_iter()).unwrap();
    assert_eq!(dnskey.flags(), 256);
    assert_eq!(dnskey.protocol(), 3);
    assert_eq!(dnskey.algorithm(), 8);
    assert!(!dnskey.public_key().is_empty());
}

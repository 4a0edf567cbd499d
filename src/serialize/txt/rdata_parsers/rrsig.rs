// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for RRSIG text form

use std::str::FromStr;

use crate::rr::rdata::RRSIG;
use crate::rr::record_type::RecordType;
use crate::serialize::txt::errors::{ParseError, ParseErrorKind, ParseResult};
use crate::serialize::txt::time;

use super::decode_base64;

/// Parse the RData from a set of tokens.
pub(crate) fn parse<'i, I: Iterator<Item = &'i str>>(mut tokens: I) -> ParseResult<RRSIG> {
    let type_covered: RecordType = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("type covered".to_string())))
        .and_then(|s| RecordType::from_str(&s.to_ascii_uppercase()))?;

    let algorithm: u8 = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("algorithm".to_string())))
        .and_then(|s| s.parse().map_err(ParseError::from))?;

    let labels: u8 = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("labels".to_string())))
        .and_then(|s| s.parse().map_err(ParseError::from))?;

    let original_ttl: u32 = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("original ttl".to_string())))
        .and_then(time::to_seconds)?;

    // both timestamp notations (epoch seconds, YYYYMMDDHHmmSS) pass through
    let expiration: String = tokens
        .next()
        .map(str::to_string)
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("expiration".to_string())))?;

    let inception: String = tokens
        .next()
        .map(str::to_string)
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("inception".to_string())))?;

    let key_tag: u16 = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("key tag".to_string())))
        .and_then(|s| s.parse().map_err(ParseError::from))?;

    let signer_name: String = tokens
        .next()
        .map(str::to_string)
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("signer name".to_string())))?;

    let signature = decode_base64(tokens, "signature")?;

    Ok(RRSIG::new(
        type_covered,
        algorithm,
        labels,
        original_ttl,
        expiration,
        inception,
        key_tag,
        signer_name,
        signature,
    ))
}

#[test]
fn test_parse() {
    let rrsig = parse(
        [
            "A",
            "8",
            "3",
            "86400",
            "20240301000000",
            "20240201000000",
            "2642",
            "example.com.",
            "oJB1W6WNGv+l",
            "dvQ3WDG0MQkg",
        ]
        .into_iter(),
    )
    .unwrap();
    assert_eq!(rrsig.type_covered(), RecordType::A);
    assert_eq!(rrsig.original_ttl(), 86400);
    assert_eq!(rrsig.expiration(), "20240301000000");
    assert_eq!(rrsig.signer_name(), "example.com.");
}

// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for DS text form

use crate::rr::rdata::DS;
use crate::serialize::txt::errors::{ParseError, ParseErrorKind, ParseResult};

use super::decode_hex;

/// Parse the RData from a set of tokens,
/// `<key tag> <algorithm> <digest type> <digest>`.
pub(crate) fn parse<'i, I: Iterator<Item = &'i str>>(mut tokens: I) -> ParseResult<DS> {
    let key_tag: u16 = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("key tag".to_string())))
        .and_then(|s| s.parse().map_err(ParseError::from))?;

    let algorithm: u8 = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("algorithm".to_string())))
        .and_then(|s| s.parse().map_err(ParseError::from))?;

    let digest_type: u8 = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("digest type".to_string())))
        .and_then(|s| s.parse().map_err(ParseError::from))?;

    // the digest may be split across tokens, whitespace is allowed within
    // the hexadecimal text
    let digest = decode_hex(tokens, "digest")?;

    Ok(DS::new(key_tag, algorithm, digest_type, digest))
}

#[test]
fn test_parse() {
    let ds = parse(["60485", "5", "1", "2BB183AF5F22588179A53B0A", "98631FAD1A292118"].into_iter())
        .unwrap();
    assert_eq!(ds.key_tag(), 60485);
    assert_eq!(ds.algorithm(), 5);
    assert_eq!(ds.digest_type(), 1);
    assert_eq!(ds.digest().len(), 20);
}

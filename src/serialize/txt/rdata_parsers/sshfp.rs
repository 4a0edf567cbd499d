// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for SSHFP text form

use crate::rr::rdata::SSHFP;
use crate::serialize::txt::errors::{ParseError, ParseErrorKind, ParseResult};

use super::decode_hex;

/// Parse the RData from a set of tokens,
/// `<algorithm> <fingerprint type> <fingerprint>`.
pub(crate) fn parse<'i, I: Iterator<Item = &'i str>>(mut tokens: I) -> ParseResult<SSHFP> {
    let algorithm: u8 = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("algorithm".to_string())))
        .and_then(|s| s.parse().map_err(ParseError::from))?;

    let fingerprint_type: u8 = tokens
        .next()
        .ok_or_else(|| {
            ParseError::from(ParseErrorKind::MissingToken("fingerprint type".to_string()))
        })
        .and_then(|s| s.parse().map_err(ParseError::from))?;

    let fingerprint = decode_hex(tokens, "fingerprint")?;

    Ok(SSHFP::new(algorithm, fingerprint_type, fingerprint))
}

#[test]
fn test_parse() {
    let sshfp = parse(["2", "1", "123456789abcdef67890123456789abcdef67890"].into_iter()).unwrap();
    assert_eq!(sshfp.algorithm(), 2);
    assert_eq!(sshfp.fingerprint_type(), 1);
    assert_eq!(sshfp.fingerprint()[0], 0x12);

    assert!(parse(["2", "1"].into_iter()).is_err());
}

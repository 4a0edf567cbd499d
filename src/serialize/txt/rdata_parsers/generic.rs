// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for the RFC 3597 generic rdata encoding
//!
//! ```text
//! 5.  Text Representation
//!
//!    The RDATA section of an RR of unknown type is represented as a
//!    sequence of white space separated words as follows:
//!
//!       The special token \# (a backslash immediately followed by a hash
//!       sign), which identifies the RDATA as having the generic encoding
//!       defined herein rather than a traditional type-specific encoding.
//!
//!       An unsigned decimal integer specifying the RDATA length in octets.
//!
//!       Zero or more words of hexadecimal data encoding the actual RDATA
//!       field, each containing an even number of hexadecimal digits.
//! ```

use crate::rr::rdata::UnknownRdata;
use crate::serialize::txt::errors::{ParseError, ParseErrorKind, ParseResult};

use super::decode_hex;

/// The leading token marking the generic encoding.
pub(crate) const GENERIC_MARKER: &str = "\\#";

/// Parse generically encoded rdata under the given type name.
pub(crate) fn parse<'i, I: Iterator<Item = &'i str>>(
    type_name: &str,
    mut tokens: I,
) -> ParseResult<UnknownRdata> {
    match tokens.next() {
        Some(GENERIC_MARKER) => (),
        Some(other) => {
            return Err(ParseError::from(format!(
                "expected \\# to start generic rdata, got: {other}"
            )))
        }
        None => return Err(ParseErrorKind::MissingToken("\\#".to_string()).into()),
    }

    let length: usize = tokens
        .next()
        .ok_or_else(|| ParseError::from(ParseErrorKind::MissingToken("rdata length".to_string())))
        .and_then(|s| s.parse().map_err(ParseError::from))?;

    let octets = if length == 0 {
        Vec::new()
    } else {
        decode_hex(tokens, "rdata octets")?
    };

    if octets.len() != length {
        return Err(ParseError::from(format!(
            "generic rdata length mismatch: declared {length}, got {actual}",
            actual = octets.len()
        )));
    }

    Ok(UnknownRdata::binary(type_name, octets))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let rdata = parse("TYPE731", ["\\#", "6", "abcd", "ef012345"].into_iter()).unwrap();
        assert_eq!(rdata.type_name(), "TYPE731");
        assert_eq!(rdata.octets(), Some(&[0xab, 0xcd, 0xef, 0x01, 0x23, 0x45][..]));
    }

    #[test]
    fn test_parse_empty() {
        let rdata = parse("TYPE62347", ["\\#", "0"].into_iter()).unwrap();
        assert_eq!(rdata.octets(), Some(&[][..]));
    }

    #[test]
    fn test_parse_length_mismatch() {
        assert!(parse("TYPE731", ["\\#", "3", "abcd"].into_iter()).is_err());
        assert!(parse("TYPE731", ["abcd"].into_iter()).is_err());
        assert!(parse("TYPE731", std::iter::empty()).is_err());
    }
}

// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parsers for the presentation form of each supported rdata type
//!
//! Each module exposes one `parse` function that consumes the tokens
//! remaining on a record line after the type field.

use data_encoding::{BASE64, BASE64_NOPAD, HEXLOWER_PERMISSIVE};

use crate::serialize::txt::errors::{ParseErrorKind, ParseResult};

pub(crate) mod a;
pub(crate) mod aaaa;
pub(crate) mod apl;
pub(crate) mod caa;
pub(crate) mod dnskey;
pub(crate) mod ds;
pub(crate) mod generic;
pub(crate) mod hinfo;
pub(crate) mod loc;
pub(crate) mod mx;
pub(crate) mod name;
pub(crate) mod nsec;
pub(crate) mod rrsig;
pub(crate) mod soa;
pub(crate) mod srv;
pub(crate) mod sshfp;
pub(crate) mod txt;
pub(crate) mod uri;

/// Decodes the remaining tokens as one hexadecimal string; whitespace
/// between tokens is allowed by the presentation formats that use hex.
pub(crate) fn decode_hex<'i, I: Iterator<Item = &'i str>>(
    tokens: I,
    field: &str,
) -> ParseResult<Vec<u8>> {
    let hex: String = tokens.collect();
    if hex.is_empty() {
        return Err(ParseErrorKind::MissingToken(field.to_string()).into());
    }
    HEXLOWER_PERMISSIVE.decode(hex.as_bytes()).map_err(Into::into)
}

/// Decodes the remaining tokens as one base64 string, with or without
/// padding; whitespace between tokens is allowed.
pub(crate) fn decode_base64<'i, I: Iterator<Item = &'i str>>(
    tokens: I,
    field: &str,
) -> ParseResult<Vec<u8>> {
    let b64: String = tokens.collect();
    if b64.is_empty() {
        return Err(ParseErrorKind::MissingToken(field.to_string()).into());
    }
    BASE64
        .decode(b64.as_bytes())
        .or_else(|_| BASE64_NOPAD.decode(b64.as_bytes()))
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_hex_mixed_case_and_split() {
        let tokens = ["2BB183AF", "5f22"];
        assert_eq!(
            decode_hex(tokens.into_iter(), "digest").unwrap(),
            vec![0x2b, 0xb1, 0x83, 0xaf, 0x5f, 0x22]
        );
        assert!(decode_hex(std::iter::empty(), "digest").is_err());
        assert!(decode_hex(["zz"].into_iter(), "digest").is_err());
    }

    #[test]
    fn test_decode_base64_padding_optional() {
        assert_eq!(decode_base64(["aGk="].into_iter(), "key").unwrap(), b"hi");
        assert_eq!(decode_base64(["aGk"].into_iter(), "key").unwrap(), b"hi");
        assert!(decode_base64(std::iter::empty(), "key").is_err());
    }
}

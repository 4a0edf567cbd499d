// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! fallback rdata for types outside the built-in catalog
//!
//! Two shapes exist: octets decoded from the [RFC 3597](https://tools.ietf.org/html/rfc3597)
//! `\# <length> <hex>` generic encoding, and verbatim text kept for records
//! produced by custom handlers that do not structure their payload.

use std::fmt;

use data_encoding::HEXUPPER;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rdata carried by type name only, with an uninterpreted payload.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct UnknownRdata {
    type_name: String,
    payload: UnknownPayload,
}

/// The payload shapes an [`UnknownRdata`] can carry.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum UnknownPayload {
    /// Octets from the RFC 3597 `\# <length> <hex>` generic encoding
    Octets(Vec<u8>),
    /// Verbatim rdata text
    Text(String),
}

impl UnknownRdata {
    /// Creates rdata from RFC 3597 generic-form octets.
    pub fn binary(type_name: impl Into<String>, octets: Vec<u8>) -> Self {
        Self {
            type_name: type_name.into(),
            payload: UnknownPayload::Octets(octets),
        }
    }

    /// Creates rdata carrying verbatim text.
    pub fn text(type_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            payload: UnknownPayload::Text(text.into()),
        }
    }

    /// The type name this rdata was parsed under, uppercase
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The payload
    pub fn payload(&self) -> &UnknownPayload {
        &self.payload
    }

    /// The octets, when the payload came from the generic encoding
    pub fn octets(&self) -> Option<&[u8]> {
        match &self.payload {
            UnknownPayload::Octets(octets) => Some(octets),
            UnknownPayload::Text(_) => None,
        }
    }
}

impl fmt::Display for UnknownRdata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            UnknownPayload::Octets(octets) if octets.is_empty() => f.write_str("\\# 0"),
            UnknownPayload::Octets(octets) => {
                write!(
                    f,
                    "\\# {len} {hex}",
                    len = octets.len(),
                    hex = HEXUPPER.encode(octets)
                )
            }
            UnknownPayload::Text(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_generic_form() {
        let rdata = UnknownRdata::binary("TYPE731", vec![0xab, 0xcd, 0xef, 0x01, 0x23, 0x45]);
        assert_eq!(rdata.to_string(), "\\# 6 ABCDEF012345");

        let empty = UnknownRdata::binary("TYPE62347", Vec::new());
        assert_eq!(empty.to_string(), "\\# 0");
    }

    #[test]
    fn test_display_text_form() {
        let rdata = UnknownRdata::text("SPF", "\"v=spf1 a -all\"");
        assert_eq!(rdata.to_string(), "\"v=spf1 a -all\"");
    }
}

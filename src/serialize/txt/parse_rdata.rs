// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! record data enum variants

use crate::rr::rdata::{CNAME, NS, PTR};
use crate::rr::record_data::RData;
use crate::rr::record_type::RecordType;
use crate::serialize::txt::entry::tokenize;
use crate::serialize::txt::errors::{ParseError, ParseResult};
use crate::serialize::txt::rdata_parsers::*;

/// Extension on RData for text parsing
pub trait RDataParser: Sized {
    /// Attempts to parse a stream of tokenized strs into the RData of the specified record type
    fn parse<'i, I: Iterator<Item = &'i str>>(
        record_type: RecordType,
        tokens: I,
    ) -> ParseResult<Self>;

    /// Parse RData from a string
    fn try_from_str(record_type: RecordType, s: &str) -> ParseResult<Self>;
}

impl RDataParser for RData {
    /// Parse the RData from a set of tokens
    fn parse<'i, I: Iterator<Item = &'i str>>(
        record_type: RecordType,
        tokens: I,
    ) -> ParseResult<Self> {
        let mut tokens = tokens.peekable();

        // any type may use the RFC 3597 generic encoding instead of its
        // type-specific presentation
        if tokens.peek() == Some(&generic::GENERIC_MARKER) {
            return generic::parse(&record_type.to_string(), tokens).map(Self::Unknown);
        }

        let rdata = match record_type {
            RecordType::A => Self::A(a::parse(tokens)?),
            RecordType::AAAA => Self::AAAA(aaaa::parse(tokens)?),
            RecordType::APL => apl::parse(tokens).map(Self::APL)?,
            RecordType::CAA => caa::parse(tokens).map(Self::CAA)?,
            RecordType::CNAME => Self::CNAME(CNAME(name::parse(tokens)?)),
            RecordType::DNSKEY => Self::DNSKEY(dnskey::parse(tokens)?),
            RecordType::DS => Self::DS(ds::parse(tokens)?),
            RecordType::HINFO => Self::HINFO(hinfo::parse(tokens)?),
            RecordType::LOC => Self::LOC(loc::parse(tokens)?),
            RecordType::MX => Self::MX(mx::parse(tokens)?),
            RecordType::NS => Self::NS(NS(name::parse(tokens)?)),
            RecordType::NSEC => Self::NSEC(nsec::parse(tokens)?),
            RecordType::PTR => Self::PTR(PTR(name::parse(tokens)?)),
            RecordType::RRSIG => Self::RRSIG(rrsig::parse(tokens)?),
            RecordType::SOA => Self::SOA(soa::parse(tokens)?),
            RecordType::SRV => Self::SRV(srv::parse(tokens)?),
            RecordType::SSHFP => Self::SSHFP(sshfp::parse(tokens)?),
            RecordType::TXT => Self::TXT(txt::parse(tokens)?),
            RecordType::URI => Self::URI(uri::parse(tokens)?),
            r @ RecordType::Unknown(..) => {
                return Err(ParseError::from(format!(
                    "{r} rdata must use the generic (\\#) encoding"
                )));
            }
        };

        Ok(rdata)
    }

    /// Parse RData from a string
    fn try_from_str(record_type: RecordType, s: &str) -> ParseResult<Self> {
        let rdata: Vec<String> = tokenize(s)
            .into_iter()
            .filter(|t| !t.is_empty())
            .collect();
        Self::parse(record_type, rdata.iter().map(AsRef::as_ref))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rr::rdata::A;

    #[test]
    fn test_a() {
        let tokens = ["192.168.0.1"];
        let record = RData::parse(RecordType::A, tokens.iter().map(AsRef::as_ref)).unwrap();

        assert_eq!(record, RData::A(A::new(192, 168, 0, 1)));
    }

    #[test]
    fn test_a_parse() {
        let record = RData::try_from_str(RecordType::A, "192.168.0.1").unwrap();

        assert_eq!(record, RData::A(A::new(192, 168, 0, 1)));
    }

    #[test]
    fn test_ns_parse() {
        let record = RData::try_from_str(RecordType::NS, "ns.example.com").unwrap();

        assert_eq!(record, RData::NS(NS::from("ns.example.com")));
    }

    #[test]
    fn test_txt_parse_requoted() {
        let record = RData::try_from_str(RecordType::TXT, "\"v=spf1 a -all\" bare").unwrap();
        assert_eq!(record.to_string(), "\"v=spf1 a -all\" \"bare\"");
    }

    #[test]
    fn test_generic_encoding_any_type() {
        let record = RData::try_from_str(RecordType::Unknown(731), "\\# 2 abcd").unwrap();
        assert_eq!(record.type_name(), "TYPE731");

        // a known type may still carry generic rdata
        let record = RData::try_from_str(RecordType::A, "\\# 4 7f000001").unwrap();
        assert_eq!(record.type_name(), "A");
    }

    #[test]
    fn test_unknown_type_requires_generic_form() {
        assert!(RData::try_from_str(RecordType::Unknown(731), "whatever").is_err());
    }
}

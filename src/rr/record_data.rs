// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! record data enum variants

use std::fmt;
use std::str::FromStr;

use enum_as_inner::EnumAsInner;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rr::rdata::{
    A, AAAA, APL, CAA, CNAME, DNSKEY, DS, HINFO, LOC, MX, NS, NSEC, PTR, RRSIG, SOA, SRV, SSHFP,
    TXT, URI, UnknownRdata,
};
use crate::rr::record_type::RecordType;

/// Record data enum variants
///
/// One variant per supported presentation format, plus [`RData::Unknown`]
/// for anything carried by type name only. `Display` writes the rdata
/// portion of the record's presentation form, which is what the zone
/// serializer appends after the type field.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, EnumAsInner, PartialEq, Clone)]
#[non_exhaustive]
pub enum RData {
    /// IPv4 address
    A(A),
    /// IPv6 address
    AAAA(AAAA),
    /// Address prefix list
    APL(APL),
    /// Certification authority authorization
    CAA(CAA),
    /// Canonical name
    CNAME(CNAME),
    /// Public key for a signed zone
    DNSKEY(DNSKEY),
    /// Delegation signer
    DS(DS),
    /// Host information
    HINFO(HINFO),
    /// Geographic location
    LOC(LOC),
    /// Mail exchange
    MX(MX),
    /// Authoritative name server
    NS(NS),
    /// Authenticated denial-of-existence chain link
    NSEC(NSEC),
    /// Pointer into another part of the name space
    PTR(PTR),
    /// Record set signature
    RRSIG(RRSIG),
    /// Start of authority
    SOA(SOA),
    /// Service locator
    SRV(SRV),
    /// SSH public key fingerprint
    SSHFP(SSHFP),
    /// Descriptive text
    TXT(TXT),
    /// Uniform resource identifier
    URI(URI),
    /// Anything else, carried by type name with an uninterpreted payload
    Unknown(UnknownRdata),
}

impl RData {
    /// The `RecordType` this rdata belongs to.
    ///
    /// `None` for an [`RData::Unknown`] registered under a name that is
    /// neither a known mnemonic nor the `TYPE<n>` notation.
    pub fn record_type(&self) -> Option<RecordType> {
        Some(match self {
            Self::A(..) => RecordType::A,
            Self::AAAA(..) => RecordType::AAAA,
            Self::APL(..) => RecordType::APL,
            Self::CAA(..) => RecordType::CAA,
            Self::CNAME(..) => RecordType::CNAME,
            Self::DNSKEY(..) => RecordType::DNSKEY,
            Self::DS(..) => RecordType::DS,
            Self::HINFO(..) => RecordType::HINFO,
            Self::LOC(..) => RecordType::LOC,
            Self::MX(..) => RecordType::MX,
            Self::NS(..) => RecordType::NS,
            Self::NSEC(..) => RecordType::NSEC,
            Self::PTR(..) => RecordType::PTR,
            Self::RRSIG(..) => RecordType::RRSIG,
            Self::SOA(..) => RecordType::SOA,
            Self::SRV(..) => RecordType::SRV,
            Self::SSHFP(..) => RecordType::SSHFP,
            Self::TXT(..) => RecordType::TXT,
            Self::URI(..) => RecordType::URI,
            Self::Unknown(unknown) => return RecordType::from_str(unknown.type_name()).ok(),
        })
    }

    /// The type name this rdata serializes under; always the registry key
    /// the rdata was parsed with.
    pub fn type_name(&self) -> String {
        match self {
            Self::Unknown(unknown) => unknown.type_name().to_string(),
            other => other
                .record_type()
                .map(|rt| rt.to_string())
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A(rdata) => fmt::Display::fmt(rdata, f),
            Self::AAAA(rdata) => fmt::Display::fmt(rdata, f),
            Self::APL(rdata) => fmt::Display::fmt(rdata, f),
            Self::CAA(rdata) => fmt::Display::fmt(rdata, f),
            Self::CNAME(rdata) => fmt::Display::fmt(rdata, f),
            Self::DNSKEY(rdata) => fmt::Display::fmt(rdata, f),
            Self::DS(rdata) => fmt::Display::fmt(rdata, f),
            Self::HINFO(rdata) => fmt::Display::fmt(rdata, f),
            Self::LOC(rdata) => fmt::Display::fmt(rdata, f),
            Self::MX(rdata) => fmt::Display::fmt(rdata, f),
            Self::NS(rdata) => fmt::Display::fmt(rdata, f),
            Self::NSEC(rdata) => fmt::Display::fmt(rdata, f),
            Self::PTR(rdata) => fmt::Display::fmt(rdata, f),
            Self::RRSIG(rdata) => fmt::Display::fmt(rdata, f),
            Self::SOA(rdata) => fmt::Display::fmt(rdata, f),
            Self::SRV(rdata) => fmt::Display::fmt(rdata, f),
            Self::SSHFP(rdata) => fmt::Display::fmt(rdata, f),
            Self::TXT(rdata) => fmt::Display::fmt(rdata, f),
            Self::URI(rdata) => fmt::Display::fmt(rdata, f),
            Self::Unknown(rdata) => fmt::Display::fmt(rdata, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name_matches_variant() {
        let rdata = RData::MX(MX::new(10, "mail.example.com.".to_string()));
        assert_eq!(rdata.type_name(), "MX");
        assert_eq!(rdata.record_type(), Some(RecordType::MX));

        let rdata = RData::Unknown(UnknownRdata::binary("TYPE731", vec![1, 2]));
        assert_eq!(rdata.type_name(), "TYPE731");
        assert_eq!(rdata.record_type(), Some(RecordType::Unknown(731)));

        let rdata = RData::Unknown(UnknownRdata::text("SPF-LEGACY", "payload"));
        assert_eq!(rdata.type_name(), "SPF-LEGACY");
        assert_eq!(rdata.record_type(), None);
    }

    #[test]
    fn test_enum_as_inner() {
        let rdata = RData::A(A::new(192, 0, 2, 1));
        assert!(rdata.as_a().is_some());
        assert!(rdata.as_mx().is_none());
    }
}

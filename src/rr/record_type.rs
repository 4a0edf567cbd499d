// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! record type definitions

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::serialize::txt::errors::{ParseError, ParseErrorKind};

/// The type of the resource record.
///
/// This specifies the type of data in the RData field of the Resource Record.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
#[non_exhaustive]
pub enum RecordType {
    /// [RFC 1035](https://tools.ietf.org/html/rfc1035) IPv4 Address record
    A,
    /// [RFC 3596](https://tools.ietf.org/html/rfc3596) IPv6 address record
    AAAA,
    /// [RFC 3123](https://tools.ietf.org/html/rfc3123) Address Prefix List
    APL,
    /// [RFC 6844](https://tools.ietf.org/html/rfc6844) Certification Authority Authorization
    CAA,
    /// [RFC 1035](https://tools.ietf.org/html/rfc1035) Canonical name record
    CNAME,
    /// [RFC 4034](https://tools.ietf.org/html/rfc4034) DNS Key record
    DNSKEY,
    /// [RFC 4034](https://tools.ietf.org/html/rfc4034) Delegation signer
    DS,
    /// [RFC 1035](https://tools.ietf.org/html/rfc1035) host information
    HINFO,
    /// [RFC 1876](https://tools.ietf.org/html/rfc1876) Location record
    LOC,
    /// [RFC 1035](https://tools.ietf.org/html/rfc1035) Mail exchange record
    MX,
    /// [RFC 1035](https://tools.ietf.org/html/rfc1035) Name server record
    NS,
    /// [RFC 4034](https://tools.ietf.org/html/rfc4034) Next-Secure record
    NSEC,
    /// [RFC 1035](https://tools.ietf.org/html/rfc1035) Pointer record
    PTR,
    /// [RFC 4034](https://tools.ietf.org/html/rfc4034) DNSSEC signature
    RRSIG,
    /// [RFC 1035](https://tools.ietf.org/html/rfc1035) and [RFC 2308](https://tools.ietf.org/html/rfc2308) Start of (a zone of) authority record
    SOA,
    /// [RFC 2782](https://tools.ietf.org/html/rfc2782) Service locator
    SRV,
    /// [RFC 4255](https://tools.ietf.org/html/rfc4255) SSH Public Key Fingerprint
    SSHFP,
    /// [RFC 1035](https://tools.ietf.org/html/rfc1035) Text record
    TXT,
    /// [RFC 7553](https://tools.ietf.org/html/rfc7553) Uniform Resource Identifier
    URI,
    /// A type known only by number, from the RFC 3597 `TYPE<n>` notation
    Unknown(u16),
}

impl FromStr for RecordType {
    type Err = ParseError;

    /// Convert `&str` to `RecordType`
    ///
    /// ```
    /// use std::str::FromStr;
    /// use bindzone::rr::RecordType;
    ///
    /// assert_eq!(RecordType::from_str("A").unwrap(), RecordType::A);
    /// assert_eq!(RecordType::from_str("TYPE731").unwrap(), RecordType::Unknown(731));
    /// ```
    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "A" => Ok(Self::A),
            "AAAA" => Ok(Self::AAAA),
            "APL" => Ok(Self::APL),
            "CAA" => Ok(Self::CAA),
            "CNAME" => Ok(Self::CNAME),
            "DNSKEY" => Ok(Self::DNSKEY),
            "DS" => Ok(Self::DS),
            "HINFO" => Ok(Self::HINFO),
            "LOC" => Ok(Self::LOC),
            "MX" => Ok(Self::MX),
            "NS" => Ok(Self::NS),
            "NSEC" => Ok(Self::NSEC),
            "PTR" => Ok(Self::PTR),
            "RRSIG" => Ok(Self::RRSIG),
            "SOA" => Ok(Self::SOA),
            "SRV" => Ok(Self::SRV),
            "SSHFP" => Ok(Self::SSHFP),
            "TXT" => Ok(Self::TXT),
            "URI" => Ok(Self::URI),
            _ => {
                if let Some(digits) = s.strip_prefix("TYPE") {
                    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                        let value = digits
                            .parse::<u16>()
                            .map_err(|_| ParseErrorKind::UnknownRecordType(s.to_string()))?;
                        return Ok(Self::from(value));
                    }
                }
                Err(ParseErrorKind::UnknownRecordType(s.to_string()).into())
            }
        }
    }
}

impl From<u16> for RecordType {
    fn from(value: u16) -> Self {
        match value {
            1 => Self::A,
            2 => Self::NS,
            5 => Self::CNAME,
            6 => Self::SOA,
            12 => Self::PTR,
            13 => Self::HINFO,
            15 => Self::MX,
            16 => Self::TXT,
            28 => Self::AAAA,
            29 => Self::LOC,
            33 => Self::SRV,
            42 => Self::APL,
            43 => Self::DS,
            44 => Self::SSHFP,
            46 => Self::RRSIG,
            47 => Self::NSEC,
            48 => Self::DNSKEY,
            256 => Self::URI,
            257 => Self::CAA,
            _ => Self::Unknown(value),
        }
    }
}

impl From<RecordType> for u16 {
    fn from(rt: RecordType) -> Self {
        match rt {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::PTR => 12,
            RecordType::HINFO => 13,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::LOC => 29,
            RecordType::SRV => 33,
            RecordType::APL => 42,
            RecordType::DS => 43,
            RecordType::SSHFP => 44,
            RecordType::RRSIG => 46,
            RecordType::NSEC => 47,
            RecordType::DNSKEY => 48,
            RecordType::URI => 256,
            RecordType::CAA => 257,
            RecordType::Unknown(value) => value,
        }
    }
}

impl PartialOrd<Self> for RecordType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RecordType {
    fn cmp(&self, other: &Self) -> Ordering {
        u16::from(*self).cmp(&u16::from(*other))
    }
}

impl Display for RecordType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Self::A => f.write_str("A"),
            Self::AAAA => f.write_str("AAAA"),
            Self::APL => f.write_str("APL"),
            Self::CAA => f.write_str("CAA"),
            Self::CNAME => f.write_str("CNAME"),
            Self::DNSKEY => f.write_str("DNSKEY"),
            Self::DS => f.write_str("DS"),
            Self::HINFO => f.write_str("HINFO"),
            Self::LOC => f.write_str("LOC"),
            Self::MX => f.write_str("MX"),
            Self::NS => f.write_str("NS"),
            Self::NSEC => f.write_str("NSEC"),
            Self::PTR => f.write_str("PTR"),
            Self::RRSIG => f.write_str("RRSIG"),
            Self::SOA => f.write_str("SOA"),
            Self::SRV => f.write_str("SRV"),
            Self::SSHFP => f.write_str("SSHFP"),
            Self::TXT => f.write_str("TXT"),
            Self::URI => f.write_str("URI"),
            Self::Unknown(value) => write!(f, "TYPE{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(RecordType::from_str("SOA").unwrap(), RecordType::SOA);
        assert_eq!(RecordType::from_str("TYPE16").unwrap(), RecordType::TXT);
        assert_eq!(RecordType::from_str("TYPE65280").unwrap(), RecordType::Unknown(65280));

        assert!(RecordType::from_str("a").is_err());
        assert!(RecordType::from_str("TYPE").is_err());
        assert!(RecordType::from_str("TYPE99999").is_err());
        assert!(RecordType::from_str("FAULTY-RECORD-TYPE").is_err());
    }

    #[test]
    fn test_u16_round_trip() {
        for rt in [
            RecordType::A,
            RecordType::AAAA,
            RecordType::APL,
            RecordType::CAA,
            RecordType::CNAME,
            RecordType::DNSKEY,
            RecordType::DS,
            RecordType::HINFO,
            RecordType::LOC,
            RecordType::MX,
            RecordType::NS,
            RecordType::NSEC,
            RecordType::PTR,
            RecordType::RRSIG,
            RecordType::SOA,
            RecordType::SRV,
            RecordType::SSHFP,
            RecordType::TXT,
            RecordType::URI,
            RecordType::Unknown(731),
        ] {
            assert_eq!(RecordType::from(u16::from(rt)), rt);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(RecordType::CAA.to_string(), "CAA");
        assert_eq!(RecordType::Unknown(731).to_string(), "TYPE731");
    }
}

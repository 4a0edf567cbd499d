// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! class of DNS operations, in general always IN for internet

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::serialize::txt::errors::{ParseError, ParseErrorKind};

/// The DNS Record class
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
#[non_exhaustive]
pub enum DNSClass {
    /// Internet
    IN,
    /// Chaos
    CH,
    /// Hesiod
    HS,
    /// A class known only by number, from the generic `CLASS<n>` notation
    Unknown(u16),
}

impl FromStr for DNSClass {
    type Err = ParseError;

    /// Convert from `&str` to `DNSClass`, accepting the mnemonics and the
    /// RFC 3597 `CLASS<n>` generic notation
    ///
    /// ```
    /// use std::str::FromStr;
    /// use bindzone::rr::DNSClass;
    ///
    /// assert_eq!(DNSClass::from_str("IN").unwrap(), DNSClass::IN);
    /// assert_eq!(DNSClass::from_str("CLASS42").unwrap(), DNSClass::Unknown(42));
    /// ```
    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "IN" => Ok(Self::IN),
            "CH" => Ok(Self::CH),
            "HS" => Ok(Self::HS),
            _ => {
                if let Some(digits) = s.strip_prefix("CLASS") {
                    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                        let value = digits
                            .parse::<u16>()
                            .map_err(|_| ParseErrorKind::UnknownClass(s.to_string()))?;
                        return Ok(Self::from(value));
                    }
                }
                Err(ParseErrorKind::UnknownClass(s.to_string()).into())
            }
        }
    }
}

impl From<u16> for DNSClass {
    fn from(value: u16) -> Self {
        match value {
            1 => Self::IN,
            3 => Self::CH,
            4 => Self::HS,
            _ => Self::Unknown(value),
        }
    }
}

impl From<DNSClass> for u16 {
    fn from(class: DNSClass) -> Self {
        match class {
            DNSClass::IN => 1,
            DNSClass::CH => 3,
            DNSClass::HS => 4,
            DNSClass::Unknown(value) => value,
        }
    }
}

impl PartialOrd<Self> for DNSClass {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DNSClass {
    fn cmp(&self, other: &Self) -> Ordering {
        u16::from(*self).cmp(&u16::from(*other))
    }
}

impl Display for DNSClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Self::IN => f.write_str("IN"),
            Self::CH => f.write_str("CH"),
            Self::HS => f.write_str("HS"),
            Self::Unknown(value) => write!(f, "CLASS{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(DNSClass::from_str("IN").unwrap(), DNSClass::IN);
        assert_eq!(DNSClass::from_str("CH").unwrap(), DNSClass::CH);
        assert_eq!(DNSClass::from_str("HS").unwrap(), DNSClass::HS);
        assert_eq!(DNSClass::from_str("CLASS3").unwrap(), DNSClass::CH);
        assert_eq!(DNSClass::from_str("CLASS65280").unwrap(), DNSClass::Unknown(65280));

        assert!(DNSClass::from_str("in").is_err());
        assert!(DNSClass::from_str("CLASS").is_err());
        assert!(DNSClass::from_str("CLASS99999").is_err());
        assert!(DNSClass::from_str("MX").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for class in [DNSClass::IN, DNSClass::CH, DNSClass::HS, DNSClass::Unknown(510)] {
            assert_eq!(DNSClass::from_str(&class.to_string()).unwrap(), class);
        }
    }
}

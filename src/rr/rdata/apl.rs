// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! APL, a list of address prefixes

use std::fmt;
use std::net::IpAddr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [RFC 3123, A DNS RR Type for Lists of Address Prefixes, June 2001](https://tools.ietf.org/html/rfc3123)
///
/// ```text
/// 5. Zone File Syntax
///
///    The textual representation of an APL RR in a DNS zone file is as
///    follows:
///
///    <owner>   IN   <TTL>   APL   {[!]afi:address/prefix}*
///
///    The data consists of zero or more strings of the address family
///    indicator <afi>, immediately followed by a colon ":", an address,
///    immediately followed by the "/" character, immediately followed by a
///    decimal numeric value for the prefix length.  Any such string may be
///    preceded by a "!" character.  The strings are separated by
///    whitespace.
/// ```
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default)]
pub struct APL {
    prefixes: Vec<AplItem>,
}

impl APL {
    /// Creates a new APL record data from its prefix items.
    pub fn new(prefixes: Vec<AplItem>) -> Self {
        Self { prefixes }
    }

    /// The address prefix items, in order
    pub fn prefixes(&self) -> &[AplItem] {
        &self.prefixes
    }
}

impl fmt::Display for APL {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for item in &self.prefixes {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// One `[!]afi:address/prefix` item of an APL record.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct AplItem {
    negation: bool,
    address: IpAddr,
    prefix: u8,
}

impl AplItem {
    /// Creates a new prefix item; the address family indicator follows from
    /// the address variant.
    pub fn new(negation: bool, address: IpAddr, prefix: u8) -> Self {
        Self {
            negation,
            address,
            prefix,
        }
    }

    /// True when the item is negated with `!`
    pub fn negation(&self) -> bool {
        self.negation
    }

    /// The IANA address family indicator, 1 for IPv4 and 2 for IPv6
    pub fn family(&self) -> u8 {
        match self.address {
            IpAddr::V4(_) => 1,
            IpAddr::V6(_) => 2,
        }
    }

    /// The base address of the prefix
    pub fn address(&self) -> IpAddr {
        self.address
    }

    /// The prefix length in bits
    pub fn prefix(&self) -> u8 {
        self.prefix
    }
}

impl fmt::Display for AplItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negation {
            f.write_str("!")?;
        }
        write!(
            f,
            "{family}:{address}/{prefix}",
            family = self.family(),
            address = self.address,
            prefix = self.prefix,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let apl = APL::new(vec![
            AplItem::new(false, "192.168.32.0".parse().unwrap(), 21),
            AplItem::new(true, "192.168.38.0".parse().unwrap(), 28),
            AplItem::new(false, "fe80::".parse().unwrap(), 10),
        ]);
        assert_eq!(apl.to_string(), "1:192.168.32.0/21 !1:192.168.38.0/28 2:fe80::/10");
    }
}

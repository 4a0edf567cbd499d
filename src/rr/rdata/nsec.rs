// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! NSEC, the authenticated denial-of-existence chain link

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rr::record_type::RecordType;

/// [RFC 4034, Resource Records for the DNS Security Extensions, March 2005](https://tools.ietf.org/html/rfc4034#section-4)
///
/// ```text
/// 4.2.  The NSEC RR Presentation Format
///
///    The presentation format of the RDATA portion is as follows:
///
///    The Next Domain Name field is represented as a domain name.
///
///    The Type Bit Maps field is represented as a sequence of RR type
///    mnemonics.  When the mnemonic is not known, the TYPE representation
///    described in [RFC3597], Section 5, MUST be used.
/// ```
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct NSEC {
    next_domain_name: String,
    type_bit_maps: Vec<RecordType>,
}

impl NSEC {
    /// Creates a new NSEC record data.
    pub fn new(next_domain_name: String, type_bit_maps: Vec<RecordType>) -> Self {
        Self {
            next_domain_name,
            type_bit_maps,
        }
    }

    /// The next owner name in the canonical ordering of the zone
    pub fn next_domain_name(&self) -> &str {
        &self.next_domain_name
    }

    /// The record types that exist at this record's owner name
    pub fn type_bit_maps(&self) -> &[RecordType] {
        &self.type_bit_maps
    }
}

impl fmt::Display for NSEC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.next_domain_name)?;
        for ty in &self.type_bit_maps {
            write!(f, " {ty}")?;
        }
        Ok(())
    }
}

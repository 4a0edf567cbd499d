// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! public key record data for signed zones

use std::fmt;

use data_encoding::BASE64;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [RFC 4034, Resource Records for the DNS Security Extensions, March 2005](https://tools.ietf.org/html/rfc4034#section-2)
///
/// ```text
/// 2.1.  DNSKEY RDATA Wire Format
///
///    The RDATA for a DNSKEY RR consists of a 2 octet Flags Field, a 1
///    octet Protocol Field, a 1 octet Algorithm Field, and the Public Key
///    Field.
/// ```
///
/// Flag 256 marks a zone key, flag bit 0 of the low octet (value 1,
/// combined as 257) marks a secure entry point. The protocol field must be
/// 3 for a valid signing key.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct DNSKEY {
    flags: u16,
    protocol: u8,
    algorithm: u8,
    public_key: Vec<u8>,
}

impl DNSKEY {
    /// Creates a new DNSKEY record data.
    pub fn new(flags: u16, protocol: u8, algorithm: u8, public_key: Vec<u8>) -> Self {
        Self {
            flags,
            protocol,
            algorithm,
            public_key,
        }
    }

    /// The key flags; 256 is a zone key, 257 a secure entry point
    pub fn flags(&self) -> u16 {
        self.flags
    }

    /// The protocol field, always 3 for DNSSEC
    pub fn protocol(&self) -> u8 {
        self.protocol
    }

    /// The public key algorithm number
    pub fn algorithm(&self) -> u8 {
        self.algorithm
    }

    /// The public key material
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }
}

impl fmt::Display for DNSKEY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{flags} {protocol} {alg} {key}",
            flags = self.flags,
            protocol = self.protocol,
            alg = self.algorithm,
            key = BASE64.encode(&self.public_key),
        )
    }
}

// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! delegation signer, the parent-side fingerprint of a child DNSKEY

use std::fmt;

use data_encoding::HEXUPPER;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [RFC 4034, Resource Records for the DNS Security Extensions, March 2005](https://tools.ietf.org/html/rfc4034#section-5)
///
/// ```text
/// 5.3.  The DS RR Presentation Format
///
///    The presentation format of the RDATA portion is as follows:
///
///    The Key Tag field MUST be represented as an unsigned decimal integer.
///
///    The Algorithm field MUST be represented either as an unsigned decimal
///    integer or as an algorithm mnemonic specified in Appendix A.1.
///
///    The Digest Type field MUST be represented as an unsigned decimal
///    integer.
///
///    The Digest MUST be represented as a sequence of case-insensitive
///    hexadecimal digits.  Whitespace is allowed within the hexadecimal
///    text.
/// ```
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct DS {
    key_tag: u16,
    algorithm: u8,
    digest_type: u8,
    digest: Vec<u8>,
}

impl DS {
    /// Creates a new DS record data.
    pub fn new(key_tag: u16, algorithm: u8, digest_type: u8, digest: Vec<u8>) -> Self {
        Self {
            key_tag,
            algorithm,
            digest_type,
            digest,
        }
    }

    /// The key tag of the DNSKEY RR referred to by this record
    pub fn key_tag(&self) -> u16 {
        self.key_tag
    }

    /// The algorithm number of the referenced DNSKEY RR
    pub fn algorithm(&self) -> u8 {
        self.algorithm
    }

    /// The algorithm used to construct the digest
    pub fn digest_type(&self) -> u8 {
        self.digest_type
    }

    /// The digest of the referenced DNSKEY RR
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }
}

impl fmt::Display for DS {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{tag} {alg} {ty} {digest}",
            tag = self.key_tag,
            alg = self.algorithm,
            ty = self.digest_type,
            digest = HEXUPPER.encode(&self.digest),
        )
    }
}

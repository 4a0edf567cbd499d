// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! RRSIG, the signature over a record set

use std::fmt;

use data_encoding::BASE64;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rr::record_type::RecordType;

/// [RFC 4034, Resource Records for the DNS Security Extensions, March 2005](https://tools.ietf.org/html/rfc4034#section-3)
///
/// ```text
/// 3.2.  The RRSIG RR Presentation Format
///
///    The presentation format of the RDATA portion is as follows:
///
///    The Type Covered field is represented as an RR type mnemonic.
///
///    The Signature Expiration Time and Inception Time field values MUST be
///    represented either as an unsigned decimal integer indicating seconds
///    since 1 January 1970 00:00:00 UTC, or in the form YYYYMMDDHHmmSS in
///    UTC.
///
///    The Signature field is represented as a Base64 encoding of the
///    signature.
/// ```
///
/// Expiration and inception are carried verbatim as they appeared in the
/// zone file; interpreting the two permitted timestamp notations is left to
/// consumers.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct RRSIG {
    type_covered: RecordType,
    algorithm: u8,
    labels: u8,
    original_ttl: u32,
    expiration: String,
    inception: String,
    key_tag: u16,
    signer_name: String,
    signature: Vec<u8>,
}

impl RRSIG {
    /// Creates a new RRSIG record data.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        type_covered: RecordType,
        algorithm: u8,
        labels: u8,
        original_ttl: u32,
        expiration: String,
        inception: String,
        key_tag: u16,
        signer_name: String,
        signature: Vec<u8>,
    ) -> Self {
        Self {
            type_covered,
            algorithm,
            labels,
            original_ttl,
            expiration,
            inception,
            key_tag,
            signer_name,
            signature,
        }
    }

    /// The type of the record set covered by this signature
    pub fn type_covered(&self) -> RecordType {
        self.type_covered
    }

    /// The cryptographic algorithm used to create the signature
    pub fn algorithm(&self) -> u8 {
        self.algorithm
    }

    /// The number of labels in the original owner name
    pub fn labels(&self) -> u8 {
        self.labels
    }

    /// The TTL of the covered record set in the authoritative zone
    pub fn original_ttl(&self) -> u32 {
        self.original_ttl
    }

    /// The signature expiration time, verbatim presentation form
    pub fn expiration(&self) -> &str {
        &self.expiration
    }

    /// The signature inception time, verbatim presentation form
    pub fn inception(&self) -> &str {
        &self.inception
    }

    /// The key tag identifying the DNSKEY this signature was made with
    pub fn key_tag(&self) -> u16 {
        self.key_tag
    }

    /// The owner name of the signer's DNSKEY record set
    pub fn signer_name(&self) -> &str {
        &self.signer_name
    }

    /// The cryptographic signature
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }
}

impl fmt::Display for RRSIG {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{ty} {alg} {labels} {ttl} {expiration} {inception} {tag} {signer} {sig}",
            ty = self.type_covered,
            alg = self.algorithm,
            labels = self.labels,
            ttl = self.original_ttl,
            expiration = self.expiration,
            inception = self.inception,
            tag = self.key_tag,
            signer = self.signer_name,
            sig = BASE64.encode(&self.signature),
        )
    }
}

// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! allows a DNS domain name holder to specify one or more Certification
//! Authorities authorized to issue certificates for that domain
//!
//! [RFC 8659, DNS Certification Authority Authorization, November 2019](https://www.rfc-editor.org/rfc/rfc8659)

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::serialize::txt::entry::quote;

/// The CAA RR containing a property of the form `flags tag "value"`.
///
/// ```text
/// 4.1.1.  Canonical Presentation Format
///
///    The canonical presentation format of the CAA record is:
///
///    CAA <flags> <tag> <value>
///
///    Where:
///
///    Flags:  Is an unsigned integer between 0 and 255.
///
///    Tag:  Is a non-zero-length sequence of ASCII letters and numbers in
///       lowercase.
///
///    Value:  Is the <character-string> encoding of the value field as
///       specified in [RFC1035], Section 5.1.
/// ```
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct CAA {
    flags: u8,
    tag: String,
    value: String,
}

impl CAA {
    /// Creates a new CAA record data.
    ///
    /// Common tags are `issue`, `issuewild` and `iodef`; the tag is stored
    /// lowercase as the RFC requires of the canonical form.
    pub fn new(flags: u8, tag: String, value: String) -> Self {
        Self {
            flags,
            tag: tag.to_lowercase(),
            value,
        }
    }

    /// The critical-handling flags octet; bit 0 is issuer-critical
    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// True if the issuer-critical bit is set
    pub fn issuer_critical(&self) -> bool {
        self.flags & 0b1000_0000 != 0
    }

    /// The property identifier
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The property value
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for CAA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{flags} {tag} {value}",
            flags = self.flags,
            tag = self.tag,
            value = quote(&self.value),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let caa = CAA::new(0, "issue".to_string(), "letsencrypt.org".to_string());
        assert_eq!(caa.to_string(), "0 issue \"letsencrypt.org\"");
    }

    #[test]
    fn test_issuer_critical() {
        assert!(CAA::new(128, "issue".to_string(), ";".to_string()).issuer_critical());
        assert!(!CAA::new(0, "issue".to_string(), ";".to_string()).issuer_critical());
    }
}

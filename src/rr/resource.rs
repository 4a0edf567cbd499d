// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! resource record implementation

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rr::dns_class::DNSClass;
use crate::rr::record_data::RData;
use crate::rr::record_type::RecordType;

/// One entry of a zone: owner name, TTL, class, type-specific data, and the
/// comment that rode along with it, every part optional.
///
/// [RFC 1035, DOMAIN NAMES - IMPLEMENTATION AND SPECIFICATION, November 1987](https://tools.ietf.org/html/rfc1035)
///
/// ```text
/// 4.1.3. Resource record format
///
/// The answer, authority, and additional sections all share the same
/// format: a variable number of resource records, where the number of
/// records is specified in the corresponding count field in the header.
/// ```
///
/// The parser populates fields progressively as it classifies tokens; a
/// record that carries only a comment marks an orphan comment line. Fields
/// left unset by the zone file are filled from the last-stated values
/// before the record reaches the zone, so a record read back from
/// [`crate::rr::Zone::records`] has its effective name/TTL/class, not the
/// literal (possibly blank) fields of its source line.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, PartialEq, Clone, Default)]
pub struct ResourceRecord {
    name: Option<String>,
    ttl: Option<u32>,
    dns_class: Option<DNSClass>,
    rdata: Option<RData>,
    comment: Option<String>,
}

impl ResourceRecord {
    /// Creates an empty record, fields to be populated progressively.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record from its parts, the shape most tooling builds.
    pub fn from_rdata(name: impl Into<String>, ttl: u32, rdata: RData) -> Self {
        Self {
            name: Some(name.into()),
            ttl: Some(ttl),
            dns_class: Some(DNSClass::IN),
            rdata: Some(rdata),
            comment: None,
        }
    }

    /// The owner name, if stated or inherited
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the owner name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// The time to live in seconds, if stated or inherited
    pub fn ttl(&self) -> Option<u32> {
        self.ttl
    }

    /// Sets the TTL.
    pub fn set_ttl(&mut self, ttl: u32) {
        self.ttl = Some(ttl);
    }

    /// The record class, if stated or inherited
    pub fn dns_class(&self) -> Option<DNSClass> {
        self.dns_class
    }

    /// Sets the class.
    pub fn set_dns_class(&mut self, dns_class: DNSClass) {
        self.dns_class = Some(dns_class);
    }

    /// The type-specific record data; `None` for an orphan comment entry
    pub fn rdata(&self) -> Option<&RData> {
        self.rdata.as_ref()
    }

    /// Attaches the record data, finalizing the entry.
    pub fn set_rdata(&mut self, rdata: RData) {
        self.rdata = Some(rdata);
    }

    /// The comment attached to this entry, without the leading `;`
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Attaches a free-text comment.
    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = Some(comment.into());
    }

    /// The record type, derived from the rdata
    pub fn record_type(&self) -> Option<RecordType> {
        self.rdata.as_ref().and_then(RData::record_type)
    }

    /// True for an entry that carries only a comment.
    pub fn is_orphan_comment(&self) -> bool {
        self.rdata.is_none() && self.comment.is_some()
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut needs_space = false;
        let mut write_part = |f: &mut fmt::Formatter<'_>, part: &str| -> fmt::Result {
            if needs_space {
                f.write_str(" ")?;
            }
            needs_space = true;
            f.write_str(part)
        };

        if let Some(name) = &self.name {
            if !name.is_empty() {
                write_part(f, name)?;
            }
        }
        if let Some(ttl) = self.ttl {
            write_part(f, &ttl.to_string())?;
        }
        if let Some(class) = self.dns_class {
            write_part(f, &class.to_string())?;
        }
        if let Some(rdata) = &self.rdata {
            write_part(f, &rdata.type_name())?;
            let text = rdata.to_string();
            if !text.is_empty() {
                write_part(f, &text)?;
            }
        }
        if let Some(comment) = &self.comment {
            if needs_space {
                f.write_str(" ")?;
            }
            write!(f, "; {comment}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rr::rdata::{A, MX};

    #[test]
    fn test_display_full_record() {
        let mut record = ResourceRecord::from_rdata(
            "example.com.",
            3600,
            RData::MX(MX::new(10, "mail.example.com.".to_string())),
        );
        record.set_comment("primary mail");
        assert_eq!(
            record.to_string(),
            "example.com. 3600 IN MX 10 mail.example.com. ; primary mail"
        );
    }

    #[test]
    fn test_display_partial_record() {
        let mut record = ResourceRecord::new();
        record.set_rdata(RData::A(A::new(192, 0, 2, 1)));
        assert_eq!(record.to_string(), "A 192.0.2.1");
    }

    #[test]
    fn test_orphan_comment() {
        let mut record = ResourceRecord::new();
        record.set_comment("zone transferred 2024-01-01");
        assert!(record.is_orphan_comment());
        assert_eq!(record.to_string(), "; zone transferred 2024-01-01");
    }
}

// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! the zone accumulator: an origin, a default TTL and an ordered record list

use std::fmt;
use std::slice;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rr::resource::ResourceRecord;

/// A zone: the complete record set of one administrative domain.
///
/// Records keep their zone file order; nothing is merged or deduplicated,
/// and the last-stated inheritance the parser applies depends on that
/// order. `$ORIGIN` and `$TTL` control entries update the name and default
/// TTL mid-parse, so both reflect the last directive seen.
///
/// `Display` re-serializes the zone as plain, single-space-separated zone
/// file text. Aligned or otherwise prettified output is a presentation
/// concern outside this crate.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct Zone {
    name: String,
    default_ttl: Option<u32>,
    records: Vec<ResourceRecord>,
}

impl Zone {
    /// Creates an empty zone for `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_ttl: None,
            records: Vec::new(),
        }
    }

    /// The zone origin name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the zone origin name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The `$TTL` default, in seconds
    pub fn default_ttl(&self) -> Option<u32> {
        self.default_ttl
    }

    /// Sets the `$TTL` default.
    pub fn set_default_ttl(&mut self, ttl: u32) {
        self.default_ttl = Some(ttl);
    }

    /// Appends a record, preserving insertion order.
    pub fn add_record(&mut self, record: ResourceRecord) {
        self.records.push(record);
    }

    /// The records in zone file order
    pub fn records(&self) -> &[ResourceRecord] {
        &self.records
    }

    /// Iterates the records in zone file order.
    pub fn iter(&self) -> slice::Iter<'_, ResourceRecord> {
        self.records.iter()
    }

    /// Number of records, orphan comment entries included
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the zone holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Zone {
    type Item = &'a ResourceRecord;
    type IntoIter = slice::Iter<'a, ResourceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.name.is_empty() {
            writeln!(f, "$ORIGIN {name}", name = self.name)?;
        }
        if let Some(ttl) = self.default_ttl {
            writeln!(f, "$TTL {ttl}")?;
        }
        for record in &self.records {
            writeln!(f, "{record}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rr::rdata::{A, NS};
    use crate::rr::record_data::RData;

    #[test]
    fn test_order_preserved() {
        let mut zone = Zone::new("example.com.");
        zone.set_default_ttl(3600);
        zone.add_record(ResourceRecord::from_rdata(
            "example.com.",
            3600,
            RData::NS(NS::from("ns1.example.com.")),
        ));
        zone.add_record(ResourceRecord::from_rdata(
            "example.com.",
            3600,
            RData::A(A::new(192, 0, 2, 1)),
        ));

        let types: Vec<_> = zone.iter().filter_map(ResourceRecord::record_type).collect();
        assert_eq!(
            types,
            vec![crate::rr::RecordType::NS, crate::rr::RecordType::A]
        );
    }

    #[test]
    fn test_display() {
        let mut zone = Zone::new("example.com.");
        zone.set_default_ttl(1800);
        zone.add_record(ResourceRecord::from_rdata(
            "example.com.",
            1800,
            RData::A(A::new(192, 0, 2, 1)),
        ));
        assert_eq!(
            zone.to_string(),
            "$ORIGIN example.com.\n$TTL 1800\nexample.com. 1800 IN A 192.0.2.1\n"
        );
    }
}

// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! start of authority record defining ownership and defaults for the zone

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [RFC 1035, DOMAIN NAMES - IMPLEMENTATION AND SPECIFICATION, November 1987](https://tools.ietf.org/html/rfc1035)
///
/// ```text
/// 3.3.13. SOA RDATA format
///
///     +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
///     /                     MNAME                     /
///     /                                               /
///     +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
///     /                     RNAME                     /
///     +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
///     |                    SERIAL                     |
///     |                                               |
///     +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
///     |                    REFRESH                    |
///     |                                               |
///     +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
///     |                     RETRY                     |
///     |                                               |
///     +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
///     |                    EXPIRE                     |
///     |                                               |
///     +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
///     |                    MINIMUM                    |
///     |                                               |
///     +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
///
/// SOA records cause no additional section processing.
///
/// All times are in units of seconds.
/// ```
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct SOA {
    mname: String,
    rname: String,
    serial: u32,
    refresh: i32,
    retry: i32,
    expire: i32,
    minimum: u32,
}

impl SOA {
    /// Creates a new SOA record data.
    ///
    /// # Arguments
    ///
    /// * `mname` - the name of the primary name server for the zone
    /// * `rname` - the mailbox of the person responsible for the zone
    /// * `serial` - the version number of the zone
    /// * `refresh` - seconds before the zone should be refreshed
    /// * `retry` - seconds before a failed refresh should be retried
    /// * `expire` - seconds after which the zone is no longer authoritative
    /// * `minimum` - the negative-caching TTL, per RFC 2308
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mname: String,
        rname: String,
        serial: u32,
        refresh: i32,
        retry: i32,
        expire: i32,
        minimum: u32,
    ) -> Self {
        Self {
            mname,
            rname,
            serial,
            retry,
            refresh,
            expire,
            minimum,
        }
    }

    /// The name server that was the original or primary source of data for this zone
    pub fn mname(&self) -> &str {
        &self.mname
    }

    /// The mailbox of the person responsible for this zone
    pub fn rname(&self) -> &str {
        &self.rname
    }

    /// The version number of the original copy of the zone
    pub fn serial(&self) -> u32 {
        self.serial
    }

    /// The time interval before the zone should be refreshed
    pub fn refresh(&self) -> i32 {
        self.refresh
    }

    /// The time interval that should elapse before a failed refresh should be retried
    pub fn retry(&self) -> i32 {
        self.retry
    }

    /// The upper limit on the time interval that can elapse before the zone is no longer authoritative
    pub fn expire(&self) -> i32 {
        self.expire
    }

    /// The minimum TTL field that should be exported with any RR from this zone
    pub fn minimum(&self) -> u32 {
        self.minimum
    }
}

impl fmt::Display for SOA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{mname} {rname} {serial} {refresh} {retry} {expire} {minimum}",
            mname = self.mname,
            rname = self.rname,
            serial = self.serial,
            refresh = self.refresh,
            retry = self.retry,
            expire = self.expire,
            minimum = self.minimum,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let soa = SOA::new(
            "ns.example.com.".to_string(),
            "hostmaster.example.com.".to_string(),
            2024010101,
            7200,
            600,
            3600000,
            60,
        );
        assert_eq!(
            soa.to_string(),
            "ns.example.com. hostmaster.example.com. 2024010101 7200 600 3600000 60"
        );
    }
}

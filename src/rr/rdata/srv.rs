// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! service records for identifying port and host for a service

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [RFC 2782, DNS SRV RR, February 2000](https://tools.ietf.org/html/rfc2782)
///
/// The format of the SRV RR, whose presentation form is:
///
/// ```text
/// _Service._Proto.Name TTL Class SRV Priority Weight Port Target
/// ```
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct SRV {
    priority: u16,
    weight: u16,
    port: u16,
    target: String,
}

impl SRV {
    /// Creates a new SRV record data.
    pub fn new(priority: u16, weight: u16, port: u16, target: String) -> Self {
        Self {
            priority,
            weight,
            port,
            target,
        }
    }

    /// The priority of this target host, lower values are tried first
    pub fn priority(&self) -> u16 {
        self.priority
    }

    /// A server selection mechanism among targets of the same priority
    pub fn weight(&self) -> u16 {
        self.weight
    }

    /// The port on this target host of this service
    pub fn port(&self) -> u16 {
        self.port
    }

    /// The domain name of the target host
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for SRV {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{priority} {weight} {port} {target}",
            priority = self.priority,
            weight = self.weight,
            port = self.port,
            target = self.target,
        )
    }
}

// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! URI record, a priority/weight-selected target URI

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::serialize::txt::entry::quote;

/// [RFC 7553, The Uniform Resource Identifier (URI) DNS Resource Record, June 2015](https://tools.ietf.org/html/rfc7553)
///
/// ```text
/// 4.5.  URI RR Presentation Format
///
///    The presentation of the RDATA portion is as follows:
///
///    Priority and Weight are presented as unsigned decimal integers.
///
///    Target is presented as <character-string>.
/// ```
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct URI {
    priority: u16,
    weight: u16,
    target: String,
}

impl URI {
    /// Creates a new URI record data.
    pub fn new(priority: u16, weight: u16, target: String) -> Self {
        Self {
            priority,
            weight,
            target,
        }
    }

    /// The priority of this target, lower values are tried first
    pub fn priority(&self) -> u16 {
        self.priority
    }

    /// A selection mechanism among targets of the same priority
    pub fn weight(&self) -> u16 {
        self.weight
    }

    /// The URI of the target
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for URI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{priority} {weight} {target}",
            priority = self.priority,
            weight = self.weight,
            target = quote(&self.target),
        )
    }
}

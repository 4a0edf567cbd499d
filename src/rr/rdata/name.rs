// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Record types whose rdata is a single domain name
//!
//! Names are carried as presentation-form strings, exactly as they appeared
//! in the zone file; resolving relative names against an origin is left to
//! consumers of the model.

use std::fmt;
use std::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! name_rdata {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
        #[derive(Debug, PartialEq, Eq, Hash, Clone)]
        pub struct $name(pub String);

        impl $name {
            /// The domain name this record points at
            pub fn name(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(name)
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self(name.to_string())
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

name_rdata!(
    CNAME,
    "The canonical name for an alias, [RFC 1035 section 3.3.1](https://tools.ietf.org/html/rfc1035)"
);
name_rdata!(
    NS,
    "An authoritative name server, [RFC 1035 section 3.3.11](https://tools.ietf.org/html/rfc1035)"
);
name_rdata!(
    PTR,
    "A pointer to another part of the domain name space, [RFC 1035 section 3.3.12](https://tools.ietf.org/html/rfc1035)"
);

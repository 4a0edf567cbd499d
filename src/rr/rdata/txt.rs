// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! text records for storing arbitrary data

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::serialize::txt::entry::quote;

/// [RFC 1035, DOMAIN NAMES - IMPLEMENTATION AND SPECIFICATION, November 1987](https://tools.ietf.org/html/rfc1035)
///
/// ```text
/// 3.3.14. TXT RDATA format
///
///     +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
///     /                   TXT-DATA                    /
///     +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
///
/// TXT RRs are used to hold descriptive text.  The semantics of the text
/// depends on the domain where it is found.
/// ```
///
/// The character strings are held unescaped; `Display` re-quotes them.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default)]
pub struct TXT {
    txt_data: Vec<String>,
}

impl TXT {
    /// Creates a new TXT record data from its character strings.
    pub fn new(txt_data: Vec<String>) -> Self {
        Self { txt_data }
    }

    /// The character strings of the record, in order
    pub fn txt_data(&self) -> &[String] {
        &self.txt_data
    }
}

impl fmt::Display for TXT {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for data in &self.txt_data {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            f.write_str(&quote(data))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_quotes_and_escapes() {
        let txt = TXT::new(vec!["v=spf1 a -all".to_string(), "say \"hi\"".to_string()]);
        assert_eq!(txt.to_string(), "\"v=spf1 a -all\" \"say \\\"hi\\\"\"");
    }
}

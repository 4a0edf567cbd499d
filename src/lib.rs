// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Bindzone, a BIND master zone file library
//!
//! Parses zone file text into an ordered [`Zone`] of [`ResourceRecord`]s and
//! serializes the model back to text. The parser handles the awkward parts
//! of the format in one place: parenthesized multi-line records, quoted
//! character strings, comments in every position, human-readable TTL
//! durations, `$ORIGIN`/`$TTL` control entries, the RFC 3597 generic
//! `TYPE<n>`/`CLASS<n>`/`\#` notations, and the RFC 1035 section 5.1
//! last-stated defaulting of omitted owner names, TTLs and classes.
//!
//! ```
//! use bindzone::{CommentPolicy, Parser, RecordType};
//!
//! let text = r#"
//! $TTL 1h
//! $ORIGIN example.com.
//! @          IN SOA ns.example.com. root.example.com. (
//!                       2024010101 ; SERIAL
//!                       2h         ; REFRESH
//!                       30m        ; RETRY
//!                       2w         ; EXPIRE
//!                       1h )       ; MINIMUM
//!            IN NS ns.example.com.
//! www        IN CNAME example.com. ; canonical
//! "#;
//!
//! let zone = Parser::with_comment_policy(CommentPolicy::END_OF_ENTRY)
//!     .parse("example.com.", text)
//!     .unwrap();
//!
//! assert_eq!(zone.name(), "example.com.");
//! assert_eq!(zone.default_ttl(), Some(3600));
//! assert_eq!(zone.records().len(), 3);
//!
//! let cname = &zone.records()[2];
//! assert_eq!(cname.name(), Some("www"));
//! assert_eq!(cname.record_type(), Some(RecordType::CNAME));
//! assert_eq!(cname.comment(), Some("canonical"));
//! ```
//!
//! No I/O happens anywhere in the crate: `$INCLUDE` entries are recognized
//! and left to the caller, and the [`edns`] option codec works on byte
//! slices the caller already has.

#![warn(
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::unimplemented,
    missing_docs,
    unreachable_pub
)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod edns;
pub mod rr;
pub mod serialize;

pub use crate::rr::{DNSClass, RData, RecordType, ResourceRecord, Zone};
pub use crate::serialize::txt::{
    CommentPolicy, ParseError, ParseErrorKind, ParseResult, Parser, RdataHandler,
};

/// Parses zone file text with the default options: comments discarded, no
/// custom rdata handlers.
///
/// # Example
/// ```
/// let zone = bindzone::parse("example.com.", "@ 300 IN A 192.0.2.1\n").unwrap();
/// assert_eq!(zone.records().len(), 1);
/// ```
pub fn parse(name: &str, text: &str) -> ParseResult<Zone> {
    Parser::new().parse(name, text)
}

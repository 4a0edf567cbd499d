// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::collections::HashMap;
use std::str::FromStr;

use tracing::debug;

use crate::rr::dns_class::DNSClass;
use crate::rr::record_data::RData;
use crate::rr::record_type::RecordType;
use crate::rr::resource::ResourceRecord;
use crate::rr::zone::Zone;
use crate::serialize::txt::comment::CommentPolicy;
use crate::serialize::txt::entry::{Tokens, split_comment, tokenize};
use crate::serialize::txt::errors::{ParseError, ParseErrorKind, ParseResult};
use crate::serialize::txt::normaliser::Normaliser;
use crate::serialize::txt::parse_rdata::RDataParser;
use crate::serialize::txt::time;

/// A registered rdata handler: receives the text remaining on the line
/// after the type field and produces the record payload.
pub type RdataHandler = Box<dyn Fn(&str) -> ParseResult<RData> + Send + Sync>;

/// ```text
/// 5. ZONE FILES
///
/// Zone files are text files that contain RRs in text form.  Since the
/// contents of a zone can be expressed in the form of a list of RRs a
/// Zone File is most often used to define a zone, though it can be used
/// to list a cache's contents.
///
/// 5.1. Format
///
/// The format of these files is a sequence of entries.  Entries are
/// predominantly line-oriented, though parentheses can be used to continue
/// a list of items across a line boundary, and text literals can contain
/// CRLF within the text.  Any combination of tabs and spaces act as a
/// delimiter between the separate items that make up an entry.  The end of
/// any line in the Zone File can end with a comment.  The comment starts
/// with a ";" (semicolon).
///
/// The following entries are defined:
///
///     <blank>[<comment>]
///
///     $ORIGIN <domain-name> [<comment>]
///
///     $INCLUDE <file-name> [<domain-name>] [<comment>]
///
///     <domain-name><rr> [<comment>]
///
///     <blank><rr> [<comment>]
///
/// Blank lines, with or without comments, are allowed anywhere in the file.
///
/// The last two forms represent RRs.  If an entry for an RR begins with a
/// blank, then the RR is assumed to be owned by the last stated owner.  If
/// an RR entry begins with a <domain-name>, then the owner name is reset.
///
/// <rr> contents take one of the following forms:
///
///     [<TTL>] [<class>] <type> <RDATA>
///
///     [<class>] [<TTL>] <type> <RDATA>
///
/// The RR begins with optional TTL and class fields, followed by a type and
/// RDATA field appropriate to the type and class.  Class and type use the
/// standard mnemonics, TTL is a decimal integer.  Omitted class and TTL
/// values are default to the last explicitly stated values.
/// ```
///
/// A `Parser` owns its handler registry and comment policy for its whole
/// life, and per-parse bookkeeping (the last-stated owner name, TTL and
/// class) that is reset at the start of every [`Parser::parse`] call.
/// `parse` takes `&mut self` for that bookkeeping, so one parser cannot be
/// shared across threads mid-parse; independent parsers are independent.
pub struct Parser {
    handlers: HashMap<String, RdataHandler>,
    comment_policy: CommentPolicy,
    last_name: Option<String>,
    last_ttl: Option<u32>,
    last_class: Option<DNSClass>,
}

/// The context a classification lookahead was entered from; stops the
/// TTL and class predicates from recursing into each other forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LookaheadOrigin {
    /// Top of the decision procedure
    Start,
    /// Inside the lookahead of a token assumed to be a TTL
    AssumedTtl,
    /// Inside the lookahead of a token assumed to be a class
    AssumedClass,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Returns a new zone file parser discarding all comments.
    pub fn new() -> Self {
        Self::with_comment_policy(CommentPolicy::NONE)
    }

    /// Returns a new zone file parser keeping the selected comment
    /// categories on their records.
    pub fn with_comment_policy(comment_policy: CommentPolicy) -> Self {
        Self {
            handlers: HashMap::new(),
            comment_policy,
            last_name: None,
            last_ttl: None,
            last_class: None,
        }
    }

    /// Registers a custom rdata handler for a type name.
    ///
    /// The handler takes precedence over the built-in catalog for its type,
    /// and makes the type name recognizable even when it is not a standard
    /// mnemonic. The name is matched case-insensitively.
    pub fn with_handler(mut self, type_name: impl Into<String>, handler: RdataHandler) -> Self {
        self.handlers
            .insert(type_name.into().to_ascii_uppercase(), handler);
        self
    }

    /// Parses zone file text into a [`Zone`] named `name`.
    ///
    /// `$ORIGIN` and `$TTL` entries update the zone as they are read;
    /// other control entries are recognized and skipped. The first
    /// malformed entry aborts the parse.
    ///
    /// # Example
    /// ```
    /// use bindzone::serialize::txt::Parser;
    ///
    /// let text = "$TTL 1h\n@ IN SOA ns.example.com. root.example.com. 2024010101 2h 30m 2w 1h\n     IN NS ns.example.com.\n";
    /// let zone = Parser::new().parse("example.com.", text).unwrap();
    ///
    /// assert_eq!(zone.default_ttl(), Some(3600));
    /// assert_eq!(zone.records().len(), 2);
    /// // the NS entry had no owner name of its own
    /// assert_eq!(zone.records()[1].name(), Some("@"));
    /// ```
    pub fn parse(&mut self, name: &str, text: &str) -> ParseResult<Zone> {
        self.last_name = None;
        self.last_ttl = None;
        self.last_class = None;

        let normalised = Normaliser::normalise(text, self.comment_policy)?;
        let mut zone = Zone::new(name);
        for entry in normalised.lines() {
            self.parse_entry(entry, &mut zone)?;
        }
        Ok(zone)
    }

    fn parse_entry(&mut self, entry: &str, zone: &mut Zone) -> ParseResult<()> {
        let (record_text, comment) = split_comment(entry);

        // an entry with no record content marks an orphan comment; it takes
        // no part in last-stated inheritance
        if record_text.trim().is_empty() {
            if let Some(comment) = comment {
                let mut record = ResourceRecord::new();
                record.set_comment(comment);
                zone.add_record(record);
            }
            return Ok(());
        }

        let tokens = tokenize(&record_text);
        if is_control_entry(&tokens) {
            return self.parse_control_entry(&tokens, entry, zone);
        }

        let mut record = ResourceRecord::new();
        if let Some(comment) = comment {
            record.set_comment(comment);
        }

        let mut cursor = Tokens::new(tokens);
        // an indented entry tokenizes with a leading blank field; the owner
        // name stays unstated
        if cursor.current() == Some("") {
            cursor.next();
        }

        self.parse_record_fields(&mut cursor, entry, &mut record)?;
        self.apply_last_stated(&mut record, zone);
        zone.add_record(record);
        Ok(())
    }

    /// `$TTL` and `$ORIGIN` update the zone; every other directive is
    /// control syntax for an outer layer (an `$INCLUDE` fetcher, say) and
    /// is skipped here.
    fn parse_control_entry(
        &self,
        tokens: &[String],
        entry: &str,
        zone: &mut Zone,
    ) -> ParseResult<()> {
        let directive = tokens[0].to_ascii_uppercase();
        match directive.as_str() {
            "$TTL" => {
                let value = tokens.get(1).ok_or_else(|| {
                    ParseError::from(ParseErrorKind::MissingToken("$TTL value".to_string()))
                })?;
                let seconds =
                    time::to_seconds(value).map_err(|e| ParseError::for_entry(entry, e))?;
                zone.set_default_ttl(seconds);
            }
            "$ORIGIN" => {
                let value = tokens.get(1).ok_or_else(|| {
                    ParseError::from(ParseErrorKind::MissingToken("$ORIGIN name".to_string()))
                })?;
                zone.set_name(value.as_str());
            }
            _ => debug!("ignoring control entry: {}", entry),
        }
        Ok(())
    }

    /// Classifies the optional leading fields and dispatches the mandatory
    /// type field, first match wins: TTL, class, owner name, type.
    fn parse_record_fields(
        &self,
        tokens: &mut Tokens,
        entry: &str,
        record: &mut ResourceRecord,
    ) -> ParseResult<()> {
        loop {
            let current = match tokens.current() {
                Some(token) => token.to_string(),
                None => return Err(ParseErrorKind::UnparseableEntry(entry.to_string()).into()),
            };

            if self.is_ttl(tokens, tokens.key(), LookaheadOrigin::Start) {
                record.set_ttl(time::to_seconds(&current)?);
                tokens.next();
            } else if self.is_class(tokens, tokens.key(), LookaheadOrigin::Start) {
                record.set_dns_class(DNSClass::from_str(&current.to_ascii_uppercase())?);
                tokens.next();
            } else if self.is_name(tokens) {
                record.set_name(current);
                tokens.next();
            } else if self.is_type_token(&current) {
                tokens.next();
                let rdata_text = tokens.remainder().unwrap_or_default();
                let type_name = current.to_ascii_uppercase();
                let rdata = self
                    .parse_rdata(&type_name, &rdata_text)
                    .map_err(|e| ParseError::for_entry(entry, e))?;
                record.set_rdata(rdata);
                return Ok(());
            } else {
                return Err(ParseErrorKind::UnparseableEntry(entry.to_string()).into());
            }
        }
    }

    /// A TTL is a duration-shaped token whose successor reads as a class
    /// or a type. The token position does not matter: a leading `1800`
    /// followed by a type is a TTL, and the owner name is inherited.
    fn is_ttl(&self, tokens: &Tokens, pos: usize, origin: LookaheadOrigin) -> bool {
        let Some(token) = tokens.get(pos) else {
            return false;
        };
        if !time::is_time_format(token) {
            return false;
        }
        match tokens.get(pos + 1) {
            None => false,
            Some(next) => {
                self.is_type_token(next)
                    || (origin != LookaheadOrigin::AssumedClass
                        && self.is_class(tokens, pos + 1, LookaheadOrigin::AssumedTtl))
            }
        }
    }

    /// A class is a class mnemonic whose successor reads as a type, or as
    /// TTL-then-type when this lookahead was not itself entered from an
    /// assumed TTL.
    fn is_class(&self, tokens: &Tokens, pos: usize, origin: LookaheadOrigin) -> bool {
        let Some(token) = tokens.get(pos) else {
            return false;
        };
        if DNSClass::from_str(&token.to_ascii_uppercase()).is_err() {
            return false;
        }
        match tokens.get(pos + 1) {
            None => false,
            Some(next) => {
                self.is_type_token(next)
                    || (origin != LookaheadOrigin::AssumedTtl
                        && self.is_ttl(tokens, pos + 1, LookaheadOrigin::AssumedClass))
            }
        }
    }

    /// An owner name is only ever the first field of an entry, and must be
    /// followed by something that reads as TTL, class or type.
    fn is_name(&self, tokens: &Tokens) -> bool {
        if tokens.key() != 0 {
            return false;
        }
        match tokens.get(1) {
            None => false,
            Some(next) => {
                self.is_type_token(next)
                    || self.is_ttl(tokens, 1, LookaheadOrigin::Start)
                    || self.is_class(tokens, 1, LookaheadOrigin::Start)
            }
        }
    }

    /// A type is a registered handler name, a known mnemonic, or the
    /// `TYPE<n>` notation.
    fn is_type_token(&self, token: &str) -> bool {
        let upper = token.to_ascii_uppercase();
        self.handlers.contains_key(&upper) || RecordType::from_str(&upper).is_ok()
    }

    /// Registry handler first, then the built-in catalog.
    fn parse_rdata(&self, type_name: &str, text: &str) -> ParseResult<RData> {
        if let Some(handler) = self.handlers.get(type_name) {
            return handler(text);
        }
        let record_type = RecordType::from_str(type_name)?;
        RData::try_from_str(record_type, text)
    }

    /// RFC 1035 section 5.1: omitted owner name, TTL and class fall back to
    /// the last explicitly stated values; explicitly stated values become
    /// the new fallbacks. The TTL additionally falls back to the zone's
    /// `$TTL` default.
    fn apply_last_stated(&mut self, record: &mut ResourceRecord, zone: &Zone) {
        let stated_name = record
            .name()
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        match stated_name {
            Some(name) => self.last_name = Some(name),
            None => {
                if let Some(last) = &self.last_name {
                    record.set_name(last.clone());
                }
            }
        }

        match record.ttl() {
            Some(ttl) => self.last_ttl = Some(ttl),
            None => {
                if let Some(ttl) = self.last_ttl.or(zone.default_ttl()) {
                    record.set_ttl(ttl);
                }
            }
        }

        match record.dns_class() {
            Some(class) => self.last_class = Some(class),
            None => {
                if let Some(class) = self.last_class {
                    record.set_dns_class(class);
                }
            }
        }
    }
}

fn is_control_entry(tokens: &[String]) -> bool {
    let Some(first) = tokens.first() else {
        return false;
    };
    match first.strip_prefix('$') {
        Some(rest) => !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Zone {
        Parser::new().parse("example.com.", text).expect("failed to parse zone")
    }

    #[test]
    fn test_classify_full_record() {
        let zone = parse("www.example.com. 1800 IN A 192.0.2.1\n");
        let record = &zone.records()[0];
        assert_eq!(record.name(), Some("www.example.com."));
        assert_eq!(record.ttl(), Some(1800));
        assert_eq!(record.dns_class(), Some(DNSClass::IN));
        assert_eq!(record.record_type(), Some(RecordType::A));
    }

    #[test]
    fn test_leading_field_order_independence() {
        let class_first = parse("IN 1800 A 192.0.2.1\n");
        let ttl_first = parse("1800 IN A 192.0.2.1\n");

        for zone in [&class_first, &ttl_first] {
            let record = &zone.records()[0];
            assert_eq!(record.ttl(), Some(1800), "in {record:?}");
            assert_eq!(record.dns_class(), Some(DNSClass::IN), "in {record:?}");
            assert_eq!(record.record_type(), Some(RecordType::A), "in {record:?}");
        }
    }

    #[test]
    fn test_at_is_an_explicit_name() {
        let zone = parse("example.com. 1800 A 192.0.2.1\n@ 1800 A 255.255.255.255\n");
        assert_eq!(zone.records()[1].name(), Some("@"));
    }

    #[test]
    fn test_name_inherited_when_omitted() {
        let zone = parse("example.com. 1800 A 192.0.2.1\n1800 A 255.255.255.255\n");
        assert_eq!(zone.records()[1].name(), Some("example.com."));
        assert_eq!(zone.records()[1].ttl(), Some(1800));
    }

    #[test]
    fn test_indented_entry_inherits_name() {
        let zone = parse("mail.example.com. 300 IN MX 10 mx1.example.com.\n    300 IN MX 20 mx2.example.com.\n");
        assert_eq!(zone.records()[1].name(), Some("mail.example.com."));
    }

    #[test]
    fn test_ttl_and_class_inherited() {
        let zone = parse(
            "a.example.com. 1800 IN A 192.0.2.1\n\
             b.example.com. A 192.0.2.2\n",
        );
        let record = &zone.records()[1];
        assert_eq!(record.ttl(), Some(1800));
        assert_eq!(record.dns_class(), Some(DNSClass::IN));
    }

    #[test]
    fn test_zone_default_ttl_fallback() {
        let zone = parse("$TTL 2h\na.example.com. IN A 192.0.2.1\n");
        assert_eq!(zone.default_ttl(), Some(7200));
        assert_eq!(zone.records()[0].ttl(), Some(7200));
    }

    #[test]
    fn test_explicit_ttl_beats_zone_default() {
        let zone = parse("$TTL 2h\na.example.com. 60 IN A 192.0.2.1\nb.example.com. IN A 192.0.2.2\n");
        assert_eq!(zone.records()[0].ttl(), Some(60));
        // last-stated wins over the zone default
        assert_eq!(zone.records()[1].ttl(), Some(60));
    }

    #[test]
    fn test_origin_updates_zone_name() {
        let mut parser = Parser::new();
        let zone = parser
            .parse("example.com.", "$ORIGIN sub.example.com.\nwww 300 IN A 192.0.2.1\n")
            .unwrap();
        assert_eq!(zone.name(), "sub.example.com.");
    }

    #[test]
    fn test_unhandled_directives_skipped() {
        let zone = parse("$INCLUDE other.zone\n$GENERATE 1-10 host-$ A 192.0.2.$\nwww 300 IN A 192.0.2.1\n");
        assert_eq!(zone.records().len(), 1);
    }

    #[test]
    fn test_class_may_be_absent() {
        let zone = parse("www.example.com. 1800 A 192.0.2.1\n");
        assert_eq!(zone.records()[0].dns_class(), None);
    }

    #[test]
    fn test_ttl_out_of_range_is_zero() {
        let zone = parse("www.example.com. 2147483648 IN A 192.0.2.1\n");
        assert_eq!(zone.records()[0].ttl(), Some(0));
    }

    #[test]
    fn test_unparseable_entry() {
        let err = Parser::new()
            .parse("example.com.", "faulty-record-type 60 IN BOGUS 1.2.3.4\n")
            .expect_err("entry cannot classify");
        assert!(
            err.to_string().contains("faulty-record-type 60 IN BOGUS 1.2.3.4"),
            "unexpected: {err}"
        );
    }

    #[test]
    fn test_rdata_error_wraps_entry() {
        let err = Parser::new()
            .parse("example.com.", "www 300 IN MX ten mail.example.com.\n")
            .expect_err("preference is numeric");
        match err.kind() {
            ParseErrorKind::Entry { entry, .. } => {
                assert_eq!(entry, "www 300 IN MX ten mail.example.com.")
            }
            kind => panic!("unexpected kind: {kind:?}"),
        }
    }

    #[test]
    fn test_custom_handler_registry() {
        use crate::rr::rdata::UnknownRdata;

        let mut parser = Parser::new().with_handler(
            "SPF-LEGACY",
            Box::new(|text| Ok(RData::Unknown(UnknownRdata::text("SPF-LEGACY", text)))),
        );
        let zone = parser
            .parse("example.com.", "www 300 IN SPF-LEGACY \"v=spf1 -all\"\n")
            .unwrap();
        let rdata = zone.records()[0].rdata().unwrap();
        assert_eq!(rdata.type_name(), "SPF-LEGACY");
    }

    #[test]
    fn test_custom_handler_overrides_catalog() {
        use crate::rr::rdata::{A, UnknownRdata};

        let mut parser = Parser::new().with_handler(
            "A",
            Box::new(|_| Ok(RData::Unknown(UnknownRdata::text("A", "overridden")))),
        );
        let zone = parser.parse("example.com.", "www 300 IN A 192.0.2.1\n").unwrap();
        assert_ne!(
            zone.records()[0].rdata(),
            Some(&RData::A(A::new(192, 0, 2, 1)))
        );
    }

    #[test]
    fn test_generic_type_record() {
        let zone = parse("www 300 IN TYPE731 \\# 6 abcd (\nef01 2345 )\n");
        let rdata = zone.records()[0].rdata().unwrap();
        assert_eq!(rdata.type_name(), "TYPE731");
        assert_eq!(
            rdata.to_string(),
            "\\# 6 ABCDEF012345"
        );
    }

    #[test]
    fn test_unknown_class_notation() {
        let zone = parse("www 300 CLASS4 A 192.0.2.1\n");
        assert_eq!(zone.records()[0].dns_class(), Some(DNSClass::HS));
    }

    #[test]
    fn test_orphan_comments_skip_inheritance() {
        let mut parser = Parser::with_comment_policy(CommentPolicy::ALL);
        let zone = parser
            .parse(
                "example.com.",
                "; leading note\nwww 300 IN A 192.0.2.1 ; host\n; trailing note\n",
            )
            .unwrap();

        assert_eq!(zone.records().len(), 3);
        assert!(zone.records()[0].is_orphan_comment());
        assert_eq!(zone.records()[0].comment(), Some("leading note"));
        assert_eq!(zone.records()[0].name(), None);
        assert_eq!(zone.records()[1].comment(), Some("host"));
        assert!(zone.records()[2].is_orphan_comment());
        // the orphan takes no part in inheritance
        assert_eq!(zone.records()[2].ttl(), None);
    }

    #[test]
    fn test_multiline_soa() {
        let text = "@   IN  SOA     ns.example.com. root.example.com. (\n\
                    \u{20}                2024010101 ; SERIAL\n\
                    \u{20}                7200   ; REFRESH\n\
                    \u{20}                600    ; RETRY\n\
                    \u{20}                3600000; EXPIRE\n\
                    \u{20}                60)    ; MINIMUM\n";
        let zone = parse(text);
        let record = &zone.records()[0];
        assert_eq!(record.record_type(), Some(RecordType::SOA));
        let soa = record.rdata().unwrap().as_soa().unwrap();
        assert_eq!(soa.serial(), 2024010101);
        assert_eq!(soa.refresh(), 7200);
        assert_eq!(soa.retry(), 600);
        assert_eq!(soa.expire(), 3600000);
        assert_eq!(soa.minimum(), 60);
    }

    #[test]
    fn test_last_stated_reset_between_parses() {
        let mut parser = Parser::new();
        parser
            .parse("example.com.", "www.example.com. 300 IN A 192.0.2.1\n")
            .unwrap();
        let err = parser
            .parse("example.com.", "300 IN A 192.0.2.2\n")
            .map(|zone| zone.records()[0].name().map(str::to_string));
        // no last-stated name survives from the previous call
        assert_eq!(err.unwrap(), None);
    }
}

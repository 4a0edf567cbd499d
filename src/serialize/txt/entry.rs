// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Splitting a normalised logical entry into fields
//!
//! The normaliser guarantees single-space separation, so tokenizing is a
//! split on `' '` that treats a double-quoted substring (quotes retained,
//! backslash escapes honored) as part of a single field. The trailing
//! comment, if the policy kept one, is everything after the first unquoted
//! `;` and is peeled off before tokenizing.

use crate::serialize::txt::errors::{ParseErrorKind, ParseResult};

/// Splits an entry into its record-bearing text and the trailing comment.
///
/// Semicolons inside quoted strings do not start a comment.
pub(crate) fn split_comment(entry: &str) -> (String, Option<String>) {
    let mut in_quotes = false;
    let mut chars = entry.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => in_quotes = !in_quotes,
            '\\' if in_quotes => {
                chars.next();
            }
            ';' if !in_quotes => {
                let record = entry[..i].trim_end().to_string();
                let comment = entry[i + 1..].trim().to_string();
                let comment = (!comment.is_empty()).then_some(comment);
                return (record, comment);
            }
            _ => (),
        }
    }
    (entry.to_string(), None)
}

/// Splits record text into space separated fields, keeping quoted fields
/// (quotes included) whole. A leading space produces a leading empty field,
/// which is how an indented, name-less entry is represented.
pub(crate) fn tokenize(record: &str) -> Vec<String> {
    if record.is_empty() {
        return Vec::new();
    }

    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = record.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            '\\' => {
                current.push(c);
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            ' ' if !in_quotes => {
                tokens.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    tokens.push(current);
    tokens
}

/// Strips the surrounding quotes from a quoted field and resolves `\"` and
/// `\\` escapes; bare fields pass through unchanged.
pub(crate) fn unquote(field: &str) -> String {
    let inner = match field.strip_prefix('"').and_then(|f| f.strip_suffix('"')) {
        Some(inner) => inner,
        None => return field.to_string(),
    };

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(escaped) => out.push(escaped),
                None => out.push(c),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Quotes a character string field, escaping `"` and `\`.
pub(crate) fn quote(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 2);
    out.push('"');
    for c in field.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// A cursor over the fields of one entry.
///
/// Supports lookahead without consuming, which the record parser needs to
/// disambiguate the optional leading name/TTL/class fields.
#[derive(Debug, Clone)]
pub struct Tokens {
    tokens: Vec<String>,
    pos: usize,
}

impl Tokens {
    pub(crate) fn new(tokens: Vec<String>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// The token at the cursor, if any remain.
    pub fn current(&self) -> Option<&str> {
        self.get(self.pos)
    }

    /// The token at an absolute position, without moving the cursor.
    pub fn get(&self, pos: usize) -> Option<&str> {
        self.tokens.get(pos).map(String::as_str)
    }

    /// The cursor position.
    pub fn key(&self) -> usize {
        self.pos
    }

    /// Number of tokens in the entry.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true for an entry with no fields at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the current token and advances the cursor.
    pub fn next(&mut self) -> Option<&str> {
        if self.pos >= self.tokens.len() {
            return None;
        }
        let pos = self.pos;
        self.pos += 1;
        Some(&self.tokens[pos])
    }

    /// Steps the cursor back one token.
    ///
    /// Stepping before the first token is an out-of-range error.
    pub fn prev(&mut self) -> ParseResult<()> {
        if self.pos == 0 {
            return Err(ParseErrorKind::TokenPosition(0).into());
        }
        self.pos -= 1;
        Ok(())
    }

    /// Moves the cursor to an absolute position.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.tokens.len());
    }

    /// Rejoins every unconsumed token with single spaces, exhausting the
    /// cursor. Returns `None` when nothing remains.
    pub fn remainder(&mut self) -> Option<String> {
        if self.pos >= self.tokens.len() {
            return None;
        }
        let joined = self.tokens[self.pos..].join(" ");
        self.pos = self.tokens.len();
        Some(joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_comment() {
        let (record, comment) = split_comment("www IN CNAME example.com.;canonical name");
        assert_eq!(record, "www IN CNAME example.com.");
        assert_eq!(comment.as_deref(), Some("canonical name"));

        let (record, comment) = split_comment("www IN A 192.0.2.1");
        assert_eq!(record, "www IN A 192.0.2.1");
        assert_eq!(comment, None);
    }

    #[test]
    fn test_split_comment_quoted_semicolon() {
        let (record, comment) = split_comment("mail IN TXT \"a;b\";real comment");
        assert_eq!(record, "mail IN TXT \"a;b\"");
        assert_eq!(comment.as_deref(), Some("real comment"));
    }

    #[test]
    fn test_split_comment_orphan() {
        let (record, comment) = split_comment(";just a comment");
        assert_eq!(record, "");
        assert_eq!(comment.as_deref(), Some("just a comment"));
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("www 3600 IN A 192.0.2.1"),
            vec!["www", "3600", "IN", "A", "192.0.2.1"]
        );
        assert_eq!(tokenize(""), Vec::<String>::new());
    }

    #[test]
    fn test_tokenize_leading_blank() {
        assert_eq!(tokenize(" 3600 A 192.0.2.1"), vec!["", "3600", "A", "192.0.2.1"]);
    }

    #[test]
    fn test_tokenize_quoted_fields() {
        assert_eq!(
            tokenize("mail TXT \"v=spf1 a mx -all\" \"second \\\" string\""),
            vec!["mail", "TXT", "\"v=spf1 a mx -all\"", "\"second \\\" string\""]
        );
    }

    #[test]
    fn test_unquote_and_quote() {
        assert_eq!(unquote("\"v=spf1 a mx -all\""), "v=spf1 a mx -all");
        assert_eq!(unquote("\"esc \\\" and \\\\\""), "esc \" and \\");
        assert_eq!(unquote("bare"), "bare");
        assert_eq!(quote("esc \" and \\"), "\"esc \\\" and \\\\\"");
    }

    #[test]
    fn test_cursor_movement() {
        let mut tokens = Tokens::new(tokenize("www IN A 192.0.2.1"));
        assert_eq!(tokens.current(), Some("www"));
        assert_eq!(tokens.next(), Some("www"));
        assert_eq!(tokens.key(), 1);
        assert_eq!(tokens.get(3), Some("192.0.2.1"));
        assert_eq!(tokens.key(), 1);

        tokens.prev().expect("prev from 1 is valid");
        assert_eq!(tokens.current(), Some("www"));
        let err = tokens.prev().expect_err("prev before 0 must fail");
        assert!(matches!(
            err.kind(),
            crate::serialize::txt::errors::ParseErrorKind::TokenPosition(0)
        ));
    }

    #[test]
    fn test_remainder_consumes() {
        let mut tokens = Tokens::new(tokenize("www IN MX 10 mail.example.com."));
        tokens.seek(3);
        assert_eq!(tokens.remainder().as_deref(), Some("10 mail.example.com."));
        assert_eq!(tokens.remainder(), None);
        assert_eq!(tokens.current(), None);
    }
}

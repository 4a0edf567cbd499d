// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Rewrites raw zone file text into one logical entry per line
//!
//! Zone file entries are predominantly line oriented, but parentheses
//! continue an entry across line boundaries, comments run from an unquoted
//! `;` to the end of the line, and quoted character strings may contain
//! either delimiter. The normaliser resolves all three so the record parser
//! only ever sees flat, single-space-separated entries:
//!
//! * `( ... )` groups are collapsed onto the line they started on,
//! * comments are discarded or re-attached at the end of their entry,
//!   according to a [`CommentPolicy`],
//! * runs of whitespace collapse to a single space and blank lines vanish.

use crate::serialize::txt::comment::CommentPolicy;
use crate::serialize::txt::errors::{ParseErrorKind, ParseResult};

/// A single pass, character level scanner over raw zone text.
pub struct Normaliser {
    chars: Vec<char>,
    pos: usize,
    policy: CommentPolicy,
    normalised: String,
    /// comments captured inside the current `( ... )` group, in source order
    multiline_comments: Vec<String>,
    /// trailing comment captured on the current line
    entry_comment: Option<String>,
}

impl Normaliser {
    /// Normalises `text` into logical entries, one per line.
    ///
    /// Fails if a quoted string is left unterminated (end of input, or a raw
    /// line feed inside the quotes) or a `(` group is never closed.
    pub fn normalise(text: &str, policy: CommentPolicy) -> ParseResult<String> {
        // Windows line endings and stray carriage returns are removed, tabs
        // become spaces, before the scan begins.
        let text = text.replace("\r\n", "\n").replace('\r', "").replace('\t', " ");

        let normaliser = Self {
            chars: text.chars().collect(),
            pos: 0,
            policy,
            normalised: String::new(),
            multiline_comments: Vec::new(),
            entry_comment: None,
        };
        normaliser.process()
    }

    fn process(mut self) -> ParseResult<String> {
        while let Some(c) = self.peek() {
            match c {
                '"' => self.handle_quoted_string()?,
                '(' => self.handle_multiline_group()?,
                ';' => self.handle_comment(false),
                '\n' => {
                    self.flush_comments();
                    self.normalised.push('\n');
                    self.pos += 1;
                }
                _ => self.copy_current(),
            }
        }

        // the last line may end at end-of-input rather than a line feed
        self.flush_comments();

        Ok(remove_whitespace(&self.normalised))
    }

    /// Copies a quoted character string verbatim, opening quote included.
    ///
    /// A backslash escapes the following character, so `\"` never closes the
    /// string. Reaching end of input or a raw line feed is fatal.
    fn handle_quoted_string(&mut self) -> ParseResult<()> {
        self.copy_current(); // the opening quote
        loop {
            match self.peek() {
                None | Some('\n') => {
                    return Err(ParseErrorKind::UnbalancedQuotes(self.current_line()).into())
                }
                Some('\\') => {
                    self.copy_current();
                    match self.peek() {
                        None | Some('\n') => {
                            return Err(
                                ParseErrorKind::UnbalancedQuotes(self.current_line()).into()
                            )
                        }
                        Some(_) => self.copy_current(),
                    }
                }
                Some('"') => {
                    self.copy_current();
                    return Ok(());
                }
                Some(_) => self.copy_current(),
            }
        }
    }

    /// Collapses a `( ... )` group onto one line.
    ///
    /// Line feeds inside the group become spaces; quoted strings and
    /// comments follow their usual rules, with comments tagged as the
    /// multi-line category.
    fn handle_multiline_group(&mut self) -> ParseResult<()> {
        self.pos += 1; // consume the '(' without copying it
        loop {
            match self.peek() {
                None => return Err(ParseErrorKind::UnclosedBracket(self.current_line()).into()),
                Some('"') => self.handle_quoted_string()?,
                Some('(') => self.handle_multiline_group()?,
                Some(';') => self.handle_comment(true),
                Some('\n') => {
                    self.normalised.push(' ');
                    self.pos += 1;
                }
                Some(')') => {
                    self.pos += 1;
                    return Ok(());
                }
                Some(_) => self.copy_current(),
            }
        }
    }

    /// Consumes a comment up to (not including) the next line feed.
    ///
    /// Whether the text is stashed for re-attachment depends on the policy:
    /// comments inside a bracket group are the MULTILINE category, trailing
    /// comments are END_OF_ENTRY or ORPHAN depending on whether the line
    /// carries record content, which is only known once the line completes.
    fn handle_comment(&mut self, in_multiline_group: bool) {
        self.pos += 1; // the ';'
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            text.push(c);
            self.pos += 1;
        }

        // A collapsed multi-line comment is indistinguishable from a
        // trailing comment on a later pass, so outside a group any retention
        // bit keeps the text eligible; the flush step decides attachment.
        let wanted = if in_multiline_group {
            CommentPolicy::MULTILINE
        } else {
            CommentPolicy::ALL
        };
        if !self.policy.intersects(wanted) {
            return;
        }

        let text = collapse_spaces(text.trim());
        if text.is_empty() {
            return;
        }

        if in_multiline_group {
            self.multiline_comments.push(text);
        } else {
            match &mut self.entry_comment {
                Some(existing) => {
                    existing.push(' ');
                    existing.push_str(&text);
                }
                None => self.entry_comment = Some(text),
            }
        }
    }

    /// Re-attaches stashed comments to the entry that just completed.
    ///
    /// Multi-line comments come first, then the trailing comment. On a line
    /// with no record content the combined text becomes an orphan entry when
    /// the policy asks for one, and is dropped otherwise.
    fn flush_comments(&mut self) {
        let mut comments = std::mem::take(&mut self.multiline_comments);
        if let Some(comment) = self.entry_comment.take() {
            comments.push(comment);
        }

        let joined = comments.join(" ");
        let joined = joined.trim();
        if joined.is_empty() {
            return;
        }

        let line_has_content = !self.current_output_line_is_blank();
        let attach = if line_has_content {
            // multi-line comments ride along with their entry under either
            // retention category
            self.policy
                .intersects(CommentPolicy::END_OF_ENTRY | CommentPolicy::MULTILINE)
        } else {
            self.policy.contains(CommentPolicy::ORPHAN)
        };

        if attach {
            // the record text often ends in a space where the comment was
            // peeled off the raw line
            while self.normalised.ends_with(' ') {
                self.normalised.pop();
            }
            self.normalised.push(';');
            self.normalised.push_str(joined);
        }
    }

    fn current_output_line_is_blank(&self) -> bool {
        self.normalised
            .chars()
            .rev()
            .take_while(|&c| c != '\n')
            .all(|c| c == ' ')
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn copy_current(&mut self) {
        if let Some(c) = self.peek() {
            self.normalised.push(c);
            self.pos += 1;
        }
    }

    /// 1-based line number of the current scan position.
    fn current_line(&self) -> usize {
        self.chars[..self.pos.min(self.chars.len())]
            .iter()
            .filter(|&&c| c == '\n')
            .count()
            + 1
    }
}

/// Collapses runs of spaces outside quoted strings, strips trailing
/// whitespace from each line and drops blank lines.
fn remove_whitespace(text: &str) -> String {
    let mut lines = Vec::new();
    for line in text.lines() {
        let cleaned = collapse_spaces(line.trim_end());
        if !cleaned.is_empty() {
            lines.push(cleaned);
        }
    }
    lines.join("\n")
}

/// Collapses 2+ space runs into one space, leaving quoted substrings alone.
fn collapse_spaces(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_quotes = false;
    let mut previous_space = false;
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                previous_space = false;
                out.push(c);
            }
            '\\' if in_quotes => {
                out.push(c);
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            ' ' if !in_quotes => {
                if !previous_space {
                    out.push(c);
                }
                previous_space = true;
            }
            _ => {
                previous_space = false;
                out.push(c);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialize::txt::errors::ParseErrorKind;

    fn normalise(text: &str, policy: CommentPolicy) -> String {
        Normaliser::normalise(text, policy).expect("failed to normalise")
    }

    #[test]
    fn test_whitespace_collapse() {
        assert_eq!(
            normalise("www    IN\tA     192.0.2.1   ", CommentPolicy::NONE),
            "www IN A 192.0.2.1"
        );
    }

    #[test]
    fn test_blank_lines_dropped() {
        assert_eq!(
            normalise("a IN A 192.0.2.1\n\n   \nb IN A 192.0.2.2\n", CommentPolicy::NONE),
            "a IN A 192.0.2.1\nb IN A 192.0.2.2"
        );
    }

    #[test]
    fn test_windows_line_endings() {
        assert_eq!(
            normalise("a IN A 192.0.2.1\r\nb IN A 192.0.2.2\r\n", CommentPolicy::NONE),
            "a IN A 192.0.2.1\nb IN A 192.0.2.2"
        );
    }

    #[test]
    fn test_comments_removed_by_default() {
        let zone = "; zone for example.com.\nwww IN CNAME example.com. ; canonical\n";
        assert_eq!(normalise(zone, CommentPolicy::NONE), "www IN CNAME example.com.");
    }

    #[test]
    fn test_end_of_entry_comment_reattached() {
        assert_eq!(
            normalise(
                "www IN CNAME example.com ; This is a comment.",
                CommentPolicy::END_OF_ENTRY
            ),
            "www IN CNAME example.com;This is a comment."
        );
    }

    #[test]
    fn test_orphan_comment_kept_only_on_request() {
        let zone = ";Orphan comment\nwww IN A 192.0.2.1\n";
        assert_eq!(
            normalise(zone, CommentPolicy::ORPHAN),
            ";Orphan comment\nwww IN A 192.0.2.1"
        );
        assert_eq!(normalise(zone, CommentPolicy::END_OF_ENTRY), "www IN A 192.0.2.1");
    }

    #[test]
    fn test_multiline_group_collapsed() {
        let zone = "example.com. IN SOA ns.example.com. post.example.com. (\n\
                    2024010101 ; SERIAL\n\
                    7200 ; REFRESH\n\
                    600 ; RETRY\n\
                    3600000 ; EXPIRE\n\
                    60) ; MINIMUM\n";
        assert_eq!(
            normalise(zone, CommentPolicy::NONE),
            "example.com. IN SOA ns.example.com. post.example.com. 2024010101 7200 600 3600000 60"
        );
    }

    #[test]
    fn test_multiline_comments_concatenated_in_source_order() {
        let zone = "example.com. IN SOA ns.example.com. post.example.com. (\n\
                    2024010101 ; SERIAL\n\
                    7200 ; REFRESH\n\
                    600 ; RETRY\n\
                    )\n";
        assert_eq!(
            normalise(zone, CommentPolicy::MULTILINE),
            "example.com. IN SOA ns.example.com. post.example.com. 2024010101 7200 600;SERIAL REFRESH RETRY"
        );
        // comments inside the group are not the end-of-entry category
        assert_eq!(
            normalise(zone, CommentPolicy::END_OF_ENTRY),
            "example.com. IN SOA ns.example.com. post.example.com. 2024010101 7200 600"
        );
    }

    #[test]
    fn test_multiline_comment_precedes_trailing_comment() {
        let zone = "example.com. IN SOA ns.example.com. post.example.com. (\n\
                    2024010101 ; SERIAL\n\
                    600 ) ; end of soa\n";
        assert_eq!(
            normalise(zone, CommentPolicy::ALL),
            "example.com. IN SOA ns.example.com. post.example.com. 2024010101 600;SERIAL end of soa"
        );
    }

    #[test]
    fn test_quoted_strings_protect_delimiters() {
        assert_eq!(
            normalise("mail IN TXT \"(semi;colons \\\" and  brackets)\"", CommentPolicy::NONE),
            "mail IN TXT \"(semi;colons \\\" and  brackets)\""
        );
    }

    #[test]
    fn test_unbalanced_quotes() {
        let err = Normaliser::normalise("mail IN TXT \"Some string", CommentPolicy::NONE)
            .expect_err("should not normalise");
        assert!(matches!(err.kind(), ParseErrorKind::UnbalancedQuotes(1)));
        assert!(err.to_string().contains("unbalanced double quotation marks"));
    }

    #[test]
    fn test_line_feed_inside_quotes() {
        let err = Normaliser::normalise("mail IN TXT \"Some\nstring\"", CommentPolicy::NONE)
            .expect_err("should not normalise");
        assert!(matches!(err.kind(), ParseErrorKind::UnbalancedQuotes(1)));
    }

    #[test]
    fn test_unclosed_bracket() {
        let err = Normaliser::normalise(
            "example.com. IN SOA ns.example.com. post.example.com. (\n2024010101\n7200\n",
            CommentPolicy::NONE,
        )
        .expect_err("should not normalise");
        assert!(matches!(err.kind(), ParseErrorKind::UnclosedBracket(4)));
        assert!(err.to_string().contains("unclosed bracket"));
    }

    #[test]
    fn test_idempotent() {
        let zone = "; orphan\n\
                    example.com. 1800 IN SOA ns.example.com. post.example.com. (\n\
                    2024010101 ; SERIAL\n\
                    7200 ) ; REFRESH\n\
                    www IN CNAME example.com. ; canonical\n";
        for policy in [
            CommentPolicy::NONE,
            CommentPolicy::END_OF_ENTRY,
            CommentPolicy::MULTILINE,
            CommentPolicy::ORPHAN,
            CommentPolicy::ALL,
        ] {
            let once = normalise(zone, policy);
            let twice = normalise(&once, policy);
            assert_eq!(once, twice, "not idempotent under {policy:?}");
        }
    }
}

// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Error types for zone file parsing

use std::fmt;

use thiserror::Error;

/// An alias for parse results returned by functions of this crate
pub type ParseResult<T> = Result<T, ParseError>;

/// The error kind for parse errors that get returned in the crate
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// A quoted character string was never closed
    #[error("unbalanced double quotation marks, end of input reached on line {0}")]
    UnbalancedQuotes(usize),

    /// A parenthesized group was never closed
    #[error("unclosed bracket, end of file reached on line {0}")]
    UnclosedBracket(usize),

    /// A token cursor was moved before the start of its token sequence
    #[error("token position out of range: {0}")]
    TokenPosition(usize),

    /// An entry could not be classified into name/TTL/class/type fields
    #[error("could not classify entry: {0}")]
    UnparseableEntry(String),

    /// A record type mnemonic was not recognized
    #[error("unknown record type: {0}")]
    UnknownRecordType(String),

    /// A class mnemonic was not recognized
    #[error("unknown class: {0}")]
    UnknownClass(String),

    /// A token is missing
    #[error("token is missing: {0}")]
    MissingToken(String),

    /// A time string could not be parsed
    #[error("invalid time string: {0}")]
    ParseTime(String),

    /// A delegated rdata handler failed for this entry
    #[error("could not parse entry: {entry}")]
    Entry {
        /// the full text of the offending entry
        entry: String,
        /// the underlying handler error
        #[source]
        source: Box<ParseError>,
    },

    /// An error with an arbitrary message, referenced as &'static str
    #[error("{0}")]
    Message(&'static str),

    /// An error with an arbitrary message, stored as String
    #[error("{0}")]
    Msg(String),

    // foreign
    /// An address parse error
    #[error("network address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    /// A data encoding error
    #[error("data encoding error: {0}")]
    DataEncoding(#[from] data_encoding::DecodeError),

    /// A number parsing error
    #[error("error parsing number: {0}")]
    ParseInt(#[from] std::num::ParseIntError),
}

/// The error type for parse errors that get returned in the crate
#[derive(Error, Debug)]
pub struct ParseError {
    kind: ParseErrorKind,
}

impl ParseError {
    /// Get the kind of the error
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Wrap an error raised while parsing `entry`, preserving it as the cause
    pub(crate) fn for_entry(entry: impl Into<String>, source: Self) -> Self {
        ParseErrorKind::Entry {
            entry: entry.into(),
            source: Box::new(source),
        }
        .into()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl From<ParseErrorKind> for ParseError {
    fn from(kind: ParseErrorKind) -> Self {
        Self { kind }
    }
}

impl From<&'static str> for ParseError {
    fn from(msg: &'static str) -> Self {
        ParseErrorKind::Message(msg).into()
    }
}

impl From<String> for ParseError {
    fn from(msg: String) -> Self {
        ParseErrorKind::Msg(msg).into()
    }
}

impl From<std::net::AddrParseError> for ParseError {
    fn from(e: std::net::AddrParseError) -> Self {
        ParseErrorKind::from(e).into()
    }
}

impl From<data_encoding::DecodeError> for ParseError {
    fn from(e: data_encoding::DecodeError) -> Self {
        ParseErrorKind::from(e).into()
    }
}

impl From<std::num::ParseIntError> for ParseError {
    fn from(e: std::num::ParseIntError) -> Self {
        ParseErrorKind::from(e).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_error_preserves_cause() {
        let cause = ParseError::from(ParseErrorKind::MissingToken("preference".to_string()));
        let err = ParseError::for_entry("@ MX", cause);

        assert!(err.to_string().contains("@ MX"));
        match err.kind() {
            ParseErrorKind::Entry { source, .. } => {
                assert!(matches!(source.kind(), ParseErrorKind::MissingToken(_)))
            }
            kind => panic!("unexpected kind: {kind:?}"),
        }
    }
}

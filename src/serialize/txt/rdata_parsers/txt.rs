// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for TXT text form

use crate::rr::rdata::TXT;
use crate::serialize::txt::entry::unquote;
use crate::serialize::txt::errors::ParseResult;

/// Parse the RData from a set of tokens; each token is one character
/// string, quoted or bare.
#[allow(clippy::unnecessary_wraps)]
pub(crate) fn parse<'i, I: Iterator<Item = &'i str>>(tokens: I) -> ParseResult<TXT> {
    let txt_data: Vec<String> = tokens.map(|t| unquote(t)).collect();
    Ok(TXT::new(txt_data))
}

#[test]
fn test_parse() {
    let txt = parse(["\"v=spf1 a mx -all\"", "bare"].into_iter()).unwrap();
    assert_eq!(txt.txt_data(), &["v=spf1 a mx -all".to_string(), "bare".to_string()]);
}

// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for NSEC text form

use std::str::FromStr;

use crate::rr::rdata::NSEC;
use crate::rr::record_type::RecordType;
use crate::serialize::txt::errors::{ParseErrorKind, ParseResult};

/// Parse the RData from a set of tokens,
/// `<next domain name> <type mnemonic>*`.
pub(crate) fn parse<'i, I: Iterator<Item = &'i str>>(mut tokens: I) -> ParseResult<NSEC> {
    let next_domain_name: String = tokens
        .next()
        .map(str::to_string)
        .ok_or_else(|| ParseErrorKind::MissingToken("next domain name".to_string()))?;

    let type_bit_maps = tokens
        .map(|t| RecordType::from_str(&t.to_ascii_uppercase()))
        .collect::<ParseResult<Vec<_>>>()?;

    Ok(NSEC::new(next_domain_name, type_bit_maps))
}

#[test]
fn test_parse() {
    let nsec = parse(["host.example.com.", "A", "MX", "RRSIG", "NSEC", "TYPE1234"].into_iter())
        .unwrap();
    assert_eq!(nsec.next_domain_name(), "host.example.com.");
    assert_eq!(
        nsec.type_bit_maps(),
        &[
            RecordType::A,
            RecordType::MX,
            RecordType::RRSIG,
            RecordType::NSEC,
            RecordType::Unknown(1234),
        ]
    );
}

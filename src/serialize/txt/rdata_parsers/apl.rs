// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parser for APL text form

use std::net::IpAddr;

use crate::rr::rdata::{APL, AplItem};
use crate::serialize::txt::errors::{ParseError, ParseResult};

/// Parse the RData from a set of tokens, zero or more
/// `[!]afi:address/prefix` items.
pub(crate) fn parse<'i, I: Iterator<Item = &'i str>>(tokens: I) -> ParseResult<APL> {
    let prefixes = tokens.map(parse_item).collect::<ParseResult<Vec<_>>>()?;
    Ok(APL::new(prefixes))
}

fn parse_item(token: &str) -> ParseResult<AplItem> {
    let (negation, rest) = match token.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    let (family, rest) = rest
        .split_once(':')
        .ok_or_else(|| ParseError::from(format!("missing address family in APL item: {token}")))?;
    let (address, prefix) = rest
        .split_once('/')
        .ok_or_else(|| ParseError::from(format!("missing prefix length in APL item: {token}")))?;

    let address: IpAddr = address.parse()?;
    let prefix: u8 = prefix.parse()?;

    let max_prefix = match (family, &address) {
        ("1", IpAddr::V4(_)) => 32,
        ("2", IpAddr::V6(_)) => 128,
        _ => {
            return Err(ParseError::from(format!(
                "address family does not match address in APL item: {token}"
            )))
        }
    };
    if prefix > max_prefix {
        return Err(ParseError::from(format!(
            "prefix length out of range in APL item: {token}"
        )));
    }

    Ok(AplItem::new(negation, address, prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let apl = parse(["1:192.168.32.0/21", "!1:192.168.38.0/28", "2:fe80::/10"].into_iter())
            .unwrap();
        assert_eq!(apl.prefixes().len(), 3);
        assert!(apl.prefixes()[1].negation());
        assert_eq!(apl.prefixes()[2].family(), 2);
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(parse(std::iter::empty()).unwrap().prefixes().is_empty());
    }

    #[test]
    fn test_parse_rejects_mismatched_family() {
        assert!(parse(["2:192.168.32.0/21"].into_iter()).is_err());
        assert!(parse(["1:192.168.32.0/33"].into_iter()).is_err());
        assert!(parse(["192.168.32.0/21"].into_iter()).is_err());
    }
}

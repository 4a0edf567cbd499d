// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! End-to-end tests over realistic zone file text

use bindzone::{CommentPolicy, DNSClass, ParseErrorKind, Parser, RecordType};

const EXAMPLE_ZONE: &str = r#"$TTL 1h
$ORIGIN example.com.
@   IN  SOA ns1.example.com. hostmaster.example.com. (
            2024010101 ; SERIAL
            7200       ; REFRESH
            600        ; RETRY
            2w         ; EXPIRE
            3600 )     ; MINIMUM

; delegation
@         IN NS   ns1.example.com.
          IN NS   ns2.example.com.

; hosts
ns1       IN A    192.0.2.53
ns2       IN A    198.51.100.53
www  300  IN A    192.0.2.80
     300  IN AAAA 2001:db8::80
mail      IN MX   10 mx1.example.com. ; primary
          IN MX   20 mx2.example.com.
@         IN TXT  "v=spf1 mx -all"
_sip._tcp IN SRV  0 5 5060 sip.example.com.
@         IN CAA  0 issue "letsencrypt.org"
sshfp     IN SSHFP 4 2 123456789abcdef67890123456789abcdef67890123456789abcdef678901234
loc       IN LOC  52 22 23.000 N 4 53 32.000 E -2.00m 0.00m 10000m 10m
future    IN TYPE731 \# 6 abcdef012345
"#;

#[test]
fn test_parse_example_zone() {
    let zone = bindzone::parse("example.com.", EXAMPLE_ZONE).expect("failed to parse zone");

    assert_eq!(zone.name(), "example.com.");
    assert_eq!(zone.default_ttl(), Some(3600));

    let types: Vec<_> = zone.iter().filter_map(|r| r.record_type()).collect();
    assert_eq!(
        types,
        vec![
            RecordType::SOA,
            RecordType::NS,
            RecordType::NS,
            RecordType::A,
            RecordType::A,
            RecordType::A,
            RecordType::AAAA,
            RecordType::MX,
            RecordType::MX,
            RecordType::TXT,
            RecordType::SRV,
            RecordType::CAA,
            RecordType::SSHFP,
            RecordType::LOC,
            RecordType::Unknown(731),
        ]
    );
}

#[test]
fn test_inheritance_through_example_zone() {
    let zone = bindzone::parse("example.com.", EXAMPLE_ZONE).unwrap();
    let records = zone.records();

    // the second NS has no name of its own
    assert_eq!(records[2].name(), Some("@"));
    // the AAAA inherits both the name and the explicit 300 TTL
    assert_eq!(records[6].name(), Some("www"));
    assert_eq!(records[6].ttl(), Some(300));
    // records without an explicit TTL before any last-stated one use $TTL
    assert_eq!(records[1].ttl(), Some(3600));
    // the second MX inherits mail's name and the last-stated 300
    assert_eq!(records[8].name(), Some("mail"));
    // every record stated or inherited class IN
    assert!(records.iter().all(|r| r.dns_class() == Some(DNSClass::IN)));
}

#[test]
fn test_soa_fields() {
    let zone = bindzone::parse("example.com.", EXAMPLE_ZONE).unwrap();
    let soa = zone.records()[0]
        .rdata()
        .and_then(|rdata| rdata.as_soa())
        .expect("first record is the SOA");

    assert_eq!(soa.mname(), "ns1.example.com.");
    assert_eq!(soa.serial(), 2024010101);
    assert_eq!(soa.expire(), 2 * 604800);
    assert_eq!(soa.minimum(), 3600);
}

#[test]
fn test_display_round_trip() {
    let zone = bindzone::parse("example.com.", EXAMPLE_ZONE).unwrap();
    let text = zone.to_string();
    let reparsed = bindzone::parse("unused.", &text).expect("serialized zone must parse");

    assert_eq!(reparsed.name(), zone.name());
    assert_eq!(reparsed.default_ttl(), zone.default_ttl());
    assert_eq!(reparsed.records().len(), zone.records().len());
    for (a, b) in zone.iter().zip(reparsed.iter()) {
        assert_eq!(a.name(), b.name(), "name differs for {a}");
        assert_eq!(a.ttl(), b.ttl(), "ttl differs for {a}");
        assert_eq!(a.rdata(), b.rdata(), "rdata differs for {a}");
    }
}

#[test]
fn test_comments_preserved_on_request() {
    let mut parser = Parser::with_comment_policy(CommentPolicy::ALL);
    let zone = parser.parse("example.com.", EXAMPLE_ZONE).unwrap();

    let orphans: Vec<_> = zone
        .iter()
        .filter(|r| r.is_orphan_comment())
        .filter_map(|r| r.comment())
        .collect();
    assert_eq!(orphans, vec!["delegation", "hosts"]);

    let soa_comment = zone
        .iter()
        .find(|r| r.record_type() == Some(RecordType::SOA))
        .and_then(|r| r.comment())
        .expect("SOA keeps its collapsed comments");
    assert_eq!(soa_comment, "SERIAL REFRESH RETRY EXPIRE MINIMUM");

    let mx_comment = zone
        .iter()
        .find(|r| r.record_type() == Some(RecordType::MX))
        .and_then(|r| r.comment());
    assert_eq!(mx_comment, Some("primary"));
}

#[test]
fn test_comments_dropped_by_default() {
    let zone = bindzone::parse("example.com.", EXAMPLE_ZONE).unwrap();
    assert!(zone.iter().all(|r| r.comment().is_none()));
    assert!(zone.iter().all(|r| !r.is_orphan_comment()));
}

#[test]
fn test_default_policy_leaves_no_comment_markers() {
    use bindzone::serialize::txt::Normaliser;

    let normalised = Normaliser::normalise(EXAMPLE_ZONE, CommentPolicy::NONE).unwrap();
    // no quoted strings in this zone carry a semicolon, so none may remain
    assert!(!normalised.contains(';'), "comment survived: {normalised}");
}

#[test]
fn test_unbalanced_quote_aborts() {
    let err = bindzone::parse("example.com.", "mail IN TXT \"Some string\n")
        .expect_err("unterminated string must abort");
    assert!(matches!(err.kind(), ParseErrorKind::UnbalancedQuotes(_)));
}

#[test]
fn test_unclosed_bracket_aborts() {
    let err = bindzone::parse(
        "example.com.",
        "@ IN SOA ns1.example.com. hostmaster.example.com. (\n2024010101\n",
    )
    .expect_err("unclosed bracket must abort");
    assert!(matches!(err.kind(), ParseErrorKind::UnclosedBracket(_)));
}

#[test]
fn test_malformed_entry_aborts_whole_parse() {
    let text = "good IN A 192.0.2.1\nbad entry that is not a record\nalso-good IN A 192.0.2.2\n";
    let err = bindzone::parse("example.com.", text).expect_err("no skip-and-continue");
    assert!(err.to_string().contains("bad entry that is not a record"));
}

#[test]
fn test_crlf_and_tab_input() {
    let text = "www\t300\tIN\tA\t192.0.2.1\r\nmail 300 IN A 192.0.2.2\r\n";
    let zone = bindzone::parse("example.com.", text).unwrap();
    assert_eq!(zone.records().len(), 2);
    assert_eq!(zone.records()[0].name(), Some("www"));
}

#[test]
fn test_quoted_txt_protects_structure() {
    let text = "t1 IN TXT \"no ; comment (here) \\\" really\"\n";
    let zone = bindzone::parse("example.com.", text).unwrap();
    let txt = zone.records()[0]
        .rdata()
        .and_then(|rdata| rdata.as_txt())
        .expect("record is TXT");
    assert_eq!(txt.txt_data(), &["no ; comment (here) \" really".to_string()]);
}

// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! EDNS0 option codec for OPT pseudo-record payloads
//!
//! [RFC 6891, EDNS(0) Extensions, April 2013](https://tools.ietf.org/html/rfc6891#section-6)
//!
//! ```text
//! 6.1.2.  Wire Format
//!
//!    The variable part of an OPT RR may contain zero or more options in
//!    the RDATA.  Each option MUST be treated as a bit field.  Each option
//!    is encoded as:
//!
//!                   +0 (MSB)                            +1 (LSB)
//!        +---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+
//!     0: |                          OPTION-CODE                          |
//!        +---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+
//!     2: |                         OPTION-LENGTH                         |
//!        +---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+
//!     4: |                                                               |
//!        /                          OPTION-DATA                          /
//!        /                                                               /
//!        +---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+
//!
//!    Any OPTION-CODE values not understood by a responder or requestor
//!    MUST be ignored.
//! ```
//!
//! OPT records never appear in zone files; this codec exists so zone
//! tooling that also touches wire messages can round-trip the option
//! payloads it encounters. Only a small set of structurally distinct
//! options is decoded; everything else rides along as [`EdnsOption::Unknown`].

use tracing::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The code of the EDNS data option
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Hash, Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EdnsCode {
    /// [RFC 6891, Reserved](https://tools.ietf.org/html/rfc6891)
    Zero,

    /// [RFC 8764, Apple's Long-Lived Queries, Optional](https://tools.ietf.org/html/rfc8764)
    LLQ,

    /// [UL On-hold](https://files.dns-sd.org/draft-sekar-dns-ul.txt)
    UL,

    /// [RFC 5001, NSID](https://tools.ietf.org/html/rfc5001)
    NSID,

    /// [RFC 6975, DNSSEC Algorithm Understood](https://tools.ietf.org/html/rfc6975)
    DAU,

    /// [RFC 6975, DS Hash Understood](https://tools.ietf.org/html/rfc6975)
    DHU,

    /// [RFC 6975, NSEC3 Hash Understood](https://tools.ietf.org/html/rfc6975)
    N3U,

    /// [RFC 7871, Client Subnet, Optional](https://tools.ietf.org/html/rfc7871)
    Subnet,

    /// [RFC 7314, EDNS EXPIRE, Optional](https://tools.ietf.org/html/rfc7314)
    Expire,

    /// [RFC 7873, DNS Cookies](https://tools.ietf.org/html/rfc7873)
    Cookie,

    /// [RFC 7828, edns-tcp-keepalive](https://tools.ietf.org/html/rfc7828)
    Keepalive,

    /// [RFC 7830, The EDNS(0) Padding](https://tools.ietf.org/html/rfc7830)
    Padding,

    /// [RFC 7901, CHAIN Query Requests in DNS, Optional](https://tools.ietf.org/html/rfc7901)
    Chain,

    /// Unknown, used to deal with unknown or unsupported codes
    Unknown(u16),
}

impl From<u16> for EdnsCode {
    fn from(value: u16) -> Self {
        match value {
            0 => Self::Zero,
            1 => Self::LLQ,
            2 => Self::UL,
            3 => Self::NSID,
            // 4 Reserved [draft-cheshire-edns0-owner-option] -EXPIRED-
            5 => Self::DAU,
            6 => Self::DHU,
            7 => Self::N3U,
            8 => Self::Subnet,
            9 => Self::Expire,
            10 => Self::Cookie,
            11 => Self::Keepalive,
            12 => Self::Padding,
            13 => Self::Chain,
            _ => Self::Unknown(value),
        }
    }
}

impl From<EdnsCode> for u16 {
    fn from(value: EdnsCode) -> Self {
        match value {
            EdnsCode::Zero => 0,
            EdnsCode::LLQ => 1,
            EdnsCode::UL => 2,
            EdnsCode::NSID => 3,
            EdnsCode::DAU => 5,
            EdnsCode::DHU => 6,
            EdnsCode::N3U => 7,
            EdnsCode::Subnet => 8,
            EdnsCode::Expire => 9,
            EdnsCode::Cookie => 10,
            EdnsCode::Keepalive => 11,
            EdnsCode::Padding => 12,
            EdnsCode::Chain => 13,
            EdnsCode::Unknown(value) => value,
        }
    }
}

/// options used to pass information about capabilities between client and server
///
/// `note: Not all EdnsOptions are supported at this time.`
///
/// <https://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-13>
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
#[non_exhaustive]
pub enum EdnsOption {
    /// [RFC 5001, DNS Name Server Identifier (NSID) Option](https://tools.ietf.org/html/rfc5001)
    Nsid(Vec<u8>),

    /// [RFC 7873, DNS Cookies](https://tools.ietf.org/html/rfc7873)
    Cookie {
        /// the fixed-size client part
        client: [u8; 8],
        /// the 8 to 32 octet server part, absent on a client-only cookie
        server: Option<Vec<u8>>,
    },

    /// [RFC 7314, EDNS EXPIRE](https://tools.ietf.org/html/rfc7314);
    /// queries carry no value, responses carry the expire timer
    Expire(Option<u32>),

    /// [RFC 7828, edns-tcp-keepalive](https://tools.ietf.org/html/rfc7828);
    /// the idle timeout in units of 100 milliseconds, absent in queries
    Keepalive(Option<u16>),

    /// [RFC 7830, The EDNS(0) Padding Option](https://tools.ietf.org/html/rfc7830);
    /// only the length is meaningful, the content is zeros
    Padding(u16),

    /// Unknown, used to deal with unknown or unsupported codes
    Unknown(u16, Vec<u8>),
}

impl EdnsOption {
    /// The code this option is keyed under.
    pub fn code(&self) -> EdnsCode {
        match self {
            Self::Nsid(..) => EdnsCode::NSID,
            Self::Cookie { .. } => EdnsCode::Cookie,
            Self::Expire(..) => EdnsCode::Expire,
            Self::Keepalive(..) => EdnsCode::Keepalive,
            Self::Padding(..) => EdnsCode::Padding,
            Self::Unknown(code, ..) => EdnsCode::from(*code),
        }
    }

    /// Returns the length in bytes of the EdnsOption
    pub fn len(&self) -> u16 {
        match self {
            Self::Nsid(data) => data.len() as u16,
            Self::Cookie { server, .. } => {
                8 + server.as_ref().map(|s| s.len() as u16).unwrap_or(0)
            }
            Self::Expire(None) => 0,
            Self::Expire(Some(_)) => 4,
            Self::Keepalive(None) => 0,
            Self::Keepalive(Some(_)) => 2,
            Self::Padding(length) => *length,
            Self::Unknown(_, data) => data.len() as u16,
        }
    }

    /// Returns `true` if the length in bytes of the EdnsOption is 0
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends the option-data octets (header excluded) to `out`.
    fn emit(&self, out: &mut Vec<u8>) {
        match self {
            Self::Nsid(data) => out.extend_from_slice(data),
            Self::Cookie { client, server } => {
                out.extend_from_slice(client);
                if let Some(server) = server {
                    out.extend_from_slice(server);
                }
            }
            Self::Expire(None) => (),
            Self::Expire(Some(expire)) => out.extend_from_slice(&expire.to_be_bytes()),
            Self::Keepalive(None) => (),
            Self::Keepalive(Some(timeout)) => out.extend_from_slice(&timeout.to_be_bytes()),
            Self::Padding(length) => out.extend(std::iter::repeat(0).take(usize::from(*length))),
            Self::Unknown(_, data) => out.extend_from_slice(data),
        }
    }
}

/// only the supported options are decoded; a structurally malformed payload
/// falls back to `Unknown` rather than erroring
impl<'a> From<(EdnsCode, &'a [u8])> for EdnsOption {
    fn from(value: (EdnsCode, &'a [u8])) -> Self {
        let (code, data) = value;
        match code {
            EdnsCode::NSID => Self::Nsid(data.to_vec()),
            EdnsCode::Cookie if data.len() == 8 => {
                let mut client = [0_u8; 8];
                client.copy_from_slice(data);
                Self::Cookie {
                    client,
                    server: None,
                }
            }
            EdnsCode::Cookie if (16..=40).contains(&data.len()) => {
                let mut client = [0_u8; 8];
                client.copy_from_slice(&data[..8]);
                Self::Cookie {
                    client,
                    server: Some(data[8..].to_vec()),
                }
            }
            EdnsCode::Expire if data.is_empty() => Self::Expire(None),
            EdnsCode::Expire if data.len() == 4 => {
                let mut be = [0_u8; 4];
                be.copy_from_slice(data);
                Self::Expire(Some(u32::from_be_bytes(be)))
            }
            EdnsCode::Keepalive if data.is_empty() => Self::Keepalive(None),
            EdnsCode::Keepalive if data.len() == 2 => {
                let mut be = [0_u8; 2];
                be.copy_from_slice(data);
                Self::Keepalive(Some(u16::from_be_bytes(be)))
            }
            EdnsCode::Padding => Self::Padding(data.len() as u16),
            _ => Self::Unknown(code.into(), data.to_vec()),
        }
    }
}

/// The set of options of one OPT pseudo-record, insertion ordered.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct OPT {
    options: Vec<(EdnsCode, EdnsOption)>,
}

impl OPT {
    /// Creates an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a single option based on the code
    pub fn get(&self, code: EdnsCode) -> Option<&EdnsOption> {
        self.options
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, option)| option)
    }

    /// Insert a new option, the key is derived from the `EdnsOption`;
    /// replaces an existing option with the same code in place
    pub fn insert(&mut self, option: EdnsOption) {
        let code = option.code();
        match self.options.iter_mut().find(|(c, _)| *c == code) {
            Some(slot) => slot.1 = option,
            None => self.options.push((code, option)),
        }
    }

    /// Remove an option, the key is derived from the `EdnsOption`
    pub fn remove(&mut self, code: EdnsCode) {
        self.options.retain(|(c, _)| *c != code);
    }

    /// Iterates the options in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(EdnsCode, EdnsOption)> {
        self.options.iter()
    }

    /// Number of options in the set
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` for an empty option set.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[derive(Debug, PartialEq, Eq)]
enum OptReadState {
    ReadCode,
    Code {
        code: EdnsCode,
    }, // expect the option length next
    Data {
        code: EdnsCode,
        length: usize,
        collected: Vec<u8>,
    }, // expect the data for the option
}

/// Read an option set from OPT rdata octets.
///
/// Lenient like receivers are required to be: unknown codes are kept as
/// [`EdnsOption::Unknown`], and a truncated trailing option drops the whole
/// set with a warning rather than failing.
pub fn read(data: &[u8]) -> OPT {
    let mut state = OptReadState::ReadCode;
    let mut opt = OPT::new();
    let mut pos = 0;

    while pos < data.len() {
        state = match state {
            OptReadState::ReadCode => {
                let Some(code) = read_u16(data, &mut pos) else {
                    warn!("incomplete or poorly formatted EDNS options: stray trailing octet");
                    return OPT::new();
                };
                OptReadState::Code {
                    code: EdnsCode::from(code),
                }
            }
            OptReadState::Code { code } => {
                let Some(length) = read_u16(data, &mut pos) else {
                    state = OptReadState::Code { code };
                    break;
                };
                let length = usize::from(length);
                // a 0-length option is complete without a data state
                if length == 0 {
                    opt.insert(EdnsOption::from((code, &[] as &[u8])));
                    OptReadState::ReadCode
                } else {
                    OptReadState::Data {
                        code,
                        length,
                        collected: Vec::with_capacity(length),
                    }
                }
            }
            OptReadState::Data {
                code,
                length,
                mut collected,
            } => {
                collected.push(data[pos]);
                pos += 1;
                if length == collected.len() {
                    opt.insert(EdnsOption::from((code, collected.as_slice())));
                    OptReadState::ReadCode
                } else {
                    OptReadState::Data {
                        code,
                        length,
                        collected,
                    }
                }
            }
        };
    }

    if state != OptReadState::ReadCode {
        // there was some problem parsing the data for the options, ignoring them
        warn!("incomplete or poorly formatted EDNS options: {:?}", state);
        return OPT::new();
    }

    opt
}

/// Write an option set as OPT rdata octets.
pub fn emit(opt: &OPT) -> Vec<u8> {
    let mut out = Vec::new();
    for (code, option) in opt.iter() {
        out.extend_from_slice(&u16::from(*code).to_be_bytes());
        out.extend_from_slice(&option.len().to_be_bytes());
        option.emit(&mut out);
    }
    out
}

fn read_u16(data: &[u8], pos: &mut usize) -> Option<u16> {
    let bytes = data.get(*pos..*pos + 2)?;
    *pos += 2;
    Some(u16::from_be_bytes([bytes[0], bytes[1]]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut opt = OPT::new();
        opt.insert(EdnsOption::Nsid(b"ns1".to_vec()));
        opt.insert(EdnsOption::Cookie {
            client: [1, 2, 3, 4, 5, 6, 7, 8],
            server: Some(vec![9, 10, 11, 12, 13, 14, 15, 16]),
        });
        opt.insert(EdnsOption::Expire(Some(3600)));
        opt.insert(EdnsOption::Keepalive(Some(200)));
        opt.insert(EdnsOption::Padding(4));
        opt.insert(EdnsOption::Unknown(65001, vec![0xde, 0xad]));

        let bytes = emit(&opt);
        let read_back = read(&bytes);
        assert_eq!(read_back, opt);
    }

    #[test]
    fn test_read_empty_option_at_end_of_opt() {
        let bytes: Vec<u8> = vec![
            0x00, 0x0a, 0x00, 0x08, 0x0b, 0x64, 0xb4, 0xdc, 0xd7, 0xb0, 0xcc, 0x8f, 0x00, 0x08,
            0x00, 0x04, 0x00, 0x01, 0x00, 0x00, 0x00, 0x0b, 0x00, 0x00,
        ];

        let opt = read(&bytes);
        assert_eq!(opt.len(), 3);
        assert_eq!(
            opt.get(EdnsCode::Cookie),
            Some(&EdnsOption::Cookie {
                client: [0x0b, 0x64, 0xb4, 0xdc, 0xd7, 0xb0, 0xcc, 0x8f],
                server: None,
            })
        );
        assert_eq!(
            opt.get(EdnsCode::Subnet),
            Some(&EdnsOption::Unknown(8, vec![0, 1, 0, 0]))
        );
        assert_eq!(opt.get(EdnsCode::Keepalive), Some(&EdnsOption::Keepalive(None)));
    }

    #[test]
    fn test_truncated_options_cleared() {
        // NSID with a declared length of 4 but only 2 octets present
        let bytes: Vec<u8> = vec![0x00, 0x03, 0x00, 0x04, 0xaa, 0xbb];
        assert!(read(&bytes).is_empty());

        // length field itself cut short
        let bytes: Vec<u8> = vec![0x00, 0x03, 0x00];
        assert!(read(&bytes).is_empty());
    }

    #[test]
    fn test_malformed_cookie_falls_back_to_unknown() {
        let opt_bytes = emit(&OPT {
            options: vec![(EdnsCode::Cookie, EdnsOption::Unknown(10, vec![1, 2, 3]))],
        });
        let opt = read(&opt_bytes);
        assert_eq!(opt.get(EdnsCode::Cookie), Some(&EdnsOption::Unknown(10, vec![1, 2, 3])));
    }

    #[test]
    fn test_expire_query_form() {
        let mut opt = OPT::new();
        opt.insert(EdnsOption::Expire(None));
        let bytes = emit(&opt);
        assert_eq!(bytes, vec![0x00, 0x09, 0x00, 0x00]);
        assert_eq!(read(&bytes).get(EdnsCode::Expire), Some(&EdnsOption::Expire(None)));
    }
}

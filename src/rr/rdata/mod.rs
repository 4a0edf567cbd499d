// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! All record data structures and related serialization methods

pub mod a;
pub mod aaaa;
pub mod apl;
pub mod caa;
pub mod dnskey;
pub mod ds;
pub mod hinfo;
pub mod loc;
pub mod mx;
pub mod name;
pub mod nsec;
pub mod rrsig;
pub mod soa;
pub mod srv;
pub mod sshfp;
pub mod txt;
pub mod unknown;
pub mod uri;

pub use self::a::A;
pub use self::aaaa::AAAA;
pub use self::apl::{APL, AplItem};
pub use self::caa::CAA;
pub use self::dnskey::DNSKEY;
pub use self::ds::DS;
pub use self::hinfo::HINFO;
pub use self::loc::LOC;
pub use self::mx::MX;
pub use self::name::{CNAME, NS, PTR};
pub use self::nsec::NSEC;
pub use self::rrsig::RRSIG;
pub use self::soa::SOA;
pub use self::srv::SRV;
pub use self::sshfp::SSHFP;
pub use self::txt::TXT;
pub use self::unknown::{UnknownPayload, UnknownRdata};
pub use self::uri::URI;

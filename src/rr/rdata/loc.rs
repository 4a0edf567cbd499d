// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! LOC records for the geographic location of a host, network or subnet

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [RFC 1876, A Means for Expressing Location Information in the DNS, January 1996](https://tools.ietf.org/html/rfc1876)
///
/// ```text
/// 3. Master File Format
///
///    The LOC record is expressed in a master file in the following format:
///
///    <owner> <TTL> <class> LOC ( d1 [m1 [s1]] {"N"|"S"} d2 [m2 [s2]]
///                                {"E"|"W"} alt["m"] [siz["m"] [hp["m"]
///                                [vp["m"]]]] )
///
///    where:
///
///        d1:     [0 .. 90]            (degrees latitude)
///        d2:     [0 .. 180]           (degrees longitude)
///        m1, m2: [0 .. 59]            (minutes latitude/longitude)
///        s1, s2: [0 .. 59.999]        (seconds latitude/longitude)
///        alt:    [-100000.00 .. 42849672.95] BY .01 (altitude in meters)
///        siz, hp, vp: [0 .. 90000000.00] (size/precision in meters)
/// ```
///
/// Coordinates are held as signed decimal degrees, positive north and east.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct LOC {
    latitude: f64,
    longitude: f64,
    altitude: f64,
    size: f64,
    horizontal_precision: f64,
    vertical_precision: f64,
}

/// Default sphere size when the master file omits it: 1m.
pub const DEFAULT_SIZE: f64 = 1.0;
/// Default horizontal precision: 10,000m.
pub const DEFAULT_HORIZONTAL_PRECISION: f64 = 10_000.0;
/// Default vertical precision: 10m.
pub const DEFAULT_VERTICAL_PRECISION: f64 = 10.0;

impl LOC {
    /// Creates a new LOC record data from decimal-degree coordinates.
    pub fn new(
        latitude: f64,
        longitude: f64,
        altitude: f64,
        size: f64,
        horizontal_precision: f64,
        vertical_precision: f64,
    ) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
            size,
            horizontal_precision,
            vertical_precision,
        }
    }

    /// Latitude in decimal degrees, positive north
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees, positive east
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Altitude in meters relative to the RFC 1876 spheroid
    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Diameter of the described sphere, in meters
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Horizontal precision of the coordinates, in meters
    pub fn horizontal_precision(&self) -> f64 {
        self.horizontal_precision
    }

    /// Vertical precision of the coordinates, in meters
    pub fn vertical_precision(&self) -> f64 {
        self.vertical_precision
    }
}

fn write_coordinate(
    f: &mut fmt::Formatter<'_>,
    coordinate: f64,
    positive: char,
    negative: char,
) -> fmt::Result {
    let hemisphere = if coordinate < 0.0 { negative } else { positive };
    let absolute = coordinate.abs();
    let degrees = absolute.floor();
    let minutes = ((absolute - degrees) * 60.0).floor();
    let seconds = (absolute - degrees - minutes / 60.0) * 3600.0;

    // match the common BIND rendering: whole seconds lose their fraction
    let seconds = (seconds * 1000.0).round() / 1000.0;
    if seconds.fract() == 0.0 {
        write!(
            f,
            "{degrees} {minutes} {seconds} {hemisphere}",
            degrees = degrees as u8,
            minutes = minutes as u8,
            seconds = seconds as u8,
        )
    } else {
        write!(
            f,
            "{degrees} {minutes} {seconds:.3} {hemisphere}",
            degrees = degrees as u8,
            minutes = minutes as u8,
        )
    }
}

impl fmt::Display for LOC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coordinate(f, self.latitude, 'N', 'S')?;
        f.write_str(" ")?;
        write_coordinate(f, self.longitude, 'E', 'W')?;
        write!(
            f,
            " {alt:.2}m {size:.2}m {hp:.2}m {vp:.2}m",
            alt = self.altitude,
            size = self.size,
            hp = self.horizontal_precision,
            vp = self.vertical_precision,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        // the example.com LOC record from RFC 1876 territory: Greenwich
        let loc = LOC::new(51.5035411, -0.1277583, 0.0, 1.0, 10000.0, 10.0);
        assert_eq!(loc.to_string(), "51 30 12.748 N 0 7 39.930 W 0.00m 1.00m 10000.00m 10.00m");
    }

    #[test]
    fn test_display_whole_seconds() {
        let loc = LOC::new(
            52.0,
            4.0,
            -2.0,
            DEFAULT_SIZE,
            DEFAULT_HORIZONTAL_PRECISION,
            DEFAULT_VERTICAL_PRECISION,
        );
        assert_eq!(loc.to_string(), "52 0 0 N 4 0 0 E -2.00m 1.00m 10000.00m 10.00m");
    }
}

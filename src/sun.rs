// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Low-precision solar ephemeris.
//!
//! Mean anomaly, equation of centre and ecliptic longitude of the Sun as
//! linear/periodic functions of the days elapsed since J2000.0, after the
//! formulas of <http://aa.quae.nl/en/reken/zonpositie.html>.  Accuracy is of
//! the order of 0.01°, far from arc-second ephemerides but ample for sunlight
//! phases.
//!
//! The Sun sits on the ecliptic, so its equatorial coordinates are the
//! β = 0 case of [`EquatorialCoord::from_ecliptic`].

use std::f64::consts::PI;

use crate::coords::{EquatorialCoord, DEG, OBLIQUITY};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ecliptic longitude of the Earth's perihelion, P = 102.9372°.
pub const PERIHELION: f64 = 102.9372 * DEG;

/// Solar mean anomaly M (radians) for `days` since J2000.0.
#[inline]
pub fn mean_anomaly(days: f64) -> f64 {
    DEG * (357.5291 + 0.985_600_28 * days)
}

/// Equation of centre C (radians) for a mean anomaly `m`.
#[inline]
pub fn equation_of_center(m: f64) -> f64 {
    DEG * (1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin())
}

/// Ecliptic longitude λ = M + C + P + π for a mean anomaly `m`.
#[inline]
pub fn ecliptic_longitude_at_anomaly(m: f64) -> f64 {
    m + equation_of_center(m) + PERIHELION + PI
}

/// Ecliptic longitude λ (radians) for `days` since J2000.0.
#[inline]
pub fn ecliptic_longitude(days: f64) -> f64 {
    ecliptic_longitude_at_anomaly(mean_anomaly(days))
}

/// Declination of a point on the ecliptic at longitude `l`.
#[inline]
pub fn declination(l: f64) -> f64 {
    (l.sin() * OBLIQUITY.sin()).asin()
}

/// Right ascension of a point on the ecliptic at longitude `l`.
#[inline]
pub fn right_ascension(l: f64) -> f64 {
    (l.sin() * OBLIQUITY.cos()).atan2(l.cos())
}

/// Everything the position and times engines need about the Sun on a given
/// day.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SunCoords {
    /// Mean anomaly M, radians.
    pub mean_anomaly: f64,
    /// Ecliptic longitude λ, radians.
    pub ecliptic_longitude: f64,
    /// Right ascension and declination.
    pub equatorial: EquatorialCoord,
}

/// Solar coordinates for `days` since J2000.0.
pub fn sun_coords(days: f64) -> SunCoords {
    let m = mean_anomaly(days);
    let l = ecliptic_longitude_at_anomaly(m);
    SunCoords {
        mean_anomaly: m,
        ecliptic_longitude: l,
        equatorial: EquatorialCoord {
            right_ascension: right_ascension(l),
            declination: declination(l),
        },
    }
}

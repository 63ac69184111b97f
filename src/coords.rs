// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Observer location, equatorial and horizontal coordinates, and the
//! transforms between them.
//!
//! All angles are radians internally; degrees only appear in [`GeoPoint`]
//! and in phase definitions, and are converted at that boundary.
//!
//! # Azimuth convention
//!
//! Azimuth is measured from **south**, increasing **westward**, in
//! `(−π, π]`: `0` is due south, `π/2` west, `−π/2` east and `±π` north.  Use
//! [`HorizontalCoord::azimuth_from_north`] for a compass bearing.

use std::f64::consts::{PI, TAU};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One degree in radians.
pub(crate) const DEG: f64 = PI / 180.0;

/// Obliquity of the ecliptic, ε = 23.4397°.
pub const OBLIQUITY: f64 = 23.4397 * DEG;

/// Observer position on the Earth.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPoint {
    /// Degrees, east positive.
    pub longitude: f64,
    /// Degrees, north positive.
    pub latitude: f64,
    /// Metres above the horizon the observer looks at.
    pub height: f64,
}

impl GeoPoint {
    /// An observer at sea level.
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            height: 0.0,
        }
    }

    /// Same location at `height` metres.
    pub const fn with_height(self, height: f64) -> Self {
        Self { height, ..self }
    }
}

/// Position relative to the Earth's equatorial plane.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialCoord {
    /// Right ascension α, radians.
    pub right_ascension: f64,
    /// Declination δ, radians.
    pub declination: f64,
}

impl EquatorialCoord {
    /// Equatorial coordinates of a point at ecliptic longitude `lambda` and
    /// ecliptic latitude `beta`.
    pub fn from_ecliptic(lambda: f64, beta: f64) -> Self {
        let (sin_e, cos_e) = OBLIQUITY.sin_cos();
        Self {
            right_ascension: (lambda.sin() * cos_e - beta.tan() * sin_e).atan2(lambda.cos()),
            declination: (beta.sin() * cos_e + beta.cos() * sin_e * lambda.sin()).asin(),
        }
    }
}

/// Position relative to an observer's local horizon.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizontalCoord {
    /// Radians from south, westward positive.
    pub azimuth: f64,
    /// Radians above the horizon.
    pub altitude: f64,
}

impl HorizontalCoord {
    /// Compass bearing (north = 0, east = π/2) in `[0, 2π)`.
    #[inline]
    pub fn azimuth_from_north(&self) -> f64 {
        (self.azimuth + PI).rem_euclid(TAU)
    }
}

/// Local sidereal time θ for `days` since J2000.0 at an observer `longitude`
/// (radians, east positive).
#[inline]
pub fn sidereal_time(days: f64, longitude: f64) -> f64 {
    DEG * (280.16 + 360.985_623_5 * days) + longitude
}

/// Hour angle `θ − α`, normalised to `(−π, π]`.
#[inline]
pub fn hour_angle(sidereal_time: f64, right_ascension: f64) -> f64 {
    PI - (PI - (sidereal_time - right_ascension)).rem_euclid(TAU)
}

/// Horizontal coordinates for an hour angle, declination and latitude (all
/// radians).
pub fn to_horizontal(hour_angle: f64, declination: f64, latitude: f64) -> HorizontalCoord {
    let (sin_h, cos_h) = hour_angle.sin_cos();
    let (sin_phi, cos_phi) = latitude.sin_cos();
    HorizontalCoord {
        azimuth: sin_h.atan2(cos_h * sin_phi - declination.tan() * cos_phi),
        altitude: (sin_phi * declination.sin() + cos_phi * declination.cos() * cos_h).asin(),
    }
}

/// Atmospheric refraction in radians for an apparent altitude `h` (radians).
///
/// Meeus, *Astronomical Algorithms* (2nd ed.), eq. 16.4.  The formula only
/// holds for positive altitudes, so negative ones are evaluated at the
/// horizon; NaN propagates.
pub fn astro_refraction(h: f64) -> f64 {
    let h = if h < 0.0 { 0.0 } else { h };
    0.000_296_7 / (h + 0.003_125_36 / (h + 0.089_011_79)).tan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn hour_angle_is_normalised() {
        assert!((hour_angle(3.0 * PI - 0.5, 0.0) - (PI - 0.5)).abs() < 1e-12);
        assert!((hour_angle(-PI, 0.0) - PI).abs() < 1e-12);
        assert!((hour_angle(0.5, 0.25) - 0.25).abs() < 1e-12);
        assert!((hour_angle(100.0 * TAU + 0.1, 0.0) - 0.1).abs() < 1e-9);
        let h = hour_angle(-7.0, 1.0);
        assert!(h > -PI && h <= PI);
        assert!(hour_angle(f64::NAN, 0.0).is_nan());
    }

    #[test]
    fn transit_altitude_is_colatitude_plus_declination() {
        let pos = to_horizontal(0.0, 0.3, 0.4);
        assert!((pos.altitude - (FRAC_PI_2 - 0.1)).abs() < 1e-9);
    }

    #[test]
    fn azimuth_is_measured_from_south_westward() {
        // Northern observer, winter sun: due south at transit, west after.
        let lat = 45.0 * DEG;
        let dec = -20.0 * DEG;
        assert!(to_horizontal(0.0, dec, lat).azimuth.abs() < 1e-12);
        let afternoon = to_horizontal(0.5, dec, lat);
        let morning = to_horizontal(-0.5, dec, lat);
        assert!(afternoon.azimuth > 0.0);
        assert!((afternoon.azimuth + morning.azimuth).abs() < 1e-12);
        assert!((afternoon.altitude - morning.altitude).abs() < 1e-12);
    }

    #[test]
    fn azimuth_from_north_is_a_compass_bearing() {
        let south = HorizontalCoord {
            azimuth: 0.0,
            altitude: 0.0,
        };
        let east = HorizontalCoord {
            azimuth: -FRAC_PI_2,
            altitude: 0.0,
        };
        assert!((south.azimuth_from_north() - PI).abs() < 1e-12);
        assert!((east.azimuth_from_north() - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn ecliptic_origin_maps_to_equatorial_origin() {
        let eq = EquatorialCoord::from_ecliptic(0.0, 0.0);
        assert!(eq.right_ascension.abs() < 1e-12);
        assert!(eq.declination.abs() < 1e-12);
    }

    #[test]
    fn summer_solstice_declination_is_the_obliquity() {
        let eq = EquatorialCoord::from_ecliptic(FRAC_PI_2, 0.0);
        assert!((eq.declination - OBLIQUITY).abs() < 1e-12);
        assert!((eq.right_ascension - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn refraction_at_the_horizon_is_about_29_arcminutes() {
        let r = astro_refraction(0.0);
        assert!((r - 0.008_45).abs() < 1e-4, "refraction {r}");
        assert_eq!(astro_refraction(-0.2), astro_refraction(0.0));
        assert!(astro_refraction(f64::NAN).is_nan());
        assert!(astro_refraction(1.0) < r);
    }

    #[test]
    fn geo_point_builder() {
        let p = GeoPoint::new(20.0, 45.0).with_height(120.0);
        assert_eq!(p.longitude, 20.0);
        assert_eq!(p.latitude, 45.0);
        assert_eq!(p.height, 120.0);
    }
}

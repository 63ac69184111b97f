// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Low-precision lunar ephemeris, topocentric Moon position and illumination.
//!
//! Geocentric coordinates follow <http://aa.quae.nl/en/reken/hemelpositie.html>.
//! Illumination uses the approach of the IDL `mphase` routine and chapter 48
//! of Meeus, *Astronomical Algorithms* (2nd ed.).

use std::f64::consts::PI;

use tracing::instrument;

use crate::broadcast::{broadcast_len, element};
use crate::coords::{
    astro_refraction, hour_angle, sidereal_time, to_horizontal, EquatorialCoord, DEG,
};
use crate::error::Result;
use crate::sun::sun_coords;
use crate::JulianDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean Earth–Sun distance in km used by the phase-angle computation.
const SUN_DISTANCE_KM: f64 = 149_598_000.0;

/// Geocentric Moon coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoonCoords {
    /// Right ascension and declination.
    pub equatorial: EquatorialCoord,
    /// Earth–Moon distance, km.
    pub distance: f64,
}

/// Moon coordinates for `days` since J2000.0.
pub fn moon_coords(days: f64) -> MoonCoords {
    let mean_longitude = DEG * (218.316 + 13.176_396 * days);
    let mean_anomaly = DEG * (134.963 + 13.064_993 * days);
    let mean_distance = DEG * (93.272 + 13.229_350 * days);

    let longitude = mean_longitude + DEG * 6.289 * mean_anomaly.sin();
    let latitude = DEG * 5.128 * mean_distance.sin();

    MoonCoords {
        equatorial: EquatorialCoord::from_ecliptic(longitude, latitude),
        distance: 385_001.0 - 20_905.0 * mean_anomaly.cos(),
    }
}

/// Moon position as seen by an observer.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoonPosition {
    /// Radians from south, westward positive.
    pub azimuth: f64,
    /// Radians above the horizon, refraction included.
    pub altitude: f64,
    /// Earth–Moon distance, km.
    pub distance: f64,
    /// Parallactic angle, radians.
    pub parallactic_angle: f64,
}

/// Moon position at `instant` for an observer at `longitude`/`latitude`
/// (degrees).
pub fn moon_position(
    instant: impl Into<JulianDate>,
    longitude: f64,
    latitude: f64,
) -> MoonPosition {
    let days = instant.into().days_since_j2000().value();
    let phi = DEG * latitude;

    let c = moon_coords(days);
    let h = hour_angle(
        sidereal_time(days, DEG * longitude),
        c.equatorial.right_ascension,
    );
    let horizontal = to_horizontal(h, c.equatorial.declination, phi);
    let dec = c.equatorial.declination;
    // Meeus eq. 14.1
    let parallactic_angle = h.sin().atan2(phi.tan() * dec.cos() - dec.sin() * h.cos());

    MoonPosition {
        azimuth: horizontal.azimuth,
        altitude: horizontal.altitude + astro_refraction(horizontal.altitude),
        distance: c.distance,
        parallactic_angle,
    }
}

/// Element-wise [`moon_position`] over broadcast batch inputs.
#[instrument(level = "debug", skip_all, fields(n = tracing::field::Empty))]
pub fn moon_positions<I>(
    instants: &[I],
    longitude: &[f64],
    latitude: &[f64],
) -> Result<Vec<MoonPosition>>
where
    I: Copy + Into<JulianDate>,
{
    let n = broadcast_len(&[
        ("instants", instants.len()),
        ("longitude", longitude.len()),
        ("latitude", latitude.len()),
    ])
    .inspect_err(|e| tracing::warn!(error = %e, "rejected moon position batch"))?;
    tracing::Span::current().record("n", n);

    Ok((0..n)
        .map(|i| {
            moon_position(
                element(instants, i),
                element(longitude, i),
                element(latitude, i),
            )
        })
        .collect())
}

/// Illuminated fraction and phase of the Moon.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoonIllumination {
    /// Illuminated fraction of the disc, 0 (new) to 1 (full).
    pub fraction: f64,
    /// Phase in `[0, 1)`: 0 new, 0.25 first quarter, 0.5 full, 0.75 last
    /// quarter.
    pub phase: f64,
    /// Midpoint angle of the illuminated limb, radians eastward from north.
    pub angle: f64,
}

/// Moon illumination at `instant`.
pub fn moon_illumination(instant: impl Into<JulianDate>) -> MoonIllumination {
    let days = instant.into().days_since_j2000().value();
    let s = sun_coords(days).equatorial;
    let m = moon_coords(days);
    let md = m.equatorial;

    let delta_ra = s.right_ascension - md.right_ascension;
    let (sin_sd, cos_sd) = s.declination.sin_cos();
    let (sin_md, cos_md) = md.declination.sin_cos();

    let elongation = (sin_sd * sin_md + cos_sd * cos_md * delta_ra.cos()).acos();
    let inclination = (SUN_DISTANCE_KM * elongation.sin())
        .atan2(m.distance - SUN_DISTANCE_KM * elongation.cos());
    let angle = (cos_sd * delta_ra.sin()).atan2(sin_sd * cos_md - cos_sd * sin_md * delta_ra.cos());
    let sign = if angle < 0.0 { -1.0 } else { 1.0 };

    MoonIllumination {
        fraction: (1.0 + inclination.cos()) / 2.0,
        phase: 0.5 + 0.5 * inclination * sign / PI,
        angle,
    }
}

/// [`moon_illumination`] for every instant of a batch.
pub fn moon_illuminations<I>(instants: &[I]) -> Result<Vec<MoonIllumination>>
where
    I: Copy + Into<JulianDate>,
{
    broadcast_len(&[("instants", instants.len())])?;
    Ok(instants.iter().map(|&t| moon_illumination(t)).collect())
}

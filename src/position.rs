// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sun azimuth and altitude for an observer at an instant.
//!
//! ```text
//! get_position()
//!   ├─ days since J2000.0           (julian_date_ext.rs)
//!   ├─ sun_coords()                 (sun.rs)
//!   ├─ sidereal_time(), hour_angle() (coords.rs)
//!   └─ to_horizontal()              (coords.rs)
//! ```
//!
//! [`get_positions`] is the batch form: broadcast inputs, column output.
//! Element `i` of a batch is bit-for-bit the scalar result for the inputs at
//! `i`.

use tracing::instrument;

use crate::broadcast::{broadcast_len, element};
use crate::coords::{hour_angle, sidereal_time, to_horizontal, HorizontalCoord, DEG};
use crate::error::Result;
use crate::sun::sun_coords;
use crate::JulianDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sun position at `instant` for an observer at `longitude`/`latitude`
/// (degrees).  Azimuth and altitude are radians; see
/// [`coords`](crate::coords) for the azimuth convention.
///
/// ```
/// use chrono::{TimeZone, Utc};
///
/// let t = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();
/// let pos = suncalc::get_position(t, 30.5, 50.5);
/// assert!(pos.altitude < 0.0); // night in Kyiv
/// ```
pub fn get_position(
    instant: impl Into<JulianDate>,
    longitude: f64,
    latitude: f64,
) -> HorizontalCoord {
    let days = instant.into().days_since_j2000().value();
    let sun = sun_coords(days).equatorial;
    let h = hour_angle(sidereal_time(days, DEG * longitude), sun.right_ascension);
    to_horizontal(h, sun.declination, DEG * latitude)
}

/// Column-oriented batch of sun positions.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SunPositions {
    /// Radians from south, westward positive.
    pub azimuth: Vec<f64>,
    /// Radians above the horizon.
    pub altitude: Vec<f64>,
}

impl SunPositions {
    /// Number of positions.
    pub fn len(&self) -> usize {
        self.azimuth.len()
    }

    /// `true` when the batch holds no positions.
    pub fn is_empty(&self) -> bool {
        self.azimuth.is_empty()
    }

    /// Position `i` as a [`HorizontalCoord`].
    pub fn get(&self, i: usize) -> Option<HorizontalCoord> {
        Some(HorizontalCoord {
            azimuth: *self.azimuth.get(i)?,
            altitude: *self.altitude.get(i)?,
        })
    }

    /// Iterate positions in input order.
    pub fn iter(&self) -> impl Iterator<Item = HorizontalCoord> + '_ {
        self.azimuth
            .iter()
            .zip(&self.altitude)
            .map(|(&azimuth, &altitude)| HorizontalCoord { azimuth, altitude })
    }
}

impl FromIterator<HorizontalCoord> for SunPositions {
    fn from_iter<T: IntoIterator<Item = HorizontalCoord>>(iter: T) -> Self {
        let (azimuth, altitude) = iter.into_iter().map(|p| (p.azimuth, p.altitude)).unzip();
        Self { azimuth, altitude }
    }
}

/// Element-wise [`get_position`] over broadcast batch inputs.
///
/// Every input is either a single value or has the common length `N`;
/// anything else is rejected before computing.
#[instrument(level = "debug", skip_all, fields(n = tracing::field::Empty))]
pub fn get_positions<I>(instants: &[I], longitude: &[f64], latitude: &[f64]) -> Result<SunPositions>
where
    I: Copy + Into<JulianDate>,
{
    let n = broadcast_len(&[
        ("instants", instants.len()),
        ("longitude", longitude.len()),
        ("latitude", latitude.len()),
    ])
    .inspect_err(|e| tracing::warn!(error = %e, "rejected sun position batch"))?;
    tracing::Span::current().record("n", n);

    Ok((0..n)
        .map(|i| {
            get_position(
                element(instants, i),
                element(longitude, i),
                element(latitude, i),
            )
        })
        .collect())
}

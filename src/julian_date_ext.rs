// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date (`Time<JD>`) specific extensions and the calendar ↔ Julian
//! date conversions used by the ephemeris routines.

use chrono::{DateTime, Utc};
use qtty::Days;

use super::instant::Time;
use super::scales::{J2000Days, JD};
use crate::broadcast::broadcast_len;
use crate::error::Result;

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 UTC  (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// Half a solar day, the offset between solar noon and nadir.
    pub const HALF_DAY: Days = Days::new(0.5);

    /// Days elapsed since J2000.0.
    #[inline]
    pub fn days_since_j2000(&self) -> Days {
        self.to::<J2000Days>().quantity()
    }

    /// UTC noon of the calendar date this instant falls on.
    ///
    /// Julian days start at noon, so the date's midnight is
    /// `floor(jd − 0.5) + 0.5` and its noon half a day later.  Only the date
    /// component matters: every instant of `2013-03-05` maps to
    /// `2013-03-05T12:00Z`.
    #[inline]
    pub fn day_reference(&self) -> Self {
        Self::new((self.value() - 0.5).floor() + 1.0)
    }
}

/// Julian Date of a UTC timestamp, as a continuous day count.
///
/// ```
/// use chrono::{TimeZone, Utc};
///
/// let t = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
/// assert_eq!(suncalc::to_julian_date(t), 2_451_545.0);
/// ```
#[inline]
pub fn to_julian_date(instant: DateTime<Utc>) -> f64 {
    Time::<JD>::from_utc(instant).value()
}

/// Days elapsed since J2000.0 (`JD − 2 451 545.0`) for a UTC timestamp.
#[inline]
pub fn days_since_epoch(instant: DateTime<Utc>) -> f64 {
    Time::<J2000Days>::from_utc(instant).value()
}

/// Inverse of [`to_julian_date`].
///
/// Returns `None` for NaN/infinite input or a date chrono cannot represent.
#[inline]
pub fn from_julian_date(julian_date: f64) -> Option<DateTime<Utc>> {
    Time::<JD>::new(julian_date).to_utc()
}

/// [`to_julian_date`] for every instant of a batch.
///
/// ```
/// use chrono::{TimeZone, Utc};
///
/// let t = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
/// assert_eq!(suncalc::to_julian_dates(&[t, t]).unwrap(), [2_451_545.0; 2]);
/// ```
pub fn to_julian_dates(instants: &[DateTime<Utc>]) -> Result<Vec<f64>> {
    broadcast_len(&[("instants", instants.len())])?;
    Ok(instants.iter().map(|&t| to_julian_date(t)).collect())
}

/// [`days_since_epoch`] for every instant of a batch.
pub fn days_since_epochs(instants: &[DateTime<Utc>]) -> Result<Vec<f64>> {
    broadcast_len(&[("instants", instants.len())])?;
    Ok(instants.iter().map(|&t| days_since_epoch(t)).collect())
}

/// [`from_julian_date`] for every value of a batch; unrepresentable values
/// are `None` in their own slot.
pub fn from_julian_dates(julian_dates: &[f64]) -> Result<Vec<Option<DateTime<Utc>>>> {
    broadcast_len(&[("julian_dates", julian_dates.len())])?;
    Ok(julian_dates.iter().map(|&jd| from_julian_date(jd)).collect())
}

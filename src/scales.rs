// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type identifies a day counter and encodes how values on
//! that counter relate to the canonical absolute **Julian Date** (UTC axis).
//!
//! | Marker | Description | Epoch (JD) |
//! |--------|-------------|------------|
//! | [`JD`] | Julian Date | 0.0 |
//! | [`J2000Days`] | Days since J2000.0 (2000-01-01T12:00Z) | 2 451 545.0 |
//! | [`UnixTime`] | Days since 1970-01-01T00:00Z | 2 440 587.5 |

use super::instant::TimeScale;
use qtty::Days;

/// Julian Date: the identity scale.
///
/// `to_jd(v) = v`, i.e. the quantity *is* a Julian Day number.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "Julian Day:";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd
    }
}

/// Days elapsed since the J2000.0 epoch.
///
/// This is the argument `d` of every mean-element polynomial in the solar and
/// lunar models (`M = 357.5291° + 0.98560028°·d`, …).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct J2000Days;

/// JD of the J2000.0 epoch.
pub(crate) const J2000_EPOCH_JD: Days = Days::new(2_451_545.0);

impl TimeScale for J2000Days {
    const LABEL: &'static str = "J2000+";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + J2000_EPOCH_JD
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - J2000_EPOCH_JD
    }
}

/// Unix Time: seconds since 1970-01-01T00:00:00 UTC, stored as **days**.
///
/// Leap seconds are ignored, as POSIX does.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UnixTime;

/// JD of the Unix epoch (1970-01-01T00:00:00Z).
const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

impl TimeScale for UnixTime {
    const LABEL: &'static str = "Unix";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + UNIX_EPOCH_JD
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - UNIX_EPOCH_JD
    }
}

/// Generate pairwise `From<Time<A>> for Time<B>` implementations.
macro_rules! impl_time_conversions {
    ($single:ty) => {};

    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<super::instant::Time<$first>> for super::instant::Time<$rest> {
                #[inline]
                fn from(t: super::instant::Time<$first>) -> Self {
                    t.to::<$rest>()
                }
            }

            impl From<super::instant::Time<$rest>> for super::instant::Time<$first> {
                #[inline]
                fn from(t: super::instant::Time<$rest>) -> Self {
                    t.to::<$first>()
                }
            }
        )+

        impl_time_conversions!($($rest),+);
    };
}

impl_time_conversions!(JD, J2000Days, UnixTime);

#[cfg(test)]
mod tests {
    use super::super::instant::Time;
    use super::*;

    #[test]
    fn jd_j2000_days_roundtrip() {
        let jd = Time::<JD>::new(2_456_356.5);
        let d: Time<J2000Days> = jd.into();
        assert_eq!(d.value(), 4_811.5);
        let back: Time<JD> = Time::from(d);
        assert_eq!(back.value(), 2_456_356.5);
    }

    #[test]
    fn unix_epoch_roundtrip() {
        let unix_zero = Time::<UnixTime>::new(0.0);
        let jd: Time<JD> = unix_zero.to::<JD>();
        assert!((jd.quantity() - Days::new(2_440_587.5)).abs() < Days::new(1e-12));
    }

    #[test]
    fn unix_to_j2000_days() {
        // 2000-01-01T12:00Z is 10 957.5 days after the Unix epoch.
        let unix = Time::<UnixTime>::new(10_957.5);
        let d: Time<J2000Days> = unix.into();
        assert_eq!(d.value(), 0.0);
    }
}

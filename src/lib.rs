// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sun position, sunlight phases and Moon position from low-precision
//! ephemerides.
//!
//! # Core types
//!
//! - [`Time<S>`]: generic instant parameterised by a [`TimeScale`] marker.
//! - [`JulianDate`]: type alias for `Time<JD>`, the instant every routine
//!   accepts (anything `Into<JulianDate>`, including `DateTime<Utc>`).
//! - [`HorizontalCoord`]: azimuth (from south, westward) and altitude.
//! - [`SunTimes`]: label → instant mapping of one day's sunlight phases.
//! - [`SunCalc`]: calculator with a configurable phase set.
//! - [`Period<S>`] / [`Interval<T>`]: spans such as daylight.
//!
//! # Operations
//!
//! | Function | Result |
//! |----------|--------|
//! | [`get_position`] / [`get_positions`] | sun azimuth and altitude |
//! | [`get_times`] / [`get_times_batch`] | solar noon, nadir and phase instants |
//! | [`moon_position`] / [`moon_positions`] | Moon azimuth, altitude, distance |
//! | [`moon_illumination`] / [`moon_illuminations`] | illuminated fraction and phase |
//!
//! Batch functions broadcast their inputs: each slice is either a single
//! value or has the common length `N`.  Shape errors are reported as
//! [`SunCalcError`] before anything is computed; a phase the Sun never
//! reaches is a `None` entry, not an error.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//!
//! let date = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();
//! let times = suncalc::get_times(date, 30.5, 50.5, 0.0);
//! let sunrise = times.get_utc("sunrise").unwrap();
//! assert_eq!(sunrise.format("%H:%M").to_string(), "04:34");
//! ```
//!
//! # Time scales
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`JD`] | Julian Date |
//! | [`J2000Days`] | days since J2000.0 |
//! | [`UnixTime`] | days since 1970-01-01T00:00Z |
//!
//! All scales share the UTC axis; no ΔT is applied.

mod broadcast;
mod config;
pub mod coords;
mod error;
pub(crate) mod instant;
mod julian_date_ext;
pub mod moon;
mod period;
mod position;
pub(crate) mod scales;
pub mod sun;
mod times;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use broadcast::broadcast_len;
pub use config::SunCalc;
pub use coords::{astro_refraction, EquatorialCoord, GeoPoint, HorizontalCoord};
pub use error::{Result, SunCalcError};
pub use instant::{Time, TimeInstant, TimeScale};
pub use julian_date_ext::{
    days_since_epoch, days_since_epochs, from_julian_date, from_julian_dates, to_julian_date,
    to_julian_dates,
};
pub use moon::{
    moon_illumination, moon_illuminations, moon_position, moon_positions, MoonIllumination,
    MoonPosition,
};
pub use period::{Interval, Period, UtcPeriod};
pub use position::{get_position, get_positions, SunPositions};
pub use scales::{J2000Days, UnixTime, JD};
pub use times::{
    get_times, get_times_batch, get_times_with, hour_angle_for_altitude, observer_dip,
    validate_phases, PhaseEvent, PhaseSpec, SunTimes, SunTimesBatch, DEFAULT_PHASES,
    EARTH_RADIUS_M, NADIR, SOLAR_NOON,
};

/// Julian Date: continuous count of days since the Julian Period, on the
/// UTC axis.
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;

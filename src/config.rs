// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Phase-set configuration for sunlight-phase queries.

use std::borrow::Cow;

use crate::error::Result;
use crate::times::{
    get_times_batch, get_times_with, validate_phases, PhaseSpec, SunTimes, SunTimesBatch,
    DEFAULT_PHASES,
};
use crate::JulianDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Calculator holding the set of phases to report.
///
/// Use the builder methods to customise the phase set; the free functions
/// [`get_times`](crate::get_times) and
/// [`get_times_batch`](crate::get_times_batch) cover the default and ad-hoc
/// cases.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use suncalc::SunCalc;
///
/// let calc = SunCalc::new().with_phase(-4.0, "blue_hour_start", "blue_hour_end");
/// assert!(calc.validate().is_ok());
///
/// let date = Utc.with_ymd_and_hms(2020, 11, 20, 0, 0, 0).unwrap();
/// let times = calc.times(date, 20.0, 45.0, 0.0).unwrap();
/// assert!(times.get("blue_hour_start").is_some());
/// assert!(times.get("sunrise").is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SunCalc {
    phases: Vec<PhaseSpec>,
}

impl SunCalc {
    /// Creates a calculator with the [`DEFAULT_PHASES`].
    pub fn new() -> Self {
        Self {
            phases: DEFAULT_PHASES.to_vec(),
        }
    }

    /// Creates a calculator reporting exactly `phases`.
    pub fn with_phases(phases: impl IntoIterator<Item = PhaseSpec>) -> Self {
        Self {
            phases: phases.into_iter().collect(),
        }
    }

    /// Appends a phase.
    pub fn with_phase(
        mut self,
        angle: f64,
        morning: impl Into<Cow<'static, str>>,
        evening: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.add_phase(angle, morning, evening);
        self
    }

    /// Appends a phase in place.
    pub fn add_phase(
        &mut self,
        angle: f64,
        morning: impl Into<Cow<'static, str>>,
        evening: impl Into<Cow<'static, str>>,
    ) -> &mut Self {
        self.phases.push(PhaseSpec::new(angle, morning, evening));
        self
    }

    /// Returns the configured phases in report order.
    pub fn phases(&self) -> &[PhaseSpec] {
        &self.phases
    }

    /// Validates this configuration.
    ///
    /// Returns an error if an angle is non-finite, a label is empty, or two
    /// labels (including `solar_noon` and `nadir`) collide.
    pub fn validate(&self) -> Result<()> {
        validate_phases(&self.phases)
    }

    /// Sunlight phases for one observation.
    pub fn times(
        &self,
        instant: impl Into<JulianDate>,
        longitude: f64,
        latitude: f64,
        height: f64,
    ) -> Result<SunTimes> {
        self.validate()?;
        Ok(get_times_with(instant, longitude, latitude, height, &self.phases))
    }

    /// Sunlight phases for a batch of broadcast observations.
    pub fn times_batch<I>(
        &self,
        instants: &[I],
        longitude: &[f64],
        latitude: &[f64],
        height: &[f64],
    ) -> Result<SunTimesBatch>
    where
        I: Copy + Into<JulianDate>,
    {
        get_times_batch(instants, longitude, latitude, height, &self.phases)
    }
}

impl Default for SunCalc {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SunCalcError;

    #[test]
    fn defaults() {
        let calc = SunCalc::default();
        assert_eq!(calc.phases(), &DEFAULT_PHASES[..]);
        assert!(calc.validate().is_ok());
    }

    #[test]
    fn add_phase_appends_in_order() {
        let mut calc = SunCalc::with_phases([]);
        calc.add_phase(-4.0, "blue_start", "blue_end")
            .add_phase(3.0, String::from("low_sun_end"), "low_sun");
        let labels: Vec<&str> = calc.phases().iter().map(|p| p.morning.as_ref()).collect();
        assert_eq!(labels, ["blue_start", "low_sun_end"]);
    }

    #[test]
    fn invalid_configuration_is_rejected_by_every_entry_point() {
        let calc = SunCalc::new().with_phase(1.0, "sunrise", "late");
        let expected = SunCalcError::DuplicateLabel {
            label: "sunrise".into(),
        };
        assert_eq!(calc.validate(), Err(expected.clone()));
        let jd = JulianDate::new(2_459_174.0);
        assert_eq!(calc.times(jd, 0.0, 0.0, 0.0), Err(expected.clone()));
        assert_eq!(
            calc.times_batch(&[jd], &[0.0], &[0.0], &[0.0]),
            Err(expected)
        );
    }

    #[test]
    fn times_match_free_function() {
        let jd = JulianDate::new(2_459_174.0);
        let calc = SunCalc::new();
        assert_eq!(
            calc.times(jd, 20.0, 45.0, 10.0).unwrap(),
            crate::get_times(jd, 20.0, 45.0, 10.0)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let calc = SunCalc::new().with_phase(-4.0, "blue_start", "blue_end");
        let json = serde_json::to_string(&calc).unwrap();
        let back: SunCalc = serde_json::from_str(&json).unwrap();
        assert_eq!(back, calc);
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Daily sunlight phases: solar noon, nadir, and the morning/evening instants
//! at which the Sun crosses configurable altitude thresholds.
//!
//! # Algorithm
//!
//! ```text
//! get_times_with()
//!   ├─ day_reference()        UTC noon of the instant's calendar date
//!   ├─ solar_transit()        Julian cycle → approximate transit → noon
//!   ├─ observer_dip()         horizon dip for the observer height
//!   └─ per phase:
//!        hour_angle_for_altitude()   ω, or None when never reached
//!        morning = noon − ω/2π,  evening = noon + ω/2π
//! ```
//!
//! Only the calendar date of the input instant matters.  Solar noon is the
//! transit nearest local mean noon of that date, `12:00 UTC − longitude/15°`
//! hours, shifted by the equation of time (up to about ±16 minutes).  Near
//! the antimeridian local mean noon is close to UTC midnight, so noon can
//! land on the previous or next UTC date.

use std::borrow::Cow;
use std::f64::consts::TAU;

use chrono::{DateTime, Utc};
use qtty::Days;
use tracing::instrument;

use crate::broadcast::{broadcast_len, element};
use crate::coords::DEG;
use crate::error::{Result, SunCalcError};
use crate::period::Period;
use crate::scales::JD;
use crate::sun::{declination, ecliptic_longitude_at_anomaly, mean_anomaly};
use crate::JulianDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Label of the solar transit in a [`SunTimes`] mapping.
pub const SOLAR_NOON: &str = "solar_noon";

/// Label of the instant half a day before solar noon.
pub const NADIR: &str = "nadir";

/// Mean radius of the Earth in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Offset in days between the Julian cycle and the mean solar transit.
const J0: f64 = 0.0009;

/// A pair of events keyed by the Sun crossing `angle` degrees of altitude:
/// `morning` while rising, `evening` while setting.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhaseSpec {
    /// Threshold altitude of the Sun's centre, degrees.
    pub angle: f64,
    /// Label of the crossing before solar noon.
    pub morning: Cow<'static, str>,
    /// Label of the crossing after solar noon.
    pub evening: Cow<'static, str>,
}

impl PhaseSpec {
    /// Phase with owned or borrowed labels.
    pub fn new(
        angle: f64,
        morning: impl Into<Cow<'static, str>>,
        evening: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            angle,
            morning: morning.into(),
            evening: evening.into(),
        }
    }

    /// Phase with static labels, usable in constants.
    pub const fn new_static(angle: f64, morning: &'static str, evening: &'static str) -> Self {
        Self {
            angle,
            morning: Cow::Borrowed(morning),
            evening: Cow::Borrowed(evening),
        }
    }
}

/// Standard phases.  The −0.833° horizon accounts for refraction and the
/// solar semi-diameter; −0.3° is the lower limb touching the horizon.
pub const DEFAULT_PHASES: [PhaseSpec; 6] = [
    PhaseSpec::new_static(-0.833, "sunrise", "sunset"),
    PhaseSpec::new_static(-0.3, "sunrise_end", "sunset_start"),
    PhaseSpec::new_static(-6.0, "dawn", "dusk"),
    PhaseSpec::new_static(-12.0, "nautical_dawn", "nautical_dusk"),
    PhaseSpec::new_static(-18.0, "night_end", "night"),
    PhaseSpec::new_static(6.0, "golden_hour_end", "golden_hour"),
];

/// Check that a phase set yields a well-formed label mapping: finite
/// angles, non-empty labels, no label used twice or shadowing
/// [`SOLAR_NOON`] / [`NADIR`].
pub fn validate_phases(phases: &[PhaseSpec]) -> Result<()> {
    let mut seen: Vec<&str> = vec![SOLAR_NOON, NADIR];
    for phase in phases {
        if !phase.angle.is_finite() {
            return Err(SunCalcError::NonFiniteAngle {
                label: phase.morning.to_string(),
                angle: phase.angle,
            });
        }
        for label in [phase.morning.as_ref(), phase.evening.as_ref()] {
            if label.is_empty() {
                return Err(SunCalcError::EmptyLabel);
            }
            if seen.contains(&label) {
                return Err(SunCalcError::DuplicateLabel {
                    label: label.to_string(),
                });
            }
            seen.push(label);
        }
    }
    Ok(())
}

/// Dip of the apparent horizon below the geometric one, in radians, for an
/// observer `height` metres up: `acos(R / (R + h))`.
///
/// Negative heights are treated as sea level; NaN propagates.
pub fn observer_dip(height: f64) -> f64 {
    let h = if height < 0.0 { 0.0 } else { height };
    // Same angle as acos(R / (R + h)) without the cancellation near 1.
    (h * (2.0 * EARTH_RADIUS_M + h)).sqrt().atan2(EARTH_RADIUS_M)
}

/// Hour angle ω at which a body of declination `dec` reaches `altitude` for
/// an observer at `latitude` (all radians).
///
/// `None` when that altitude is never reached: polar day, polar night, or a
/// NaN input.
pub fn hour_angle_for_altitude(altitude: f64, latitude: f64, dec: f64) -> Option<f64> {
    let cos_omega =
        (altitude.sin() - latitude.sin() * dec.sin()) / (latitude.cos() * dec.cos());
    (-1.0..=1.0).contains(&cos_omega).then(|| cos_omega.acos())
}

/// Solar noon and declination for the UTC date of `instant` at `longitude`
/// (degrees, east positive).
fn solar_transit(instant: JulianDate, longitude: f64) -> (JulianDate, f64) {
    let d = instant.day_reference().days_since_j2000().value();
    let lon_turns = longitude / 360.0;

    let cycle = (d - J0 + lon_turns).round_ties_even();
    let approx_transit = J0 + cycle - lon_turns;

    let m = mean_anomaly(approx_transit);
    let l = ecliptic_longitude_at_anomaly(m);
    let equation_of_time = 0.0053 * m.sin() - 0.0069 * (2.0 * l).sin();

    (
        JulianDate::J2000 + Days::new(approx_transit + equation_of_time),
        declination(l),
    )
}

/// One labelled phase instant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhaseEvent {
    /// Event label, e.g. `"sunrise"`.
    pub label: Cow<'static, str>,
    /// Threshold altitude of the phase, degrees.
    pub angle: f64,
    /// `None` when the Sun never crosses the threshold that day.
    pub time: Option<JulianDate>,
}

/// Sunlight phases of one day at one location.
///
/// Behaves as a label → instant mapping that always holds [`SOLAR_NOON`] and
/// [`NADIR`] plus a morning and an evening entry per configured phase.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SunTimes {
    solar_noon: JulianDate,
    nadir: JulianDate,
    events: Vec<PhaseEvent>,
}

impl SunTimes {
    /// Solar transit.
    pub fn solar_noon(&self) -> JulianDate {
        self.solar_noon
    }

    /// Exactly half a day before solar noon.
    pub fn nadir(&self) -> JulianDate {
        self.nadir
    }

    /// Phase events, morning then evening for each phase, in phase order.
    pub fn events(&self) -> &[PhaseEvent] {
        &self.events
    }

    /// `true` when `label` names an entry of this mapping, defined or not.
    pub fn contains(&self, label: &str) -> bool {
        label == SOLAR_NOON || label == NADIR || self.events.iter().any(|e| e.label == label)
    }

    /// Instant for `label`; `None` for unknown labels and undefined events.
    pub fn get(&self, label: &str) -> Option<JulianDate> {
        match label {
            SOLAR_NOON => Some(self.solar_noon),
            NADIR => Some(self.nadir),
            _ => self.events.iter().find(|e| e.label == label)?.time,
        }
    }

    /// [`get`](Self::get) as a UTC timestamp.
    pub fn get_utc(&self, label: &str) -> Option<DateTime<Utc>> {
        self.get(label)?.to_utc()
    }

    /// All entries in mapping order: solar noon, nadir, then the events.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<JulianDate>)> + '_ {
        [
            (SOLAR_NOON, Some(self.solar_noon)),
            (NADIR, Some(self.nadir)),
        ]
        .into_iter()
        .chain(self.events.iter().map(|e| (e.label.as_ref(), e.time)))
    }

    /// Interval between two labelled instants, when both are defined and in
    /// order.
    pub fn span(&self, from: &str, to: &str) -> Option<Period<JD>> {
        let (start, end) = (self.get(from)?, self.get(to)?);
        (start <= end).then(|| Period::new(start, end))
    }

    /// Sunrise to sunset.
    pub fn daylight(&self) -> Option<Period<JD>> {
        self.span("sunrise", "sunset")
    }

    /// `true` when `instant` lies in `[sunrise, sunset)`.  Always `false` on
    /// days without a sunrise or sunset.
    pub fn is_daylight(&self, instant: impl Into<JulianDate>) -> bool {
        let instant = instant.into();
        self.daylight().is_some_and(|day| day.contains(instant))
    }

    /// Length of [`daylight`](Self::daylight).
    pub fn day_length(&self) -> Option<Days> {
        self.daylight().map(|p| p.duration())
    }
}

/// [`get_times_with`] for the [`DEFAULT_PHASES`].
///
/// ```
/// use chrono::{TimeZone, Utc};
///
/// let date = Utc.with_ymd_and_hms(2020, 11, 20, 0, 0, 0).unwrap();
/// let times = suncalc::get_times(date, 20.0, 45.0, 0.0);
/// let sunrise = times.get("sunrise").unwrap();
/// assert!(sunrise < times.solar_noon());
/// ```
pub fn get_times(
    instant: impl Into<JulianDate>,
    longitude: f64,
    latitude: f64,
    height: f64,
) -> SunTimes {
    get_times_with(instant, longitude, latitude, height, &DEFAULT_PHASES)
}

/// Sunlight phases for the UTC date of `instant`, at `longitude`/`latitude`
/// (degrees) and `height` metres, for the given phase set.
///
/// The threshold of every phase is lowered by the [`observer_dip`].  Labels
/// are not validated here; see [`validate_phases`].
pub fn get_times_with(
    instant: impl Into<JulianDate>,
    longitude: f64,
    latitude: f64,
    height: f64,
    phases: &[PhaseSpec],
) -> SunTimes {
    let (solar_noon, dec) = solar_transit(instant.into(), longitude);
    let phi = DEG * latitude;
    let dip = observer_dip(height);

    let mut events = Vec::with_capacity(2 * phases.len());
    for phase in phases {
        let offset = hour_angle_for_altitude(DEG * phase.angle - dip, phi, dec)
            .map(|omega| Days::new(omega / TAU));
        if offset.is_none() {
            tracing::trace!(angle = phase.angle, latitude, "sun never crosses phase altitude");
        }
        events.push(PhaseEvent {
            label: phase.morning.clone(),
            angle: phase.angle,
            time: offset.map(|o| solar_noon - o),
        });
        events.push(PhaseEvent {
            label: phase.evening.clone(),
            angle: phase.angle,
            time: offset.map(|o| solar_noon + o),
        });
    }

    SunTimes {
        solar_noon,
        nadir: solar_noon - JulianDate::HALF_DAY,
        events,
    }
}

/// Sunlight phases for a batch of observations, element `i` of the result
/// corresponding to element `i` of the (broadcast) inputs.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SunTimesBatch {
    rows: Vec<SunTimes>,
}

impl SunTimesBatch {
    /// Number of observations.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` when the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Phases of observation `i`.
    pub fn get(&self, i: usize) -> Option<&SunTimes> {
        self.rows.get(i)
    }

    /// Iterate observations in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, SunTimes> {
        self.rows.iter()
    }

    /// All instants for `label`, one per observation; `None` when the label
    /// is not part of the mapping.
    pub fn column(&self, label: &str) -> Option<Vec<Option<JulianDate>>> {
        if !self.rows.first()?.contains(label) {
            return None;
        }
        Some(self.rows.iter().map(|row| row.get(label)).collect())
    }

    /// Solar noon of every observation.
    pub fn solar_noon(&self) -> Vec<JulianDate> {
        self.rows.iter().map(SunTimes::solar_noon).collect()
    }

    /// Nadir of every observation.
    pub fn nadir(&self) -> Vec<JulianDate> {
        self.rows.iter().map(SunTimes::nadir).collect()
    }

    /// The per-observation results.
    pub fn into_inner(self) -> Vec<SunTimes> {
        self.rows
    }
}

/// Element-wise [`get_times_with`] over broadcast batch inputs.
///
/// Fails before computing anything if the phase set is malformed or an input
/// is neither a single value nor of the common length.  Events the Sun never
/// reaches are `None` in their own row only.
#[instrument(level = "debug", skip_all, fields(n = tracing::field::Empty, phases = phases.len()))]
pub fn get_times_batch<I>(
    instants: &[I],
    longitude: &[f64],
    latitude: &[f64],
    height: &[f64],
    phases: &[PhaseSpec],
) -> Result<SunTimesBatch>
where
    I: Copy + Into<JulianDate>,
{
    validate_phases(phases)?;
    let n = broadcast_len(&[
        ("instants", instants.len()),
        ("longitude", longitude.len()),
        ("latitude", latitude.len()),
        ("height", height.len()),
    ])
    .inspect_err(|e| tracing::warn!(error = %e, "rejected sun times batch"))?;
    tracing::Span::current().record("n", n);

    let rows: Vec<SunTimes> = (0..n)
        .map(|i| {
            get_times_with(
                element(instants, i),
                element(longitude, i),
                element(latitude, i),
                element(height, i),
                phases,
            )
        })
        .collect();

    let undefined = rows
        .iter()
        .flat_map(|row| row.events())
        .filter(|e| e.time.is_none())
        .count();
    tracing::debug!(undefined, "computed sun times");

    Ok(SunTimesBatch { rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn kyiv_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap()
    }

    fn assert_utc(times: &SunTimes, label: &str, expected: &str) {
        let expected: DateTime<Utc> = expected.parse().unwrap();
        let actual = times.get_utc(label).unwrap_or_else(|| panic!("{label} missing"));
        // Reference values are truncated to the second.
        let diff = (actual - expected).num_milliseconds();
        assert!(
            (-1_000..2_000).contains(&diff),
            "{label}: {actual} vs {expected}"
        );
    }

    #[test]
    fn reference_times() {
        let times = get_times(kyiv_date(), 30.5, 50.5, 0.0);
        for (label, expected) in [
            ("solar_noon", "2013-03-05T10:10:57Z"),
            ("nadir", "2013-03-04T22:10:57Z"),
            ("sunrise", "2013-03-05T04:34:56Z"),
            ("sunset", "2013-03-05T15:46:57Z"),
            ("sunrise_end", "2013-03-05T04:38:19Z"),
            ("sunset_start", "2013-03-05T15:43:34Z"),
            ("dawn", "2013-03-05T04:02:17Z"),
            ("dusk", "2013-03-05T16:19:36Z"),
            ("nautical_dawn", "2013-03-05T03:24:31Z"),
            ("nautical_dusk", "2013-03-05T16:57:22Z"),
            ("night_end", "2013-03-05T02:46:17Z"),
            ("night", "2013-03-05T17:35:36Z"),
            ("golden_hour_end", "2013-03-05T05:19:01Z"),
            ("golden_hour", "2013-03-05T15:02:52Z"),
        ] {
            assert_utc(&times, label, expected);
        }
    }

    #[test]
    fn time_of_day_of_the_input_is_ignored() {
        let a = get_times(kyiv_date(), 30.5, 50.5, 0.0);
        let late = Utc.with_ymd_and_hms(2013, 3, 5, 23, 30, 0).unwrap();
        let b = get_times(late, 30.5, 50.5, 0.0);
        assert_eq!(a, b);
    }

    #[test]
    fn nadir_is_half_a_day_before_noon() {
        let times = get_times(JulianDate::new(2_459_173.5), 20.0, 45.0, 0.0);
        assert_eq!(times.solar_noon() - times.nadir(), Days::new(0.5));
    }

    #[test]
    fn observer_dip_matches_acos_form() {
        for h in [0.0, 1.0, 100.0, 2_000.0, 8_848.0] {
            let acos_form = (EARTH_RADIUS_M / (EARTH_RADIUS_M + h)).acos();
            assert!((observer_dip(h) - acos_form).abs() < 1e-9, "height {h}");
        }
        assert_eq!(observer_dip(-50.0), 0.0);
        assert!(observer_dip(f64::NAN).is_nan());
    }

    #[test]
    fn higher_observers_see_longer_days() {
        let low = get_times(kyiv_date(), 30.5, 50.5, 0.0);
        let high = get_times(kyiv_date(), 30.5, 50.5, 2_000.0);
        assert!(high.get("sunrise").unwrap() < low.get("sunrise").unwrap());
        assert!(high.get("sunset").unwrap() > low.get("sunset").unwrap());
        assert_eq!(high.solar_noon(), low.solar_noon());
    }

    #[test]
    fn negative_height_is_sea_level() {
        let sea = get_times(kyiv_date(), 30.5, 50.5, 0.0);
        let below = get_times(kyiv_date(), 30.5, 50.5, -400.0);
        assert_eq!(sea, below);
    }

    #[test]
    fn hour_angle_out_of_domain_is_none() {
        // Midsummer at 85° N: the Sun stays above the horizon.
        let dec = 23.44 * DEG;
        assert!(hour_angle_for_altitude(-0.833 * DEG, 85.0 * DEG, dec).is_none());
        assert!(hour_angle_for_altitude(0.0, 45.0 * DEG, dec).is_some());
        assert!(hour_angle_for_altitude(f64::NAN, 45.0 * DEG, dec).is_none());
    }

    #[test]
    fn custom_phase_labels_are_used() {
        let phases = [PhaseSpec::new(-4.0, String::from("blue_start"), "blue_end")];
        let times = get_times_with(kyiv_date(), 30.5, 50.5, 0.0, &phases);
        assert_eq!(times.events().len(), 2);
        assert!(times.get("blue_start").unwrap() < times.get("blue_end").unwrap());
        assert!(times.get("sunrise").is_none());
        assert!(!times.contains("sunrise"));
    }

    #[test]
    fn iter_yields_the_full_mapping() {
        let times = get_times(kyiv_date(), 30.5, 50.5, 0.0);
        let labels: Vec<&str> = times.iter().map(|(l, _)| l).collect();
        assert_eq!(labels.len(), 2 + 2 * DEFAULT_PHASES.len());
        assert_eq!(&labels[..4], &["solar_noon", "nadir", "sunrise", "sunset"]);
    }

    #[test]
    fn day_length_matches_sunrise_to_sunset() {
        let times = get_times(kyiv_date(), 30.5, 50.5, 0.0);
        let expected = times.get("sunset").unwrap() - times.get("sunrise").unwrap();
        assert_eq!(times.day_length(), Some(expected));
        assert!(times.span("sunset", "sunrise").is_none());
    }

    #[test]
    fn is_daylight_follows_sunrise_and_sunset() {
        let times = get_times(kyiv_date(), 30.5, 50.5, 0.0);
        let sunrise = times.get("sunrise").unwrap();
        let sunset = times.get("sunset").unwrap();
        assert!(times.is_daylight(times.solar_noon()));
        assert!(times.is_daylight(sunrise));
        assert!(!times.is_daylight(sunset));
        assert!(!times.is_daylight(sunrise - Days::new(0.01)));
        assert!(!times.is_daylight(kyiv_date()));

        let june = Utc.with_ymd_and_hms(2020, 6, 21, 0, 0, 0).unwrap();
        let polar = get_times(june, 15.0, 85.0, 0.0);
        assert!(!polar.is_daylight(polar.solar_noon()));
    }

    #[test]
    fn noon_near_the_antimeridian_can_change_utc_date() {
        for (longitude, (y, m, d), (ny, nm, nd)) in [
            (-179.0, (2020, 2, 11), (2020, 2, 12)),
            (178.0, (2020, 11, 3), (2020, 11, 2)),
            (179.0, (2020, 11, 3), (2020, 11, 2)),
        ] {
            let date = Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap();
            let times = get_times(date, longitude, 45.0, 0.0);
            let noon = times.get_utc(SOLAR_NOON).unwrap();
            let expected = Utc.with_ymd_and_hms(ny, nm, nd, 0, 0, 0).unwrap();
            assert_eq!(noon.date_naive(), expected.date_naive(), "lon {longitude}");

            // Still the transit nearest local mean noon of the requested date.
            let mean_noon = JulianDate::from(date).day_reference() - Days::new(longitude / 360.0);
            let offset_min = (times.solar_noon() - mean_noon).value() * 1_440.0;
            assert!(offset_min.abs() < 20.0, "lon {longitude}: {offset_min} min");
        }
    }

    #[test]
    fn validate_rejects_bad_phase_sets() {
        assert!(validate_phases(&DEFAULT_PHASES).is_ok());
        assert_eq!(
            validate_phases(&[PhaseSpec::new_static(1.0, "solar_noon", "x")]),
            Err(SunCalcError::DuplicateLabel {
                label: "solar_noon".into()
            })
        );
        assert_eq!(
            validate_phases(&[PhaseSpec::new_static(1.0, "", "x")]),
            Err(SunCalcError::EmptyLabel)
        );
        assert!(matches!(
            validate_phases(&[PhaseSpec::new_static(f64::NAN, "a", "b")]),
            Err(SunCalcError::NonFiniteAngle { .. })
        ));
        assert!(validate_phases(&[
            PhaseSpec::new_static(1.0, "a", "b"),
            PhaseSpec::new_static(2.0, "c", "a"),
        ])
        .is_err());
    }

    #[test]
    fn batch_column_and_rows() {
        let dates = [kyiv_date(), kyiv_date()];
        let batch =
            get_times_batch(&dates, &[30.5], &[50.5, 85.0], &[0.0], &DEFAULT_PHASES).unwrap();
        assert_eq!(batch.len(), 2);
        let sunrise = batch.column("sunrise").unwrap();
        assert_eq!(sunrise[0], get_times(kyiv_date(), 30.5, 50.5, 0.0).get("sunrise"));
        assert!(batch.column("moonrise").is_none());
        assert_eq!(batch.solar_noon().len(), 2);
    }

    #[test]
    fn batch_rejects_duplicate_labels_before_computing() {
        let phases = [PhaseSpec::new_static(1.0, "nadir", "x")];
        let result = get_times_batch(&[kyiv_date()], &[0.0], &[0.0], &[0.0], &phases);
        assert!(matches!(result, Err(SunCalcError::DuplicateLabel { .. })));
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for the suncalc crate.
//!
//! Only whole-call failures live here.  A sun altitude that is never reached
//! on a given day is not an error: it resolves to a missing (`None`) event
//! for that element alone.

/// Error type for all fallible operations in the suncalc crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SunCalcError {
    /// A batch input has no elements.
    #[error("input `{input}` is empty")]
    EmptyInput {
        /// Name of the empty input.
        input: &'static str,
    },

    /// A batch input is neither a single value nor of the common length.
    #[error("input `{input}` has length {len}, expected 1 or {expected}")]
    ShapeMismatch {
        /// Name of the offending input.
        input: &'static str,
        /// Its length.
        len: usize,
        /// The common length of the other inputs.
        expected: usize,
    },

    /// A phase threshold angle is NaN or infinite.
    #[error("phase `{label}` has non-finite angle {angle}")]
    NonFiniteAngle {
        /// Morning label of the phase.
        label: String,
        /// The offending angle in degrees.
        angle: f64,
    },

    /// A phase label is the empty string.
    #[error("phase labels must not be empty")]
    EmptyLabel,

    /// Two labels of the result mapping would collide.
    #[error("duplicate phase label `{label}`")]
    DuplicateLabel {
        /// The repeated label.
        label: String,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SunCalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_shape_mismatch() {
        let e = SunCalcError::ShapeMismatch {
            input: "latitude",
            len: 3,
            expected: 5,
        };
        assert_eq!(
            e.to_string(),
            "input `latitude` has length 3, expected 1 or 5"
        );
    }

    #[test]
    fn error_empty_input() {
        let e = SunCalcError::EmptyInput { input: "instants" };
        assert_eq!(e.to_string(), "input `instants` is empty");
    }

    #[test]
    fn error_non_finite_angle() {
        let e = SunCalcError::NonFiniteAngle {
            label: "dawn".into(),
            angle: f64::NAN,
        };
        assert_eq!(e.to_string(), "phase `dawn` has non-finite angle NaN");
    }

    #[test]
    fn error_duplicate_label() {
        let e = SunCalcError::DuplicateLabel {
            label: "nadir".into(),
        };
        assert_eq!(e.to_string(), "duplicate phase label `nadir`");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<SunCalcError>();
    }
}

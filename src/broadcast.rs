// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Shape validation for batch inputs.
//!
//! Every batch entry point accepts parallel slices.  A slice of length 1 is
//! broadcast against the others; any other length must equal the common
//! length `N`.  Validation happens before any element is computed.

use crate::error::{Result, SunCalcError};

/// Common length of a set of named batch inputs.
///
/// ```
/// use suncalc::broadcast_len;
///
/// assert_eq!(broadcast_len(&[("instants", 4), ("longitude", 1)]).unwrap(), 4);
/// assert!(broadcast_len(&[("instants", 4), ("longitude", 3)]).is_err());
/// ```
pub fn broadcast_len(inputs: &[(&'static str, usize)]) -> Result<usize> {
    if let Some(&(input, _)) = inputs.iter().find(|(_, len)| *len == 0) {
        return Err(SunCalcError::EmptyInput { input });
    }
    let expected = inputs.iter().map(|(_, len)| *len).max().unwrap_or(1);
    for &(input, len) in inputs {
        if len != 1 && len != expected {
            return Err(SunCalcError::ShapeMismatch {
                input,
                len,
                expected,
            });
        }
    }
    Ok(expected)
}

/// Element `i` of a validated batch input, repeating single values.
#[inline]
pub(crate) fn element<T: Copy>(values: &[T], i: usize) -> T {
    if values.len() == 1 {
        values[0]
    } else {
        values[i]
    }
}

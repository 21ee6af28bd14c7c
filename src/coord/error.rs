// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all coordinate-related errors.

use thiserror::Error;

use crate::sexagesimal::SexagesimalError;

#[derive(Error, Debug)]
pub enum CoordError {
    #[error("Sky coordinates must be finite, but got RA {ra}°, Dec {dec}°")]
    NotFinite { ra: f64, dec: f64 },

    #[error("Declination {0}° is not between -90° and 90°")]
    DecOutOfRange(f64),

    #[error(transparent)]
    Sexagesimal(#[from] SexagesimalError),
}

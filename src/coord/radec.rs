// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Handle (right ascension, declination) coordinates.
 */

use serde::{Deserialize, Serialize};

use super::CoordError;
use crate::sexagesimal::{
    degrees_to_sexagesimal_dms_colons, degrees_to_sexagesimal_hms_colons,
    sexagesimal_dms_colon_str_to_degrees, sexagesimal_hms_colon_str_to_degrees,
};

/// A struct containing a Right Ascension and Declination. All units are in
/// degrees. The RA is always within [0, 360) and the Dec within [-90, 90].
///
/// Deserialised values are checked the same way as [`RADec::new_degrees`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedRADec")]
pub struct RADec {
    /// Right ascension [degrees]
    ra: f64,
    /// Declination [degrees]
    dec: f64,
}

impl RADec {
    /// Make a new `RADec` struct from values in degrees. The RA is wrapped
    /// into [0, 360).
    pub fn new_degrees(ra: f64, dec: f64) -> Result<Self, CoordError> {
        if !ra.is_finite() || !dec.is_finite() {
            return Err(CoordError::NotFinite { ra, dec });
        }
        if !(-90.0..=90.0).contains(&dec) {
            return Err(CoordError::DecOutOfRange(dec));
        }

        let mut ra = ra.rem_euclid(360.0);
        // rem_euclid can round tiny negative values up to exactly 360.
        if ra >= 360.0 {
            ra = 0.0;
        }
        Ok(Self { ra, dec })
    }

    /// Make a new `RADec` from colon-delimited sexagesimal strings. The RA is
    /// in "hours minutes seconds" and the Dec in "degrees minutes seconds".
    ///
    /// # Examples
    ///
    /// ```
    /// # use decam_script::coord::*;
    /// # use approx::*;
    /// # fn main() -> Result<(), CoordError> {
    /// let radec = RADec::from_sexagesimal("23:48:33.34", "-30:54:10.0")?;
    /// assert_abs_diff_eq!(radec.ra(), 357.1389, epsilon = 1e-3);
    /// assert_abs_diff_eq!(radec.dec(), -30.9028, epsilon = 1e-3);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_sexagesimal(ra: &str, dec: &str) -> Result<Self, CoordError> {
        let ra = sexagesimal_hms_colon_str_to_degrees(ra)?;
        let dec = sexagesimal_dms_colon_str_to_degrees(dec)?;
        Self::new_degrees(ra, dec)
    }

    /// Right ascension [degrees]
    pub fn ra(&self) -> f64 {
        self.ra
    }

    /// Declination [degrees]
    pub fn dec(&self) -> f64 {
        self.dec
    }

    /// Get the colon-delimited sexagesimal strings of these coordinates, as
    /// expected by the telescope control system: ("HH:MM:SS.ss",
    /// "±DD:MM:SS.s").
    ///
    /// # Examples
    ///
    /// ```
    /// # use decam_script::coord::*;
    /// # fn main() -> Result<(), CoordError> {
    /// let radec = RADec::new_degrees(187.6875, -12.5125)?;
    /// let (ra, dec) = radec.to_sexagesimal_colons();
    /// assert_eq!(ra, "12:30:45.00");
    /// assert_eq!(dec, "-12:30:45.0");
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_sexagesimal_colons(&self) -> (String, String) {
        (
            degrees_to_sexagesimal_hms_colons(self.ra),
            degrees_to_sexagesimal_dms_colons(self.dec),
        )
    }
}

#[derive(Deserialize)]
struct UncheckedRADec {
    ra: f64,
    dec: f64,
}

impl TryFrom<UncheckedRADec> for RADec {
    type Error = CoordError;

    fn try_from(radec: UncheckedRADec) -> Result<Self, Self::Error> {
        Self::new_degrees(radec.ra, radec.dec)
    }
}

impl std::fmt::Display for RADec {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (ra, dec) = self.to_sexagesimal_colons();
        write!(f, "{ra} {dec}")
    }
}

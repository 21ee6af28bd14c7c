// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Code for handling conversion to and from colon-delimited sexagesimal strings.
 */

use thiserror::Error;

/// Split a colon-delimited sexagesimal string into its three numeric fields.
fn split_colon_fields(s: &str) -> Result<(f64, f64, f64), SexagesimalError> {
    let mut split = Vec::with_capacity(3);
    for elem in s.split(':') {
        let elem = elem.trim();
        let f = elem
            .parse()
            .map_err(|_| SexagesimalError::NotANumber(elem.to_string(), s.to_string()))?;
        split.push(f);
    }
    if split.len() != 3 {
        return Err(SexagesimalError::WrongFieldCount(s.to_string()));
    }
    Ok((split[0], split[1], split[2]))
}

/// Convert a sexagesimal-formatted string delimited by colons to a float
/// \[degrees\]. The input is assumed to be in "hours minutes seconds", and is
/// not normalised.
///
/// # Examples
///
/// ```
/// # use decam_script::sexagesimal::*;
/// # use approx::*;
/// # fn main() -> Result<(), SexagesimalError> {
/// let f = sexagesimal_hms_colon_str_to_degrees("23:48:33.34")?;
/// assert_abs_diff_eq!(f, 357.138917, epsilon = 1e-6);
/// # Ok(())
/// # }
/// ```
pub fn sexagesimal_hms_colon_str_to_degrees(s: &str) -> Result<f64, SexagesimalError> {
    let (h, m, s) = split_colon_fields(s)?;
    Ok((h + m / 60.0 + s / 3600.0) * 15.0)
}

/// Convert a sexagesimal-formatted string delimited by colons to a float
/// \[degrees\]. The input is assumed to be in "degrees minutes seconds".
///
/// Only the first character of the string decides the sign: if it is '-',
/// the minutes and seconds are subtracted from the degrees, otherwise they are
/// added. This means that "-00:30:00" is -0.5 degrees, and signs on the
/// minutes or seconds fields are taken at face value.
///
/// # Examples
///
/// ```
/// # use decam_script::sexagesimal::*;
/// # use approx::*;
/// # fn main() -> Result<(), SexagesimalError> {
/// let f = sexagesimal_dms_colon_str_to_degrees("-30:54:10.0")?;
/// assert_abs_diff_eq!(f, -30.902778, epsilon = 1e-6);
/// # Ok(())
/// # }
/// ```
pub fn sexagesimal_dms_colon_str_to_degrees(s: &str) -> Result<f64, SexagesimalError> {
    let negative = s.starts_with('-');
    let (d, m, s) = split_colon_fields(s)?;
    if negative {
        Ok(d - m / 60.0 - s / 3600.0)
    } else {
        Ok(d + m / 60.0 + s / 3600.0)
    }
}

/// Convert a number in degrees to a colon-delimited sexagesimal string in
/// "hours minutes seconds" (HH:MM:SS.ss). The input is wrapped into [0, 360)
/// first, so an angle that rounds up to 24h is written as 00:00:00.00.
///
/// # Examples
///
/// ```
/// # use decam_script::sexagesimal::*;
/// let hms = degrees_to_sexagesimal_hms_colons(357.138917);
/// assert_eq!(hms, "23:48:33.34");
/// ```
pub fn degrees_to_sexagesimal_hms_colons(f: f64) -> String {
    // Hundredths of a second of time in a day.
    const UNITS_PER_DAY: u64 = 24 * 3600 * 100;

    let hours = f.rem_euclid(360.0) / 15.0;
    let units = (hours * 3600.0 * 100.0).round() as u64 % UNITS_PER_DAY;
    let seconds = units / 100;

    format!(
        "{hrs:02}:{min:02}:{sec:02}.{frac:02}",
        hrs = seconds / 3600,
        min = (seconds / 60) % 60,
        sec = seconds % 60,
        frac = units % 100,
    )
}

/// Convert a number in degrees to a colon-delimited sexagesimal string in
/// "degrees minutes seconds" (±DD:MM:SS.s). The sign is always written.
///
/// # Examples
///
/// ```
/// # use decam_script::sexagesimal::*;
/// let dms = degrees_to_sexagesimal_dms_colons(-30.902778);
/// assert_eq!(dms, "-30:54:10.0");
/// ```
pub fn degrees_to_sexagesimal_dms_colons(f: f64) -> String {
    // Tenths of an arcsecond.
    let units = (f.abs() * 3600.0 * 10.0).round() as u64;
    let seconds = units / 10;

    format!(
        "{sign}{deg:02}:{min:02}:{sec:02}.{frac}",
        sign = if f < 0.0 && units > 0 { '-' } else { '+' },
        deg = seconds / 3600,
        min = (seconds / 60) % 60,
        sec = seconds % 60,
        frac = units % 10,
    )
}

#[derive(Error, Debug)]
pub enum SexagesimalError {
    /// Three numbers (fields) are expected; this error is used when the number
    /// of fields is not three.
    #[error("Did not get three colon-delimited sexagesimal fields: {0}")]
    WrongFieldCount(String),

    #[error("Couldn't parse '{0}' as a number in sexagesimal string: {1}")]
    NotANumber(String, String),
}

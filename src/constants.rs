// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All angles are in degrees and all times are in seconds.
 */

/// Every exposure in a batch has its declination shifted by this much, so the
/// target doesn't land in the middle of the array [degrees]. (5 arcminutes)
pub const DEC_OFFSET_DEG: f64 = 5.0 / 60.0;

/// Dithers are drawn uniformly from +- this value in both RA and Dec
/// [degrees]. (120 arcseconds)
pub const DITHER_OFFSET_DEG: f64 = 120.0 / 3600.0;

/// The estimated cost of reading out and slewing for each exposure [seconds].
pub const OVERHEAD_PER_EXPOSURE_S: u64 = 28;

/// The value of "expType" for every exposure in a script.
pub const EXPOSURE_TYPE: &str = "object";

/// The target name written into scripts when none is configured.
pub const DEFAULT_OBJECT_NAME: &str = "VIK_J2348-3054";

/// The script filename used when none is configured.
pub const DEFAULT_OUTPUT_FILENAME: &str = "y_two_hours_6.json";

pub(crate) const DEFAULT_RA: &str = "23:48:33.34";
pub(crate) const DEFAULT_DEC: &str = "-30:54:10.0";
pub(crate) const DEFAULT_FILTER: &str = "Y";
pub(crate) const DEFAULT_EXP_TIME_S: u32 = 200;
pub(crate) const DEFAULT_NUM_EXPOSURES: usize = 30;

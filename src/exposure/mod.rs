// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Batches of identically-configured exposures around a single target, and
//! the exposure commands they produce.

mod error;

pub use error::ExposureBatchError;

use std::num::NonZeroUsize;

use log::trace;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{DEC_OFFSET_DEG, DITHER_OFFSET_DEG, EXPOSURE_TYPE},
    coord::RADec,
};

/// A single exposure command, as consumed by the observatory control system.
/// The field order here is the field order in the written script.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exposure {
    #[serde(rename = "expType")]
    pub exp_type: String,

    pub object: String,

    /// "HH:MM:SS.ss"
    #[serde(rename = "RA")]
    pub ra: String,

    /// "±DD:MM:SS.s"
    pub dec: String,

    pub filter: String,

    /// [seconds]
    #[serde(rename = "expTime")]
    pub exp_time: u32,
}

/// A group of exposures that share a pointing centre, filter and exposure
/// time. Each exposure is dithered about the centre.
#[derive(Clone, Debug, PartialEq)]
pub struct ExposureBatch {
    centre: RADec,
    filter: String,
    /// [seconds]
    exp_time: u32,
    num_exposures: NonZeroUsize,
}

impl ExposureBatch {
    /// Create a new batch. `ra` is a colon-delimited "hours minutes seconds"
    /// string and `dec` is a colon-delimited "degrees minutes seconds" string,
    /// optionally with a leading sign.
    pub fn new(
        ra: &str,
        dec: &str,
        filter: &str,
        exp_time: u32,
        num_exposures: usize,
    ) -> Result<ExposureBatch, ExposureBatchError> {
        let num_exposures =
            NonZeroUsize::new(num_exposures).ok_or(ExposureBatchError::NoExposures)?;
        let centre = RADec::from_sexagesimal(ra, dec)?;
        trace!("New exposure batch centred on {centre} ({ra} {dec})");

        Ok(ExposureBatch {
            centre,
            filter: filter.to_string(),
            exp_time,
            num_exposures,
        })
    }

    pub fn centre(&self) -> RADec {
        self.centre
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn exp_time(&self) -> u32 {
        self.exp_time
    }

    pub fn num_exposures(&self) -> usize {
        self.num_exposures.get()
    }

    /// Get randomly dithered positions for every exposure in this batch. The
    /// returned vectors are (RAs, Decs) [degrees], and both have a length
    /// equal to the number of exposures.
    ///
    /// Each position is the centre plus a uniform offset within
    /// +-[`DITHER_OFFSET_DEG`] in each of RA and Dec. Every Dec is also
    /// offset by [`DEC_OFFSET_DEG`]. New positions are drawn on every call.
    pub fn dithered_positions<R: Rng>(&self, rng: &mut R) -> (Vec<f64>, Vec<f64>) {
        let n = self.num_exposures.get();
        let ra_dithers = (0..n).map(|_| rng.gen_range(-DITHER_OFFSET_DEG..=DITHER_OFFSET_DEG));
        let ras: Vec<f64> = ra_dithers.map(|d| self.centre.ra() + d).collect();
        let dec_dithers = (0..n).map(|_| rng.gen_range(-DITHER_OFFSET_DEG..=DITHER_OFFSET_DEG));
        let decs: Vec<f64> = dec_dithers
            .map(|d| self.centre.dec() + d + DEC_OFFSET_DEG)
            .collect();
        (ras, decs)
    }

    /// Generate the exposure commands for this batch on the target `object`,
    /// one per dithered position, in exposure order.
    pub fn exposures<R: Rng>(
        &self,
        object: &str,
        rng: &mut R,
    ) -> Result<Vec<Exposure>, ExposureBatchError> {
        let (ras, decs) = self.dithered_positions(rng);
        ras.into_iter()
            .zip(decs)
            .map(|(ra, dec)| -> Result<Exposure, ExposureBatchError> {
                let (ra, dec) = RADec::new_degrees(ra, dec)?.to_sexagesimal_colons();
                Ok(Exposure {
                    exp_type: EXPOSURE_TYPE.to_string(),
                    object: object.to_string(),
                    ra,
                    dec,
                    filter: self.filter.clone(),
                    exp_time: self.exp_time,
                })
            })
            .collect()
    }
}

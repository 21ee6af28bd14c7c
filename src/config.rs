// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The configuration of an observing script.
//!
//! A [`ScriptConfig`] only holds what a user typed; [`ScriptConfig::parse`]
//! makes sense of it and produces [`ScriptParams`]. The default configuration
//! is 30 200s Y-band exposures on VIK J2348-3054.

use std::path::PathBuf;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    constants::*,
    exposure::{ExposureBatch, ExposureBatchError},
    script::ScriptParams,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    /// Where to write the script.
    pub output: PathBuf,

    /// The name of the target.
    pub object: String,

    /// The exposure batches, in the order they should be observed.
    pub batches: Vec<BatchConfig>,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_FILENAME),
            object: DEFAULT_OBJECT_NAME.to_string(),
            batches: vec![BatchConfig::default()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Right ascension of the pointing centre ("HH:MM:SS.ss").
    pub ra: String,

    /// Declination of the pointing centre ("±DD:MM:SS.s").
    pub dec: String,

    pub filter: String,

    /// The duration of each exposure [seconds].
    pub exp_time: u32,

    /// The number of exposures.
    pub count: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            ra: DEFAULT_RA.to_string(),
            dec: DEFAULT_DEC.to_string(),
            filter: DEFAULT_FILTER.to_string(),
            exp_time: DEFAULT_EXP_TIME_S,
            count: DEFAULT_NUM_EXPOSURES,
        }
    }
}

impl BatchConfig {
    pub fn parse(&self) -> Result<ExposureBatch, ExposureBatchError> {
        let BatchConfig {
            ra,
            dec,
            filter,
            exp_time,
            count,
        } = self;
        ExposureBatch::new(ra, dec, filter, *exp_time, *count)
    }
}

impl ScriptConfig {
    pub fn parse(self) -> Result<ScriptParams, ConfigError> {
        debug!("{:#?}", self);

        let ScriptConfig {
            output,
            object,
            batches,
        } = self;

        if batches.is_empty() {
            return Err(ConfigError::NoBatches);
        }
        if object.trim().is_empty() {
            return Err(ConfigError::NoObject);
        }

        let batches = batches
            .iter()
            .enumerate()
            .map(|(i, b)| b.parse().map_err(|err| ConfigError::Batch { num: i + 1, err }))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ScriptParams {
            output,
            object,
            batches,
        })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No exposure batches were specified")]
    NoBatches,

    #[error("The target (object) name is empty")]
    NoObject,

    #[error("Exposure batch {num}: {err}")]
    Batch { num: usize, err: ExposureBatchError },
}

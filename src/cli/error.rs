// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all decam-script-related errors. This should be the *only*
//! error enum that is publicly visible.

use thiserror::Error;

use crate::{config::ConfigError, exposure::ExposureBatchError, script::ScriptWriteError};

/// The *only* publicly visible error from decam-script.
#[derive(Error, Debug)]
pub enum DecamScriptError {
    /// An error related to sky coordinates.
    #[error("{0}\n\nRA must be given as \"HH:MM:SS.ss\" and Dec as \"±DD:MM:SS.s\"")]
    Coordinates(String),

    /// An error related to the settings of exposure batches.
    #[error("{0}")]
    Batch(String),

    /// An error related to writing or reading the script.
    #[error("{0}")]
    Script(String),

    /// An error related to argument files.
    #[error("{0}")]
    ArgFile(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

impl From<ConfigError> for DecamScriptError {
    fn from(e: ConfigError) -> Self {
        let s = e.to_string();
        match e {
            ConfigError::NoBatches | ConfigError::NoObject => Self::ArgFile(s),
            ConfigError::Batch { err, .. } => match err {
                ExposureBatchError::Coord(_) => Self::Coordinates(s),
                ExposureBatchError::NoExposures => Self::Batch(s),
            },
        }
    }
}

impl From<ScriptWriteError> for DecamScriptError {
    fn from(e: ScriptWriteError) -> Self {
        let s = e.to_string();
        match e {
            ScriptWriteError::Exposure(ExposureBatchError::Coord(_)) => Self::Coordinates(s),
            ScriptWriteError::Exposure(ExposureBatchError::NoExposures) => Self::Batch(s),
            ScriptWriteError::Json(_) => Self::Script(s),
            ScriptWriteError::IO(e) => Self::from(e),
        }
    }
}

impl From<std::io::Error> for DecamScriptError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}

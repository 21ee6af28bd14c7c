// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors from writing and reading observing scripts.

use thiserror::Error;

use crate::exposure::ExposureBatchError;

#[derive(Error, Debug)]
pub enum ScriptWriteError {
    #[error(transparent)]
    Exposure(#[from] ExposureBatchError),

    #[error("Couldn't (de)serialise the script: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}

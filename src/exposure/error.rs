// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for exposure-batch-related errors.

use thiserror::Error;

use crate::coord::CoordError;

#[derive(Error, Debug)]
pub enum ExposureBatchError {
    #[error("An exposure batch must have at least one exposure")]
    NoExposures,

    #[error(transparent)]
    Coord(#[from] CoordError),
}

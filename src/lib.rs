// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Generate dithered observing scripts for the Dark Energy Camera (DECam), and
estimate how long they take to observe.
 */

mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod exposure;
pub mod script;
pub mod sexagesimal;

// Re-exports.
pub use cli::{DecamScript, DecamScriptError};
pub use config::{BatchConfig, ScriptConfig};
pub use coord::RADec;
pub use exposure::{Exposure, ExposureBatch};
pub use script::{
    calculate_total_time, construct_script, format_duration, ScriptParams, ScriptSummary,
};

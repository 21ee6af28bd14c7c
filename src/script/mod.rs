// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Assemble exposure batches into an observing script, and estimate how long
//! the script takes to run.
//!
//! A script is a JSON array of [`Exposure`]s. It is written in one go and
//! then read back to estimate its duration.

mod error;
#[cfg(test)]
mod tests;

pub use error::ScriptWriteError;

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use log::{debug, info};
use rand::Rng;
use serde::Deserialize;

use crate::{
    constants::OVERHEAD_PER_EXPOSURE_S,
    exposure::{Exposure, ExposureBatch},
};

/// Everything needed to write a script.
#[derive(Debug, Clone)]
pub struct ScriptParams {
    /// The script to write.
    pub output: PathBuf,

    /// The target name written for every exposure.
    pub object: String,

    /// The batches of exposures, in the order they should be observed.
    pub batches: Vec<ExposureBatch>,
}

impl ScriptParams {
    pub fn run<R: Rng>(&self, rng: &mut R) -> Result<ScriptSummary, ScriptWriteError> {
        construct_script(&self.output, &self.object, &self.batches, rng)
    }
}

/// The size and estimated duration of a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptSummary {
    pub num_exposures: usize,

    /// The estimated duration of the script, including overheads [seconds].
    pub total_time: u64,
}

/// Write all the exposures of all the `batches` (in order) to a script at
/// `path`, overwriting anything that was there. The written script is then
/// read back to estimate its total duration.
///
/// The "Total time of script ~ H:MM:SS" line is emitted at the info level
/// through `log`; nothing is printed unless a logger has been set up.
pub fn construct_script<P: AsRef<Path>, R: Rng>(
    path: P,
    object: &str,
    batches: &[ExposureBatch],
    rng: &mut R,
) -> Result<ScriptSummary, ScriptWriteError> {
    let path = path.as_ref();

    let mut exposures = Vec::with_capacity(batches.iter().map(|b| b.num_exposures()).sum());
    for batch in batches {
        exposures.extend(batch.exposures(object, rng)?);
    }
    write_exposures(path, &exposures)?;

    let summary = calculate_total_time(path)?;
    info!(
        "Total time of script ~ {}",
        format_duration(summary.total_time)
    );
    Ok(summary)
}

/// Write exposures to `path` as a pretty-printed JSON array.
pub fn write_exposures(path: &Path, exposures: &[Exposure]) -> Result<(), ScriptWriteError> {
    debug!("Writing {} exposures to {}", exposures.len(), path.display());
    let mut f = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut f, exposures)?;
    writeln!(f)?;
    f.flush()?;
    Ok(())
}

/// Only the exposure times are needed to estimate durations.
#[derive(Deserialize)]
struct ExposureTime {
    #[serde(rename = "expTime")]
    exp_time: u32,
}

/// Read the script at `path` and estimate its total duration [seconds]: the
/// sum of the exposure times plus [`OVERHEAD_PER_EXPOSURE_S`] for each
/// exposure.
pub fn calculate_total_time<P: AsRef<Path>>(path: P) -> Result<ScriptSummary, ScriptWriteError> {
    let path = path.as_ref();
    debug!("Reading {} to calculate its duration", path.display());
    let f = BufReader::new(File::open(path)?);
    let exposures: Vec<ExposureTime> = serde_json::from_reader(f)?;
    let total_time = exposures.iter().map(|e| u64::from(e.exp_time)).sum::<u64>()
        + OVERHEAD_PER_EXPOSURE_S * exposures.len() as u64;
    Ok(ScriptSummary {
        num_exposures: exposures.len(),
        total_time,
    })
}

/// Format a number of seconds as "H:MM:SS". Durations of a day or more are
/// prefixed with the number of days, e.g. "1 day, 2:03:04".
pub fn format_duration(seconds: u64) -> String {
    let days = seconds / 86400;
    let hms = format!(
        "{}:{:02}:{:02}",
        (seconds % 86400) / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    );
    match days {
        0 => hms,
        1 => format!("1 day, {hms}"),
        _ => format!("{days} days, {hms}"),
    }
}

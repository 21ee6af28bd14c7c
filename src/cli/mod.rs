// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line interface code.
//!
//! Script settings (target, batches) are never taken from the command line;
//! they come from an arguments file, or the defaults. The only options here
//! are about where the script goes and how the program behaves.
//!
//! Only 3 things should be public in this module: `DecamScript`,
//! `DecamScript::run`, and `DecamScriptError`.

mod error;
mod printers;

pub use error::DecamScriptError;
pub(crate) use printers::{display_warnings, InfoPrinter, Warn};

use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use clap::{AppSettings, Args, Parser};
use itertools::Itertools;
use log::{debug, info, trace};
use rand::Rng;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::{
    config::ScriptConfig,
    script::{ScriptParams, ScriptSummary},
};

// Add build-time information from the "built" crate.
include!(concat!(env!("OUT_DIR"), "/built.rs"));

lazy_static::lazy_static! {
    static ref ARG_FILE_TYPES_COMMA_SEPARATED: String = ArgFileTypes::iter().join(", ");

    static ref ARG_FILE_HELP: String =
        format!("The target, output and exposure batches may be specified in a file. Any CLI arguments override arguments set in the file. If not given, the default script is made. Supported formats: {}", *ARG_FILE_TYPES_COMMA_SEPARATED);
}

#[derive(Debug, Display, EnumIter, EnumString)]
enum ArgFileTypes {
    #[strum(serialize = "toml")]
    Toml,
    #[strum(serialize = "json")]
    Json,
}

#[derive(Debug, Parser)]
#[clap(
    version,
    author,
    about = "Generate a dithered DECam observing script, and estimate how long it takes"
)]
#[clap(global_setting(AppSettings::DeriveDisplayOrder))]
#[clap(infer_long_args = true)]
pub struct DecamScript {
    #[clap(flatten)]
    global_opts: GlobalArgs,

    #[clap(flatten)]
    script_args: ScriptArgs,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    /// The verbosity of the program. Increase by specifying multiple times
    /// (e.g. -vv). The default is to print only high-level information.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,

    /// Only verify that arguments were correctly ingested and print out
    /// high-level information; no script is written.
    #[clap(long)]
    dry_run: bool,

    /// Save the script settings into a new TOML file that can be used to
    /// reproduce this run.
    #[clap(long, parse(from_os_str))]
    save_toml: Option<PathBuf>,
}

#[derive(Debug, Default, Args)]
struct ScriptArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    args_file: Option<PathBuf>,

    /// The path to the script to write. Any existing file is overwritten.
    #[clap(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
}

impl DecamScript {
    pub fn run(self) -> Result<(), DecamScriptError> {
        let GlobalArgs {
            verbosity,
            dry_run,
            save_toml,
        } = self.global_opts;
        setup_logging(verbosity).expect("Failed to initialise logging.");

        info!("decam-script {}", env!("CARGO_PKG_VERSION"));
        display_build_info();

        let config = self.script_args.merge()?;
        if let Some(toml) = save_toml {
            save_config(&config, &toml)?;
        }
        run_config(config, dry_run, &mut rand::thread_rng())?;

        info!("decam-script complete.");
        Ok(())
    }
}

impl ScriptArgs {
    /// Read the arguments file (if there is one) and override its settings
    /// with any CLI arguments. Without an arguments file, the default
    /// settings are used.
    ///
    /// This function should only ever merge arguments, and not try to make
    /// sense of them.
    fn merge(self) -> Result<ScriptConfig, DecamScriptError> {
        debug!("Merging command-line arguments with the argument file");

        let ScriptArgs { args_file, output } = self;
        let file_config = match args_file {
            Some(arg_file) => read_arg_file(&arg_file)?,
            None => ScriptConfig::default(),
        };

        Ok(ScriptConfig {
            output: output.unwrap_or(file_config.output),
            ..file_config
        })
    }
}

fn read_arg_file(arg_file: &Path) -> Result<ScriptConfig, DecamScriptError> {
    debug!("Attempting to parse argument file {}", arg_file.display());

    let arg_file_type = arg_file
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .and_then(|e| ArgFileTypes::from_str(&e).ok());
    let arg_file_type = match arg_file_type {
        Some(t) => t,
        None => {
            return Err(DecamScriptError::ArgFile(format!(
                "Argument file '{}' doesn't have a recognised file extension! Valid extensions are: {}",
                arg_file.display(),
                *ARG_FILE_TYPES_COMMA_SEPARATED
            )))
        }
    };

    let mut contents = String::new();
    let mut fh = File::open(arg_file)?;
    fh.read_to_string(&mut contents)?;

    match arg_file_type {
        ArgFileTypes::Toml => {
            debug!("Parsing toml file...");
            toml::from_str(&contents).map_err(|err| {
                DecamScriptError::ArgFile(format!(
                    "Couldn't decode toml structure from {}:\n{err}",
                    arg_file.display()
                ))
            })
        }
        ArgFileTypes::Json => {
            debug!("Parsing json file...");
            serde_json::from_str(&contents).map_err(|err| {
                DecamScriptError::ArgFile(format!(
                    "Couldn't decode json structure from {}:\n{err}",
                    arg_file.display()
                ))
            })
        }
    }
}

fn save_config(config: &ScriptConfig, toml: &Path) -> Result<(), DecamScriptError> {
    debug!("Saving script settings to {}", toml.display());
    let toml_str = toml::to_string(config)
        .map_err(|e| DecamScriptError::Generic(format!("toml serialisation error: {e}")))?;
    let mut f = BufWriter::new(File::create(toml)?);
    f.write_all(toml_str.as_bytes())?;
    f.flush()?;
    Ok(())
}

/// Make sense of the settings, report them, and (unless this is a dry run)
/// write the script. The summary of the written script is returned.
fn run_config<R: Rng>(
    config: ScriptConfig,
    dry_run: bool,
    rng: &mut R,
) -> Result<Option<ScriptSummary>, DecamScriptError> {
    debug!("Converting arguments into parameters");
    trace!("{:#?}", config);
    let params = config.parse()?;
    display_params(&params);
    display_warnings();

    if dry_run {
        info!("Dry run -- exiting now.");
        return Ok(None);
    }

    let summary = params.run(rng)?;
    info!(
        "Wrote {} exposures to {}",
        summary.num_exposures,
        params.output.display()
    );
    Ok(Some(summary))
}

fn display_params(params: &ScriptParams) {
    let mut printer = InfoPrinter::new(format!("Observing script for {}", params.object).into());
    printer.push_line(format!("Output: {}", params.output.display()).into());
    for (i, batch) in params.batches.iter().enumerate() {
        printer.push_block(vec![
            format!(
                "Batch {}: {} x {}s exposures in {}",
                i + 1,
                batch.num_exposures(),
                batch.exp_time(),
                batch.filter()
            )
            .into(),
            format!(
                "Centre: {} ({}°, {}°)",
                batch.centre(),
                batch.centre().ra(),
                batch.centre().dec()
            )
            .into(),
        ]);
    }
    printer.display();

    if params.output.exists() {
        format!("Will overwrite the existing file '{}'", params.output.display()).warn();
    }
}

/// Activate a logger. All log messages are put onto `stdout`. `env_logger`
/// automatically only uses colours and fancy symbols if we're on a tty (e.g. a
/// terminal); piped output will be formatted sensibly. Source code lines are
/// displayed in log messages when verbosity >= 3.
fn setup_logging(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stdout);
    builder.format_target(false);
    match verbosity {
        0 => builder.filter_level(log::LevelFilter::Info),
        1 => builder.filter_level(log::LevelFilter::Debug),
        2 => builder.filter_level(log::LevelFilter::Trace),
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
            builder.format(|buf, record| {
                let timestamp = buf.timestamp();
                let level = record.level();
                let target = record.target();
                let line = record.line().unwrap_or(0);
                let message = record.args();

                writeln!(buf, "[{timestamp} {level} {target}:{line}] {message}")
            })
        }
    };
    builder.try_init()
}

/// Write many info-level log lines of how this executable was compiled.
fn display_build_info() {
    let dirty = match GIT_DIRTY {
        Some(true) => " (dirty)",
        _ => "",
    };
    match GIT_COMMIT_HASH_SHORT {
        Some(hash) => {
            info!("Compiled on git commit hash: {hash}{dirty}");
        }
        None => info!("Compiled on git commit hash: <no git info>"),
    }
    if let Some(hr) = GIT_HEAD_REF {
        info!("            git head ref: {}", hr);
    }
    info!("            {}", BUILT_TIME_UTC);
    info!("         with compiler {}", RUSTC_VERSION);
    info!("");
}

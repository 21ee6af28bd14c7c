// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests to ensure there is no stderr output for successful commands.

use tempfile::TempDir;

use crate::{decam_script, get_cmd_output};

#[test]
fn test_default_script_no_stderr() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let script = tmp_dir.path().join("script.json");

    let cmd = decam_script()
        .args(["--output", &format!("{}", script.display())])
        .ok();
    assert!(
        cmd.is_ok(),
        "decam-script failed with default settings: {}",
        cmd.err().unwrap()
    );
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}

#[test]
fn test_dry_run_no_stderr() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let script = tmp_dir.path().join("script.json");

    let cmd = decam_script()
        .args(["--output", &format!("{}", script.display()), "--dry-run"])
        .ok();
    assert!(cmd.is_ok(), "dry run failed: {}", cmd.err().unwrap());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
    assert!(!script.exists());
}

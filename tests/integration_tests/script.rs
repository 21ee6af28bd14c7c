// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests of scripts written by the binary.

use std::fs::File;

use indoc::formatdoc;
use tempfile::TempDir;

use decam_script::Exposure;

use crate::{decam_script, get_cmd_output};

#[test]
fn test_default_script() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let script = tmp_dir.path().join("script.json");

    let cmd = decam_script()
        .args(["--output", &format!("{}", script.display())])
        .ok();
    let (stdout, _) = get_cmd_output(cmd);
    assert!(
        stdout.contains("Total time of script ~ 1:54:00"),
        "stdout: {stdout}"
    );

    let exposures: Vec<Exposure> = serde_json::from_reader(File::open(&script).unwrap()).unwrap();
    assert_eq!(exposures.len(), 30);
    assert!(exposures
        .iter()
        .all(|e| e.object == "VIK_J2348-3054" && e.filter == "Y" && e.exp_time == 200));
}

#[test]
fn test_script_from_arg_file() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let script = tmp_dir.path().join("script.json");
    let arg_file = tmp_dir.path().join("settings.toml");
    std::fs::write(
        &arg_file,
        formatdoc! {r#"
                output = "{}"
                object = "J0100+2802"

                [[batches]]
                ra = "01:00:13.02"
                dec = "+28:02:25.8"
                filter = "z"
                exp_time = 90
                count = 4

                [[batches]]
                ra = "01:00:13.02"
                dec = "+28:02:25.8"
                filter = "Y"
                exp_time = 120
                count = 2
            "#,
            script.display()
        },
    )
    .unwrap();

    let cmd = decam_script()
        .arg(format!("{}", arg_file.display()))
        .ok();
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
    // 4*90 + 2*120 + 6*28 = 768 seconds
    assert!(
        stdout.contains("Total time of script ~ 0:12:48"),
        "stdout: {stdout}"
    );

    let exposures: Vec<Exposure> = serde_json::from_reader(File::open(&script).unwrap()).unwrap();
    let filters: Vec<&str> = exposures.iter().map(|e| e.filter.as_str()).collect();
    assert_eq!(filters, ["z", "z", "z", "z", "Y", "Y"]);
    assert!(exposures.iter().all(|e| e.object == "J0100+2802"));
    assert!(exposures.iter().all(|e| e.dec.starts_with("+28:")));
}

#[test]
fn test_bad_coordinates_fail() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let script = tmp_dir.path().join("script.json");
    let arg_file = tmp_dir.path().join("settings.json");
    std::fs::write(
        &arg_file,
        r#"{"batches": [{"ra": "23:48", "dec": "-30:54:10.0", "filter": "Y", "exp_time": 200, "count": 30}]}"#,
    )
    .unwrap();

    let cmd = decam_script()
        .args([
            "--output",
            &format!("{}", script.display()),
            &format!("{}", arg_file.display()),
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.starts_with("Error: "), "stderr: {stderr}");
    assert!(stderr.contains("Exposure batch 1"), "stderr: {stderr}");
    assert!(!script.exists());
}

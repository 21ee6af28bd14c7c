// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Write;

use indoc::indoc;
use rand::{rngs::StdRng, SeedableRng};
use tempfile::TempDir;

use super::*;

fn get_batch() -> ExposureBatch {
    ExposureBatch::new("23:48:33.34", "-30:54:10.0", "Y", 200, 30).unwrap()
}

#[test]
fn test_construct_script() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let script = tmp_dir.path().join("script.json");
    let mut rng = StdRng::seed_from_u64(10);

    let summary = construct_script(&script, "VIK_J2348-3054", &[get_batch()], &mut rng).unwrap();
    assert_eq!(summary.num_exposures, 30);
    assert_eq!(summary.total_time, 30 * 200 + 28 * 30);
    assert_eq!(summary.total_time, 6840);
    assert_eq!(format_duration(summary.total_time), "1:54:00");

    let contents = std::fs::read_to_string(&script).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 30);
    for element in array {
        let object = element.as_object().unwrap();
        assert_eq!(object.len(), 6);
        assert_eq!(object["expType"], "object");
        assert_eq!(object["object"], "VIK_J2348-3054");
        assert_eq!(object["filter"], "Y");
        assert_eq!(object["expTime"], 200);
        assert!(object["RA"].is_string());
        assert!(object["dec"].is_string());
    }

    // No trailing comma after the last exposure.
    assert!(contents.trim_end().ends_with("}\n]"), "{contents}");
    assert!(!contents.contains("},\n]"));
    // Two-space indentation.
    assert!(contents.starts_with("[\n  {\n    \"expType\": \"object\",\n"));
}

#[test]
fn test_construct_script_with_many_batches() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let script = tmp_dir.path().join("script.json");
    let mut rng = StdRng::seed_from_u64(11);

    let batches = [
        ExposureBatch::new("23:48:33.34", "-30:54:10.0", "N964", 300, 2).unwrap(),
        ExposureBatch::new("23:48:33.34", "-30:54:10.0", "z", 90, 3).unwrap(),
        ExposureBatch::new("23:48:33.34", "-30:54:10.0", "N964", 300, 1).unwrap(),
    ];
    let summary = construct_script(&script, "target", &batches, &mut rng).unwrap();
    assert_eq!(summary.num_exposures, 6);
    assert_eq!(summary.total_time, 3 * 300 + 3 * 90 + 6 * 28);

    let exposures: Vec<Exposure> =
        serde_json::from_reader(File::open(&script).unwrap()).unwrap();
    let filters: Vec<&str> = exposures.iter().map(|e| e.filter.as_str()).collect();
    assert_eq!(filters, ["N964", "N964", "z", "z", "z", "N964"]);
}

#[test]
fn test_construct_script_overwrites() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let script = tmp_dir.path().join("script.json");
    std::fs::write(&script, "not a script").unwrap();

    let batch = ExposureBatch::new("01:00:00", "+10:00:00", "r", 60, 1).unwrap();
    let summary =
        construct_script(&script, "target", &[batch], &mut StdRng::seed_from_u64(12)).unwrap();
    assert_eq!(summary.num_exposures, 1);
    assert_eq!(summary.total_time, 88);
}

#[test]
fn test_construct_script_with_a_bad_path() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let script = tmp_dir.path().join("doesnt_exist").join("script.json");
    let result = construct_script(&script, "target", &[get_batch()], &mut StdRng::seed_from_u64(13));
    assert!(matches!(result, Err(ScriptWriteError::IO(_))));
}

#[test]
fn test_construct_script_with_a_bad_batch() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let script = tmp_dir.path().join("script.json");
    let batch = ExposureBatch::new("01:00:00", "89:58:00", "r", 60, 1).unwrap();
    let result = construct_script(&script, "target", &[batch], &mut StdRng::seed_from_u64(14));
    assert!(matches!(result, Err(ScriptWriteError::Exposure(_))));
    // Nothing should have been written.
    assert!(!script.exists());
}

#[test]
fn test_calculate_total_time() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let script = tmp_dir.path().join("script.json");
    let mut f = File::create(&script).unwrap();
    // Only the exposure times matter.
    f.write_all(
        indoc! {r#"
        [
          {"expType": "object", "object": "a", "RA": "00:00:00.00", "dec": "+00:00:00.0", "filter": "g", "expTime": 30},
          {"expTime": 100},
          {"expTime": 5}
        ]
        "#}
        .as_bytes(),
    )
    .unwrap();
    drop(f);

    let summary = calculate_total_time(&script).unwrap();
    assert_eq!(summary.num_exposures, 3);
    assert_eq!(summary.total_time, 135 + 3 * 28);
}

#[test]
fn test_calculate_total_time_empty_script() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let script = tmp_dir.path().join("script.json");
    std::fs::write(&script, "[]").unwrap();

    let summary = calculate_total_time(&script).unwrap();
    assert_eq!(summary.num_exposures, 0);
    assert_eq!(summary.total_time, 0);
}

#[test]
fn test_calculate_total_time_corrupt_script() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let script = tmp_dir.path().join("script.json");
    // A trailing comma, as a hand-rolled writer might leave.
    std::fs::write(&script, r#"[ {"expTime": 200}, ]"#).unwrap();

    let result = calculate_total_time(&script);
    assert!(matches!(result, Err(ScriptWriteError::Json(_))));

    let result = calculate_total_time(tmp_dir.path().join("missing.json"));
    assert!(matches!(result, Err(ScriptWriteError::IO(_))));
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00:00");
    assert_eq!(format_duration(59), "0:00:59");
    assert_eq!(format_duration(6840), "1:54:00");
    assert_eq!(format_duration(86399), "23:59:59");
    assert_eq!(format_duration(86400), "1 day, 0:00:00");
    assert_eq!(format_duration(2 * 86400 + 3723), "2 days, 1:02:03");
}

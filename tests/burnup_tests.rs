use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

const DASHBOARD_BURNUP: &str = r#"[
  { "status": "Approved", "projectDay": "2024-05-22T00:00:00Z", "qty": 1 },
  { "status": "New", "projectDay": "2024-05-22T00:00:00Z", "qty": 2 },
  { "status": "InProgress", "projectDay": "2024-05-22T00:00:00Z", "qty": 3 }
]"#;

#[test]
fn burnup_groups_samples_by_status() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("burnup.json");
    input.write_str(DASHBOARD_BURNUP).unwrap();
    let output = temp.child("series.json");

    let mut cmd = assert_cmd::cargo_bin_cmd!("burncharts");
    cmd.args(["burnup", "-i"])
        .arg(input.path())
        .arg("-o")
        .arg(output.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Burnup series written to"));

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(output.path()).unwrap()).unwrap();
    assert_eq!(
        written,
        serde_json::json!([
            { "status": "Approved", "projectDay": "2024-05-22T00:00:00Z", "qty": 1 },
            { "status": "InProgress", "projectDay": "2024-05-22T00:00:00Z", "qty": 3 },
            { "status": "New", "projectDay": "2024-05-22T00:00:00Z", "qty": 2 }
        ])
    );
}

#[test]
fn burnup_of_an_empty_history_is_empty() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("burnup.yaml");
    input.write_str("[]\n").unwrap();
    let output = temp.child("series.json");

    let mut cmd = assert_cmd::cargo_bin_cmd!("burncharts");
    cmd.args(["burnup", "-i"])
        .arg(input.path())
        .arg("-o")
        .arg(output.path());

    cmd.assert().success();
    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(output.path()).unwrap()).unwrap();
    assert_eq!(written, serde_json::json!([]));
}

#[test]
fn burnup_rejects_duplicates_unless_lenient() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("burnup.yaml");
    input
        .write_str(
            "- status: New\n  projectDay: 2024-05-22\n  qty: 2\n- status: New\n  projectDay: 2024-05-22T18:00:00Z\n  qty: 5\n",
        )
        .unwrap();
    let output = temp.child("series.yaml");

    let mut strict = assert_cmd::cargo_bin_cmd!("burncharts");
    strict
        .args(["burnup", "-i"])
        .arg(input.path())
        .arg("-o")
        .arg(output.path());
    strict
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate sample for key New@2024-05-22"));

    let mut lenient = assert_cmd::cargo_bin_cmd!("burncharts");
    lenient
        .args(["burnup", "--lenient", "-i"])
        .arg(input.path())
        .arg("-o")
        .arg(output.path());
    lenient.assert().success();

    let written = fs::read_to_string(output.path()).unwrap();
    assert!(written.contains("qty: 5"));
    assert!(!written.contains("qty: 2"));
}

#[test]
fn burnup_writes_a_png_when_asked() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("burnup.json");
    input.write_str(DASHBOARD_BURNUP).unwrap();
    let output = temp.child("series.json");
    let plot = temp.child("burnup.png");

    let mut cmd = assert_cmd::cargo_bin_cmd!("burncharts");
    cmd.args(["burnup", "-i"])
        .arg(input.path())
        .arg("-o")
        .arg(output.path())
        .arg("-p")
        .arg(plot.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Burnup chart written to"));
    assert!(fs::metadata(plot.path()).unwrap().len() > 0);
}

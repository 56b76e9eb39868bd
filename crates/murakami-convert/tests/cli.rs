use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const NDT_RESULT: &str = r#"{"probe_asn":"AS3320","probe_cc":"DE","software_name":"measurement_kit","test_runtime":21.7,"test_start_time":"2019-06-02 08:30:00","test_keys":{"server_address":"ndt.example.org","advanced":{"avg_rtt":18.4},"simple":{"download":48211.3,"ping":11.2,"upload":9821.4}}}"#;

fn convert() -> Command {
    let mut cmd = Command::cargo_bin("murakami-convert").expect("binary builds");
    cmd.env_remove("RUST_LOG")
        .env_remove("MURAKAMI_CONVERT_TEST")
        .env_remove("MURAKAMI_CONVERT_FORMAT")
        .env_remove("MURAKAMI_CONVERT_OUTPUT")
        .env_remove("MURAKAMI_CONVERT_PATTERN")
        .env_remove("MURAKAMI_CONVERT_LOGLEVEL");
    cmd
}

#[test]
fn writes_table_and_exits_zero() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("us-wired.jsonl"), NDT_RESULT).expect("write input");
    let output = dir.path().join("ndt.csv");

    convert()
        .current_dir(dir.path())
        .args(["-t", "ndt_legacy", "-p", "%l-%n.jsonl", "-o"])
        .arg(&output)
        .arg("*.jsonl")
        .assert()
        .success();

    let written = fs::read_to_string(&output).expect("output written");
    let mut lines = written.lines();
    let header = lines.next().expect("header row");
    assert!(header.starts_with("probe_asn,probe_cc,software_name,server_address,avg_rtt"));
    assert!(header.ends_with("test_start_time,location,network_type"));
    let row = lines.next().expect("data row");
    assert!(row.starts_with("AS3320,DE,measurement_kit,ndt.example.org,18.4,"));
    assert!(row.ends_with(",us,wired"));
    assert_eq!(lines.next(), None);
}

#[test]
fn empty_match_exits_one_without_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("out.csv");

    convert()
        .current_dir(dir.path())
        .args(["-t", "speedtest", "-o"])
        .arg(&output)
        .arg("missing/*.jsonl")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No valid files found"));

    assert!(!output.exists());
}

#[test]
fn options_fall_back_to_environment() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("result.jsonl"), "{\"type\":\"result\",\"isp\":\"Example\"}\n")
        .expect("write input");
    let output = dir.path().join("speedtest.csv");

    convert()
        .current_dir(dir.path())
        .env("MURAKAMI_CONVERT_TEST", "speedtest")
        .env("MURAKAMI_CONVERT_OUTPUT", &output)
        .arg("result.jsonl")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).expect("output written"),
        "type,isp\nresult,Example\n"
    );
}

#[test]
fn records_with_no_schema_match_exit_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("x.jsonl"), "{\"probe_cc\":\"US\"}\n").expect("write input");

    convert()
        .current_dir(dir.path())
        .args(["-t", "dash_legacy", "-o", "out.csv", "x.jsonl"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No valid records found"));

    assert!(!dir.path().join("out.csv").exists());
}

use std::path::PathBuf;

use serde_json::json;

use crate::errors::ImportError;
use crate::formats::{DashLegacyImporter, NdtLegacyImporter, SpeedtestImporter};
use crate::jsonl::read_first_value;
use crate::model::Scalar;
use crate::registry::{Importer, ImporterRegistry, TestKind};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

#[test]
fn speedtest_flattens_first_line_only() {
    let record = SpeedtestImporter
        .import(&fixture("speedtest.jsonl"))
        .expect("speedtest import failed")
        .expect("speedtest record missing");

    assert_eq!(record.get("type"), Some(&Scalar::from("result")));
    assert_eq!(record.get("ping_latency"), Some(&Scalar::from(json!(9.891))));
    assert_eq!(record.get("download_bandwidth"), Some(&Scalar::from(json!(11814290))));
    assert_eq!(record.get("interface_isVpn"), Some(&Scalar::Bool(false)));
    assert_eq!(record.get("server_location"), Some(&Scalar::from("Seattle, WA")));
    assert_eq!(record.get("timestamp"), Some(&Scalar::from("2020-03-18T14:02:12Z")));
    assert!(!record.contains("ping"));
    assert_eq!(record.len(), 26);
}

#[test]
fn speedtest_empty_file_has_no_record() {
    let record = SpeedtestImporter
        .import(&fixture("empty.jsonl"))
        .expect("empty file should not fail");
    assert!(record.is_none());
}

#[test]
fn speedtest_rejects_non_object_record() {
    let err = SpeedtestImporter
        .import(&fixture("array.jsonl"))
        .expect_err("array record must fail");
    assert!(matches!(err, ImportError::NotAnObject { importer: "speedtest", .. }));
}

#[test]
fn dash_legacy_extracts_fixed_fields() {
    let record = DashLegacyImporter
        .import(&fixture("dash_legacy.jsonl"))
        .expect("dash import failed")
        .expect("dash record missing");

    let columns: Vec<&str> = record.keys().map(String::as_str).collect();
    let expected: Vec<&str> = DashLegacyImporter::columns().collect();
    assert_eq!(columns, expected);
    assert_eq!(record.get("probe_asn"), Some(&Scalar::from("AS7922")));
    assert_eq!(record.get("median_bitrate"), Some(&Scalar::from(json!(41823))));
    assert_eq!(record.get("min_playout_delay"), Some(&Scalar::from(json!(0.41))));
    assert_eq!(record.get("test_name"), Some(&Scalar::from("dash")));
    assert!(!record.contains("server_address"));
}

#[test]
fn dash_legacy_without_test_name_has_no_record() {
    let record = DashLegacyImporter
        .import(&fixture("dash_legacy_missing_name.jsonl"))
        .expect("schema mismatch is not an error");
    assert!(record.is_none());
}

#[test]
fn legacy_empty_file_yields_empty_record() {
    for importer in [&DashLegacyImporter as &dyn Importer, &NdtLegacyImporter] {
        let record = importer
            .import(&fixture("empty.jsonl"))
            .expect("empty file should not fail")
            .expect("empty file should yield an empty record");
        assert!(record.is_empty(), "{} produced fields", importer.name());
    }
}

#[test]
fn ndt_legacy_extracts_fixed_fields() {
    let record = NdtLegacyImporter
        .import(&fixture("ndt_legacy.jsonl"))
        .expect("ndt import failed")
        .expect("ndt record missing");

    let columns: Vec<&str> = record.keys().map(String::as_str).collect();
    let expected: Vec<&str> = NdtLegacyImporter::columns().collect();
    assert_eq!(columns, expected);
    assert_eq!(record.get("server_address"), Some(&Scalar::from("ndt.example.org")));
    assert_eq!(record.get("avg_rtt"), Some(&Scalar::from(json!(18.4))));
    assert_eq!(record.get("upload"), Some(&Scalar::from(json!(9821.4))));
    assert_eq!(record.get("software_name"), Some(&Scalar::from("measurement_kit")));
}

#[test]
fn ndt_legacy_missing_optional_fields_are_null() {
    // DASH results carry test_keys but no advanced block.
    let record = NdtLegacyImporter
        .import(&fixture("dash_legacy.jsonl"))
        .expect("ndt import failed")
        .expect("test_keys present");

    assert_eq!(record.get("avg_rtt"), Some(&Scalar::Null));
    assert_eq!(record.get("server_address"), Some(&Scalar::from("neubot.example.org")));
    assert_eq!(record.len(), NdtLegacyImporter::columns().count());
}

#[test]
fn legacy_rejects_non_object_as_mismatch() {
    let record = NdtLegacyImporter
        .import(&fixture("array.jsonl"))
        .expect("non-object is a schema mismatch");
    assert!(record.is_none());
}

#[test]
fn malformed_json_is_an_error() {
    for kind in TestKind::ALL {
        let importer = ImporterRegistry::standard()
            .get(kind)
            .expect("standard registry covers every kind");
        let err = importer
            .import(&fixture("malformed.jsonl"))
            .expect_err("malformed JSON must fail");
        assert!(matches!(err, ImportError::Json { line: 1, .. }), "{kind}: {err}");
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let err = read_first_value(&fixture("does_not_exist.jsonl")).expect_err("missing file");
    assert!(matches!(err, ImportError::Io { .. }));
}

#[test]
fn blank_lines_are_skipped() {
    let value = read_first_value(&fixture("dash_legacy.jsonl"))
        .expect("read failed")
        .expect("value present");
    assert_eq!(value["test_name"], json!("dash"));
}

#[test]
fn test_kind_names_round_trip() {
    for kind in TestKind::ALL {
        assert_eq!(kind.as_str().parse::<TestKind>().expect("known name"), kind);
    }
    let err = "ndt7".parse::<TestKind>().expect_err("unknown kind");
    assert_eq!(
        err.to_string(),
        "unknown test kind 'ndt7'; expected one of: speedtest, dash_legacy, ndt_legacy"
    );
}

#[test]
fn standard_registry_names_match_kinds() {
    let registry = ImporterRegistry::standard();
    assert_eq!(registry.kinds().collect::<Vec<_>>(), TestKind::ALL);
    for kind in TestKind::ALL {
        let importer = registry.get(kind).expect("registered");
        assert_eq!(importer.name(), kind.as_str());
    }
}

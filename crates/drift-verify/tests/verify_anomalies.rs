use std::collections::BTreeMap;

use drift_test_utils::{
    baseline_schema, drifted_schema, identity_diff, new_column_anomaly, replacement_diff,
    report_with,
};
use drift_verify::{verify, ExpectedAnomalyInfo, Violation, ViolationKind};
use pretty_assertions::assert_eq;

use drift_schema::{Anomalies, AnomalyInfo, Schema};

fn expectation_for(info: &AnomalyInfo, new_schema: Schema) -> ExpectedAnomalyInfo {
    ExpectedAnomalyInfo {
        expected_info_without_diff: info.without_diff(),
        new_schema,
    }
}

#[test]
fn matching_report_is_clean() {
    let info = new_column_anomaly(replacement_diff(&drifted_schema()));
    let actual = report_with("extra", info.clone());

    let mut expected = BTreeMap::new();
    expected.insert("extra".to_string(), expectation_for(&info, drifted_schema()));

    let report = verify(&actual, &baseline_schema(), &expected).unwrap();
    report.assert_clean();
}

#[test]
fn identity_diff_against_baseline_is_clean() {
    let info = new_column_anomaly(identity_diff(&baseline_schema()));
    let actual = report_with("age", info.clone());

    let mut expected = BTreeMap::new();
    expected.insert("age".to_string(), expectation_for(&info, baseline_schema()));

    verify(&actual, &baseline_schema(), &expected)
        .unwrap()
        .assert_clean();
}

#[test]
fn record_without_diff_skips_schema_check() {
    let info = new_column_anomaly(vec![]);
    let actual = report_with("extra", info.clone());

    let mut expected = BTreeMap::new();
    // new_schema is irrelevant when the record carries no diff
    expected.insert("extra".to_string(), expectation_for(&info, Schema::new()));

    verify(&actual, &baseline_schema(), &expected)
        .unwrap()
        .assert_clean();
}

#[test]
fn missing_anomaly_is_reported_exactly_once() {
    let info = new_column_anomaly(replacement_diff(&drifted_schema()));
    let actual = report_with("a", info.clone());

    let mut expected = BTreeMap::new();
    expected.insert("a".to_string(), expectation_for(&info, drifted_schema()));
    expected.insert("b".to_string(), expectation_for(&info, drifted_schema()));

    let report = verify(&actual, &baseline_schema(), &expected).unwrap();
    assert_eq!(report.len(), 1);
    match &report.violations()[0] {
        Violation::MissingAnomaly { name, .. } => assert_eq!(name, "b"),
        other => panic!("unexpected violation: {other:?}"),
    }
}

#[test]
fn unexpected_anomaly_is_reported_exactly_once() {
    let info = new_column_anomaly(replacement_diff(&drifted_schema()));
    let actual = report_with("a", info.clone()).with_anomaly("c", info.clone());

    let mut expected = BTreeMap::new();
    expected.insert("a".to_string(), expectation_for(&info, drifted_schema()));

    let report = verify(&actual, &baseline_schema(), &expected).unwrap();
    assert_eq!(report.len(), 1);
    match &report.violations()[0] {
        Violation::UnexpectedAnomaly { name, new_schema, .. } => {
            assert_eq!(name, "c");
            // diff was attached, so the implied schema is shown
            assert!(new_schema.is_some());
        }
        other => panic!("unexpected violation: {other:?}"),
    }
    // The rendered diagnostic carries the reconstructed schema; "FLOAT"
    // appears only in the drifted schema's extra feature.
    let rendered = report.to_string();
    assert!(rendered.contains("new schema:"));
    assert!(rendered.contains("FLOAT"));
}

#[test]
fn unexpected_anomaly_without_diff_has_no_new_schema() {
    let info = new_column_anomaly(vec![]);
    let actual = report_with("c", info);

    let report = verify(&actual, &baseline_schema(), &BTreeMap::new()).unwrap();
    assert_eq!(report.len(), 1);
    match &report.violations()[0] {
        Violation::UnexpectedAnomaly { new_schema, .. } => assert!(new_schema.is_none()),
        other => panic!("unexpected violation: {other:?}"),
    }
}

#[test]
fn baseline_mismatch_is_reported() {
    let info = new_column_anomaly(vec![]);
    let actual = Anomalies::new(drifted_schema()).with_anomaly("extra", info.clone());

    let mut expected = BTreeMap::new();
    expected.insert("extra".to_string(), expectation_for(&info, Schema::new()));

    let report = verify(&actual, &baseline_schema(), &expected).unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report.violations()[0].kind(), ViolationKind::BaselineMismatch);
}

#[test]
fn wrong_reconstructed_schema_is_reported() {
    // Diff claims the schema became drifted_schema, expectation says baseline.
    let info = new_column_anomaly(replacement_diff(&drifted_schema()));
    let actual = report_with("extra", info.clone());

    let mut expected = BTreeMap::new();
    expected.insert("extra".to_string(), expectation_for(&info, baseline_schema()));

    let report = verify(&actual, &baseline_schema(), &expected).unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(
        report.violations()[0].kind(),
        ViolationKind::SchemaReconstructionMismatch
    );
}

#[test]
fn field_mismatch_and_schema_mismatch_both_reported() {
    let actual_info = new_column_anomaly(replacement_diff(&drifted_schema()));
    let actual = report_with("extra", actual_info);

    let mut wrong_info = new_column_anomaly(vec![]);
    wrong_info.short_description = "Different summary".to_string();

    let mut expected = BTreeMap::new();
    expected.insert(
        "extra".to_string(),
        ExpectedAnomalyInfo {
            expected_info_without_diff: wrong_info,
            new_schema: baseline_schema(),
        },
    );

    let report = verify(&actual, &baseline_schema(), &expected).unwrap();
    let kinds: Vec<ViolationKind> = report.violations().iter().map(Violation::kind).collect();
    assert_eq!(
        kinds,
        vec![
            ViolationKind::SchemaReconstructionMismatch,
            ViolationKind::RecordFieldMismatch,
        ]
    );
}

#[test]
fn all_violations_surface_in_one_run() {
    // Wrong baseline, one missing expectation, one unexpected record.
    let info = new_column_anomaly(vec![]);
    let actual = Anomalies::new(drifted_schema()).with_anomaly("c", info.clone());

    let mut expected = BTreeMap::new();
    expected.insert("b".to_string(), expectation_for(&info, Schema::new()));

    let report = verify(&actual, &baseline_schema(), &expected).unwrap();
    let kinds: Vec<ViolationKind> = report.violations().iter().map(Violation::kind).collect();
    assert_eq!(
        kinds,
        vec![
            ViolationKind::BaselineMismatch,
            ViolationKind::MissingAnomaly,
            ViolationKind::UnexpectedAnomaly,
        ]
    );
}

#[test]
fn empty_expected_and_empty_report_is_clean() {
    let actual = Anomalies::new(baseline_schema());
    verify(&actual, &baseline_schema(), &BTreeMap::new())
        .unwrap()
        .assert_clean();
}

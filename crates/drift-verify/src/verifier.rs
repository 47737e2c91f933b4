//! Anomaly report verification
//!
//! [`verify`] checks a full [`Anomalies`] report against a map of expected
//! anomalies; [`verify_record`] checks one record. Both aggregate every
//! mismatch into the caller's [`VerificationReport`] rather than stopping at
//! the first.

use std::collections::BTreeMap;

use drift_patch::{reconstruct, DiffRegion};
use drift_schema::{Anomalies, AnomalyInfo, CanonicalText, RecordError, Schema};

use crate::violation::{VerificationReport, Violation};

/// Infrastructure failure during verification
///
/// Distinct from verification mismatches, which are reported as
/// [`Violation`]s: an error here means the canonical serialization primitive
/// itself failed, so no meaningful comparison was possible.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// Canonical serialization or parsing of a record failed
    #[error("record serialization failed: {0}")]
    Record(#[from] RecordError),
}

/// Expectation for one anomaly
///
/// Pairs the record the producer should report (with diff information
/// stripped) with the fully reconstructed schema its diff should imply.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedAnomalyInfo {
    /// Expected record, diff stripped
    pub expected_info_without_diff: AnomalyInfo,
    /// Schema the record's diff must reproduce from the baseline
    pub new_schema: Schema,
}

/// Reconstruct the schema implied by a diff against a baseline
///
/// Replays the regions over the baseline's canonical lines and parses the
/// result back into a [`Schema`].
///
/// # Errors
/// Returns [`VerifyError::Record`] if the baseline fails to serialize or the
/// reconstructed text is not a canonical schema
///
/// # Panics
/// Panics on out-of-range `Hidden` regions, as [`reconstruct`] does
pub fn reconstruct_schema(
    baseline: &Schema,
    regions: &[DiffRegion],
) -> Result<Schema, VerifyError> {
    let lines = reconstructed_lines(baseline, regions)?;
    Ok(Schema::from_canonical_lines(&lines)?)
}

fn reconstructed_lines(
    baseline: &Schema,
    regions: &[DiffRegion],
) -> Result<Vec<String>, VerifyError> {
    Ok(reconstruct(&baseline.canonical_lines()?, regions))
}

/// Verify an anomaly report against expected anomalies
///
/// Checks, collecting every mismatch into the returned report:
/// 1. the report's baseline equals `old_schema`
/// 2. every expected anomaly is present (each present one is checked with
///    [`verify_record`])
/// 3. no unreported anomaly is present beyond the expected set
///
/// # Errors
/// Returns [`VerifyError`] only if canonical serialization itself fails;
/// verification mismatches are returned inside the report
///
/// # Panics
/// Panics on out-of-range `Hidden` regions in any record's diff
pub fn verify(
    actual: &Anomalies,
    old_schema: &Schema,
    expected: &BTreeMap<String, ExpectedAnomalyInfo>,
) -> Result<VerificationReport, VerifyError> {
    let mut report = VerificationReport::new();
    tracing::debug!(
        "verifying {} expected anomalies against {} reported",
        expected.len(),
        actual.anomaly_info.len()
    );

    if !actual.baseline.canonical_eq(old_schema)? {
        report.push(Violation::BaselineMismatch {
            expected: old_schema.canonical_text()?,
            actual: actual.baseline.canonical_text()?,
        });
    }

    for (name, expectation) in expected {
        match actual.anomaly_info.get(name) {
            Some(info) => {
                let label = format!("column: {name}");
                verify_record(info, old_schema, expectation, &label, &mut report)?;
            }
            None => report.push(Violation::MissingAnomaly {
                name: name.clone(),
                actual_report: actual.canonical_text()?,
            }),
        }
    }

    for (name, info) in &actual.anomaly_info {
        if expected.contains_key(name) {
            continue;
        }
        let new_schema = if info.has_diff() {
            Some(match reconstruct_schema(old_schema, &info.diff_regions) {
                Ok(schema) => schema.canonical_text()?,
                Err(e) => format!("<reconstruction failed: {e}>"),
            })
        } else {
            None
        };
        report.push(Violation::UnexpectedAnomaly {
            name: name.clone(),
            info: info.without_diff().canonical_text()?,
            new_schema,
        });
    }

    if !report.is_clean() {
        tracing::warn!("anomaly verification found {} violation(s)", report.len());
    }
    Ok(report)
}

/// Verify a single anomaly record against its expectation
///
/// Runs two independent checks, both recorded even if the first fails:
/// - if the record carries a diff, its replay against `baseline` must
///   reproduce `expectation.new_schema`
/// - the record with diff stripped must equal
///   `expectation.expected_info_without_diff`
///
/// # Errors
/// Returns [`VerifyError`] only if canonical serialization itself fails
///
/// # Panics
/// Panics on out-of-range `Hidden` regions in the record's diff
pub fn verify_record(
    actual: &AnomalyInfo,
    baseline: &Schema,
    expectation: &ExpectedAnomalyInfo,
    label: &str,
    report: &mut VerificationReport,
) -> Result<(), VerifyError> {
    tracing::debug!("checking anomaly record ({label})");
    if actual.has_diff() {
        let lines = reconstructed_lines(baseline, &actual.diff_regions)?;
        match Schema::from_canonical_lines(&lines) {
            Ok(reconstructed) => {
                if !reconstructed.canonical_eq(&expectation.new_schema)? {
                    report.push(Violation::SchemaReconstructionMismatch {
                        label: label.to_string(),
                        expected: expectation.new_schema.canonical_text()?,
                        actual: reconstructed.canonical_text()?,
                    });
                }
            }
            // A reconstruction that does not parse cannot equal any schema;
            // keep the text and parse error for diagnosis.
            Err(e) => report.push(Violation::SchemaReconstructionMismatch {
                label: label.to_string(),
                expected: expectation.new_schema.canonical_text()?,
                actual: format!("<unparseable reconstruction: {e}>\n{}", lines.join("\n")),
            }),
        }
    }

    let stripped = actual.without_diff();
    if !stripped.canonical_eq(&expectation.expected_info_without_diff)? {
        report.push(Violation::RecordFieldMismatch {
            label: label.to_string(),
            expected: expectation.expected_info_without_diff.canonical_text()?,
            actual: stripped.canonical_text()?,
        });
    }
    Ok(())
}

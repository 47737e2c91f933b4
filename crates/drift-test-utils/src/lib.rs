//! Testing utilities for the schema-drift workspace
//!
//! Shared fixtures: schemas, anomaly records, and diff region constructors.

#![allow(missing_docs)]

use drift_patch::{DiffRegion, DiffSequence};
use drift_schema::{
    Anomalies, AnomalyInfo, AnomalyKind, AnomalyReason, CanonicalText, Domain, Feature,
    FeaturePresence, Schema, Severity, ValueType,
};

pub fn lines(xs: &[&str]) -> Vec<String> {
    xs.iter().map(|s| (*s).to_string()).collect()
}

pub fn hidden(left_start: usize, size: usize) -> DiffRegion {
    DiffRegion::Hidden { left_start, size }
}

pub fn added(xs: &[&str]) -> DiffRegion {
    DiffRegion::Added { contents: lines(xs) }
}

pub fn unchanged(xs: &[&str]) -> DiffRegion {
    DiffRegion::Unchanged { contents: lines(xs) }
}

pub fn changed(xs: &[&str]) -> DiffRegion {
    DiffRegion::Changed {
        right_contents: lines(xs),
    }
}

/// Diff that reproduces the schema unchanged
pub fn identity_diff(schema: &Schema) -> DiffSequence {
    vec![hidden(1, schema.canonical_lines().unwrap().len())]
}

/// Diff that replaces the whole baseline with `new_schema`
pub fn replacement_diff(new_schema: &Schema) -> DiffSequence {
    vec![DiffRegion::Changed {
        right_contents: new_schema.canonical_lines().unwrap(),
    }]
}

/// Baseline schema shared by verifier tests: two constrained features
pub fn baseline_schema() -> Schema {
    Schema::new()
        .with_feature(
            Feature::new("age", ValueType::Int)
                .with_presence(FeaturePresence {
                    min_fraction: 1.0,
                    min_count: 1,
                })
                .with_domain(Domain::Ints { min: 0, max: 150 }),
        )
        .with_feature(
            Feature::new("country", ValueType::Bytes)
                .with_domain(Domain::Strings(lines(&["US", "GB", "VN"]))),
        )
}

/// Baseline plus one extra feature, as a new-column drift would produce
pub fn drifted_schema() -> Schema {
    baseline_schema().with_feature(Feature::new("extra", ValueType::Float))
}

/// Anomaly record for a new column, with the given diff attached
pub fn new_column_anomaly(diff: DiffSequence) -> AnomalyInfo {
    AnomalyInfo {
        severity: Severity::Error,
        short_description: "New column".to_string(),
        description: "New column 'extra' found in data".to_string(),
        reasons: vec![AnomalyReason {
            kind: AnomalyKind::SchemaNewColumn,
            short_description: "New column".to_string(),
            description: "New column 'extra' found in data".to_string(),
        }],
        diff_regions: diff,
    }
}

/// Report with a single anomaly record against the standard baseline
pub fn report_with(name: &str, info: AnomalyInfo) -> Anomalies {
    Anomalies::new(baseline_schema()).with_anomaly(name, info)
}

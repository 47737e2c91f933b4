//! Anomaly records
//!
//! Provides [`AnomalyInfo`], one reported schema anomaly, and [`Anomalies`],
//! the full report produced by an upstream anomaly detector. The detector's
//! claim about how the schema changed travels as the [`DiffSequence`]
//! attached to each record; the verifier replays it against the baseline.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use drift_patch::DiffSequence;

use crate::canonical::CanonicalText;
use crate::schema::Schema;

/// Severity of a reported anomaly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Severity not set by the producer
    #[default]
    Unknown,
    /// Non-blocking anomaly
    Warning,
    /// Blocking anomaly
    Error,
}

/// Classification of an anomaly reason
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnomalyKind {
    /// Reason not classified
    UnknownType,
    /// Column appears in data but not in the schema
    SchemaNewColumn,
    /// Column in the schema is absent from the data
    SchemaMissingColumn,
    /// String values outside the declared domain
    EnumTypeUnexpectedStringValues,
    /// Feature present in fewer examples than required
    FeatureTypeLowFractionPresent,
}

/// One reason contributing to an anomaly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyReason {
    /// Reason classification
    pub kind: AnomalyKind,
    /// One-line summary
    pub short_description: String,
    /// Full explanation
    pub description: String,
}

/// One reported anomaly for a single feature
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnomalyInfo {
    /// Severity of the anomaly
    #[serde(default)]
    pub severity: Severity,

    /// One-line summary
    #[serde(default)]
    pub short_description: String,

    /// Full explanation
    #[serde(default)]
    pub description: String,

    /// Individual reasons contributing to the anomaly
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<AnomalyReason>,

    /// Diff describing the schema change this anomaly implies
    ///
    /// Empty means the producer attached no diff to verify.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diff_regions: DiffSequence,
}

impl AnomalyInfo {
    /// Whether this record carries a diff to verify
    #[inline]
    #[must_use]
    pub fn has_diff(&self) -> bool {
        !self.diff_regions.is_empty()
    }

    /// Copy of this record with the diff stripped
    ///
    /// Used to compare the descriptive fields independently of the diff.
    #[inline]
    #[must_use]
    pub fn without_diff(&self) -> Self {
        let mut stripped = self.clone();
        stripped.diff_regions.clear();
        stripped
    }
}

impl CanonicalText for AnomalyInfo {}

/// Full anomaly report: baseline schema plus per-feature anomalies
///
/// The map preserves producer order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Anomalies {
    /// Schema the anomalies were computed against
    #[serde(default)]
    pub baseline: Schema,

    /// Reported anomalies, keyed by feature name
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub anomaly_info: IndexMap<String, AnomalyInfo>,
}

impl Anomalies {
    /// Create an empty report for a baseline schema
    #[inline]
    #[must_use]
    pub fn new(baseline: Schema) -> Self {
        Self {
            baseline,
            anomaly_info: IndexMap::new(),
        }
    }

    /// Add an anomaly record (builder style)
    #[inline]
    #[must_use]
    pub fn with_anomaly(mut self, name: impl Into<String>, info: AnomalyInfo) -> Self {
        self.anomaly_info.insert(name.into(), info);
        self
    }
}

impl CanonicalText for Anomalies {}

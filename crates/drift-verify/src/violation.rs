//! Verification violations and their aggregate report
//!
//! Each violation kind is a distinct, labeled failure carrying the expected
//! and actual canonical forms, so a mismatch can be diagnosed without
//! rerunning the verification.

use std::fmt::{self, Display, Formatter};

/// One verification failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// Report's baseline schema differs from the caller's baseline
    #[error("baseline schema mismatch:\nexpected:\n{expected}\nactual:\n{actual}")]
    BaselineMismatch {
        /// Canonical text of the caller's baseline
        expected: String,
        /// Canonical text of the report's baseline
        actual: String,
    },

    /// Expected anomaly absent from the report
    #[error("expected anomaly for feature '{name}' not found in report:\n{actual_report}")]
    MissingAnomaly {
        /// Feature name of the missing anomaly
        name: String,
        /// Canonical text of the full actual report
        actual_report: String,
    },

    /// Reported anomaly that no expectation covers
    #[error("unexpected anomaly '{name}':\n{info}{}", rendered_new_schema(.new_schema))]
    UnexpectedAnomaly {
        /// Feature name of the unexpected anomaly
        name: String,
        /// Canonical text of the record, diff stripped
        info: String,
        /// New schema implied by the record's diff, when one is attached
        new_schema: Option<String>,
    },

    /// Diff replay did not reproduce the expected new schema
    #[error("reconstructed schema mismatch ({label}):\nexpected:\n{expected}\nactual:\n{actual}")]
    SchemaReconstructionMismatch {
        /// Diagnostic label identifying the record
        label: String,
        /// Canonical text of the expected new schema
        expected: String,
        /// Canonical text of the reconstructed schema, or the parse failure
        actual: String,
    },

    /// Record fields (diff stripped) differ from the expectation
    #[error("anomaly record mismatch ({label}):\nexpected:\n{expected}\nactual:\n{actual}")]
    RecordFieldMismatch {
        /// Diagnostic label identifying the record
        label: String,
        /// Canonical text of the expected record
        expected: String,
        /// Canonical text of the actual record, diff stripped
        actual: String,
    },
}

/// Append the diff-implied schema to the unexpected-anomaly message when
/// the record carried a diff
fn rendered_new_schema(new_schema: &Option<String>) -> String {
    new_schema
        .as_ref()
        .map(|schema| format!("\nnew schema:\n{schema}"))
        .unwrap_or_default()
}

impl Violation {
    /// Classification of this violation
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ViolationKind {
        match self {
            Self::BaselineMismatch { .. } => ViolationKind::BaselineMismatch,
            Self::MissingAnomaly { .. } => ViolationKind::MissingAnomaly,
            Self::UnexpectedAnomaly { .. } => ViolationKind::UnexpectedAnomaly,
            Self::SchemaReconstructionMismatch { .. } => {
                ViolationKind::SchemaReconstructionMismatch
            }
            Self::RecordFieldMismatch { .. } => ViolationKind::RecordFieldMismatch,
        }
    }
}

/// Kinds of verification failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// Report baseline differs from the caller's baseline
    BaselineMismatch,
    /// Expected anomaly not reported
    MissingAnomaly,
    /// Reported anomaly not expected
    UnexpectedAnomaly,
    /// Diff replay did not reproduce the expected schema
    SchemaReconstructionMismatch,
    /// Record fields differ from the expectation
    RecordFieldMismatch,
}

/// Aggregate of all violations found in one verification run
///
/// Verification never stops at the first failure; the report carries every
/// violation in discovery order.
#[derive(Debug, Clone, Default)]
pub struct VerificationReport {
    violations: Vec<Violation>,
}

impl VerificationReport {
    /// Create an empty report
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation
    #[inline]
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Whether the run found no violations
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Whether the report is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// All violations in discovery order
    #[inline]
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consume the report, yielding its violations
    #[inline]
    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Panic with the full report unless it is clean
    ///
    /// Assertion surface for test harnesses.
    ///
    /// # Panics
    /// Panics if any violation was recorded
    #[track_caller]
    pub fn assert_clean(&self) {
        assert!(self.is_clean(), "verification failed:\n{self}");
    }
}

impl Display for VerificationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return write!(f, "no violations");
        }
        writeln!(f, "{} violation(s):", self.len())?;
        for (i, violation) in self.violations.iter().enumerate() {
            writeln!(f, "{}. {violation}", i + 1)?;
        }
        Ok(())
    }
}

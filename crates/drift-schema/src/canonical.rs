//! Canonical text serialization and structural equality
//!
//! Two records are structurally equal iff their canonical textual
//! serializations are equal. The canonical form is pretty-printed JSON with
//! the field order fixed by the type definitions, so it is deterministic and
//! line-oriented; diff regions address exactly these lines.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Errors from the canonical serialization primitive
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// Canonical serialization failed
    #[error("canonical serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Canonical text did not parse back into the record type
    #[error("canonical parse failed: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Capability for canonical-text serialization and structural equality
///
/// Implemented by the structured record types (schemas, anomaly records);
/// consumers compare records through this trait instead of walking fields.
pub trait CanonicalText: Serialize {
    /// Canonical textual serialization of this record
    ///
    /// # Errors
    /// Returns [`RecordError::Serialize`] if serialization fails
    fn canonical_text(&self) -> Result<String, RecordError> {
        serde_json::to_string_pretty(self).map_err(RecordError::Serialize)
    }

    /// Canonical text split into lines
    ///
    /// # Errors
    /// Returns [`RecordError::Serialize`] if serialization fails
    fn canonical_lines(&self) -> Result<Vec<String>, RecordError> {
        Ok(self.canonical_text()?.lines().map(String::from).collect())
    }

    /// Structural equality: canonical texts compare equal
    ///
    /// # Errors
    /// Returns [`RecordError::Serialize`] if either side fails to serialize
    fn canonical_eq(&self, other: &Self) -> Result<bool, RecordError> {
        Ok(self.canonical_text()? == other.canonical_text()?)
    }
}

/// Parse a record back from its canonical text
///
/// # Errors
/// Returns [`RecordError::Parse`] if the text is not a canonical
/// serialization of `T`
pub(crate) fn from_canonical_text<T: DeserializeOwned>(text: &str) -> Result<T, RecordError> {
    serde_json::from_str(text).map_err(RecordError::Parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Feature, Schema, ValueType};

    fn sample() -> Schema {
        Schema::new().with_feature(Feature::new("age", ValueType::Int))
    }

    #[test]
    fn canonical_eq_is_reflexive() {
        let schema = sample();
        assert!(schema.canonical_eq(&schema).unwrap());
    }

    #[test]
    fn canonical_eq_detects_difference() {
        let a = sample();
        let b = Schema::new().with_feature(Feature::new("age", ValueType::Float));
        assert!(!a.canonical_eq(&b).unwrap());
    }

    #[test]
    fn canonical_text_is_deterministic() {
        let a = sample();
        assert_eq!(a.canonical_text().unwrap(), sample().canonical_text().unwrap());
    }

    #[test]
    fn canonical_lines_match_text() {
        let schema = sample();
        let text = schema.canonical_text().unwrap();
        let lines = schema.canonical_lines().unwrap();
        assert_eq!(text.lines().count(), lines.len());
        assert!(lines.len() > 1);
    }
}

//! Dataset schema records
//!
//! Provides [`Schema`], the structured record whose drift the verifier
//! checks. The shape is deliberately small: named features with a value
//! type and optional count, presence and domain constraints.

use serde::{Deserialize, Serialize};

use crate::canonical::{from_canonical_text, CanonicalText, RecordError};

/// Dataset schema: an ordered list of feature constraints
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    /// Features in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<Feature>,
}

impl Schema {
    /// Create an empty schema
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a feature (builder style)
    #[inline]
    #[must_use]
    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    /// Look up a feature by name
    #[inline]
    #[must_use]
    pub fn feature(&self, name: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.name == name)
    }

    /// Parse a schema from its canonical text form
    ///
    /// This is how a diff-reconstructed document is turned back into a
    /// structured schema.
    ///
    /// # Errors
    /// Returns [`RecordError::Parse`] if the text is not a canonical schema
    /// serialization
    pub fn from_canonical_text(text: &str) -> Result<Self, RecordError> {
        from_canonical_text(text)
    }

    /// Parse a schema from canonical lines
    ///
    /// # Errors
    /// Returns [`RecordError::Parse`] if the joined lines are not a canonical
    /// schema serialization
    pub fn from_canonical_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, RecordError> {
        let text: Vec<&str> = lines.iter().map(AsRef::as_ref).collect();
        Self::from_canonical_text(&text.join("\n"))
    }
}

impl CanonicalText for Schema {}

/// One feature constraint within a [`Schema`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Feature name, unique within the schema
    pub name: String,

    /// Expected value type
    pub value_type: ValueType,

    /// Expected number of values per example
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_count: Option<ValueCount>,

    /// Required presence across examples
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence: Option<FeaturePresence>,

    /// Constraint on the feature's value domain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
}

impl Feature {
    /// Create a feature with only a name and value type
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            value_count: None,
            presence: None,
            domain: None,
        }
    }

    /// Set the value count constraint
    #[inline]
    #[must_use]
    pub fn with_value_count(mut self, count: ValueCount) -> Self {
        self.value_count = Some(count);
        self
    }

    /// Set the presence constraint
    #[inline]
    #[must_use]
    pub fn with_presence(mut self, presence: FeaturePresence) -> Self {
        self.presence = Some(presence);
        self
    }

    /// Set the domain constraint
    #[inline]
    #[must_use]
    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = Some(domain);
        self
    }
}

/// Value type of a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValueType {
    /// Integer values
    Int,
    /// Floating-point values
    Float,
    /// Byte-string values
    Bytes,
}

/// Expected number of values per example
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCount {
    /// Minimum value count
    pub min: u64,
    /// Maximum value count, unbounded when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u64>,
}

/// Required presence of a feature across examples
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeaturePresence {
    /// Minimum fraction of examples containing the feature
    pub min_fraction: f64,
    /// Minimum absolute number of examples containing the feature
    pub min_count: u64,
}

/// Constraint on a feature's value domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// Permitted string values
    Strings(Vec<String>),
    /// Permitted integer range (inclusive)
    Ints {
        /// Lower bound
        min: i64,
        /// Upper bound
        max: i64,
    },
}

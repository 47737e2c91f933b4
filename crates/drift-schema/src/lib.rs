//! Schema and anomaly data model
//!
//! Structured records consumed by the drift verifier:
//!
//! - [`Schema`]: the dataset schema under validation (features, types,
//!   presence and domain constraints)
//! - [`AnomalyInfo`]: one reported schema anomaly, carrying the diff regions
//!   that describe how the schema changed
//! - [`Anomalies`]: a full anomaly report, a baseline schema plus one
//!   [`AnomalyInfo`] per affected feature
//! - [`CanonicalText`]: structural equality via canonical text serialization;
//!   the canonical line form is also what diff regions address
//!
//! Records are plain data: constructed by the caller, never mutated here.

#![warn(unreachable_pub)]

mod anomaly;
mod canonical;
mod schema;

pub use anomaly::{Anomalies, AnomalyInfo, AnomalyKind, AnomalyReason, Severity};
pub use canonical::{CanonicalText, RecordError};
pub use schema::{Domain, Feature, FeaturePresence, Schema, ValueCount, ValueType};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

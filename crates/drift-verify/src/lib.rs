//! Anomaly report verification
//!
//! Checks an [`Anomalies`](drift_schema::Anomalies) report against a map of
//! expected anomalies:
//!
//! - the report's baseline must match the caller's baseline schema
//! - every expected anomaly must be present, and no unexpected one may be
//! - each record's attached diff, replayed against the baseline, must
//!   reproduce the expected new schema
//! - each record's descriptive fields (diff stripped) must match
//!
//! This is a test-assertion component: [`verify`] collects every violation
//! into a [`VerificationReport`] instead of stopping at the first, so one
//! run surfaces all discrepancies.

#![warn(unreachable_pub)]

mod verifier;
mod violation;

pub use verifier::{reconstruct_schema, verify, verify_record, ExpectedAnomalyInfo, VerifyError};
pub use violation::{VerificationReport, Violation, ViolationKind};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

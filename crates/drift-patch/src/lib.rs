//! Diff-region patch reconstruction
//!
//! Replays an ordered list of [`DiffRegion`]s against a baseline line
//! sequence to produce the patched line sequence. This is the inverse of a
//! diff: the regions describe the new document either literally or by
//! back-reference into the baseline, and [`reconstruct()`] emits them in
//! order.
//!
//! # Core Concepts
//!
//! - [`DiffRegion`]: one span of the diff (literal content, a removal, or a
//!   back-reference into the baseline)
//! - [`DiffSequence`]: ordered regions, replayed literally and independently
//! - [`reconstruct()`]: pure replay of a [`DiffSequence`] over a baseline
//!
//! Regions are not validated for coverage or overlap: a sequence that skips
//! or repeats baseline lines is replayed exactly as written. Malformed
//! back-references (out-of-range [`DiffRegion::Hidden`] bounds) are treated
//! as data-integrity bugs in the producer and abort with a panic.

#![warn(unreachable_pub)]

mod reconstruct;
mod region;

pub use reconstruct::reconstruct;
pub use region::{DiffRegion, DiffSequence};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

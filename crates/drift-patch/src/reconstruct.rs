//! Replay of diff regions against a baseline
//!
//! [`reconstruct`] is pure: the same baseline and regions always yield the
//! same output, and callers may invoke it concurrently.

use crate::region::DiffRegion;

/// Reconstruct the patched line sequence from a baseline and diff regions
///
/// Emits each region in order: `Unchanged` and `Added` contents verbatim,
/// `Removed` nothing, `Changed` its right-side contents, and `Hidden` the
/// baseline slice `[left_start - 1, left_start - 1 + size)`.
///
/// Regions are replayed literally and independently; no coverage or overlap
/// validation is applied.
///
/// # Panics
/// Panics if a `Hidden` region references lines outside the baseline
/// (`left_start < 1`, `left_start > len + 1`, or
/// `left_start + size > len + 1`). Out-of-range back-references indicate a
/// malformed diff from the upstream producer, not a recoverable condition.
#[must_use]
pub fn reconstruct<S: AsRef<str>>(baseline: &[S], regions: &[DiffRegion]) -> Vec<String> {
    let mut result = Vec::with_capacity(regions.iter().map(DiffRegion::emitted_len).sum());
    for region in regions {
        emit_region(baseline, region, &mut result);
    }
    result
}

/// Emit one region into the output buffer
fn emit_region<S: AsRef<str>>(baseline: &[S], region: &DiffRegion, out: &mut Vec<String>) {
    match region {
        DiffRegion::Unchanged { contents } | DiffRegion::Added { contents } => {
            out.extend(contents.iter().cloned());
        }
        DiffRegion::Removed => {}
        DiffRegion::Changed { right_contents } => {
            out.extend(right_contents.iter().cloned());
        }
        DiffRegion::Hidden { left_start, size } => {
            let len = baseline.len();
            assert!(
                *left_start >= 1,
                "hidden region out of range: left_start {left_start} must be >= 1"
            );
            assert!(
                *left_start <= len + 1,
                "hidden region out of range: left_start {left_start} exceeds baseline \
                 length {len} + 1"
            );
            assert!(
                left_start.checked_add(*size).is_some_and(|end| end <= len + 1),
                "hidden region out of range: left_start {left_start} + size {size} exceeds \
                 baseline length {len} + 1"
            );
            let begin = left_start - 1;
            let end = begin + size;
            out.extend(baseline[begin..end].iter().map(|s| s.as_ref().to_string()));
        }
    }
}

//! Diff region variants
//!
//! Provides [`DiffRegion`], one span of a line-level diff between a baseline
//! document and its patched successor.

use serde::{Deserialize, Serialize};

/// One region of a line-level diff
///
/// Exactly one variant describes each region; exhaustive matching makes an
/// unhandled variant a compile error. On the wire the enum is externally
/// tagged, so an unrecognized tag fails deserialization instead of being
/// silently skipped.
///
/// `Hidden` is the only variant that reads the baseline: it emits `size`
/// consecutive baseline lines starting at the 1-based index `left_start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffRegion {
    /// Content present on both sides, emitted verbatim
    Unchanged {
        /// Literal lines to emit
        contents: Vec<String>,
    },

    /// Content only on the new side, emitted verbatim
    Added {
        /// Literal lines to emit
        contents: Vec<String>,
    },

    /// Baseline content dropped by the diff; emits nothing
    Removed,

    /// Content rewritten by the diff; only the new side is kept
    Changed {
        /// Replacement lines to emit
        right_contents: Vec<String>,
    },

    /// Back-reference into the baseline
    ///
    /// # Invariants
    /// - `left_start >= 1` (1-based)
    /// - `left_start <= baseline length + 1` (an empty region may start one
    ///   past the end)
    /// - `left_start + size <= baseline length + 1`
    Hidden {
        /// 1-based index of the first referenced baseline line
        left_start: usize,
        /// Number of consecutive baseline lines to emit
        size: usize,
    },
}

impl DiffRegion {
    /// Number of lines this region emits
    #[inline]
    #[must_use]
    pub fn emitted_len(&self) -> usize {
        match self {
            Self::Unchanged { contents } | Self::Added { contents } => contents.len(),
            Self::Removed => 0,
            Self::Changed { right_contents } => right_contents.len(),
            Self::Hidden { size, .. } => *size,
        }
    }

    /// Whether this region reads the baseline
    #[inline]
    #[must_use]
    pub fn references_baseline(&self) -> bool {
        matches!(self, Self::Hidden { .. })
    }
}

/// Ordered diff regions; order is emission order during reconstruction
pub type DiffSequence = Vec<DiffRegion>;

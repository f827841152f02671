//! Generic output-processing interfaces.
//!
//! This module defines the seam between a classifier and a host display
//! surface: the classifier produces [`ProcessingEdit`] values, the host
//! applies them (registering one persistent style per category at startup and
//! doing a full range replace per category on every pass).
//!
//! Hosts drive processing on content change and on surface-visibility change.
//! The suggested debounce for rapidly-appending sources is
//! [`SUGGESTED_DEBOUNCE_MS`]; processors themselves are stateless and impose
//! no rate limiting.

use crate::category::Category;
use crate::line_index::LineIndex;
use crate::ranges::TaggedRange;

/// Suggested debounce latency, in milliseconds, between a content change and
/// re-running classification.
pub const SUGGESTED_DEBOUNCE_MS: u64 = 50;

/// A change to a surface's derived display state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingEdit {
    /// Replace the complete set of ranges for one category.
    ///
    /// Always a full replace: the host drops whatever it previously applied
    /// for `category` on this surface, even when `ranges` is empty.
    ReplaceCategoryRanges {
        /// The category being replaced.
        category: Category,
        /// The full ordered set of ranges for that category.
        ranges: Vec<TaggedRange>,
    },
    /// Clear every category's ranges (e.g. when a surface stops qualifying).
    ClearAll,
}

/// A processor that derives display edits from a document snapshot.
///
/// Implementations must not retain state across calls that affects output:
/// processing the same snapshot twice yields the same edits.
pub trait OutputProcessor {
    /// The error type returned by [`OutputProcessor::process`].
    type Error;

    /// Compute the full set of edits for the current snapshot.
    fn process(&mut self, index: &LineIndex) -> Result<Vec<ProcessingEdit>, Self::Error>;
}

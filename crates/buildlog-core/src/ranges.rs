//! Tagged ranges and the grouped classification result.
//!
//! All offsets are 0-based **character** offsets within a line (not bytes),
//! with exclusive end columns. Ranges from different categories may overlap on
//! the same line; no de-duplication is performed.

use crate::category::Category;

/// A categorized half-open span within a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedRange {
    /// 0-based line index within the classified document.
    pub line: usize,
    /// Start column (inclusive), in Unicode scalar values (`char`).
    pub start: usize,
    /// End column (exclusive), in Unicode scalar values (`char`).
    pub end: usize,
    /// The category assigned to this span.
    pub category: Category,
}

impl TaggedRange {
    /// Create a new tagged range.
    pub fn new(line: usize, start: usize, end: usize, category: Category) -> Self {
        Self {
            line,
            start,
            end,
            category,
        }
    }

    /// Length of the span in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check whether this range covers a column on its line.
    pub fn contains(&self, column: usize) -> bool {
        self.start <= column && column < self.end
    }

    /// Check whether two ranges overlap (same line, intersecting columns).
    pub fn overlaps(&self, other: &TaggedRange) -> bool {
        self.line == other.line && self.start < other.end && other.start < self.end
    }
}

/// The full output of one classification pass, grouped per category for bulk
/// application to a display surface.
///
/// Every category is present (possibly with an empty sequence), so hosts can
/// do a full replace of each category's ranges on every pass. Results carry no
/// identity beyond value equality and are recomputed from scratch each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    line_count: usize,
    ranges: [Vec<TaggedRange>; Category::ALL.len()],
}

impl ClassificationResult {
    /// Create an empty result covering `line_count` lines.
    pub fn new(line_count: usize) -> Self {
        Self {
            line_count,
            ranges: Default::default(),
        }
    }

    /// Number of lines the classification pass covered.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Append a range to its category's sequence.
    ///
    /// Ranges are kept in insertion order, which for the classifier is
    /// line-major scan order per category.
    pub fn push(&mut self, range: TaggedRange) {
        self.ranges[range.category.index()].push(range);
    }

    /// The ordered ranges tagged with `category`.
    pub fn ranges(&self, category: Category) -> &[TaggedRange] {
        &self.ranges[category.index()]
    }

    /// Iterate `(category, ranges)` pairs in [`Category::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[TaggedRange])> {
        Category::ALL
            .iter()
            .map(|&category| (category, self.ranges(category)))
    }

    /// All ranges on a given line, across categories, in category order.
    pub fn line_ranges(&self, line: usize) -> Vec<TaggedRange> {
        let mut out = Vec::new();
        for ranges in &self.ranges {
            out.extend(ranges.iter().filter(|r| r.line == line).copied());
        }
        out
    }

    /// Total number of ranges across all categories.
    pub fn total_ranges(&self) -> usize {
        self.ranges.iter().map(Vec::len).sum()
    }

    /// Returns `true` if no line produced any range.
    pub fn is_empty(&self) -> bool {
        self.ranges.iter().all(Vec::is_empty)
    }
}

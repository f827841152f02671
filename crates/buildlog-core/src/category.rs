//! Semantic categories assigned to build-output text.

use serde::{Deserialize, Serialize};

/// A semantic category assigned to a whole line or a sub-line token.
///
/// Coarse categories ([`Error`](Category::Error), [`Warning`](Category::Warning)
/// and exit-code-derived [`Success`](Category::Success)/`Error`) span an entire
/// line and suppress fine-grained tagging for that line. The remaining variants
/// tag sub-line token spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Error lines (generic error heuristics or a non-zero build exit code).
    Error,
    /// Warning / deprecation lines.
    Warning,
    /// Successful-completion lines.
    Success,
    /// Informational lines.
    ///
    /// Reserved: no classification rule currently produces it, but hosts are
    /// expected to register a style for it so the category set is stable.
    Info,
    /// Absolute file-system paths (Windows or Unix style).
    Path,
    /// Executable names (`.exe` / `.EXE` tokens).
    Command,
    /// Numeric tokens: timestamps, bracketed percentages, exit-code phrases.
    Number,
    /// A leading `[tag]` bracket span.
    Bracket,
}

impl Category {
    /// All categories, in declaration order.
    ///
    /// The order is stable and used wherever results are grouped per category.
    pub const ALL: [Category; 8] = [
        Category::Error,
        Category::Warning,
        Category::Success,
        Category::Info,
        Category::Path,
        Category::Command,
        Category::Number,
        Category::Bracket,
    ];

    /// Stable index of this category within [`Category::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns `true` for categories that tag sub-line token spans rather than
    /// whole lines.
    pub const fn is_fine_grained(self) -> bool {
        matches!(
            self,
            Category::Path | Category::Command | Category::Number | Category::Bracket
        )
    }

    /// A short lowercase name, suitable for logs and serialized config keys.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Error => "error",
            Category::Warning => "warning",
            Category::Success => "success",
            Category::Info => "info",
            Category::Path => "path",
            Category::Command => "command",
            Category::Number => "number",
            Category::Bracket => "bracket",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

//! The line classification engine.
//!
//! [`LineClassifier`] turns a document snapshot into per-category
//! [`TaggedRange`] sets. Per line, in order:
//!
//! 1. the coarse-rule table (see [`default_rules`]) gets first shot; a match
//!    tags the whole line, and every coarse rule except "Build completed"
//!    also suppresses token tagging for the line;
//! 2. a leading `[tag] ` bracket span is tagged (non-coarse lines only);
//! 3. the fine-grained token scan tags paths, executables, and numeric
//!    tokens (non-suppressed lines only).
//!
//! Bracket spans and numeric tokens may overlap (a `[100%]` progress prefix
//! is both); overlapping ranges are emitted as-is, not de-duplicated. The
//! same goes for a span matched by both the Windows-style and Unix-style
//! path patterns on mixed-style text.

use crate::rules::{CoarseRule, RuleError, default_rules};
use buildlog_core::{Category, ClassificationResult, LineIndex, TaggedRange};
use regex::Regex;

/// A rule-based classifier for build-tool console output.
///
/// Pure and deterministic: the same input text always yields the same result,
/// and `classify` never fails. All patterns are compiled once at
/// construction; the only fallible operation is building the classifier.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    coarse: Vec<CoarseRule>,
    bracket_prefix: Regex,
    bracket_span: Regex,
    windows_path: Regex,
    unix_path: Regex,
    timestamp_prefix: Regex,
    command: Regex,
    timestamp: Regex,
    percent: Regex,
    exit_phrase: Regex,
    build_finished: Regex,
}

impl LineClassifier {
    /// Build a classifier with the default coarse-rule table.
    pub fn new() -> Result<Self, RuleError> {
        Self::with_rules(default_rules()?)
    }

    /// Build a classifier with a caller-supplied coarse-rule table.
    ///
    /// The fine-grained token patterns are fixed; only the whole-line rules
    /// vary.
    pub fn with_rules(coarse: Vec<CoarseRule>) -> Result<Self, RuleError> {
        Ok(Self {
            coarse,
            bracket_prefix: compile(r"^\[.*?\]\s")?,
            bracket_span: compile(r"^\[.*?\]")?,
            // Windows-style absolute path: drive letter, colon, backslash
            // segments. Case-insensitive like the drive letter itself.
            windows_path: compile(r#"(?i)[A-Z]:\\(?:[^\s:*?"<>|\r\n]+\\)*[^\s:*?"<>|\r\n\\]+"#)?,
            // Unix-style rooted path, optionally behind a drive-letter prefix
            // (D:/path/to/file). Case-sensitive.
            unix_path: compile(r#"(?:[A-Z]:)?/(?:[^\s:*?"<>|\r\n]+/)*[^\s:*?"<>|\r\n/]+"#)?,
            timestamp_prefix: compile(r"^\d{2}:\d{2}:\d{2}")?,
            command: compile(r"[\w.-]+\.(?:exe|EXE)\b")?,
            timestamp: compile(r"\b\d{2}:\d{2}:\d{2}(?:\.\d+)?\b")?,
            percent: compile(r"\[\s*\d+%\s*\]")?,
            exit_phrase: compile(r"(?i)exit(?:ed)? with code:?\s+\d+")?,
            build_finished: compile(r"(?i)Build finished with exit code")?,
        })
    }

    /// The active coarse-rule table, in evaluation order.
    pub fn rules(&self) -> &[CoarseRule] {
        &self.coarse
    }

    /// Classify the full document text.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        self.classify_index(&LineIndex::from_text(text))
    }

    /// Classify an already-indexed document snapshot.
    pub fn classify_index(&self, index: &LineIndex) -> ClassificationResult {
        let mut result = ClassificationResult::new(index.line_count());

        for line in 0..index.line_count() {
            let Some(text) = index.get_line_text(line) else {
                continue;
            };
            self.classify_line(line, &text, &mut result);
        }

        result
    }

    fn classify_line(&self, line: usize, text: &str, result: &mut ClassificationResult) {
        let mut suppress_tokens = false;

        for rule in &self.coarse {
            let Some(m) = rule.evaluate(text) else {
                continue;
            };
            result.push(TaggedRange::new(
                line,
                0,
                text.chars().count(),
                m.category,
            ));
            suppress_tokens = m.suppresses_fine_grained;
            break;
        }

        if suppress_tokens {
            return;
        }

        // Leading [tag] span (brackets included, trailing whitespace not).
        // Runs on success lines too.
        if self.bracket_prefix.is_match(text) {
            if let Some(m) = self.bracket_span.find(text) {
                push_match(result, line, text, m.start(), m.end(), Category::Bracket);
            }
        }

        self.scan_tokens(line, text, result);
    }

    /// The fine-grained token scan: paths, executables, numeric tokens.
    fn scan_tokens(&self, line: usize, text: &str, result: &mut ClassificationResult) {
        for m in self.windows_path.find_iter(text) {
            push_match(result, line, text, m.start(), m.end(), Category::Path);
        }

        for m in self.unix_path.find_iter(text) {
            // An HH:MM:SS prefix means timestamp, not path.
            if self.timestamp_prefix.is_match(m.as_str()) {
                continue;
            }
            push_match(result, line, text, m.start(), m.end(), Category::Path);
        }

        for m in self.command.find_iter(text) {
            push_match(result, line, text, m.start(), m.end(), Category::Command);
        }

        for m in self.timestamp.find_iter(text) {
            push_match(result, line, text, m.start(), m.end(), Category::Number);
        }

        for m in self.percent.find_iter(text) {
            push_match(result, line, text, m.start(), m.end(), Category::Number);
        }

        // Exit-code phrases on ordinary lines. The "Build finished" line is
        // coarse-classified and never reaches this scan; the guard is kept so
        // a custom rule table without the exit-code rule cannot double-tag it.
        if !self.build_finished.is_match(text) {
            for m in self.exit_phrase.find_iter(text) {
                push_match(result, line, text, m.start(), m.end(), Category::Number);
            }
        }
    }
}

fn compile(pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Convert a byte-offset match to 0-based character columns.
///
/// Returns `None` for empty or out-of-bounds spans.
fn match_columns(text: &str, start_byte: usize, end_byte: usize) -> Option<(usize, usize)> {
    if start_byte >= end_byte || end_byte > text.len() {
        return None;
    }

    let start_col = text[..start_byte].chars().count();
    let end_col = start_col + text[start_byte..end_byte].chars().count();
    if start_col >= end_col {
        return None;
    }

    Some((start_col, end_col))
}

fn push_match(
    result: &mut ClassificationResult,
    line: usize,
    text: &str,
    start_byte: usize,
    end_byte: usize,
    category: Category,
) {
    if let Some((start, end)) = match_columns(text, start_byte, end_byte) {
        result.push(TaggedRange::new(line, start, end, category));
    }
}

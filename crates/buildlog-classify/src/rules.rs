//! The ordered coarse-rule table.
//!
//! Coarse rules decide a whole line's category. They are evaluated
//! short-circuit, top to bottom: the first rule that matches wins, and most
//! rules then suppress fine-grained token tagging for that line.

use buildlog_core::Category;
use regex::Regex;
use thiserror::Error;

/// Errors raised while building classification rules.
#[derive(Debug, Error)]
pub enum RuleError {
    /// A rule pattern failed to compile.
    #[error("regex compile error for pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern text.
        pattern: String,
        /// The underlying regex error.
        source: regex::Error,
    },
}

fn compile(pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// How a matching rule categorizes the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoarseOutcome {
    /// Always the given category.
    Fixed(Category),
    /// Category derived from the captured exit code: 0 is [`Category::Success`],
    /// anything else is [`Category::Error`].
    ExitCode,
}

/// The result of one coarse rule matching a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoarseMatch {
    /// The category for the whole line.
    pub category: Category,
    /// Whether fine-grained token tagging is suppressed for this line.
    pub suppresses_fine_grained: bool,
}

/// One entry in the coarse-rule table.
#[derive(Debug, Clone)]
pub struct CoarseRule {
    regex: Regex,
    /// A line matching `regex` is still rejected when this also matches.
    unless: Option<Regex>,
    outcome: CoarseOutcome,
    suppresses_fine_grained: bool,
}

impl CoarseRule {
    /// A rule that assigns a fixed category.
    pub fn fixed(
        pattern: &str,
        category: Category,
        suppresses_fine_grained: bool,
    ) -> Result<Self, RuleError> {
        Ok(Self {
            regex: compile(pattern)?,
            unless: None,
            outcome: CoarseOutcome::Fixed(category),
            suppresses_fine_grained,
        })
    }

    /// A rule whose category depends on a captured exit code (capture group 1).
    pub fn exit_code(pattern: &str) -> Result<Self, RuleError> {
        Ok(Self {
            regex: compile(pattern)?,
            unless: None,
            outcome: CoarseOutcome::ExitCode,
            suppresses_fine_grained: true,
        })
    }

    /// Reject lines that also match `pattern` (a negative guard).
    pub fn unless(mut self, pattern: &str) -> Result<Self, RuleError> {
        self.unless = Some(compile(pattern)?);
        Ok(self)
    }

    /// Whether a match on this rule suppresses fine-grained tagging.
    pub fn suppresses_fine_grained(&self) -> bool {
        self.suppresses_fine_grained
    }

    /// Evaluate the rule against one line.
    pub fn evaluate(&self, line: &str) -> Option<CoarseMatch> {
        let category = match self.outcome {
            CoarseOutcome::Fixed(category) => {
                if !self.regex.is_match(line) {
                    return None;
                }
                category
            }
            CoarseOutcome::ExitCode => {
                let caps = self.regex.captures(line)?;
                let code = caps.get(1)?.as_str();
                // A code too large to parse is still a failure exit.
                if code.parse::<u64>().map(|n| n == 0).unwrap_or(false) {
                    Category::Success
                } else {
                    Category::Error
                }
            }
        };

        if let Some(unless) = &self.unless {
            if unless.is_match(line) {
                return None;
            }
        }

        Some(CoarseMatch {
            category,
            suppresses_fine_grained: self.suppresses_fine_grained,
        })
    }
}

/// The default coarse-rule table for compiler/build console output.
///
/// Order matters:
///
/// 1. "Build finished with exit code N" (`[build]` tag optional) decides
///    Success/Error from N. Checked first so the generic `failed` heuristic
///    never steals an exit-code line.
/// 2. Generic error tokens (`error:`/`error `, `failed`, `fatal`,
///    `exception`, `***`).
/// 3. Warning tokens (`warning:`/`warning `, `warn:`/`warn `, `deprecated`).
/// 4. "Build completed" lines not also mentioning error/fail. This rule does
///    NOT suppress fine-grained tagging: success lines still get their
///    timestamps and paths tagged.
pub fn default_rules() -> Result<Vec<CoarseRule>, RuleError> {
    Ok(vec![
        CoarseRule::exit_code(r"(?i)(?:\[build\]\s+)?Build finished with exit code\s+(\d+)")?,
        CoarseRule::fixed(
            r"(?i)(?:error[:\s]|failed|fatal|exception|\*\*\*)",
            Category::Error,
            true,
        )?,
        CoarseRule::fixed(
            r"(?i)(?:warning[:\s]|warn[:\s]|deprecated)",
            Category::Warning,
            true,
        )?,
        CoarseRule::fixed(r"(?i)Build completed", Category::Success, false)?
            .unless(r"(?i)(?:error|fail)")?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_outcome() {
        let rule =
            CoarseRule::exit_code(r"(?i)(?:\[build\]\s+)?Build finished with exit code\s+(\d+)")
                .unwrap();

        let ok = rule.evaluate("[build] Build finished with exit code 0").unwrap();
        assert_eq!(ok.category, Category::Success);
        assert!(ok.suppresses_fine_grained);

        let bad = rule.evaluate("Build finished with exit code 2").unwrap();
        assert_eq!(bad.category, Category::Error);

        assert!(rule.evaluate("Build started").is_none());
    }

    #[test]
    fn test_huge_exit_code_is_error() {
        let rule = CoarseRule::exit_code(r"exit code\s+(\d+)").unwrap();
        let m = rule.evaluate("exit code 99999999999999999999999").unwrap();
        assert_eq!(m.category, Category::Error);
    }

    #[test]
    fn test_unless_guard() {
        let rule = CoarseRule::fixed(r"(?i)Build completed", Category::Success, false)
            .unwrap()
            .unless(r"(?i)(?:error|fail)")
            .unwrap();

        assert!(rule.evaluate("Build completed in 4s").is_some());
        assert!(rule.evaluate("Build completed with 3 errors").is_none());
    }

    #[test]
    fn test_default_rules_order() {
        let rules = default_rules().unwrap();
        assert_eq!(rules.len(), 4);

        // Exit-code lines must match rule 0 before the generic error rule
        // would get a chance at "finished"/"failed"-style heuristics.
        let line = "[build] Build finished with exit code 1";
        let first_match = rules.iter().position(|r| r.evaluate(line).is_some());
        assert_eq!(first_match, Some(0));
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = CoarseRule::fixed(r"(unclosed", Category::Error, true).unwrap_err();
        match err {
            RuleError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
        }
    }
}

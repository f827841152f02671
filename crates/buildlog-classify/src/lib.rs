#![warn(missing_docs)]
//! `buildlog-classify` - Rule-based classification of build-tool console
//! output.
//!
//! Given the text of a compiler/build log, [`LineClassifier`] assigns each
//! line a coarse category (error, warning, success) or, failing that, tags
//! sub-line tokens: leading `[tag]` brackets, file paths, executable names,
//! and numeric tokens such as timestamps and progress percentages.
//!
//! ```rust
//! use buildlog_classify::LineClassifier;
//! use buildlog_core::Category;
//!
//! let classifier = LineClassifier::new().unwrap();
//! let result = classifier.classify(
//!     "[ 50%] Building CXX object main.o\nerror: something broke\n",
//! );
//!
//! assert_eq!(result.ranges(Category::Number).len(), 1); // "[ 50%]"
//! assert_eq!(result.ranges(Category::Error).len(), 1); // whole second line
//! ```
//!
//! Hosts that want the full-replace seam instead of raw results can wrap the
//! classifier in a [`ClassifyProcessor`].

pub mod classifier;
pub mod rules;

mod processor;

pub use classifier::LineClassifier;
pub use processor::ClassifyProcessor;
pub use rules::{CoarseMatch, CoarseOutcome, CoarseRule, RuleError, default_rules};

use crate::classifier::LineClassifier;
use crate::rules::RuleError;
use buildlog_core::{Category, LineIndex, OutputProcessor, ProcessingEdit};
use std::convert::Infallible;

/// An [`OutputProcessor`] wrapping a [`LineClassifier`].
///
/// Each pass re-classifies the full snapshot and emits one
/// [`ProcessingEdit::ReplaceCategoryRanges`] per category, in
/// [`Category::ALL`] order, so the host can do a full replace (including
/// clearing categories that matched nothing this pass).
#[derive(Debug, Clone)]
pub struct ClassifyProcessor {
    classifier: LineClassifier,
}

impl ClassifyProcessor {
    /// A processor with the default rule table.
    pub fn new() -> Result<Self, RuleError> {
        Ok(Self {
            classifier: LineClassifier::new()?,
        })
    }

    /// A processor over a pre-built classifier.
    pub fn with_classifier(classifier: LineClassifier) -> Self {
        Self { classifier }
    }

    /// The wrapped classifier.
    pub fn classifier(&self) -> &LineClassifier {
        &self.classifier
    }
}

impl OutputProcessor for ClassifyProcessor {
    type Error = Infallible;

    fn process(&mut self, index: &LineIndex) -> Result<Vec<ProcessingEdit>, Self::Error> {
        let result = self.classifier.classify_index(index);

        Ok(Category::ALL
            .iter()
            .map(|&category| ProcessingEdit::ReplaceCategoryRanges {
                category,
                ranges: result.ranges(category).to_vec(),
            })
            .collect())
    }
}

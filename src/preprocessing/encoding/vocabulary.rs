//! Per-column label vocabulary.

use crate::preprocessing::error::{PreprocessingError, Result};
use std::collections::HashMap;

/// Bijection between normalized labels and dense codes `0..k`.
///
/// Codes follow ascending lexical order of the labels. A vocabulary is
/// built once and never modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
    labels: Vec<String>,
    codes: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build from any labels; duplicates collapse and the result is sorted.
    pub fn from_labels<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut labels: Vec<String> = labels.into_iter().collect();
        labels.sort();
        labels.dedup();
        Self::index(labels)
    }

    /// Rebuild from a stored label list, which must be strictly ascending.
    pub(crate) fn from_sorted(labels: Vec<String>) -> Result<Self> {
        if let Some(pair) = labels.windows(2).find(|w| w[0] >= w[1]) {
            return Err(PreprocessingError::InvalidParameter(format!(
                "vocabulary labels must be strictly ascending, found '{}' before '{}'",
                pair[0], pair[1]
            )));
        }
        Ok(Self::index(labels))
    }

    fn index(labels: Vec<String>) -> Self {
        let codes = labels
            .iter()
            .enumerate()
            .map(|(code, label)| (label.clone(), code))
            .collect();
        Self { labels, codes }
    }

    /// Number of distinct labels (`k`).
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Code assigned to `label`, if it was seen at fit time.
    pub fn code(&self, label: &str) -> Option<usize> {
        self.codes.get(label).copied()
    }

    /// Label for `code`, if `code < len()`.
    pub fn label(&self, code: usize) -> Option<&str> {
        self.labels.get(code).map(String::as_str)
    }

    /// All labels, indexed by code.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

//! Document model
//!
//! One submitted file, normalized once when the scan organizes the corpus and
//! read-only for every pair comparison afterwards.

use super::language::Language;
use crate::features::normalization::{prepare_document, Template};
use serde::{Deserialize, Serialize};

/// A submitted source file with its derived comparison forms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Submitting author
    pub author: String,

    /// File name within the submission
    pub filename: String,

    /// Language detected from the file name
    pub language: Language,

    /// Original text as supplied by the corpus
    pub raw_text: String,

    /// Fully normalized form (comments, identifiers, literals, whitespace, case)
    pub normalized_text: String,

    /// Identifier-normalized, trimmed lines, one per raw line
    ///
    /// Template lines are blanked so line numbers keep referring to `raw_text`.
    pub canonical_lines: Vec<String>,

    /// Number of lines removed by the template filter
    pub excluded_lines: usize,

    /// Why the corpus could not provide the content, if it could not
    pub input_error: Option<String>,
}

impl Document {
    /// Build and normalize a document
    pub fn new(
        author: impl Into<String>,
        filename: impl Into<String>,
        raw_text: impl Into<String>,
    ) -> Self {
        prepare_document(author.into(), filename.into(), raw_text.into(), None)
    }

    /// Build and normalize a document, excluding template lines
    pub fn with_template(
        author: impl Into<String>,
        filename: impl Into<String>,
        raw_text: impl Into<String>,
        template: &Template,
    ) -> Self {
        prepare_document(author.into(), filename.into(), raw_text.into(), Some(template))
    }

    /// Placeholder for a file the corpus could not read
    pub fn unreadable(
        author: impl Into<String>,
        filename: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        let filename = filename.into();
        Self {
            author: author.into(),
            language: Language::from_filename(&filename),
            filename,
            raw_text: String::new(),
            normalized_text: String::new(),
            canonical_lines: Vec::new(),
            excluded_lines: 0,
            input_error: Some(reason.into()),
        }
    }

    /// Whether the raw content is empty (such pairs are skipped)
    pub fn is_empty(&self) -> bool {
        self.raw_text.trim().is_empty()
    }

    /// `author/filename`
    pub fn descriptor(&self) -> String {
        format!("{}/{}", self.author, self.filename)
    }

    /// Raw lines, aligned with `canonical_lines`
    pub fn raw_lines(&self) -> Vec<&str> {
        self.raw_text.lines().collect()
    }
}

//! Corpus collaborator port
//!
//! Archive extraction, encoding detection and grouping happen outside the
//! engine. The engine receives decoded text per file, or the reason a file
//! could not be decoded.

use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Decoded content of one submitted file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileContent {
    Text(String),
    Unreadable { reason: String },
}

/// One file of a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionFile {
    pub filename: String,
    pub content: FileContent,
}

impl SubmissionFile {
    pub fn text(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: FileContent::Text(text.into()),
        }
    }

    pub fn unreadable(filename: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: FileContent::Unreadable {
                reason: reason.into(),
            },
        }
    }

    /// Decode raw bytes as UTF-8, marking the file unreadable otherwise
    pub fn from_bytes(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => Self::text(filename, text),
            Err(e) => Self::unreadable(filename, format!("invalid UTF-8: {}", e.utf8_error())),
        }
    }
}

/// All files of one author, in submission order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub author: String,
    pub files: Vec<SubmissionFile>,
}

/// Source of the corpus under comparison
pub trait CorpusSource: Send + Sync {
    /// Submissions grouped by author
    ///
    /// An error here is unrecoverable for the scan.
    fn submissions(&self) -> Result<Vec<Submission>>;
}

/// Corpus held in memory, authors in lexicographic order
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    authors: BTreeMap<String, Vec<SubmissionFile>>,
}

impl InMemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a decoded file
    pub fn with_file(
        mut self,
        author: impl Into<String>,
        filename: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.add(author, SubmissionFile::text(filename, text));
        self
    }

    /// Add a file of any content
    pub fn add(&mut self, author: impl Into<String>, file: SubmissionFile) {
        self.authors.entry(author.into()).or_default().push(file);
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    pub fn file_count(&self) -> usize {
        self.authors.values().map(Vec::len).sum()
    }
}

impl CorpusSource for InMemoryCorpus {
    fn submissions(&self) -> Result<Vec<Submission>> {
        Ok(self
            .authors
            .iter()
            .map(|(author, files)| Submission {
                author: author.clone(),
                files: files.clone(),
            })
            .collect())
    }
}

//! Corpus organization
//!
//! Flattens submissions into documents in author-then-file order and
//! normalizes them in parallel. Unreadable files become empty documents so
//! the scan still accounts for every pair touching them.

use crate::errors::EngineError;
use crate::features::corpus_scan::ports::{FileContent, Submission};
use crate::features::normalization::Template;
use crate::shared::models::Document;
use rayon::prelude::*;
use tracing::warn;

/// Build normalized documents from submissions
pub fn organize_documents(submissions: &[Submission], template: Option<&Template>) -> Vec<Document> {
    let files: Vec<(&str, &str, &FileContent)> = submissions
        .iter()
        .flat_map(|submission| {
            submission
                .files
                .iter()
                .map(move |file| (submission.author.as_str(), file.filename.as_str(), &file.content))
        })
        .collect();

    files
        .par_iter()
        .map(|&(author, filename, content)| match content {
            FileContent::Text(text) => match template {
                Some(template) => Document::with_template(author, filename, text.as_str(), template),
                None => Document::new(author, filename, text.as_str()),
            },
            FileContent::Unreadable { reason } => {
                warn!("{}", EngineError::input(author, filename, reason.as_str()));
                Document::unreadable(author, filename, reason.as_str())
            }
        })
        .collect()
}

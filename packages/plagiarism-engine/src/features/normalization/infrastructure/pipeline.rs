//! Normalization pipeline
//!
//! ```text
//! raw ─▶ strip_comments ─▶ canonicalize_identifiers ─▶ canonicalize_literals ─▶ flatten_whitespace
//!                                   │
//!                                   └─▶ per-line trim ─▶ Document::canonical_lines
//! ```
//!
//! The full pipeline feeds the similarity scores. The identifier-only branch
//! keeps line structure and feeds the segment matcher.

use super::comments::strip_comments;
use super::identifiers::{canonicalize_identifiers, NormalizedText};
use super::literals::canonicalize_literals;
use crate::features::normalization::domain::Template;
use crate::shared::models::{Document, Language};

// ═══════════════════════════════════════════════════════════════════════════
// Normalizer
// ═══════════════════════════════════════════════════════════════════════════

/// Language-bound normalizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    language: Language,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::lexical()
    }
}

impl Normalizer {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Normalizer that never attempts structured tokenization
    pub fn lexical() -> Self {
        Self::new(Language::Unknown)
    }

    /// Normalizer for the language a file name implies
    pub fn for_filename(filename: &str) -> Self {
        Self::new(Language::from_filename(filename))
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Run all four stages
    pub fn normalize(&self, raw: &str) -> NormalizedText {
        let stripped = strip_comments(raw, self.language);
        let identified = canonicalize_identifiers(&stripped, self.language);
        let literals = canonicalize_literals(&identified.text);
        NormalizedText {
            text: flatten_whitespace(&literals),
            ..identified
        }
    }

    /// Comments stripped and identifiers canonicalized, line structure intact
    pub fn canonicalize_lines(&self, raw: &str) -> Vec<String> {
        let stripped = strip_comments(raw, self.language);
        canonicalize_identifiers(&stripped, self.language)
            .text
            .lines()
            .map(|line| line.trim().to_string())
            .collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Free functions
// ═══════════════════════════════════════════════════════════════════════════

/// Normalize with the lexical tokenizer
pub fn normalize(raw: &str) -> String {
    Normalizer::lexical().normalize(raw).text
}

/// Normalize with the tokenizer best suited to `language`
pub fn normalize_with_language(raw: &str, language: Language) -> String {
    Normalizer::new(language).normalize(raw).text
}

/// Collapse whitespace runs, drop empty lines, lower-case
pub fn flatten_whitespace(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}

/// Build a [`Document`] with both comparison forms
///
/// Template lines are blanked first. `canonical_lines` always has one entry
/// per raw line.
pub fn prepare_document(
    author: String,
    filename: String,
    raw_text: String,
    template: Option<&Template>,
) -> Document {
    let normalizer = Normalizer::for_filename(&filename);

    let (source, excluded_lines) = match template {
        Some(template) => {
            let filtered = template.filter(&raw_text);
            (filtered.text, filtered.excluded)
        }
        None => (raw_text.clone(), 0),
    };

    let normalized_text = normalizer.normalize(&source).text;
    let mut canonical_lines = normalizer.canonicalize_lines(&source);
    canonical_lines.resize(raw_text.lines().count(), String::new());

    Document {
        author,
        language: normalizer.language(),
        filename,
        raw_text,
        normalized_text,
        canonical_lines,
        excluded_lines,
        input_error: None,
    }
}

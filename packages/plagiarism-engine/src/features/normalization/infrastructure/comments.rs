//! Comment stripping
//!
//! Regex based, language aware only in the comment syntax it picks:
//! `//` and `/* */` for C-family sources, `#` for Python.
//!
//! Newlines inside block comments survive so line numbers computed on the
//! stripped text still refer to the original document.

use crate::shared::models::Language;
use once_cell::sync::Lazy;
use regex::Regex;

static C_STYLE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)//[^\n]*|/\*.*?\*/").expect("valid comment regex"));

static HASH_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#[^\n]*").expect("valid comment regex"));

/// Remove comments from `text`
pub fn strip_comments(text: &str, language: Language) -> String {
    let pattern: &Regex = if language.uses_hash_comments() {
        &HASH_COMMENT
    } else {
        &C_STYLE_COMMENT
    };

    pattern
        .replace_all(text, |caps: &regex::Captures<'_>| {
            caps[0].chars().filter(|&c| c == '\n').collect::<String>()
        })
        .into_owned()
}

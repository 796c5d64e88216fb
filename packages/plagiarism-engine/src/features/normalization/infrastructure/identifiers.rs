//! Identifier canonicalization
//!
//! Replaces every non-reserved identifier with a sequential placeholder in
//! order of first appearance. Tokenization tries, in order:
//!
//! 1. tree-sitter leaves, when the language has a grammar and the source
//!    parses without error nodes
//! 2. the lexical scanner
//! 3. nothing: the text is returned unmodified

use super::lexer::{is_word_char, tokenize, TokenKind};
use crate::errors::{EngineError, Result};
use crate::features::normalization::domain::{is_literal_keyword, is_reserved, IdentifierMap};
use crate::shared::models::Language;
use crate::shared::utils::tree_sitter::{collect_leaves, parse_source};
use tracing::debug;

/// Leaf node kinds that name something, across the bundled grammars
const IDENTIFIER_KINDS: &[&str] = &[
    "identifier",
    "type_identifier",
    "field_identifier",
    "property_identifier",
    "shorthand_property_identifier",
    "shorthand_property_identifier_pattern",
    "simple_identifier",
    "package_identifier",
];

/// How identifiers were found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierStrategy {
    /// tree-sitter leaves of the given language
    Structured(Language),
    /// Lexical word scan
    Lexical,
    /// Tokenization failed, text left as is
    Unmodified,
}

/// Identifier-canonicalized text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    pub text: String,
    /// Distinct identifiers replaced
    pub identifiers: usize,
    pub strategy: IdentifierStrategy,
}

/// Canonicalize identifiers in `text`
///
/// Never fails. Structured tokenization is attempted only for languages with
/// a grammar; anything it cannot handle falls through to the lexical scan.
pub fn canonicalize_identifiers(text: &str, language: Language) -> NormalizedText {
    if language.has_grammar() {
        match structured_spans(text, language) {
            Ok(spans) => {
                let (text, identifiers) = replace_spans(text, &spans);
                return NormalizedText {
                    text,
                    identifiers,
                    strategy: IdentifierStrategy::Structured(language),
                };
            }
            Err(e) => {
                debug!("structured tokenization failed for {}: {}", language, e);
            }
        }
    }

    match tokenize(text) {
        Ok(tokens) => {
            let spans: Vec<(usize, usize)> = tokens
                .iter()
                .filter(|t| t.kind == TokenKind::Identifier)
                .filter(|t| !is_literal_keyword(language, t.text(text)))
                .map(|t| (t.start, t.end))
                .collect();
            let (text, identifiers) = replace_spans(text, &spans);
            NormalizedText {
                text,
                identifiers,
                strategy: IdentifierStrategy::Lexical,
            }
        }
        Err(e) => {
            debug!("lexical tokenization failed: {}", e);
            NormalizedText {
                text: text.to_string(),
                identifiers: 0,
                strategy: IdentifierStrategy::Unmodified,
            }
        }
    }
}

/// Byte spans of identifier leaves, in source order
fn structured_spans(text: &str, language: Language) -> Result<Vec<(usize, usize)>> {
    let tree = parse_source(language, text).map_err(EngineError::normalization)?;
    let root = tree.root_node();
    if root.has_error() {
        return Err(EngineError::normalization("syntax errors in source"));
    }

    Ok(collect_leaves(&root, |node| IDENTIFIER_KINDS.contains(&node.kind()))
        .iter()
        .map(|node| (node.start_byte(), node.end_byte()))
        .filter(|&(start, end)| start < end && end <= text.len())
        .collect())
}

/// Replace non-reserved spans with placeholders
///
/// Returns the rewritten text and the number of distinct identifiers.
fn replace_spans(text: &str, spans: &[(usize, usize)]) -> (String, usize) {
    let mut map = IdentifierMap::new();
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut cursor = 0;

    for &(start, end) in spans {
        if start < cursor {
            continue;
        }
        let name = &text[start..end];
        if is_reserved(name) {
            continue;
        }
        out.push_str(&text[cursor..start]);
        push_word(&mut out, map.placeholder_for(name), &text[end..]);
        cursor = end;
    }
    out.push_str(&text[cursor..]);

    (out, map.len())
}

/// Append `word`, padding with a space where it would fuse with a
/// neighbouring word character
pub(crate) fn push_word(out: &mut String, word: &str, rest: &str) {
    if out.chars().next_back().is_some_and(is_word_char) {
        out.push(' ');
    }
    out.push_str(word);
    if rest.chars().next().is_some_and(is_word_char) {
        out.push(' ');
    }
}

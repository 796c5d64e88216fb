//! Literal canonicalization
//!
//! Quoted string literals become `str_lit`, standalone integers `num_lit`.
//! Other numeric words (`0x1f`, `10u32`) keep their spelling.

use super::identifiers::push_word;
use super::lexer::{tokenize, TokenKind};
use crate::features::normalization::domain::{NUMBER_PLACEHOLDER, STRING_PLACEHOLDER};

/// Replace literals in `text`; binary input is returned unchanged
pub fn canonicalize_literals(text: &str) -> String {
    let tokens = match tokenize(text) {
        Ok(tokens) => tokens,
        Err(_) => return text.to_string(),
    };

    let mut out = String::with_capacity(text.len());
    for token in &tokens {
        let placeholder = match token.kind {
            TokenKind::StringLiteral => STRING_PLACEHOLDER,
            TokenKind::Integer => NUMBER_PLACEHOLDER,
            _ => {
                out.push_str(token.text(text));
                continue;
            }
        };
        push_word(&mut out, placeholder, &text[token.end..]);
    }
    out
}

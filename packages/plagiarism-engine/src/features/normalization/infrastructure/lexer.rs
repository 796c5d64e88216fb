//! Lexical scanner
//!
//! Language-agnostic tokenizer used when no grammar applies and for literal
//! canonicalization. Splits text into identifiers, integer literals, other
//! numeric words, single-line string literals, whitespace and symbols.
//!
//! Token boundaries are stable under normalization: placeholders are words,
//! and a quote that does not close on its own line is a plain symbol.

use thiserror::Error;

/// Token classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Word starting with a letter or `_`
    Identifier,
    /// All-ASCII-digit word (`42`)
    Integer,
    /// Word starting with a digit that is not a plain integer (`0x1f`, `10u32`)
    NumericWord,
    /// `"..."` or `'...'` closed on the same line
    StringLiteral,
    Whitespace,
    Symbol,
}

/// Byte range of one token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// Input the scanner refuses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("binary content (NUL byte at offset {0})")]
    Binary(usize),
}

/// Character that may continue a word
#[inline]
pub fn is_word_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

#[inline]
fn is_identifier_start(c: char) -> bool {
    c == '_' || (c.is_alphanumeric() && !c.is_ascii_digit())
}

/// Tokenize `text`
///
/// Fails only on binary content; everything else tokenizes.
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    if let Some(pos) = text.find('\0') {
        return Err(LexError::Binary(pos));
    }

    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        let (kind, end) = if c.is_whitespace() {
            let mut end = start + c.len_utf8();
            while let Some(&(i, next)) = chars.peek() {
                if !next.is_whitespace() {
                    break;
                }
                end = i + next.len_utf8();
                chars.next();
            }
            (TokenKind::Whitespace, end)
        } else if is_identifier_start(c) || c.is_ascii_digit() {
            let mut end = start + c.len_utf8();
            let mut all_digits = c.is_ascii_digit();
            while let Some(&(i, next)) = chars.peek() {
                if !is_word_char(next) {
                    break;
                }
                all_digits &= next.is_ascii_digit();
                end = i + next.len_utf8();
                chars.next();
            }
            let kind = if is_identifier_start(c) {
                TokenKind::Identifier
            } else if all_digits {
                TokenKind::Integer
            } else {
                TokenKind::NumericWord
            };
            (kind, end)
        } else if c == '"' || c == '\'' {
            match string_end(text, start, c) {
                Some(end) => {
                    while let Some(&(i, _)) = chars.peek() {
                        if i >= end {
                            break;
                        }
                        chars.next();
                    }
                    (TokenKind::StringLiteral, end)
                }
                None => (TokenKind::Symbol, start + c.len_utf8()),
            }
        } else {
            (TokenKind::Symbol, start + c.len_utf8())
        };

        tokens.push(Token { kind, start, end });
    }

    Ok(tokens)
}

/// End offset (exclusive) of a string literal opened at `start`, if it
/// closes on the same line
fn string_end(text: &str, start: usize, quote: char) -> Option<usize> {
    let body_start = start + quote.len_utf8();
    let mut body = text[body_start..].char_indices();

    while let Some((offset, c)) = body.next() {
        match c {
            '\n' => return None,
            '\\' => match body.next() {
                None | Some((_, '\n')) => return None,
                Some(_) => {}
            },
            c if c == quote => return Some(body_start + offset + c.len_utf8()),
            _ => {}
        }
    }
    None
}

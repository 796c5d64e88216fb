//! Normalization Infrastructure
//!
//! Tokenizers and the four-stage pipeline:
//! - `comments`: comment stripping (regex)
//! - `lexer`: lexical scanner (identifiers, integers, string literals)
//! - `identifiers`: identifier canonicalization (tree-sitter, lexical fallback)
//! - `literals`: literal canonicalization
//! - `pipeline`: `Normalizer`, whitespace flattening, document preparation

pub mod comments;
pub mod identifiers;
pub mod lexer;
pub mod literals;
pub mod pipeline;

pub use comments::strip_comments;
pub use identifiers::{canonicalize_identifiers, IdentifierStrategy, NormalizedText};
pub use lexer::{tokenize, LexError, Token, TokenKind};
pub use literals::canonicalize_literals;
pub use pipeline::{
    flatten_whitespace, normalize, normalize_with_language, prepare_document, Normalizer,
};

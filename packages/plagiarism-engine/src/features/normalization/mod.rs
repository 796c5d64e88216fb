//! Source Normalization
//!
//! Turns raw source text into a canonical form for comparison:
//!
//! 1. Strip comments (`//`, `/* */`, or `#` for Python)
//! 2. Canonicalize identifiers to `var_1`, `var_2`, ... by first appearance
//!    (tree-sitter leaves when a grammar exists, lexical scan otherwise)
//! 3. Canonicalize string and integer literals to fixed placeholders
//! 4. Collapse whitespace, drop empty lines, lower-case
//!
//! # Usage
//!
//! ```
//! use plagiarism_engine::features::normalization::normalize;
//!
//! let a = normalize("int total = 10; // running sum");
//! let b = normalize("int   acc=42;");
//! assert_eq!(a, "int var_1 = num_lit;");
//! assert_eq!(b, "int var_1=num_lit;");
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::{
    is_literal_keyword, is_reserved, IdentifierMap, Template, NUMBER_PLACEHOLDER, PLACEHOLDER_PREFIX,
    STRING_PLACEHOLDER,
};
pub use infrastructure::{
    canonicalize_identifiers, canonicalize_literals, flatten_whitespace, normalize,
    normalize_with_language, prepare_document, strip_comments, IdentifierStrategy,
    NormalizedText, Normalizer,
};

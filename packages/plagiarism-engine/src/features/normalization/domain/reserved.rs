//! Reserved words
//!
//! Keywords and builtin type names of the supported languages. These keep
//! their spelling during identifier canonicalization. Every entry is lower
//! case, so lower-casing normalized text never turns a renamed identifier
//! into a reserved word.

use crate::shared::models::Language;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Placeholder for quoted string literals
pub const STRING_PLACEHOLDER: &str = "str_lit";

/// Placeholder for standalone integer literals
pub const NUMBER_PLACEHOLDER: &str = "num_lit";

const KEYWORDS: &[&str] = &[
    // C / C++
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return",
    "short", "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned",
    "void", "volatile", "while", "bool", "true", "false", "class", "public", "private",
    "protected", "virtual", "new", "delete", "this", "namespace", "using", "template",
    "typename", "try", "catch", "throw", "nullptr", "inline", "operator", "friend", "include",
    "define", "std",
    // Java / Kotlin
    "package", "import", "extends", "implements", "interface", "abstract", "final",
    "synchronized", "boolean", "byte", "instanceof", "super", "throws", "null", "fun", "val",
    "var", "object", "when", "is", "in",
    // Python
    "def", "elif", "from", "as", "except", "finally", "with", "lambda", "yield", "pass",
    "not", "and", "or", "global", "nonlocal", "assert", "del", "raise", "self", "print",
    // JavaScript / TypeScript
    "function", "let", "typeof", "async", "await", "export", "undefined", "of", "type",
    // Rust
    "fn", "mut", "impl", "trait", "pub", "mod", "use", "crate", "match", "loop", "where",
    "ref", "move", "dyn", "i32", "i64", "u8", "u32", "u64", "usize", "f64", "str",
    // Go
    "func", "go", "chan", "select", "defer", "range", "map", "fallthrough", "nil", "iota",
];

/// Capitalized literals the Python grammar parses as literal nodes
const PYTHON_LITERALS: &[&str] = &["True", "False", "None"];

static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    KEYWORDS
        .iter()
        .copied()
        .chain([STRING_PLACEHOLDER, NUMBER_PLACEHOLDER])
        .collect()
});

/// Whether `token` keeps its spelling during identifier canonicalization
pub fn is_reserved(token: &str) -> bool {
    RESERVED.contains(token)
}

/// Whether the grammar for `language` treats `token` as a literal, not a name
///
/// The lexical scan keeps these so it renames the same words the structured
/// tokenizer does. Lower-case literals are already reserved.
pub fn is_literal_keyword(language: Language, token: &str) -> bool {
    match language {
        Language::Python => PYTHON_LITERALS.contains(&token),
        _ => false,
    }
}

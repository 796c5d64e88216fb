//! Tree-sitter Utility Functions
//!
//! Grammar lookup and leaf traversal used by the structured tokenizer.

use crate::shared::models::Language;
use tree_sitter::{Node, Parser, Tree};

// ═══════════════════════════════════════════════════════════════════════════
// Grammar Lookup
// ═══════════════════════════════════════════════════════════════════════════

/// Bundled grammar for a language, if any
pub fn grammar_for(language: Language) -> Option<tree_sitter::Language> {
    match language {
        Language::Python => Some(tree_sitter_python::language()),
        Language::Java => Some(tree_sitter_java::language()),
        Language::Rust => Some(tree_sitter_rust::language()),
        Language::Go => Some(tree_sitter_go::language()),
        // TypeScript grammar is a superset good enough for plain JavaScript
        Language::TypeScript | Language::JavaScript => {
            Some(tree_sitter_typescript::language_typescript())
        }
        Language::Kotlin => Some(tree_sitter_kotlin::language()),
        Language::C | Language::Cpp | Language::Unknown => None,
    }
}

/// Parse `source` with the language's grammar
///
/// Returns `Err` when no grammar exists, the grammar cannot be loaded, or the
/// parser gives up. A returned tree may still contain error nodes.
pub fn parse_source(language: Language, source: &str) -> Result<Tree, String> {
    let grammar = grammar_for(language).ok_or_else(|| format!("no grammar for {}", language))?;

    let mut parser = Parser::new();
    parser
        .set_language(&grammar)
        .map_err(|e| format!("Failed to set language: {}", e))?;

    parser
        .parse(source, None)
        .ok_or_else(|| "Failed to parse content".to_string())
}

// ═══════════════════════════════════════════════════════════════════════════
// Node Traversal Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Collect leaf nodes matching `predicate`, in source order
pub fn collect_leaves<'a, F>(root: &Node<'a>, predicate: F) -> Vec<Node<'a>>
where
    F: Fn(&Node<'a>) -> bool,
{
    let mut result = Vec::new();
    let mut stack = vec![*root];
    while let Some(current) = stack.pop() {
        if current.child_count() == 0 {
            if predicate(&current) {
                result.push(current);
            }
            continue;
        }
        // Reverse push keeps pre-order (source order) on pop
        for i in (0..current.child_count()).rev() {
            if let Some(child) = current.child(i) {
                stack.push(child);
            }
        }
    }
    result
}

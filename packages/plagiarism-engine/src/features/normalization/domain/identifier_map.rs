//! Per-document identifier map
//!
//! Maps each identifier spelling to a sequential placeholder in order of
//! first appearance. One map per normalization call, threaded explicitly
//! through the tokenizers, so concurrent normalizations never share state.

use std::collections::HashMap;

/// Placeholder prefix (`var_1`, `var_2`, ...)
pub const PLACEHOLDER_PREFIX: &str = "var_";

/// First-seen identifier → placeholder mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierMap {
    placeholders: HashMap<String, String>,
}

impl IdentifierMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Placeholder for `name`, allocating the next one on first sight
    pub fn placeholder_for(&mut self, name: &str) -> &str {
        let next = self.placeholders.len() + 1;
        self.placeholders
            .entry(name.to_string())
            .or_insert_with(|| format!("{}{}", PLACEHOLDER_PREFIX, next))
    }

    /// Placeholder already assigned to `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.placeholders.get(name).map(String::as_str)
    }

    /// Number of distinct identifiers seen
    pub fn len(&self) -> usize {
        self.placeholders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placeholders.is_empty()
    }
}

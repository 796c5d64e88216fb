//! Source language detection
//!
//! Language decides the comment syntax and whether a tree-sitter grammar
//! is available for structured identifier tokenization.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Source language of a submitted file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Java,
    Rust,
    Go,
    TypeScript,
    JavaScript,
    Kotlin,
    C,
    Cpp,
    Unknown,
}

impl Language {
    /// Detect language from a file name's extension
    ///
    /// # Example
    /// ```
    /// use plagiarism_engine::Language;
    ///
    /// assert_eq!(Language::from_filename("hw1/solution.cpp"), Language::Cpp);
    /// assert_eq!(Language::from_filename("Main.JAVA"), Language::Java);
    /// assert_eq!(Language::from_filename("README"), Language::Unknown);
    /// ```
    pub fn from_filename(filename: &str) -> Self {
        Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Self::Unknown)
    }

    /// Detect language from a bare extension (without the dot)
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "py" | "pyw" | "ipynb" => Self::Python,
            "java" => Self::Java,
            "rs" => Self::Rust,
            "go" => Self::Go,
            "ts" | "tsx" => Self::TypeScript,
            "js" | "jsx" | "mjs" | "cjs" => Self::JavaScript,
            "kt" | "kts" => Self::Kotlin,
            "c" | "h" => Self::C,
            "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" => Self::Cpp,
            _ => Self::Unknown,
        }
    }

    /// Language name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Java => "java",
            Self::Rust => "rust",
            Self::Go => "go",
            Self::TypeScript => "typescript",
            Self::JavaScript => "javascript",
            Self::Kotlin => "kotlin",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::Unknown => "unknown",
        }
    }

    /// Python-style `#` line comments instead of `//` and `/* */`
    pub fn uses_hash_comments(&self) -> bool {
        matches!(self, Self::Python)
    }

    /// Whether a bundled tree-sitter grammar covers this language
    pub fn has_grammar(&self) -> bool {
        matches!(
            self,
            Self::Python
                | Self::Java
                | Self::Rust
                | Self::Go
                | Self::TypeScript
                | Self::JavaScript
                | Self::Kotlin
        )
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::Unknown
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

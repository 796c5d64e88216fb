//! Shared domain models

pub mod document;
pub mod language;

pub use document::Document;
pub use language::Language;

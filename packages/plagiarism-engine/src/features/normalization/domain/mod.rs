//! Normalization Domain Models
//!
//! Pure data: the per-document identifier map, the reserved word table and
//! the boilerplate template. No tokenizer dependencies.

pub mod identifier_map;
pub mod reserved;
pub mod template;

pub use identifier_map::{IdentifierMap, PLACEHOLDER_PREFIX};
pub use reserved::{is_literal_keyword, is_reserved, NUMBER_PLACEHOLDER, STRING_PLACEHOLDER};
pub use template::{FilteredSource, Template};

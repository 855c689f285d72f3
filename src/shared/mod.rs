//! Cross-cutting helpers: configuration, precondition errors, typed metadata
//! and text utilities.

pub mod config;
pub mod dispatch;
pub mod metadata;
pub mod text;

pub use dispatch::{ErrorKind, requires, throws};
pub use metadata::MetadataRegistry;

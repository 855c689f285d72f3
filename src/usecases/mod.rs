//! Application use cases. Compose domain values and drive ports.

pub mod artifacts;
pub mod authority;
pub mod composer;

pub use artifacts::ArtifactService;
pub use authority::{annotate, annotate_for, annotate_text, leading_marker, trailing_marker};
pub use composer::MessageComposer;

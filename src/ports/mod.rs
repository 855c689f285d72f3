//! Port traits. API boundaries for the hexagon.
//!
//! Outbound only: the host bot framework calls the use cases directly.

pub mod outbound;
pub mod pending;

pub use outbound::{ImageUploader, TextStore};
pub use pending::PendingIo;

//! Core domain layer. No external I/O dependencies.
//!
//! Message entities, placeholder sets and error types live here.

pub mod entities;
pub mod errors;
pub mod placeholder;

pub use entities::{
    Authority, MessageChain, MessageChainBuilder, Segment, as_message_chain, as_single_chain_list,
    followed_by,
};
pub use errors::{ConfigurationFault, DomainError};
pub use placeholder::{Placeholder, PlaceholderBuilder, Slot, build_placeholder};

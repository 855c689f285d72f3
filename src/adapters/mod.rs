//! Infrastructure adapters. Implement outbound ports.
//!
//! Filesystem and media. Map errors to DomainError.

pub mod media;
pub mod persistence;

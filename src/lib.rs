//! sayaka-common: shared helpers for the Sayaka chat bot, in Hexagonal Architecture.
//!
//! Lazy async text store, typed precondition errors, placeholder sets and
//! authority-annotated message composition.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;

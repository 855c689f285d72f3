//! Persistence adapters: filesystem text store and JSON codec.

pub mod fs_store;
pub mod json_codec;

pub use fs_store::FsTextStore;
pub use json_codec::JsonCodec;

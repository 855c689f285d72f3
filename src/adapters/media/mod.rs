//! Media adapters. Implement ImageUploader.

pub mod mock_uploader;

pub use mock_uploader::MockImageUploader;

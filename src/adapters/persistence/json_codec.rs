//! JSON encoding for persisted artifacts and plugin data.
//!
//! Constructed explicitly and handed to whoever needs it; there is no
//! process-wide instance.

use crate::domain::DomainError;
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    pub fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, DomainError> {
        let res = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        res.map_err(|e| DomainError::Json(e.to_string()))
    }

    pub fn from_json<T: DeserializeOwned>(&self, text: &str) -> Result<T, DomainError> {
        serde_json::from_str(text).map_err(|e| DomainError::Json(e.to_string()))
    }
}

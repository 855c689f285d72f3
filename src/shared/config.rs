//! Application configuration. Storage paths and composition defaults.

use crate::domain::DomainError;
use serde::Deserialize;

/// Default root for text artifacts written by the plugin.
pub const DEFAULT_DATA_DIR: &str = "./data";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Base directory for relative store paths. Read from SAYAKA_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Spaces per indent level in composed messages. Read from SAYAKA_INDENT_WIDTH.
    #[serde(default)]
    pub indent_width: Option<usize>,

    /// Pretty-print JSON artifacts. Read from SAYAKA_JSON_PRETTY.
    #[serde(default)]
    pub json_pretty: Option<bool>,

    /// Log filter used when RUST_LOG is unset. Read from SAYAKA_LOG.
    #[serde(default)]
    pub log: Option<String>,
}

impl AppConfig {
    /// Loads `.env`, then SAYAKA_* variables and the optional SAYAKA_CONFIG file.
    pub fn load() -> Result<Self, DomainError> {
        dotenv::dotenv().ok();
        let file = std::env::var("SAYAKA_CONFIG").ok();
        Self::load_from(file.as_deref())
    }

    /// Environment plus `file`, if given. A missing or malformed file is an error.
    pub fn load_from(file: Option<&str>) -> Result<Self, DomainError> {
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("SAYAKA").try_parsing(true));
        if let Some(path) = file {
            c = c.add_source(config::File::with_name(path));
        }
        c.build()
            .and_then(|built| built.try_deserialize())
            .map_err(|e| DomainError::Config(e.to_string()))
    }

    pub fn data_dir_or_default(&self) -> &str {
        self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR)
    }

    /// Defaults to 4.
    pub fn indent_width_or_default(&self) -> usize {
        self.indent_width.unwrap_or(4)
    }

    pub fn json_pretty_or_default(&self) -> bool {
        self.json_pretty.unwrap_or(false)
    }

    pub fn log_or_default(&self) -> &str {
        self.log.as_deref().unwrap_or("info")
    }
}

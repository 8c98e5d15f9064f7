//! App Configuration
//!
//! Title, input placeholder and the seed list, read from the JSON document
//! compiled into the binary.

use serde::Deserialize;
use thiserror::Error;

use crate::models::Todo;

const EMBEDDED_CONFIG: &str = include_str!("../config/app.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config document: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Page heading
    pub title: String,
    /// Placeholder of the input box
    pub placeholder: String,
    /// Items the store starts with on every load
    pub seed: Vec<Todo>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "TODO".to_string(),
            placeholder: "Currently typing".to_string(),
            seed: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load the embedded document, falling back to defaults (empty seed)
    pub fn embedded() -> Self {
        match Self::from_json(EMBEDDED_CONFIG) {
            Ok(config) => {
                log::info!("[CONFIG] loaded {} seed items", config.seed.len());
                config
            }
            Err(e) => {
                log::error!("[CONFIG] {}, using defaults", e);
                Self::default()
            }
        }
    }
}

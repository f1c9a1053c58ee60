//! Application Configuration
//!
//! Optional JSON settings embedded in the host page as
//! `<script id="app-config" type="application/json">`.

use std::collections::HashSet;
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::models::{CatalogItem, Filter};

/// Element id of the inline config block
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProductId(u32),

    #[error("Product {0} has an empty name")]
    EmptyProductName(u32),

    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for every rendered price
    pub currency_symbol: String,
    /// Filter the todo list starts with
    pub default_filter: Filter,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// Replaces the built-in products when set
    pub catalog: Option<Vec<CatalogItem>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            default_filter: Filter::All,
            log_level: "info".to_string(),
            catalog: None,
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.level_filter()?;
        if let Some(items) = &self.catalog {
            let mut seen = HashSet::new();
            for item in items {
                if !seen.insert(item.id) {
                    return Err(ConfigError::DuplicateProductId(item.id));
                }
                if item.name.trim().is_empty() {
                    return Err(ConfigError::EmptyProductName(item.id));
                }
            }
        }
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    pub fn catalog(&self) -> Catalog {
        match &self.catalog {
            Some(items) => Catalog::from_items(items.clone()),
            None => Catalog::builtin(),
        }
    }

    /// Read the inline config block from the current document.
    /// `Ok(None)` when the page carries no config.
    pub fn from_document() -> Result<Option<Self>, ConfigError> {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        else {
            return Ok(None);
        };
        let json = element.text_content().unwrap_or_default();
        if json.trim().is_empty() {
            return Ok(None);
        }
        Self::from_json(&json).map(Some)
    }

    /// Format a price with the configured symbol
    pub fn format_price(&self, amount: u64) -> String {
        format!("{}{}", self.currency_symbol, amount)
    }
}

//! Dashboard configuration loading

use crate::core::query::{QueryParams, QueryState};
use crate::storage::{InMemoryOrderStore, JsonOrderSource, SampleOrderSource};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration of the orders dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// JSON file holding the order records; the sample orders when absent
    #[serde(default)]
    pub orders_file: Option<PathBuf>,

    /// Query state the orders view opens with
    #[serde(default)]
    pub default_query: QueryParams,

    /// Symbol printed in front of money amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl DashboardConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path))?;
        let config = Self::from_yaml_str(&content)
            .with_context(|| format!("failed to parse config file {}", path))?;
        tracing::info!(path, "loaded dashboard config");
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Default configuration: sample orders, default query, dollars
    pub fn default_config() -> Self {
        Self {
            orders_file: None,
            default_query: QueryParams::default(),
            currency_symbol: default_currency_symbol(),
        }
    }

    /// Typed initial query state
    ///
    /// Unknown sort fields or status filters in the config are an error,
    /// not silently replaced by defaults.
    pub fn initial_state(&self) -> Result<QueryState> {
        QueryState::try_from(&self.default_query).context("invalid default_query in config")
    }

    /// Build the order snapshot from the configured source
    pub fn load_store(&self) -> Result<InMemoryOrderStore> {
        let store = match &self.orders_file {
            Some(path) => InMemoryOrderStore::load(&JsonOrderSource::new(path))
                .with_context(|| format!("failed to load orders from {}", path.display()))?,
            None => InMemoryOrderStore::load(&SampleOrderSource)?,
        };
        Ok(store)
    }
}

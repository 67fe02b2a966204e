use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

use super::environment::{EnvLookup, ProcessEnv};
use super::types::RerankerSupplier;
use super::validation::require_env_key;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RerankerSettings {
    pub supplier: Option<RerankerSupplier>,
    pub model: Option<String>,
    pub top_n: u32,
    pub api_key: Option<String>,
}

/// Reranking settings. Without a supplier reranking is disabled and no key is
/// needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RerankerSettings", into = "RerankerSettings")]
pub struct RerankerConfig {
    supplier: Option<RerankerSupplier>,
    model: Option<String>,
    top_n: u32,
    api_key: Option<String>,
}

impl RerankerConfig {
    pub fn new(settings: RerankerSettings) -> Result<Self, ConfigError> {
        Self::from_settings(settings, &ProcessEnv)
    }

    pub fn from_settings(
        settings: RerankerSettings,
        env: &dyn EnvLookup,
    ) -> Result<Self, ConfigError> {
        let RerankerSettings {
            supplier,
            model,
            top_n,
            api_key,
        } = settings;

        let Some(supplier) = supplier else {
            return Ok(Self {
                supplier: None,
                model,
                top_n,
                api_key,
            });
        };

        let model = model.unwrap_or_else(|| {
            debug!(%supplier, model = supplier.default_model(), "Using default reranker model");
            supplier.default_model().to_string()
        });
        // Any explicit key is replaced by the supplier's environment variable.
        let api_key = require_env_key(supplier.as_str(), supplier.api_key_env_var(), env)?;

        Ok(Self {
            supplier: Some(supplier),
            model: Some(model),
            top_n,
            api_key: Some(api_key),
        })
    }

    pub fn supplier(&self) -> Option<RerankerSupplier> {
        self.supplier
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn top_n(&self) -> u32 {
        self.top_n
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.supplier.is_some()
    }

    pub fn settings(&self) -> RerankerSettings {
        RerankerSettings::from(self.clone())
    }
}

impl Default for RerankerConfig {
    fn default() -> Self {
        let RerankerSettings {
            supplier: _,
            model,
            top_n,
            api_key,
        } = RerankerSettings::default();
        Self {
            supplier: None,
            model,
            top_n,
            api_key,
        }
    }
}

impl TryFrom<RerankerSettings> for RerankerConfig {
    type Error = ConfigError;

    fn try_from(settings: RerankerSettings) -> Result<Self, Self::Error> {
        Self::new(settings)
    }
}

impl From<RerankerConfig> for RerankerSettings {
    fn from(config: RerankerConfig) -> Self {
        Self {
            supplier: config.supplier,
            model: config.model,
            top_n: config.top_n,
            api_key: config.api_key,
        }
    }
}

use crate::error::ConfigError;

use super::endpoint::EndpointSettings;
use super::environment::EnvLookup;
use super::reranker::RerankerSettings;
use super::retrieval::{AssistantConfig, AssistantSettings, RetrievalSettings};
use super::types::IngestionConfig;

/// Layers changes onto [`AssistantSettings`] before validating them once.
#[derive(Debug, Default)]
pub struct AssistantBuilder {
    pub(super) settings: AssistantSettings,
}

impl AssistantBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: AssistantSettings) -> Self {
        Self { settings }
    }

    pub fn with_llm<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut EndpointSettings),
    {
        update(&mut self.settings.retrieval_config.llm_config);
        self
    }

    pub fn with_reranker<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut RerankerSettings),
    {
        update(&mut self.settings.retrieval_config.reranker_config);
        self
    }

    pub fn with_retrieval<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut RetrievalSettings),
    {
        update(&mut self.settings.retrieval_config);
        self
    }

    pub fn with_ingestion<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut IngestionConfig),
    {
        update(&mut self.settings.ingestion_config);
        self
    }

    pub fn settings(&self) -> &AssistantSettings {
        &self.settings
    }

    pub fn build(self, env: &dyn EnvLookup) -> Result<AssistantConfig, ConfigError> {
        AssistantConfig::from_settings(self.settings, env)
    }
}

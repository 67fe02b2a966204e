use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::endpoint::{EndpointSettings, LlmEndpointConfig};
use super::environment::{EnvLookup, ProcessEnv};
use super::reranker::{RerankerConfig, RerankerSettings};
use super::types::{IngestionConfig, WorkflowConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalSettings {
    pub reranker_config: RerankerSettings,
    pub llm_config: EndpointSettings,
    pub max_history: u32,
    pub max_files: u32,
    pub prompt: Option<String>,
    pub workflow_config: Option<WorkflowConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RetrievalSettings")]
pub struct RetrievalConfig {
    pub reranker_config: RerankerConfig,
    pub llm_config: LlmEndpointConfig,
    pub max_history: u32,
    pub max_files: u32,
    pub prompt: Option<String>,
    pub workflow_config: Option<WorkflowConfig>,
}

impl RetrievalConfig {
    pub fn from_settings(
        settings: RetrievalSettings,
        env: &dyn EnvLookup,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            reranker_config: RerankerConfig::from_settings(settings.reranker_config, env)?,
            llm_config: LlmEndpointConfig::from_settings(settings.llm_config, env)?,
            max_history: settings.max_history,
            max_files: settings.max_files,
            prompt: settings.prompt,
            workflow_config: settings.workflow_config,
        })
    }

    /// All defaults. Still fails when the default supplier's key is unset.
    pub fn with_defaults(env: &dyn EnvLookup) -> Result<Self, ConfigError> {
        Self::from_settings(RetrievalSettings::default(), env)
    }

    pub fn settings(&self) -> RetrievalSettings {
        RetrievalSettings {
            reranker_config: self.reranker_config.settings(),
            llm_config: self.llm_config.settings(),
            max_history: self.max_history,
            max_files: self.max_files,
            prompt: self.prompt.clone(),
            workflow_config: self.workflow_config.clone(),
        }
    }
}

impl TryFrom<RetrievalSettings> for RetrievalConfig {
    type Error = ConfigError;

    fn try_from(settings: RetrievalSettings) -> Result<Self, Self::Error> {
        Self::from_settings(settings, &ProcessEnv)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantSettings {
    pub retrieval_config: RetrievalSettings,
    pub ingestion_config: IngestionConfig,
}

/// Top-level configuration of a RAG assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AssistantSettings")]
pub struct AssistantConfig {
    pub retrieval_config: RetrievalConfig,
    pub ingestion_config: IngestionConfig,
}

impl AssistantConfig {
    pub fn from_settings(
        settings: AssistantSettings,
        env: &dyn EnvLookup,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            retrieval_config: RetrievalConfig::from_settings(settings.retrieval_config, env)?,
            ingestion_config: settings.ingestion_config,
        })
    }

    pub fn with_defaults(env: &dyn EnvLookup) -> Result<Self, ConfigError> {
        Self::from_settings(AssistantSettings::default(), env)
    }

    pub fn settings(&self) -> AssistantSettings {
        AssistantSettings {
            retrieval_config: self.retrieval_config.settings(),
            ingestion_config: self.ingestion_config.clone(),
        }
    }
}

impl TryFrom<AssistantSettings> for AssistantConfig {
    type Error = ConfigError;

    fn try_from(settings: AssistantSettings) -> Result<Self, Self::Error> {
        Self::from_settings(settings, &ProcessEnv)
    }
}

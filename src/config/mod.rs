//! Configuration models for the RAG assistant.
//!
//! This module provides:
//! - A static registry of model metadata keyed by supplier and model-name prefix
//! - Validated LLM endpoint and reranker configs
//! - Composite retrieval, ingestion and assistant settings
//! - Injectable environment lookup and JSON file loading

mod builder;
mod constants;
mod defaults;
mod endpoint;
mod environment;
mod loader;
mod registry;
mod reranker;
mod retrieval;
mod types;
mod validation;

pub use builder::AssistantBuilder;
pub use endpoint::{EndpointSettings, LlmEndpointConfig};
pub use environment::{EnvLookup, MapEnv, ProcessEnv};
pub use registry::{ModelConfig, ModelRegistry};
pub use reranker::{RerankerConfig, RerankerSettings};
pub use retrieval::{AssistantConfig, AssistantSettings, RetrievalConfig, RetrievalSettings};
pub use types::{
    BrainConfig, IngestionConfig, MegaparseConfig, ModelSupplier, NodeConfig, ParseMethod,
    ParseStrategy, ParserConfig, RerankerSupplier, SplitterConfig, WorkflowConfig,
};

pub use constants::{DEFAULT_LLM_MODEL, FALLBACK_TOKENIZER};

//! Typed configuration for RAG assistants.
//!
//! Selects language-model suppliers, resolves per-model metadata (context
//! length, tokenizer), configures reranking, and composes retrieval and
//! ingestion settings. Every config that needs an API key is validated when it
//! is built; environment access goes through [`EnvLookup`] so callers can inject
//! their own source.

pub mod config;
pub mod error;

pub use config::{
    AssistantBuilder, AssistantConfig, AssistantSettings, BrainConfig, EndpointSettings,
    EnvLookup, IngestionConfig, LlmEndpointConfig, MapEnv, MegaparseConfig, ModelConfig,
    ModelRegistry, ModelSupplier, NodeConfig, ParseMethod, ParseStrategy, ParserConfig,
    ProcessEnv, RerankerConfig, RerankerSettings, RerankerSupplier, RetrievalConfig,
    RetrievalSettings, SplitterConfig, WorkflowConfig,
};
pub use error::ConfigError;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

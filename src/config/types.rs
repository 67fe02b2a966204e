use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ConfigError;

use super::constants::{DEFAULT_COHERE_RERANKER, DEFAULT_JINA_RERANKER};

/// Organizations whose language models can back an LLM endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelSupplier {
    #[default]
    OpenAI,
    Azure,
    Anthropic,
    Meta,
    Mistral,
    Groq,
}

impl ModelSupplier {
    pub const ALL: [ModelSupplier; 6] = [
        ModelSupplier::OpenAI,
        ModelSupplier::Azure,
        ModelSupplier::Anthropic,
        ModelSupplier::Meta,
        ModelSupplier::Mistral,
        ModelSupplier::Groq,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModelSupplier::OpenAI => "openai",
            ModelSupplier::Azure => "azure",
            ModelSupplier::Anthropic => "anthropic",
            ModelSupplier::Meta => "meta",
            ModelSupplier::Mistral => "mistral",
            ModelSupplier::Groq => "groq",
        }
    }

    pub fn api_key_env_var(self) -> &'static str {
        match self {
            ModelSupplier::OpenAI => "OPENAI_API_KEY",
            ModelSupplier::Azure => "AZURE_API_KEY",
            ModelSupplier::Anthropic => "ANTHROPIC_API_KEY",
            ModelSupplier::Meta => "META_API_KEY",
            ModelSupplier::Mistral => "MISTRAL_API_KEY",
            ModelSupplier::Groq => "GROQ_API_KEY",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ModelSupplier::OpenAI => "OpenAI",
            ModelSupplier::Azure => "Azure OpenAI",
            ModelSupplier::Anthropic => "Anthropic",
            ModelSupplier::Meta => "Meta",
            ModelSupplier::Mistral => "Mistral",
            ModelSupplier::Groq => "Groq",
        }
    }
}

impl fmt::Display for ModelSupplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelSupplier {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelSupplier::ALL
            .into_iter()
            .find(|supplier| supplier.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownSupplier(s.to_string()))
    }
}

/// Reranking services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RerankerSupplier {
    Cohere,
    Jina,
}

impl RerankerSupplier {
    pub fn as_str(self) -> &'static str {
        match self {
            RerankerSupplier::Cohere => "cohere",
            RerankerSupplier::Jina => "jina",
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            RerankerSupplier::Cohere => DEFAULT_COHERE_RERANKER,
            RerankerSupplier::Jina => DEFAULT_JINA_RERANKER,
        }
    }

    pub fn api_key_env_var(self) -> &'static str {
        match self {
            RerankerSupplier::Cohere => "COHERE_API_KEY",
            RerankerSupplier::Jina => "JINA_API_KEY",
        }
    }
}

impl fmt::Display for RerankerSupplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RerankerSupplier {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cohere" => Ok(RerankerSupplier::Cohere),
            "jina" => Ok(RerankerSupplier::Jina),
            _ => Err(ConfigError::UnknownSupplier(s.to_string())),
        }
    }
}

/// Identity of a knowledge base ("brain").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrainConfig {
    #[serde(default)]
    pub brain_id: Option<Uuid>,
    pub name: String,
}

impl BrainConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            brain_id: None,
            name: name.into(),
        }
    }

    /// Same as `new`, with a freshly generated id.
    pub fn with_generated_id(name: impl Into<String>) -> Self {
        Self {
            brain_id: Some(Uuid::new_v4()),
            name: name.into(),
        }
    }

    pub fn id(&self) -> Option<Uuid> {
        self.brain_id
    }
}

/// A node of a retrieval workflow graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
    pub name: String,
    /// Names of the nodes this node links to.
    #[serde(default)]
    pub edges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowConfig {
    pub name: String,
    pub nodes: Vec<NodeConfig>,
}

impl WorkflowConfig {
    pub fn node(&self, name: &str) -> Option<&NodeConfig> {
        self.nodes.iter().find(|node| node.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    pub chunk_size: u32,
    pub chunk_overlap: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMethod {
    #[default]
    Unstructured,
    LlamaParser,
    MegaparseVision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseStrategy {
    #[default]
    Auto,
    Fast,
    HiRes,
}

/// Settings forwarded to the document parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MegaparseConfig {
    pub method: ParseMethod,
    pub strategy: ParseStrategy,
    pub check_table: bool,
    pub parsing_instruction: Option<String>,
    pub model_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub splitter_config: SplitterConfig,
    pub megaparse_config: MegaparseConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestionConfig {
    pub parser_config: ParserConfig,
}

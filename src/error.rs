use thiserror::Error;

/// Errors raised while constructing or mutating configuration objects.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "The API key for supplier '{supplier}' is not set. Please set the environment variable: {env_var}"
    )]
    MissingApiKey { supplier: String, env_var: String },

    #[error("Cannot find the corresponding supplier for model {0}")]
    UnknownModel(String),

    #[error("Invalid mapping: {source_field} or {target_field} does not exist.")]
    InvalidMapping {
        source_field: String,
        target_field: String,
    },

    #[error("Unknown supplier '{0}'")]
    UnknownSupplier(String),

    #[error("{key} contains invalid UTF-8")]
    InvalidEnvValue { key: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ConfigError;

use super::constants::FALLBACK_TOKENIZER;
use super::environment::{EnvLookup, ProcessEnv};
use super::registry::ModelRegistry;
use super::types::ModelSupplier;
use super::validation::{is_blank, require_env_key, resolve_api_key};

/// Unvalidated endpoint settings, as written in a settings file.
///
/// Missing fields take their defaults. Turn them into a usable
/// [`LlmEndpointConfig`] with [`LlmEndpointConfig::from_settings`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointSettings {
    pub supplier: ModelSupplier,
    pub model: String,
    pub context_length: Option<u32>,
    pub tokenizer_hub: Option<String>,
    pub llm_base_url: Option<String>,
    /// Overrides the supplier's `<SUPPLIER>_API_KEY` variable name.
    pub env_variable_name: Option<String>,
    pub llm_api_key: Option<String>,
    pub max_input_tokens: u32,
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub streaming: bool,
    /// Custom system prompt for this endpoint.
    pub prompt: Option<String>,
}

/// A validated LLM endpoint: model metadata resolved, API key present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EndpointSettings", into = "EndpointSettings")]
pub struct LlmEndpointConfig {
    supplier: ModelSupplier,
    model: String,
    context_length: Option<u32>,
    tokenizer_hub: Option<String>,
    llm_base_url: Option<String>,
    env_variable_name: Option<String>,
    llm_api_key: String,
    max_input_tokens: u32,
    max_output_tokens: u32,
    temperature: f32,
    streaming: bool,
    prompt: Option<String>,
}

impl LlmEndpointConfig {
    /// Validates `settings` against the process environment.
    pub fn new(settings: EndpointSettings) -> Result<Self, ConfigError> {
        Self::from_settings(settings, &ProcessEnv)
    }

    pub fn from_settings(
        settings: EndpointSettings,
        env: &dyn EnvLookup,
    ) -> Result<Self, ConfigError> {
        let EndpointSettings {
            supplier,
            model,
            context_length,
            tokenizer_hub,
            llm_base_url,
            env_variable_name,
            llm_api_key,
            max_input_tokens,
            max_output_tokens,
            temperature,
            streaming,
            prompt,
        } = settings;

        let (context_length, tokenizer_hub) = match ModelRegistry::lookup(supplier, &model) {
            Some(found) => {
                debug!(
                    %supplier,
                    model = %model,
                    context_length = found.context_length,
                    tokenizer = found.tokenizer_hub,
                    "Resolved model metadata"
                );
                (
                    Some(found.context_length),
                    Some(found.tokenizer_hub.to_string()),
                )
            }
            None => {
                debug!(%supplier, model = %model, "Model not in registry, keeping explicit metadata");
                (context_length, tokenizer_hub)
            }
        };

        let env_var = env_variable_name
            .as_deref()
            .unwrap_or_else(|| supplier.api_key_env_var());
        let llm_api_key = resolve_api_key(llm_api_key, supplier.as_str(), env_var, env)?;

        Ok(Self {
            supplier,
            model,
            context_length,
            tokenizer_hub,
            llm_base_url,
            env_variable_name,
            llm_api_key,
            max_input_tokens,
            max_output_tokens,
            temperature,
            streaming,
            prompt,
        })
    }

    pub fn supplier(&self) -> ModelSupplier {
        self.supplier
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn context_length(&self) -> Option<u32> {
        self.context_length
    }

    pub fn tokenizer_hub(&self) -> Option<&str> {
        self.tokenizer_hub.as_deref()
    }

    pub fn fallback_tokenizer(&self) -> &'static str {
        FALLBACK_TOKENIZER
    }

    /// Tokenizer to count tokens with: the resolved one, else the fallback.
    pub fn effective_tokenizer(&self) -> &str {
        match self.tokenizer_hub.as_deref() {
            Some(tokenizer) => tokenizer,
            None => {
                warn!(model = %self.model, fallback = FALLBACK_TOKENIZER, "No tokenizer known for model");
                FALLBACK_TOKENIZER
            }
        }
    }

    pub fn llm_base_url(&self) -> Option<&str> {
        self.llm_base_url.as_deref()
    }

    /// Name of the variable the API key is read from.
    pub fn env_variable_name(&self) -> &str {
        self.env_variable_name
            .as_deref()
            .unwrap_or_else(|| self.supplier.api_key_env_var())
    }

    pub fn api_key(&self) -> &str {
        &self.llm_api_key
    }

    pub fn max_input_tokens(&self) -> u32 {
        self.max_input_tokens
    }

    pub fn max_output_tokens(&self) -> u32 {
        self.max_output_tokens
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn streaming(&self) -> bool {
        self.streaming
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn settings(&self) -> EndpointSettings {
        EndpointSettings::from(self.clone())
    }

    /// Switches to `model`, picking its supplier from the registry.
    ///
    /// Metadata is re-resolved and the API key is always re-read from the
    /// environment. On error `self` is left untouched.
    pub fn set_model(&mut self, model: &str, env: &dyn EnvLookup) -> Result<(), ConfigError> {
        let supplier = ModelRegistry::supplier_for(model)
            .ok_or_else(|| ConfigError::UnknownModel(model.to_string()))?;

        let mut settings = self.settings();
        if supplier != settings.supplier {
            settings.env_variable_name = None;
        }
        settings.supplier = supplier;
        settings.model = model.to_string();
        settings.context_length = None;
        settings.tokenizer_hub = None;
        settings.llm_api_key = None;

        *self = Self::from_settings(settings, env)?;
        debug!(%supplier, model, "Switched endpoint model");
        Ok(())
    }

    pub fn set_api_key(&mut self, key: impl Into<String>) -> Result<(), ConfigError> {
        let key = key.into();
        if is_blank(&key) {
            return Err(ConfigError::MissingApiKey {
                supplier: self.supplier.to_string(),
                env_var: self.env_variable_name().to_string(),
            });
        }
        self.llm_api_key = key;
        Ok(())
    }

    /// Discards the current key and reads it again from the environment.
    pub fn refresh_api_key(&mut self, env: &dyn EnvLookup) -> Result<(), ConfigError> {
        self.llm_api_key =
            require_env_key(self.supplier.as_str(), self.env_variable_name(), env)?;
        Ok(())
    }

    /// Copies fields of `record` onto this config.
    ///
    /// `mapping` holds `(record_field, config_field)` pairs. Every pair is
    /// checked before anything changes, and the result is validated again.
    pub fn set_from_record<T: Serialize>(
        &mut self,
        record: &T,
        mapping: &[(&str, &str)],
        env: &dyn EnvLookup,
    ) -> Result<(), ConfigError> {
        let source = serde_json::to_value(record)?;
        let mut target = serde_json::to_value(self.settings())?;

        for (source_field, target_field) in mapping {
            match (source.get(*source_field), target.get_mut(*target_field)) {
                (Some(value), Some(slot)) => *slot = value.clone(),
                _ => {
                    return Err(ConfigError::InvalidMapping {
                        source_field: source_field.to_string(),
                        target_field: target_field.to_string(),
                    });
                }
            }
        }

        let settings: EndpointSettings = serde_json::from_value(target)?;
        *self = Self::from_settings(settings, env)?;
        Ok(())
    }
}

impl TryFrom<EndpointSettings> for LlmEndpointConfig {
    type Error = ConfigError;

    fn try_from(settings: EndpointSettings) -> Result<Self, Self::Error> {
        Self::new(settings)
    }
}

impl From<LlmEndpointConfig> for EndpointSettings {
    fn from(config: LlmEndpointConfig) -> Self {
        Self {
            supplier: config.supplier,
            model: config.model,
            context_length: config.context_length,
            tokenizer_hub: config.tokenizer_hub,
            llm_base_url: config.llm_base_url,
            env_variable_name: config.env_variable_name,
            llm_api_key: Some(config.llm_api_key),
            max_input_tokens: config.max_input_tokens,
            max_output_tokens: config.max_output_tokens,
            temperature: config.temperature,
            streaming: config.streaming,
            prompt: config.prompt,
        }
    }
}

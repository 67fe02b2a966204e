//! Static model metadata, keyed by supplier and model-name prefix.
//!
//! Model names carry version and date suffixes (`gpt-4o-2024-08-06`,
//! `claude-3-opus-20240229`), so lookups match registry keys as prefixes of the
//! requested name. Keys are scanned in registration order and the first match
//! wins, which is why longer keys such as `gpt-4-turbo` are listed before the
//! shorter `gpt-4`.

use serde::Serialize;

use super::types::ModelSupplier;

/// Context window and tokenizer of a known model family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelConfig {
    pub context_length: u32,
    pub tokenizer_hub: &'static str,
}

const fn model(context_length: u32, tokenizer_hub: &'static str) -> ModelConfig {
    ModelConfig {
        context_length,
        tokenizer_hub,
    }
}

type SupplierTable = (ModelSupplier, &'static [(&'static str, ModelConfig)]);

const OPENAI_MODELS: &[(&str, ModelConfig)] = &[
    ("gpt-4o", model(128_000, "Xenova/gpt-4o")),
    ("gpt-4o-mini", model(128_000, "Xenova/gpt-4o")),
    ("gpt-4-turbo", model(128_000, "Xenova/gpt-4")),
    ("gpt-4", model(8_192, "Xenova/gpt-4")),
    ("gpt-3.5-turbo", model(16_385, "Xenova/gpt-3.5-turbo")),
    ("text-embedding-3-large", model(8_191, "Xenova/text-embedding-ada-002")),
    ("text-embedding-3-small", model(8_191, "Xenova/text-embedding-ada-002")),
    ("text-embedding-ada-002", model(8_191, "Xenova/text-embedding-ada-002")),
];

const ANTHROPIC_MODELS: &[(&str, ModelConfig)] = &[
    ("claude-3-5-sonnet", model(200_000, "Xenova/claude-tokenizer")),
    ("claude-3-opus", model(200_000, "Xenova/claude-tokenizer")),
    ("claude-3-sonnet", model(200_000, "Xenova/claude-tokenizer")),
    ("claude-3-haiku", model(200_000, "Xenova/claude-tokenizer")),
    ("claude-2-1", model(200_000, "Xenova/claude-tokenizer")),
    ("claude-2-0", model(100_000, "Xenova/claude-tokenizer")),
    ("claude-instant-1-2", model(100_000, "Xenova/claude-tokenizer")),
];

// Groq hosts the same Llama families, so both suppliers share this table.
const LLAMA_MODELS: &[(&str, ModelConfig)] = &[
    ("llama-3.1", model(128_000, "Xenova/Meta-Llama-3.1-Tokenizer")),
    ("llama-3", model(8_192, "Xenova/llama3-tokenizer-new")),
    ("llama-2", model(4_096, "Xenova/llama2-tokenizer")),
    ("code-llama", model(16_384, "Xenova/llama-code-tokenizer")),
];

const MISTRAL_MODELS: &[(&str, ModelConfig)] = &[
    ("mistral-large", model(128_000, "Xenova/mistral-tokenizer-v3")),
    ("mistral-small", model(128_000, "Xenova/mistral-tokenizer-v3")),
    ("mistral-nemo", model(128_000, "Xenova/Mistral-Nemo-Instruct-Tokenizer")),
    ("codestral", model(32_000, "Xenova/mistral-tokenizer-v3")),
];

const AZURE_MODELS: &[(&str, ModelConfig)] = &[];

const REGISTRY: &[SupplierTable] = &[
    (ModelSupplier::OpenAI, OPENAI_MODELS),
    (ModelSupplier::Anthropic, ANTHROPIC_MODELS),
    (ModelSupplier::Meta, LLAMA_MODELS),
    (ModelSupplier::Groq, LLAMA_MODELS),
    (ModelSupplier::Mistral, MISTRAL_MODELS),
    (ModelSupplier::Azure, AZURE_MODELS),
];

/// Read-only view over the built-in model table.
pub struct ModelRegistry;

impl ModelRegistry {
    /// Suppliers in the order reverse lookups scan them.
    pub fn suppliers() -> impl Iterator<Item = ModelSupplier> {
        REGISTRY.iter().map(|(supplier, _)| *supplier)
    }

    /// Registered `(prefix, config)` pairs for `supplier`, in match order.
    pub fn entries(supplier: ModelSupplier) -> &'static [(&'static str, ModelConfig)] {
        REGISTRY
            .iter()
            .find(|(candidate, _)| *candidate == supplier)
            .map(|(_, models)| *models)
            .unwrap_or(&[])
    }

    pub fn lookup(supplier: ModelSupplier, model_name: &str) -> Option<ModelConfig> {
        Self::entries(supplier)
            .iter()
            .find(|(prefix, _)| model_name.starts_with(prefix))
            .map(|(_, config)| *config)
    }

    /// First supplier (in registry order) with a key that prefixes `model_name`.
    pub fn supplier_for(model_name: &str) -> Option<ModelSupplier> {
        REGISTRY
            .iter()
            .find(|(_, models)| {
                models
                    .iter()
                    .any(|(prefix, _)| model_name.starts_with(prefix))
            })
            .map(|(supplier, _)| *supplier)
    }
}

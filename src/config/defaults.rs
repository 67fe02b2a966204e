use super::constants::*;
use super::endpoint::EndpointSettings;
use super::reranker::RerankerSettings;
use super::retrieval::RetrievalSettings;
use super::types::{MegaparseConfig, ModelSupplier, ParseMethod, ParseStrategy, SplitterConfig};

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            supplier: ModelSupplier::OpenAI,
            model: DEFAULT_LLM_MODEL.to_string(),
            context_length: None,
            tokenizer_hub: None,
            llm_base_url: None,
            env_variable_name: None,
            llm_api_key: None,
            max_input_tokens: DEFAULT_MAX_INPUT_TOKENS,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            streaming: true,
            prompt: None,
        }
    }
}

impl Default for RerankerSettings {
    fn default() -> Self {
        Self {
            supplier: None,
            model: None,
            top_n: DEFAULT_RERANKER_TOP_N,
            api_key: None,
        }
    }
}

impl Default for RetrievalSettings {
    fn default() -> Self {
        Self {
            reranker_config: RerankerSettings::default(),
            llm_config: EndpointSettings::default(),
            max_history: DEFAULT_MAX_HISTORY,
            max_files: DEFAULT_MAX_FILES,
            prompt: None,
            workflow_config: None,
        }
    }
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

impl Default for MegaparseConfig {
    fn default() -> Self {
        Self {
            method: ParseMethod::default(),
            strategy: ParseStrategy::default(),
            check_table: false,
            parsing_instruction: None,
            model_name: DEFAULT_PARSER_MODEL.to_string(),
        }
    }
}

pub const DEFAULT_LLM_MODEL: &str = "gpt-3.5-turbo-0125";
pub const DEFAULT_MAX_INPUT_TOKENS: u32 = 2000;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2000;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const FALLBACK_TOKENIZER: &str = "cl100k_base";

pub const DEFAULT_RERANKER_TOP_N: u32 = 5;
pub const DEFAULT_COHERE_RERANKER: &str = "rerank-multilingual-v3.0";
pub const DEFAULT_JINA_RERANKER: &str = "jina-reranker-v2-base-multilingual";

pub const DEFAULT_MAX_HISTORY: u32 = 10;
pub const DEFAULT_MAX_FILES: u32 = 20;

pub const DEFAULT_CHUNK_SIZE: u32 = 400;
pub const DEFAULT_CHUNK_OVERLAP: u32 = 100;
pub const DEFAULT_PARSER_MODEL: &str = "gpt-4o";

pub const CONFIG_DIR: &str = ".ragconf";
pub const CONFIG_FILE: &str = "assistant.json";

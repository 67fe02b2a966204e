use anyhow::{Context, Result, bail};
use colored::Colorize;

use ragconf::{
    AssistantConfig, EnvLookup, LlmEndpointConfig, ModelRegistry, ModelSupplier, ProcessEnv,
    config::FALLBACK_TOKENIZER,
};

use super::args::{CheckArgs, ModelsArgs, ResolveArgs};
use super::util::{format_context, mask_api_key};

pub(super) fn list_models(args: ModelsArgs) -> Result<()> {
    let suppliers: Vec<ModelSupplier> = match args.supplier {
        Some(supplier) => vec![supplier],
        None => ModelRegistry::suppliers().collect(),
    };

    for supplier in suppliers {
        let entries = ModelRegistry::entries(supplier);
        println!(
            "\n{} ({})",
            supplier.display_name().bold(),
            supplier.api_key_env_var().dimmed()
        );
        if entries.is_empty() {
            println!("  {}", "no registered models".dimmed());
            continue;
        }
        for (prefix, config) in entries {
            println!(
                "  {:<24} {:>8}  {}",
                prefix.cyan(),
                config.context_length,
                config.tokenizer_hub
            );
        }
    }
    println!();
    Ok(())
}

pub(super) fn resolve_model(args: ResolveArgs) -> Result<()> {
    let Some(supplier) = ModelRegistry::supplier_for(&args.model) else {
        bail!("Cannot find the corresponding supplier for model {}", args.model);
    };
    let found = ModelRegistry::lookup(supplier, &args.model);
    let env_var = supplier.api_key_env_var();
    let key_set = ProcessEnv
        .var(env_var)?
        .is_some_and(|value| !value.trim().is_empty());

    println!("🔎 {}", args.model.bold());
    println!("  Supplier:   {}", supplier.display_name());
    println!(
        "  Context:    {}",
        format_context(found.map(|config| config.context_length))
    );
    println!(
        "  Tokenizer:  {}",
        found
            .map(|config| config.tokenizer_hub)
            .unwrap_or(FALLBACK_TOKENIZER)
    );
    println!(
        "  API key:    {} {}",
        env_var,
        if key_set {
            "set".green()
        } else {
            "missing".red()
        }
    );
    Ok(())
}

pub(super) fn check_settings(args: CheckArgs) -> Result<()> {
    let (builder, source) = match args.file {
        Some(path) => (AssistantConfig::read_settings(&path)?, path),
        None => {
            let path = AssistantConfig::default_path()?;
            let builder = if path.exists() {
                AssistantConfig::read_settings(&path)?
            } else {
                AssistantConfig::builder()
            };
            (builder, path)
        }
    };

    let mut config = builder
        .build(&ProcessEnv)
        .with_context(|| format!("Invalid assistant configuration in {}", source.display()))?;

    if let Some(model) = args.model.as_deref() {
        config
            .retrieval_config
            .llm_config
            .set_model(model, &ProcessEnv)
            .with_context(|| format!("Cannot switch the LLM endpoint to {model}"))?;
    }

    print_summary(&config);
    println!("\n{} {}", "✅".green(), "Configuration is valid".green());
    Ok(())
}

fn print_summary(config: &AssistantConfig) {
    let retrieval = &config.retrieval_config;
    print_endpoint(&retrieval.llm_config);

    let reranker = &retrieval.reranker_config;
    println!("\n{}", "Reranker".bold());
    match reranker.supplier() {
        Some(supplier) => {
            println!("  Supplier:   {supplier}");
            println!("  Model:      {}", reranker.model().unwrap_or_default());
            println!("  Top N:      {}", reranker.top_n());
            println!(
                "  API key:    {}",
                mask_api_key(reranker.api_key().unwrap_or_default())
            );
        }
        None => println!("  {}", "disabled".dimmed()),
    }

    println!("\n{}", "Retrieval".bold());
    println!("  Max history: {}", retrieval.max_history);
    println!("  Max files:   {}", retrieval.max_files);
    if let Some(workflow) = &retrieval.workflow_config {
        println!(
            "  Workflow:    {} ({} nodes)",
            workflow.name,
            workflow.nodes.len()
        );
    }

    let parser = &config.ingestion_config.parser_config;
    println!("\n{}", "Ingestion".bold());
    println!(
        "  Chunks:      {} (overlap {})",
        parser.splitter_config.chunk_size, parser.splitter_config.chunk_overlap
    );
    println!(
        "  Parser:      {:?} / {:?}",
        parser.megaparse_config.method, parser.megaparse_config.strategy
    );
}

fn print_endpoint(llm: &LlmEndpointConfig) {
    println!("\n{}", "LLM endpoint".bold());
    println!("  Supplier:   {}", llm.supplier().display_name());
    println!("  Model:      {}", llm.model());
    println!("  Context:    {}", format_context(llm.context_length()));
    println!("  Tokenizer:  {}", llm.effective_tokenizer());
    if let Some(base_url) = llm.llm_base_url() {
        println!("  Base URL:   {base_url}");
    }
    println!(
        "  API key:    {} (from {})",
        mask_api_key(llm.api_key()),
        llm.env_variable_name()
    );
    println!(
        "  Tokens:     {} in / {} out, temperature {}, streaming {}",
        llm.max_input_tokens(),
        llm.max_output_tokens(),
        llm.temperature(),
        llm.streaming()
    );
}

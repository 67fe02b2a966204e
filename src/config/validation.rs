use tracing::debug;

use crate::error::ConfigError;

use super::environment::EnvLookup;

/// Returns the explicit key when present, otherwise reads `env_var`.
/// Blank values count as missing.
pub(super) fn resolve_api_key(
    explicit: Option<String>,
    supplier: &str,
    env_var: &str,
    env: &dyn EnvLookup,
) -> Result<String, ConfigError> {
    if let Some(key) = non_blank(explicit) {
        return Ok(key);
    }

    debug!(supplier, env_var, "Reading API key from environment");
    non_blank(env.var(env_var)?).ok_or_else(|| ConfigError::MissingApiKey {
        supplier: supplier.to_string(),
        env_var: env_var.to_string(),
    })
}

/// Reads `env_var`, ignoring any key the caller already had.
pub(super) fn require_env_key(
    supplier: &str,
    env_var: &str,
    env: &dyn EnvLookup,
) -> Result<String, ConfigError> {
    resolve_api_key(None, supplier, env_var, env)
}

pub(super) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

// Keys are stored exactly as given.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !is_blank(s))
}

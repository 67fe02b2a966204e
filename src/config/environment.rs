use std::collections::HashMap;
use std::env;

use crate::error::ConfigError;

/// Source of environment variables used while resolving API keys.
///
/// Any `Fn(&str) -> Option<String>` closure is also a source.
pub trait EnvLookup {
    fn var(&self, key: &str) -> Result<Option<String>, ConfigError>;
}

/// Reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, key: &str) -> Result<Option<String>, ConfigError> {
        env_string(key)
    }
}

/// In-memory environment, mostly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl EnvLookup for MapEnv {
    fn var(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.vars.get(key).cloned())
    }
}

impl<F> EnvLookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn var(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(self(key))
    }
}

pub fn env_string(key: &str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnvValue {
            key: key.to_string(),
        }),
    }
}

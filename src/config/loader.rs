use anyhow::{Context, Result};
use dirs::home_dir;
use std::{fs, path::Path, path::PathBuf};
use tracing::debug;

use super::builder::AssistantBuilder;
use super::constants::{CONFIG_DIR, CONFIG_FILE};
use super::environment::EnvLookup;
use super::retrieval::{AssistantConfig, AssistantSettings};

impl AssistantConfig {
    pub fn default_path() -> Result<PathBuf> {
        let mut path = home_dir().context("Could not determine home directory")?;
        path.push(CONFIG_DIR);
        path.push(CONFIG_FILE);
        Ok(path)
    }

    pub fn builder() -> AssistantBuilder {
        AssistantBuilder::new()
    }

    /// Loads the default settings file, or plain defaults when it does not exist.
    pub fn load(env: &dyn EnvLookup) -> Result<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path, env)
        } else {
            debug!(path = %path.display(), "No settings file, using defaults");
            AssistantBuilder::new()
                .build(env)
                .context("Invalid default assistant configuration")
        }
    }

    pub fn load_from(path: &Path, env: &dyn EnvLookup) -> Result<Self> {
        Self::read_settings(path)?
            .build(env)
            .with_context(|| format!("Invalid assistant configuration in {}", path.display()))
    }

    pub fn read_settings(path: &Path) -> Result<AssistantBuilder> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed reading config at {}", path.display()))?;

        if contents.trim().is_empty() {
            return Ok(AssistantBuilder::new());
        }

        let settings: AssistantSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed parsing JSON config at {}", path.display()))?;
        debug!(path = %path.display(), "Loaded assistant settings");

        Ok(AssistantBuilder::from_settings(settings))
    }
}

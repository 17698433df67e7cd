//! Shell configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use gradebook_core::model::IdentityMode;

/// Top-level gradebook configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// Which identity variant the roster uses: students keyed by unique
    /// case-insensitive name, or by numeric id plus a display name.
    #[serde(default = "default_identity")]
    pub identity: IdentityMode,
    /// Prompt shown by the interactive shell.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_identity() -> IdentityMode {
    IdentityMode::Name
}

fn default_prompt() -> String {
    "gradebook> ".to_string()
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            identity: default_identity(),
            prompt: default_prompt(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `gradebook.toml` in the current directory
/// 2. `~/.config/gradebook/config.toml`
///
/// Defaults apply when neither exists. An explicit path that does not exist
/// is an error rather than a silent fallback.
pub fn load_config_from(path: Option<&Path>) -> Result<GradebookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradebook.toml");
        if local.exists() {
            Some(local)
        } else if let Some(dir) = config_dir() {
            let global = dir.join("config.toml");
            global.exists().then_some(global)
        } else {
            None
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(GradebookConfig::default()),
    }
}

fn config_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradebook"))
}

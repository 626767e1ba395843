use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::LaunchError;

/// Environment variable naming an optional TOML file that overrides the defaults.
pub const CONFIG_ENV: &str = "VIDGEN_CONFIG";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    /// Script handed to the interpreter.
    pub entrypoint: PathBuf,
    /// Fixed subcommand token that follows the entrypoint.
    pub subcommand: String,
    /// Interpreter names in order of preference. The last one is the fallback
    /// used when none of them can be found on `PATH`.
    pub interpreters: Vec<String>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        LauncherConfig {
            entrypoint: PathBuf::from("src/cron.py"),
            subcommand: "video_generate".to_string(),
            interpreters: vec!["python3".to_string(), "python".to_string()],
        }
    }
}

impl LauncherConfig {
    pub fn load_or_default(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!(LaunchError::InvalidConfig(format!(
                        "config file '{}' does not exist",
                        path.display()
                    )));
                }
                Self::from_file(path)
            }
            None => Ok(LauncherConfig::default()),
        }
    }

    /// Loads from the file named by `VIDGEN_CONFIG`, or the defaults when unset.
    pub fn from_env() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self::load_or_default(path.as_deref())
    }

    fn from_file(path: &Path) -> Result<Self> {
        let file_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_toml(&file_content).with_context(|| {
            format!(
                "Failed to parse config file '{}' - check TOML syntax",
                path.display()
            )
        })
    }

    fn from_toml(content: &str) -> Result<Self> {
        let config: LauncherConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), LaunchError> {
        if self.interpreters.iter().all(|name| name.trim().is_empty()) {
            return Err(LaunchError::InvalidConfig(
                "at least one interpreter must be listed".to_string(),
            ));
        }
        if self.subcommand.trim().is_empty() {
            return Err(LaunchError::InvalidConfig(
                "subcommand must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use directories::ProjectDirs;
use tactical_core::GameConfig;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Where a session's config came from, for the startup log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    UserDefault(PathBuf),
    BuiltIn,
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "Tactical")
        .map(|proj_dirs| proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}

pub fn load_config_file(path: &Path) -> anyhow::Result<GameConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    GameConfig::from_toml_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

/// An explicit path must exist; the per-user file is used only when present.
pub fn resolve_config(
    explicit: Option<&Path>,
    user_default: Option<PathBuf>,
) -> anyhow::Result<(GameConfig, ConfigSource)> {
    if let Some(path) = explicit {
        return Ok((load_config_file(path)?, ConfigSource::Explicit(path.to_path_buf())));
    }
    match user_default {
        Some(path) if path.is_file() => {
            let config = load_config_file(&path)?;
            Ok((config, ConfigSource::UserDefault(path)))
        }
        _ => Ok((GameConfig::default(), ConfigSource::BuiltIn)),
    }
}

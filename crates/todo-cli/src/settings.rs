use anyhow::Context;
use std::path::{Path, PathBuf};
use todo_core::config::TodoConfig;
use todo_core::paths;

/// Resolve the config file location.
///
/// Priority:
/// 1. `--config` flag / `TODO_CONFIG` env var (passed in as `explicit`)
/// 2. `~/.todo/config.yaml`
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(p) => paths::expand_home(&p.to_string_lossy()),
        None => paths::default_config_file(),
    }
}

/// Load the config, then apply a `--file` / `TODO_FILE` override.
pub fn load(config_path: &Path, file_override: Option<&Path>) -> anyhow::Result<TodoConfig> {
    let mut cfg = TodoConfig::load(config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    if let Some(file) = file_override {
        cfg.todo_file = file.to_string_lossy().into_owned();
    }
    Ok(cfg)
}

use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;
use tracing::{info, warn};

pub const DEFAULT_CONFIG_FILE: &str = "client.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub server_url: String,
    pub request_timeout_secs: u64,
    pub quiz_seconds: u32,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8080".into(),
            request_timeout_secs: 10,
            quiz_seconds: 600,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    server_url: Option<String>,
    request_timeout_secs: Option<u64>,
    quiz_seconds: Option<u32>,
}

/// Defaults, then the optional TOML file, then environment variables.
pub fn load_settings(config_path: &Path) -> anyhow::Result<ClientSettings> {
    load_settings_with(config_path, |key| std::env::var(key).ok())
}

fn load_settings_with(
    config_path: &Path,
    var: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<ClientSettings> {
    let mut settings = ClientSettings::default();

    match fs::read_to_string(config_path) {
        Ok(raw) => {
            let file_cfg = parse_file_settings(&raw)
                .with_context(|| format!("invalid config file '{}'", config_path.display()))?;
            apply_file_settings(&mut settings, file_cfg);
            info!(path = %config_path.display(), "loaded client config file");
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read '{}'", config_path.display()));
        }
    }

    apply_env_overrides(&mut settings, var);
    Ok(settings)
}

fn parse_file_settings(raw: &str) -> Result<FileSettings, toml::de::Error> {
    toml::from_str(raw)
}

fn apply_file_settings(settings: &mut ClientSettings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.server_url {
        settings.server_url = v;
    }
    if let Some(v) = file_cfg.request_timeout_secs {
        settings.request_timeout_secs = v;
    }
    if let Some(v) = file_cfg.quiz_seconds {
        settings.quiz_seconds = v;
    }
}

fn apply_env_overrides(settings: &mut ClientSettings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = var("APP__SERVER_URL") {
        settings.server_url = v;
    }

    if let Some(v) = var("APP__REQUEST_TIMEOUT_SECS") {
        match v.parse() {
            Ok(parsed) => settings.request_timeout_secs = parsed,
            Err(err) => warn!("ignoring invalid APP__REQUEST_TIMEOUT_SECS '{v}': {err}"),
        }
    }

    if let Some(v) = var("APP__QUIZ_SECONDS") {
        match v.parse() {
            Ok(parsed) => settings.quiz_seconds = parsed,
            Err(err) => warn!("ignoring invalid APP__QUIZ_SECONDS '{v}': {err}"),
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

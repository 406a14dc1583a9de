use std::{fs, io, path::Path};

use anyhow::Context;
use client_core::DEFAULT_API_BASE_URL;
use serde::Deserialize;

/// Optional file next to the working directory, read once at startup.
pub const SETTINGS_FILE: &str = "disaster_client.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub api_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
        }
    }
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE))
}

pub fn load_settings_from(path: &Path) -> Settings {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Settings::default(),
        Err(err) => {
            tracing::warn!(path = %path.display(), "could not read settings file, using defaults: {err}");
            return Settings::default();
        }
    };

    match parse_settings(&raw) {
        Ok(settings) => {
            tracing::info!(path = %path.display(), api_base_url = %settings.api_base_url, "loaded settings");
            settings
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), "ignoring invalid settings file: {err:#}");
            Settings::default()
        }
    }
}

pub fn parse_settings(raw: &str) -> anyhow::Result<Settings> {
    let mut settings: Settings = toml::from_str(raw).context("settings file is not valid TOML")?;
    settings.api_base_url = settings.api_base_url.trim().to_string();
    if settings.api_base_url.is_empty() {
        settings.api_base_url = DEFAULT_API_BASE_URL.into();
    }
    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Station-to-station CSV extract
    pub data_path: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Name used in the welcome banner
    pub network_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("station_to_station_extract.csv"),
            log_level: "warn".to_string(),
            network_name: "Belgian rail network".to_string(),
        }
    }
}

impl Config {
    /// Parsed log level, falling back to `WARN` for unknown names
    #[must_use]
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::WARN)
    }
}

/// Per-user config file location
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "hyperpolymath", "railnet")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load configuration.
///
/// An explicitly given file must exist; otherwise the per-user file is
/// read if present and defaults are used for everything it leaves out.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    let (path, required) = match explicit {
        Some(path) => (Some(path.to_path_buf()), true),
        None => (default_path(), false),
    };

    let mut builder = config::Config::builder();
    if let Some(path) = &path {
        builder = builder.add_source(
            config::File::from(path.as_path())
                .format(config::FileFormat::Toml)
                .required(required),
        );
    }

    let loaded: Config = builder
        .build()
        .and_then(|built| built.try_deserialize())
        .with_context(|| match &path {
            Some(path) => format!("Failed to load configuration from {}", path.display()),
            None => "Failed to load configuration".to_string(),
        })?;
    Ok(loaded)
}

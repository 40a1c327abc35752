//
//  teamcity-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! This module manages the `tc` configuration file and the connection
//! settings handed to the API client.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/tc/config.toml`
//! - **macOS**: `~/Library/Application Support/tc/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\tc\config\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [server]
//! host = "teamcity.example.com"
//! port = 8111
//! username = "admin"
//! ```
//!
//! The password is never written here. It comes from `TC_PASSWORD` or from
//! the system keyring (see [`crate::auth::KeyringStore`]).
//!
//! ## Submodules
//!
//! - [`file`]: Low-level configuration file I/O operations
//! - [`client`]: Immutable connection settings for the API client

mod client;
mod file;

pub use client::*;
pub use file::*;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const CONFIG_KEYS: &[&str] = &["host", "port", "username"];

/// Global configuration container for `tc`.
///
/// # Examples
///
/// ```rust
/// use teamcity_client::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.server.host, "127.0.0.1");
/// assert_eq!(config.server.port, 80);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// The TeamCity server to talk to.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Where the TeamCity server lives and who to log in as.
///
/// # Default Values
///
/// | Field | Default |
/// |-------|---------|
/// | `host` | `"127.0.0.1"` |
/// | `port` | `80` |
/// | `username` | `None` |
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Bare host name or IP address, without scheme.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub username: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    80
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            username: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default location.
    ///
    /// A missing file is not an error; defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not valid TOML.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if config_exists(path) {
            let content = read_config_file(path)?;
            toml::from_str(&content)
                .with_context(|| format!("Invalid configuration in {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to an explicit path, overwriting it.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Returns the path to the configuration file.
    ///
    /// The file may not exist; this only returns where it would be.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Gets a configuration value by key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use teamcity_client::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.get("port"), Some("80".to_string()));
    /// assert_eq!(config.get("username"), None);
    /// assert_eq!(config.get("unknown_key"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "host" => Some(self.server.host.clone()),
            "port" => Some(self.server.port.to_string()),
            "username" => self.server.username.clone(),
            _ => None,
        }
    }

    /// Sets a configuration value by key.
    ///
    /// Changes are only persisted when [`Config::save`] is called.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown keys and for a port that is not a number
    /// between 1 and 65535.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use teamcity_client::config::Config;
    ///
    /// let mut config = Config::default();
    /// config.set("port", "8111").unwrap();
    /// assert_eq!(config.server.port, 8111);
    /// assert!(config.set("port", "http").is_err());
    /// ```
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "host" => self.server.host = value.to_string(),
            "port" => {
                let port: u16 = value
                    .parse()
                    .with_context(|| format!("Invalid port '{}'", value))?;
                if port == 0 {
                    bail!("Port must be between 1 and 65535");
                }
                self.server.port = port;
            }
            "username" => self.server.username = Some(value.to_string()),
            _ => bail!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key,
                CONFIG_KEYS.join(", ")
            ),
        }
        Ok(())
    }
}

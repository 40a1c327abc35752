//
//  teamcity-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # TeamCity Client Library
//!
//! A thin asynchronous wrapper around the TeamCity REST API, plus the `tc`
//! command-line tool built on top of it.
//!
//! ## Overview
//!
//! The library talks to `http://<server>:<port>/httpAuth/app/rest` with HTTP
//! Basic authentication. It covers the operations needed to script a build
//! server: creating projects and build types, attaching templates, queueing
//! builds, and reading or updating build parameters.
//!
//! ## Module Structure
//!
//! - [`api`]: The [`TeamCityClient`](api::TeamCityClient), its transport and typed views
//! - [`auth`]: Basic-auth credentials and keyring password storage
//! - [`config`]: Configuration file and client connection settings
//! - [`cli`]: Command-line interface definitions using clap
//! - [`context`]: Which server and user a command targets
//! - [`output`]: Table and JSON output for the CLI
//! - [`interactive`]: Terminal prompts
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::collections::BTreeMap;
//!
//! use teamcity_client::api::TeamCityClient;
//! use teamcity_client::config::ClientConfig;
//!
//! # async fn example() -> Result<(), teamcity_client::api::ApiError> {
//! let client = TeamCityClient::new(ClientConfig::new("127.0.0.1", 8111, "admin", "admin"))?;
//!
//! let mut params = BTreeMap::new();
//! params.insert("game.version".to_string(), "1.0.2044".to_string());
//! client.update_build_type_parameters("Games_FlashCards", &params).await?;
//! client.run_build_type("Games_FlashCards").await?;
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
pub mod cli;

/// TeamCity REST API client.
///
/// Handles URL composition, basic authentication, request bodies and
/// response interpretation. HTTP failures surface as [`api::ApiError`].
pub mod api;

/// Credentials and secure password storage.
pub mod auth;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/tc/config.toml`
/// - macOS: `~/Library/Application Support/tc/config.toml`
/// - Windows: `%APPDATA%\tc\config\config.toml`
pub mod config;

/// Server target resolution.
///
/// Merges CLI flags, `TC_*` environment variables and the config file into
/// the server, port and credentials a command uses.
pub mod context;

/// Output formatting for table and JSON modes.
pub mod output;

/// Interactive terminal prompts.
pub mod interactive;

pub use api::TeamCityClient;
pub use cli::Cli;
pub use config::{ClientConfig, Config};

/// Application name constant.
///
/// The name of the CLI binary, used for display purposes and configuration paths.
pub const APP_NAME: &str = "tc";

/// Application version, taken from Cargo.toml at compile time.
///
/// # Example
///
/// ```rust
/// use teamcity_client::VERSION;
///
/// println!("tc version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
///
/// # Example
///
/// ```rust,no_run
/// use teamcity_client::exit_codes;
/// use std::process;
///
/// process::exit(exit_codes::AUTH_ERROR);
/// ```
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    pub const ERROR: i32 = 1;

    /// Invalid arguments or configuration.
    pub const USAGE: i32 = 2;

    /// The server rejected the credentials or the user lacks permission.
    pub const AUTH_ERROR: i32 = 4;

    /// The requested project, build type or template does not exist.
    pub const NOT_FOUND: i32 = 8;
}

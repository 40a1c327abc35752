//
//  teamcity-client
//  config/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Client Connection Settings
//!
//! [`ClientConfig`] is everything the API client needs to reach a server:
//! host, port and the basic-auth credential pair. It is fixed once built.
//!
//! ```rust
//! use teamcity_client::config::ClientConfig;
//!
//! let config = ClientConfig::new("127.0.0.1", 8111, "admin", "admin");
//! assert_eq!(config.base_url(), "http://127.0.0.1:8111/httpAuth/app/rest");
//! ```

use std::fmt;

use url::Url;

use crate::api::common::ApiError;
use crate::auth::Credentials;

/// Path of the basic-auth REST root on every TeamCity server.
pub const REST_ROOT: &str = "/httpAuth/app/rest";

/// Immutable connection settings for a TeamCity server.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    server: String,
    port: u16,
    credentials: Credentials,
}

impl ClientConfig {
    /// Creates connection settings for `server:port` authenticated as `username`.
    pub fn new(
        server: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            server: server.into(),
            port,
            credentials: Credentials::new(username, password),
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns `http://<server>:<port>/httpAuth/app/rest`.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}{}", self.server, self.port, REST_ROOT)
    }

    /// Checks that the settings can address a server.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidConfig`] if:
    /// - The server is empty or contains a scheme, path or whitespace
    /// - The port is 0
    /// - The username is empty
    /// - The composed base URL does not parse
    pub fn validate(&self) -> Result<(), ApiError> {
        let server = self.server.trim();
        if server.is_empty() {
            return Err(ApiError::InvalidConfig("server host is empty".to_string()));
        }
        if server.contains("://") || server.contains('/') || server.contains(char::is_whitespace) {
            return Err(ApiError::InvalidConfig(format!(
                "server must be a bare host name or IP address, got '{}'",
                self.server
            )));
        }
        if self.port == 0 {
            return Err(ApiError::InvalidConfig("port must be non-zero".to_string()));
        }
        if self.credentials.username.is_empty() {
            return Err(ApiError::InvalidConfig("username is empty".to_string()));
        }

        let base = self.base_url();
        let parsed = Url::parse(&base)
            .map_err(|e| ApiError::InvalidConfig(format!("invalid base URL '{}': {}", base, e)))?;
        if parsed.host_str().is_none() {
            return Err(ApiError::InvalidConfig(format!("no host in '{}'", base)));
        }
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("server", &self.server)
            .field("port", &self.port)
            .field("credentials", &self.credentials)
            .finish()
    }
}

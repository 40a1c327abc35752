//
//  teamcity-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! TeamCity's `/httpAuth` endpoints accept HTTP Basic authentication with a
//! static username and password. This module holds that credential pair and
//! the keyring-backed storage used by `tc auth login`.
//!
//! ## Module Structure
//!
//! - [`keyring`]: Secure password storage using the system keyring
//!
//! ## Example
//!
//! ```rust,no_run
//! use teamcity_client::auth::Credentials;
//! use reqwest::Client;
//!
//! let credentials = Credentials::new("admin", "secret");
//! let request = credentials.apply_to_request(Client::new().get("http://ci:8111/httpAuth/app/rest/projects"));
//! ```

mod keyring;

pub use keyring::*;

use std::fmt;

use reqwest::RequestBuilder;

/// A static username/password pair sent with every request.
///
/// The `Debug` implementation masks the password so credentials can be
/// logged alongside requests without leaking it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// The TeamCity login name.
    pub username: String,
    /// The password for `username`.
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Applies HTTP Basic authentication to a request.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use teamcity_client::auth::Credentials;
    /// use reqwest::Client;
    ///
    /// async fn whoami(credentials: &Credentials) {
    ///     let request = Client::new().get("http://127.0.0.1:8111/httpAuth/app/rest/users/current");
    ///     let response = credentials.apply_to_request(request).send().await;
    /// }
    /// ```
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(&self.username, Some(&self.password))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

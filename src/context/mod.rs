//
//  teamcity-client
//  context/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Server Context
//!
//! Works out which TeamCity server a command talks to and as whom.
//!
//! Priority: CLI flags and `TC_*` environment variables, then the config
//! file, then the defaults (`127.0.0.1:80`). The password comes from
//! `TC_PASSWORD` or, failing that, the keyring entry written by
//! `tc auth login`.

mod resolver;

pub use resolver::*;

use crate::auth::account_key;

/// The resolved server target of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerContext {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
}

impl ServerContext {
    /// `host:port`, for messages.
    pub fn display_host(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The keyring account for this target, if a username is known.
    pub fn account(&self) -> Option<String> {
        self.username
            .as_deref()
            .map(|user| account_key(user, &self.host, self.port))
    }

    /// The web UI address of the server.
    pub fn web_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

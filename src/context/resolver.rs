//
//  teamcity-client
//  context/resolver.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::{bail, Result};
use tracing::debug;

use super::ServerContext;
use crate::api::TeamCityClient;
use crate::auth::KeyringStore;
use crate::cli::GlobalOptions;
use crate::config::{ClientConfig, Config};

/// Environment variable holding the password for non-interactive use.
pub const PASSWORD_ENV: &str = "TC_PASSWORD";

/// Resolves the server target and credentials for a command.
pub struct ContextResolver {
    config: Config,
}

impl ContextResolver {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Loads the config file and builds a resolver from it.
    pub fn load() -> Result<Self> {
        Ok(Self::new(Config::load()?))
    }

    /// Merges the global options over the config file.
    ///
    /// clap has already folded `TC_SERVER`, `TC_PORT` and `TC_USERNAME`
    /// into `options`.
    pub fn resolve(&self, options: &GlobalOptions) -> ServerContext {
        ServerContext {
            host: options
                .server
                .clone()
                .unwrap_or_else(|| self.config.server.host.clone()),
            port: options.port.unwrap_or(self.config.server.port),
            username: options
                .username
                .clone()
                .or_else(|| self.config.server.username.clone()),
        }
    }

    /// Builds the client connection settings for `ctx`.
    ///
    /// `env_password` wins over the keyring.
    pub fn client_config(
        &self,
        ctx: &ServerContext,
        env_password: Option<String>,
        keyring: &KeyringStore,
    ) -> Result<ClientConfig> {
        let Some(username) = ctx.username.clone() else {
            bail!(
                "No username configured for {}. Pass --username, set TC_USERNAME, \
                 or run 'tc config set username <name>'.",
                ctx.display_host()
            );
        };

        let password = match env_password.filter(|p| !p.is_empty()) {
            Some(password) => {
                debug!("using password from {}", PASSWORD_ENV);
                password
            }
            None => {
                let account = crate::auth::account_key(&username, &ctx.host, ctx.port);
                match keyring.get(&account)? {
                    Some(password) => password,
                    None => bail!(
                        "Not authenticated with {} as {}. Run 'tc auth login' or set {}.",
                        ctx.display_host(),
                        username,
                        PASSWORD_ENV
                    ),
                }
            }
        };

        let config = ClientConfig::new(ctx.host.clone(), ctx.port, username, password);
        config.validate()?;
        Ok(config)
    }

    /// Resolves everything and returns a ready client.
    pub fn client(&self, options: &GlobalOptions) -> Result<TeamCityClient> {
        let ctx = self.resolve(options);
        let config = self.client_config(
            &ctx,
            std::env::var(PASSWORD_ENV).ok(),
            &KeyringStore::new(),
        )?;
        Ok(TeamCityClient::new(config)?)
    }
}

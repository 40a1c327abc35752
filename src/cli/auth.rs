//
//  teamcity-client
//  cli/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Authentication commands.
//!
//! TeamCity's `/httpAuth` endpoints take a static username and password.
//! `tc auth login` checks them against the server and stores the password in
//! the system keyring; the username, host and port go to the config file.

use std::io::BufRead;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::api::{ApiError, TeamCityClient};
use crate::auth::KeyringStore;
use crate::config::{ClientConfig, Config};
use crate::context::{ContextResolver, ServerContext, PASSWORD_ENV};
use crate::interactive::{
    is_interactive, prompt_confirm_with_default, prompt_input, prompt_password,
};

use super::GlobalOptions;

/// Store or remove the TeamCity password.
#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Log in to a TeamCity server
    Login(LoginArgs),

    /// Remove the stored password
    Logout,

    /// View authentication status
    Status(StatusArgs),
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Read the password from standard input
    #[arg(long)]
    pub with_password: bool,

    /// Store the password without checking it against the server
    #[arg(long)]
    pub no_verify: bool,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Also check the credentials against the server
    #[arg(long)]
    pub verify: bool,
}

impl AuthCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AuthSubcommand::Login(args) => login(args, global).await,
            AuthSubcommand::Logout => logout(global).await,
            AuthSubcommand::Status(args) => status(args, global).await,
        }
    }
}

/// Performs the login flow.
async fn login(args: &LoginArgs, global: &GlobalOptions) -> Result<()> {
    let mut config = Config::load()?;
    let ctx = ContextResolver::new(config.clone()).resolve(global);
    let keyring = KeyringStore::new();

    let username = match &ctx.username {
        Some(username) => username.clone(),
        None if is_interactive() && !args.with_password => prompt_input("Username")?,
        None => bail!("No username given. Pass --username or set TC_USERNAME."),
    };

    let account = crate::auth::account_key(&username, &ctx.host, ctx.port);
    if keyring.get(&account)?.is_some()
        && is_interactive()
        && !args.with_password
        && !prompt_confirm_with_default(
            &format!("A password for {} is already stored. Replace it?", account),
            false,
        )?
    {
        return Ok(());
    }

    let password = if args.with_password {
        read_password_from_stdin()?
    } else if is_interactive() {
        prompt_password(&format!("Password for {}@{}", username, ctx.display_host()))?
    } else {
        bail!("No terminal attached. Use --with-password to read the password from stdin.");
    };

    if password.is_empty() {
        bail!("Password cannot be empty");
    }

    let client_config = ClientConfig::new(ctx.host.clone(), ctx.port, username.clone(), password.clone());
    client_config.validate()?;

    if !args.no_verify {
        if !global.json {
            println!("Checking credentials against {}...", ctx.display_host());
        }
        verify(client_config).await?;
    }

    keyring.store(&account, &password)?;

    config.server.host = ctx.host.clone();
    config.server.port = ctx.port;
    config.server.username = Some(username.clone());
    config.save()?;

    if global.json {
        let result = serde_json::json!({
            "success": true,
            "host": ctx.host,
            "port": ctx.port,
            "username": username,
            "verified": !args.no_verify,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "{} Logged in to {} as {}",
            style("✓").green(),
            style(ctx.display_host()).cyan(),
            style(&username).bold()
        );
    }

    Ok(())
}

/// Removes the stored password for the resolved target.
async fn logout(global: &GlobalOptions) -> Result<()> {
    let ctx = ContextResolver::load()?.resolve(global);
    let Some(account) = ctx.account() else {
        bail!("No username configured for {}; nothing to log out.", ctx.display_host());
    };

    KeyringStore::new().delete(&account)?;

    if global.json {
        let result = serde_json::json!({
            "success": true,
            "account": account,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{} Logged out of {}", style("✓").green(), account);
    }

    Ok(())
}

async fn status(args: &StatusArgs, global: &GlobalOptions) -> Result<()> {
    let resolver = ContextResolver::load()?;
    let ctx = resolver.resolve(global);

    let env_password = std::env::var(PASSWORD_ENV).ok().filter(|p| !p.is_empty());
    let stored = match ctx.account() {
        Some(account) => KeyringStore::new().get(&account)?.is_some(),
        None => false,
    };
    let source = if env_password.is_some() {
        Some(PASSWORD_ENV)
    } else if stored {
        Some("keyring")
    } else {
        None
    };

    let verified = if args.verify && source.is_some() {
        let config = resolver.client_config(&ctx, env_password, &KeyringStore::new())?;
        Some(verify(config).await.is_ok())
    } else {
        None
    };

    if global.json {
        let result = serde_json::json!({
            "host": ctx.host,
            "port": ctx.port,
            "username": ctx.username,
            "password_source": source,
            "verified": verified,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_status(&ctx, source, verified);
    Ok(())
}

fn print_status(ctx: &ServerContext, source: Option<&str>, verified: Option<bool>) {
    println!();
    println!("{}", style(format!("TeamCity server: {}", ctx.display_host())).bold());
    println!("{}", "-".repeat(50));
    println!(
        "  {}: {}",
        style("username").cyan(),
        ctx.username.as_deref().unwrap_or("-")
    );
    match source {
        Some(source) => println!("  {}: {}", style("password").cyan(), source),
        None => println!(
            "  {}: {}",
            style("password").cyan(),
            style("not stored (run 'tc auth login')").yellow()
        ),
    }
    match verified {
        Some(true) => println!("  {}: {}", style("verified").cyan(), style("yes").green()),
        Some(false) => println!("  {}: {}", style("verified").cyan(), style("no").red()),
        None => {}
    }
    println!();
}

/// Checks the credentials with a cheap authenticated request.
async fn verify(config: ClientConfig) -> Result<()> {
    let client = TeamCityClient::new(config)?;
    match client.get_projects().await {
        Ok(_) => Ok(()),
        Err(err @ ApiError::AuthFailed(_)) => {
            Err(err).context("The server rejected the username or password")
        }
        Err(err) => Err(err).context("Could not reach the TeamCity server"),
    }
}

fn read_password_from_stdin() -> Result<String> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

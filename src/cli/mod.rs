//
//  teamcity-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod auth;
mod build;
mod build_type;
mod completion;
mod config;
mod param;
mod project;
mod template;

pub use auth::AuthCommand;
pub use build::BuildCommand;
pub use build_type::BuildTypeCommand;
pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use param::ParamCommand;
pub use project::ProjectCommand;
pub use template::TemplateCommand;

use clap::{Parser, Subcommand};

use crate::output::{OutputFormat, OutputWriter};

/// TeamCity CLI - Work with a TeamCity server from the command line
#[derive(Parser, Debug)]
#[command(
    name = "tc",
    version,
    about = "Work with TeamCity from the command line",
    long_about = "tc drives a TeamCity server through its REST API.\n\n\
                  It creates projects and build types, attaches templates, \
                  queues builds and edits build parameters.",
    propagate_version = true,
    after_help = "Use 'tc <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// TeamCity server host name or IP address
    #[arg(long, short = 's', global = true, env = "TC_SERVER")]
    pub server: Option<String>,

    /// TeamCity server port
    #[arg(long, short = 'P', global = true, env = "TC_PORT")]
    pub port: Option<u16>,

    /// User to authenticate as
    #[arg(long, short = 'u', global = true, env = "TC_USERNAME")]
    pub username: Option<String>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_json_flag(self.json)
    }

    pub fn writer(&self) -> OutputWriter {
        OutputWriter::new(self.output_format())
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store or remove the TeamCity password
    Auth(AuthCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Manage projects
    #[command(visible_alias = "proj")]
    Project(ProjectCommand),

    /// Manage build types (build configurations)
    #[command(name = "build-type", visible_alias = "bt")]
    BuildType(BuildTypeCommand),

    /// Attach or detach build type templates
    Template(TemplateCommand),

    /// Queue builds
    Build(BuildCommand),

    /// View and edit build type parameters
    #[command(visible_alias = "params")]
    Param(ParamCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}

/// Parses a `name=value` argument.
///
/// Only the first `=` splits, so values may contain `=`.
pub(crate) fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{}'", s)),
    }
}

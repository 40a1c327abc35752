//
//  teamcity-client
//  cli/build.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Build queue commands

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::api::models::QueuedBuild;
use crate::context::ContextResolver;
use crate::output::{or_dash, print_field, TableOutput};

use super::GlobalOptions;

/// Queue builds
#[derive(Args, Debug)]
pub struct BuildCommand {
    #[command(subcommand)]
    pub command: BuildSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BuildSubcommand {
    /// Add a build of a build type to the queue
    Run(RunArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Build type id
    pub build_type: String,
}

impl TableOutput for QueuedBuild {
    fn print_table(&self, color: bool) {
        let title = format!("Queued build #{}", self.id);
        if color {
            println!("{} {}", style("✓").green().bold(), title);
        } else {
            println!("✓ {}", title);
        }
        print_field("Build type", &or_dash(self.build_type_id.as_deref()), color);
        print_field("State", &or_dash(self.state.as_deref()), color);
        if let Some(url) = &self.web_url {
            print_field("URL", url, color);
        }
    }
}

impl BuildCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            BuildSubcommand::Run(args) => {
                let client = ContextResolver::load()?.client(global)?;
                let queued = client.queue_build(&args.build_type).await?;
                global.writer().write(&queued)
            }
        }
    }
}

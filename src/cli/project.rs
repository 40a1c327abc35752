//
//  teamcity-client
//  cli/project.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project commands

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::api::models::ProjectList;
use crate::context::ContextResolver;
use crate::output::{or_dash, TableBuilder, TableOutput};

use super::GlobalOptions;

/// Manage projects
#[derive(Args, Debug)]
pub struct ProjectCommand {
    #[command(subcommand)]
    pub command: ProjectSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProjectSubcommand {
    /// List projects
    #[command(visible_alias = "ls")]
    List,

    /// Create an empty project
    Create(CreateArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Project name
    #[arg(long, short = 'n')]
    pub name: String,

    /// Project id, e.g. Projects_Games
    #[arg(long, short = 'i')]
    pub id: String,

    /// Parent project id
    #[arg(long, short = 'p', default_value = "_Root")]
    pub parent: String,
}

impl TableOutput for ProjectList {
    fn print_table(&self, color: bool) {
        if self.project.is_empty() {
            println!("No projects found.");
            return;
        }

        TableBuilder::new()
            .color(color)
            .headers(["ID", "NAME", "PARENT"])
            .rows(self.project.iter().map(|p| {
                [
                    p.id.clone(),
                    p.name.clone(),
                    or_dash(p.parent_project_id.as_deref()),
                ]
            }))
            .print();
        println!("Showing {} project(s)", self.count);
    }
}

#[derive(Debug, Serialize)]
struct CreatedProject<'a> {
    id: &'a str,
    name: &'a str,
    parent: &'a str,
}

impl ProjectCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ProjectSubcommand::List => self.list(global).await,
            ProjectSubcommand::Create(args) => self.create(args, global).await,
        }
    }

    async fn list(&self, global: &GlobalOptions) -> Result<()> {
        let client = ContextResolver::load()?.client(global)?;
        let projects = client.project_list().await?;
        global.writer().write(&projects)
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let client = ContextResolver::load()?.client(global)?;
        client
            .create_new_blank_project(&args.name, &args.id, &args.parent)
            .await?;

        let writer = global.writer();
        if writer.is_json() {
            writer.write_value(&CreatedProject {
                id: &args.id,
                name: &args.name,
                parent: &args.parent,
            })?;
        } else {
            writer.write_success(&format!(
                "Created project {} ({}) under {}",
                args.name, args.id, args.parent
            ));
        }
        Ok(())
    }
}

//
//  teamcity-client
//  cli/build_type.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Build type commands
//!
//! A build type is what the TeamCity UI calls a build configuration.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use console::style;
use serde::Serialize;

use crate::api::models::{BuildTypeDetail, BuildTypeList};
use crate::context::ContextResolver;
use crate::output::{or_dash, print_field, TableBuilder, TableOutput};

use super::{parse_key_value, GlobalOptions};

/// Manage build types
#[derive(Args, Debug)]
pub struct BuildTypeCommand {
    #[command(subcommand)]
    pub command: BuildTypeSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BuildTypeSubcommand {
    /// List build types
    #[command(visible_alias = "ls")]
    List,

    /// View a build type
    View(ViewArgs),

    /// Create a build type, optionally from a template
    Create(CreateArgs),

    /// Copy an existing build type into a project
    Copy(CopyArgs),

    /// List build types that use a template
    #[command(name = "using-template")]
    UsingTemplate(UsingTemplateArgs),
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Build type id
    pub id: String,

    /// Open in browser
    #[arg(long, short = 'w')]
    pub web: bool,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Destination project id
    #[arg(long, short = 'p')]
    pub project: String,

    /// Build type name
    #[arg(long, short = 'n')]
    pub name: String,

    /// Template to attach after creation
    #[arg(long, short = 't')]
    pub template: Option<String>,

    /// Parameter to set after creation, as NAME=VALUE (repeatable)
    #[arg(long = "param", value_name = "NAME=VALUE", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,
}

#[derive(Args, Debug)]
pub struct CopyArgs {
    /// Destination project id
    #[arg(long, short = 'p')]
    pub project: String,

    /// Name of the copy
    #[arg(long, short = 'n')]
    pub name: String,

    /// Build type id to copy
    #[arg(long)]
    pub source: String,
}

#[derive(Args, Debug)]
pub struct UsingTemplateArgs {
    /// Template id
    pub template: String,
}

impl TableOutput for BuildTypeList {
    fn print_table(&self, color: bool) {
        if self.build_type.is_empty() {
            println!("No build types found.");
            return;
        }

        TableBuilder::new()
            .color(color)
            .headers(["ID", "NAME", "PROJECT"])
            .rows(self.build_type.iter().map(|bt| {
                [
                    bt.id.clone(),
                    bt.name.clone(),
                    or_dash(bt.project_name.as_deref().or(bt.project_id.as_deref())),
                ]
            }))
            .print();
        println!("Showing {} build type(s)", self.count);
    }
}

impl TableOutput for BuildTypeDetail {
    fn print_table(&self, color: bool) {
        let title = if color {
            style(&self.name).bold().to_string()
        } else {
            self.name.clone()
        };

        println!("{}", title);
        println!();
        print_field("ID", &self.id, color);
        print_field("Project", &or_dash(self.project_id.as_deref()), color);

        if let Some(desc) = &self.description {
            print_field("Description", desc, color);
        }

        let templates: Vec<&str> = self
            .templates
            .iter()
            .flat_map(|t| t.build_type.iter().map(|bt| bt.id.as_str()))
            .collect();
        let templates = if templates.is_empty() {
            "-".to_string()
        } else {
            templates.join(", ")
        };
        print_field("Templates", &templates, color);

        if let Some(url) = &self.web_url {
            println!();
            println!("  URL: {}", url);
        }
    }
}

#[derive(Debug, Serialize)]
struct CreatedBuildType<'a> {
    id: &'a str,
    name: &'a str,
    project: &'a str,
    template: Option<&'a str>,
}

impl BuildTypeCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            BuildTypeSubcommand::List => self.list(global).await,
            BuildTypeSubcommand::View(args) => self.view(args, global).await,
            BuildTypeSubcommand::Create(args) => self.create(args, global).await,
            BuildTypeSubcommand::Copy(args) => self.copy(args, global).await,
            BuildTypeSubcommand::UsingTemplate(args) => self.using_template(args, global).await,
        }
    }

    async fn list(&self, global: &GlobalOptions) -> Result<()> {
        let client = ContextResolver::load()?.client(global)?;
        let build_types = client.build_type_list().await?;
        global.writer().write(&build_types)
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let resolver = ContextResolver::load()?;
        let client = resolver.client(global)?;

        if args.web {
            let detail = client.build_type_detail(&args.id).await?;
            let url = detail.web_url.unwrap_or_else(|| {
                format!(
                    "{}/viewType.html?buildTypeId={}",
                    resolver.resolve(global).web_url(),
                    args.id
                )
            });
            println!("Opening {} in your browser.", url);
            webbrowser::open(&url).with_context(|| format!("Failed to open {}", url))?;
            return Ok(());
        }

        let writer = global.writer();
        if writer.is_json() {
            // Raw document so every server field is shown.
            let raw = client.get_build_type(&args.id).await?;
            writer.write_value(&raw)
        } else {
            let detail = client.build_type_detail(&args.id).await?;
            writer.write(&detail)
        }
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let client = ContextResolver::load()?.client(global)?;
        let params: BTreeMap<String, String> = args.params.iter().cloned().collect();

        let id = client
            .create_build_type_from_template(
                &args.name,
                &args.project,
                args.template.as_deref(),
                &params,
            )
            .await?;

        let writer = global.writer();
        if writer.is_json() {
            writer.write_value(&CreatedBuildType {
                id: &id,
                name: &args.name,
                project: &args.project,
                template: args.template.as_deref(),
            })?;
        } else {
            writer.write_success(&format!("Created build type {} in {}", id, args.project));
            if let Some(template) = &args.template {
                writer.write_info(&format!("  template: {}", template));
            }
            if !params.is_empty() {
                writer.write_info(&format!("  parameters set: {}", params.len()));
            }
        }
        Ok(())
    }

    async fn copy(&self, args: &CopyArgs, global: &GlobalOptions) -> Result<()> {
        let client = ContextResolver::load()?.client(global)?;
        client
            .copy_build_type(&args.name, &args.project, &args.source)
            .await?;

        let writer = global.writer();
        if writer.is_json() {
            writer.write_value(&serde_json::json!({
                "success": true,
                "name": args.name,
                "project": args.project,
                "source": args.source,
            }))?;
        } else {
            writer.write_success(&format!(
                "Copied {} to {} as '{}'",
                args.source, args.project, args.name
            ));
        }
        Ok(())
    }

    async fn using_template(&self, args: &UsingTemplateArgs, global: &GlobalOptions) -> Result<()> {
        let client = ContextResolver::load()?.client(global)?;
        let build_type = client.build_types_using_template(&args.template).await?;
        let list = BuildTypeList {
            count: build_type.len() as u32,
            build_type,
        };
        global.writer().write(&list)
    }
}

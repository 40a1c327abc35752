//
//  teamcity-client
//  cli/param.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Build parameter commands
//!
//! `tc param set` only changes parameters that already exist on the build
//! type; unknown names are rejected before anything is written.

use std::collections::BTreeMap;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::models::ParameterList;
use crate::context::ContextResolver;
use crate::output::{format_bool, truncate, TableBuilder, TableOutput};

use super::{parse_key_value, GlobalOptions};

/// View and edit build type parameters
#[derive(Args, Debug)]
pub struct ParamCommand {
    #[command(subcommand)]
    pub command: ParamSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ParamSubcommand {
    /// List the parameters of a build type
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Set values of existing parameters
    Set(SetArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Build type id
    pub build_type: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Build type id
    pub build_type: String,

    /// Parameters as NAME=VALUE
    #[arg(required = true, value_name = "NAME=VALUE", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,
}

impl TableOutput for ParameterList {
    fn print_table(&self, color: bool) {
        if self.property.is_empty() {
            println!("No parameters.");
            return;
        }

        TableBuilder::new()
            .color(color)
            .headers(["NAME", "VALUE", "INHERITED"])
            .rows(self.property.iter().map(|p| {
                [
                    p.name.clone(),
                    truncate(&p.value, 60),
                    format_bool(p.inherited.unwrap_or(false), color),
                ]
            }))
            .print();
    }
}

impl ParamCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = ContextResolver::load()?.client(global)?;
        let writer = global.writer();

        match &self.command {
            ParamSubcommand::List(args) => {
                if writer.is_json() {
                    let raw = client.get_build_type_parameters(&args.build_type).await?;
                    writer.write_value(&raw)
                } else {
                    let params = client.parameter_list(&args.build_type).await?;
                    writer.write(&params)
                }
            }
            ParamSubcommand::Set(args) => {
                let params: BTreeMap<String, String> = args.params.iter().cloned().collect();
                client
                    .update_build_type_parameters(&args.build_type, &params)
                    .await?;

                if writer.is_json() {
                    writer.write_value(&serde_json::json!({
                        "success": true,
                        "build_type": args.build_type,
                        "updated": params,
                    }))
                } else {
                    writer.write_success(&format!(
                        "Updated {} parameter(s) on {}",
                        params.len(),
                        args.build_type
                    ));
                    for (name, value) in &params {
                        writer.write_info(&format!("  {} = {}", name, value));
                    }
                    Ok(())
                }
            }
        }
    }
}

//
//  teamcity-client
//  cli/template.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Template commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::context::ContextResolver;

use super::GlobalOptions;

/// Attach or detach build type templates
#[derive(Args, Debug)]
pub struct TemplateCommand {
    #[command(subcommand)]
    pub command: TemplateSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TemplateSubcommand {
    /// Attach a template to a build type
    Attach(AttachArgs),

    /// Detach the template from a build type
    Detach(DetachArgs),
}

#[derive(Args, Debug)]
pub struct AttachArgs {
    /// Template id
    pub template: String,

    /// Build type id
    pub build_type: String,
}

#[derive(Args, Debug)]
pub struct DetachArgs {
    /// Build type id
    pub build_type: String,
}

impl TemplateCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = ContextResolver::load()?.client(global)?;
        let writer = global.writer();

        match &self.command {
            TemplateSubcommand::Attach(args) => {
                client
                    .attach_template_to_build_type(&args.template, &args.build_type)
                    .await?;
                if writer.is_json() {
                    writer.write_value(&serde_json::json!({
                        "success": true,
                        "template": args.template,
                        "build_type": args.build_type,
                    }))?;
                } else {
                    writer.write_success(&format!(
                        "Attached {} to {}",
                        args.template, args.build_type
                    ));
                }
            }
            TemplateSubcommand::Detach(args) => {
                client
                    .detach_template_from_build_type(&args.build_type)
                    .await?;
                if writer.is_json() {
                    writer.write_value(&serde_json::json!({
                        "success": true,
                        "build_type": args.build_type,
                    }))?;
                } else {
                    writer.write_success(&format!("Detached template from {}", args.build_type));
                }
            }
        }

        Ok(())
    }
}

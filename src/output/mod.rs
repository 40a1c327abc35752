//
//  teamcity-client
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Output formatting for `tc`:
//!
//! - **Table format**: Human-readable tables for interactive terminal use
//! - **JSON format**: Machine-readable JSON for scripting (`--json`)
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: The available output formats
//! - [`OutputWriter`]: Main entry point for writing formatted output
//! - [`TableOutput`]: Trait for types that can be rendered for a terminal
//!
//! ## Example
//!
//! ```rust,ignore
//! use teamcity_client::output::{OutputWriter, OutputFormat};
//!
//! let writer = OutputWriter::new(OutputFormat::Json);
//! writer.write(&build_types)?;
//! writer.write_success("Build queued");
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use serde::Serialize;

/// The available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable tables (default)
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Picks the format from the global `--json` flag.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Table
        }
    }
}

/// Writes values and status messages in the selected format.
///
/// Colour is enabled when the terminal supports it. Status messages go to
/// stderr in JSON mode so stdout stays parseable.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Writes a value as a table or as JSON.
    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value),
            OutputFormat::Table => {
                value.print_table(self.color);
                Ok(())
            }
        }
    }

    /// Writes an arbitrary JSON value regardless of format.
    pub fn write_value<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        write_json(value)
    }

    pub fn write_info(&self, msg: &str) {
        if self.is_json() {
            eprintln!("{}", msg);
        } else {
            println!("{}", msg);
        }
    }

    pub fn write_success(&self, msg: &str) {
        use console::style;
        let line = if self.color {
            format!("{} {}", style("✓").green().bold(), msg)
        } else {
            format!("✓ {}", msg)
        };
        if self.is_json() {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

/// Trait for values that know how to render themselves in a terminal.
pub trait TableOutput {
    /// Prints the value to stdout, using colour when `color` is set.
    fn print_table(&self, color: bool);
}

/// Prints a `key: value` line with the key dimmed when colour is enabled.
pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("  {:<12} {}", style(format!("{}:", key)).dim(), value);
    } else {
        println!("  {:<12} {}", format!("{}:", key), value);
    }
}

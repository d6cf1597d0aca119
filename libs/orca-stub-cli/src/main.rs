// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Orca stub CLI
//!
//! Generates the Python type stub for the processors registered in an Orca
//! internal state snapshot.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use config::{GenerateSettings, Overrides};

#[derive(Parser)]
#[command(name = "orca-stub")]
#[command(author, version, about = "Orca Python stub generator", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the Python stub file
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        /// Directory to write the stub into (default: current directory)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Stub file name (default: orca_stub.pyi)
        #[arg(long, value_name = "NAME")]
        file_name: Option<String>,

        /// Custom Tera template to render instead of the built-in one
        #[arg(long, value_name = "FILE")]
        template: Option<PathBuf>,
    },

    /// Check that a state file maps cleanly, without writing anything
    Validate {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Internal state file (YAML, or JSON by extension)
    #[arg(short, long, value_name = "FILE")]
    schema: Option<PathBuf>,

    /// pyproject.toml with a [tool.orca] table
    #[arg(long, value_name = "FILE")]
    project_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Generate {
            source,
            output,
            file_name,
            template,
        } => {
            let settings = GenerateSettings::resolve(
                Overrides {
                    schema: source.schema,
                    output,
                    file_name,
                    template,
                },
                source.project_file.as_deref(),
            )?;
            commands::generate::run(&settings)?;
        }
        Commands::Validate { source } => {
            let settings = GenerateSettings::resolve(
                Overrides {
                    schema: source.schema,
                    ..Overrides::default()
                },
                source.project_file.as_deref(),
            )?;
            commands::validate::run(&settings.schema)?;
        }
    }

    Ok(())
}

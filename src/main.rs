// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 gluepipe contributors

//! gluepipe - DataDevOps pipeline manager
//!
//! Declare, validate and (simulated) deploy Glue job pipelines.

use clap::Parser;
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gluepipe::cli::{Cli, Commands};
use gluepipe::{FileStore, PipelineManager};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for reports
    let default_filter = if cli.verbose {
        "gluepipe=debug"
    } else {
        "gluepipe=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Change to specified directory if provided
    if let Some(ref dir) = cli.directory {
        std::env::set_current_dir(dir).map_err(|e| {
            miette::miette!("Failed to change to directory '{}': {}", dir.display(), e)
        })?;
    }

    let mut manager = PipelineManager::new(FileStore::new(&cli.config));

    // Dispatch to command handlers
    match cli.command {
        Commands::Init {
            name,
            environment,
            glue_version,
        } => gluepipe::cli::init::run(&mut manager, &name, &environment, &glue_version, cli.verbose),
        Commands::AddJob {
            job_name,
            script,
            job_type,
        } => gluepipe::cli::add_job::run(&mut manager, &job_name, &script, &job_type, cli.verbose),
        Commands::List => gluepipe::cli::list::run(&manager, cli.verbose),
        Commands::Validate => gluepipe::cli::validate::run(&manager, cli.verbose),
        Commands::Status => gluepipe::cli::status::run(&manager, cli.verbose),
        Commands::Deploy { environment } => {
            gluepipe::cli::deploy::run(&manager, environment.as_deref(), cli.verbose)
        }
    }
}

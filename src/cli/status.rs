// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 gluepipe contributors

//! Status command - print a snapshot of the pipeline

use miette::Result;

use crate::pipeline::PipelineManager;
use crate::store::ConfigStore;
use crate::utils::{format_timestamp, print_framed_title, print_rule};

/// Run the status command
pub fn run<S: ConfigStore>(manager: &PipelineManager<S>, verbose: bool) -> Result<()> {
    let status = manager.status()?;

    println!();
    print_framed_title("PIPELINE STATUS");
    println!("Pipeline Name: {}", status.name);
    println!("Environment: {}", status.environment);
    println!("Glue Version: {}", status.engine_version);
    println!("Created: {}", format_timestamp(status.created_at.as_ref()));
    println!("Total Jobs: {}", status.job_count);
    if verbose {
        println!("Document: {}", manager.store().location().display());
    }
    print_rule();
    println!();

    Ok(())
}

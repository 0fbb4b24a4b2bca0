// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 gluepipe contributors

//! List command - show the pipeline's jobs in definition order

use colored::Colorize;
use miette::Result;

use crate::pipeline::PipelineManager;
use crate::store::ConfigStore;
use crate::utils::format_timestamp;

/// Run the list command
pub fn run<S: ConfigStore>(manager: &PipelineManager<S>, verbose: bool) -> Result<()> {
    let list = manager.list_jobs()?;

    println!();
    println!("{} {}", "Pipeline:".bold(), list.pipeline);
    println!("{} {}", "Environment:".bold(), list.environment);
    println!();
    println!("{} ({}):", "Jobs".bold(), list.jobs.len());

    for job in &list.jobs {
        println!("  {}. {} ({})", job.index, job.name, job.job_type.dimmed());
        println!("     Script: {}", job.script);
        if verbose {
            println!("     Added: {}", format_timestamp(job.added_at.as_ref()));
        }
    }

    Ok(())
}

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 gluepipe contributors

//! Deploy command - simulated deployment of every job

use colored::Colorize;
use miette::Result;

use crate::pipeline::{PipelineManager, SubmissionOutcome};
use crate::store::ConfigStore;
use crate::utils::{print_error, print_info};

/// Run the deploy command
pub fn run<S: ConfigStore>(
    manager: &PipelineManager<S>,
    environment: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let report = manager.deploy(environment)?;

    println!("{} {}", "Deploying pipeline:".bold(), report.pipeline);
    let suffix = if report.overridden { " (override)" } else { "" };
    println!("Environment: {}{}", report.environment, suffix.dimmed());
    println!("Jobs to deploy: {}", report.jobs.len());
    println!();

    for job in &report.jobs {
        match &job.outcome {
            SubmissionOutcome::Rejected { reason } => {
                print_error(&format!("Deploying job: {} - {}", job.name, reason));
            }
            SubmissionOutcome::Submitted { run_id } if verbose => {
                print_info(&format!("Deploying job: {} [{}]", job.name, run_id));
            }
            _ => print_info(&format!("Deploying job: {}", job.name)),
        }
    }

    println!();
    if verbose {
        println!("{}", format!("Backend: {}", report.backend).dimmed());
    }

    if report.success() {
        println!("{}", "Pipeline deployed successfully!".green().bold());
        Ok(())
    } else {
        Err(miette::miette!("Pipeline deployment failed"))
    }
}

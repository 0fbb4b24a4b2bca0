// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 gluepipe contributors

//! Add-job command - append a job to the pipeline

use miette::Result;

use crate::pipeline::PipelineManager;
use crate::store::ConfigStore;
use crate::utils::print_success;

/// Run the add-job command
pub fn run<S: ConfigStore>(
    manager: &mut PipelineManager<S>,
    job_name: &str,
    script: &str,
    job_type: &str,
    verbose: bool,
) -> Result<()> {
    let report = manager.add_job(job_name, script, Some(job_type))?;

    print_success(&format!("Job '{}' added to pipeline", report.job.name));

    if verbose {
        println!("    Position: {}", report.position);
        println!("    Type: {}", report.job.job_type);
        println!("    Script: {}", report.job.script);
    }

    Ok(())
}

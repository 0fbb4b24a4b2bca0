// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 gluepipe contributors

//! Init command - create (or overwrite) the pipeline document

use colored::Colorize;
use miette::Result;

use crate::pipeline::PipelineManager;
use crate::store::ConfigStore;
use crate::utils::{print_info, print_success, print_warning};

/// Run the init command
pub fn run<S: ConfigStore>(
    manager: &mut PipelineManager<S>,
    name: &str,
    environment: &str,
    glue_version: &str,
    verbose: bool,
) -> Result<()> {
    println!("{} {}", "Initializing pipeline:".bold(), name);
    println!();

    let report = manager.initialize(name, Some(environment), Some(glue_version))?;

    if let Some(previous) = &report.replaced {
        print_warning(&format!(
            "Replaced existing pipeline '{}' ({} job(s) discarded)",
            previous, report.discarded_jobs
        ));
    }

    print_success(&format!("Pipeline '{}' initialized", report.document.name));
    print_info(&format!(
        "Configuration saved to {}",
        manager.store().location().display()
    ));

    if verbose {
        println!();
        println!("  Environment: {}", report.document.environment);
        println!("  Glue version: {}", report.document.engine_version);
    }

    println!();
    println!("Next steps:");
    println!(
        "  1. Add jobs with {}",
        "gluepipe add-job --job-name <NAME> --script <PATH>".cyan()
    );
    println!("  2. Check the pipeline with {}", "gluepipe validate".cyan());
    println!();

    Ok(())
}

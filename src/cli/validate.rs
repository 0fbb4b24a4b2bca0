// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 gluepipe contributors

//! Validate command - check pipeline configuration

use colored::Colorize;
use miette::Result;

use crate::errors::GluepipeError;
use crate::pipeline::PipelineManager;
use crate::store::ConfigStore;
use crate::utils::{print_error, print_warning};

/// Run the validate command
pub fn run<S: ConfigStore>(manager: &PipelineManager<S>, verbose: bool) -> Result<()> {
    let validation = manager.validate()?;

    println!("{}", "Validating pipeline configuration...".bold());

    if !validation.errors.is_empty() {
        println!();
        println!(
            "{}",
            format!("Validation failed with {} error(s):", validation.errors.len())
                .red()
                .bold()
        );
        for error in &validation.errors {
            print_error(error);
        }
        return Err(GluepipeError::ValidationFailed {
            count: validation.errors.len(),
        }
        .into());
    }

    if validation.has_warnings() {
        println!();
        println!(
            "{}",
            format!("{} warning(s):", validation.warnings.len())
                .yellow()
                .bold()
        );
        for warning in &validation.warnings {
            print_warning(warning);
        }
    }

    if verbose {
        let status = manager.status()?;
        println!();
        println!("{}:", "Pipeline summary".bold());
        println!("  Name: {}", status.name);
        println!("  Jobs: {}", status.job_count);
    }

    println!();
    println!("{}", "Pipeline configuration is valid!".green().bold());
    Ok(())
}

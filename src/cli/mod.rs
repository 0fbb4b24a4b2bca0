// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 gluepipe contributors

//! CLI command definitions and handlers
//!
//! Defines the command-line interface for gluepipe.

pub mod add_job;
pub mod deploy;
pub mod init;
pub mod list;
pub mod status;
pub mod validate;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::store::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};

/// DataDevOps tool for Glue job pipelines
///
/// Declare a pipeline and its jobs, validate the declaration, and run a
/// simulated deployment.
#[derive(Parser, Debug)]
#[clap(
    name = "gluepipe",
    version,
    about = "DataDevOps tool for declaring, validating and deploying Glue job pipelines",
    long_about = None,
    after_help = "Examples:\n\
        gluepipe init --name my-pipeline --environment dev\n\
        gluepipe add-job --job-name etl-job1 --script s3://bucket/script.py\n\
        gluepipe list\n\
        gluepipe validate\n\
        gluepipe deploy --environment prod\n\n\
        See 'gluepipe <command> --help' for more information on a specific command."
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,

    /// Pipeline document to operate on (.json, .yaml/.yml or .toml)
    #[clap(
        long,
        global = true,
        env = CONFIG_ENV_VAR,
        default_value = DEFAULT_CONFIG_FILE,
        value_name = "PATH"
    )]
    pub config: PathBuf,

    /// Enable verbose output
    #[clap(short, long, global = true)]
    pub verbose: bool,

    /// Change to directory before executing
    #[clap(short = 'C', long, global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new pipeline
    ///
    /// WARNING: an existing pipeline document is overwritten and all of its
    /// jobs are discarded.
    Init {
        /// Pipeline name
        #[clap(long)]
        name: String,

        /// Environment (dev/prod)
        #[clap(short, long, default_value = "dev")]
        environment: String,

        /// AWS Glue version
        #[clap(long, default_value = "3.0")]
        glue_version: String,
    },

    /// Add a job to the end of the pipeline
    AddJob {
        /// Job name
        #[clap(long)]
        job_name: String,

        /// Script path or URI
        #[clap(long)]
        script: String,

        /// Job type
        #[clap(long, default_value = "glueetl")]
        job_type: String,
    },

    /// List all jobs in the pipeline
    List,

    /// Validate pipeline configuration
    Validate,

    /// Show pipeline status
    Status,

    /// Deploy the pipeline (simulated; no job is executed)
    Deploy {
        /// Target environment for this deployment only (not saved)
        #[clap(short, long)]
        environment: Option<String>,
    },
}

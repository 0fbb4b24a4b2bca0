// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 gluepipe contributors

//! # gluepipe - DataDevOps pipeline manager
//!
//! `gluepipe` keeps a declarative description of a Glue-style job pipeline in a
//! single configuration document and validates and (simulated) deploys it.
//!
//! ## Quick Start
//!
//! ```bash
//! # Create the pipeline document (overwrites an existing one)
//! gluepipe init --name my-pipeline --environment dev
//!
//! # Add jobs
//! gluepipe add-job --job-name etl-job1 --script s3://bucket/script.py
//!
//! # Inspect and check
//! gluepipe list
//! gluepipe validate
//!
//! # Simulated deployment
//! gluepipe deploy --environment prod
//! ```

pub mod cli;
pub mod errors;
pub mod pipeline;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use errors::{GluepipeError, GluepipeResult};
pub use pipeline::{JobSpec, PipelineDocument, PipelineManager};
pub use store::{ConfigStore, FileStore, MemoryStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

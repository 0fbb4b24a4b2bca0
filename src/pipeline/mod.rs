// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 gluepipe contributors

//! Pipeline definitions and operations
//!
//! This module defines the pipeline document schema, its validation rules,
//! the job submission seam used by deploy, and the manager that ties them
//! to a document store.

mod definition;
mod deploy;
mod manager;
mod validation;

pub use definition::*;
pub use deploy::{DeployReport, DeployedJob, JobSubmitter, SimulatedSubmitter, SubmissionOutcome};
pub use manager::{AddJobReport, InitReport, JobList, JobListing, PipelineManager, PipelineStatus};
pub use validation::{PipelineValidator, ValidationResult};

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 gluepipe contributors

//! Job submission
//!
//! Deployment hands every job to a [`JobSubmitter`]. The only submitter
//! shipped here is [`SimulatedSubmitter`], which contacts nothing; a real
//! execution backend plugs in behind the same trait.

use crate::pipeline::JobSpec;

/// Outcome of submitting one job
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Nothing was executed; the job was only announced
    Simulated,
    /// A backend accepted the job
    Submitted { run_id: String },
    /// A backend rejected the job
    Rejected { reason: String },
}

impl SubmissionOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Trait for job execution backends
pub trait JobSubmitter {
    /// Submit a single job for the given environment
    fn submit(&mut self, job: &JobSpec, environment: &str) -> SubmissionOutcome;

    /// Name shown in deploy reports
    fn name(&self) -> &str;
}

/// Submitter that performs no execution
#[derive(Debug, Default, Clone)]
pub struct SimulatedSubmitter;

impl JobSubmitter for SimulatedSubmitter {
    fn submit(&mut self, job: &JobSpec, environment: &str) -> SubmissionOutcome {
        tracing::debug!("Simulating deployment of job '{}' to {}", job.name, environment);
        SubmissionOutcome::Simulated
    }

    fn name(&self) -> &str {
        "simulation"
    }
}

/// Per-job entry of a deploy report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedJob {
    pub name: String,
    pub job_type: String,
    pub outcome: SubmissionOutcome,
}

/// Result of deploying a pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployReport {
    /// Pipeline name
    pub pipeline: String,
    /// Environment the jobs were deployed to
    pub environment: String,
    /// Whether the environment came from an override
    pub overridden: bool,
    /// Submitter used
    pub backend: String,
    /// Jobs in stored order
    pub jobs: Vec<DeployedJob>,
}

impl DeployReport {
    /// A simulated deploy never fails; only a real backend can reject jobs
    pub fn success(&self) -> bool {
        !self.jobs.iter().any(|j| j.outcome.is_failure())
    }
}

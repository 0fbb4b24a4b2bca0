// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 gluepipe contributors

//! Pipeline validation
//!
//! Checks a pipeline document for missing fields. Every violation is
//! collected; nothing stops at the first error.

use crate::pipeline::PipelineDocument;

/// Pipeline validator
pub struct PipelineValidator;

impl PipelineValidator {
    /// Validate a pipeline document
    pub fn validate(doc: &PipelineDocument) -> ValidationResult {
        let mut result = ValidationResult::new();

        if doc.name.is_empty() {
            result.add_error("Pipeline name is missing");
        }

        if doc.jobs.is_empty() {
            result.add_warning("No jobs defined in pipeline");
        }

        for (idx, job) in doc.indexed_jobs() {
            if job.name.is_empty() {
                result.add_error(&format!("Job {} is missing a name", idx));
            }
            if job.script.is_empty() {
                result.add_error(&format!("Job {} is missing a script path", idx));
            }
        }

        result
    }
}

/// Result of pipeline validation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    pub fn add_warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

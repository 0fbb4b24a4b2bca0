// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 gluepipe contributors

//! Pipeline document structures
//!
//! Defines the schema of the persisted pipeline document. Field names on disk
//! follow the established `config.json` layout (`pipeline_name`,
//! `glue_version`, `type`, ...), and every field has a load-time default so
//! hand-edited or older documents still parse.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Environment used when none is given
pub const DEFAULT_ENVIRONMENT: &str = "dev";

/// Engine version used when none is given
pub const DEFAULT_ENGINE_VERSION: &str = "3.0";

/// Job kind used when none is given
pub const DEFAULT_JOB_TYPE: &str = "glueetl";

/// The persisted pipeline document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineDocument {
    /// Pipeline name
    #[serde(rename = "pipeline_name", default)]
    pub name: String,

    /// When the pipeline was initialized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,

    /// Environment tag (dev, prod, ...)
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Target engine version
    #[serde(rename = "glue_version", default = "default_engine_version")]
    pub engine_version: String,

    /// Jobs in definition order
    #[serde(default)]
    pub jobs: Vec<JobSpec>,
}

fn default_environment() -> String {
    DEFAULT_ENVIRONMENT.to_string()
}

fn default_engine_version() -> String {
    DEFAULT_ENGINE_VERSION.to_string()
}

fn default_job_type() -> String {
    DEFAULT_JOB_TYPE.to_string()
}

impl PipelineDocument {
    /// Create a fresh document with no jobs
    pub fn new(
        name: impl Into<String>,
        environment: impl Into<String>,
        engine_version: impl Into<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            name: name.into(),
            created_at: Some(created_at),
            environment: environment.into(),
            engine_version: engine_version.into(),
            jobs: Vec::new(),
        }
    }

    /// Number of jobs in the pipeline
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Jobs paired with their 1-based display index
    pub fn indexed_jobs(&self) -> impl Iterator<Item = (usize, &JobSpec)> {
        self.jobs.iter().enumerate().map(|(i, job)| (i + 1, job))
    }
}

/// A single job entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSpec {
    /// Job name (should be unique within the pipeline)
    #[serde(default)]
    pub name: String,

    /// Path or URI of the job script; never read by gluepipe
    #[serde(default)]
    pub script: String,

    /// Execution kind
    #[serde(rename = "type", default = "default_job_type")]
    pub job_type: String,

    /// When the job was appended
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<NaiveDateTime>,
}

impl JobSpec {
    pub fn new(
        name: impl Into<String>,
        script: impl Into<String>,
        job_type: impl Into<String>,
        added_at: NaiveDateTime,
    ) -> Self {
        Self {
            name: name.into(),
            script: script.into(),
            job_type: job_type.into(),
            added_at: Some(added_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_original_layout() {
        let json = r#"{
  "pipeline_name": "sales-etl",
  "created_at": "2024-03-01T09:15:30.123456",
  "environment": "prod",
  "glue_version": "4.0",
  "jobs": [
    {
      "name": "extract",
      "script": "s3://bucket/extract.py",
      "type": "pythonshell",
      "added_at": "2024-03-01T09:16:00.000001"
    }
  ]
}"#;

        let doc: PipelineDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.name, "sales-etl");
        assert_eq!(doc.environment, "prod");
        assert_eq!(doc.engine_version, "4.0");
        assert_eq!(doc.jobs.len(), 1);
        assert_eq!(doc.jobs[0].job_type, "pythonshell");
        assert!(doc.created_at.is_some());
        assert!(doc.jobs[0].added_at.is_some());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let json = r#"{ "pipeline_name": "bare", "jobs": [ { "name": "j1" } ] }"#;

        let doc: PipelineDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.environment, DEFAULT_ENVIRONMENT);
        assert_eq!(doc.engine_version, DEFAULT_ENGINE_VERSION);
        assert_eq!(doc.created_at, None);
        assert_eq!(doc.jobs[0].job_type, DEFAULT_JOB_TYPE);
        assert_eq!(doc.jobs[0].script, "");
    }

    #[test]
    fn test_missing_name_loads_empty() {
        let doc: PipelineDocument = serde_json::from_str(r#"{ "environment": "dev" }"#).unwrap();
        assert!(doc.name.is_empty());
        assert!(doc.jobs.is_empty());
    }

    #[test]
    fn test_serialized_keys() {
        let at = chrono::NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        let mut doc = PipelineDocument::new("p", "dev", "3.0", at);
        doc.jobs.push(JobSpec::new("j", "s3://b/j.py", "glueetl", at));

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["pipeline_name"], "p");
        assert_eq!(value["glue_version"], "3.0");
        assert_eq!(value["jobs"][0]["type"], "glueetl");
        assert_eq!(value["created_at"], "2025-01-02T03:04:05");
    }

    #[test]
    fn test_indexed_jobs_are_one_based() {
        let at = chrono::Local::now().naive_local();
        let mut doc = PipelineDocument::new("p", "dev", "3.0", at);
        doc.jobs.push(JobSpec::new("a", "a.py", "glueetl", at));
        doc.jobs.push(JobSpec::new("b", "b.py", "glueetl", at));

        let indices: Vec<_> = doc.indexed_jobs().map(|(i, j)| (i, j.name.as_str())).collect();
        assert_eq!(indices, vec![(1, "a"), (2, "b")]);
        assert_eq!(doc.job_count(), 2);
    }
}

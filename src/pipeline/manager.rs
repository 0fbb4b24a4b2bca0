// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 gluepipe contributors

//! Pipeline manager
//!
//! Implements the pipeline operations on top of a [`ConfigStore`]. Every
//! operation reloads the document first; mutating operations save the full
//! document back before returning.

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

use crate::errors::{GluepipeError, GluepipeResult};
use crate::pipeline::{
    DeployReport, DeployedJob, JobSpec, JobSubmitter, PipelineDocument, PipelineValidator,
    SimulatedSubmitter, ValidationResult, DEFAULT_ENGINE_VERSION, DEFAULT_ENVIRONMENT,
    DEFAULT_JOB_TYPE,
};
use crate::store::ConfigStore;

/// Result of `initialize`
#[derive(Debug, Clone)]
pub struct InitReport {
    /// The freshly written document
    pub document: PipelineDocument,
    /// Name of the pipeline that was overwritten, if any
    pub replaced: Option<String>,
    /// Number of jobs discarded by the overwrite
    pub discarded_jobs: usize,
}

/// Result of `add_job`
#[derive(Debug, Clone)]
pub struct AddJobReport {
    pub job: JobSpec,
    /// 1-based position of the new job
    pub position: usize,
}

/// One row of a job listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListing {
    /// 1-based display index
    pub index: usize,
    pub name: String,
    pub job_type: String,
    pub script: String,
    pub added_at: Option<NaiveDateTime>,
}

/// Result of `list_jobs`
#[derive(Debug, Clone)]
pub struct JobList {
    pub pipeline: String,
    pub environment: String,
    pub jobs: Vec<JobListing>,
}

/// Result of `status`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineStatus {
    pub name: String,
    pub environment: String,
    pub engine_version: String,
    pub created_at: Option<NaiveDateTime>,
    pub job_count: usize,
}

/// Pipeline operations over a document store
pub struct PipelineManager<S: ConfigStore> {
    store: S,
}

impl<S: ConfigStore> PipelineManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn load_existing(&self) -> GluepipeResult<PipelineDocument> {
        self.store
            .load()?
            .ok_or_else(|| GluepipeError::NoPipeline {
                path: self.store.location().to_path_buf(),
            })
    }

    /// Create a new pipeline, overwriting any existing one
    ///
    /// This is destructive: an existing pipeline and all of its jobs are
    /// replaced without confirmation.
    pub fn initialize(
        &mut self,
        name: &str,
        environment: Option<&str>,
        engine_version: Option<&str>,
    ) -> GluepipeResult<InitReport> {
        if name.trim().is_empty() {
            return Err(GluepipeError::InvalidName);
        }

        // A corrupt previous document is overwritten like any other
        let previous = self.store.load().unwrap_or_else(|e| {
            debug!("Ignoring unreadable previous document: {}", e);
            None
        });

        let document = PipelineDocument::new(
            name,
            environment.unwrap_or(DEFAULT_ENVIRONMENT),
            engine_version.unwrap_or(DEFAULT_ENGINE_VERSION),
            now(),
        );
        self.store.save(&document)?;

        info!(
            "Initialized pipeline '{}' at {}",
            document.name,
            self.store.location().display()
        );

        Ok(InitReport {
            discarded_jobs: previous.as_ref().map_or(0, |p| p.jobs.len()),
            replaced: previous.map(|p| p.name),
            document,
        })
    }

    /// Append a job to the end of the pipeline
    pub fn add_job(
        &mut self,
        job_name: &str,
        script: &str,
        job_type: Option<&str>,
    ) -> GluepipeResult<AddJobReport> {
        let mut doc = self.load_existing()?;

        let job = JobSpec::new(job_name, script, job_type.unwrap_or(DEFAULT_JOB_TYPE), now());
        doc.jobs.push(job.clone());
        self.store.save(&doc)?;

        info!("Added job '{}' to pipeline '{}'", job.name, doc.name);

        Ok(AddJobReport {
            job,
            position: doc.jobs.len(),
        })
    }

    /// List jobs in definition order
    pub fn list_jobs(&self) -> GluepipeResult<JobList> {
        let doc = self.load_existing()?;

        let jobs = doc
            .indexed_jobs()
            .map(|(index, job)| JobListing {
                index,
                name: job.name.clone(),
                job_type: job.job_type.clone(),
                script: job.script.clone(),
                added_at: job.added_at,
            })
            .collect();

        Ok(JobList {
            pipeline: doc.name,
            environment: doc.environment,
            jobs,
        })
    }

    /// Check the document for missing fields
    pub fn validate(&self) -> GluepipeResult<ValidationResult> {
        let doc = self.load_existing()?;
        let result = PipelineValidator::validate(&doc);
        debug!(
            "Validated pipeline '{}': {} error(s), {} warning(s)",
            doc.name,
            result.errors.len(),
            result.warnings.len()
        );
        Ok(result)
    }

    /// Snapshot of the pipeline's identity and size
    pub fn status(&self) -> GluepipeResult<PipelineStatus> {
        let doc = self.load_existing()?;
        Ok(PipelineStatus {
            job_count: doc.job_count(),
            name: doc.name,
            environment: doc.environment,
            engine_version: doc.engine_version,
            created_at: doc.created_at,
        })
    }

    /// Deploy every job through the simulated submitter
    pub fn deploy(&self, environment_override: Option<&str>) -> GluepipeResult<DeployReport> {
        self.deploy_with(environment_override, &mut SimulatedSubmitter)
    }

    /// Deploy every job through `submitter`, in stored order
    ///
    /// Deployment is not gated on validation, and an environment override
    /// is never written back to the document.
    pub fn deploy_with(
        &self,
        environment_override: Option<&str>,
        submitter: &mut dyn JobSubmitter,
    ) -> GluepipeResult<DeployReport> {
        let doc = self.load_existing()?;

        let environment = environment_override
            .map(str::to_string)
            .unwrap_or_else(|| doc.environment.clone());

        let jobs = doc
            .jobs
            .iter()
            .map(|job| DeployedJob {
                name: job.name.clone(),
                job_type: job.job_type.clone(),
                outcome: submitter.submit(job, &environment),
            })
            .collect();

        info!(
            "Deployed pipeline '{}' to {} via {}",
            doc.name,
            environment,
            submitter.name()
        );

        Ok(DeployReport {
            pipeline: doc.name,
            overridden: environment_override.is_some(),
            environment,
            backend: submitter.name().to_string(),
            jobs,
        })
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::SubmissionOutcome;
    use crate::store::MemoryStore;

    fn initialized(name: &str) -> PipelineManager<MemoryStore> {
        let mut manager = PipelineManager::new(MemoryStore::new());
        manager.initialize(name, None, None).unwrap();
        manager
    }

    #[test]
    fn test_init_then_status() {
        let manager = initialized("orders");
        let status = manager.status().unwrap();
        assert_eq!(status.name, "orders");
        assert_eq!(status.job_count, 0);
        assert_eq!(status.environment, "dev");
        assert_eq!(status.engine_version, "3.0");
        assert!(status.created_at.is_some());
    }

    #[test]
    fn test_init_rejects_empty_name() {
        let mut manager = PipelineManager::new(MemoryStore::new());
        let err = manager.initialize("  ", None, None).unwrap_err();
        assert!(matches!(err, GluepipeError::InvalidName));
        assert!(manager.store().document().is_none());
    }

    #[test]
    fn test_init_uses_given_environment_and_version() {
        let mut manager = PipelineManager::new(MemoryStore::new());
        let report = manager.initialize("orders", Some("prod"), Some("4.0")).unwrap();
        assert_eq!(report.document.environment, "prod");
        assert_eq!(report.document.engine_version, "4.0");
        assert!(report.replaced.is_none());
    }

    #[test]
    fn test_reinit_discards_jobs() {
        let mut manager = initialized("orders");
        manager.add_job("a", "a.py", None).unwrap();
        manager.add_job("b", "b.py", None).unwrap();

        let report = manager.initialize("orders-v2", None, None).unwrap();
        assert_eq!(report.replaced.as_deref(), Some("orders"));
        assert_eq!(report.discarded_jobs, 2);

        let status = manager.status().unwrap();
        assert_eq!(status.name, "orders-v2");
        assert_eq!(status.job_count, 0);
    }

    #[test]
    fn test_add_job_without_pipeline() {
        let mut manager = PipelineManager::new(MemoryStore::new());
        let err = manager.add_job("a", "a.py", None).unwrap_err();
        assert!(err.is_no_pipeline());
        assert!(manager.store().document().is_none());
        assert_eq!(manager.store().save_count(), 0);
    }

    #[test]
    fn test_add_job_appends_in_order() {
        let mut manager = initialized("orders");
        manager.add_job("extract", "s3://b/extract.py", None).unwrap();
        manager.add_job("transform", "s3://b/transform.py", Some("pythonshell")).unwrap();
        let report = manager.add_job("load", "s3://b/load.py", None).unwrap();
        assert_eq!(report.position, 3);
        assert_eq!(report.job.job_type, "glueetl");

        let list = manager.list_jobs().unwrap();
        let rows: Vec<_> = list.jobs.iter().map(|j| (j.index, j.name.as_str())).collect();
        assert_eq!(rows, vec![(1, "extract"), (2, "transform"), (3, "load")]);
        assert_eq!(list.jobs[1].job_type, "pythonshell");
        assert_eq!(list.jobs[2].script, "s3://b/load.py");
        assert!(list.jobs.iter().all(|j| j.added_at.is_some()));
    }

    #[test]
    fn test_failed_save_leaves_document_unchanged() {
        struct ReadOnlyStore(MemoryStore);

        impl ConfigStore for ReadOnlyStore {
            fn load(&self) -> GluepipeResult<Option<PipelineDocument>> {
                self.0.load()
            }

            fn save(&mut self, _doc: &PipelineDocument) -> GluepipeResult<()> {
                Err(GluepipeError::FileWriteError {
                    path: self.location().to_path_buf(),
                    error: "read-only".into(),
                })
            }

            fn location(&self) -> &std::path::Path {
                self.0.location()
            }
        }

        let at = now();
        let mut doc = PipelineDocument::new("orders", "dev", "3.0", at);
        doc.jobs.push(JobSpec::new("extract", "e.py", "glueetl", at));
        let mut manager =
            PipelineManager::new(ReadOnlyStore(MemoryStore::with_document(doc.clone())));

        let err = manager.add_job("load", "l.py", None).unwrap_err();
        assert!(matches!(err, GluepipeError::FileWriteError { .. }));
        assert_eq!(manager.store().0.document(), Some(&doc));
        assert_eq!(manager.list_jobs().unwrap().jobs.len(), 1);
    }

    #[test]
    fn test_add_job_allows_duplicates() {
        let mut manager = initialized("orders");
        manager.add_job("same", "a.py", None).unwrap();
        manager.add_job("same", "b.py", None).unwrap();
        assert_eq!(manager.list_jobs().unwrap().jobs.len(), 2);
    }

    #[test]
    fn test_read_operations_need_pipeline() {
        let manager = PipelineManager::new(MemoryStore::new());
        assert!(manager.list_jobs().unwrap_err().is_no_pipeline());
        assert!(manager.validate().unwrap_err().is_no_pipeline());
        assert!(manager.status().unwrap_err().is_no_pipeline());
        assert!(manager.deploy(None).unwrap_err().is_no_pipeline());
    }

    #[test]
    fn test_read_operations_do_not_save() {
        let mut manager = initialized("orders");
        manager.add_job("a", "a.py", None).unwrap();
        let saves = manager.store().save_count();

        manager.list_jobs().unwrap();
        manager.validate().unwrap();
        manager.status().unwrap();
        manager.deploy(Some("prod")).unwrap();

        assert_eq!(manager.store().save_count(), saves);
    }

    #[test]
    fn test_validate_reports_errors_in_rule_order() {
        let at = now();
        let mut doc = PipelineDocument::new("", "dev", "3.0", at);
        doc.jobs.push(JobSpec::new("load", "", "glueetl", at));
        let manager = PipelineManager::new(MemoryStore::with_document(doc));

        let result = manager.validate().unwrap();
        assert_eq!(
            result.errors,
            vec!["Pipeline name is missing", "Job 1 is missing a script path"]
        );
    }

    #[test]
    fn test_validate_clean_and_empty() {
        let mut manager = initialized("orders");
        let result = manager.validate().unwrap();
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);

        manager.add_job("a", "a.py", None).unwrap();
        let result = manager.validate().unwrap();
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_deploy_uses_stored_environment() {
        let mut manager = PipelineManager::new(MemoryStore::new());
        manager.initialize("orders", Some("staging"), None).unwrap();

        let report = manager.deploy(None).unwrap();
        assert_eq!(report.environment, "staging");
        assert!(!report.overridden);
        assert!(report.success());
    }

    #[test]
    fn test_deploy_override_is_not_persisted() {
        let manager = initialized("orders");

        let report = manager.deploy(Some("prod")).unwrap();
        assert_eq!(report.environment, "prod");
        assert!(report.overridden);
        assert_eq!(manager.status().unwrap().environment, "dev");
    }

    #[test]
    fn test_deploy_ignores_validation_errors() {
        let at = now();
        let mut doc = PipelineDocument::new("", "dev", "3.0", at);
        doc.jobs.push(JobSpec::new("first", "", "glueetl", at));
        doc.jobs.push(JobSpec::new("", "x.py", "glueetl", at));
        doc.jobs.push(JobSpec::new("third", "t.py", "glueetl", at));
        let manager = PipelineManager::new(MemoryStore::with_document(doc));

        assert!(!manager.validate().unwrap().is_valid());

        let report = manager.deploy(None).unwrap();
        let names: Vec<_> = report.jobs.iter().map(|j| j.name.as_str()).collect();
        assert_eq!(names, vec!["first", "", "third"]);
        assert!(report
            .jobs
            .iter()
            .all(|j| j.outcome == SubmissionOutcome::Simulated));
        assert!(report.success());
    }

    #[test]
    fn test_deploy_with_custom_submitter() {
        struct Recording(Vec<(String, String)>);

        impl JobSubmitter for Recording {
            fn submit(&mut self, job: &JobSpec, environment: &str) -> SubmissionOutcome {
                self.0.push((job.name.clone(), environment.to_string()));
                SubmissionOutcome::Submitted {
                    run_id: format!("run-{}", self.0.len()),
                }
            }

            fn name(&self) -> &str {
                "recording"
            }
        }

        let mut manager = initialized("orders");
        manager.add_job("a", "a.py", None).unwrap();
        manager.add_job("b", "b.py", None).unwrap();

        let mut submitter = Recording(Vec::new());
        let report = manager.deploy_with(Some("prod"), &mut submitter).unwrap();

        assert_eq!(report.backend, "recording");
        assert_eq!(
            submitter.0,
            vec![("a".to_string(), "prod".to_string()), ("b".to_string(), "prod".to_string())]
        );
        assert_eq!(
            report.jobs[1].outcome,
            SubmissionOutcome::Submitted {
                run_id: "run-2".into()
            }
        );
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 gluepipe contributors

//! Error types
//!
//! Every failure carries a diagnostic code and, where one exists, a hint
//! pointing the user at the command that fixes it.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for gluepipe operations
pub type GluepipeResult<T> = Result<T, GluepipeError>;

/// Main error type for gluepipe
#[derive(Error, Debug, Diagnostic)]
pub enum GluepipeError {
    // ─────────────────────────────────────────────────────────────────────────
    // Pipeline Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("No pipeline initialized at {path}")]
    #[diagnostic(
        code(gluepipe::no_pipeline),
        help("Run 'gluepipe init --name <NAME>' first")
    )]
    NoPipeline { path: PathBuf },

    #[error("Pipeline document at {path} is corrupt: {reason}")]
    #[diagnostic(
        code(gluepipe::corrupt_document),
        help("Fix the file by hand or re-create it with 'gluepipe init' (this discards all jobs)")
    )]
    CorruptDocument { path: PathBuf, reason: String },

    #[error("Pipeline name must not be empty")]
    #[diagnostic(code(gluepipe::invalid_name))]
    InvalidName,

    #[error("Validation failed with {count} error(s)")]
    #[diagnostic(
        code(gluepipe::validation_failed),
        help("Fix every listed error, then run 'gluepipe validate' again")
    )]
    ValidationFailed { count: usize },

    // ─────────────────────────────────────────────────────────────────────────
    // File Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Failed to read file '{path}': {error}")]
    #[diagnostic(code(gluepipe::file_read_error))]
    FileReadError { path: PathBuf, error: String },

    #[error("Failed to write file '{path}': {error}")]
    #[diagnostic(code(gluepipe::file_write_error))]
    FileWriteError { path: PathBuf, error: String },

    // ─────────────────────────────────────────────────────────────────────────
    // Serialization Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("YAML serialization error: {message}")]
    #[diagnostic(code(gluepipe::yaml_error))]
    Yaml { message: String },

    #[error("JSON serialization error: {message}")]
    #[diagnostic(code(gluepipe::json_error))]
    Json { message: String },

    #[error("TOML serialization error: {message}")]
    #[diagnostic(code(gluepipe::toml_error))]
    Toml { message: String },
}

impl From<serde_yaml::Error> for GluepipeError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml { message: e.to_string() }
    }
}

impl From<serde_json::Error> for GluepipeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json { message: e.to_string() }
    }
}

impl From<toml::ser::Error> for GluepipeError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Toml { message: e.to_string() }
    }
}

impl GluepipeError {
    /// Create a corrupt document error for the given path
    pub fn corrupt(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::CorruptDocument {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error means "there is nothing to operate on yet"
    pub fn is_no_pipeline(&self) -> bool {
        matches!(self, Self::NoPipeline { .. })
    }
}

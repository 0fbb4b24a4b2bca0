// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 gluepipe contributors

//! Filesystem-backed document store
//!
//! Stores the pipeline document as a single JSON, YAML or TOML file. Writes go
//! to a temporary file in the target directory which is then renamed over the
//! target, so a crash mid-write never leaves a truncated document behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::ConfigStore;
use crate::errors::{GluepipeError, GluepipeResult};
use crate::pipeline::PipelineDocument;

/// On-disk format of the pipeline document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Toml,
}

impl DocumentFormat {
    /// Pick a format from the file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            Some("toml") => Self::Toml,
            _ => Self::Json,
        }
    }

    fn serialize(self, doc: &PipelineDocument) -> GluepipeResult<String> {
        let mut content = match self {
            Self::Json => serde_json::to_string_pretty(doc)?,
            Self::Yaml => serde_yaml::to_string(doc)?,
            Self::Toml => toml::to_string_pretty(doc)?,
        };
        if !content.ends_with('\n') {
            content.push('\n');
        }
        Ok(content)
    }

    /// Parse into a generic value first so an empty mapping can be told apart
    /// from a real document.
    fn parse(self, content: &str) -> Result<Option<PipelineDocument>, String> {
        match self {
            Self::Json => {
                let value: serde_json::Value =
                    serde_json::from_str(content).map_err(|e| e.to_string())?;
                match value {
                    serde_json::Value::Object(ref map) if map.is_empty() => Ok(None),
                    serde_json::Value::Object(map) => {
                        serde_json::from_value(serde_json::Value::Object(map))
                            .map(Some)
                            .map_err(|e| e.to_string())
                    }
                    _ => Err("expected a JSON object at the top level".to_string()),
                }
            }
            Self::Yaml => {
                let value: serde_yaml::Value =
                    serde_yaml::from_str(content).map_err(|e| e.to_string())?;
                match value {
                    serde_yaml::Value::Null => Ok(None),
                    serde_yaml::Value::Mapping(ref map) if map.is_empty() => Ok(None),
                    serde_yaml::Value::Mapping(map) => {
                        serde_yaml::from_value(serde_yaml::Value::Mapping(map))
                            .map(Some)
                            .map_err(|e| e.to_string())
                    }
                    _ => Err("expected a YAML mapping at the top level".to_string()),
                }
            }
            Self::Toml => {
                let table: toml::Table = toml::from_str(content).map_err(|e| e.to_string())?;
                if table.is_empty() {
                    return Ok(None);
                }
                toml::Value::Table(table)
                    .try_into::<PipelineDocument>()
                    .map(Some)
                    .map_err(|e| e.to_string())
            }
        }
    }
}

/// Filesystem-backed store
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    format: DocumentFormat,
}

impl FileStore {
    /// Create a store for `path`, choosing the format from its extension
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = DocumentFormat::from_path(&path);
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileStore {
    fn load(&self) -> GluepipeResult<Option<PipelineDocument>> {
        if !self.path.exists() {
            debug!("No pipeline document at {}", self.path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            GluepipeError::FileReadError {
                path: self.path.clone(),
                error: e.to_string(),
            }
        })?;

        let doc = self
            .format
            .parse(&content)
            .map_err(|reason| GluepipeError::corrupt(&self.path, reason))?;

        debug!(
            "Loaded pipeline document from {} ({} job(s))",
            self.path.display(),
            doc.as_ref().map_or(0, |d| d.jobs.len())
        );
        Ok(doc)
    }

    fn save(&mut self, doc: &PipelineDocument) -> GluepipeResult<()> {
        let content = self.format.serialize(doc)?;

        let write_error = |e: std::io::Error| GluepipeError::FileWriteError {
            path: self.path.clone(),
            error: e.to_string(),
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            std::fs::create_dir_all(&dir).map_err(write_error)?;
        }

        let mut tmp = NamedTempFile::new_in(&dir).map_err(write_error)?;
        tmp.write_all(content.as_bytes()).map_err(write_error)?;
        tmp.as_file().sync_all().map_err(write_error)?;
        tmp.persist(&self.path).map_err(|e| write_error(e.error))?;

        debug!("Saved pipeline document to {}", self.path.display());
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 gluepipe contributors

//! In-memory document store

use std::path::{Path, PathBuf};

use super::ConfigStore;
use crate::errors::GluepipeResult;
use crate::pipeline::PipelineDocument;

/// Store that keeps the document in memory
#[derive(Debug, Clone)]
pub struct MemoryStore {
    doc: Option<PipelineDocument>,
    saves: usize,
    location: PathBuf,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            doc: None,
            saves: 0,
            location: PathBuf::from("<memory>"),
        }
    }

    /// Create a store already holding `doc`
    pub fn with_document(doc: PipelineDocument) -> Self {
        Self {
            doc: Some(doc),
            ..Self::new()
        }
    }

    /// The currently stored document
    pub fn document(&self) -> Option<&PipelineDocument> {
        self.doc.as_ref()
    }

    /// Number of times `save` has been called
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl ConfigStore for MemoryStore {
    fn load(&self) -> GluepipeResult<Option<PipelineDocument>> {
        Ok(self.doc.clone())
    }

    fn save(&mut self, doc: &PipelineDocument) -> GluepipeResult<()> {
        self.doc = Some(doc.clone());
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.location
    }
}

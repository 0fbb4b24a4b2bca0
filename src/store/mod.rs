// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 gluepipe contributors

//! Pipeline document storage
//!
//! A store loads and saves the whole pipeline document. It owns no business
//! rules: defaults are applied by the document schema and every invariant is
//! checked by the pipeline manager.

mod file;
mod memory;

pub use file::{DocumentFormat, FileStore};
pub use memory::MemoryStore;

use std::path::Path;

use crate::errors::GluepipeResult;
use crate::pipeline::PipelineDocument;

/// Environment variable naming the document location
pub const CONFIG_ENV_VAR: &str = "GLUE_CONFIG";

/// Document location when nothing else is configured
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Trait for pipeline document stores
pub trait ConfigStore {
    /// Load the persisted document
    ///
    /// Returns `Ok(None)` when nothing has been persisted yet.
    fn load(&self) -> GluepipeResult<Option<PipelineDocument>>;

    /// Replace the persisted document with `doc`
    fn save(&mut self, doc: &PipelineDocument) -> GluepipeResult<()>;

    /// Human-readable location of the document, used in messages
    fn location(&self) -> &Path;
}

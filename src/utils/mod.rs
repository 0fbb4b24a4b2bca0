// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 gluepipe contributors

//! Utility modules
//!
//! Common utilities for the gluepipe CLI.

pub mod colors;

pub use colors::*;

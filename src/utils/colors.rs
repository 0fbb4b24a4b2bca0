// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 gluepipe contributors

//! Terminal output helpers
//!
//! Provides consistent glyphs and colors across the command reports.

use chrono::NaiveDateTime;
use colored::Colorize;

/// Width of the rule framing the status block
pub const RULE_WIDTH: usize = 50;

/// Print a framed block title
pub fn print_framed_title(title: &str) {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{}", title.bold());
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// Print the closing rule of a framed block
pub fn print_rule() {
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// Print a success check
pub fn print_success(msg: &str) {
    println!("  {} {}", "✓".green(), msg);
}

/// Print an error cross
pub fn print_error(msg: &str) {
    println!("  {} {}", "✗".red(), msg);
}

/// Print a warning
pub fn print_warning(msg: &str) {
    println!("  {} {}", "⚠".yellow(), msg);
}

/// Print an info item
pub fn print_info(msg: &str) {
    println!("  {} {}", "→".blue(), msg);
}

/// Render an optional timestamp, `N/A` when absent
pub fn format_timestamp(at: Option<&NaiveDateTime>) -> String {
    at.map(|t| t.format("%Y-%m-%dT%H:%M:%S").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

//! Core functionality for the git-stager tool.
//!
//! This module provides the fundamental building blocks: external command
//! execution, status parsing, error handling, and console formatting.

pub mod changes;
pub mod colors;
pub mod error;
pub mod output;
pub mod runner;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{GitStagerError, Result};

// === Command execution ===
// Argument-list git invocation with the silent/reported failure model
pub use runner::GitRunner;

// === Status parsing ===
// Porcelain output -> ordered change entries, plus display classification
pub use changes::{changed_files, parse_porcelain, ChangeEntry, ChangeKind};

// === Color system ===
// Status symbols and numbered file lines
pub use colors::{format_entry_line, get_kind_color_style, status_symbol};

// === Output formatting ===
// Marker-prefixed message classes and the banner header
pub use output::{print_error, print_header, print_info, print_success, print_warning};

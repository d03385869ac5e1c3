//! git-stager - An interactive staging helper for git.
//!
//! This library provides the core functionality for git-stager: external
//! command execution, porcelain status parsing, interactive file selection,
//! and console formatting. The git binary is treated as an opaque external
//! tool; nothing here touches repository internals directly.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which
//! provides command execution, status parsing, error handling, and output
//! formatting. The [`select`] module holds the two interchangeable selection
//! presenters behind the [`select::FileSelector`] trait.

pub mod commands;
pub mod core;
pub mod select;

// Re-export the core public API for external users
pub use core::{
    changed_files,
    format_entry_line,
    get_kind_color_style,
    parse_porcelain,
    print_error,
    print_header,
    print_info,
    print_success,
    print_warning,
    status_symbol,

    ChangeEntry,
    ChangeKind,
    // Error handling
    GitStagerError,
    // Command execution
    GitRunner,
    Result,
};

pub use select::{CheckboxSelector, FileSelector, NumberedSelector};

//! Unified color system for change-status visualization.
//!
//! A single source of truth for the colors and symbols used when listing
//! changed files, shared by the status command and the selection menus.
//!
//! # Public API
//! - [`get_kind_color_style`]: Get color function for a change kind
//! - [`status_symbol`]: Bracketed, colored status symbol for an entry
//! - [`format_entry_line`]: Complete numbered file line
//!
//! # Color Scheme
//! - **Modified/Renamed**: Cyan
//! - **Added**: Green
//! - **Deleted**: Red
//! - **Untracked**: Yellow
//! - **Unmerged**: Red bold
//! - **Unrecognized codes**: Uncolored raw code in brackets

use crate::core::changes::{ChangeEntry, ChangeKind};
use colored::*;

/// Single function to apply color styling based on change kind
pub fn get_kind_color_style(kind: ChangeKind) -> Box<dyn Fn(&str) -> ColoredString> {
    match kind {
        ChangeKind::Modified => Box::new(|text: &str| text.cyan()),
        ChangeKind::Renamed => Box::new(|text: &str| text.cyan()),
        ChangeKind::Added => Box::new(|text: &str| text.green()),
        ChangeKind::Deleted => Box::new(|text: &str| text.red()),
        ChangeKind::Untracked => Box::new(|text: &str| text.yellow()),
        ChangeKind::Unmerged => Box::new(|text: &str| text.red().bold()),
        ChangeKind::Copied => Box::new(|text: &str| text.blue()),
        ChangeKind::TypeChanged => Box::new(|text: &str| text.magenta()),
        ChangeKind::Other => Box::new(|text: &str| text.normal()),
    }
}

/// Bracketed status symbol for an entry, e.g. `[M]` or `[?]`.
///
/// Recognized codes render their single display letter; anything else falls
/// back to the raw code in brackets.
pub fn status_symbol(entry: &ChangeEntry) -> String {
    let kind = entry.kind();
    let style = get_kind_color_style(kind);
    match kind {
        ChangeKind::Other => format!("[{}]", entry.code.trim()),
        _ => style(&format!("[{}]", kind.letter())).to_string(),
    }
}

/// Full numbered line for one entry: `  1. [M] path`
pub fn format_entry_line(index: usize, entry: &ChangeEntry) -> String {
    format!(
        "  {} {} {}",
        format!("{index}.").bold(),
        status_symbol(entry),
        entry.path
    )
}

//! Porcelain status parsing and typed change classification.
//!
//! This module converts `git status --porcelain` text into an ordered list
//! of [`ChangeEntry`] values. Each line is handled independently: the first
//! two characters are the status code, the remainder (with the separating
//! whitespace run stripped) is the path. Entries keep the code verbatim and
//! preserve git's emission order.
//!
//! # Public API
//! - [`ChangeEntry`]: One changed file as reported by git
//! - [`ChangeKind`]: Presentation-level classification of a status code
//! - [`parse_porcelain`]: Pure parser over captured status text
//! - [`changed_files`]: Query + parse in one step

use crate::core::runner::GitRunner;
use std::fmt;

/// A single changed file: raw two-character porcelain code plus path.
///
/// The code is exactly what git emitted, embedded spaces included; the path
/// is not normalized beyond consuming the whitespace separating it from the
/// code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEntry {
    pub code: String,
    pub path: String,
}

impl ChangeEntry {
    pub fn new(code: impl Into<String>, path: impl Into<String>) -> Self {
        ChangeEntry {
            code: code.into(),
            path: path.into(),
        }
    }

    /// Presentation classification of this entry's code
    pub fn kind(&self) -> ChangeKind {
        ChangeKind::from_code(&self.code)
    }
}

/// Classification of a porcelain status code, used only for display.
///
/// `Other` covers every code without a dedicated symbol; the raw code is
/// still available on the entry and is rendered in brackets as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Modified,
    Added,
    Deleted,
    Renamed,
    Copied,
    TypeChanged,
    Untracked,
    Unmerged,
    Other,
}

impl ChangeKind {
    /// Classify a raw status code (whitespace-insensitive)
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "M" => ChangeKind::Modified,
            "A" => ChangeKind::Added,
            "D" => ChangeKind::Deleted,
            "R" => ChangeKind::Renamed,
            "C" => ChangeKind::Copied,
            "T" => ChangeKind::TypeChanged,
            "??" => ChangeKind::Untracked,
            "UU" | "AA" | "DD" => ChangeKind::Unmerged,
            _ => ChangeKind::Other,
        }
    }

    /// Short display letter for the bracketed symbol
    pub fn letter(&self) -> &'static str {
        match self {
            ChangeKind::Modified => "M",
            ChangeKind::Added => "A",
            ChangeKind::Deleted => "D",
            ChangeKind::Renamed => "R",
            ChangeKind::Copied => "C",
            ChangeKind::TypeChanged => "T",
            ChangeKind::Untracked => "?",
            ChangeKind::Unmerged => "U",
            ChangeKind::Other => "",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ChangeKind::Modified => "modified",
            ChangeKind::Added => "added",
            ChangeKind::Deleted => "deleted",
            ChangeKind::Renamed => "renamed",
            ChangeKind::Copied => "copied",
            ChangeKind::TypeChanged => "type changed",
            ChangeKind::Untracked => "untracked",
            ChangeKind::Unmerged => "unmerged",
            ChangeKind::Other => "changed",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Parse captured porcelain status text into change entries.
///
/// Empty input yields an empty vector. Blank lines are skipped. Lines are
/// processed independently, in order. Lines shorter than two characters keep
/// whatever code text is present with an empty path.
pub fn parse_porcelain(output: &str) -> Vec<ChangeEntry> {
    let mut entries = Vec::new();
    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }
        // byte offset of the third character; codes are ASCII but the path
        // may not be, so split on a real char boundary
        let split = line
            .char_indices()
            .nth(2)
            .map(|(i, _)| i)
            .unwrap_or(line.len());
        let (code, rest) = line.split_at(split);
        entries.push(ChangeEntry::new(code, rest.trim_start()));
    }
    entries
}

/// Query git for the current change set.
///
/// The status probe fails silently (a clean tree is not an error); any
/// failure or empty output maps to an empty list.
pub fn changed_files(runner: &GitRunner) -> Vec<ChangeEntry> {
    match runner.porcelain_status() {
        Some(output) => parse_porcelain(&output),
        None => Vec::new(),
    }
}

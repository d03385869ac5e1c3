//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating git-stager command output, error
//! messages, and expected behaviors.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for git repository error messages
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// Creates a predicate that checks for the banner rule
pub fn has_banner() -> impl Predicate<str> {
    predicates::str::contains("============================================================")
}

/// Creates a predicate that checks for the branch line
pub fn has_branch_info() -> impl Predicate<str> {
    predicates::str::contains("Branch:")
}

/// Creates a predicate that checks for a numbered list index
pub fn has_file_index(index: u32) -> impl Predicate<str> {
    predicates::str::contains(format!("{}.", index))
}

/// Creates a predicate that checks for a bracketed status symbol
pub fn has_symbol(symbol: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("[{}]", symbol))
}

/// Creates a predicate that checks for the clean working tree message
pub fn clean_tree() -> impl Predicate<str> {
    predicates::str::contains("Working tree clean")
}

/// Creates a predicate that checks for the empty change set message
pub fn no_changes() -> impl Predicate<str> {
    predicates::str::contains("There are no changes to be staged")
}

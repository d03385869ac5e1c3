//! Numbered-list file selection with free-text input.
//!
//! Prints the change set as a numbered list, then reads a single line:
//! `0` cancels, `a`/`all` selects everything, anything else is interpreted
//! as whitespace-separated 1-based indices. Out-of-range indices warn and
//! are skipped; a token that is not a number rejects the whole input.
//!
//! # Public API
//! - [`NumberedSelector`]: The Mode A presenter
//! - [`resolve_selection`]: Pure input-resolution step (exposed for tests)

use crate::core::changes::{changed_files, ChangeEntry};
use crate::core::colors::format_entry_line;
use crate::core::output::{print_error, print_warning};
use crate::core::runner::GitRunner;
use crate::select::FileSelector;
use colored::*;
use std::io::{self, BufRead, Write};

pub struct NumberedSelector;

impl FileSelector for NumberedSelector {
    fn select(&self, runner: &GitRunner) -> Option<Vec<String>> {
        let entries = changed_files(runner);
        if entries.is_empty() {
            return None;
        }

        println!("\n{}", "Changed files:".bold());
        for (i, entry) in entries.iter().enumerate() {
            println!("{}", format_entry_line(i + 1, entry));
        }

        println!("\n{}", "Select files to stage:".bold());
        println!("  - Enter numbers separated by spaces (e.g., 1 3 5)");
        println!("  - Enter 'a' or 'all' to select all files");
        println!("  - Enter '0' to cancel");

        print!("\n{}", "Your selection: ".cyan());
        let _ = io::stdout().flush();

        let mut input = String::new();
        match io::stdin().lock().read_line(&mut input) {
            // zero bytes means end-of-input: treat as cancellation
            Ok(0) => return None,
            Ok(_) => {}
            Err(_) => return None,
        }

        resolve_selection(&input, &entries)
    }
}

/// Resolve one line of user input against the listed entries.
///
/// Returns the selected paths in the order the user listed them (duplicates
/// kept; callers collapse them if they care), or `None` for cancellation and
/// rejected input. Only the separating whitespace matters; the input is
/// trimmed before interpretation.
pub fn resolve_selection(input: &str, entries: &[ChangeEntry]) -> Option<Vec<String>> {
    let trimmed = input.trim();

    if trimmed == "0" {
        return None;
    }

    if trimmed.eq_ignore_ascii_case("a") || trimmed.eq_ignore_ascii_case("all") {
        return Some(entries.iter().map(|e| e.path.clone()).collect());
    }

    // parse every token before acting on any of them: one malformed token
    // rejects the whole line without partial warnings
    let mut indices = Vec::new();
    for token in trimmed.split_whitespace() {
        match token.parse::<usize>() {
            Ok(index) => indices.push(index),
            Err(_) => {
                print_error("Invalid input format!");
                return None;
            }
        }
    }

    let mut selected = Vec::new();
    for index in indices {
        if (1..=entries.len()).contains(&index) {
            selected.push(entries[index - 1].path.clone());
        } else {
            print_warning(&format!("Invalid number: {index}"));
        }
    }

    if selected.is_empty() {
        print_error("No valid files selected!");
        return None;
    }

    Some(selected)
}

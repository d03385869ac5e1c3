use crate::core::{
    changes::changed_files,
    colors::format_entry_line,
    error::{GitStagerError, Result},
    output::{print_header, print_success},
    runner::GitRunner,
};
use colored::*;

pub fn execute_status() -> Result<()> {
    let runner = GitRunner::new();
    if !runner.is_git_repo() {
        return Err(GitStagerError::NotInGitRepo);
    }

    print_header("Repository Status");

    let branch = runner
        .current_branch()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "-none-".to_string());
    println!("{} {}\n", "Branch:".bold(), branch.cyan());

    let entries = changed_files(&runner);
    if entries.is_empty() {
        print_success("Working tree clean");
        return Ok(());
    }

    print_entry_list(&runner);
    Ok(())
}

/// Print the current change set as a numbered list (used after staging too)
pub fn print_entry_list(runner: &GitRunner) {
    let entries = changed_files(runner);
    for (i, entry) in entries.iter().enumerate() {
        println!("{}", format_entry_line(i + 1, entry));
    }
}

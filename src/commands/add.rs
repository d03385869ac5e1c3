use crate::commands::status::print_entry_list;
use crate::core::{
    changes::changed_files,
    error::{GitStagerError, Result},
    output::{print_error, print_info, print_success},
    runner::GitRunner,
};
use crate::select::{CheckboxSelector, FileSelector, NumberedSelector};

pub fn execute_add(menu: bool) -> Result<()> {
    let runner = GitRunner::new();
    if !runner.is_git_repo() {
        return Err(GitStagerError::NotInGitRepo);
    }

    if changed_files(&runner).is_empty() {
        print_error("There are no changes to be staged");
        return Ok(());
    }

    let selector: Box<dyn FileSelector> = if menu {
        Box::new(CheckboxSelector)
    } else {
        Box::new(NumberedSelector)
    };

    // the selector re-queries status itself, so the round never operates on
    // a stale listing; cancellation and input problems were already reported
    let selected = match selector.select(&runner) {
        Some(paths) => paths,
        None => return Ok(()),
    };

    let paths = dedup_preserving_order(selected);
    log::debug!("staging {} file(s)", paths.len());
    runner.stage_files(&paths)?;

    print_success(&format!("Successfully staged {} file(s).", paths.len()));

    print_info("Updated status:");
    print_entry_list(&runner);
    Ok(())
}

/// Collapse duplicate selections, keeping the first occurrence of each path
fn dedup_preserving_order(paths: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    paths.into_iter().filter(|p| seen.insert(p.clone())).collect()
}

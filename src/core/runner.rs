//! External git command execution.
//!
//! This module provides [`GitRunner`], the single gateway through which
//! git-stager talks to the installed `git` binary. Commands are built from
//! explicit argument lists (never interpolated into a shell string), so the
//! runner's behavior is independent of shell quoting rules.
//!
//! # Public API
//! - [`GitRunner`]: Command execution with optional working directory
//!
//! # Failure Model
//! A failed command never unwinds: capturing methods yield `None`, the
//! status method yields `false`. The `report_failure` flag decides whether a
//! console error accompanies the failure or the caller is probing
//! optionally-absent state and wants silence.

use crate::core::error::{GitStagerError, Result};
use crate::core::output::print_error;
use std::path::{Path, PathBuf};
use std::process::Command;

pub struct GitRunner {
    workdir: Option<PathBuf>,
}

impl GitRunner {
    /// Runner operating in the current process working directory
    pub fn new() -> Self {
        GitRunner { workdir: None }
    }

    /// Runner pinned to a specific working directory (used by tests)
    pub fn with_workdir<P: AsRef<Path>>(path: P) -> Self {
        GitRunner {
            workdir: Some(path.as_ref().to_path_buf()),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new("git");
        cmd.args(args);
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }
        cmd
    }

    /// Run a git command and capture its standard output.
    ///
    /// Returns the trimmed stdout text on zero exit. On non-zero exit or
    /// spawn failure returns `None`; a console error is printed first when
    /// `report_failure` is true.
    pub fn run_captured(&self, args: &[&str], report_failure: bool) -> Option<String> {
        log::debug!("running: git {}", args.join(" "));
        let output = match self.command(args).output() {
            Ok(output) => output,
            Err(e) => {
                if report_failure {
                    print_error(&format!("Command execution error: {e}"));
                }
                return None;
            }
        };

        if !output.status.success() {
            if report_failure {
                let stderr = String::from_utf8_lossy(&output.stderr);
                print_error(&format!(
                    "git {} failed: {}",
                    args.join(" "),
                    stderr.trim()
                ));
            }
            return None;
        }

        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Run a git command without capturing output.
    ///
    /// The child inherits stdout/stderr so git's own messages reach the
    /// console. Returns whether the exit status was zero; on failure a
    /// console error is printed first when `report_failure` is true.
    pub fn run_ok(&self, args: &[&str], report_failure: bool) -> bool {
        log::debug!("running: git {}", args.join(" "));
        let ok = match self.command(args).status() {
            Ok(status) => status.success(),
            Err(e) => {
                if report_failure {
                    print_error(&format!("Command execution error: {e}"));
                }
                return false;
            }
        };

        if !ok && report_failure {
            print_error(&format!("git {} exited with an error", args.join(" ")));
        }
        ok
    }

    /// Startup probe: verify the git binary exists at all.
    ///
    /// Must run before any other operation; the binary terminates with a
    /// non-zero exit status when this fails.
    pub fn ensure_available(&self) -> Result<()> {
        match self.run_captured(&["--version"], false) {
            Some(_) => Ok(()),
            None => Err(GitStagerError::GitNotInstalled),
        }
    }

    /// Whether the working directory is inside a git working tree
    pub fn is_git_repo(&self) -> bool {
        self.run_captured(&["rev-parse", "--is-inside-work-tree"], false)
            .as_deref()
            == Some("true")
    }

    /// Current branch name, if any
    pub fn current_branch(&self) -> Option<String> {
        self.run_captured(&["branch", "--show-current"], true)
    }

    /// Human-readable short status text
    pub fn short_status(&self) -> Option<String> {
        self.run_captured(&["status", "--short"], true)
    }

    /// Machine-readable porcelain status text (silent on failure so an
    /// empty change set is not treated as an error)
    pub fn porcelain_status(&self) -> Option<String> {
        self.run_captured(&["status", "--porcelain"], false)
    }

    /// Stage the given paths with `git add -- <paths...>`
    pub fn stage_files(&self, paths: &[String]) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }

        let mut args: Vec<&str> = vec!["add", "--"];
        args.extend(paths.iter().map(String::as_str));

        let output = self.command(&args).output().map_err(GitStagerError::Io)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitStagerError::stage_failed(stderr.trim().to_string()));
        }
        Ok(())
    }
}

impl Default for GitRunner {
    fn default() -> Self {
        Self::new()
    }
}

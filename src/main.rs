use clap::{Parser, Subcommand};
use git_stager::commands::*;
use git_stager::core::{
    error::GitStagerError,
    print_error,
    runner::GitRunner,
};
use std::env;

#[derive(Parser)]
#[command(name = "git-stager")]
#[command(about = "An interactive staging helper for git")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current branch and changed files
    Status,
    /// Pick changed files interactively and stage them
    Add {
        /// Use the arrow-key checkbox menu instead of the numbered prompt
        #[arg(short, long)]
        menu: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    // The tool is unusable without git; fail before dispatching anything
    if let Err(e) = GitRunner::new().ensure_available() {
        print_error(&e.to_string());
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Status => execute_status(),
        Commands::Add { menu } => execute_add(menu),
    };

    if let Err(e) = result {
        if let GitStagerError::NotInGitRepo = e {
            print_error("Not in a git repository");
        } else {
            print_error(&e.to_string());
        }
        std::process::exit(1);
    }
}

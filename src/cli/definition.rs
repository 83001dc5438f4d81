//! CLI argument definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::add::AddArgs;
use super::done::DoneArgs;
use super::find::FindArgs;
use super::list::ListArgs;
use super::remove::RemoveArgs;

/// Command-line task tracker with snapshot-based undo
#[derive(Parser)]
#[command(name = "td", version, about)]
pub struct Cli {
    /// Task file to use instead of the configured one
    #[arg(long, global = true, env = "TASKDECK_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),

    /// Mark a task as completed
    Done(DoneArgs),

    /// Remove a task, or every task with --all
    Rm(RemoveArgs),

    /// List tasks
    List(ListArgs),

    /// Search for a task by description
    Find(FindArgs),

    /// Generate shell completions
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

//! `td rm` command implementation

use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;

use crate::store::TaskStore;

#[derive(Args)]
pub struct RemoveArgs {
    /// Task description
    #[arg(required_unless_present = "all")]
    description: Option<String>,

    /// Remove every task
    #[arg(long, conflicts_with = "description")]
    all: bool,
}

pub async fn run(file: Option<PathBuf>, args: RemoveArgs) -> Result<()> {
    let storage = super::open_storage(file)?;
    let mut store = TaskStore::with_tasks(storage.load()?);

    if args.all {
        if store.clear() {
            storage.save(store.tasks())?;
            println!("All tasks removed");
        } else {
            println!("Task list is already empty");
        }
        return Ok(());
    }

    // clap guarantees a description when --all is absent
    let description = super::normalize_description(args.description.as_deref().unwrap_or(""));
    if description.is_empty() {
        bail!("Cannot remove an empty task");
    }

    if !store.delete(&description) {
        bail!("Task not found: {}", description);
    }
    storage.save(store.tasks())?;

    println!("Removed: {}", description);
    Ok(())
}

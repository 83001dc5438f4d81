//! `td done` command implementation

use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;

use crate::store::TaskStore;

#[derive(Args)]
pub struct DoneArgs {
    /// Task description
    description: String,
}

pub async fn run(file: Option<PathBuf>, args: DoneArgs) -> Result<()> {
    let description = super::normalize_description(&args.description);
    if description.is_empty() {
        bail!("Cannot complete an empty task");
    }

    let storage = super::open_storage(file)?;
    let mut store = TaskStore::with_tasks(storage.load()?);

    if !store.complete(&description) {
        bail!("Task not found: {}", description);
    }
    storage.save(store.tasks())?;

    println!("Completed: {}", description);
    Ok(())
}

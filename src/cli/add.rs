//! `td add` command implementation

use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;

use crate::store::TaskStore;

#[derive(Args)]
pub struct AddArgs {
    /// Task description
    description: String,
}

pub async fn run(file: Option<PathBuf>, args: AddArgs) -> Result<()> {
    let description = super::normalize_description(&args.description);
    if description.is_empty() {
        bail!("Cannot add an empty task");
    }

    let storage = super::open_storage(file)?;
    let mut store = TaskStore::with_tasks(storage.load()?);

    store.add(description.clone());
    storage.save(store.tasks())?;

    println!("Added: {}", description);
    Ok(())
}

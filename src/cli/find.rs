//! `td find` command implementation

use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;

use crate::store::TaskStore;

#[derive(Args)]
pub struct FindArgs {
    /// Task description
    description: String,
}

pub async fn run(file: Option<PathBuf>, args: FindArgs) -> Result<()> {
    let description = super::normalize_description(&args.description);
    if description.is_empty() {
        bail!("Cannot search for an empty task");
    }

    let storage = super::open_storage(file)?;
    let store = TaskStore::with_tasks(storage.load()?);

    match store.find(&description) {
        Some(task) => {
            println!("{}", task);
            Ok(())
        }
        None => bail!("Task not found: {}", description),
    }
}

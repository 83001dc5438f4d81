//! `td list` command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::store::{Task, TaskStore};

#[derive(Args)]
pub struct ListArgs {
    /// Show only completed tasks
    #[arg(long, conflicts_with = "incomplete")]
    completed: bool,

    /// Show only incomplete tasks
    #[arg(long)]
    incomplete: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TaskJson<'a> {
    description: &'a str,
    completed: bool,
}

pub async fn run(file: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let storage = super::open_storage(file)?;
    let store = TaskStore::with_tasks(storage.load()?);

    let tasks: Vec<&Task> = if args.completed {
        store.completed().collect()
    } else if args.incomplete {
        store.incomplete().collect()
    } else {
        store.tasks().iter().collect()
    };

    if args.json {
        let rows: Vec<TaskJson> = tasks
            .iter()
            .map(|t| TaskJson {
                description: t.description(),
                completed: t.is_completed(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No tasks found");
        return Ok(());
    }

    println!("Tasks ({}):", tasks.len());
    for task in tasks {
        println!("{}", task);
    }

    Ok(())
}

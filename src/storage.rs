//! Task file persistence - line-record storage
//!
//! One record per line: `description<DELIM>STATUS`, where STATUS is
//! `COMPLETED` or `INCOMPLETE`. Records that fail to decode are skipped on
//! load so one bad line never takes the whole file down.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::store::{Task, STATUS_COMPLETED};

/// Failure to decode one line of the task file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected 2 fields, found {0}")]
    FieldCount(usize),

    #[error("empty description")]
    EmptyDescription,
}

fn parse_record(line: &str, delimiter: char) -> Result<Task, RecordError> {
    let fields: Vec<&str> = line.split(delimiter).collect();
    if fields.len() != 2 {
        return Err(RecordError::FieldCount(fields.len()));
    }
    if fields[0].is_empty() {
        return Err(RecordError::EmptyDescription);
    }

    let mut task = Task::new(fields[0]);
    // Anything other than the completed label loads as incomplete.
    if fields[1] == STATUS_COMPLETED {
        task.mark_complete();
    }
    Ok(task)
}

fn encode_record(task: &Task, delimiter: char) -> String {
    format!("{}{}{}", task.description(), delimiter, task.status_label())
}

pub struct Storage {
    tasks_path: PathBuf,
    delimiter: char,
}

impl Storage {
    /// Storage at the configured location, with the configured delimiter.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            tasks_path: config.tasks_path()?,
            delimiter: config.delimiter(),
        })
    }

    /// Storage at an explicit path, bypassing the config.
    pub fn from_path(tasks_path: PathBuf, delimiter: char) -> Self {
        Self {
            tasks_path,
            delimiter,
        }
    }

    pub fn path(&self) -> &Path {
        &self.tasks_path
    }

    /// Load every well-formed record, preserving file order. A missing
    /// file is the empty collection.
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.tasks_path.exists() {
            debug!("no task file at {}, starting empty", self.tasks_path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.tasks_path)?;
        let mut tasks = Vec::new();
        for (index, line) in content.lines().enumerate() {
            match parse_record(line, self.delimiter) {
                Ok(task) => tasks.push(task),
                Err(e) => warn!(
                    "skipping line {} of {}: {}",
                    index + 1,
                    self.tasks_path.display(),
                    e
                ),
            }
        }
        Ok(tasks)
    }

    /// Write the collection, replacing the file. The previous contents are
    /// kept as a `.bak` sibling.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.tasks_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        if self.tasks_path.exists() {
            let backup_path = self.tasks_path.with_extension("txt.bak");
            if let Err(e) = fs::copy(&self.tasks_path, &backup_path) {
                warn!("Failed to create backup: {}", e);
            }
        }

        let mut content = String::new();
        for task in tasks {
            content.push_str(&encode_record(task, self.delimiter));
            content.push('\n');
        }
        fs::write(&self.tasks_path, content)?;
        Ok(())
    }
}

//! Live task collection and its mutation operations.
//!
//! `TaskStore` owns the single authoritative, insertion-ordered collection
//! of tasks. Every mutating operation captures a snapshot of the
//! pre-mutation state before touching the collection, so `undo` always
//! restores the state immediately preceding the most recent mutation.
//! Callers only ever see read-only views of the collection.

mod history;
mod task;

pub use history::{HistoryManager, Snapshot};
pub use task::{Task, STATUS_COMPLETED, STATUS_INCOMPLETE};

/// The live task collection plus its undo history.
///
/// Lookup operations match on the exact description and return the first
/// match in insertion order; duplicate descriptions are allowed but only
/// the first is addressable by description.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    history: HistoryManager,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from previously persisted tasks, preserving their
    /// order. Loading is not a mutation: history starts empty.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            history: HistoryManager::new(),
        }
    }

    /// Append a new incomplete task. Requires a non-empty description,
    /// which callers validate at the boundary. Always succeeds; there is
    /// no duplicate check.
    pub fn add(&mut self, description: impl Into<String>) {
        self.history.capture(&self.tasks);
        self.tasks.push(Task::new(description));
    }

    /// Mark the first task matching `description` as completed.
    ///
    /// Returns false when no task matches. The snapshot is captured either
    /// way, mirroring add and delete.
    pub fn complete(&mut self, description: &str) -> bool {
        self.history.capture(&self.tasks);
        match self
            .tasks
            .iter_mut()
            .find(|t| t.description() == description)
        {
            Some(task) => {
                task.mark_complete();
                true
            }
            None => false,
        }
    }

    /// Remove the first task matching `description`, keeping the order of
    /// the remaining tasks. Returns false when no task matches; the
    /// snapshot is captured either way.
    pub fn delete(&mut self, description: &str) -> bool {
        self.history.capture(&self.tasks);
        match self
            .tasks
            .iter()
            .position(|t| t.description() == description)
        {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every task. An already-empty collection is left untouched
    /// and captures no snapshot: an empty-to-empty transition carries no
    /// undo value. Returns true when anything was removed.
    pub fn clear(&mut self) -> bool {
        if self.tasks.is_empty() {
            return false;
        }
        self.history.capture(&self.tasks);
        self.tasks.clear();
        true
    }

    /// Restore the collection to the most recent snapshot, discarding that
    /// snapshot. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(snapshot) => {
                self.tasks = snapshot.into_tasks();
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// First task matching `description`, if any. No side effects.
    pub fn find(&self, description: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.description() == description)
    }

    /// All tasks in insertion order, as a read-only view.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Completed tasks in insertion order.
    pub fn completed(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.is_completed())
    }

    /// Incomplete tasks in insertion order.
    pub fn incomplete(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| !t.is_completed())
    }

    /// Undo stack depth, for status display and tests.
    pub fn history_depth(&self) -> usize {
        self.history.depth()
    }
}

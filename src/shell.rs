//! Interactive shell, the default mode when no subcommand is given.
//!
//! A line-oriented command loop over a single in-memory store. Undo is
//! only reachable from here: history lives for the lifetime of the
//! process, so a one-shot subcommand would never have anything to undo.
//! The collection is saved to disk when the shell exits.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

use crate::cli::{normalize_description, open_storage};
use crate::store::TaskStore;

const HELP: &str = "\
Commands:
  add <description>      Add a new task
  done <description>     Mark a task as completed
  delete <description>   Delete a task
  clear                  Delete all tasks
  list                   Show all tasks
  completed              Show completed tasks
  todo                   Show incomplete tasks
  find <description>     Search for a task
  count                  Show the number of tasks
  undo                   Revert the most recent change
  help                   Show this help
  quit                   Save and exit";

const NO_TASKS_HINT: &str = "There are no tasks yet. Use 'add' to create one";

/// Outcome of one shell command: the text to print and whether the loop
/// should stop.
pub struct ShellReply {
    pub message: String,
    pub quit: bool,
}

impl ShellReply {
    fn say(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            quit: false,
        }
    }

    fn quit() -> Self {
        Self {
            message: String::new(),
            quit: true,
        }
    }
}

/// Command interpreter over a task store. Separated from the stdin loop so
/// tests can drive it line by line.
pub struct Shell {
    store: TaskStore,
}

impl Shell {
    pub fn new(store: TaskStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Execute one command line and render its outcome.
    pub fn handle_line(&mut self, line: &str) -> ShellReply {
        let line = line.trim();
        if line.is_empty() {
            return ShellReply::say("");
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest),
            None => (line, ""),
        };

        match command.to_lowercase().as_str() {
            "add" => self.add(rest),
            "done" => self.complete(rest),
            "delete" => self.delete(rest),
            "clear" => self.clear(),
            "list" => self.list_all(),
            "completed" => self.list_completed(),
            "todo" => self.list_incomplete(),
            "find" => self.find(rest),
            "count" => ShellReply::say(format!("{} task(s)", self.store.len())),
            "undo" => {
                if self.store.undo() {
                    ShellReply::say("Undo successful")
                } else {
                    ShellReply::say("Nothing to undo")
                }
            }
            "help" => ShellReply::say(HELP),
            "quit" | "exit" => ShellReply::quit(),
            other => ShellReply::say(format!(
                "Unknown command: {}. Type 'help' for the command list",
                other
            )),
        }
    }

    fn add(&mut self, raw: &str) -> ShellReply {
        let description = normalize_description(raw);
        if description.is_empty() {
            return ShellReply::say("Cannot add an empty task");
        }
        self.store.add(description.clone());
        ShellReply::say(format!("Added: {}", description))
    }

    fn complete(&mut self, raw: &str) -> ShellReply {
        if self.store.is_empty() {
            return ShellReply::say(NO_TASKS_HINT);
        }
        let description = normalize_description(raw);
        if description.is_empty() {
            return ShellReply::say("Cannot complete an empty task");
        }
        if self.store.complete(&description) {
            ShellReply::say(format!("Completed: {}", description))
        } else {
            ShellReply::say(format!("Task not found: {}", description))
        }
    }

    fn delete(&mut self, raw: &str) -> ShellReply {
        if self.store.is_empty() {
            return ShellReply::say(NO_TASKS_HINT);
        }
        let description = normalize_description(raw);
        if description.is_empty() {
            return ShellReply::say("Cannot delete an empty task");
        }
        if self.store.delete(&description) {
            ShellReply::say(format!("Removed: {}", description))
        } else {
            ShellReply::say(format!("Task not found: {}", description))
        }
    }

    fn clear(&mut self) -> ShellReply {
        if self.store.clear() {
            ShellReply::say("All tasks removed")
        } else {
            ShellReply::say("Task list is already empty")
        }
    }

    fn list_all(&self) -> ShellReply {
        if self.store.is_empty() {
            return ShellReply::say("Task list is empty");
        }
        let lines: Vec<String> = self.store.tasks().iter().map(|t| t.to_string()).collect();
        ShellReply::say(lines.join("\n"))
    }

    fn list_completed(&self) -> ShellReply {
        let lines: Vec<String> = self.store.completed().map(|t| t.to_string()).collect();
        if lines.is_empty() {
            return ShellReply::say("There are no completed tasks");
        }
        ShellReply::say(lines.join("\n"))
    }

    fn list_incomplete(&self) -> ShellReply {
        let lines: Vec<String> = self.store.incomplete().map(|t| t.to_string()).collect();
        if lines.is_empty() {
            return ShellReply::say("There are no incomplete tasks");
        }
        ShellReply::say(lines.join("\n"))
    }

    fn find(&self, raw: &str) -> ShellReply {
        let description = normalize_description(raw);
        if description.is_empty() {
            return ShellReply::say("Cannot search for an empty task");
        }
        match self.store.find(&description) {
            Some(task) => ShellReply::say(task.to_string()),
            None => ShellReply::say(format!("Task not found: {}", description)),
        }
    }
}

pub async fn run(file: Option<PathBuf>) -> Result<()> {
    let storage = open_storage(file)?;
    let mut shell = Shell::new(TaskStore::with_tasks(storage.load()?));
    debug!(
        "loaded {} task(s) from {}",
        shell.store().len(),
        storage.path().display()
    );

    println!("taskdeck - {} task(s) loaded", shell.store().len());
    println!("Type 'help' for the command list");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        print!("> ");
        stdout.flush()?;

        line.clear();
        // EOF ends the session the same way 'quit' does
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let reply = shell.handle_line(&line);
        if !reply.message.is_empty() {
            println!("{}", reply.message);
        }
        if reply.quit {
            break;
        }
    }

    storage.save(shell.store().tasks())?;
    println!("Tasks saved to {}", storage.path().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> Shell {
        Shell::new(TaskStore::new())
    }

    #[test]
    fn test_add_done_undo_flow() {
        let mut sh = shell();

        assert_eq!(sh.handle_line("add buy milk").message, "Added: BUY MILK");
        assert_eq!(sh.handle_line("done buy milk").message, "Completed: BUY MILK");
        assert_eq!(sh.handle_line("undo").message, "Undo successful");
        assert!(!sh.store().tasks()[0].is_completed());
    }

    #[test]
    fn test_inputs_are_uppercased_before_lookup() {
        let mut sh = shell();

        sh.handle_line("add milk");
        assert_eq!(sh.handle_line("done MILK").message, "Completed: MILK");
    }

    #[test]
    fn test_empty_descriptions_never_reach_the_store() {
        let mut sh = shell();

        assert_eq!(sh.handle_line("add   ").message, "Cannot add an empty task");
        assert!(sh.store().is_empty());
        // Boundary rejection captures no snapshot
        assert_eq!(sh.store().history_depth(), 0);
    }

    #[test]
    fn test_done_on_empty_collection_prints_hint() {
        let mut sh = shell();

        let reply = sh.handle_line("done anything");
        assert_eq!(reply.message, NO_TASKS_HINT);
        assert_eq!(sh.store().history_depth(), 0);
    }

    #[test]
    fn test_not_found_still_permits_undo() {
        let mut sh = shell();

        sh.handle_line("add bread");
        assert_eq!(
            sh.handle_line("done milk").message,
            "Task not found: MILK"
        );
        assert_eq!(sh.handle_line("undo").message, "Undo successful");
        assert_eq!(sh.store().len(), 1);
    }

    #[test]
    fn test_clear_on_empty_then_undo_reports_nothing() {
        let mut sh = shell();

        assert_eq!(sh.handle_line("clear").message, "Task list is already empty");
        assert_eq!(sh.handle_line("undo").message, "Nothing to undo");
    }

    #[test]
    fn test_list_views() {
        let mut sh = shell();

        assert_eq!(sh.handle_line("list").message, "Task list is empty");

        sh.handle_line("add buy milk");
        sh.handle_line("add walk dog");
        sh.handle_line("done buy milk");

        assert_eq!(sh.handle_line("list").message, "[x] BUY MILK\n[ ] WALK DOG");
        assert_eq!(sh.handle_line("completed").message, "[x] BUY MILK");
        assert_eq!(sh.handle_line("todo").message, "[ ] WALK DOG");
    }

    #[test]
    fn test_find_and_count() {
        let mut sh = shell();

        sh.handle_line("add read book");
        assert_eq!(sh.handle_line("find read book").message, "[ ] READ BOOK");
        assert_eq!(
            sh.handle_line("find nothing").message,
            "Task not found: NOTHING"
        );
        assert_eq!(sh.handle_line("count").message, "1 task(s)");
    }

    #[test]
    fn test_unknown_command() {
        let mut sh = shell();
        assert!(sh
            .handle_line("frobnicate")
            .message
            .starts_with("Unknown command: frobnicate"));
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut sh = shell();
        assert!(sh.handle_line("quit").quit);
        assert!(sh.handle_line("exit").quit);
        assert!(!sh.handle_line("list").quit);
    }

    #[test]
    fn test_blank_line_is_ignored() {
        let mut sh = shell();
        let reply = sh.handle_line("   \n");
        assert!(reply.message.is_empty());
        assert!(!reply.quit);
    }
}

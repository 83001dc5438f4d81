//! Integration tests for persistence: storage round-trips, the shell's
//! load-mutate-save cycle, and delimiter handling.

use std::fs;

use taskdeck::shell::Shell;
use taskdeck::storage::Storage;
use taskdeck::store::{Task, TaskStore};
use tempfile::tempdir;

fn records(tasks: &[Task]) -> Vec<(String, bool)> {
    tasks
        .iter()
        .map(|t| (t.description().to_string(), t.is_completed()))
        .collect()
}

#[test]
fn save_then_load_reproduces_records_exactly() {
    let temp = tempdir().unwrap();
    let storage = Storage::from_path(temp.path().join("tasks.txt"), '|');

    let mut tasks = vec![
        Task::new("BUY MILK"),
        Task::new("WALK DOG"),
        Task::new("READ BOOK"),
    ];
    tasks[0].mark_complete();

    storage.save(&tasks).unwrap();
    let loaded = storage.load().unwrap();

    assert_eq!(records(&loaded), records(&tasks));
}

#[test]
fn file_format_is_description_delimiter_status() {
    let temp = tempdir().unwrap();
    let storage = Storage::from_path(temp.path().join("tasks.txt"), '|');

    let mut tasks = vec![Task::new("BUY MILK"), Task::new("WALK DOG")];
    tasks[0].mark_complete();
    storage.save(&tasks).unwrap();

    let content = fs::read_to_string(storage.path()).unwrap();
    assert_eq!(content, "BUY MILK|COMPLETED\nWALK DOG|INCOMPLETE\n");
}

#[test]
fn comma_delimiter_writes_comma_records() {
    let temp = tempdir().unwrap();
    let storage = Storage::from_path(temp.path().join("tasks.txt"), ',');

    storage.save(&[Task::new("BUY MILK")]).unwrap();

    let content = fs::read_to_string(storage.path()).unwrap();
    assert_eq!(content, "BUY MILK,INCOMPLETE\n");
    assert_eq!(storage.load().unwrap().len(), 1);
}

#[test]
fn malformed_lines_do_not_break_their_neighbors() {
    let temp = tempdir().unwrap();
    let storage = Storage::from_path(temp.path().join("tasks.txt"), '|');

    fs::write(
        storage.path(),
        "FIRST|INCOMPLETE\ngarbage line\nSECOND|COMPLETED\nTOO|MANY|FIELDS\nTHIRD|INCOMPLETE\n",
    )
    .unwrap();

    let loaded = storage.load().unwrap();
    assert_eq!(
        records(&loaded),
        vec![
            ("FIRST".to_string(), false),
            ("SECOND".to_string(), true),
            ("THIRD".to_string(), false),
        ]
    );
}

#[test]
fn shell_session_round_trips_through_the_file() {
    let temp = tempdir().unwrap();
    let storage = Storage::from_path(temp.path().join("tasks.txt"), '|');

    // First session: create some state and save on exit.
    let mut shell = Shell::new(TaskStore::with_tasks(storage.load().unwrap()));
    shell.handle_line("add buy milk");
    shell.handle_line("add walk dog");
    shell.handle_line("done buy milk");
    storage.save(shell.store().tasks()).unwrap();

    // Second session: state is back, history is not.
    let mut shell = Shell::new(TaskStore::with_tasks(storage.load().unwrap()));
    assert_eq!(
        records(shell.store().tasks()),
        vec![("BUY MILK".to_string(), true), ("WALK DOG".to_string(), false)]
    );
    assert_eq!(shell.handle_line("undo").message, "Nothing to undo");
}

#[test]
fn overwriting_save_keeps_previous_contents_as_backup() {
    let temp = tempdir().unwrap();
    let storage = Storage::from_path(temp.path().join("tasks.txt"), '|');

    storage.save(&[Task::new("OLD STATE")]).unwrap();
    storage.save(&[Task::new("NEW STATE")]).unwrap();

    let backup = fs::read_to_string(temp.path().join("tasks.txt.bak")).unwrap();
    assert_eq!(backup, "OLD STATE|INCOMPLETE\n");

    let current = fs::read_to_string(storage.path()).unwrap();
    assert_eq!(current, "NEW STATE|INCOMPLETE\n");
}

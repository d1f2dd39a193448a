//! The task store.
//!
//! This module provides the `Database` struct holding the ordered task list, along with
//! loading it from and saving it to the JSON persistence file. The whole list is read and
//! rewritten every time; there is no partial update of the file.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DbError;
use crate::task::Task;

/// Default persistence file, relative to the working directory.
pub const DEFAULT_DB_FILE: &str = "todos.json";

/// In-memory task list. Serialises as the bare JSON array of tasks.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Database {
    pub tasks: Vec<Task>,
}

impl Database {
    /// Load the task list from a JSON file.
    ///
    /// A missing, unreadable or malformed file all give an empty list. None of these are
    /// reported to the user; the cause is only visible in debug logs.
    pub fn load(path: &Path) -> Self {
        let buf = match fs::read_to_string(path) {
            Ok(buf) => buf,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "no readable task file, starting empty");
                return Database::default();
            }
        };
        match serde_json::from_str::<Database>(&buf) {
            Ok(db) => {
                tracing::debug!(path = %path.display(), count = db.len(), "loaded tasks");
                db
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "task file did not parse, starting empty");
                Database::default()
            }
        }
    }

    /// Save the task list, overwriting the file in place.
    ///
    /// Serialisation happens before the file is opened, so a serialisation failure leaves
    /// the old file intact. The write itself is not atomic.
    pub fn save(&self, path: &Path) -> Result<(), DbError> {
        let data = serde_json::to_string(self)?;
        fs::write(path, data).map_err(|source| DbError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), count = self.len(), "saved tasks");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Id for the next task: current length plus one.
    ///
    /// This is not unique once a task has been deleted; existing files depend on it.
    pub fn next_id(&self) -> i64 {
        self.tasks.len() as i64 + 1
    }

    /// Append a new task and return it.
    pub fn add(&mut self, text: impl Into<String>) -> &Task {
        let task = Task::new(self.next_id(), text);
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    /// Get the first task with the given id.
    pub fn get(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Remove the first task with the given id, keeping the rest in order.
    pub fn remove_first(&mut self, id: i64) -> Option<Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(idx))
    }

    /// Replace the text of the first task with the given id. Returns whether one matched.
    pub fn update_first(&mut self, id: i64, text: impl Into<String>) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Write every task as `<id>. <text>` on its own line.
    pub fn write_list<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for task in &self.tasks {
            writeln!(out, "{task}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample() -> Database {
        Database {
            tasks: vec![
                Task::new(1, "Test task 1"),
                Task::new(2, "Test task 2"),
                Task::new(3, "Test task 3"),
            ],
        }
    }

    #[test]
    fn test_save_then_load_keeps_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_DB_FILE);

        let db = sample();
        db.save(&path).unwrap();
        assert_eq!(Database::load(&path), db);
    }

    #[test]
    fn test_save_writes_bare_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_DB_FILE);

        let mut db = Database::default();
        db.add("Buy milk");
        db.add("Walk dog");
        db.save(&path).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            r#"[{"id":1,"task":"Buy milk"},{"id":2,"task":"Walk dog"}]"#
        );
    }

    #[test]
    fn test_load_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_DB_FILE);
        fs::write(&path, r#"[{"id":1,"task":"Test task 1"},{"id":2,"task":"Test task 2"}]"#).unwrap();

        let db = Database::load(&path);
        assert_eq!(
            db.tasks,
            vec![Task::new(1, "Test task 1"), Task::new(2, "Test task 2")]
        );
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let db = Database::load(&dir.path().join("nope.json"));
        assert!(db.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_DB_FILE);

        for content in ["", "not json", r#"{"id":1,"task":"x"}"#, r#"[{"id":"one","task":"x"}]"#] {
            fs::write(&path, content).unwrap();
            assert!(Database::load(&path).is_empty(), "content: {content:?}");
        }
    }

    #[test]
    fn test_load_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(Database::load(dir.path()).is_empty());
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join(DEFAULT_DB_FILE);

        let err = sample().save(&path).unwrap_err();
        assert!(matches!(err, DbError::Write { .. }));
        assert!(err.to_string().starts_with("could not write "));
    }

    #[test]
    fn test_add_assigns_length_plus_one() {
        let mut db = Database::default();
        assert_eq!(db.add("first"), &Task::new(1, "first"));
        assert_eq!(db.add("second").id, 2);
        assert_eq!(db.len(), 2);
    }

    #[test]
    fn test_add_after_delete_reuses_id() {
        let mut db = sample();
        db.remove_first(1);
        let added = db.add("again").id;
        assert_eq!(added, 3);
        assert_eq!(db.tasks.iter().filter(|t| t.id == 3).count(), 2);
    }

    #[test]
    fn test_remove_first_keeps_order() {
        let mut db = sample();
        assert_eq!(db.remove_first(2), Some(Task::new(2, "Test task 2")));
        assert_eq!(
            db.tasks,
            vec![Task::new(1, "Test task 1"), Task::new(3, "Test task 3")]
        );
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut db = sample();
        assert_eq!(db.remove_first(42), None);
        assert_eq!(db, sample());
    }

    #[test]
    fn test_remove_only_first_duplicate() {
        let mut db = Database {
            tasks: vec![Task::new(1, "a"), Task::new(2, "b"), Task::new(2, "c")],
        };
        db.remove_first(2);
        assert_eq!(db.tasks, vec![Task::new(1, "a"), Task::new(2, "c")]);
    }

    #[test]
    fn test_update_first_changes_text_only() {
        let mut db = sample();
        assert!(db.update_first(2, "Changed"));
        assert_eq!(
            db.tasks,
            vec![
                Task::new(1, "Test task 1"),
                Task::new(2, "Changed"),
                Task::new(3, "Test task 3"),
            ]
        );
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut db = sample();
        assert!(!db.update_first(0, "Changed"));
        assert_eq!(db, sample());
    }

    #[test]
    fn test_update_only_first_duplicate() {
        let mut db = Database {
            tasks: vec![Task::new(2, "b"), Task::new(2, "c")],
        };
        db.update_first(2, "x");
        assert_eq!(db.get(2), Some(&Task::new(2, "x")));
        assert_eq!(db.tasks[1], Task::new(2, "c"));
    }

    #[test]
    fn test_write_list() {
        let mut out = Vec::new();
        sample().write_list(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1. Test task 1\n2. Test task 2\n3. Test task 3\n"
        );
    }
}

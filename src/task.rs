//! Task data structure and seed data.
//!
//! This module defines the `Task` that lives on the board, its stable `TaskId`,
//! the built-in seed tasks shown at startup, and the JSON seed file loader.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fields::Column;

/// Stable identifier assigned to a task when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A unit of work sitting in exactly one board column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub column: Column,
    pub title: String,
    pub description: String,
}

impl Task {
    pub fn new(id: TaskId, column: Column, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            column,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Advance the task to the following column.
    pub fn next(&mut self) {
        self.column = self.column.next();
    }

    /// Move the task back to the preceding column.
    pub fn prev(&mut self) {
        self.column = self.column.prev();
    }
}

/// One entry of a seed file. Ids are assigned in file order.
#[derive(Debug, Clone, Deserialize)]
struct SeedEntry {
    column: Column,
    title: String,
    #[serde(default)]
    description: String,
}

/// The tasks a fresh board starts with.
pub fn seed_tasks() -> Vec<Task> {
    let entries = [
        (Column::Todo, "buy milk", "strawberry milk"),
        (Column::Todo, "eat sushi", "negitoro roll, miso soup, rice"),
        (Column::Todo, "fold laundry", "or wear wrinkly t-shirts"),
        (Column::InProgress, "write code", "don't worry, it's rust"),
        (Column::Done, "stay cool", "as a cucumber"),
    ];
    entries
        .into_iter()
        .zip(1..)
        .map(|((column, title, description), id)| Task::new(TaskId(id), column, title, description))
        .collect()
}

/// Parse seed tasks from a JSON array of `{column, title, description}` objects.
pub fn parse_seed(json: &str) -> serde_json::Result<Vec<Task>> {
    let entries: Vec<SeedEntry> = serde_json::from_str(json)?;
    Ok(entries
        .into_iter()
        .zip(1..)
        .map(|(e, id)| Task::new(TaskId(id), e.column, e.title, e.description))
        .collect())
}

/// Load seed tasks from a JSON file.
pub fn load_seed(path: &Path) -> Result<Vec<Task>> {
    let buf = fs::read_to_string(path).map_err(|source| Error::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&buf).map_err(|source| Error::Seed {
        path: path.to_path_buf(),
        source,
    })
}

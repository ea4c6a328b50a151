pub mod storage;
pub mod types;

use std::path::{Path, PathBuf};

use crate::shared::errors::StoreError;
use types::Task;

/// In-memory task sequence mirrored to a JSON file on every mutation.
///
/// Insertion order is display and indexing order. Every mutating operation
/// validates its input, applies the change, and rewrites the whole file as
/// its final step; the last successful save is authoritative.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    path: PathBuf,
}

impl TaskStore {
    /// Open the store backed by `path`, loading the file if it exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let mut store = Self {
            tasks: Vec::new(),
            path: path.into(),
        };
        store.load()?;
        Ok(store)
    }

    /// Replace the in-memory sequence with the file contents.
    /// A missing file leaves the store empty.
    pub fn load(&mut self) -> Result<(), StoreError> {
        self.tasks = storage::load_tasks(&self.path)?;
        tracing::debug!(
            target: "tasks",
            "Loaded {} tasks from {:?}",
            self.tasks.len(),
            self.path
        );
        Ok(())
    }

    /// Write the complete current sequence back to the file.
    pub fn save(&self) -> Result<(), StoreError> {
        storage::save_tasks(&self.path, &self.tasks)?;
        Ok(())
    }

    /// Append a new, not-yet-completed task. Returns its position.
    pub fn add_task(&mut self, title: &str) -> Result<usize, StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        self.tasks.push(Task::new(title));
        self.save()?;

        let index = self.tasks.len() - 1;
        tracing::debug!(target: "tasks", "Added task at position {}", index);
        Ok(index)
    }

    /// Replace the title of the task at `index`. The completed flag is left
    /// untouched.
    pub fn edit_task(&mut self, index: usize, new_title: &str) -> Result<(), StoreError> {
        let new_title = new_title.trim();
        if new_title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        let task = self
            .tasks
            .get_mut(index)
            .ok_or(StoreError::NoSuchTask(index))?;

        task.title = new_title.to_string();
        self.save()?;

        tracing::debug!(target: "tasks", "Edited task at position {}", index);
        Ok(())
    }

    /// Remove the task at `index`, shifting later tasks one position earlier.
    pub fn delete_task(&mut self, index: usize) -> Result<(), StoreError> {
        if index >= self.tasks.len() {
            return Err(StoreError::NoSuchTask(index));
        }

        self.tasks.remove(index);
        self.save()?;

        tracing::debug!(target: "tasks", "Deleted task at position {}", index);
        Ok(())
    }

    /// Mark the task at `index` as completed. Marking an already-completed
    /// task is a state-level no-op but still persists.
    pub fn mark_complete(&mut self, index: usize) -> Result<(), StoreError> {
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(StoreError::NoSuchTask(index))?;

        task.completed = true;
        self.save()?;

        tracing::debug!(target: "tasks", "Marked task at position {} complete", index);
        Ok(())
    }

    /// Ordered view of the tasks for rendering.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Open the store at the given location, logging the result.
pub fn init_task_store(path: impl Into<PathBuf>) -> Result<TaskStore, StoreError> {
    let store = TaskStore::open(path)?;
    tracing::info!(
        target: "tasks",
        "Task store initialized: {} tasks in {:?}",
        store.len(),
        store.path()
    );
    Ok(store)
}

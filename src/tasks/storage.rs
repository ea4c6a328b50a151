use std::fs;
use std::path::Path;

use crate::shared::errors::PersistenceError;
use crate::shared::paths::ensure_dir;

use super::types::Task;

/// Load the task sequence from `path`.
/// A missing file is an empty list, not an error.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>, PersistenceError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).map_err(PersistenceError::Read)?;
    let tasks: Vec<Task> = serde_json::from_str(&content)?;
    Ok(tasks)
}

/// Overwrite `path` with the full task sequence.
///
/// The content goes to a sibling temp file first and is renamed over the
/// target, so a crash mid-write never leaves a truncated tasks file behind.
pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<(), PersistenceError> {
    // A bare relative filename has an empty parent; nothing to create then.
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        ensure_dir(dir).map_err(PersistenceError::Write)?;
    }

    let content = serde_json::to_string_pretty(tasks)?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content).map_err(PersistenceError::Write)?;
    fs::rename(&tmp, path).map_err(PersistenceError::Write)?;
    Ok(())
}

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::shared::paths::{ensure_dir, get_storage_dir, get_tasks_path};

/// Application settings, persisted next to the task data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Overrides where the task list file lives. Relative paths resolve
    /// against the working directory.
    #[serde(default)]
    pub tasks_file: Option<String>,
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn get_settings_path() -> PathBuf {
    get_storage_dir().join("settings.json")
}

/// Load settings, falling back to defaults when the file is missing or
/// unreadable.
pub fn load_settings() -> AppSettings {
    let path = get_settings_path();

    if !path.exists() {
        return AppSettings::default();
    }

    load_settings_from_file(&path).unwrap_or_default()
}

fn load_settings_from_file(path: &Path) -> Result<AppSettings, SettingsError> {
    let contents = std::fs::read_to_string(path)?;
    let settings = serde_json::from_str(&contents)?;
    Ok(settings)
}

pub fn save_settings(settings: &AppSettings) -> Result<(), SettingsError> {
    let storage_dir = get_storage_dir();
    ensure_dir(&storage_dir)?;

    let path = get_settings_path();
    let contents = serde_json::to_string_pretty(settings)?;
    std::fs::write(&path, contents)?;
    Ok(())
}

/// Resolve the tasks file location from settings.
pub fn resolve_tasks_path(settings: &AppSettings) -> PathBuf {
    match &settings.tasks_file {
        Some(path) => PathBuf::from(path),
        None => get_tasks_path(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_use_storage_dir() {
        let settings = AppSettings::default();
        let path = resolve_tasks_path(&settings);
        assert!(path.ends_with("tasks.json"));
    }

    #[test]
    fn test_tasks_file_override_wins() {
        let settings = AppSettings {
            tasks_file: Some("/tmp/minhas-tarefas.json".to_string()),
        };
        let path = resolve_tasks_path(&settings);
        assert_eq!(path, PathBuf::from("/tmp/minhas-tarefas.json"));
    }

    #[test]
    fn test_settings_parse_tolerates_missing_fields() {
        let settings: AppSettings = serde_json::from_str("{}").unwrap();
        assert!(settings.tasks_file.is_none());
    }

    #[test]
    fn test_settings_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = AppSettings {
            tasks_file: Some("lista.json".to_string()),
        };
        std::fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();

        let loaded = load_settings_from_file(&path).unwrap();
        assert_eq!(loaded.tasks_file.as_deref(), Some("lista.json"));
    }
}

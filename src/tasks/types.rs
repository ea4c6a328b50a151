use serde::{Deserialize, Serialize};

/// A single task: what to do, and whether it is done.
///
/// The on-disk format is a plain JSON array of these, with exactly the two
/// fields below. Field names must stay stable so files written by earlier
/// versions keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub completed: bool,
}

impl Task {
    /// A fresh, not-yet-completed task.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_serializes_to_exact_wire_shape() {
        let task = Task::new("Buy milk");
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value, json!({"title": "Buy milk", "completed": false}));
    }

    #[test]
    fn test_task_rejects_missing_completed_field() {
        let result: Result<Task, _> = serde_json::from_str(r#"{"title": "A"}"#);
        assert!(result.is_err());
    }
}

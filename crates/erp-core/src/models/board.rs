//! Kanban Column and Task Entities
//!
//! Columns order left-to-right by `position` within a project; tasks order
//! top-to-bottom by `position` within a column.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Entity;

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 4] = [
        TaskPriority::Low,
        TaskPriority::Medium,
        TaskPriority::High,
        TaskPriority::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
            TaskPriority::Critical => "critical",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "low" => TaskPriority::Low,
            "high" => TaskPriority::High,
            "critical" => TaskPriority::Critical,
            _ => TaskPriority::Medium,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
            TaskPriority::Critical => "Critical",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            TaskPriority::Critical => "#f87171",
            TaskPriority::High => "#f59e0b",
            TaskPriority::Medium => "#60a5fa",
            TaskPriority::Low => "#555555",
        }
    }
}

/// A board column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardColumn {
    pub id: u32,
    pub project_id: u32,
    pub name: String,
    pub color: String,
    pub position: i32,
}

impl Entity for BoardColumn {
    fn id(&self) -> u32 {
        self.id
    }
}

/// A card on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub column_id: u32,
    pub project_id: u32,
    pub title: String,
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub assignee: Option<String>,
    /// Free-text, comma-delimited
    pub tags: Option<String>,
    pub position: i32,
    pub created_at: NaiveDateTime,
}

impl Task {
    /// Individual tags, trimmed, blanks dropped
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Entity for Task {
    fn id(&self) -> u32 {
        self.id
    }
}

/// Body for `POST /projects/{id}/columns`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewColumn {
    pub project_id: u32,
    pub name: String,
    pub color: String,
    pub position: i32,
}

/// Body for `PUT /projects/columns/{id}`; position is not editable here
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnPatch {
    pub name: String,
    pub color: String,
}

/// Body for `POST /projects/{id}/tasks`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub project_id: u32,
    pub column_id: u32,
    pub title: String,
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub assignee: Option<String>,
    pub tags: Option<String>,
    pub position: i32,
}

/// Body for `PUT /projects/tasks/{id}`; column and position are not editable here
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskPatch {
    pub title: String,
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub assignee: Option<String>,
    pub tags: Option<String>,
}

/// Body for `PATCH /projects/tasks/{id}/move`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskMove {
    pub column_id: u32,
    pub position: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_with_tags(tags: Option<&str>) -> Task {
        Task {
            id: 1,
            column_id: 1,
            project_id: 1,
            title: "Draft launch plan".to_string(),
            description: None,
            priority: TaskPriority::default(),
            assignee: None,
            tags: tags.map(str::to_string),
            position: 0,
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_tag_list_splits_and_trims() {
        let task = task_with_tags(Some("backend, ui ,, urgent"));
        assert_eq!(task.tag_list(), vec!["backend", "ui", "urgent"]);
        assert!(task_with_tags(None).tag_list().is_empty());
    }

    #[test]
    fn test_blank_optionals_serialize_as_null() {
        let patch = TaskPatch {
            title: "T".to_string(),
            description: None,
            priority: TaskPriority::High,
            assignee: None,
            tags: None,
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["description"], serde_json::Value::Null);
        assert_eq!(json["assignee"], serde_json::Value::Null);
        assert_eq!(json["priority"], "high");
        assert!(json.as_object().unwrap().contains_key("tags"));
    }
}

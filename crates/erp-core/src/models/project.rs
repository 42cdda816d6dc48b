//! Project Entity

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Entity;

/// Lifecycle status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Active,
    OnHold,
    Completed,
    Archived,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Active,
        ProjectStatus::OnHold,
        ProjectStatus::Completed,
        ProjectStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::OnHold => "on_hold",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Archived => "archived",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "on_hold" => ProjectStatus::OnHold,
            "completed" => ProjectStatus::Completed,
            "archived" => ProjectStatus::Archived,
            _ => ProjectStatus::Active,
        }
    }

    /// Human label, e.g. "on hold"
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }

    /// Badge color
    pub fn color(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "#34d399",
            ProjectStatus::OnHold => "#fbbf24",
            ProjectStatus::Completed => "#60a5fa",
            ProjectStatus::Archived => "#555555",
        }
    }
}

/// A project owning a kanban board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub color: String,
    pub owner: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Entity for Project {
    fn id(&self) -> u32 {
        self.id
    }
}

/// Aggregate counts shown above the project list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub total_projects: u32,
    pub active: u32,
    pub completed: u32,
    pub total_tasks: u32,
}

/// Body for `POST /projects/` and `PUT /projects/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectPayload {
    pub name: String,
    pub description: Option<String>,
    pub owner: Option<String>,
    pub status: ProjectStatus,
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_string(&ProjectStatus::OnHold).unwrap(), "\"on_hold\"");
        assert_eq!(ProjectStatus::from_str("archived"), ProjectStatus::Archived);
        assert_eq!(ProjectStatus::from_str("bogus"), ProjectStatus::Active);
        assert_eq!(ProjectStatus::OnHold.label(), "on hold");
    }

    #[test]
    fn test_project_decodes_backend_json() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "Launch",
            "description": null,
            "status": "on_hold",
            "color": "#7c6aff",
            "owner": "Dana",
            "created_at": "2025-02-01T09:30:00"
        }))
        .unwrap();
        assert_eq!(project.id(), 3);
        assert_eq!(project.status, ProjectStatus::OnHold);
        assert!(project.description.is_none());
    }
}

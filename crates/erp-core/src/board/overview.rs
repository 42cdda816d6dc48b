//! Project List View State

use std::collections::BTreeMap;

use futures::future::join_all;

use crate::api::ProjectsApi;
use crate::models::{find_by_id, Project, ProjectSummary};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectOverview {
    pub projects: Vec<Project>,
    pub summary: Option<ProjectSummary>,
    /// Derived figure shared with the board; refreshed after every task mutation
    pub task_counts: BTreeMap<u32, usize>,
    pub load_error: Option<String>,
}

impl ProjectOverview {
    pub fn project(&self, id: u32) -> Option<&Project> {
        find_by_id(&self.projects, id)
    }

    pub fn task_count(&self, project_id: u32) -> usize {
        self.task_counts.get(&project_id).copied().unwrap_or(0)
    }

    /// Fetch summary and projects in parallel, then every project's tasks for counts.
    /// Never fails: anything unreachable degrades to empty data plus `load_error`.
    pub async fn fetch<A: ProjectsApi + ?Sized>(api: &A) -> Self {
        let (summary, projects) = futures::join!(api.project_summary(), api.list_projects());

        let mut overview = ProjectOverview::default();
        overview.summary = match summary {
            Ok(s) => Some(s),
            Err(e) => {
                log::warn!("[PROJECTS] summary unavailable: {}", e);
                overview.load_error = Some(e.to_string());
                None
            }
        };
        overview.projects = match projects {
            Ok(p) => p,
            Err(e) => {
                log::error!("[PROJECTS] failed to load projects: {}", e);
                overview.load_error = Some(e.to_string());
                return overview;
            }
        };

        let counts = join_all(overview.projects.iter().map(|p| async move {
            (p.id, api.list_tasks(p.id).await)
        }))
        .await;
        for (project_id, tasks) in counts {
            match tasks {
                Ok(tasks) => {
                    overview.task_counts.insert(project_id, tasks.len());
                }
                Err(e) => log::warn!("[PROJECTS] no task count for project {}: {}", project_id, e),
            }
        }
        overview
    }
}

// src/dashboard_data.rs

use serde::Serialize;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::models::project::ProjectStatus;
use crate::models::task::{Task, TaskStatus};
use crate::store::WorkspaceStore;

/// Task counts by status plus a completion percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    pub todo: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub completion_pct: f64,
}

/// The aggregates the dashboard renders for the whole workspace.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceStats {
    pub total_projects: usize,
    pub active_projects: usize,
    pub documents: usize,
    pub messages: usize,
    pub tasks: TaskSummary,
}

/// Per-project flavor of the same numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub project_id: Uuid,
    pub documents: usize,
    pub messages: usize,
    pub tasks: TaskSummary,
}

fn summarize<'a>(tasks: impl Iterator<Item = &'a Task>) -> TaskSummary {
    let mut todo = 0;
    let mut in_progress = 0;
    let mut completed = 0;
    for task in tasks {
        match task.status {
            TaskStatus::Todo => todo += 1,
            TaskStatus::InProgress => in_progress += 1,
            TaskStatus::Completed => completed += 1,
        }
    }
    let total = todo + in_progress + completed;
    let completion_pct = if total == 0 {
        0.0
    } else {
        completed as f64 * 100.0 / total as f64
    };
    TaskSummary {
        todo,
        in_progress,
        completed,
        completion_pct,
    }
}

impl WorkspaceStore {
    /// Workspace-wide counts. Pure read.
    pub fn workspace_stats(&self) -> WorkspaceStats {
        WorkspaceStats {
            total_projects: self.projects.len(),
            active_projects: self
                .projects
                .iter()
                .filter(|p| p.status == ProjectStatus::Active)
                .count(),
            documents: self.documents.len(),
            messages: self.messages.len(),
            tasks: summarize(self.tasks.iter()),
        }
    }

    /// Counts scoped to one project.
    pub fn project_stats(&self, project_id: Uuid) -> StoreResult<ProjectStats> {
        self.get_project(project_id)?;
        Ok(ProjectStats {
            project_id,
            documents: self
                .documents
                .iter()
                .filter(|d| d.project_id == project_id)
                .count(),
            messages: self
                .messages
                .iter()
                .filter(|m| m.project_id == project_id)
                .count(),
            tasks: summarize(self.tasks.iter().filter(|t| t.project_id == project_id)),
        })
    }
}

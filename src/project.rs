// src/project.rs

use chrono::Utc;
use log::{debug, info};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::models::project::{Project, ProjectStatus};
use crate::store::{dedupe_ids, WorkspaceStore};

const DEFAULT_COLOR: &str = "#3b82f6";
const DEFAULT_ICON: &str = "📁";

/// Payload for creating a project.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub owner_id: Uuid,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub status: Option<ProjectStatus>,
    pub members: Option<Vec<Uuid>>,
    pub tags: Option<Vec<String>>,
}

/// Payload for updating a project; absent fields are left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub status: Option<ProjectStatus>,
    pub members: Option<Vec<Uuid>>,
    pub tags: Option<Vec<String>>,
}

impl WorkspaceStore {
    /// Creates a project. Caller-supplied fields win over the defaults
    /// (status "active", members = [owner], stock color and icon).
    pub fn create_project(&mut self, payload: CreateProjectRequest) -> StoreResult<Project> {
        if payload.name.trim().is_empty() {
            return Err(StoreError::InvalidArgument("project name is empty".into()));
        }
        let now = Utc::now();
        let mut members = payload.members.unwrap_or_default();
        if !members.contains(&payload.owner_id) {
            members.insert(0, payload.owner_id);
        }
        dedupe_ids(&mut members);

        let project = Project {
            id: Uuid::new_v4(),
            name: payload.name,
            description: payload.description.unwrap_or_default(),
            color: payload.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            icon: payload.icon.unwrap_or_else(|| DEFAULT_ICON.to_string()),
            created_at: now,
            updated_at: now,
            owner_id: payload.owner_id,
            members,
            status: payload.status.unwrap_or(ProjectStatus::Active),
            tags: payload.tags.unwrap_or_default(),
        };
        info!("Project created: {} ({})", project.name, project.id);
        self.projects.push(project.clone());
        Ok(project)
    }

    /// Merges the supplied fields into the project and refreshes
    /// `updated_at`. Returns the updated record.
    pub fn update_project(
        &mut self,
        id: Uuid,
        updates: UpdateProjectRequest,
    ) -> StoreResult<Project> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::ProjectNotFound(id))?;

        if let Some(name) = updates.name {
            if name.trim().is_empty() {
                return Err(StoreError::InvalidArgument("project name is empty".into()));
            }
            project.name = name;
        }
        if let Some(description) = updates.description {
            project.description = description;
        }
        if let Some(color) = updates.color {
            project.color = color;
        }
        if let Some(icon) = updates.icon {
            project.icon = icon;
        }
        if let Some(status) = updates.status {
            project.status = status;
        }
        if let Some(mut members) = updates.members {
            // The owner can never drop out of the member set.
            if !members.contains(&project.owner_id) {
                members.insert(0, project.owner_id);
            }
            dedupe_ids(&mut members);
            project.members = members;
        }
        if let Some(tags) = updates.tags {
            project.tags = tags;
        }
        project.updated_at = Utc::now();
        debug!("Project updated: {}", id);
        Ok(project.clone())
    }

    /// Removes the project and cascades: every document, task and message
    /// referencing it goes too, along with presence lists and leases of the
    /// cascaded documents. Unconditional and irreversible.
    pub fn delete_project(&mut self, id: Uuid) -> StoreResult<()> {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.projects.len() == before {
            return Err(StoreError::ProjectNotFound(id));
        }

        let cascaded_docs: Vec<Uuid> = self
            .documents
            .iter()
            .filter(|d| d.project_id == id)
            .map(|d| d.id)
            .collect();
        for doc_id in &cascaded_docs {
            self.presence.remove(doc_id);
            self.locks.remove(doc_id);
        }
        self.documents.retain(|d| d.project_id != id);
        self.tasks.retain(|t| t.project_id != id);
        self.messages.retain(|m| m.project_id != id);
        info!("Project deleted with cascade: {}", id);
        Ok(())
    }

    pub fn get_project(&self, id: Uuid) -> StoreResult<&Project> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or(StoreError::ProjectNotFound(id))
    }

    /// Projects the given user is a member of, in creation order.
    pub fn user_projects(&self, user_id: Uuid) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.members.contains(&user_id))
            .collect()
    }
}

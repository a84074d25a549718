// src/task.rs

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::models::task::{Subtask, Task, TaskPriority, TaskStatus};
use crate::models::Comment;
use crate::store::WorkspaceStore;

/// Payload for creating a task. The project must exist. Subtask titles
/// supplied here become unchecked subtasks in the given order.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub project_id: Uuid,
    pub title: String,
    pub created_by: Uuid,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<DateTime<Utc>>,
    pub assignee_id: Option<Uuid>,
    pub tags: Option<Vec<String>>,
    pub subtasks: Option<Vec<String>>,
}

/// Payload for updating a task; absent fields are left untouched. Unlike
/// documents there is no version or timestamp to bump.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub assignee_id: Option<Option<Uuid>>,
    pub tags: Option<Vec<String>>,
}

impl WorkspaceStore {
    /// Creates a task, defaulting status to "todo" and priority to medium.
    pub fn create_task(&mut self, payload: CreateTaskRequest) -> StoreResult<Task> {
        if payload.title.trim().is_empty() {
            return Err(StoreError::InvalidArgument("task title is empty".into()));
        }
        self.get_project(payload.project_id)?;

        let subtasks = payload
            .subtasks
            .unwrap_or_default()
            .into_iter()
            .map(|title| Subtask {
                id: Uuid::new_v4(),
                title,
                completed: false,
            })
            .collect();
        let task = Task {
            id: Uuid::new_v4(),
            project_id: payload.project_id,
            title: payload.title,
            description: payload.description.unwrap_or_default(),
            status: payload.status.unwrap_or(TaskStatus::Todo),
            priority: payload.priority.unwrap_or(TaskPriority::Medium),
            due_date: payload.due_date,
            assignee_id: payload.assignee_id,
            created_by: payload.created_by,
            created_at: Utc::now(),
            tags: payload.tags.unwrap_or_default(),
            subtasks,
            comments: Vec::new(),
        };
        info!("Task created: {} ({})", task.title, task.id);
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Merges the supplied fields into the task. `due_date` and
    /// `assignee_id` use a double Option so callers can clear them.
    pub fn update_task(&mut self, id: Uuid, updates: UpdateTaskRequest) -> StoreResult<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;

        if let Some(title) = updates.title {
            if title.trim().is_empty() {
                return Err(StoreError::InvalidArgument("task title is empty".into()));
            }
            task.title = title;
        }
        if let Some(description) = updates.description {
            task.description = description;
        }
        if let Some(status) = updates.status {
            task.status = status;
        }
        if let Some(priority) = updates.priority {
            task.priority = priority;
        }
        if let Some(due_date) = updates.due_date {
            task.due_date = due_date;
        }
        if let Some(assignee_id) = updates.assignee_id {
            task.assignee_id = assignee_id;
        }
        if let Some(tags) = updates.tags {
            task.tags = tags;
        }
        debug!("Task updated: {}", id);
        Ok(task.clone())
    }

    pub fn delete_task(&mut self, id: Uuid) -> StoreResult<()> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Err(StoreError::TaskNotFound(id));
        }
        info!("Task deleted: {}", id);
        Ok(())
    }

    pub fn get_task(&self, id: Uuid) -> StoreResult<&Task> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound(id))
    }

    /// Tasks of a project in creation order.
    pub fn get_project_tasks(&self, project_id: Uuid) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .collect()
    }

    /// Appends an unchecked subtask to the task's checklist.
    pub fn add_subtask(&mut self, task_id: Uuid, title: String) -> StoreResult<Subtask> {
        if title.trim().is_empty() {
            return Err(StoreError::InvalidArgument("subtask title is empty".into()));
        }
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or(StoreError::TaskNotFound(task_id))?;
        let subtask = Subtask {
            id: Uuid::new_v4(),
            title,
            completed: false,
        };
        task.subtasks.push(subtask.clone());
        Ok(subtask)
    }

    /// Sets the completed flag of one subtask. A missing task or subtask id
    /// is reported without mutating anything.
    pub fn update_subtask(
        &mut self,
        task_id: Uuid,
        subtask_id: Uuid,
        completed: bool,
    ) -> StoreResult<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or(StoreError::TaskNotFound(task_id))?;
        let subtask = task
            .subtasks
            .iter_mut()
            .find(|s| s.id == subtask_id)
            .ok_or(StoreError::SubtaskNotFound(subtask_id))?;
        subtask.completed = completed;
        Ok(())
    }

    /// Appends a comment to the task; same append-only contract as
    /// document comments.
    pub fn add_task_comment(
        &mut self,
        task_id: Uuid,
        user_id: Uuid,
        text: String,
    ) -> StoreResult<Comment> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or(StoreError::TaskNotFound(task_id))?;
        let comment = Comment {
            id: Uuid::new_v4(),
            user_id,
            text,
            created_at: Utc::now(),
        };
        task.comments.push(comment.clone());
        Ok(comment)
    }
}

//! Entity records held by the workspace store.

pub mod document;
pub mod message;
pub mod project;
pub mod task;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Roles a user can hold in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Instructor,
    Student,
}

impl UserRole {
    /// Whether this role may archive projects and remove other members.
    /// The store itself enforces nothing; callers check before mutating.
    pub fn can_moderate(&self) -> bool {
        matches!(self, Self::Instructor)
    }
}

/// A member of the workspace's hardcoded user directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar_color: String,
}

/// A comment on a document or task. Immutable once created: there is no
/// edit or delete operation, and order is arrival order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

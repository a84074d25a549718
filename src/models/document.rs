use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Comment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Markdown,
    PlainText,
    Code,
}

/// A shared document within a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Uuid,
    pub project_id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub last_edited_by: Uuid,
    pub tags: Vec<String>,
    /// Append-only; order is arrival order.
    pub comments: Vec<Comment>,
    /// Edit counter, not a content hash: starts at 1 and goes up by exactly
    /// one per update call, whether or not the content changed.
    pub version: u32,
    pub collaborators: Vec<Uuid>,
}

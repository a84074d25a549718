use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One reaction entry per distinct emoji per message; the user list is in
/// arrival order and holds each user at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    pub emoji: String,
    pub user_ids: Vec<Uuid>,
}

/// A chat message, grouped by project and free-form channel key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub project_id: Uuid,
    pub channel_id: String,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub reactions: Vec<Reaction>,
}

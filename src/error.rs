// src/error.rs

use thiserror::Error;
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures surfaced by workspace store operations.
///
/// Every lookup by id reports a missing record explicitly instead of
/// silently no-opping, so callers can decide on the user-visible messaging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("project {0} not found")]
    ProjectNotFound(Uuid),

    #[error("document {0} not found")]
    DocumentNotFound(Uuid),

    #[error("task {0} not found")]
    TaskNotFound(Uuid),

    #[error("subtask {0} not found")]
    SubtaskNotFound(Uuid),

    #[error("message {0} not found")]
    MessageNotFound(Uuid),

    #[error("user {0} not found")]
    UserNotFound(Uuid),

    #[error("document {0} is locked by another user")]
    DocumentLocked(Uuid),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

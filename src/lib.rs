//! StudySpace — an in-memory student collaboration workspace.
//!
//! The [`WorkspaceStore`] holds four related collections (projects,
//! documents, tasks, chat messages) plus the hardcoded user directory, and
//! exposes the CRUD, search and collaboration-marker operations the views
//! are built on. Deleting a project cascades to everything that references
//! it. State is process-lifetime only; a restart goes back to the seeded
//! demo workspace.

pub mod chat;
pub mod config;
pub mod dashboard_data;
pub mod document;
pub mod error;
pub mod models;
pub mod presence;
pub mod project;
pub mod search;
pub mod seed;
pub mod store;
pub mod task;
pub mod user_management;

pub use error::{StoreError, StoreResult};
pub use store::WorkspaceStore;

// src/store.rs

use std::collections::{HashMap, HashSet};

use chrono::Duration;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::models::document::Document;
use crate::models::message::Message;
use crate::models::project::Project;
use crate::models::task::Task;
use crate::models::User;
use crate::presence::LockLease;
use crate::seed;

/// In-memory workspace state. Every collection lives here in insertion
/// order and is reachable only through the operations on this type.
///
/// The store is constructed once at startup and handed to its consumers;
/// there is no global instance. Operations are synchronous and assume a
/// single caller — nothing blocks, retries or times out.
pub struct WorkspaceStore {
    pub(crate) users: Vec<User>,
    pub(crate) projects: Vec<Project>,
    pub(crate) documents: Vec<Document>,
    pub(crate) tasks: Vec<Task>,
    pub(crate) messages: Vec<Message>,
    /// document id -> users currently viewing it
    pub(crate) presence: HashMap<Uuid, Vec<Uuid>>,
    /// document id -> advisory edit lease
    pub(crate) locks: HashMap<Uuid, LockLease>,
    pub(crate) lock_ttl: Duration,
}

impl WorkspaceStore {
    /// An empty workspace with the default five-minute lease lifetime.
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            projects: Vec::new(),
            documents: Vec::new(),
            tasks: Vec::new(),
            messages: Vec::new(),
            presence: HashMap::new(),
            locks: HashMap::new(),
            lock_ttl: Duration::minutes(5),
        }
    }

    /// Overrides the advisory lease lifetime.
    pub fn with_lock_ttl(mut self, ttl: Duration) -> Self {
        self.lock_ttl = ttl;
        self
    }

    /// A store pre-populated with the demo workspace every fresh process
    /// starts from.
    pub fn with_demo_data() -> StoreResult<Self> {
        let mut store = Self::new();
        seed::install_demo_data(&mut store)?;
        Ok(store)
    }

    pub fn list_projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn list_documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn list_tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn list_messages(&self) -> &[Message] {
        &self.messages
    }
}

impl Default for WorkspaceStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Drops duplicate ids while keeping first-seen order.
pub(crate) fn dedupe_ids(ids: &mut Vec<Uuid>) {
    let mut seen = HashSet::new();
    ids.retain(|id| seen.insert(*id));
}

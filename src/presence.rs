// src/presence.rs

//! Collaboration markers: per-document presence lists and advisory edit
//! leases. Both only simulate multi-user presence for the views — neither
//! gates `update_document`, and nothing here is a concurrency-control
//! mechanism.

use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::store::WorkspaceStore;

/// Advisory edit lease on a document. An expired lease is treated as
/// absent and can be reclaimed by anyone.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LockLease {
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

impl LockLease {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

impl WorkspaceStore {
    /// Marks a user present in a document. Joining twice is a no-op; there
    /// is no expiry, so a user who never leaves stays listed.
    pub fn join_document(&mut self, doc_id: Uuid, user_id: Uuid) -> StoreResult<()> {
        self.get_document(doc_id)?;
        let present = self.presence.entry(doc_id).or_default();
        if !present.contains(&user_id) {
            present.push(user_id);
        }
        Ok(())
    }

    /// Removes a user from a document's presence list. Leaving a document
    /// one is not in (or that no longer exists) is a no-op.
    pub fn leave_document(&mut self, doc_id: Uuid, user_id: Uuid) {
        if let Some(present) = self.presence.get_mut(&doc_id) {
            present.retain(|u| *u != user_id);
            if present.is_empty() {
                self.presence.remove(&doc_id);
            }
        }
    }

    /// Users currently present in a document, in join order.
    pub fn document_presence(&self, doc_id: Uuid) -> Vec<Uuid> {
        self.presence.get(&doc_id).cloned().unwrap_or_default()
    }

    /// Takes or renews the advisory lease on a document. Fails with
    /// `DocumentLocked` while another user holds an unexpired lease.
    pub fn lock_document(&mut self, doc_id: Uuid, user_id: Uuid) -> StoreResult<LockLease> {
        self.get_document(doc_id)?;
        let now = Utc::now();
        if let Some(lease) = self.locks.get(&doc_id) {
            if lease.user_id != user_id && !lease.is_expired(now) {
                return Err(StoreError::DocumentLocked(doc_id));
            }
        }
        let lease = LockLease {
            user_id,
            expires_at: now + self.lock_ttl,
        };
        self.locks.insert(doc_id, lease.clone());
        debug!("Document {} leased to {}", doc_id, user_id);
        Ok(lease)
    }

    /// Releases the lease. Only the holder can release an active lease;
    /// releasing when none is active is a no-op.
    pub fn unlock_document(&mut self, doc_id: Uuid, user_id: Uuid) -> StoreResult<()> {
        let now = Utc::now();
        match self.locks.get(&doc_id) {
            Some(lease) if !lease.is_expired(now) && lease.user_id != user_id => {
                Err(StoreError::DocumentLocked(doc_id))
            }
            Some(_) => {
                self.locks.remove(&doc_id);
                debug!("Document {} lease released by {}", doc_id, user_id);
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// The current lease, if one is active.
    pub fn document_lock(&self, doc_id: Uuid) -> Option<&LockLease> {
        let now = Utc::now();
        self.locks.get(&doc_id).filter(|l| !l.is_expired(now))
    }
}

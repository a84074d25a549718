// src/document.rs

use chrono::Utc;
use log::{debug, info};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::models::document::{Document, DocumentType};
use crate::models::Comment;
use crate::store::{dedupe_ids, WorkspaceStore};

/// Payload for creating a document. The project must exist.
#[derive(Debug, Deserialize)]
pub struct CreateDocumentRequest {
    pub project_id: Uuid,
    pub title: String,
    pub created_by: Uuid,
    pub content: Option<String>,
    pub doc_type: Option<DocumentType>,
    pub tags: Option<Vec<String>>,
}

/// Payload for editing a document; absent fields are left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateDocumentRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub doc_type: Option<DocumentType>,
    pub tags: Option<Vec<String>>,
    pub collaborators: Option<Vec<Uuid>>,
}

impl WorkspaceStore {
    /// Creates a document at version 1 with the creator as sole
    /// collaborator. Fails if the referenced project does not exist.
    pub fn create_document(&mut self, payload: CreateDocumentRequest) -> StoreResult<Document> {
        if payload.title.trim().is_empty() {
            return Err(StoreError::InvalidArgument("document title is empty".into()));
        }
        self.get_project(payload.project_id)?;

        let now = Utc::now();
        let document = Document {
            id: Uuid::new_v4(),
            project_id: payload.project_id,
            title: payload.title,
            content: payload.content.unwrap_or_default(),
            doc_type: payload.doc_type.unwrap_or(DocumentType::Markdown),
            created_at: now,
            updated_at: now,
            created_by: payload.created_by,
            last_edited_by: payload.created_by,
            tags: payload.tags.unwrap_or_default(),
            comments: Vec::new(),
            version: 1,
            collaborators: vec![payload.created_by],
        };
        info!("Document created: {} ({})", document.title, document.id);
        self.documents.push(document.clone());
        Ok(document)
    }

    /// Applies an edit on behalf of `user_id`. Every call counts: the
    /// version bumps by exactly one even when `updates` carries no fields,
    /// so a document at version N has seen N-1 edits.
    pub fn update_document(
        &mut self,
        id: Uuid,
        updates: UpdateDocumentRequest,
        user_id: Uuid,
    ) -> StoreResult<Document> {
        let document = self
            .documents
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(StoreError::DocumentNotFound(id))?;

        if let Some(title) = updates.title {
            if title.trim().is_empty() {
                return Err(StoreError::InvalidArgument("document title is empty".into()));
            }
            document.title = title;
        }
        if let Some(content) = updates.content {
            document.content = content;
        }
        if let Some(doc_type) = updates.doc_type {
            document.doc_type = doc_type;
        }
        if let Some(tags) = updates.tags {
            document.tags = tags;
        }
        if let Some(mut collaborators) = updates.collaborators {
            dedupe_ids(&mut collaborators);
            document.collaborators = collaborators;
        }
        document.last_edited_by = user_id;
        document.updated_at = Utc::now();
        document.version += 1;
        debug!("Document {} now at version {}", id, document.version);
        Ok(document.clone())
    }

    /// Removes the document and its presence list and lease. Embedded
    /// comments go with it; nothing else references a document.
    pub fn delete_document(&mut self, id: Uuid) -> StoreResult<()> {
        let before = self.documents.len();
        self.documents.retain(|d| d.id != id);
        if self.documents.len() == before {
            return Err(StoreError::DocumentNotFound(id));
        }
        self.presence.remove(&id);
        self.locks.remove(&id);
        info!("Document deleted: {}", id);
        Ok(())
    }

    pub fn get_document(&self, id: Uuid) -> StoreResult<&Document> {
        self.documents
            .iter()
            .find(|d| d.id == id)
            .ok_or(StoreError::DocumentNotFound(id))
    }

    /// Documents of a project in creation order.
    pub fn get_project_documents(&self, project_id: Uuid) -> Vec<&Document> {
        self.documents
            .iter()
            .filter(|d| d.project_id == project_id)
            .collect()
    }

    /// Appends a comment to the document. Comments cannot be edited or
    /// removed afterwards.
    pub fn add_document_comment(
        &mut self,
        doc_id: Uuid,
        user_id: Uuid,
        text: String,
    ) -> StoreResult<Comment> {
        let document = self
            .documents
            .iter_mut()
            .find(|d| d.id == doc_id)
            .ok_or(StoreError::DocumentNotFound(doc_id))?;
        let comment = Comment {
            id: Uuid::new_v4(),
            user_id,
            text,
            created_at: Utc::now(),
        };
        document.comments.push(comment.clone());
        Ok(comment)
    }
}

// src/user_management.rs

use log::info;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::models::{User, UserRole};
use crate::store::WorkspaceStore;

/// Payload for adding a user to the directory.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar_color: Option<String>,
}

impl WorkspaceStore {
    /// Adds a user to the directory. Emails are unique, compared
    /// case-insensitively.
    pub fn register_user(&mut self, payload: CreateUserRequest) -> StoreResult<User> {
        if payload.name.trim().is_empty() {
            return Err(StoreError::InvalidArgument("user name is empty".into()));
        }
        if self.find_user_by_email(&payload.email).is_some() {
            return Err(StoreError::InvalidArgument(format!(
                "email already registered: {}",
                payload.email
            )));
        }
        let user = User {
            id: Uuid::new_v4(),
            name: payload.name,
            email: payload.email,
            role: payload.role,
            avatar_color: payload
                .avatar_color
                .unwrap_or_else(|| "#6366f1".to_string()),
        };
        info!("User registered: {} ({})", user.email, user.id);
        self.users.push(user.clone());
        Ok(user)
    }

    pub fn get_user(&self, id: Uuid) -> StoreResult<&User> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or(StoreError::UserNotFound(id))
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email.eq_ignore_ascii_case(email))
    }

    pub fn list_users(&self) -> &[User] {
        &self.users
    }
}

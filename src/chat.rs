// src/chat.rs

use chrono::Utc;
use log::{debug, info};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::models::message::{Message, Reaction};
use crate::store::WorkspaceStore;

/// Payload for posting a message into a project channel.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub project_id: Uuid,
    pub channel_id: String,
    pub user_id: Uuid,
    pub content: String,
}

impl WorkspaceStore {
    /// Appends a message to the channel. Fails if the referenced project
    /// does not exist or the content is blank.
    pub fn send_message(&mut self, payload: SendMessageRequest) -> StoreResult<Message> {
        if payload.content.trim().is_empty() {
            return Err(StoreError::InvalidArgument("message content is empty".into()));
        }
        self.get_project(payload.project_id)?;

        let message = Message {
            id: Uuid::new_v4(),
            project_id: payload.project_id,
            channel_id: payload.channel_id,
            user_id: payload.user_id,
            content: payload.content,
            created_at: Utc::now(),
            reactions: Vec::new(),
        };
        info!(
            "Message {} posted to {}/{}",
            message.id, message.project_id, message.channel_id
        );
        self.messages.push(message.clone());
        Ok(message)
    }

    /// Messages of one channel within a project, in arrival order.
    pub fn get_channel_messages(&self, project_id: Uuid, channel_id: &str) -> Vec<&Message> {
        self.messages
            .iter()
            .filter(|m| m.project_id == project_id && m.channel_id == channel_id)
            .collect()
    }

    pub fn get_message(&self, id: Uuid) -> StoreResult<&Message> {
        self.messages
            .iter()
            .find(|m| m.id == id)
            .ok_or(StoreError::MessageNotFound(id))
    }

    /// Records a reaction. Each message keeps at most one entry per
    /// distinct emoji; the user joins that entry's list in arrival order,
    /// and reacting twice with the same emoji is a no-op.
    pub fn add_reaction(
        &mut self,
        message_id: Uuid,
        emoji: &str,
        user_id: Uuid,
    ) -> StoreResult<Message> {
        let message = self
            .messages
            .iter_mut()
            .find(|m| m.id == message_id)
            .ok_or(StoreError::MessageNotFound(message_id))?;

        match message.reactions.iter_mut().find(|r| r.emoji == emoji) {
            Some(reaction) => {
                if !reaction.user_ids.contains(&user_id) {
                    reaction.user_ids.push(user_id);
                }
            }
            None => message.reactions.push(Reaction {
                emoji: emoji.to_string(),
                user_ids: vec![user_id],
            }),
        }
        debug!("Reaction {} on message {} by {}", emoji, message_id, user_id);
        Ok(message.clone())
    }
}

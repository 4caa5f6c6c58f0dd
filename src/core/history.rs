use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One entry of the conversation log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

impl ConversationMessage {
    pub fn new(sender: Sender, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            content: content.into(),
            timestamp: Local::now(),
        }
    }

    /// Local time shown next to the sender, `HH:MM`
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Bounded conversation log: once full, the oldest message is dropped
#[derive(Debug, Clone)]
pub struct ConversationHistory {
    capacity: usize,
    messages: VecDeque<ConversationMessage>,
}

impl ConversationHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            messages: VecDeque::with_capacity(capacity),
        }
    }

    pub fn append(&mut self, sender: Sender, content: impl Into<String>) -> &ConversationMessage {
        self.messages.push_back(ConversationMessage::new(sender, content));

        while self.messages.len() > self.capacity {
            self.messages.pop_front();
        }

        &self.messages[self.messages.len() - 1]
    }

    /// Replaces the text of the message with `id`, keeping its place and time.
    /// `None` once the message has been evicted.
    pub fn update(&mut self, id: Uuid, content: impl Into<String>) -> Option<&ConversationMessage> {
        let message = self.messages.iter_mut().find(|m| m.id == id)?;
        message.content = content.into();
        Some(message)
    }

    /// Copy of the log, oldest first
    pub fn snapshot(&self) -> Vec<ConversationMessage> {
        self.messages.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

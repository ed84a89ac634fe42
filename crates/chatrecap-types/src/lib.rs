//! # chatrecap-types
//!
//! **Tier 0 (Archive Model)**
//!
//! The in-memory shape of an exported chat archive once it has been loaded.
//! Source exports store each conversation as a tree of nodes; every analysis
//! pass only ever looks at the multiset of messages, so a conversation is
//! modelled here as a flat list of messages in source order.
//!
//! ## What belongs here
//! * `Archive`, `Conversation`, `Message`, `Role`
//! * Cheap per-conversation helpers (turn counting, user message iteration)
//!
//! ## What does NOT belong here
//! * JSON decoding of the export format (use `chatrecap-archive`)
//! * Time bucketing or any pass logic

use serde::{Deserialize, Serialize};

/// Node id of the synthetic root that some exports insert into every tree.
pub const SYNTHETIC_ROOT_NODE_ID: &str = "client-created-root";

/// Author role of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
    /// `system`, `tool`, a missing author, or anything else.
    Other,
}

impl Role {
    /// Map an `author.role` string onto a [`Role`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "user" => Role::User,
            "assistant" => Role::Assistant,
            _ => Role::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    /// Text already extracted from the message content; may be empty.
    pub text: String,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }

    /// Length in Unicode scalar values, so one CJK ideograph counts as 1.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Option<String>,
    pub title: Option<String>,
    /// Unix seconds. `None` excludes the conversation from time-based passes.
    pub created_at: Option<f64>,
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Messages authored by the user, in source order.
    pub fn user_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.is_user())
    }

    /// Number of user-authored messages ("turns").
    pub fn user_turns(&self) -> usize {
        self.user_messages().count()
    }

    pub fn id_or_empty(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }
}

/// A fully materialized archive snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Archive {
    pub conversations: Vec<Conversation>,
}

impl Archive {
    pub fn new(conversations: Vec<Conversation>) -> Self {
        Self { conversations }
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    /// Every message across the archive, conversations in order.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.conversations.iter().flat_map(|c| c.messages.iter())
    }

    /// Every user-authored message across the archive, conversations in order.
    pub fn user_messages(&self) -> impl Iterator<Item = &Message> {
        self.conversations.iter().flat_map(|c| c.user_messages())
    }
}

use serde::{Deserialize, Serialize};

use super::RawToolCall;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// A visible chat bubble: who said it and what was said.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// One entry of the model-facing conversation.
///
/// A `ToolCall` entry is always followed directly by the matching
/// `ToolResult` entry; `ChatSession::commit_turn` only ever receives whole
/// turns so this holds for every stored session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    User {
        text: String,
    },
    Model {
        text: String,
    },
    ToolCall {
        call: RawToolCall,
    },
    ToolResult {
        call_id: String,
        name: String,
        result: serde_json::Value,
    },
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Turn::User { text: text.into() }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Turn::Model { text: text.into() }
    }

    pub fn role(&self) -> Role {
        match self {
            Turn::User { .. } | Turn::ToolResult { .. } => Role::User,
            Turn::Model { .. } | Turn::ToolCall { .. } => Role::Model,
        }
    }
}

impl From<&Message> for Turn {
    fn from(message: &Message) -> Self {
        match message.role {
            Role::User => Turn::user(message.text.clone()),
            Role::Model => Turn::model(message.text.clone()),
        }
    }
}

/// Model-facing conversation owned by a single screen and handed to the
/// gateway on every exchange. Append-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatSession {
    turns: Vec<Turn>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Appends every entry of a completed turn at once.
    pub fn commit_turn(&mut self, turn: Vec<Turn>) {
        self.turns.extend(turn);
    }
}

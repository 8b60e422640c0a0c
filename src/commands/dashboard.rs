use std::sync::Arc;

use chrono::Utc;

use crate::models::{HistoryItem, HistoryKind};
use crate::services::history_service::HistoryStore;

/// Where opening a history entry leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Chat,
    Editor { initial_content: String },
}

pub struct Dashboard {
    history: Arc<dyn HistoryStore>,
}

impl Dashboard {
    pub fn new(history: Arc<dyn HistoryStore>) -> Self {
        Self { history }
    }

    pub fn recent(&self) -> Vec<HistoryItem> {
        self.history.list()
    }

    /// Chats reopen the chat screen; everything else resumes in the editor
    /// with the saved result, or the preview when no full result was kept.
    pub fn open(&self, item: &HistoryItem) -> Navigation {
        match item.kind {
            HistoryKind::Chat => Navigation::Chat,
            _ => Navigation::Editor {
                initial_content: item
                    .full_content
                    .clone()
                    .filter(|content| !content.is_empty())
                    .unwrap_or_else(|| item.preview.clone()),
            },
        }
    }

    pub fn open_by_id(&self, id: &str) -> Option<Navigation> {
        self.history.get(id).map(|item| self.open(&item))
    }

    pub fn clear(&self) {
        self.history.clear();
    }
}

/// "Şimdi", "N dk önce", "N sa önce" or "Dün" for an epoch-millis timestamp.
pub fn format_relative_time(timestamp: i64, now: i64) -> String {
    let minutes = (now - timestamp).max(0) / 60_000;
    let hours = minutes / 60;

    if minutes < 1 {
        "Şimdi".to_string()
    } else if minutes < 60 {
        format!("{} dk önce", minutes)
    } else if hours < 24 {
        format!("{} sa önce", hours)
    } else {
        "Dün".to_string()
    }
}

pub fn format_since_now(timestamp: i64) -> String {
    format_relative_time(timestamp, Utc::now().timestamp_millis())
}

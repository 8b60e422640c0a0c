use serde::{Deserialize, Serialize};

/// Kind of user action a history record summarizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HistoryKind {
    Translate,
    Summarize,
    Edit,
    Chat,
}

impl HistoryKind {
    /// Dashboard label for the kind.
    pub fn label(self) -> &'static str {
        match self {
            HistoryKind::Translate => "Çeviri",
            HistoryKind::Summarize => "Özet",
            HistoryKind::Edit => "Düzenleme",
            HistoryKind::Chat => "Sohbet",
        }
    }
}

/// A completed user action as shown on the dashboard. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: HistoryKind,
    pub title: String,
    pub preview: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_content: Option<String>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// A history record before the store assigns `id` and `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHistoryItem {
    pub kind: HistoryKind,
    pub title: String,
    pub preview: String,
    pub full_content: Option<String>,
}

impl NewHistoryItem {
    pub fn new(kind: HistoryKind, title: impl Into<String>, preview: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            preview: preview.into(),
            full_content: None,
        }
    }

    pub fn with_full_content(mut self, content: impl Into<String>) -> Self {
        self.full_content = Some(content.into());
        self
    }

    pub(crate) fn into_item(self, id: String, timestamp: i64) -> HistoryItem {
        HistoryItem {
            id,
            kind: self.kind,
            title: self.title,
            preview: self.preview,
            full_content: self.full_content,
            timestamp,
        }
    }
}

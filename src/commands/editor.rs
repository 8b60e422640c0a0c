use super::AppServices;
use crate::models::{
    ChatSession, DocumentState, HistoryItem, HistoryKind, LoadingState, Message, NewHistoryItem,
};
use crate::services::document_service::run_update_turn;
use crate::services::markup::{html_to_text, truncate_chars};

pub const PLACEHOLDER_DOCUMENT: &str = "<p>Akademik çalışmanızı buraya yazmaya başlayın...</p>";
pub const EDITOR_GREETING: &str = "Merhaba! Ben editör asistanınızım. Yandaki metin üzerinde ne gibi değişiklikler yapmamı istersiniz?";
pub const EDITOR_ERROR_MESSAGE: &str = "Bir hata oluştu.";

/// Rich-text document with an assistant that can rewrite it.
pub struct DocumentEditor {
    services: AppServices,
    document: DocumentState,
    session: ChatSession,
    messages: Vec<Message>,
    state: LoadingState,
}

impl DocumentEditor {
    /// Opens the editor on resumed content, or on the placeholder document.
    pub fn new(services: AppServices, initial_content: Option<String>) -> Self {
        let initial = initial_content
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_DOCUMENT.to_string());
        Self {
            services,
            document: DocumentState::new(initial),
            session: ChatSession::new(),
            messages: vec![Message::model(EDITOR_GREETING)],
            state: LoadingState::Idle,
        }
    }

    pub fn content(&self) -> &str {
        self.document.content()
    }

    pub fn document(&self) -> &DocumentState {
        &self.document
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn state(&self) -> LoadingState {
        self.state
    }

    /// A direct edit by the user.
    pub fn edit(&mut self, content: impl Into<String>) -> bool {
        self.document.commit(content)
    }

    pub fn undo(&mut self) -> bool {
        self.document.undo().is_some()
    }

    pub fn redo(&mut self) -> bool {
        self.document.redo().is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.document.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.document.can_redo()
    }

    /// Saves a draft of the current document to history.
    pub fn save(&self) -> Option<HistoryItem> {
        let content = self.document.content();
        let text = html_to_text(content);
        self.services.history.append(
            NewHistoryItem::new(
                HistoryKind::Edit,
                format!("Taslak: {}...", truncate_chars(&text, 20)),
                truncate_chars(&text, 50),
            )
            .with_full_content(content),
        )
    }

    /// Asks the assistant to act on the document. The document changes only
    /// when the whole exchange succeeds. Returns the appended assistant
    /// message, or `None` if nothing was sent.
    pub async fn send(&mut self, request: &str) -> Option<&Message> {
        if request.trim().is_empty() || self.state == LoadingState::Loading {
            return None;
        }

        self.messages.push(Message::user(request));
        self.state = LoadingState::Loading;

        let current = self.document.content().to_string();
        match run_update_turn(&self.services.gateway, &mut self.session, &current, request).await {
            Ok(turn) => {
                if let Some(new_content) = turn.new_content {
                    self.document.commit(new_content);
                }
                self.messages.push(Message::model(turn.reply));
                self.state = LoadingState::Idle;
            }
            Err(e) => {
                tracing::error!("Document chat failed: {}", e);
                self.messages.push(Message::model(EDITOR_ERROR_MESSAGE));
                self.state = LoadingState::Error;
            }
        }
        self.messages.last()
    }
}

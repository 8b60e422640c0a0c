use super::AppServices;
use crate::models::{HistoryKind, LoadingState, Message, NewHistoryItem, Turn};
use crate::services::markup::truncate_chars;

pub const CHAT_GREETING: &str = "Merhaba! Akademik araştırmalarınızda, metodoloji sorularınızda veya literatür taramanızda size nasıl yardımcı olabilirim?";
pub const CHAT_ERROR_MESSAGE: &str = "Üzgünüm, şu anda yanıt veremiyorum. Lütfen tekrar deneyin.";

/// Free-form academic assistant conversation.
pub struct ChatScreen {
    services: AppServices,
    messages: Vec<Message>,
    state: LoadingState,
}

impl ChatScreen {
    pub fn new(services: AppServices) -> Self {
        Self {
            services,
            messages: vec![Message::model(CHAT_GREETING)],
            state: LoadingState::Idle,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn state(&self) -> LoadingState {
        self.state
    }

    /// Sends `input` with the whole visible conversation as context and
    /// appends the reply (or an apology) to the transcript. Returns the
    /// appended model message, or `None` if nothing was sent.
    pub async fn send(&mut self, input: &str) -> Option<&Message> {
        if input.trim().is_empty() || self.state == LoadingState::Loading {
            return None;
        }

        let prior: Vec<Turn> = self.messages.iter().map(Turn::from).collect();
        let first_exchange = self.messages.len() == 1;
        self.messages.push(Message::user(input));
        self.state = LoadingState::Loading;

        match self.services.gateway.chat(input, &prior).await {
            Ok(reply) => {
                if first_exchange {
                    self.services.history.append(NewHistoryItem::new(
                        HistoryKind::Chat,
                        format!("Sohbet: {}...", truncate_chars(input, 20)),
                        truncate_chars(&reply, 50),
                    ));
                }
                self.messages.push(Message::model(reply));
                self.state = LoadingState::Idle;
            }
            Err(e) => {
                tracing::error!("Chat failed: {}", e);
                self.messages.push(Message::model(CHAT_ERROR_MESSAGE));
                self.state = LoadingState::Error;
            }
        }
        self.messages.last()
    }
}

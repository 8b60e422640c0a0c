//! Screen controllers. Each screen owns its input/output state, talks to the
//! model only through [`AiGateway`] and records finished work in the
//! [`HistoryStore`]. Request methods take `&mut self`, so a screen can have
//! at most one request in flight.

mod chat;
mod dashboard;
mod edit;
mod editor;
mod summarize;
mod translate;

use std::sync::Arc;

pub use chat::*;
pub use dashboard::*;
pub use edit::*;
pub use editor::*;
pub use summarize::*;
pub use translate::*;

use crate::error::GatewayError;
use crate::models::LoadingState;
use crate::services::ai_service::AiGateway;
use crate::services::config_service::EffectiveConfig;
use crate::services::file_service::KeyValueStore;
use crate::services::history_service::{HistoryStore, KvHistoryStore};
use crate::services::llm_client::LlmClient;

/// Shown when a one-shot task fails.
pub const TASK_ERROR_MESSAGE: &str = "Bir hata oluştu. Lütfen tekrar deneyin.";

/// Services shared by every screen.
#[derive(Clone)]
pub struct AppServices {
    pub gateway: AiGateway,
    pub history: Arc<dyn HistoryStore>,
}

impl AppServices {
    pub fn new(gateway: AiGateway, history: Arc<dyn HistoryStore>) -> Self {
        Self { gateway, history }
    }

    pub fn from_config(
        config: &EffectiveConfig,
        store: Arc<dyn KeyValueStore>,
    ) -> Result<Self, GatewayError> {
        let client = LlmClient::from_config(config)?;
        Ok(Self::new(
            AiGateway::new(Arc::new(client), config.model.clone()),
            Arc::new(KvHistoryStore::new(store)),
        ))
    }
}

/// Output pane of a one-shot task screen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskOutput {
    state: LoadingState,
    text: String,
}

impl TaskOutput {
    pub fn state(&self) -> LoadingState {
        self.state
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_busy(&self) -> bool {
        self.state == LoadingState::Loading
    }

    pub fn error_message(&self) -> Option<&'static str> {
        (self.state == LoadingState::Error).then_some(TASK_ERROR_MESSAGE)
    }

    /// Whether a request for `input` should start.
    fn begin(&mut self, input: &str) -> bool {
        if input.trim().is_empty() || self.is_busy() {
            return false;
        }
        self.state = LoadingState::Loading;
        true
    }

    fn finish(&mut self, result: Result<String, GatewayError>) -> Option<&str> {
        match result {
            Ok(text) => {
                self.text = text;
                self.state = LoadingState::Success;
                Some(&self.text)
            }
            Err(e) => {
                tracing::error!("Task failed: {}", e);
                self.state = LoadingState::Error;
                None
            }
        }
    }
}

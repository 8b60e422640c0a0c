use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use akademik_lib::commands::AppServices;
use akademik_lib::error::GatewayError;
use akademik_lib::models::RawToolCall;
use akademik_lib::services::ai_service::AiGateway;
use akademik_lib::services::file_service::MemoryStore;
use akademik_lib::services::history_service::{HistoryStore, KvHistoryStore};
use akademik_lib::services::llm_client::{ModelBackend, ModelReply, ModelRequest};
use async_trait::async_trait;

/// Answers from a fixed script and records every request it receives.
#[derive(Default)]
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<Result<ModelReply, GatewayError>>>,
    requests: Mutex<Vec<ModelRequest>>,
}

impl ScriptedBackend {
    pub fn new(replies: Vec<Result<ModelReply, GatewayError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ModelRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelBackend for ScriptedBackend {
    async fn generate(&self, request: ModelRequest) -> Result<ModelReply, GatewayError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(GatewayError::EmptyResponse))
    }
}

pub struct Harness {
    pub backend: Arc<ScriptedBackend>,
    pub history: Arc<dyn HistoryStore>,
    pub services: AppServices,
}

/// Screens wired to a scripted model and an in-memory history slot.
pub fn harness(replies: Vec<Result<ModelReply, GatewayError>>) -> Harness {
    let backend = Arc::new(ScriptedBackend::new(replies));
    let history: Arc<dyn HistoryStore> = Arc::new(KvHistoryStore::new(Arc::new(MemoryStore::new())));
    let services = AppServices::new(
        AiGateway::new(backend.clone(), "gemini-2.5-flash"),
        history.clone(),
    );
    Harness {
        backend,
        history,
        services,
    }
}

pub fn update_document(id: &str, new_content: &str) -> ModelReply {
    ModelReply {
        text: None,
        tool_calls: vec![RawToolCall {
            id: id.to_string(),
            name: "updateDocument".to_string(),
            arguments: serde_json::json!({ "newContent": new_content }).to_string(),
        }],
    }
}

pub fn transport_failure() -> GatewayError {
    GatewayError::Status {
        status: 503,
        body: "unavailable".to_string(),
    }
}

pub mod ai_service;
pub mod config_service;
pub mod document_service;
pub mod file_service;
pub mod history_service;
pub mod llm_client;
pub mod markup;

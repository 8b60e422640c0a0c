use std::fs;
use std::path::Path;

use super::{AppServices, TaskOutput};
use crate::error::StorageError;
use crate::models::{HistoryKind, NewHistoryItem, SummaryTone};
use crate::services::markup::truncate_chars;

pub const DEFAULT_TARGET_WORDS: u32 = 350;

pub struct SummarizeScreen {
    services: AppServices,
    tone: SummaryTone,
    target_words: u32,
    output: TaskOutput,
}

impl SummarizeScreen {
    pub fn new(services: AppServices) -> Self {
        Self {
            services,
            tone: SummaryTone::default(),
            target_words: DEFAULT_TARGET_WORDS,
            output: TaskOutput::default(),
        }
    }

    pub fn tone(&self) -> SummaryTone {
        self.tone
    }

    pub fn set_tone(&mut self, tone: SummaryTone) {
        self.tone = tone;
    }

    pub fn target_words(&self) -> u32 {
        self.target_words
    }

    pub fn set_target_words(&mut self, words: u32) {
        self.target_words = words;
    }

    pub fn output(&self) -> &TaskOutput {
        &self.output
    }

    /// Reads a text file to use as summarization input.
    pub fn load_file(path: &Path) -> Result<String, StorageError> {
        fs::read_to_string(path).map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub async fn summarize(&mut self, input: &str) -> Option<&str> {
        if !self.output.begin(input) {
            return None;
        }

        let result = self
            .services
            .gateway
            .summarize(input, self.tone, self.target_words)
            .await;
        if let Ok(summary) = &result {
            self.services.history.append(NewHistoryItem::new(
                HistoryKind::Summarize,
                format!("Özet: {}...", truncate_chars(input, 20)),
                truncate_chars(summary, 50),
            ));
        }
        self.output.finish(result)
    }
}

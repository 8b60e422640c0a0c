use super::{AppServices, TaskOutput};
use crate::models::{HistoryKind, NewHistoryItem, TargetLanguage};
use crate::services::markup::{ellipsize, truncate_chars};

pub struct TranslateScreen {
    services: AppServices,
    target: TargetLanguage,
    output: TaskOutput,
}

impl TranslateScreen {
    pub fn new(services: AppServices) -> Self {
        Self {
            services,
            target: TargetLanguage::default(),
            output: TaskOutput::default(),
        }
    }

    pub fn target(&self) -> TargetLanguage {
        self.target
    }

    pub fn set_target(&mut self, target: TargetLanguage) {
        self.target = target;
    }

    pub fn toggle_language(&mut self) {
        self.target = self.target.toggled();
    }

    pub fn output(&self) -> &TaskOutput {
        &self.output
    }

    /// Translates `input` into the current target language. Returns the
    /// translation, or `None` if nothing ran or the request failed.
    pub async fn translate(&mut self, input: &str) -> Option<&str> {
        if !self.output.begin(input) {
            return None;
        }

        let result = self.services.gateway.translate(input, self.target).await;
        if let Ok(translated) = &result {
            self.services.history.append(
                NewHistoryItem::new(
                    HistoryKind::Translate,
                    ellipsize(input, 30),
                    truncate_chars(translated, 50),
                )
                .with_full_content(translated.clone()),
            );
        }
        self.output.finish(result)
    }
}

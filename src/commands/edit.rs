use super::{AppServices, TaskOutput};
use crate::models::{HistoryKind, NewHistoryItem};
use crate::services::markup::truncate_chars;

/// Prose improvement screen.
pub struct EditScreen {
    services: AppServices,
    output: TaskOutput,
}

impl EditScreen {
    pub fn new(services: AppServices) -> Self {
        Self {
            services,
            output: TaskOutput::default(),
        }
    }

    pub fn output(&self) -> &TaskOutput {
        &self.output
    }

    pub async fn improve(&mut self, input: &str) -> Option<&str> {
        if !self.output.begin(input) {
            return None;
        }

        let result = self.services.gateway.improve(input).await;
        if let Ok(improved) = &result {
            self.services.history.append(
                NewHistoryItem::new(
                    HistoryKind::Edit,
                    format!("Düzenleme: {}...", truncate_chars(input, 20)),
                    truncate_chars(improved, 50),
                )
                .with_full_content(improved.clone()),
            );
        }
        self.output.finish(result)
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum TargetLanguage {
    #[default]
    Tr,
    En,
}

impl TargetLanguage {
    pub fn toggled(self) -> Self {
        match self {
            TargetLanguage::Tr => TargetLanguage::En,
            TargetLanguage::En => TargetLanguage::Tr,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SummaryTone {
    #[default]
    Descriptive,
    Critical,
}

impl SummaryTone {
    /// The tone word embedded in the summarization prompt.
    pub fn prompt_label(self) -> &'static str {
        match self {
            SummaryTone::Descriptive => "Betimleyici",
            SummaryTone::Critical => "Eleştirel",
        }
    }
}

/// Request status of a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

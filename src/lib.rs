pub mod commands;
pub mod error;
pub mod models;
pub mod services;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use models::{SummaryTone, TargetLanguage};

#[derive(Debug, Parser)]
#[command(name = "akademik", version, about = "Academic writing assistant")]
pub struct Cli {
    /// Directory holding config.json and the history slot.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Tracing filter, e.g. `akademik_lib=debug`. Falls back to RUST_LOG.
    #[arg(long, global = true)]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Translate text into academic Turkish or English.
    Translate {
        #[arg(long, value_enum, default_value_t = TargetLanguage::Tr)]
        to: TargetLanguage,
        /// Text to translate; read from stdin when omitted.
        text: Option<String>,
    },
    /// Improve grammar, fluency and register.
    Improve { text: Option<String> },
    /// Summarize text with a tone and approximate length.
    Summarize {
        #[arg(long, value_enum, default_value_t = SummaryTone::Descriptive)]
        tone: SummaryTone,
        #[arg(long, default_value_t = commands::DEFAULT_TARGET_WORDS)]
        words: u32,
        /// Read the input from a text file.
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        text: Option<String>,
    },
    /// Talk to the academic assistant.
    Chat,
    /// Edit a document together with the assistant.
    Editor {
        /// Resume a history entry by id.
        #[arg(long)]
        resume: Option<String>,
    },
    /// Inspect or clear the recent-activity history.
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Read or change stored settings.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum HistoryAction {
    List,
    Show { id: String },
    Clear,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    Show,
    SetKey { key: String },
    SetBaseUrl { url: String },
    SetModel { model: String },
}

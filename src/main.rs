use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use akademik_lib::commands::{
    AppServices, ChatScreen, Dashboard, DocumentEditor, EditScreen, Navigation, SummarizeScreen,
    TaskOutput, TranslateScreen, format_since_now,
};
use akademik_lib::services::config_service::ConfigStore;
use akademik_lib::services::file_service::{FileStore, KeyValueStore, get_app_data_dir};
use akademik_lib::services::history_service::{HistoryStore, KvHistoryStore};
use akademik_lib::{Cli, Command, ConfigAction, HistoryAction};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let data_dir = match cli.data_dir.clone() {
        Some(dir) => dir,
        None => get_app_data_dir()?,
    };
    tracing::debug!("Using data directory {}", data_dir.display());

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(dispatch(cli.command, data_dir))
}

fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    let directives = cli
        .log_filter
        .clone()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "warn".to_owned());
    let filter = tracing_subscriber::EnvFilter::try_new(directives.as_str())
        .map_err(|e| anyhow::anyhow!("invalid tracing filter `{directives}`: {e}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))
}

async fn dispatch(command: Command, data_dir: PathBuf) -> anyhow::Result<()> {
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&data_dir));
    let config_store = ConfigStore::new(&data_dir);

    match command {
        Command::Config { action } => config_command(&config_store, action),
        Command::History { action } => {
            history_command(Arc::new(KvHistoryStore::new(store)), action);
            Ok(())
        }
        command => {
            let config = config_store.load()?.effective()?;
            let services = AppServices::from_config(&config, store)?;
            model_command(services, command).await
        }
    }
}

async fn model_command(services: AppServices, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Translate { to, text } => {
            let input = input_text(text)?;
            let mut screen = TranslateScreen::new(services);
            screen.set_target(to);
            screen.translate(&input).await;
            print_output(screen.output())
        }
        Command::Improve { text } => {
            let input = input_text(text)?;
            let mut screen = EditScreen::new(services);
            screen.improve(&input).await;
            print_output(screen.output())
        }
        Command::Summarize {
            tone,
            words,
            file,
            text,
        } => {
            let input = match file {
                Some(path) => SummarizeScreen::load_file(&path)?,
                None => input_text(text)?,
            };
            let mut screen = SummarizeScreen::new(services);
            screen.set_tone(tone);
            screen.set_target_words(words);
            screen.summarize(&input).await;
            print_output(screen.output())
        }
        Command::Chat => chat_repl(ChatScreen::new(services)).await,
        Command::Editor { resume } => {
            let initial = match resume {
                Some(id) => match Dashboard::new(services.history.clone()).open_by_id(&id) {
                    Some(Navigation::Editor { initial_content }) => Some(initial_content),
                    Some(Navigation::Chat) => anyhow::bail!("history entry {id} is a chat"),
                    None => anyhow::bail!("no history entry with id {id}"),
                },
                None => None,
            };
            editor_repl(DocumentEditor::new(services, initial)).await
        }
        Command::Config { .. } | Command::History { .. } => Ok(()),
    }
}

fn input_text(text: Option<String>) -> anyhow::Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read input from stdin")?;
            Ok(buf)
        }
    }
}

fn print_output(output: &TaskOutput) -> anyhow::Result<()> {
    if let Some(message) = output.error_message() {
        anyhow::bail!("{message}");
    }
    println!("{}", output.text());
    Ok(())
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

async fn chat_repl(mut screen: ChatScreen) -> anyhow::Result<()> {
    for message in screen.messages() {
        println!("{}", message.text);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;
    while let Some(line) = lines.next_line().await? {
        if matches!(line.trim(), ":quit" | ":q") {
            break;
        }
        if let Some(reply) = screen.send(&line).await {
            println!("{}", reply.text);
        }
        prompt()?;
    }
    Ok(())
}

async fn editor_repl(mut editor: DocumentEditor) -> anyhow::Result<()> {
    println!("{}", editor.content());
    for message in editor.messages() {
        println!("{}", message.text);
    }
    println!("(:show, :edit <html>, :undo, :redo, :save, :quit)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;
    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        match trimmed {
            ":quit" | ":q" => break,
            ":show" => println!("{}", editor.content()),
            ":undo" => {
                if editor.undo() {
                    println!("{}", editor.content());
                }
            }
            ":redo" => {
                if editor.redo() {
                    println!("{}", editor.content());
                }
            }
            ":save" => match editor.save() {
                Some(item) => println!("Başarıyla kaydedildi ({})", item.id),
                None => eprintln!("Kaydedilemedi."),
            },
            _ => {
                if let Some(content) = trimmed.strip_prefix(":edit ") {
                    editor.edit(content);
                } else if let Some(reply) = editor.send(&line).await {
                    println!("{}", reply.text);
                    println!("{}", editor.content());
                }
            }
        }
        prompt()?;
    }
    Ok(())
}

fn history_command(history: Arc<dyn HistoryStore>, action: HistoryAction) {
    let dashboard = Dashboard::new(history.clone());
    match action {
        HistoryAction::List => {
            for item in dashboard.recent() {
                println!(
                    "{}  [{}] {} | {} ({})",
                    item.id,
                    item.kind.label(),
                    item.title,
                    item.preview,
                    format_since_now(item.timestamp)
                );
            }
        }
        HistoryAction::Show { id } => match history.get(&id) {
            Some(item) => println!("{}", item.full_content.unwrap_or(item.preview)),
            None => eprintln!("no history entry with id {id}"),
        },
        HistoryAction::Clear => dashboard.clear(),
    }
}

fn config_command(store: &ConfigStore, action: ConfigAction) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            let config = store.load()?;
            let masked = config
                .api_key
                .as_deref()
                .map(|k| format!("{}…", k.chars().take(4).collect::<String>()));
            println!("config file: {}", store.path().display());
            println!("api_key:  {}", masked.as_deref().unwrap_or("(not set)"));
            println!("base_url: {}", config.base_url.as_deref().unwrap_or("(default)"));
            println!("model:    {}", config.model.as_deref().unwrap_or("(default)"));
        }
        ConfigAction::SetKey { key } => store.set_api_key(&key)?,
        ConfigAction::SetBaseUrl { url } => store.set_base_url(&url)?,
        ConfigAction::SetModel { model } => store.set_model(&model)?,
    }
    Ok(())
}

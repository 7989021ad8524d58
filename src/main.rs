use affect_chat::modules::session::SessionError;
use affect_chat::utils::{init_tracing, DEFAULT_LOG_FILTER};
use affect_chat::{
    ChatConfig, ChatMessage, ChatSession, DocumentIndex, EmotionLabel, LocalDocumentIndex,
    OpenAiCompatibleGenerator, ResponseGenerator, TurnOutcome,
};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "affect-chat")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Document-grounded character chat with a keyword-driven emotion state")]
struct Args {
    /// TOML configuration file; defaults are used when it does not exist
    #[arg(long, default_value = "affect_chat.toml")]
    config: PathBuf,

    /// Override the conversation record path
    #[arg(long)]
    memory_file: Option<PathBuf>,

    /// Override the upload directory
    #[arg(long)]
    upload_dir: Option<PathBuf>,

    /// Override the generator model name
    #[arg(long)]
    model: Option<String>,

    /// Override the generator base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Starting emotion label
    #[arg(long)]
    emotion: Option<EmotionLabel>,

    /// Document to upload and index before the first turn (repeatable)
    #[arg(long = "document", value_name = "PATH")]
    documents: Vec<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Chat(String),
    Upload(PathBuf),
    Emotion(Option<String>),
    Emotions,
    History,
    Profile,
    Help,
    Quit,
    Empty,
}

fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }

    if !trimmed.starts_with('/') {
        return Command::Chat(line.trim_end_matches(['\r', '\n']).to_string());
    }

    let (name, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (trimmed, ""),
    };

    match name {
        "/upload" if !rest.is_empty() => Command::Upload(PathBuf::from(rest)),
        "/emotion" if rest.is_empty() => Command::Emotion(None),
        "/emotion" => Command::Emotion(Some(rest.to_string())),
        "/emotions" => Command::Emotions,
        "/history" => Command::History,
        "/profile" => Command::Profile,
        "/quit" | "/exit" => Command::Quit,
        _ => Command::Help,
    }
}

const HELP: &str = "\
Commands:
  /upload <path>     copy a document into the upload directory and re-index
  /emotion [label]   show or set the current emotion
  /emotions          list emotion labels
  /history           show the recent conversation
  /profile           show the character profile
  /quit              leave
Anything else is sent to the character.";

fn with_spinner<T>(message: &str, work: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = work();
    spinner.finish_and_clear();
    result
}

fn print_messages(messages: &[ChatMessage]) {
    for chat in messages {
        println!("{}: {}", chat.speaker, chat.message);
    }
}

fn print_outcome(name: &str, outcome: &TurnOutcome) {
    if outcome.emotion_changed() {
        println!("[{} → {}]", outcome.previous_emotion, outcome.emotion);
    }
    println!("{}: {}", name, outcome.reply);

    if let Some(warning) = &outcome.persist_warning {
        println!("warning: {}", warning);
    }
}

fn upload_file<I: DocumentIndex, G: ResponseGenerator>(
    session: &mut ChatSession<I, G>,
    path: &Path,
) -> Result<PathBuf, SessionError> {
    let bytes = std::fs::read(path).map_err(|e| {
        SessionError::Ingestion(affect_chat::IngestionError::Io(e))
    })?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    with_spinner("indexing documents...", || session.upload(&name, &bytes))
}

fn load_config(args: &Args) -> Result<ChatConfig, Box<dyn std::error::Error>> {
    let mut config = ChatConfig::load_or_default(&args.config)?;

    if let Some(memory_file) = &args.memory_file {
        config.storage.memory_file = memory_file.clone();
    }
    if let Some(upload_dir) = &args.upload_dir {
        config.storage.upload_dir = upload_dir.clone();
    }
    if let Some(model) = &args.model {
        config.generator.model = model.clone();
    }
    if let Some(base_url) = &args.base_url {
        config.generator.base_url = base_url.clone();
    }
    if let Some(emotion) = args.emotion {
        config.emotion.initial = emotion;
    }

    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = init_tracing(DEFAULT_LOG_FILTER) {
        eprintln!("Warning: failed to initialise logging: {}", e);
    }

    let args = Args::parse();
    let config = load_config(&args)?;
    info!(config = %args.config.display(), model = %config.generator.model, "starting");

    let generator = OpenAiCompatibleGenerator::new(&config.generator)?;
    let index = LocalDocumentIndex::from_config(&config.retrieval);
    let mut session = ChatSession::new(&config, index, generator)?;

    if args.documents.is_empty() {
        if !session.uploads().list()?.is_empty() {
            if let Err(e) = with_spinner("indexing documents...", || session.reindex_uploads()) {
                warn!(error = %e, "existing uploads could not be indexed");
            }
        }
    } else {
        for path in &args.documents {
            upload_file(&mut session, path)?;
        }
    }

    println!("{} ({}세) · 현재 감정: {}", session.profile().name, session.profile().age, session.current_emotion());
    if !session.is_ready() {
        println!("{}. Use /upload <path>.", affect_chat::modules::session::NOT_READY_MESSAGE);
    }
    print_messages(session.recent_messages());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match parse_command(&line) {
            Command::Empty => {}
            Command::Quit => break,
            Command::Help => println!("{}", HELP),
            Command::Emotions => {
                let names: Vec<&str> = EmotionLabel::ALL.iter().map(|label| label.as_str()).collect();
                println!("{}", names.join(", "));
            }
            Command::Emotion(None) => println!("현재 감정: {}", session.current_emotion()),
            Command::Emotion(Some(name)) => match name.parse::<EmotionLabel>() {
                Ok(label) => {
                    session.select_emotion(label);
                    println!("현재 감정: {}", label);
                }
                Err(e) => println!("error: {}", e),
            },
            Command::History => print_messages(session.recent_messages()),
            Command::Profile => {
                let profile = session.profile();
                println!("이름: {}", profile.name);
                println!("나이: {}", profile.age);
                println!("성격: {}", profile.persona);
                println!("배경 이야기: {}", profile.background);
                println!("말투: {}", profile.speaking_style);
            }
            Command::Upload(path) => match upload_file(&mut session, &path) {
                Ok(stored) => println!("indexed {}", stored.display()),
                Err(e) => println!("error: {}", e),
            },
            Command::Chat(input) => {
                let name = session.profile().name.clone();
                match with_spinner("thinking...", || session.submit(&input)) {
                    Ok(outcome) => print_outcome(&name, &outcome),
                    Err(e) => println!("error: {}", e),
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command};
    use std::path::PathBuf;

    #[test]
    fn test_parse_chat_line() {
        assert_eq!(parse_command("나는 설레\n"), Command::Chat("나는 설레".to_string()));
        assert_eq!(parse_command("   "), Command::Empty);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("/upload docs/a.txt"), Command::Upload(PathBuf::from("docs/a.txt")));
        assert_eq!(parse_command("/emotion"), Command::Emotion(None));
        assert_eq!(parse_command("/emotion 불타는 열정"), Command::Emotion(Some("불타는 열정".to_string())));
        assert_eq!(parse_command("/history"), Command::History);
        assert_eq!(parse_command("/exit"), Command::Quit);
    }

    #[test]
    fn test_unknown_command_shows_help() {
        assert_eq!(parse_command("/upload"), Command::Help);
        assert_eq!(parse_command("/dance"), Command::Help);
    }
}

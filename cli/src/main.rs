//! `chatroom`: terminal client for the polling chat endpoint.
//!
//! Drives the same `roomlog` engine as the browser client, so `watch`
//! reconciles the room log exactly as the web view does and prints only what
//! the engine appended or rebuilt.

mod http;


use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::rc::Rc;

use clap::{Parser, Subcommand};
use roomlog::state::EMPTY_ROOM_PLACEHOLDER;
use roomlog::{
    ChatClient, ChatError, ChatState, ClientConfig, RenameOutcome, RenderOutcome, RenderedMessage, SendOutcome,
};

use crate::http::{ReqwestChatApi, TokioClock};

const CONFIRM_CLEAR: &str = "Are you sure you want to clear all messages in this room?";
const OBSERVER: &str = "observer";

type CliClient = ChatClient<ReqwestChatApi, Rc<RefCell<ChatState>>, TokioClock>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Chat(#[from] ChatError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "chatroom", about = "Polling chat room client")]
struct Cli {
    #[arg(long, env = "CHATROOM_API_BASE", default_value = "http://127.0.0.1:5000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Follow a room and print messages as they arrive.
    Watch {
        room: String,
        #[arg(long = "as", default_value = OBSERVER)]
        username: String,
    },
    /// Print the current room log once.
    Show { room: String },
    /// Post a message.
    Send {
        room: String,
        #[arg(long = "as")]
        username: String,
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// Rename a user across the room log.
    Rename { room: String, old: String, new: String },
    /// Delete every message in a room.
    Clear {
        room: String,
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_line(&err));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = build_client(&cli.base_url)?;

    match cli.command {
        Command::Watch { room, username } => run_watch(&client, &room, &username).await,
        Command::Show { room } => run_show(&client, &room).await,
        Command::Send { room, username, message } => run_send(&client, &room, &username, &message.join(" ")).await,
        Command::Rename { room, old, new } => run_rename(&client, &room, &old, &new).await,
        Command::Clear { room, yes } => run_clear(&client, &room, yes).await,
    }
}

/// User-facing failure text. Transport detail stays in the log.
fn error_line(err: &CliError) -> String {
    format!("error: {err}")
}

fn build_client(base_url: &str) -> Result<CliClient, CliError> {
    let config = cli_config(base_url, ClientConfig::from_env())?;
    let http = reqwest::Client::builder().timeout(config.request_timeout).build()?;
    let api = ReqwestChatApi::new(http, config.clone());
    Ok(ChatClient::new(api, Rc::new(RefCell::new(ChatState::default())), TokioClock, config))
}

/// Apply `--base-url` over the environment config.
fn cli_config(base_url: &str, mut config: ClientConfig) -> Result<ClientConfig, CliError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let parsed = reqwest::Url::parse(trimmed).map_err(|_| CliError::InvalidBaseUrl(base_url.to_owned()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(CliError::InvalidBaseUrl(base_url.to_owned()));
    }
    trimmed.clone_into(&mut config.api_base);
    Ok(config)
}

async fn run_watch(client: &CliClient, room: &str, username: &str) -> Result<(), CliError> {
    let ticket = client.join(room, username)?;
    tracing::info!(room = %ticket.room, username = %ticket.username, "watching room");

    let poll = client.poll(ticket, |result| match result {
        Ok(outcome) => print_outcome(&client.store().borrow(), outcome),
        Err(err) => eprintln!("{}", error_line(&err.into())),
    });
    tokio::select! {
        () = poll => {}
        _ = tokio::signal::ctrl_c() => client.leave(),
    }
    Ok(())
}

async fn run_show(client: &CliClient, room: &str) -> Result<(), CliError> {
    client.join(room, OBSERVER)?;
    client.reconcile().await?;
    let state = client.store().borrow();
    if state.messages().is_empty() {
        println!("{EMPTY_ROOM_PLACEHOLDER}");
    }
    print_messages(state.messages());
    Ok(())
}

async fn run_send(client: &CliClient, room: &str, username: &str, message: &str) -> Result<(), CliError> {
    client.join(room, username)?;
    match client.send_message(message).await? {
        SendOutcome::Sent => println!("sent"),
        SendOutcome::Skipped => eprintln!("nothing to send"),
        SendOutcome::Stale => {}
    }
    Ok(())
}

async fn run_rename(client: &CliClient, room: &str, old: &str, new: &str) -> Result<(), CliError> {
    client.join(room, old)?;
    if client.change_username(Some(new)).await? == RenameOutcome::Renamed {
        println!("renamed {old} -> {}", new.trim());
    }
    Ok(())
}

async fn run_clear(client: &CliClient, room: &str, yes: bool) -> Result<(), CliError> {
    if !yes && !confirm(CONFIRM_CLEAR)? {
        return Ok(());
    }
    client.join(room, OBSERVER)?;
    client.clear_room().await?;
    println!("cleared {}", room.trim());
    Ok(())
}

fn confirm(question: &str) -> Result<bool, CliError> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn print_outcome(state: &ChatState, outcome: RenderOutcome) {
    for line in outcome_lines(state, outcome) {
        println!("{line}");
    }
}

/// Lines to print for one reconcile result: the appended tail, or the whole
/// list after a rebuild.
fn outcome_lines(state: &ChatState, outcome: RenderOutcome) -> Vec<String> {
    let messages = state.messages();
    match outcome {
        RenderOutcome::Cleared => vec![format!("-- {EMPTY_ROOM_PLACEHOLDER}")],
        RenderOutcome::Appended(n) => render(&messages[messages.len().saturating_sub(n)..]),
        RenderOutcome::Replaced(_) => {
            let mut lines = vec![format!("-- {}", state.room_info())];
            lines.extend(render(messages));
            lines
        }
        RenderOutcome::Unchanged | RenderOutcome::Stale => Vec::new(),
    }
}

fn render(messages: &[RenderedMessage]) -> Vec<String> {
    messages.iter().map(|m| m.line.to_string()).collect()
}

fn print_messages(messages: &[RenderedMessage]) {
    for line in render(messages) {
        println!("{line}");
    }
}

use std::io::{self, Write};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use bola::banner::{BannerInfo, print_banner, print_session_summary};
use bola::commands::{CommandRegistry, CommandResult, SessionInfo, StateChange};
use bola::config::Settings;
use bola::history::{Filter, HistoryStore};
use bola::oracle::yesno::YesNoOracle;
use bola::render::{format_history, print_view};
use bola::session::{HistoryView, LOADING_TEXT, Session, SubmitError};
use bola::spinner::Spinner;
use bola::validator::validate;

#[derive(Parser)]
#[command(name = "bola", version, about = "Ask the magic ball a yes/no question.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// SQLite database path for the history (use :memory: for ephemeral)
    #[arg(short, long)]
    db: Option<String>,

    /// Answer endpoint
    #[arg(long)]
    api_url: Option<String>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Ask a single question and exit
    Ask {
        /// The question, ending with ? (or wrapped in ¿ ?)
        question: String,
    },
    /// Print past questions and exit
    History {
        /// Only show one kind of answer
        #[arg(value_enum, default_value_t = Filter::All)]
        filter: Filter,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = Settings::new(cli.api_url, cli.db);
    let history = settings.open_history();

    match cli.command {
        Some(Command::History { filter }) => {
            print!("{}", format_history(&HistoryView::of(&history, filter)));
            Ok(())
        }
        Some(Command::Ask { question }) => {
            let mut session = new_session(&settings, history);
            ask(&mut session, &question).await;
            Ok(())
        }
        None => repl(&settings, new_session(&settings, history)).await,
    }
}

fn init_tracing(verbose: u8) {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(rust_log.as_deref(), verbose))
        .with_writer(io::stderr)
        .init();
}

/// `RUST_LOG` wins when set and parseable; otherwise warn, plus our own
/// debug output with `-v`.
fn env_filter(rust_log: Option<&str>, verbose: u8) -> EnvFilter {
    if let Some(spec) = rust_log.filter(|s| !s.trim().is_empty())
        && let Ok(filter) = EnvFilter::try_new(spec)
    {
        return filter;
    }
    if verbose > 0 {
        EnvFilter::new("warn,bola=debug")
    } else {
        EnvFilter::new("warn")
    }
}

fn new_session(settings: &Settings, history: HistoryStore) -> Session {
    let oracle = Arc::new(YesNoOracle::new(Some(settings.api_url.clone())));
    Session::new(oracle, history)
}

/// Submit one question with the spinner running, then draw the outcome.
async fn ask(session: &mut Session, question: &str) {
    let spinner = validate(question)
        .is_ok()
        .then(|| Spinner::start(LOADING_TEXT));
    let result = session.submit(question).await;
    if let Some(spinner) = spinner {
        spinner.stop().await;
    }

    match result {
        Ok(answer) => tracing::debug!(answer = %answer.answer, "question answered"),
        Err(SubmitError::Invalid(reason)) => tracing::debug!(%reason, "question rejected"),
        Err(e @ SubmitError::Busy) => {
            println!("  ✗ {e}");
            return;
        }
    }
    print_view(&session.view());
}

async fn repl(settings: &Settings, mut session: Session) -> anyhow::Result<()> {
    let store_label = if settings.is_ephemeral() {
        "ephemeral"
    } else {
        &settings.db_path
    };

    print_banner(&BannerInfo {
        endpoint: &settings.api_url,
        store: store_label,
        history: session.history().len(),
    });

    let commands = CommandRegistry::new();

    // Async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\n🔮 ");
        io::stdout().flush()?;

        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {}", e);
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let info = SessionInfo {
            endpoint: &settings.api_url,
            db_path: store_label,
            history_len: session.history().len(),
            filter: session.filter(),
            asked: session.asked(),
            image: session.answer().and_then(|a| a.image_url()),
        };

        match commands.dispatch(&line, &info).await {
            CommandResult::Handled => continue,
            CommandResult::Quit => break,
            CommandResult::StateChanged(change) => {
                apply(&mut session, change);
                if let Some(history) = session.view().history {
                    print!("{}", format_history(&history));
                }
                session.hide_history();
                continue;
            }
            CommandResult::NotACommand => {}
        }

        // A question can't be cancelled: Ctrl+C while waiting leaves the program.
        tokio::select! {
            _ = ask(&mut session, &line) => {}
            _ = tokio::signal::ctrl_c() => {
                println!("\n\ninterrupted");
                break;
            }
        }
    }

    print_session_summary(session.asked());
    Ok(())
}

fn apply(session: &mut Session, change: StateChange) {
    match change {
        StateChange::ShowHistory(filter) => {
            if let Some(filter) = filter {
                session.set_filter(filter);
            }
            session.show_history();
        }
        StateChange::Filter(filter) => {
            session.set_filter(filter);
            session.show_history();
        }
    }
}

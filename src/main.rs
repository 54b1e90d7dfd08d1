use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use marquee::banner::{BannerInfo, print_banner, print_farewell};
use marquee::catalog::Catalog;
use marquee::commands::{CommandRegistry, CommandResult, SessionInfo, StateChange};
use marquee::config::Settings;
use marquee::consts::default_config_path;
use marquee::filter::{Query, filter};
use marquee::indicator::TypingIndicator;
use marquee::render;
use marquee::responder::{Responder, RuleBook};
use marquee::session::{ChatSession, Submission};

#[derive(Parser)]
#[command(name = "marquee", version, about = "Find your next adventure.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Settings file (default: ~/.marquee/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Event catalog JSON (default: built-in seed)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Assistant rule table JSON (default: built-in rules)
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Assistant reply delay in milliseconds
    #[arg(short, long)]
    delay_ms: Option<u64>,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, default_value_t = false)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List events matching a search term and/or location
    Search {
        /// Text to look for in titles and descriptions
        #[arg(default_value = "")]
        term: String,
        /// Exact location name
        #[arg(short, long, default_value = "")]
        location: String,
    },
    /// Show full details for one event
    Show {
        id: u32,
    },
    /// Ask the assistant a single question (no typing delay)
    Ask {
        #[arg(required = true, num_args = 1..)]
        utterance: Vec<String>,
    },
    /// List every location in the catalog
    Locations,
}

fn init_tracing(verbose: bool, json: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    // CLI flag > settings file > built-in default
    let mut settings = match cli.config.clone().or_else(default_config_path) {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };
    let catalog_path = cli.catalog.clone().or(settings.catalog_path.clone());
    let rules_path = cli.rules.clone().or(settings.rules_path.clone());
    if let Some(delay_ms) = cli.delay_ms {
        settings.reply_delay_ms = delay_ms;
    }

    let catalog = match &catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::seed()?,
    };
    let rules = match &rules_path {
        Some(path) => RuleBook::load(path)?,
        None => RuleBook::builtin(),
    };

    if let Some(command) = cli.command {
        return run_once(command, &catalog, &rules);
    }

    let catalog_label = source_label(catalog_path.as_ref());
    let rules_label = source_label(rules_path.as_ref());
    print_banner(&BannerInfo {
        events: catalog.len(),
        locations: catalog.locations().len(),
        catalog: &catalog_label,
        rules: rules.rule_count(),
        rules_source: &rules_label,
        reply_delay_ms: settings.reply_delay_ms,
    });

    let mut chat = ChatSession::new(Arc::new(rules), settings.reply_delay());
    repl(&catalog, &mut chat).await?;

    print_farewell(chat.transcript().len());
    Ok(())
}

fn source_label(path: Option<&PathBuf>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in".to_string())
}

fn run_once(command: Command, catalog: &Catalog, rules: &RuleBook) -> Result<()> {
    match command {
        Command::Search { term, location } => {
            let query = Query::new(term, location);
            println!("{}", render::results(&filter(catalog.events(), &query)));
        }
        Command::Show { id } => {
            let event = catalog
                .get(id)
                .with_context(|| format!("event not found: #{id}"))?;
            print!("{}", render::event_detail(event));
        }
        Command::Ask { utterance } => {
            println!("{}", rules.respond(&utterance.join(" ")));
        }
        Command::Locations => {
            for location in catalog.locations() {
                println!("{location}");
            }
        }
    }
    Ok(())
}

async fn repl(catalog: &Catalog, chat: &mut ChatSession) -> Result<()> {
    let registry = CommandRegistry::new();
    let mut query = Query::default();

    // async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    print_greeting(chat);

    loop {
        print!("\nmarquee> ");
        io::stdout().flush()?;

        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {e}");
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let transcript = chat.transcript();
        let info = SessionInfo {
            catalog,
            query: &query,
            transcript: &transcript,
        };

        match registry.dispatch(input, &info).await {
            CommandResult::Quit => break,
            CommandResult::Handled => continue,
            CommandResult::StateChanged(StateChange::Query(next)) => {
                query = next;
                let matched = filter(catalog.events(), &query);
                println!("{}", render::results(&matched));
                continue;
            }
            CommandResult::StateChanged(StateChange::NewConversation) => {
                chat.reset();
                print_greeting(chat);
                continue;
            }
            CommandResult::NotACommand => {}
        }

        // commands see the trimmed line, the assistant sees it as typed
        match chat.submit(&line) {
            Submission::Sent(_) => {}
            Submission::Ignored => continue,
            Submission::Busy => {
                eprintln!("  ✗ the assistant is still typing");
                continue;
            }
        }

        let indicator = TypingIndicator::start("assistant is typing");
        // Ctrl+C while composing drops the reply, not the REPL
        let reply = tokio::select! {
            reply = chat.wait_for_reply() => reply,
            _ = tokio::signal::ctrl_c() => None,
        };
        indicator.stop().await;

        match reply {
            Some(message) => println!("{}", render::message(&message)),
            None => {
                chat.cancel();
                println!("  (reply cancelled)");
            }
        }
    }

    Ok(())
}

fn print_greeting(chat: &ChatSession) {
    if let Some(greeting) = chat.transcript().first() {
        println!("{}", render::message(greeting));
    }
}

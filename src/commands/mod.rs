//! Built-in REPL commands prefixed with `/`.
//!
//! Commands implement the [`Command`] trait and are registered in a
//! [`CommandRegistry`]. The registry handles dispatch, alias resolution,
//! and help generation. Anything that is not a command is chat.

mod events;
mod help;
mod history;
mod location;
mod locations;
mod new;
mod query;
mod quit;
mod search;
mod show;

use async_trait::async_trait;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::filter::Query;
use crate::session::ChatMessage;

/// Read-only view of the REPL state handed to commands.
pub struct SessionInfo<'a> {
    pub catalog: &'a Catalog,
    pub query: &'a Query,
    pub transcript: &'a [ChatMessage],
}

/// A state change the REPL needs to apply after a command runs.
#[derive(Debug, Clone, PartialEq)]
pub enum StateChange {
    /// Replace the active search/location query.
    Query(Query),
    /// Throw away the conversation and start over.
    NewConversation,
}

/// What the REPL should do after a command runs.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    /// Not a command, pass input to the assistant.
    NotACommand,
    /// Command handled, continue the REPL loop.
    Handled,
    /// Command produced a state change the REPL must apply.
    StateChanged(StateChange),
    /// Exit the REPL.
    Quit,
}

#[async_trait]
pub trait Command: Send + Sync {
    /// Primary name, e.g. `"/search"`.
    fn name(&self) -> &str;

    /// Alternative names, e.g. `&["/h", "/?"]`.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Argument hint for `/help`, e.g. `"<term>"`.
    fn usage(&self) -> &str {
        ""
    }

    /// One-line description for `/help`.
    fn description(&self) -> &str;

    /// Run the command. `args` is everything after the command word, trimmed.
    async fn execute(&self, args: &str, info: &SessionInfo<'_>) -> CommandResult;
}

pub struct CommandRegistry {
    commands: Vec<Arc<dyn Command>>,
}

impl CommandRegistry {
    /// Create a registry with all built-in commands.
    pub fn new() -> Self {
        let commands: Vec<Arc<dyn Command>> = vec![
            Arc::new(help::HelpCommand),
            Arc::new(events::EventsCommand),
            Arc::new(search::SearchCommand),
            Arc::new(location::LocationCommand),
            Arc::new(locations::LocationsCommand),
            Arc::new(show::ShowCommand),
            Arc::new(query::QueryCommand),
            Arc::new(history::HistoryCommand),
            Arc::new(new::NewCommand),
            Arc::new(quit::QuitCommand),
        ];
        Self { commands }
    }

    pub fn register(&mut self, command: Arc<dyn Command>) {
        self.commands.push(command);
    }

    /// Dispatch input to a matching command, or return `NotACommand`.
    pub async fn dispatch(&self, input: &str, info: &SessionInfo<'_>) -> CommandResult {
        let input = input.trim();
        let (word, args) = match input.split_once(char::is_whitespace) {
            Some((word, args)) => (word, args.trim()),
            None => (input, ""),
        };

        for command in &self.commands {
            if word != command.name() && !command.aliases().contains(&word) {
                continue;
            }
            // bare-word aliases like `quit` only count on their own
            if !word.starts_with('/') && !args.is_empty() {
                break;
            }
            // /help is special, it needs the registry to list all commands
            if command.name() == "/help" {
                print!("{}", self.help_text());
                return CommandResult::Handled;
            }
            tracing::debug!(command = command.name(), args, "dispatch");
            return command.execute(args, info).await;
        }

        if word.starts_with('/') {
            println!("unknown command: {word}");
            println!("type /help for available commands");
            return CommandResult::Handled;
        }

        CommandResult::NotACommand
    }

    /// Generate help text from all registered commands.
    pub fn help_text(&self) -> String {
        let entries: Vec<(String, &str)> = self
            .commands
            .iter()
            .map(|c| (format_label(c.name(), c.usage(), c.aliases()), c.description()))
            .collect();

        let max_width = entries
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(10);

        let mut out = String::new();
        for (label, desc) in &entries {
            out.push_str(&format!("  {label:<max_width$}  {desc}\n"));
        }
        out
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    /// All registered names and aliases (for duplicate detection).
    pub fn all_triggers(&self) -> Vec<&str> {
        let mut triggers = Vec::new();
        for cmd in &self.commands {
            triggers.push(cmd.name());
            triggers.extend_from_slice(cmd.aliases());
        }
        triggers
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn format_label(name: &str, usage: &str, aliases: &[&str]) -> String {
    let mut label = name.to_string();
    if !usage.is_empty() {
        label.push(' ');
        label.push_str(usage);
    }
    if !aliases.is_empty() {
        label.push_str(&format!(" ({})", aliases.join(", ")));
    }
    label
}

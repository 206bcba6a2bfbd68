//! Built-in REPL commands prefixed with `/`.
//!
//! Commands implement the [`Command`] trait and are registered in a
//! [`CommandRegistry`]. The registry handles dispatch, alias resolution,
//! and dynamic help generation. Anything that isn't a command is a question
//! for the ball.

mod filter;
mod help;
mod history;
mod image;
mod quit;
mod status;

use async_trait::async_trait;
use std::sync::Arc;

use crate::history::Filter;

/// Session info available to commands during execution.
pub struct SessionInfo<'a> {
    pub endpoint: &'a str,
    pub db_path: &'a str,
    pub history_len: usize,
    pub filter: Filter,
    pub asked: usize,
    /// Image of the answer currently on display.
    pub image: Option<&'a str>,
}

/// A state change the REPL needs to apply to the session after a command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    /// Open the history panel, optionally switching filter first.
    ShowHistory(Option<Filter>),
    /// Switch the history filter.
    Filter(Filter),
}

/// What the REPL should do after a command runs.
#[derive(Debug)]
pub enum CommandResult {
    /// Not a command — ask the ball.
    NotACommand,
    /// Command handled, continue the REPL loop.
    Handled,
    /// Command produced a state change the REPL must apply.
    StateChanged(StateChange),
    /// Exit the REPL.
    Quit,
}

/// A REPL command. Implement this trait to add new commands.
#[async_trait]
pub trait Command: Send + Sync {
    /// Primary name, e.g. `"/history"`.
    fn name(&self) -> &str;

    /// Alternative names, e.g. `&["/h", "/?"]`.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// One-line description for `/help`.
    fn description(&self) -> &str;

    /// Run the command. `args` is whatever followed the name, trimmed.
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
            Arc::new(history::HistoryCommand),
            Arc::new(filter::FilterCommand),
            Arc::new(image::ImageCommand),
            Arc::new(status::StatusCommand),
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
        let (cmd, args) = match input.split_once(char::is_whitespace) {
            Some((cmd, args)) => (cmd, args.trim()),
            None => (input, ""),
        };

        // Bare-word aliases like `quit` only count as the whole line, so a
        // question such as "quit my job?" still reaches the ball.
        let hit =
            |trigger: &str| trigger == cmd && (trigger.starts_with('/') || args.is_empty());

        for command in &self.commands {
            if hit(command.name()) || command.aliases().iter().any(|alias| hit(alias)) {
                // /help is special — it needs the registry to list all commands
                if command.name() == "/help" {
                    print!("{}", self.help_text());
                    return CommandResult::Handled;
                }
                return command.execute(args, info).await;
            }
        }

        if cmd.starts_with('/') {
            println!("unknown command: {cmd}");
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
            .map(|c| (format_label(c.name(), c.aliases()), c.description()))
            .collect();

        let max_width = entries
            .iter()
            .map(|(label, _)| label.len())
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

fn format_label(name: &str, aliases: &[&str]) -> String {
    if aliases.is_empty() {
        name.to_string()
    } else {
        format!("{} ({})", name, aliases.join(", "))
    }
}

/// Parse a filter argument, printing a hint when it isn't one.
fn parse_filter(arg: &str) -> Option<Filter> {
    let filter = Filter::parse(arg);
    if filter.is_none() {
        let choices: Vec<&str> = Filter::ALL.iter().map(|f| f.label()).collect();
        println!("  unknown filter: {arg}");
        println!("  choose one of: {}", choices.join(", "));
    }
    filter
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn test_info() -> SessionInfo<'static> {
        SessionInfo {
            endpoint: "https://yesno.wtf/api",
            db_path: ":memory:",
            history_len: 0,
            filter: Filter::All,
            asked: 0,
            image: None,
        }
    }

    #[test]
    fn all_builtins_registered() {
        let reg = CommandRegistry::new();
        let names = reg.names();
        for name in ["/help", "/history", "/filter", "/image", "/status", "/quit"] {
            assert!(names.contains(&name), "missing: {name}");
        }
    }

    #[test]
    fn no_duplicate_triggers() {
        let reg = CommandRegistry::new();
        let triggers = reg.all_triggers();
        let mut seen = Vec::new();
        for t in &triggers {
            assert!(!seen.contains(t), "duplicate trigger: {t}");
            seen.push(t);
        }
    }

    #[test]
    fn help_text_includes_all_commands() {
        let reg = CommandRegistry::new();
        let text = reg.help_text();
        for name in reg.names() {
            assert!(text.contains(name), "help missing: {name}");
        }
        assert!(text.contains("/?"));
    }

    #[tokio::test]
    async fn unknown_slash_command_is_handled() {
        let reg = CommandRegistry::new();
        assert!(matches!(
            reg.dispatch("/foobar", &test_info()).await,
            CommandResult::Handled
        ));
    }

    #[tokio::test]
    async fn questions_pass_through() {
        let reg = CommandRegistry::new();
        assert!(matches!(
            reg.dispatch("¿Lloverá mañana?", &test_info()).await,
            CommandResult::NotACommand
        ));
        assert!(matches!(
            reg.dispatch("will it rain?", &test_info()).await,
            CommandResult::NotACommand
        ));
    }

    #[tokio::test]
    async fn questions_starting_with_a_bare_alias_pass_through() {
        let reg = CommandRegistry::new();
        for question in ["quit my job?", "exit now?", "salir esta noche?"] {
            assert!(crate::validator::validate(question).is_ok());
            assert!(
                matches!(
                    reg.dispatch(question, &test_info()).await,
                    CommandResult::NotACommand
                ),
                "{question} was not asked"
            );
        }
        assert!(matches!(
            reg.dispatch("  quit ", &test_info()).await,
            CommandResult::Quit
        ));
        assert!(matches!(
            reg.dispatch("/quit now", &test_info()).await,
            CommandResult::Quit
        ));
    }

    #[tokio::test]
    async fn arguments_reach_the_command() {
        let reg = CommandRegistry::new();
        assert!(matches!(
            reg.dispatch("/filter   YES ", &test_info()).await,
            CommandResult::StateChanged(StateChange::Filter(Filter::Yes))
        ));
    }

    #[tokio::test]
    async fn registered_command_works() {
        struct PingCommand;

        #[async_trait]
        impl Command for PingCommand {
            fn name(&self) -> &str {
                "/ping"
            }
            fn description(&self) -> &str {
                "pong"
            }
            async fn execute(&self, _args: &str, _info: &SessionInfo<'_>) -> CommandResult {
                CommandResult::Handled
            }
        }

        let mut reg = CommandRegistry::new();
        reg.register(Arc::new(PingCommand));
        assert!(matches!(
            reg.dispatch("/ping", &test_info()).await,
            CommandResult::Handled
        ));
        assert!(reg.help_text().contains("/ping"));
    }

    #[test]
    fn format_label_with_aliases() {
        assert_eq!(format_label("/status", &[]), "/status");
        assert_eq!(format_label("/help", &["/h", "/?"]), "/help (/h, /?)");
    }

    #[test]
    fn parse_filter_rejects_unknown() {
        assert_eq!(parse_filter("no"), Some(Filter::No));
        assert_eq!(parse_filter("nope"), None);
    }
}

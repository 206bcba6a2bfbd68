use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

/// Listed like any other command; the registry renders the text itself.
pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &str {
        "/help"
    }

    fn aliases(&self) -> &[&str] {
        &["/h", "/?"]
    }

    fn description(&self) -> &str {
        "show available commands"
    }

    async fn execute(&self, _args: &str, _info: &SessionInfo<'_>) -> CommandResult {
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata() {
        assert_eq!(HelpCommand.name(), "/help");
        assert!(HelpCommand.aliases().contains(&"/?"));
        assert!(!HelpCommand.description().is_empty());
    }
}

use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo, StateChange, parse_filter};

/// Opens the history panel. `/history yes` also switches the filter.
pub struct HistoryCommand;

#[async_trait]
impl Command for HistoryCommand {
    fn name(&self) -> &str {
        "/history"
    }

    fn aliases(&self) -> &[&str] {
        &["/historial"]
    }

    fn description(&self) -> &str {
        "show past questions [all|yes|no|maybe]"
    }

    async fn execute(&self, args: &str, _info: &SessionInfo<'_>) -> CommandResult {
        if args.is_empty() {
            return CommandResult::StateChanged(StateChange::ShowHistory(None));
        }
        match parse_filter(args) {
            Some(filter) => CommandResult::StateChanged(StateChange::ShowHistory(Some(filter))),
            None => CommandResult::Handled,
        }
    }
}

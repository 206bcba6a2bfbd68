use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo, StateChange, parse_filter};

pub struct FilterCommand;

#[async_trait]
impl Command for FilterCommand {
    fn name(&self) -> &str {
        "/filter"
    }

    fn description(&self) -> &str {
        "filter history by answer: all, yes, no, maybe"
    }

    async fn execute(&self, args: &str, info: &SessionInfo<'_>) -> CommandResult {
        if args.is_empty() {
            println!("  filter: {}", info.filter.label());
            return CommandResult::Handled;
        }
        match parse_filter(args) {
            Some(filter) => CommandResult::StateChanged(StateChange::Filter(filter)),
            None => CommandResult::Handled,
        }
    }
}

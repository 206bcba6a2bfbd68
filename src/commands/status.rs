use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

pub struct StatusCommand;

#[async_trait]
impl Command for StatusCommand {
    fn name(&self) -> &str {
        "/status"
    }

    fn description(&self) -> &str {
        "show endpoint, storage and history size"
    }

    async fn execute(&self, _args: &str, info: &SessionInfo<'_>) -> CommandResult {
        println!("  endpoint  {}", info.endpoint);
        println!("  store     {}", info.db_path);
        println!("  history   {} entries", info.history_len);
        println!("  filter    {}", info.filter.label());
        println!("  asked     {} this session", info.asked);
        CommandResult::Handled
    }
}

use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

/// Opens the current answer's image in the browser.
pub struct ImageCommand;

#[async_trait]
impl Command for ImageCommand {
    fn name(&self) -> &str {
        "/image"
    }

    fn description(&self) -> &str {
        "open the answer's image in the browser"
    }

    async fn execute(&self, _args: &str, info: &SessionInfo<'_>) -> CommandResult {
        let Some(url) = info.image else {
            println!("  no image to show");
            return CommandResult::Handled;
        };

        if let Err(e) = open::that(url) {
            tracing::warn!(error = %e, url, "failed to open image");
            println!("  open it yourself: {url}");
        }
        CommandResult::Handled
    }
}

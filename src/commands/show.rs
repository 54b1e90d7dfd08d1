use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::render;

pub struct ShowCommand;

#[async_trait]
impl Command for ShowCommand {
    fn name(&self) -> &str {
        "/show"
    }

    fn aliases(&self) -> &[&str] {
        &["/event"]
    }

    fn usage(&self) -> &str {
        "<id>"
    }

    fn description(&self) -> &str {
        "show full details for one event"
    }

    async fn execute(&self, args: &str, info: &SessionInfo<'_>) -> CommandResult {
        let id: u32 = match args.trim_start_matches('#').parse() {
            Ok(id) => id,
            Err(_) => {
                eprintln!("  ✗ usage: /show <id>");
                return CommandResult::Handled;
            }
        };

        match info.catalog.get(id) {
            Some(event) => print!("{}", render::event_detail(event)),
            None => eprintln!("  ✗ event not found: #{id}"),
        }
        CommandResult::Handled
    }
}

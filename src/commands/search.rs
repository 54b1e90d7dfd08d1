use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo, StateChange};

pub struct SearchCommand;

#[async_trait]
impl Command for SearchCommand {
    fn name(&self) -> &str {
        "/search"
    }

    fn aliases(&self) -> &[&str] {
        &["/s"]
    }

    fn usage(&self) -> &str {
        "<term>"
    }

    fn description(&self) -> &str {
        "search titles and descriptions (no term clears the search)"
    }

    async fn execute(&self, args: &str, info: &SessionInfo<'_>) -> CommandResult {
        if args.is_empty() {
            println!("  ✓ search cleared");
        } else {
            println!("  ✓ searching for \"{args}\"");
        }
        CommandResult::StateChanged(StateChange::Query(info.query.with_term(args)))
    }
}

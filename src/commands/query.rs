use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::filter::filter;

pub struct QueryCommand;

#[async_trait]
impl Command for QueryCommand {
    fn name(&self) -> &str {
        "/filter"
    }

    fn description(&self) -> &str {
        "show the current search and location"
    }

    async fn execute(&self, _args: &str, info: &SessionInfo<'_>) -> CommandResult {
        let matched = filter(info.catalog.events(), info.query).len();
        println!("  {}", info.query);
        println!("  {matched} of {} events match", info.catalog.len());
        CommandResult::Handled
    }
}

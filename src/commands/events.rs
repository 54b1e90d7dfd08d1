use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::filter::filter;
use crate::render;

pub struct EventsCommand;

#[async_trait]
impl Command for EventsCommand {
    fn name(&self) -> &str {
        "/events"
    }

    fn aliases(&self) -> &[&str] {
        &["/ls"]
    }

    fn description(&self) -> &str {
        "list events matching the current search and location"
    }

    async fn execute(&self, _args: &str, info: &SessionInfo<'_>) -> CommandResult {
        let matched = filter(info.catalog.events(), info.query);
        if !info.query.is_unconstrained() {
            println!("  {}", info.query);
        }
        println!("{}", render::results(&matched));
        CommandResult::Handled
    }
}

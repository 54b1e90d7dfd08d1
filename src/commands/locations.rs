use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

pub struct LocationsCommand;

#[async_trait]
impl Command for LocationsCommand {
    fn name(&self) -> &str {
        "/locations"
    }

    fn description(&self) -> &str {
        "list every location in the catalog"
    }

    async fn execute(&self, _args: &str, info: &SessionInfo<'_>) -> CommandResult {
        let locations = info.catalog.locations();
        if locations.is_empty() {
            println!("  catalog is empty");
            return CommandResult::Handled;
        }
        for location in locations {
            let marker = if location == info.query.location {
                " ← current"
            } else {
                ""
            };
            println!("  {location}{marker}");
        }
        CommandResult::Handled
    }
}

use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo, StateChange};

pub struct LocationCommand;

#[async_trait]
impl Command for LocationCommand {
    fn name(&self) -> &str {
        "/location"
    }

    fn aliases(&self) -> &[&str] {
        &["/where"]
    }

    fn usage(&self) -> &str {
        "<name>|all"
    }

    fn description(&self) -> &str {
        "only show events in one location"
    }

    async fn execute(&self, args: &str, info: &SessionInfo<'_>) -> CommandResult {
        if args.is_empty() || args.eq_ignore_ascii_case("all") {
            println!("  ✓ showing all locations");
            return CommandResult::StateChanged(StateChange::Query(info.query.with_location("")));
        }

        let locations = info.catalog.locations();
        if !locations.contains(&args) {
            // exact match only; suggest the intended spelling if it differs by case
            match locations.iter().find(|l| l.eq_ignore_ascii_case(args)) {
                Some(known) => eprintln!("  ✗ unknown location: {args} (did you mean {known}?)"),
                None => eprintln!("  ✗ unknown location: {args} (see /locations)"),
            }
            return CommandResult::Handled;
        }

        println!("  ✓ location set to {args}");
        CommandResult::StateChanged(StateChange::Query(info.query.with_location(args)))
    }
}

use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo, StateChange};

pub struct NewCommand;

#[async_trait]
impl Command for NewCommand {
    fn name(&self) -> &str {
        "/new"
    }

    fn description(&self) -> &str {
        "start a new conversation with the assistant"
    }

    async fn execute(&self, _args: &str, _info: &SessionInfo<'_>) -> CommandResult {
        println!("  ✓ conversation cleared");
        CommandResult::StateChanged(StateChange::NewConversation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_info;
    use crate::filter::Query;

    #[test]
    fn metadata() {
        assert_eq!(NewCommand.name(), "/new");
        assert!(NewCommand.aliases().is_empty());
        assert!(!NewCommand.description().is_empty());
    }

    #[tokio::test]
    async fn requests_new_conversation() {
        let query = Query::default();
        assert_eq!(
            NewCommand.execute("", &test_info(&query)).await,
            CommandResult::StateChanged(StateChange::NewConversation)
        );
    }
}

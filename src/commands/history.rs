use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::render;

pub struct HistoryCommand;

#[async_trait]
impl Command for HistoryCommand {
    fn name(&self) -> &str {
        "/history"
    }

    fn description(&self) -> &str {
        "print the conversation so far"
    }

    async fn execute(&self, _args: &str, info: &SessionInfo<'_>) -> CommandResult {
        if info.transcript.is_empty() {
            println!("  no messages yet");
        }
        for message in info.transcript {
            println!("{}", render::message(message));
        }
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_catalog;
    use crate::filter::Query;
    use crate::session::Transcript;

    #[tokio::test]
    async fn prints_transcript() {
        let transcript = Transcript::new();
        let query = Query::default();
        let info = SessionInfo {
            catalog: test_catalog(),
            query: &query,
            transcript: transcript.messages(),
        };
        assert_eq!(HistoryCommand.execute("", &info).await, CommandResult::Handled);
    }
}

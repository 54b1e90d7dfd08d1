//! The "assistant is typing" dots shown while a reply is composing.

use std::io::Write;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Three dots filling up, then emptying.
const FRAMES: &[&str] = &["·  ", "·· ", "···", " ··", "  ·", "   "];

const INTERVAL: Duration = Duration::from_millis(200);

/// Animated indicator on stderr, so it never mixes with replies on stdout.
pub struct TypingIndicator {
    handle: JoinHandle<()>,
    stop: watch::Sender<bool>,
}

impl TypingIndicator {
    /// Start animating after `label` (e.g. `"assistant is typing"`).
    pub fn start(label: &str) -> Self {
        let (stop, mut stopped) = watch::channel(false);
        let label = label.to_string();

        let handle = tokio::spawn(async move {
            for frame in FRAMES.iter().cycle() {
                // \x1b[2K clears the line, \r returns to column 0
                eprint!("\x1b[2K\r  {label} {frame}");
                let _ = std::io::stderr().flush();

                tokio::select! {
                    _ = tokio::time::sleep(INTERVAL) => {}
                    _ = stopped.changed() => break,
                }
            }
            eprint!("\x1b[2K\r");
            let _ = std::io::stderr().flush();
        });

        Self { handle, stop }
    }

    /// Stop animating and clear the line.
    pub async fn stop(self) {
        let _ = self.stop.send(true);
        let _ = self.handle.await;
    }
}

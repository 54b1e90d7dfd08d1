//! Startup banner and farewell.

use crate::consts::{AUTHOR, REPO};

/// What the session is running with, for the startup banner.
pub struct BannerInfo<'a> {
    pub events: usize,
    pub locations: usize,
    pub catalog: &'a str,
    pub rules: usize,
    pub rules_source: &'a str,
    pub reply_delay_ms: u64,
}

pub fn banner_text(info: &BannerInfo) -> String {
    format!(
        r#"
   ╔═══════════════════════════════════════╗
   ║            M A R Q U E E              ║
   ║      find your next adventure         ║
   ╚═══════════════════════════════════════╝

   version   {}
   by        {}
   repo      {}
   catalog   {} events in {} locations ({})
   assistant {} rules ({}), replies after {} ms

   type /help for commands, anything else chats with the assistant
"#,
        env!("CARGO_PKG_VERSION"),
        AUTHOR,
        REPO,
        info.events,
        info.locations,
        info.catalog,
        info.rules,
        info.rules_source,
        info.reply_delay_ms,
    )
}

pub fn print_banner(info: &BannerInfo) {
    println!("{}", banner_text(info));
}

/// Print the closing line with how many messages were exchanged.
pub fn print_farewell(messages: usize) {
    if messages > 1 {
        println!("session: {messages} messages");
    }
    println!("see you at the next show.");
}

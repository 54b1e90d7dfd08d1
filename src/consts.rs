//! Project-wide constants.

use std::path::PathBuf;
use std::time::Duration;

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// How long the assistant "types" before a reply appears.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);

/// Settings file location: `~/.marquee/config.json`.
/// `None` when the home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".marquee").join("config.json"))
}

/// Format a number with comma separators (e.g. 1,234,567).
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consts_from_cargo_toml() {
        assert!(AUTHOR.contains("Assaf Sapir"));
        assert!(REPO.contains("github.com/assapir/marquee"));
        assert!(!HOMEPAGE.is_empty());
    }

    #[test]
    fn default_delay_is_one_and_a_half_seconds() {
        assert_eq!(DEFAULT_REPLY_DELAY.as_millis(), 1500);
    }

    #[test]
    fn config_path_under_dot_dir() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with(".marquee/config.json"));
        }
    }

    #[test]
    fn format_number_groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1,000");
        assert_eq!(format_number(12_345), "12,345");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }
}

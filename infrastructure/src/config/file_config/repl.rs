//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show the awaiting-reply spinner
    pub show_progress: bool,
    /// Path to the input history file; history stays in memory when unset
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl FileReplConfig {
    /// History file path with a leading `~/` expanded to the home directory
    pub fn history_path(&self) -> Option<PathBuf> {
        let raw = self.history_file.as_deref()?;
        match raw.strip_prefix("~/") {
            Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
            None => Some(PathBuf::from(raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_history_by_default() {
        assert!(FileReplConfig::default().history_path().is_none());
    }

    #[test]
    fn test_absolute_history_path_is_kept() {
        let config = FileReplConfig {
            history_file: Some("/tmp/localchat/history.txt".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.history_path(),
            Some(PathBuf::from("/tmp/localchat/history.txt"))
        );
    }

    #[test]
    fn test_tilde_is_expanded() {
        let config = FileReplConfig {
            history_file: Some("~/.local/share/localchat/history.txt".to_string()),
            ..Default::default()
        };
        if let Some(home) = dirs::home_dir() {
            assert_eq!(
                config.history_path(),
                Some(home.join(".local/share/localchat/history.txt"))
            );
        }
    }
}

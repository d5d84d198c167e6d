//! CLI command definitions

use clap::Parser;
use localchat_domain::ServiceProtocol;
use std::path::PathBuf;

/// CLI arguments for localchat
#[derive(Parser, Debug)]
#[command(name = "localchat")]
#[command(author, version, about = "Terminal chat client for a local language-model service")]
#[command(long_about = r#"
localchat sends what you type to a local chat service and shows the reply.

Press Enter to send. Shift+Enter starts a new line (on terminals that report
the shift modifier).

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./localchat.toml    Project-level config
3. ~/.config/localchat/config.toml   Global config

Example:
  localchat
  localchat --protocol ollama --model llama3.2:3b
  localchat --message "Hello" --json
"#)]
pub struct Cli {
    /// Send a single message, print the conversation and exit
    #[arg(short, long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Chat service endpoint URL
    #[arg(short, long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Wire protocol of the chat service (relay or ollama)
    #[arg(short, long, value_name = "PROTOCOL")]
    pub protocol: Option<ServiceProtocol>,

    /// Model name for the ollama protocol
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Print the one-shot conversation as JSON
    #[arg(long, requires = "message")]
    pub json: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the awaiting-reply spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_start_interactive_chat() {
        let cli = Cli::try_parse_from(["localchat"]).unwrap();
        assert!(cli.message.is_none());
        assert!(cli.protocol.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.json);
    }

    #[test]
    fn test_parses_service_overrides() {
        let cli = Cli::try_parse_from([
            "localchat",
            "--protocol",
            "ollama",
            "--endpoint",
            "http://127.0.0.1:11434/api/generate",
            "--model",
            "llama3.2:3b",
            "--timeout",
            "30",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.protocol, Some(ServiceProtocol::Ollama));
        assert_eq!(cli.model.as_deref(), Some("llama3.2:3b"));
        assert_eq!(cli.timeout, Some(30));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_rejects_unknown_protocol() {
        assert!(Cli::try_parse_from(["localchat", "--protocol", "smtp"]).is_err());
    }

    #[test]
    fn test_json_requires_message() {
        assert!(Cli::try_parse_from(["localchat", "--json"]).is_err());
        let cli = Cli::try_parse_from(["localchat", "-m", "Hi", "--json"]).unwrap();
        assert_eq!(cli.message.as_deref(), Some("Hi"));
        assert!(cli.json);
    }
}

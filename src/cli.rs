//! Command-line interface definition for Parley
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for interactive chat, history inspection, and the
//! model menu.

use clap::{Parser, Subcommand};

/// Parley - Offline chat console
///
/// Manage local chat sessions with a simulated assistant. All state lives
/// in an embedded store; nothing ever leaves the machine.
#[derive(Parser, Debug, Clone)]
#[command(name = "parley")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Override the session store directory
    #[arg(short = 'S', long, env = "PARLEY_STORE_PATH")]
    pub store_path: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Parley
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive chat session
    Chat {
        /// Select a model label for this run (persisted for later runs)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Inspect stored sessions
    History {
        /// History subcommand
        #[command(subcommand)]
        command: HistoryCommand,
    },

    /// List the configured model labels and the current selection
    Models,
}

/// History subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum HistoryCommand {
    /// List all stored sessions, most recently active first
    List,

    /// Print the transcript of one session
    Show {
        /// Session id (full id or unique prefix)
        id: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            store_path: None,
            verbose: false,
            command: Commands::Chat { model: None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default() {
        let cli = Cli::default();
        assert_eq!(cli.config, Some("config/config.yaml".to_string()));
        assert!(cli.store_path.is_none());
        assert!(!cli.verbose);
        assert!(matches!(cli.command, Commands::Chat { model: None }));
    }

    #[test]
    fn test_cli_parse_chat_command() {
        let cli = Cli::try_parse_from(["parley", "chat"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        assert!(matches!(cli.command, Commands::Chat { .. }));
    }

    #[test]
    fn test_cli_parse_chat_with_model() {
        let cli = Cli::try_parse_from(["parley", "chat", "--model", "ChatGPT 4o"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Chat { model } = cli.command {
            assert_eq!(model, Some("ChatGPT 4o".to_string()));
        } else {
            panic!("Expected Chat command");
        }
    }

    #[test]
    fn test_cli_parse_history_list() {
        let cli = Cli::try_parse_from(["parley", "history", "list"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::History { command } = cli.command {
            assert!(matches!(command, HistoryCommand::List));
        } else {
            panic!("Expected History command");
        }
    }

    #[test]
    fn test_cli_parse_history_show() {
        let cli = Cli::try_parse_from(["parley", "history", "show", "abc12345"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::History { command } = cli.command {
            if let HistoryCommand::Show { id } = command {
                assert_eq!(id, "abc12345");
            } else {
                panic!("Expected Show command");
            }
        } else {
            panic!("Expected History command");
        }
    }

    #[test]
    fn test_cli_parse_history_show_requires_id() {
        let cli = Cli::try_parse_from(["parley", "history", "show"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_models() {
        let cli = Cli::try_parse_from(["parley", "models"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Commands::Models));
    }

    #[test]
    fn test_cli_parse_with_store_path() {
        let cli = Cli::try_parse_from(["parley", "--store-path", "/tmp/alt", "chat"]);
        assert!(cli.is_ok());
        assert_eq!(cli.unwrap().store_path, Some("/tmp/alt".to_string()));
    }

    #[test]
    fn test_cli_parse_with_config_and_verbose() {
        let cli = Cli::try_parse_from(["parley", "--config", "custom.yaml", "-v", "models"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        assert_eq!(cli.config, Some("custom.yaml".to_string()));
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_missing_command() {
        let cli = Cli::try_parse_from(["parley"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_invalid_command() {
        let cli = Cli::try_parse_from(["parley", "invalid"]);
        assert!(cli.is_err());
    }
}

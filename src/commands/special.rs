//! Special commands parser for interactive chat mode
//!
//! Parses the slash commands available during an interactive session:
//! creating and switching sessions, picking a model, quick-sending a
//! suggestion, and inspecting session status. Command keywords are
//! case-insensitive; arguments (session references, model labels) keep
//! their original casing.

use thiserror::Error;

/// Errors that can occur when parsing special commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command was entered
    #[error("Unknown command: {0}\n\nType '/help' to see available commands")]
    UnknownCommand(String),

    /// Command was given an unsupported argument
    #[error("Unsupported argument for {command}: {arg}\n\nType '/help' to see valid usage")]
    UnsupportedArgument { command: String, arg: String },

    /// Command requires an argument but none was provided
    #[error("Command {command} requires an argument\n\nUsage: {usage}")]
    MissingArgument { command: String, usage: String },
}

/// Special commands that can be executed during interactive chat
///
/// These commands operate on the session store directly rather than being
/// sent as prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialCommand {
    /// Start a fresh session and make it active
    NewChat,

    /// List all sessions, most recently active first
    ListSessions,

    /// Switch to another session by id or unique id prefix
    SwitchSession(String),

    /// Switch the selected model label
    SwitchModel(String),

    /// List the configured model labels
    ListModels,

    /// Quick-send a configured suggestion
    ///
    /// Without an index, lists the available suggestions. With a 1-based
    /// index, sends that suggestion as a prompt.
    Suggest(Option<usize>),

    /// Display session and selection status
    ShowStatus,

    /// Display help information
    Help,

    /// Exit the interactive session
    Exit,

    /// Not a special command; the input is a regular prompt
    None,
}

/// Parse a user input string into a special command
///
/// # Errors
///
/// Returns `CommandError::UnknownCommand` if input starts with "/" but is
/// not a valid command, `CommandError::MissingArgument` when a required
/// argument is absent, and `CommandError::UnsupportedArgument` for
/// malformed arguments.
///
/// # Examples
///
/// ```
/// use parley::commands::special::{parse_special_command, SpecialCommand};
///
/// let cmd = parse_special_command("/new").unwrap();
/// assert_eq!(cmd, SpecialCommand::NewChat);
///
/// let cmd = parse_special_command("/model ChatGPT 4o").unwrap();
/// assert_eq!(cmd, SpecialCommand::SwitchModel("ChatGPT 4o".to_string()));
///
/// let cmd = parse_special_command("hello there").unwrap();
/// assert_eq!(cmd, SpecialCommand::None);
///
/// assert!(parse_special_command("/bogus").is_err());
/// ```
pub fn parse_special_command(input: &str) -> Result<SpecialCommand, CommandError> {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();

    // If input doesn't start with "/", it's not a command (except exit/quit)
    if !trimmed.starts_with('/') && lower != "exit" && lower != "quit" {
        return Ok(SpecialCommand::None);
    }

    match lower.as_str() {
        "/new" => Ok(SpecialCommand::NewChat),
        "/sessions" => Ok(SpecialCommand::ListSessions),

        "/switch" => Err(CommandError::MissingArgument {
            command: "/switch".to_string(),
            usage: "/switch <session-id>".to_string(),
        }),
        input if input.starts_with("/switch ") => {
            let reference = trimmed.get(8..).map(str::trim).unwrap_or("");
            if reference.is_empty() {
                Err(CommandError::MissingArgument {
                    command: "/switch".to_string(),
                    usage: "/switch <session-id>".to_string(),
                })
            } else {
                Ok(SpecialCommand::SwitchSession(reference.to_string()))
            }
        }

        "/model" => Err(CommandError::MissingArgument {
            command: "/model".to_string(),
            usage: "/model <label>".to_string(),
        }),
        input if input.starts_with("/model ") => {
            let label = trimmed.get(7..).map(str::trim).unwrap_or("");
            if label.is_empty() {
                Err(CommandError::MissingArgument {
                    command: "/model".to_string(),
                    usage: "/model <label>".to_string(),
                })
            } else {
                Ok(SpecialCommand::SwitchModel(label.to_string()))
            }
        }

        "/models" => Ok(SpecialCommand::ListModels),
        input if input.starts_with("/models ") => {
            let arg = input[8..].trim();
            let arg = arg.split_whitespace().next().unwrap_or(arg);
            Err(CommandError::UnsupportedArgument {
                command: "/models".to_string(),
                arg: arg.to_string(),
            })
        }

        "/suggest" => Ok(SpecialCommand::Suggest(None)),
        input if input.starts_with("/suggest ") => {
            let arg = trimmed.get(9..).map(str::trim).unwrap_or("");
            match arg.parse::<usize>() {
                Ok(index) if index >= 1 => Ok(SpecialCommand::Suggest(Some(index))),
                _ => Err(CommandError::UnsupportedArgument {
                    command: "/suggest".to_string(),
                    arg: arg.to_string(),
                }),
            }
        }

        "/status" => Ok(SpecialCommand::ShowStatus),
        "/help" | "/?" => Ok(SpecialCommand::Help),

        "exit" | "quit" | "/exit" | "/quit" => Ok(SpecialCommand::Exit),

        // Unknown command starting with "/"
        input if input.starts_with('/') => {
            let cmd = input.split_whitespace().next().unwrap_or(input);
            Err(CommandError::UnknownCommand(cmd.to_string()))
        }

        // Not a special command
        _ => Ok(SpecialCommand::None),
    }
}

/// Display help text for special commands
pub fn print_help() {
    println!(
        r#"
Special Commands for Interactive Chat
=====================================

SESSIONS:
  /new            - Start a fresh chat session
  /sessions       - List sessions, most recent first
  /switch <id>    - Switch to a session (full id or unique prefix)

MODEL SELECTION:
  /models         - List the configured model labels
  /model <label>  - Select a model label (persisted)

SUGGESTIONS:
  /suggest        - List quick-send suggestions
  /suggest <n>    - Send suggestion number n

SESSION INFORMATION:
  /status         - Show active session and selection status
  /help           - Show this help message
  /?              - Same as /help

SESSION CONTROL:
  exit            - Exit interactive mode
  quit            - Same as exit

NOTES:
  - Command keywords are case-insensitive
  - Regular text (not starting with /) is sent as a prompt
  - The assistant reply arrives after a short simulated delay
"#
    );
}

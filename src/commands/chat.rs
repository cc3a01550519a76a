//! Interactive chat mode handler
//!
//! Runs a readline-based loop over the session store: plain input is sent
//! as a prompt (with the simulated assistant reply printed once its delay
//! elapses), and slash commands manage sessions, the model selection, and
//! quick-send suggestions.

use crate::commands::special::{parse_special_command, print_help, SpecialCommand};
use crate::config::Config;
use crate::error::Result;
use crate::render;
use crate::reply::ReplyStub;
use crate::service::ChatService;
use crate::session::{Role, SessionStore};
use crate::storage::SledStorage;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Start interactive chat mode
///
/// # Arguments
///
/// * `config` - Global configuration (consumed)
/// * `model_override` - Optional model label selected from the CLI; it is
///   persisted like a `/model` selection
pub async fn run_chat(config: Config, model_override: Option<String>) -> Result<()> {
    tracing::info!("Starting interactive chat mode");

    let storage = open_storage(&config)?;
    let mut store = SessionStore::open(storage, &config.chat.default_model)?;

    if let Some(label) = model_override {
        store.set_selected_model(&label)?;
    }

    let store = Arc::new(Mutex::new(store));
    let service = ChatService::new(
        Arc::clone(&store),
        ReplyStub::new(),
        Duration::from_millis(config.chat.reply_delay_ms),
    );

    let mut rl = DefaultEditor::new()?;

    {
        let store = store.lock().await;
        print_welcome_banner(store.selected_model(), store.sessions().len());
        if let Some(session) = store.active_session() {
            render::print_transcript(session);
        }
    }

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                match parse_special_command(trimmed) {
                    Ok(SpecialCommand::NewChat) => {
                        store.lock().await.create_session()?;
                        println!("{}\n", "Started a new chat.".green());
                    }
                    Ok(SpecialCommand::ListSessions) => {
                        let store = store.lock().await;
                        render::print_session_list(store.sessions(), store.active_session_id());
                    }
                    Ok(SpecialCommand::SwitchSession(reference)) => {
                        let mut store = store.lock().await;
                        match store.select_session(&reference) {
                            Some(_) => {
                                if let Some(session) = store.active_session() {
                                    render::print_transcript(session);
                                }
                            }
                            None => {
                                println!(
                                    "{}\n",
                                    format!("No session matches '{}'.", reference).yellow()
                                );
                            }
                        }
                    }
                    Ok(SpecialCommand::SwitchModel(label)) => {
                        store.lock().await.set_selected_model(&label)?;
                        println!("{}\n", format!("Model set to {}.", label).green());
                    }
                    Ok(SpecialCommand::ListModels) => {
                        let store = store.lock().await;
                        print_model_menu(&config, store.selected_model());
                    }
                    Ok(SpecialCommand::Suggest(None)) => {
                        print_suggestions(&config);
                    }
                    Ok(SpecialCommand::Suggest(Some(index))) => {
                        match config.chat.suggestions.get(index - 1) {
                            Some(text) => {
                                let text = text.clone();
                                println!("{}\n", format!("Sending: {}", text).cyan());
                                send_and_wait(&service, &text).await?;
                            }
                            None => {
                                println!(
                                    "{}\n",
                                    format!(
                                        "No suggestion {} (there are {}).",
                                        index,
                                        config.chat.suggestions.len()
                                    )
                                    .yellow()
                                );
                            }
                        }
                    }
                    Ok(SpecialCommand::ShowStatus) => {
                        let store = store.lock().await;
                        print_status_display(&store, config.chat.reply_delay_ms);
                    }
                    Ok(SpecialCommand::Help) => {
                        print_help();
                    }
                    Ok(SpecialCommand::Exit) => break,
                    Ok(SpecialCommand::None) => {
                        rl.add_history_entry(trimmed)?;
                        send_and_wait(&service, trimmed).await?;
                    }
                    Err(e) => {
                        eprintln!("{}\n", e.to_string().red());
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                tracing::error!("Readline error: {:?}", err);
                break;
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Open the session store configured for this run
fn open_storage(config: &Config) -> Result<SledStorage> {
    match &config.storage.path {
        Some(path) => SledStorage::open(path),
        None => SledStorage::open_default(),
    }
}

/// Send a prompt and wait for the simulated reply to land, then print it
///
/// The loop blocks on the reply handle, so the session that received the
/// prompt is still the active one when the reply is printed.
async fn send_and_wait(service: &ChatService, text: &str) -> Result<()> {
    let Some(handle) = service.send_prompt(text).await? else {
        return Ok(());
    };

    println!("{}", "Thinking...".dimmed());
    if handle.await.is_err() {
        tracing::warn!("Reply task panicked");
        return Ok(());
    }

    let store = service.store();
    let store = store.lock().await;
    if let Some(last) = store
        .active_session()
        .and_then(|session| session.messages.last())
    {
        if last.role == Role::Assistant {
            println!("\n{}", render::role_tag(Role::Assistant));
            for line in last.content.lines() {
                println!("  {}", line);
            }
            println!();
        }
    }

    Ok(())
}

/// Display welcome banner at the start of interactive chat mode
fn print_welcome_banner(model: &str, session_count: usize) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Parley Interactive Chat - Welcome!              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Model:    {}", model.cyan());
    println!("Sessions: {}\n", session_count);
    println!("Type '/help' for available commands, 'exit' to quit\n");
}

/// Display the configured model labels, marking the current selection
fn print_model_menu(config: &Config, selected: &str) {
    println!("\nAvailable models:");
    for label in &config.chat.models {
        if label == selected {
            println!("  {} {}", "*".green(), label.bold());
        } else {
            println!("    {}", label);
        }
    }
    if !config.chat.models.iter().any(|l| l == selected) {
        println!("  {} {} {}", "*".green(), selected.bold(), "(custom)".dimmed());
    }
    println!();
}

/// Display the configured quick-send suggestions
fn print_suggestions(config: &Config) {
    if config.chat.suggestions.is_empty() {
        println!("\n{}\n", "No suggestions configured.".yellow());
        return;
    }

    println!("\nSuggestions (send with /suggest <n>):");
    for (i, text) in config.chat.suggestions.iter().enumerate() {
        println!("  {}. {}", i + 1, text);
    }
    println!();
}

/// Display detailed status information about the current session
fn print_status_display(store: &SessionStore, reply_delay_ms: u64) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Parley Session Status                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    match store.active_session() {
        Some(session) => {
            println!("Active Session: {} ({})", session.title, &session.id[..8]);
            println!("Messages:       {}", session.messages.len());
        }
        None => println!("Active Session: none"),
    }
    println!("Total Sessions: {}", store.sessions().len());
    println!("Model:          {}", store.selected_model());
    println!("Reply Delay:    {}ms", reply_delay_ms);
    println!();
}

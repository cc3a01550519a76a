//! Model menu command handler
//!
//! Lists the configured model labels and marks the persisted selection.
//! The labels are free-form display strings; selecting one never changes
//! any behavior beyond the label shown with the session.

use crate::config::Config;
use crate::error::Result;
use crate::storage::SledStorage;
use colored::Colorize;

/// List the configured model labels and the current selection
pub fn list_models(config: &Config) -> Result<()> {
    let storage = match &config.storage.path {
        Some(path) => SledStorage::open(path)?,
        None => SledStorage::open_default()?,
    };

    let selected = storage
        .load_model()?
        .unwrap_or_else(|| config.chat.default_model.clone());

    println!("\nAvailable models:");
    for label in &config.chat.models {
        if *label == selected {
            println!("  {} {}", "*".green(), label.bold());
        } else {
            println!("    {}", label);
        }
    }
    if !config.chat.models.iter().any(|l| *l == selected) {
        println!("  {} {} {}", "*".green(), selected.bold(), "(custom)".dimmed());
    }
    println!();
    println!(
        "Switch with {} inside a chat session.",
        "/model <label>".cyan()
    );
    println!();

    Ok(())
}

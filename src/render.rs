//! Terminal projections of store state
//!
//! Stateless rendering helpers: a transcript printer, a compact session
//! list for the interactive loop, and the relative-time formatting used by
//! both the loop and the history table.

use crate::session::{Role, Session};
use chrono::{DateTime, Utc};
use colored::Colorize;

/// Format a timestamp as a coarse "how long ago" label
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use parley::render::relative_time;
///
/// assert_eq!(relative_time(Utc::now()), "Just now");
/// assert_eq!(relative_time(Utc::now() - Duration::minutes(5)), "5m ago");
/// ```
pub fn relative_time(timestamp: DateTime<Utc>) -> String {
    let diff = Utc::now().signed_duration_since(timestamp);

    let minutes = diff.num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }

    let hours = diff.num_hours();
    if hours < 24 {
        return format!("{}h ago", hours);
    }

    format!("{}d ago", diff.num_days())
}

/// Colored tag shown before each transcript line
pub fn role_tag(role: Role) -> String {
    match role {
        Role::User => format!("[{}]", "you".cyan()),
        Role::Assistant => format!("[{}]", "assistant".green()),
    }
}

/// Print a session's full transcript
///
/// Empty sessions get a short placeholder instead of a blank screen.
pub fn print_transcript(session: &Session) {
    println!("\n{} {}\n", "Session:".bold(), session.title);

    if session.messages.is_empty() {
        println!("{}\n", "No messages yet. Say something to get started.".dimmed());
        return;
    }

    for message in &session.messages {
        println!("{}", role_tag(message.role));
        for line in message.content.lines() {
            println!("  {}", line);
        }
        println!();
    }
}

/// Print the compact session list used by the `/sessions` command
///
/// Sessions are already ordered most recently active first by the store;
/// the active one is marked with an asterisk.
pub fn print_session_list(sessions: &[Session], active_id: Option<&str>) {
    println!();
    for session in sessions {
        let marker = if Some(session.id.as_str()) == active_id {
            "*".green().to_string()
        } else {
            " ".to_string()
        };
        println!(
            "{} {}  {:<40} {}",
            marker,
            session.id[..8].cyan(),
            session.title,
            relative_time(session.updated_at).dimmed()
        );
    }
    println!();
}

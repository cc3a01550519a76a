/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes three top-level command modules:

- `chat`    — Interactive chat mode
- `history` — Read-only session listing and transcripts
- `models`  — Model menu listing

These handlers are intentionally small and use the library components:
the session store, the reply stub, and the chat service.
*/

// Interactive chat loop
pub mod chat;

// History listing and transcripts
pub mod history;

// Model menu
pub mod models;

// Special commands parser for the interactive loop
pub mod special;

//! # linguabot - Per-Contact Translating Chat Relay
//!
//! `linguabot` sits between you and your chat contacts. Messages you send to a
//! contact with a language override are translated into that language and
//! posted back into the conversation; everything else passes through untouched.
//!
//! ## Features
//!
//! - **Per-contact languages**: `set language <lang>` inside a conversation
//! - **Retry with backoff**: Transient provider failures are retried on a doubling schedule
//! - **Caching**: Repeated translations are served from a `SQLite` cache
//! - **Multiple providers**: Any OpenAI-compatible endpoint
//!
//! ## Quick Start
//!
//! ```bash
//! # Start a console relay session with a contact
//! linguabot --contact 34600111222@c.us
//!
//! # Manage stored overrides
//! linguabot prefs set 34600111222@c.us spanish
//! linguabot prefs list
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/linguabot/config.toml`:
//!
//! ```toml
//! [relay]
//! default_language = "english"
//! provider = "ollama"
//! model = "gemma3:12b"
//!
//! [providers.ollama]
//! endpoint = "http://localhost:11434"
//! models = ["gemma3:12b", "llama3.2"]
//! ```

/// Translation cache backed by `SQLite`.
pub mod cache;

/// Console chat transport.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider settings.
pub mod config;

/// File system utilities.
pub mod fs;

/// Tracing subscriber setup.
pub mod logging;

/// XDG-style path utilities for configuration and cache.
pub mod paths;

/// Per-contact language preferences and their storage backends.
pub mod preferences;

/// Message routing and event dispatch.
pub mod relay;

/// Translation client, retry policy and language table.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;

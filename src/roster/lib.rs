//! # Roster Architecture
//!
//! Roster is a **UI-agnostic contact book library**: a validated contact form,
//! a table of saved entries, and a local JSON store. The `roster` binary is one
//! client of it; a GUI or a web front end could be another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, formats output                │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Flow Layer (flow/)                                         │
//! │  - Form state, delete confirmation, table rows              │
//! │  - Session: table → form hand-off, background weather      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store and the notification queue                │
//! │  - One success notification per mutation                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / update / delete / list over a DataStore            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore over a key-value backend                       │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Everything below the CLI takes plain Rust values and returns plain Rust
//! types. It never writes to stdout, never exits the process, and never
//! assumes a terminal. Logging goes through `tracing`; the binary decides
//! where it ends up.
//!
//! ## Testing Strategy
//!
//! 1. **Commands and store**: unit tests against the in-memory backend.
//! 2. **API and flow**: dispatch, notifications and state transitions.
//! 3. **CLI** (`tests/`): the binary end to end against a temp data dir.
//!
//! ## Module Overview
//!
//! - [`api`]: application state facade
//! - [`commands`]: business logic
//! - [`config`]: layered configuration
//! - [`error`]: error type
//! - [`flow`]: form, confirmation, table and session
//! - [`index`]: 1-based row addressing
//! - [`locations`]: country → state → city tables
//! - [`model`]: records and notifications
//! - [`notifications`]: auto-expiring notification queue
//! - [`store`]: persistence
//! - [`validation`]: field rules
//! - [`weather`]: current-weather lookup

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod flow;
pub mod index;
pub mod locations;
pub mod model;
pub mod notifications;
pub mod store;
pub mod validation;
pub mod weather;

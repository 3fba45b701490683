//! # CLI Layer
//!
//! This module is **one possible UI client** for roster. It stands in for the
//! form, the table and the delete dialog of a graphical client.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin prompts)
//! - Handles argument parsing
//! - Installs the tracing subscriber
//! - Formats output for human consumption
//!
//! ## Commands
//!
//! - `roster add --name … --town …`: fill the form and submit it
//! - `roster list` (default): the table
//! - `roster edit <row|id> [--field …]`: load a row into the form, apply overrides, submit
//! - `roster delete <row|id> [--confirm <text>]`: the typed confirmation gate
//! - `roster locations [country [state]]`: cascading select options
//! - `roster validate <field> <value>`: run one field rule
//! - `roster weather <town>`: current conditions
//! - `roster config`: the effective configuration
//!
//! ## Module Structure
//!
//! - `commands`: dispatch, context setup and per-command handlers
//! - `logging`: tracing subscriber setup
//! - `print`: output formatting
//! - `setup`: argument parsing via clap

mod commands;
mod logging;
mod print;
pub mod setup;

pub use commands::run;

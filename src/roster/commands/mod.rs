//! # Command Layer
//!
//! This module contains the **core business logic** of roster. Each command
//! lives in its own submodule as a plain function over a [`DataStore`].
//!
//! ## Role and Responsibilities
//!
//! - Implement the actual logic for each operation
//! - Operate on [`Record`] and friends
//! - Return a structured [`CmdResult`] with affected records and messages
//! - Stay completely UI-agnostic
//!
//! Commands never print, prompt, or exit. Notifications are the API layer's
//! business; commands only report what happened.
//!
//! ## Testing Strategy
//!
//! Command tests use the in-memory store and cover every branch. This is
//! where most of the tests live.
//!
//! ## Command Modules
//!
//! - [`add`]: Append a new record
//! - [`list`]: Snapshot the table
//! - [`update`]: Replace a record by id
//! - [`delete`]: Remove a record by id
//! - [`helpers`]: Row/id resolution
//!
//! [`DataStore`]: crate::store::DataStore

use crate::index::DisplayRecord;
use crate::model::Record;
use serde::Serialize;

pub mod add;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod update;

pub const ADDED_MESSAGE: &str = "Data added successfully";
pub const UPDATED_MESSAGE: &str = "Data updated successfully";
pub const DELETED_MESSAGE: &str = "Data deleted successfully";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<DisplayRecord>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.listed_records = records;
        self
    }
}

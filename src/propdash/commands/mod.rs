//! # Command Layer
//!
//! The core business logic of propdash. Each command lives in its own
//! submodule and implements pure functions over the domain types.
//!
//! Commands are where the real work happens:
//! - Implement the actual logic for each operation
//! - Operate on [`Property`], [`Payment`] and the other domain types
//! - Return a structured [`CmdResult`] with affected records and messages
//! - Are completely UI-agnostic
//!
//! Commands explicitly avoid:
//! - **Any terminal I/O**: no stdout, stderr or formatting concerns
//! - **Argument parsing**: that is the CLI layer's job
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings. The struct carries the
//! records that were modified (`affected_properties`), any payments to
//! display (`listed_payments`), leveled messages, and for the export
//! command the path that was written. List reads do not pass through here:
//! the facade serves them straight from its query cache. The UI layer
//! decides how to render this data.
//!
//! ## Testing Strategy
//!
//! This is where the lion's share of testing lives. Command tests use
//! [`MockStore`](crate::store::MockStore) and verify `CmdResult` contents
//! and error conditions for every branch.
//!
//! ## Command Modules
//!
//! - [`create`]: Add a property from a validated form
//! - [`update`]: Edit an existing property
//! - [`archive`]: Archive a batch of properties
//! - [`remind`]: Send payment reminders for a batch
//! - [`export`]: Render and write the CSV export
//! - [`payments`]: Payment mark-paid and receipt text
//! - [`dashboard`]: KPI block, revenue series and the activity feed

use crate::model::{Payment, Property};
use serde::Serialize;
use std::path::PathBuf;

pub mod archive;
pub mod create;
pub mod dashboard;
pub mod export;
pub mod payments;
pub mod remind;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
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

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_properties: Vec<Property>,
    pub listed_payments: Vec<Payment>,
    pub messages: Vec<CmdMessage>,
    pub export_path: Option<PathBuf>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_properties(mut self, properties: Vec<Property>) -> Self {
        self.affected_properties = properties;
        self
    }
}

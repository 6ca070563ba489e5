//! # Propdash Architecture
//!
//! Propdash is a **UI-agnostic property management library**. This is not a
//! CLI application that happens to have some library code; it is a library
//! that happens to have a CLI client.
//!
//! That distinction drives the entire architecture and should guide all
//! development.
//!
//! ## The Layered Architecture
//!
//! ```text
//! CLI Layer (cli/, wired by main.rs)
//!   Parses arguments, formats output, handles terminal I/O.
//!   The ONLY place that knows about stdout/stderr/exit codes.
//!           |
//!           v
//! API Layer (api.rs)
//!   The Dashboard facade. Owns page state (filters, selection, view
//!   mode) and the tag-invalidated query cache; dispatches bulk actions.
//!           |
//!           v
//! Command Layer (commands/*.rs)
//!   Pure business logic. Operates on Rust types, returns structured
//!   CmdResult values. No I/O assumptions whatsoever.
//!           |
//!           v
//! Storage Layer (store/)
//!   Abstract PropertyStore trait; MockStore serves the seeded fixture
//!   data and applies mutations in memory.
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! The same core could serve a REST API, a desktop shell, or any other UI.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): thorough unit tests of business logic
//!    against `MockStore`. This is where the lion's share of testing lives.
//! 2. **API** (`api.rs`): tests for state coupling (filter changes clearing
//!    the selection), cache behavior and bulk-dispatch rules.
//! 3. **CLI**: end-to-end invocations via `assert_cmd` in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The `Dashboard` facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: Core data types (`Property`, `Payment`, `Contact`, ...)
//! - [`filters`]: The property filter criteria and matching engine
//! - [`state`]: Page state (selection, view mode) and its coupling rules
//! - [`validation`]: Fail-closed property form validation
//! - [`fixtures`]: The seeded mock data set
//! - [`format`]: Currency, percentage and date formatting
//! - [`config`]: User preferences, stored as JSON
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filters;
pub mod fixtures;
pub mod format;
pub mod model;
pub mod state;
pub mod store;
pub mod validation;

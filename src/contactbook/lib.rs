//! # Contactbook Architecture
//!
//! Contactbook is a small, **UI-agnostic contact library** with a command-line
//! client on top. The library never touches the terminal; the binary is the
//! only place that reads input or prints.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, menu.rs, print.rs)            │
//! │  - Subcommands and the interactive numbered menu            │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the loaded book for the session                     │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, CRUD, statistics, CSV export                 │
//! │  - Persists through the store after each mutation           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contact keys
//!
//! Contacts are keyed by their cleaned name: trimmed and title-cased by
//! [`validation::clean_name`]. Every operation that takes a name cleans it
//! first, so `" alice "`, `"ALICE"` and `"Alice"` all address the same
//! contact.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): business logic against `InMemoryStore`.
//! 2. **Store** (`store/fs.rs`): file round trips in temp directories.
//! 3. **API** (`api.rs`): dispatch and persistence behavior.
//! 4. **CLI** (`tests/`): the binary end to end with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Contact`, `ContactMap`, `ContactEntry`)
//! - [`validation`]: Phone, email and name rules
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod validation;

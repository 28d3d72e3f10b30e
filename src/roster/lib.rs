//! # Roster Architecture
//!
//! Roster is a **UI-agnostic student-record library**. The `roster` binary is
//! one client of it; a desktop window or a web form would sit in the same
//! place and call the same API.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts for login, prints tables       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the live collection for one session                 │
//! │  - Checks the Session on every mutation                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / update / delete / search / sort                    │
//! │  - Operates on slices of Student, returns CmdResult         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: load (never fails) / save (overwrite)   │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering and Binary Search
//!
//! Sorting reorders the live collection in place, and binary search depends on
//! that collection being in identifier order. The API never relies on an
//! earlier sort having happened: `search_binary` always sorts by identifier
//! first. The new order is kept and is written out by the next mutation.
//!
//! ## Identifiers Are Not Unique
//!
//! Nothing stops two records sharing an identifier. Lookups and updates take
//! the first match, deletes remove every match, and adding a duplicate only
//! produces a warning message.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Student` and the sort/scope enums
//! - [`validation`]: Identifier and name syntax checks
//! - [`session`]: The single-credential login gate
//! - [`config`]: Configuration management
//! - [`logging`]: Logger bootstrap for binaries
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod session;
pub mod store;
pub mod validation;

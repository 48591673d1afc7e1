//! # Shelf Architecture
//!
//! Shelf keeps a small book catalog in a single JSON file and lets one user
//! add, issue, return, list and search books. The library holds all of that;
//! the `shelf` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the menu, formats output          │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Lookups, transitions, user-facing outcome messages       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Inventory (inventory.rs)                                   │
//! │  - In-memory catalog, load/save policy, journal             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CatalogStore trait                                       │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Outcomes, not exceptions
//!
//! A missing book or a book in the wrong state is an ordinary outcome and
//! comes back as a `CmdMessage` with an error level. Persistence failures are
//! logged to the [`logging::Journal`] and surface as warnings; the in-memory
//! catalog is never rolled back. `Err` is reserved for failures the caller
//! cannot carry on from.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`inventory`]: The process-lifetime owner of the catalog
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Book` and `BookStatus`
//! - [`config`]: Configuration management
//! - [`logging`]: The diagnostic journal
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod model;
pub mod store;

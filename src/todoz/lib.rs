//! # Todoz Architecture
//!
//! Todoz is a small REST API for todo lists. The whole dataset is one JSON
//! document that is read at the start of every request and written back in
//! full when the request succeeds.
//!
//! ## The Four Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (http/, wired by main.rs)                       │
//! │  - Routes, JSON bodies, status codes, CORS                  │
//! │  - The ONLY place that knows about sockets and HTTP         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Brackets each command with load and flush                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over an in-memory Document           │
//! │  - No I/O whatsoever                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DocumentStore trait                             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tests of every operation against fixture documents.
//! 2. **API**: load/flush bracketing, checked with `InMemoryStore`.
//! 3. **Store**: file round-trips in `tests/`, on a temp directory.
//! 4. **HTTP**: the router served on an ephemeral port, driven with raw
//!    HTTP/1.1 requests.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Document`, `TodoList`, `Todo`)
//! - [`http`]: axum router and handlers
//! - [`config`]: Server settings
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod model;
pub mod store;

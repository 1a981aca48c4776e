//! # Polman Architecture
//!
//! Polman is a **UI-agnostic front-end core** for a Polaris-style catalog
//! administration CLI. This is not a terminal application that happens to
//! have some library code—it's a library that happens to ship a terminal
//! client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Front-end (main.rs + args/print, or any other UI)          │
//! │  - Parses arguments, renders tables, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns typed records and structured errors              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validates inputs, builds argv, decodes responses         │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Execution Layer (exec.rs)                                  │
//! │  - Abstract CommandRunner trait                             │
//! │  - ProcessRunner (production), ScriptedRunner (testing)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, command builder, decoder), code:
//! - Takes the session configuration as an explicit argument
//! - Returns regular Rust types (`Result<Vec<CatalogRecord>>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! The only side effect anywhere in the core is the child process the
//! execution layer spawns—and even that sits behind a trait.
//!
//! ## Command Model
//!
//! Every operation is one synchronous Build → Execute → Decode pass:
//! the builder assembles an exact argument vector (never a shell string),
//! the executor runs it and classifies the exit, and the decoder parses
//! JSONL stdout into typed records. Mutating actions skip the decode step
//! entirely; their empty stdout means "accepted", not "no data". Nothing
//! is retried, cached, or diffed against prior state.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Per-resource operation logic
//! - [`command`]: Argument vector construction
//! - [`exec`]: Process execution behind the `CommandRunner` trait
//! - [`decode`]: JSONL response decoding
//! - [`record`]: Typed records the decoder produces
//! - [`session`]: Connection/credential parameters
//! - [`error`]: Error types

pub mod api;
pub mod command;
pub mod commands;
pub mod decode;
pub mod error;
pub mod exec;
pub mod record;
pub mod session;

//! # ddt Architecture
//!
//! ddt is a command-line client for the Datadog v1 Downtimes API: it
//! schedules, inspects, amends and cancels the maintenance windows that
//! suppress monitor alerting.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles exit codes     │
//! │  - The ONLY place that knows about stdout/stderr            │
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
//! │  - Flag-to-payload translation per subcommand               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Remote Layer (remote/)                                     │
//! │  - Abstract DowntimesApi trait                              │
//! │  - DatadogClient (production), InMemoryApi (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, remote trait), code takes regular
//! Rust arguments, returns `Result<CmdResult>`, never writes to
//! stdout/stderr and never calls `std::process::exit`. The one process
//! exit lives in `main.rs`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Flag-to-payload logic for each subcommand
//! - [`remote`]: Remote service boundary and implementations
//! - [`model`]: Core data types (`Downtime`, `DowntimePatch`)
//! - [`duration`]: The `1h30m`-style duration grammar
//! - [`config`]: Credential loading from the environment
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod duration;
pub mod error;
pub mod model;
pub mod remote;

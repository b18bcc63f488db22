//! Single-operator local credential vault CLI.
//!
//! Gates access behind a master identity, appends domain/secret records to a
//! plaintext store, and writes every session action to an append-only audit
//! trail.
//!
//! ## Modules
//! - `cli` — Command-line handlers
//! - `core` — Business logic (session, store, generator, audit)
//! - `models` — Data structures
//! - `util` — Filesystem helpers

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod util;

//! Data structures shared across the crate.

pub mod config;
pub mod identity;
pub mod record;

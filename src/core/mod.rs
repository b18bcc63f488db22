//! Core business logic modules.

pub mod audit;
pub mod config;
pub mod generator;
pub mod identity;
pub mod paths;
pub mod session;
pub mod store;

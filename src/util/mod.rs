//! Filesystem utility helpers.

pub mod fs;

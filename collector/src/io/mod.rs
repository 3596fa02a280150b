//! I/O helpers for the collector data directory.

pub mod clock;
pub mod config;
pub mod export;
pub mod paths;
pub mod store;

//! I/O helpers for the roster: snapshot file, config, paths, confirmation.

pub mod config;
pub mod confirm;
pub mod paths;
pub mod snapshot_store;

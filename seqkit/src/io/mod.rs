//! I/O helpers for seqkit commands.

pub mod config;

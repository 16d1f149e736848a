//! Trackforge CLI library.
//!
//! Command implementations live here so they can be unit tested; the binary
//! in `main.rs` only parses arguments and dispatches.

pub mod commands;

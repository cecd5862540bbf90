//! Design CLI library.
//!
//! Exposes the command handlers and output formatters so they can be
//! exercised directly from tests; the binary in `main.rs` only parses
//! arguments and dispatches here.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod commands;
pub mod formatters;

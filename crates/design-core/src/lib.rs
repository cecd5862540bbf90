//! Core types and the color kernel for design skill tooling.
//!
//! This crate provides the foundational pieces used across all other
//! crates in the workspace.
//!
//! # Architecture
//!
//! The core consists of:
//! - The OKLCH color kernel (parsing, adjustment, contrast evaluation)
//! - The design token model (fixed category set, naming rules)
//! - Error hierarchy with contextual information
//! - CLI primitives (output formats, semantic exit codes)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod error;

pub mod cli;
pub mod color;
pub mod token;

pub use color::{ContrastRating, OklchColor, TextSize};
pub use error::{Error, Result};
pub use token::TokenCategory;

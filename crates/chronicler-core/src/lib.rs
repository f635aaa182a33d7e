//! Chronicler Core - Core library for changelog management
//!
//! This crate provides the error types, configuration, and file/environment
//! plumbing shared by the changelog engine and the CLI.

pub mod config;
pub mod error;
pub mod types;
pub mod workflow;

pub use error::{ChangelogError, ChroniclerError, ConfigError, Result};
pub use types::{Dialect, HeadingStyle};

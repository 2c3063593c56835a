//! Core utilities for exportsweep tools.
//!
//! This crate provides shared functionality for scanning TypeScript projects
//! as plain text, including:
//! - Collecting source files below a root directory
//! - Decoding file contents without failing on malformed UTF-8
//! - Caching decoded text for the duration of a run
//! - Reading the optional JSON settings file

mod collector;
mod config;
mod constants;
mod source;

// Re-export public API
pub use collector::{CollectorConfig, collect_sources};
pub use config::{Settings, read_settings};
pub use constants::SOURCE_SUFFIXES;
pub use source::{SourceCache, decode_lossy, read_source};

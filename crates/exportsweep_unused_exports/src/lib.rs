//! Unused export detection for TypeScript projects.
//!
//! This crate scans `.ts`/`.tsx` files as plain text, extracts exported
//! identifiers with regular expressions, and reports exports whose name never
//! appears in any other scanned file. It is a heuristic: a name counts as
//! used if it occurs anywhere in another file, even as part of a longer
//! identifier, and references inside the defining file are ignored.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use clap::Parser;
//! use exportsweep_unused_exports::{Config, run_unused_exports_check};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config::parse_from(["unused-exports", "--root", "/path/to/project/src"]);
//!
//! let result = run_unused_exports_check(cfg)?;
//!
//! // Use buffered output for better performance
//! let mut stdout = BufWriter::new(std::io::stdout());
//! exportsweep_unused_exports::print_findings(&mut stdout, &result.findings)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod checker;
mod config;
mod constants;
mod reporter;
mod rules;
mod types;
mod usage;

// Re-export public API
pub use checker::run_unused_exports_check;
pub use config::Config;
pub use constants::{DEFAULT_ROOT, FRAMEWORK_EXPORTS};
pub use reporter::{print_findings, print_summary};
pub use types::{CheckResult, ExportKind, ExportRecord, Finding};

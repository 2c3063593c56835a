use std::io::{self, Write};

use colored::Colorize;
use log::debug;

use crate::types::{CheckResult, Finding};

/// Write one `UNUSED EXPORT` line per finding, in the order given.
pub fn print_findings<W: Write>(writer: &mut W, findings: &[Finding]) -> io::Result<()> {
    debug!("Printing {} findings", findings.len());
    for finding in findings {
        writeln!(writer, "UNUSED EXPORT: {} in {}", finding.name, finding.file.display())?;
    }
    writer.flush()?;
    Ok(())
}

pub fn print_summary<W: Write>(
    writer: &mut W,
    result: &CheckResult,
    elapsed_ms: u128,
    num_threads: usize,
) -> io::Result<()> {
    let unused = result.findings.len();
    let unused = if unused == 0 {
        unused.to_string().green().bold()
    } else {
        unused.to_string().yellow().bold()
    };

    writeln!(
        writer,
        "{} Finished in {}ms on {} files ({} exports, {} unused, using {} threads).",
        "●".bright_blue(),
        elapsed_ms.to_string().cyan(),
        result.files_scanned.to_string().cyan(),
        result.exports_found.to_string().cyan(),
        unused,
        num_threads.to_string().cyan()
    )?;
    writer.flush()?;
    Ok(())
}

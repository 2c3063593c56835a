use anyhow::Result;
use clap::{Parser, Subcommand};
use exportsweep_unused_exports::Config;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "exportsweep")]
#[command(about = "Find dead exports in TypeScript codebases", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Report exports whose name never appears in another file
    UnusedExports(Config),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::UnusedExports(cfg) => {
            let num_threads = rayon::current_num_threads();
            info!("Running unused exports check (using {} threads)", num_threads);
            debug!("Config: root={:?}, config={:?}", cfg.root, cfg.config);

            let quiet = cfg.quiet;
            let fail_on_unused = cfg.fail_on_unused;

            let result = exportsweep_unused_exports::run_unused_exports_check(cfg)?;
            debug!("Found {} unused exports", result.findings.len());

            exportsweep_unused_exports::print_findings(&mut stdout, &result.findings)?;
            stdout.flush()?;

            let elapsed_ms = start.elapsed().as_millis();
            if !quiet {
                // Keep stdout to report lines only
                let mut stderr = std::io::stderr().lock();
                exportsweep_unused_exports::print_summary(
                    &mut stderr,
                    &result,
                    elapsed_ms,
                    num_threads,
                )?;
            }

            if fail_on_unused && !result.findings.is_empty() {
                info!("Unused exports found, exiting with failure");
                // Non-zero exit to fail CI
                std::process::exit(1);
            }

            Ok(())
        }
    }
}

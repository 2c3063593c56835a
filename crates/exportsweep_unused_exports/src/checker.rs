use anyhow::Result;
use exportsweep_core::{CollectorConfig, SourceCache, collect_sources};
use log::{debug, info, trace, warn};
use rayon::prelude::*;
use std::thread;

use crate::{
    config::Config,
    rules::extract_exports,
    types::{CheckResult, ExportRecord, Finding},
    usage::is_used,
};

pub fn run_unused_exports_check(mut cfg: Config) -> Result<CheckResult> {
    info!("Starting unused exports check");

    // Resolve settings file, exemptions and suffixes
    cfg.initialize()?;

    debug!("Collecting source files with suffixes: {:?}", cfg.suffixes);
    let collector_cfg = CollectorConfig {
        root: cfg.root.clone(),
        suffixes: cfg.suffixes.clone(),
        respect_ignore_files: cfg.gitignore,
    };

    let files = collect_sources(&collector_cfg);
    if files.is_empty() {
        warn!("No source files found under {}", cfg.root.display());
        return Ok(CheckResult { findings: Vec::new(), files_scanned: 0, exports_found: 0 });
    }
    info!("Found {} source files", files.len());

    // Each file is decoded once and shared by extraction and every usage test
    let cache = SourceCache::new();

    let exports: Vec<ExportRecord> = files
        .par_iter()
        .flat_map(|file| {
            let thread_id = thread::current().id();
            trace!("Thread {:?} extracting exports from: {}", thread_id, file.display());
            let text = cache.text(file);
            let records = extract_exports(file, &text);
            debug!("{} exports in {}", records.len(), file.display());
            records
        })
        .collect();
    info!("Extracted {} exports", exports.len());

    let findings: Vec<Finding> = exports
        .par_iter()
        .filter(|record| {
            if cfg.is_exempt(&record.name) {
                trace!("Skipping exempt export '{}' in {}", record.name, record.file.display());
                return false;
            }
            !is_used(record, &files, &cache)
        })
        .map(|record| Finding { name: record.name.clone(), file: record.file.clone() })
        .collect();

    info!("Unused exports check complete. Found {} unused exports", findings.len());
    debug!("Cache statistics: sources={}", cache.len());

    Ok(CheckResult { findings, files_scanned: files.len(), exports_found: exports.len() })
}

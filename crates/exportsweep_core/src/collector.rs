use ignore::WalkBuilder;
use log::{debug, trace, warn};
use std::path::{Path, PathBuf};

pub struct CollectorConfig {
    pub root: PathBuf,
    /// File name suffixes that qualify a file, e.g. `.ts`
    pub suffixes: Vec<String>,
    /// Honour `.gitignore`/`.ignore` files and skip hidden entries
    pub respect_ignore_files: bool,
}

pub fn collect_sources(cfg: &CollectorConfig) -> Vec<PathBuf> {
    debug!("Collecting source files");
    let mut files: Vec<PathBuf> = Vec::new();
    let root = &cfg.root;
    debug!("Walking directory tree from root: {}", root.display());

    let filtered = cfg.respect_ignore_files;
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(filtered)
        .parents(filtered)
        .ignore(filtered)
        .git_ignore(filtered)
        .git_exclude(filtered)
        .require_git(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for res in walker {
        let dent = match res {
            Ok(dent) => dent,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };
        let p = dent.path();
        if !p.is_file() {
            continue;
        }

        if has_source_suffix(p, &cfg.suffixes) {
            trace!("Found source file: {}", p.display());
            files.push(p.to_path_buf());
        } else {
            trace!("Skipping non-source file: {}", p.display());
        }
    }
    debug!("Collected {} source files", files.len());
    files
}

fn has_source_suffix(path: &Path, suffixes: &[String]) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();
    suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
}

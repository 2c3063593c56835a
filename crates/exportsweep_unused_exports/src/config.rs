use anyhow::Result;
use clap::Parser;
use exportsweep_core::{SOURCE_SUFFIXES, Settings, read_settings};
use log::{debug, info, trace};
use std::{collections::HashSet, path::PathBuf};

use crate::constants::{DEFAULT_ROOT, FRAMEWORK_EXPORTS};

#[derive(Debug, Clone, Parser)]
#[command(name = "unused-exports")]
#[command(about = "Report TypeScript exports that no other file mentions")]
pub struct Config {
    /// Root directory to scan
    #[arg(long, default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Export name to always treat as used (repeatable)
    #[arg(long = "allow", value_name = "NAME")]
    pub allow: Vec<String>,

    /// File name suffix to scan, replacing the defaults (repeatable)
    #[arg(long = "extension", value_name = "SUFFIX")]
    pub extensions: Vec<String>,

    /// JSON settings file with `allow` and `extensions` arrays
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip files matched by .gitignore/.ignore and hidden entries
    #[arg(long)]
    pub gitignore: bool,

    /// Exit with status 1 when unused exports are found
    #[arg(long)]
    pub fail_on_unused: bool,

    /// Do not print the summary line
    #[arg(long, short)]
    pub quiet: bool,

    /// Names treated as used, resolved by `initialize`
    #[clap(skip)]
    pub exempt: HashSet<String>,

    /// Effective suffix list, resolved by `initialize`
    #[clap(skip)]
    pub suffixes: Vec<String>,
}

impl Config {
    /// Merge the settings file (if any) with the command line and resolve
    /// the exemption set and suffix list.
    ///
    /// Command-line suffixes win over the settings file, which wins over the
    /// built-in defaults. Allowed names from every source are combined with
    /// the built-in framework names.
    pub fn initialize(&mut self) -> Result<()> {
        let settings = match &self.config {
            Some(path) => read_settings(path)?,
            None => {
                debug!("No settings file given");
                Settings::default()
            }
        };

        self.exempt = FRAMEWORK_EXPORTS
            .iter()
            .map(|name| name.to_string())
            .chain(self.allow.iter().cloned())
            .chain(settings.allow)
            .collect();
        trace!("Exempt names: {:?}", self.exempt);

        let suffixes = if !self.extensions.is_empty() {
            self.extensions.clone()
        } else if !settings.extensions.is_empty() {
            settings.extensions
        } else {
            SOURCE_SUFFIXES.iter().map(|s| s.to_string()).collect()
        };
        self.suffixes = suffixes.iter().map(|s| normalize_suffix(s)).collect();

        info!("Using root directory: {}", self.root.display());
        debug!("Scanning suffixes {:?} with {} exempt names", self.suffixes, self.exempt.len());
        Ok(())
    }

    pub fn is_exempt(&self, name: &str) -> bool {
        self.exempt.contains(name)
    }
}

fn normalize_suffix(suffix: &str) -> String {
    if suffix.starts_with('.') { suffix.to_string() } else { format!(".{}", suffix) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, path::Path};
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["unused-exports"];
        argv.extend_from_slice(args);
        Config::parse_from(argv)
    }

    fn write_settings(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("exportsweep.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let mut cfg = parse(&[]);
        assert_eq!(cfg.root, PathBuf::from("OpenKanban/src"));
        assert!(!cfg.gitignore);
        assert!(!cfg.fail_on_unused);

        cfg.initialize().unwrap();
        assert_eq!(cfg.suffixes, vec![".ts", ".tsx"]);
        assert_eq!(cfg.exempt.len(), FRAMEWORK_EXPORTS.len());
        assert!(cfg.is_exempt("generateStaticParams"));
        assert!(!cfg.is_exempt("Metadata"));
    }

    #[test]
    fn test_allow_flags_extend_framework_names() {
        let mut cfg = parse(&["--allow", "loader", "--allow", "action"]);
        cfg.initialize().unwrap();

        assert!(cfg.is_exempt("loader"));
        assert!(cfg.is_exempt("action"));
        assert!(cfg.is_exempt("metadata"));
    }

    #[test]
    fn test_extension_flags_replace_defaults() {
        let mut cfg = parse(&["--extension", "mts", "--extension", ".cts"]);
        cfg.initialize().unwrap();

        assert_eq!(cfg.suffixes, vec![".mts", ".cts"]);
    }

    #[test]
    fn test_settings_file_merged() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_settings(
            temp_dir.path(),
            r#"{ "allow": ["revalidate"], "extensions": [".tsx"] }"#,
        );

        let mut cfg = parse(&["--config", path.to_str().unwrap(), "--allow", "loader"]);
        cfg.initialize().unwrap();

        assert!(cfg.is_exempt("revalidate"));
        assert!(cfg.is_exempt("loader"));
        assert!(cfg.is_exempt("viewport"));
        assert_eq!(cfg.suffixes, vec![".tsx"]);
    }

    #[test]
    fn test_cli_extensions_win_over_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_settings(temp_dir.path(), r#"{ "extensions": [".tsx"] }"#);

        let mut cfg = parse(&["--config", path.to_str().unwrap(), "--extension", ".ts"]);
        cfg.initialize().unwrap();

        assert_eq!(cfg.suffixes, vec![".ts"]);
    }

    #[test]
    fn test_invalid_settings_file_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_settings(temp_dir.path(), "{ not json");

        let mut cfg = parse(&["--config", path.to_str().unwrap()]);
        assert!(cfg.initialize().is_err());
    }

    #[test]
    fn test_initialize_is_repeatable() {
        let mut cfg = parse(&["--allow", "loader"]);
        cfg.initialize().unwrap();
        cfg.initialize().unwrap();

        assert_eq!(cfg.exempt.len(), FRAMEWORK_EXPORTS.len() + 1);
        assert_eq!(cfg.suffixes, vec![".ts", ".tsx"]);
    }
}

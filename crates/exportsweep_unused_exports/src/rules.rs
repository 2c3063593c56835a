//! Textual export extraction.
//!
//! Exports are found with a small ordered table of regex rules applied to a
//! file's full text. There is no tokenizer: a match inside a comment or a
//! string literal counts the same as a real declaration.

use log::trace;
use regex::Regex;
use std::{path::Path, sync::LazyLock};

use crate::types::{ExportKind, ExportRecord};

#[derive(Debug, Clone, Copy)]
enum MatchMode {
    /// Every non-overlapping match
    All,
    /// Only the first match in the file
    First,
}

struct ExportRule {
    kind: ExportKind,
    pattern: Regex,
    /// Capture group holding the identifier
    group: usize,
    mode: MatchMode,
}

static EXPORT_RULES: LazyLock<[ExportRule; 2]> = LazyLock::new(|| {
    [
        ExportRule {
            kind: ExportKind::Named,
            pattern: Regex::new(
                r"export (?:const|function|interface|type|enum|class) ([a-zA-Z0-9_]+)",
            )
            .unwrap(),
            group: 1,
            mode: MatchMode::All,
        },
        ExportRule {
            kind: ExportKind::Default,
            pattern: Regex::new(r"export default (?:function|class) ([a-zA-Z0-9_]+)").unwrap(),
            group: 1,
            mode: MatchMode::First,
        },
    ]
});

/// Extract export records from `text`, rule by rule.
///
/// All named exports come first in order of appearance, followed by at most
/// one named default export.
pub(crate) fn extract_exports(file: &Path, text: &str) -> Vec<ExportRecord> {
    let mut records = Vec::new();

    for rule in EXPORT_RULES.iter() {
        let limit = match rule.mode {
            MatchMode::All => usize::MAX,
            MatchMode::First => 1,
        };

        let names = rule
            .pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(rule.group))
            .take(limit);

        for name in names {
            trace!("Found {:?} export '{}' in {}", rule.kind, name.as_str(), file.display());
            records.push(ExportRecord {
                name: name.as_str().to_string(),
                file: file.to_path_buf(),
                kind: rule.kind,
            });
        }
    }

    records
}

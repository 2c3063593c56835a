use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// `export const|function|interface|type|enum|class <name>`
    Named,
    /// `export default function|class <name>`
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord {
    pub name: String,
    pub file: PathBuf,
    pub kind: ExportKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub name: String,
    pub file: PathBuf,
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub findings: Vec<Finding>,
    pub files_scanned: usize,
    pub exports_found: usize,
}

/// Root scanned when `--root` is not given
pub const DEFAULT_ROOT: &str = "OpenKanban/src";

/// Export names that Next.js reads by convention from route modules.
///
/// Nothing in the project imports them, so a textual search never finds a
/// usage.
pub const FRAMEWORK_EXPORTS: &[&str] = &["metadata", "viewport", "config", "generateStaticParams"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_exports() {
        assert_eq!(FRAMEWORK_EXPORTS.len(), 4);
        for name in ["metadata", "viewport", "config", "generateStaticParams"] {
            assert!(FRAMEWORK_EXPORTS.contains(&name), "missing '{}'", name);
        }
    }
}

//! File name suffixes recognised as TypeScript sources.
//!
//! Matching is done against the end of the file name rather than the parsed
//! extension, so declaration files (`.d.ts`) and a bare `.ts` file name are
//! both picked up.

/// Suffixes of files that are scanned when no override is configured
pub const SOURCE_SUFFIXES: &[&str] = &[
    ".ts",  // TypeScript
    ".tsx", // TypeScript with JSX
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_suffixes_are_typescript_only() {
        assert_eq!(SOURCE_SUFFIXES, &[".ts", ".tsx"]);
    }

    #[test]
    fn test_source_suffixes_start_with_dot() {
        for suffix in SOURCE_SUFFIXES {
            assert!(suffix.starts_with('.'), "suffix '{}' should start with a dot", suffix);
        }
    }
}

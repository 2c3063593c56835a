use anyhow::{Context, Result};
use dashmap::DashMap;
use log::{debug, trace, warn};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

/// Decode bytes as UTF-8, dropping invalid sequences instead of replacing them.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        if !chunk.invalid().is_empty() {
            trace!("Dropping {} invalid UTF-8 bytes", chunk.invalid().len());
        }
    }
    text
}

pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(decode_lossy(&bytes))
}

/// Decoded file contents, loaded at most once per path.
///
/// Unreadable files are cached as empty text so they contribute neither
/// exports nor usages.
#[derive(Debug, Default)]
pub struct SourceCache {
    texts: DashMap<PathBuf, Arc<str>>,
}

impl SourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, path: &Path) -> Arc<str> {
        if let Some(text) = self.texts.get(path) {
            trace!("Cache hit for source: {}", path.display());
            return Arc::clone(&text);
        }

        trace!("Reading source: {}", path.display());
        let text: Arc<str> = match read_source(path) {
            Ok(text) => Arc::from(text),
            Err(e) => {
                warn!("{:#}", e);
                Arc::from("")
            }
        };
        debug!("Loaded {} bytes from {}", text.len(), path.display());
        self.texts.insert(path.to_path_buf(), Arc::clone(&text));
        text
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

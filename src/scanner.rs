use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glob::Pattern;
use sha2::{Digest, Sha256};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub bytes: Vec<u8>,
    pub digest: String, // hex sha256 of bytes
}

impl FileEntry {
    pub fn new(name: String, bytes: Vec<u8>) -> Self {
        let digest = hex::encode(Sha256::digest(&bytes));
        Self {
            name,
            bytes,
            digest,
        }
    }
}

fn is_ignored(name: &str, patterns: &[Pattern]) -> bool {
    if [".git", "__pycache__", ".DS_Store", "Thumbs.db"].contains(&name) {
        return true;
    }
    patterns.iter().any(|pat| pat.matches(name))
}

/// List the regular files directly inside `root`, sorted by name, with
/// their full contents.
pub fn scan_dir(root: &Path, patterns: &[Pattern]) -> Result<Vec<FileEntry>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to scan {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_ignored(&name, patterns) {
            continue;
        }
        let bytes = fs::read(entry.path())
            .with_context(|| format!("Failed to read {}", entry.path().display()))?;
        files.push(FileEntry::new(name, bytes));
    }

    Ok(files)
}

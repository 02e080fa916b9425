//! Page-write cache for incremental builds.
//!
//! Rendering the whole site is cheap; rewriting every file is not free for
//! deploy tooling that syncs by modification time. This module lets the
//! generate stage skip writing a file whose bytes are identical to what the
//! previous build wrote.
//!
//! ## Cache keys
//!
//! Entries are keyed by output path relative to the output directory
//! (`services/branding/index.html`) and store the SHA-256 of the bytes last
//! written there. A write is skipped when:
//! 1. An entry for the path exists with the same content hash
//! 2. The file is still on disk
//!
//! ## Storage
//!
//! The manifest is a JSON file at `<output_dir>/.page-cache.json`, so it
//! travels with the output directory when cached in CI.
//!
//! ## Bypassing the cache
//!
//! `build --no-cache` starts from an empty manifest: every file is written.

use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the cache manifest file within the output directory.
const MANIFEST_FILENAME: &str = ".page-cache.json";

/// Bump to invalidate every existing manifest when the format changes.
const MANIFEST_VERSION: u32 = 1;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PageCache {
    pub version: u32,
    /// Relative output path → content hash.
    pub entries: HashMap<String, String>,
}

/// What [`PageCache::write`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

impl PageCache {
    pub fn empty() -> Self {
        Self {
            version: MANIFEST_VERSION,
            entries: HashMap::new(),
        }
    }

    /// Load from the output directory. A missing, corrupt, or outdated
    /// manifest yields an empty cache.
    pub fn load(output_dir: &Path) -> Self {
        let Ok(content) = fs::read_to_string(manifest_path(output_dir)) else {
            return Self::empty();
        };
        match serde_json::from_str::<Self>(&content) {
            Ok(cache) if cache.version == MANIFEST_VERSION => cache,
            _ => Self::empty(),
        }
    }

    pub fn save(&self, output_dir: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(manifest_path(output_dir), json)
    }

    /// Keep the tracked paths for pruning but forget their hashes, so every
    /// file is rewritten on the next [`write`](Self::write).
    pub fn forget_hashes(&mut self) {
        for hash in self.entries.values_mut() {
            hash.clear();
        }
    }

    /// Whether `rel_path` was last written with content hashing to `hash`
    /// and is still on disk.
    pub fn is_current(&self, rel_path: &str, hash: &str, output_dir: &Path) -> bool {
        self.entries.get(rel_path).map(String::as_str) == Some(hash)
            && output_dir.join(rel_path).exists()
    }

    /// Write `bytes` to `output_dir/rel_path` unless the cache says the file
    /// is already current. Parent directories are created as needed.
    pub fn write(
        &mut self,
        output_dir: &Path,
        rel_path: &str,
        bytes: &[u8],
        stats: &mut CacheStats,
    ) -> io::Result<WriteOutcome> {
        let hash = hash_bytes(bytes);
        if self.is_current(rel_path, &hash, output_dir) {
            stats.unchanged();
            return Ok(WriteOutcome::Unchanged);
        }
        let target = output_dir.join(rel_path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, bytes)?;
        self.entries.insert(rel_path.to_string(), hash);
        stats.written();
        Ok(WriteOutcome::Written)
    }

    /// Drop entries for paths not in `keep` and delete those files.
    ///
    /// Returns the number of files removed.
    pub fn prune(&mut self, output_dir: &Path, keep: &[String]) -> io::Result<u32> {
        let stale: Vec<String> = self
            .entries
            .keys()
            .filter(|path| !keep.contains(*path))
            .cloned()
            .collect();
        let mut removed = 0;
        for path in stale {
            self.entries.remove(&path);
            let file = output_dir.join(&path);
            if file.exists() {
                fs::remove_file(file)?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}

/// SHA-256 of `bytes` as lowercase hex.
pub fn hash_bytes(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// Summary of cache performance for a build run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub unchanged: u32,
    pub written: u32,
}

impl CacheStats {
    pub fn unchanged(&mut self) {
        self.unchanged += 1;
    }

    pub fn written(&mut self) {
        self.written += 1;
    }

    pub fn total(&self) -> u32 {
        self.unchanged + self.written
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unchanged > 0 {
            write!(
                f,
                "{} unchanged, {} written ({} total)",
                self.unchanged,
                self.written,
                self.total()
            )
        } else {
            write!(f, "{} written", self.written)
        }
    }
}

pub fn manifest_path(output_dir: &Path) -> PathBuf {
    output_dir.join(MANIFEST_FILENAME)
}

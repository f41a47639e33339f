//! Response cache module
//!
//! Cache-first policy over the upstream registry: a lookup URL seen before
//! is answered from the cache file without a network call, and every fetched
//! response is stored. There is no TTL or eviction; `eemis-lookup cache
//! --clear` is the only invalidation.

use crate::error::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const CACHE_FILE_NAME: &str = "response-cache.json";

/// Cache file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseCache {
    /// Version for compatibility checks
    version: u32,
    /// Lookup URL -> cached response
    entries: HashMap<String, CacheEntry>,
}

/// One cached upstream response, stored after the reserved status field
/// has been stripped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// RFC 3339 fetch timestamp
    pub fetched_at: String,
    pub record: Map<String, Value>,
}

impl ResponseCache {
    const CURRENT_VERSION: u32 = 1;

    /// Default cache location under the user cache directory.
    pub fn default_path() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("eemis-lookup")
            .join(CACHE_FILE_NAME)
    }

    /// Load the cache file; any unreadable or version-mismatched file is
    /// treated as empty and regenerated on the next save.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let file = match File::open(path) {
            Ok(f) => f,
            Err(_) => return Self::default(),
        };

        let reader = BufReader::new(file);
        match serde_json::from_reader::<_, ResponseCache>(reader) {
            Ok(cache) => {
                if cache.version != Self::CURRENT_VERSION {
                    log::warn!("response cache version mismatch, regenerating");
                    return Self::default();
                }
                cache
            }
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn get(&self, url: &str) -> Option<&Map<String, Value>> {
        self.entries.get(url).map(|e| &e.record)
    }

    pub fn insert(&mut self, url: String, record: Map<String, Value>) {
        self.entries.insert(
            url,
            CacheEntry {
                fetched_at: Utc::now().to_rfc3339(),
                record,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Delete the cache file. Returns whether a file existed.
    pub fn clear(path: &Path) -> Result<bool> {
        if path.exists() {
            std::fs::remove_file(path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            entries: HashMap::new(),
        }
    }
}

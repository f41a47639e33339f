//! Response cache tests
//!
//! Exercises the cache-first storage the dispatcher consults before the
//! network.

use eemis_lookup::dispatcher::ResponseCache;
use serde_json::{json, Map, Value};
use tempfile::tempdir;

fn record(name: &str) -> Map<String, Value> {
    json!({"name": name}).as_object().unwrap().clone()
}

/// Empty cache file
#[test]
fn test_cache_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let cache = ResponseCache::load(&dir.path().join("response-cache.json"));

    assert_eq!(cache.len(), 0);
    assert!(cache.is_empty());
}

/// Save and reload
#[test]
fn test_cache_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("response-cache.json");

    let mut cache = ResponseCache::load(&path);
    cache.insert(
        "https://registry.example/api_route?tin=1000123456".to_string(),
        record("Jane"),
    );
    cache.save(&path).expect("cache save failed");

    let loaded = ResponseCache::load(&path);
    assert_eq!(loaded.len(), 1);

    let cached = loaded
        .get("https://registry.example/api_route?tin=1000123456")
        .expect("cache entry missing");
    assert_eq!(cached.get("name"), Some(&json!("Jane")));
}

/// Hit and miss are keyed by the full lookup URL
#[test]
fn test_cache_hit_and_miss() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("response-cache.json");

    let mut cache = ResponseCache::load(&path);
    cache.insert("https://r.example/api_route?nin=CM1".to_string(), record("A"));

    assert!(cache.get("https://r.example/api_route?nin=CM1").is_some());
    // Same identifier under another parameter is a different entry
    assert!(cache.get("https://r.example/api_route?tin=CM1").is_none());
}

/// Re-inserting the same URL overwrites in place
#[test]
fn test_cache_overwrite() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("response-cache.json");
    let url = "https://r.example/api_route?tin=1000123456";

    let mut cache = ResponseCache::load(&path);
    cache.insert(url.to_string(), record("before"));
    cache.insert(url.to_string(), record("after"));

    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(url).unwrap().get("name"), Some(&json!("after")));
}

/// A corrupted cache file is treated as empty
#[test]
fn test_cache_corrupted_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("response-cache.json");

    std::fs::write(&path, "{ invalid json }").unwrap();

    let cache = ResponseCache::load(&path);
    assert!(cache.is_empty());
}

/// Clearing deletes the file; clearing again reports nothing to do
#[test]
fn test_cache_clear() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("response-cache.json");

    let mut cache = ResponseCache::load(&path);
    cache.insert("https://r.example/api_route?nin=CM1".to_string(), record("A"));
    cache.save(&path).expect("cache save failed");
    assert!(path.exists());

    assert!(ResponseCache::clear(&path).unwrap());
    assert!(!path.exists());
    assert!(!ResponseCache::clear(&path).unwrap());
}

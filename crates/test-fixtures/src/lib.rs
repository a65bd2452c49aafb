//! Golden fixture loader shared by the Regula integration suites.
//!
//! Fixtures live inside this crate (`golden/{retrieval,grounding,diff}/`)
//! and are addressed by crate-relative paths, so every test binary in the
//! workspace loads the same files no matter where it runs from.

use std::path::PathBuf;

use serde::de::DeserializeOwned;

/// Fixture tree root, anchored to this crate's manifest dir at compile time.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Deserialize a JSON fixture into `T`.
///
/// # Panics
/// Panics on a missing file or a shape mismatch; fixtures are test inputs
/// and a broken one should fail loudly.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let raw = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("fixture {} unreadable: {e}", path.display()));
    serde_json::from_str(&raw)
        .unwrap_or_else(|e| panic!("fixture {} malformed: {e}", path.display()))
}

/// Load a fixture as an untyped [`serde_json::Value`].
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Whether a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// All `.json` files directly under a fixture subdirectory, sorted by path.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    let Ok(entries) = std::fs::read_dir(&dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

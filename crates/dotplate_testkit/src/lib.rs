//! Shared test helpers for workspace crates.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Create a fresh scratch directory, removed when dropped.
pub fn scratch_dir() -> TempDir {
	tempfile::Builder::new().prefix("dotplate-test.").tempdir().expect("scratch dir is created")
}

/// Write `contents` to `dir/name` and return the full path.
pub fn write_file(dir: &Path, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
	let path = dir.join(name);
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).expect("scratch parent dir is created");
	}
	fs::write(&path, contents).expect("scratch file is written");
	path
}

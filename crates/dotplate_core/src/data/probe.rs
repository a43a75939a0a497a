use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::UNIX_EPOCH;

use crate::data::{DataError, Record, Result, Value};

/// Outcome of probing a path without reading it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Existence {
	/// Something exists at the path.
	Present,
	/// Nothing exists at the path, or the probe failed for another reason.
	Absent,
	/// The path could not be inspected because access was denied.
	Denied,
}

/// Subset of filesystem metadata exposed to templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
	/// Final path component.
	pub name: String,
	/// Size in bytes.
	pub size: u64,
	/// Modification time in whole seconds since the UNIX epoch, 0 when unknown.
	pub modified: u64,
	/// `true` for directories.
	pub is_dir: bool,
	/// `true` when the write permission is missing.
	pub readonly: bool,
}

impl From<FileMetadata> for Value {
	fn from(meta: FileMetadata) -> Self {
		let mut record = Record::new();
		record.push("name", Value::String(meta.name));
		record.push("size", Value::U64(meta.size));
		record.push("modified", Value::U64(meta.modified));
		record.push("is_dir", Value::Bool(meta.is_dir));
		record.push("readonly", Value::Bool(meta.readonly));
		Value::Record(record)
	}
}

/// Probe `path`, keeping permission failures distinct from absence.
pub fn probe_path(path: &Path) -> Existence {
	if path.as_os_str().is_empty() {
		return Existence::Absent;
	}
	match fs::metadata(path) {
		Ok(_) => Existence::Present,
		Err(err) if err.kind() == ErrorKind::PermissionDenied => Existence::Denied,
		Err(_) => Existence::Absent,
	}
}

/// Whether a file or directory exists at `path`. Never fails.
pub fn file_exists(path: &Path) -> bool {
	match probe_path(path) {
		Existence::Present => true,
		Existence::Absent => false,
		Existence::Denied => {
			tracing::warn!(path = %path.display(), "permission denied while probing path, reporting it as absent");
			false
		}
	}
}

/// Stat `path`.
pub fn file_stat(path: &Path) -> Result<FileMetadata> {
	if path.as_os_str().is_empty() {
		return Err(DataError::MissingProbePath { function: "fileStat" });
	}
	let meta = fs::metadata(path).map_err(|source| DataError::Probe {
		function: "fileStat",
		path: path.to_path_buf(),
		source,
	})?;

	let modified = meta
		.modified()
		.ok()
		.and_then(|time| time.duration_since(UNIX_EPOCH).ok())
		.map_or(0, |since| since.as_secs());
	let name = path.file_name().map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());

	Ok(FileMetadata {
		name,
		size: meta.len(),
		modified,
		is_dir: meta.is_dir(),
		readonly: meta.permissions().readonly(),
	})
}

/// Read any file into a [`Value::Bytes`].
pub fn read_bytes(path: &Path) -> Result<Value> {
	if path.as_os_str().is_empty() {
		return Err(DataError::MissingProbePath { function: "fileRead" });
	}
	fs::read(path).map(Value::Bytes).map_err(|source| DataError::Probe {
		function: "fileRead",
		path: path.to_path_buf(),
		source,
	})
}

#[cfg(test)]
mod tests;

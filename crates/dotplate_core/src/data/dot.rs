use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::data::{DataError, DataFormat, Value};

/// Where the root ("dot") value comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DotSource {
	/// No root data; templates see a null dot.
	#[default]
	None,
	/// Read from a file.
	File(PathBuf),
	/// Inline literal; `\n` escapes are expanded before reading.
	Inline(String),
}

/// Errors produced while resolving the root value.
#[derive(Debug, Error)]
pub enum ResolveError {
	/// Both a file and an inline string were supplied.
	#[error("use either a dot file or a dot string, not both")]
	ConflictingSources,
	/// Inline data could not be materialized.
	#[error("dot string: unable to write temporary file, error=[{0}]")]
	TempFile(#[source] std::io::Error),
	/// Selector or reader failure.
	#[error(transparent)]
	Data(#[from] DataError),
}

impl DotSource {
	/// Build a source from the two mutually exclusive options.
	pub fn from_parts(file: Option<PathBuf>, inline: Option<String>) -> Result<Self, ResolveError> {
		match (file, inline) {
			(Some(_), Some(_)) => Err(ResolveError::ConflictingSources),
			(Some(path), None) => Ok(DotSource::File(path)),
			(None, Some(text)) => Ok(DotSource::Inline(text)),
			(None, None) => Ok(DotSource::None),
		}
	}
}

/// Resolve the root value, reading it as `type_name` (case-insensitive).
pub fn resolve_root_value(source: &DotSource, type_name: &str) -> Result<Value, ResolveError> {
	resolve_root_value_in(source, type_name, &std::env::temp_dir())
}

/// Like [`resolve_root_value`], materializing inline data under `temp_dir`.
pub(crate) fn resolve_root_value_in(source: &DotSource, type_name: &str, temp_dir: &Path) -> Result<Value, ResolveError> {
	if *source == DotSource::None {
		return Ok(Value::Null);
	}
	let format: DataFormat = type_name.parse()?;

	match source {
		DotSource::None => Ok(Value::Null),
		DotSource::File(path) => Ok(format.read(path)?),
		DotSource::Inline(text) => {
			// Removed when `temp` drops, on every path out of this block.
			let mut temp = tempfile::Builder::new()
				.prefix("dotstring.")
				.suffix(".txt")
				.tempfile_in(temp_dir)
				.map_err(ResolveError::TempFile)?;
			temp.write_all(expand_newlines(text).as_bytes()).map_err(ResolveError::TempFile)?;
			temp.flush().map_err(ResolveError::TempFile)?;
			let temp = temp.into_temp_path();
			tracing::debug!(path = %temp.display(), format = format.as_str(), "materialized dot string");

			Ok(format.read(&temp)?)
		}
	}
}

fn expand_newlines(text: &str) -> String {
	text.replace("\\n", "\n")
}

#[cfg(test)]
mod tests;

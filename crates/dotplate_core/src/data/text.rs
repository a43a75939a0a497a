use std::path::Path;

use crate::data::format::load_bytes;
use crate::data::{DataFormat, Result, Value};

/// Read a whole file unchanged.
///
/// Valid UTF-8 comes back as [`Value::String`], anything else as
/// [`Value::Bytes`] so the content still round-trips byte for byte.
pub fn read_text(path: &Path) -> Result<Value> {
	let raw = load_bytes(DataFormat::Text, path)?;
	Ok(match String::from_utf8(raw) {
		Ok(text) => Value::String(text),
		Err(err) => Value::Bytes(err.into_bytes()),
	})
}

/// Read a file as one string per line, line terminators removed.
pub fn read_lines(path: &Path) -> Result<Value> {
	let raw = load_bytes(DataFormat::Lines, path)?;
	let text = String::from_utf8_lossy(&raw);
	Ok(Value::Array(text.lines().map(Value::from).collect()))
}

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::data::{DataError, Result, Value, markup, object, tabular, text};

/// Serialization format understood by the readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataFormat {
	/// JSON object document.
	Json,
	/// YAML mapping document.
	Yaml,
	/// TOML document.
	Toml,
	/// CSV as raw rows.
	Csv,
	/// CSV as header-keyed records.
	CsvMap,
	/// XML document, root element unwrapped.
	Xml,
	/// Whole file as one string.
	Text,
	/// One string per line.
	Lines,
}

impl DataFormat {
	/// Every format, in selector-table order.
	pub const ALL: [DataFormat; 8] = [
		DataFormat::Json,
		DataFormat::Yaml,
		DataFormat::Toml,
		DataFormat::Csv,
		DataFormat::CsvMap,
		DataFormat::Xml,
		DataFormat::Text,
		DataFormat::Lines,
	];

	/// Lower-case selector accepted by [`FromStr`].
	pub fn as_str(self) -> &'static str {
		match self {
			DataFormat::Json => "json",
			DataFormat::Yaml => "yaml",
			DataFormat::Toml => "toml",
			DataFormat::Csv => "csv",
			DataFormat::CsvMap => "csvmap",
			DataFormat::Xml => "xml",
			DataFormat::Text => "text",
			DataFormat::Lines => "lines",
		}
	}

	/// Read `path` with the reader for this format.
	pub fn read(self, path: &Path) -> Result<Value> {
		tracing::debug!(format = self.as_str(), path = %path.display(), "reading data file");
		match self {
			DataFormat::Json => object::read_json(path),
			DataFormat::Yaml => object::read_yaml(path),
			DataFormat::Toml => object::read_toml(path),
			DataFormat::Csv => tabular::read_csv(path),
			DataFormat::CsvMap => tabular::read_csv_map(path),
			DataFormat::Xml => markup::read_xml(path),
			DataFormat::Text => text::read_text(path),
			DataFormat::Lines => text::read_lines(path),
		}
	}
}

/// Label used in diagnostics and in the `read*` template function names.
impl fmt::Display for DataFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			DataFormat::Json => "JSON",
			DataFormat::Yaml => "YAML",
			DataFormat::Toml => "TOML",
			DataFormat::Csv => "CSV",
			DataFormat::CsvMap => "CSVMap",
			DataFormat::Xml => "XML",
			DataFormat::Text => "Text",
			DataFormat::Lines => "Lines",
		})
	}
}

impl FromStr for DataFormat {
	type Err = DataError;

	fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
		DataFormat::ALL
			.into_iter()
			.find(|format| format.as_str().eq_ignore_ascii_case(value))
			.ok_or_else(|| DataError::UnsupportedType { value: value.to_owned() })
	}
}

/// Reject empty paths, then read the whole file.
pub(crate) fn load_bytes(format: DataFormat, path: &Path) -> Result<Vec<u8>> {
	if path.as_os_str().is_empty() {
		return Err(DataError::MissingPath { format });
	}
	fs::read(path).map_err(|err| DataError::io(format, path, err))
}

use std::path::PathBuf;

use thiserror::Error;

use crate::data::DataFormat;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors produced while loading data files into [`Value`](crate::data::Value)s.
#[derive(Debug, Error)]
pub enum DataError {
	/// Reader was called without a path.
	#[error("read{format} needs a filename")]
	MissingPath {
		/// Reader that rejected the call.
		format: DataFormat,
	},
	/// File could not be opened or read to completion.
	#[error("unable to read {format} file, file=[{}], error=[{source}]", .path.display())]
	Io {
		/// Reader that attempted the read.
		format: DataFormat,
		/// File being read.
		path: PathBuf,
		/// Underlying filesystem error.
		#[source]
		source: std::io::Error,
	},
	/// File content is not valid for the requested format.
	#[error("unable to parse {format} data, file=[{}], error=[{source}]", .path.display())]
	Parse {
		/// Reader that rejected the content.
		format: DataFormat,
		/// File being parsed.
		path: PathBuf,
		/// Original parser diagnostic.
		#[source]
		source: Box<dyn std::error::Error + Send + Sync>,
	},
	/// Format selector did not name a known format.
	#[error("unsupported data type, type=[{value}]")]
	UnsupportedType {
		/// Selector as supplied by the caller.
		value: String,
	},
	/// Filesystem probe failed.
	#[error("{function}: unable to access file, file=[{}], error=[{source}]", .path.display())]
	Probe {
		/// Probe that failed.
		function: &'static str,
		/// Probed path.
		path: PathBuf,
		/// Underlying filesystem error.
		#[source]
		source: std::io::Error,
	},
	/// No template function with this name.
	#[error("unknown template function {name}")]
	UnknownFunction {
		/// Requested name.
		name: String,
	},
	/// Probe was called without a path.
	#[error("{function} needs a filename")]
	MissingProbePath {
		/// Probe that rejected the call.
		function: &'static str,
	},
}

impl DataError {
	pub(crate) fn io(format: DataFormat, path: &std::path::Path, source: std::io::Error) -> Self {
		Self::Io {
			format,
			path: path.to_path_buf(),
			source,
		}
	}

	pub(crate) fn parse(format: DataFormat, path: &std::path::Path, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
		Self::Parse {
			format,
			path: path.to_path_buf(),
			source: source.into(),
		}
	}
}

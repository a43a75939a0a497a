mod dot;
mod error;
mod format;
mod markup;
mod object;
mod probe;
mod tabular;
mod text;
mod value;

/// Dot-data source selection and root value resolution.
pub use dot::{DotSource, ResolveError, resolve_root_value};
/// Error and result aliases.
pub use error::{DataError, Result};
/// Format selector and dispatch.
pub use format::DataFormat;
/// XML reader.
pub use markup::read_xml;
/// JSON, YAML and TOML readers.
pub use object::{read_json, read_toml, read_yaml};
/// Filesystem probes exposed to templates.
pub use probe::{Existence, FileMetadata, file_exists, file_stat, probe_path, read_bytes};
/// CSV readers.
pub use tabular::{read_csv, read_csv_map};
/// Plain text and line-list readers.
pub use text::{read_lines, read_text};
/// Unified value model.
pub use value::{Field, Record, Value};

//! Functions callable from template bodies.
//!
//! The table is plain data: names map to [`TemplateFn`] values that carry no
//! state, so one registry can be bound into any template engine and called
//! from several threads at once.

use std::path::Path;

use crate::data::{self, DataError, DataFormat, Result, Value};

/// Content type a trusted string is marked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trust {
	/// HTML fragment.
	Html,
	/// CSS fragment.
	Css,
	/// JavaScript fragment.
	Js,
	/// URL.
	Url,
}

/// What a registry entry does when called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFn {
	/// Read the path with a format reader.
	Read(DataFormat),
	/// `true` when the path exists.
	Exists,
	/// File metadata record.
	Stat,
	/// Raw file bytes.
	ReadBytes,
	/// Return the argument marked as trusted content.
	Trust(Trust),
}

/// Result of calling a registry entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
	/// Plain data.
	Data(Value),
	/// Argument string marked as trusted, to be emitted without escaping.
	Trusted(Trust, String),
}

/// One named entry of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionEntry {
	/// Name visible to templates.
	pub name: &'static str,
	/// Behavior.
	pub function: TemplateFn,
}

/// Fixed name-to-function table.
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
	entries: Vec<FunctionEntry>,
}

impl FunctionRegistry {
	/// The standard table exposed to every template.
	pub fn standard() -> Self {
		let mut entries: Vec<FunctionEntry> = [
			("readJSON", DataFormat::Json),
			("readYAML", DataFormat::Yaml),
			("readCSV", DataFormat::Csv),
			("readCSVMap", DataFormat::CsvMap),
			("readText", DataFormat::Text),
			("readLines", DataFormat::Lines),
			("readXML", DataFormat::Xml),
			("readTOML", DataFormat::Toml),
		]
		.into_iter()
		.map(|(name, format)| FunctionEntry {
			name,
			function: TemplateFn::Read(format),
		})
		.collect();

		entries.extend([
			FunctionEntry {
				name: "fileExists",
				function: TemplateFn::Exists,
			},
			FunctionEntry {
				name: "fileStat",
				function: TemplateFn::Stat,
			},
			FunctionEntry {
				name: "fileRead",
				function: TemplateFn::ReadBytes,
			},
			FunctionEntry {
				name: "toTypeHTML",
				function: TemplateFn::Trust(Trust::Html),
			},
			FunctionEntry {
				name: "toTypeCSS",
				function: TemplateFn::Trust(Trust::Css),
			},
			FunctionEntry {
				name: "toTypeJS",
				function: TemplateFn::Trust(Trust::Js),
			},
			FunctionEntry {
				name: "toTypeURL",
				function: TemplateFn::Trust(Trust::Url),
			},
		]);

		Self { entries }
	}

	/// Entries in table order.
	pub fn iter(&self) -> impl Iterator<Item = &FunctionEntry> {
		self.entries.iter()
	}

	/// Entry names in table order.
	pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.entries.iter().map(|entry| entry.name)
	}

	/// Function registered under `name`, matched exactly.
	pub fn get(&self, name: &str) -> Option<TemplateFn> {
		self.entries.iter().find(|entry| entry.name == name).map(|entry| entry.function)
	}

	/// Call the entry named `name` with its single string argument.
	pub fn call(&self, name: &str, arg: &str) -> Result<Output> {
		let function = self.get(name).ok_or_else(|| DataError::UnknownFunction { name: name.to_owned() })?;
		function.call(arg)
	}
}

impl TemplateFn {
	/// Run the function against `arg`.
	pub fn call(self, arg: &str) -> Result<Output> {
		let path = Path::new(arg);
		match self {
			TemplateFn::Read(format) => format.read(path).map(Output::Data),
			TemplateFn::Exists => Ok(Output::Data(Value::Bool(data::file_exists(path)))),
			TemplateFn::Stat => data::file_stat(path).map(|meta| Output::Data(meta.into())),
			TemplateFn::ReadBytes => data::read_bytes(path).map(Output::Data),
			TemplateFn::Trust(trust) => Ok(Output::Trusted(trust, arg.to_owned())),
		}
	}
}

#[cfg(test)]
mod tests;

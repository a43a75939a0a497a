//! Readers for the key/value document formats: JSON, YAML and TOML.
//!
//! All three require a mapping at the document root and return it as a
//! [`Record`]. Arrays or scalars at the root are rejected.

use std::path::Path;

use crate::data::format::load_bytes;
use crate::data::{DataError, DataFormat, Record, Result, Value};

/// Read a JSON object document.
pub fn read_json(path: &Path) -> Result<Value> {
	let raw = load_bytes(DataFormat::Json, path)?;
	let root: serde_json::Map<String, serde_json::Value> =
		serde_json::from_slice(&raw).map_err(|err| DataError::parse(DataFormat::Json, path, err))?;
	Ok(Value::Record(root.into_iter().map(|(key, value)| (key, from_json(value))).collect()))
}

/// Read a YAML mapping document. An empty document is an empty record.
pub fn read_yaml(path: &Path) -> Result<Value> {
	let raw = load_bytes(DataFormat::Yaml, path)?;
	if raw.trim_ascii().is_empty() {
		return Ok(Value::Record(Record::new()));
	}
	let doc: serde_yaml::Value = serde_yaml::from_slice(&raw).map_err(|err| DataError::parse(DataFormat::Yaml, path, err))?;
	match doc {
		serde_yaml::Value::Null => Ok(Value::Record(Record::new())),
		serde_yaml::Value::Mapping(mapping) => Ok(Value::Record(yaml_mapping(mapping))),
		other => Err(DataError::parse(DataFormat::Yaml, path, root_error("mapping", yaml_kind(&other)))),
	}
}

/// Read a TOML document.
pub fn read_toml(path: &Path) -> Result<Value> {
	let raw = load_bytes(DataFormat::Toml, path)?;
	let text = std::str::from_utf8(&raw).map_err(|err| DataError::parse(DataFormat::Toml, path, err))?;
	let table: toml::Table = toml::from_str(text).map_err(|err| DataError::parse(DataFormat::Toml, path, err))?;
	Ok(Value::Record(toml_table(table)))
}

fn root_error(expected: &str, got: &str) -> String {
	format!("document root must be a {expected}, got {got}")
}

fn from_json(value: serde_json::Value) -> Value {
	match value {
		serde_json::Value::Null => Value::Null,
		serde_json::Value::Bool(flag) => Value::Bool(flag),
		serde_json::Value::Number(number) => json_number(&number),
		serde_json::Value::String(text) => Value::String(text),
		serde_json::Value::Array(items) => Value::Array(items.into_iter().map(from_json).collect()),
		serde_json::Value::Object(map) => Value::Record(map.into_iter().map(|(key, value)| (key, from_json(value))).collect()),
	}
}

fn json_number(number: &serde_json::Number) -> Value {
	if let Some(signed) = number.as_i64() {
		Value::I64(signed)
	} else if let Some(unsigned) = number.as_u64() {
		Value::U64(unsigned)
	} else {
		Value::F64(number.as_f64().unwrap_or(f64::NAN))
	}
}

fn from_yaml(value: serde_yaml::Value) -> Value {
	match value {
		serde_yaml::Value::Null => Value::Null,
		serde_yaml::Value::Bool(flag) => Value::Bool(flag),
		serde_yaml::Value::Number(number) => yaml_number(&number),
		serde_yaml::Value::String(text) => Value::String(text),
		serde_yaml::Value::Sequence(items) => Value::Array(items.into_iter().map(from_yaml).collect()),
		serde_yaml::Value::Mapping(mapping) => Value::Record(yaml_mapping(mapping)),
		serde_yaml::Value::Tagged(tagged) => from_yaml(tagged.value),
	}
}

fn yaml_mapping(mapping: serde_yaml::Mapping) -> Record {
	mapping.into_iter().map(|(key, value)| (yaml_key(key), from_yaml(value))).collect()
}

fn yaml_number(number: &serde_yaml::Number) -> Value {
	if let Some(signed) = number.as_i64() {
		Value::I64(signed)
	} else if let Some(unsigned) = number.as_u64() {
		Value::U64(unsigned)
	} else {
		Value::F64(number.as_f64().unwrap_or(f64::NAN))
	}
}

// Mapping keys may be any YAML node; records need text keys.
fn yaml_key(key: serde_yaml::Value) -> String {
	match key {
		serde_yaml::Value::String(text) => text,
		serde_yaml::Value::Null => "null".to_owned(),
		serde_yaml::Value::Bool(flag) => flag.to_string(),
		serde_yaml::Value::Number(number) => number.to_string(),
		serde_yaml::Value::Tagged(tagged) => yaml_key(tagged.value),
		other => serde_yaml::to_string(&other).map(|text| text.trim_end().to_owned()).unwrap_or_default(),
	}
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
	match value {
		serde_yaml::Value::Null => "null",
		serde_yaml::Value::Bool(_) => "bool",
		serde_yaml::Value::Number(_) => "number",
		serde_yaml::Value::String(_) => "string",
		serde_yaml::Value::Sequence(_) => "sequence",
		serde_yaml::Value::Mapping(_) => "mapping",
		serde_yaml::Value::Tagged(_) => "tagged value",
	}
}

fn from_toml(value: toml::Value) -> Value {
	match value {
		toml::Value::String(text) => Value::String(text),
		toml::Value::Integer(number) => Value::I64(number),
		toml::Value::Float(number) => Value::F64(number),
		toml::Value::Boolean(flag) => Value::Bool(flag),
		toml::Value::Datetime(datetime) => Value::String(datetime.to_string()),
		toml::Value::Array(items) => Value::Array(items.into_iter().map(from_toml).collect()),
		toml::Value::Table(table) => Value::Record(toml_table(table)),
	}
}

fn toml_table(table: toml::Table) -> Record {
	table.into_iter().map(|(key, value)| (key, from_toml(value))).collect()
}

//! XML reader.
//!
//! The document is parsed into a small element tree and then folded into a
//! [`Value`]:
//!
//! - an element without attributes or child elements becomes its trimmed text;
//! - otherwise it becomes a record holding `-attribute` keys, then one key per
//!   child element name (repeated names collapse into a list), then `#text`
//!   for any remaining non-blank text.
//!
//! The root element itself is unwrapped: the reader returns its record.

use std::path::Path;

use quick_xml::Reader;
use quick_xml::escape::resolve_xml_entity;
use quick_xml::events::Event;

use crate::data::format::load_bytes;
use crate::data::{DataError, DataFormat, Record, Result, Value};

/// Key prefix for attributes.
const ATTR_PREFIX: char = '-';
/// Key for text mixed with child elements.
const TEXT_KEY: &str = "#text";

/// Read an XML document and return the content of its root element.
pub fn read_xml(path: &Path) -> Result<Value> {
	let raw = load_bytes(DataFormat::Xml, path)?;
	let root = parse_tree(&raw).map_err(|err| DataError::parse(DataFormat::Xml, path, err))?;

	match element_value(root) {
		Value::Record(record) => Ok(Value::Record(record)),
		Value::String(text) if text.is_empty() => Ok(Value::Record(Record::new())),
		_ => Err(DataError::parse(DataFormat::Xml, path, "root element holds only text, expected child elements")),
	}
}

#[derive(Debug, Default)]
struct Element {
	name: String,
	attributes: Vec<(String, String)>,
	children: Vec<Element>,
	text: String,
}

fn parse_tree(input: &[u8]) -> std::result::Result<Element, String> {
	let mut reader = Reader::from_reader(input);
	reader.config_mut().trim_text(false);

	let mut buf = Vec::new();
	let mut stack: Vec<Element> = Vec::new();
	let mut root: Option<Element> = None;

	loop {
		buf.clear();
		let event = reader
			.read_event_into(&mut buf)
			.map_err(|err| format!("{err} at position {}", reader.error_position()))?;

		match event {
			Event::Start(ref start) | Event::Empty(ref start) => {
				let name = utf8(start.name().as_ref())?;
				let mut attributes = Vec::new();
				for attr in start.attributes() {
					let attr = attr.map_err(|err| err.to_string())?;
					let key = utf8(attr.key.as_ref())?;
					let value = attr.decode_and_unescape_value(reader.decoder()).map_err(|err| err.to_string())?;
					attributes.push((key, value.into_owned()));
				}
				let element = Element {
					name,
					attributes,
					..Element::default()
				};

				if matches!(event, Event::Start(_)) {
					stack.push(element);
				} else {
					attach(&mut stack, element, &mut root)?;
				}
			}
			Event::End(_) => {
				let element = stack.pop().ok_or("unbalanced closing tag")?;
				attach(&mut stack, element, &mut root)?;
			}
			Event::Text(text) => {
				let decoded = text.decode().map_err(|err| err.to_string())?;
				push_text(&mut stack, &decoded)?;
			}
			Event::CData(data) => {
				let decoded = utf8(data.as_ref())?;
				push_text(&mut stack, &decoded)?;
			}
			Event::GeneralRef(reference) => {
				let resolved = match reference.resolve_char_ref().map_err(|err| err.to_string())? {
					Some(ch) => ch.to_string(),
					None => named_entity(&reference.decode().map_err(|err| err.to_string())?)?,
				};
				push_text(&mut stack, &resolved)?;
			}
			Event::Eof => break,
			_ => {}
		}
	}

	if !stack.is_empty() {
		return Err("unclosed element at end of document".to_owned());
	}
	root.ok_or_else(|| "document has no root element".to_owned())
}

fn attach(stack: &mut [Element], element: Element, root: &mut Option<Element>) -> std::result::Result<(), String> {
	if let Some(parent) = stack.last_mut() {
		parent.children.push(element);
	} else if root.is_none() {
		*root = Some(element);
	} else {
		return Err(format!("document has more than one root element (second: <{}>)", element.name));
	}
	Ok(())
}

fn push_text(stack: &mut [Element], text: &str) -> std::result::Result<(), String> {
	match stack.last_mut() {
		Some(current) => current.text.push_str(text),
		None if text.trim().is_empty() => {}
		None => return Err("text outside of the root element".to_owned()),
	}
	Ok(())
}

fn named_entity(raw: &str) -> std::result::Result<String, String> {
	resolve_xml_entity(raw).map(str::to_owned).ok_or_else(|| format!("unknown entity &{raw};"))
}

fn utf8(bytes: &[u8]) -> std::result::Result<String, String> {
	std::str::from_utf8(bytes).map(str::to_owned).map_err(|err| err.to_string())
}

fn element_value(element: Element) -> Value {
	let text = element.text.trim();
	if element.attributes.is_empty() && element.children.is_empty() {
		return Value::String(text.to_owned());
	}

	let mut record = Record::new();
	for (key, value) in element.attributes {
		record.push(format!("{ATTR_PREFIX}{key}"), Value::String(value));
	}
	for child in element.children {
		let name = child.name.clone();
		let value = element_value(child);
		match record.get_mut(&name) {
			Some(Value::Array(items)) => items.push(value),
			Some(existing) => {
				let first = std::mem::replace(existing, Value::Null);
				*existing = Value::Array(vec![first, value]);
			}
			None => record.push(name, value),
		}
	}
	if !text.is_empty() {
		record.push(TEXT_KEY, Value::String(text.to_owned()));
	}
	Value::Record(record)
}

#[cfg(test)]
mod tests;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Format-independent data shape produced by every reader.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// No data.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar.
	I64(i64),
	/// Unsigned integer scalar that does not fit `i64`.
	U64(u64),
	/// Floating point scalar.
	F64(f64),
	/// Text scalar.
	String(String),
	/// Raw byte scalar.
	Bytes(Vec<u8>),
	/// Ordered sequence.
	Array(Vec<Value>),
	/// Ordered key/value record.
	Record(Record),
}

/// Ordered list of named fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
	/// Fields in source order.
	pub fields: Vec<Field>,
}

/// One named entry of a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
	/// Field key.
	pub name: String,
	/// Field value.
	pub value: Value,
}

impl Value {
	/// Short label for the value's variant.
	pub fn kind(&self) -> &'static str {
		match self {
			Value::Null => "null",
			Value::Bool(_) => "bool",
			Value::I64(_) | Value::U64(_) => "integer",
			Value::F64(_) => "float",
			Value::String(_) => "string",
			Value::Bytes(_) => "bytes",
			Value::Array(_) => "array",
			Value::Record(_) => "record",
		}
	}

	/// `true` for [`Value::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// Borrow the text of a [`Value::String`].
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(text) => Some(text),
			_ => None,
		}
	}

	/// Borrow the items of a [`Value::Array`].
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Value::Array(items) => Some(items),
			_ => None,
		}
	}

	/// Borrow the fields of a [`Value::Record`].
	pub fn as_record(&self) -> Option<&Record> {
		match self {
			Value::Record(record) => Some(record),
			_ => None,
		}
	}

	/// Look up `name` when this value is a record.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.as_record().and_then(|record| record.get(name))
	}
}

impl Record {
	/// Empty record.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of fields.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// `true` when there are no fields.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// First field named `name`.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.fields.iter().find(|field| field.name == name).map(|field| &field.value)
	}

	/// Mutable access to the first field named `name`.
	pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
		self.fields.iter_mut().find(|field| field.name == name).map(|field| &mut field.value)
	}

	/// Append a field without checking for an existing key.
	pub fn push(&mut self, name: impl Into<String>, value: Value) {
		self.fields.push(Field { name: name.into(), value });
	}

	/// Field keys in order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(|field| field.name.as_str())
	}
}

impl FromIterator<(String, Value)> for Record {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		Self {
			fields: iter.into_iter().map(|(name, value)| Field { name, value }).collect(),
		}
	}
}

impl From<Record> for Value {
	fn from(record: Record) -> Self {
		Value::Record(record)
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Value::Array(items)
	}
}

impl From<String> for Value {
	fn from(text: String) -> Self {
		Value::String(text)
	}
}

impl From<&str> for Value {
	fn from(text: &str) -> Self {
		Value::String(text.to_owned())
	}
}

impl From<bool> for Value {
	fn from(flag: bool) -> Self {
		Value::Bool(flag)
	}
}

impl From<i64> for Value {
	fn from(number: i64) -> Self {
		Value::I64(number)
	}
}

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self {
			Value::Null => serializer.serialize_unit(),
			Value::Bool(flag) => serializer.serialize_bool(*flag),
			Value::I64(number) => serializer.serialize_i64(*number),
			Value::U64(number) => serializer.serialize_u64(*number),
			Value::F64(number) => serializer.serialize_f64(*number),
			Value::String(text) => serializer.serialize_str(text),
			Value::Bytes(bytes) => serializer.serialize_bytes(bytes),
			Value::Array(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Value::Record(record) => record.serialize(serializer),
		}
	}
}

impl Serialize for Record {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.fields.len()))?;
		for field in &self.fields {
			map.serialize_entry(&field.name, &field.value)?;
		}
		map.end()
	}
}

use std::path::Path;

use crate::data::format::load_bytes;
use crate::data::{DataError, DataFormat, Record, Result, Value};

/// Read every CSV row, header included, as a list of string lists.
pub fn read_csv(path: &Path) -> Result<Value> {
	let rows = read_rows(DataFormat::Csv, path)?;
	Ok(Value::Array(
		rows.into_iter().map(|row| Value::Array(row.into_iter().map(Value::String).collect())).collect(),
	))
}

/// Read CSV rows as records keyed by the trimmed cells of the first row.
///
/// Short rows yield records with only the leading keys; cells beyond the
/// header width are dropped.
pub fn read_csv_map(path: &Path) -> Result<Value> {
	let mut rows = read_rows(DataFormat::CsvMap, path)?.into_iter();
	let Some(header) = rows.next() else {
		return Ok(Value::Array(Vec::new()));
	};
	let header: Vec<String> = header.iter().map(|cell| cell.trim().to_owned()).collect();

	let mut records = Vec::new();
	for (line, row) in rows.enumerate() {
		if row.len() > header.len() {
			tracing::debug!(
				path = %path.display(),
				row = line + 2,
				cells = row.len(),
				header = header.len(),
				"dropping cells beyond header width"
			);
		}
		let record: Record = header.iter().cloned().zip(row.into_iter().map(Value::String)).collect();
		records.push(Value::Record(record));
	}
	Ok(Value::Array(records))
}

fn read_rows(format: DataFormat, path: &Path) -> Result<Vec<Vec<String>>> {
	let raw = load_bytes(format, path)?;
	check_quoting(&raw).map_err(|detail| DataError::parse(format, path, detail))?;
	let mut reader = csv::ReaderBuilder::new().has_headers(false).flexible(true).from_reader(raw.as_slice());

	let mut rows = Vec::new();
	for record in reader.records() {
		let record = record.map_err(|err| DataError::parse(format, path, err))?;
		rows.push(record.iter().map(str::to_owned).collect());
	}
	Ok(rows)
}

/// Reject quoting the `csv` tokenizer would otherwise repair: a quote
/// inside an unquoted field, text after a closing quote, and a quoted
/// field left open at end of input.
fn check_quoting(raw: &[u8]) -> std::result::Result<(), String> {
	let mut line = 1;
	let mut field_start = true;
	let mut quoted_since: Option<usize> = None;
	let mut after_close = false;

	let mut bytes = raw.iter().copied().peekable();
	while let Some(byte) = bytes.next() {
		if quoted_since.is_some() {
			match byte {
				b'"' if bytes.peek() == Some(&b'"') => {
					bytes.next();
				}
				b'"' => {
					quoted_since = None;
					after_close = true;
				}
				b'\n' => line += 1,
				_ => {}
			}
			continue;
		}

		match byte {
			b',' | b'\r' => {
				field_start = true;
				after_close = false;
			}
			b'\n' => {
				line += 1;
				field_start = true;
				after_close = false;
			}
			_ if after_close => return Err(format!("unexpected character after closing quote on line {line}")),
			b'"' if field_start => {
				quoted_since = Some(line);
				field_start = false;
			}
			b'"' => return Err(format!("bare quote inside unquoted field on line {line}")),
			_ => field_start = false,
		}
	}

	match quoted_since {
		Some(opened) => Err(format!("quoted field opened on line {opened} is never closed")),
		None => Ok(()),
	}
}

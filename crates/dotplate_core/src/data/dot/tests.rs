use std::fs;
use std::path::{Path, PathBuf};

use dotplate_testkit::{scratch_dir, write_file};

use super::{DotSource, ResolveError, resolve_root_value, resolve_root_value_in};
use crate::data::{DataError, Record, Value};

fn leftovers(dir: &Path) -> Vec<PathBuf> {
	fs::read_dir(dir).expect("temp dir lists").map(|entry| entry.expect("entry reads").path()).collect()
}

#[test]
fn inline_json_resolves_to_record() {
	let temp = scratch_dir();
	let source = DotSource::Inline(r#"{"forum":"meta.discourse.org","topic":69776}"#.to_owned());

	let value = resolve_root_value_in(&source, "json", temp.path()).expect("inline json resolves");

	let expected: Record = [("forum".to_owned(), Value::from("meta.discourse.org")), ("topic".to_owned(), Value::I64(69776))]
		.into_iter()
		.collect();
	let mut record = value.as_record().cloned().expect("root is a record");
	record.fields.sort_by(|left, right| left.name.cmp(&right.name));
	assert_eq!(record, expected);
	assert!(leftovers(temp.path()).is_empty(), "temporary file should be removed");
}

#[test]
fn inline_lines_expand_escaped_newlines() {
	let temp = scratch_dir();
	let source = DotSource::Inline("meta.discourse.org\\n69776".to_owned());

	let value = resolve_root_value_in(&source, "lines", temp.path()).expect("inline lines resolve");

	assert_eq!(value, Value::from(vec![Value::from("meta.discourse.org"), Value::from("69776")]));
}

#[test]
fn empty_inline_lines_is_empty_sequence() {
	let temp = scratch_dir();
	let value = resolve_root_value_in(&DotSource::Inline(String::new()), "lines", temp.path()).expect("empty string resolves");

	assert_eq!(value, Value::Array(Vec::new()));
}

#[test]
fn csv_map_file_resolves_with_short_rows() {
	let dir = scratch_dir();
	let path = write_file(dir.path(), "data.csv", "a,b\n1,2\n3\n");

	let value = resolve_root_value(&DotSource::File(path), "CSVMap").expect("csvmap file resolves");

	let first: Record = [("a".to_owned(), Value::from("1")), ("b".to_owned(), Value::from("2"))].into_iter().collect();
	let second: Record = [("a".to_owned(), Value::from("3"))].into_iter().collect();
	assert_eq!(value, Value::Array(vec![Value::Record(first), Value::Record(second)]));
}

#[test]
fn no_source_is_null_without_parsing_type() {
	let value = resolve_root_value(&DotSource::None, "not-a-type").expect("absent data resolves");
	assert!(value.is_null());
}

#[test]
fn unknown_type_is_rejected_before_materializing() {
	let temp = scratch_dir();
	let err = resolve_root_value_in(&DotSource::Inline("x".to_owned()), "ini", temp.path()).expect_err("unknown type fails");

	assert!(matches!(&err, ResolveError::Data(DataError::UnsupportedType { value }) if value == "ini"));
	assert_eq!(err.to_string(), "unsupported data type, type=[ini]");
	assert!(leftovers(temp.path()).is_empty());
}

#[test]
fn parse_failure_still_removes_temporary_file() {
	let temp = scratch_dir();
	let err = resolve_root_value_in(&DotSource::Inline("{broken".to_owned()), "json", temp.path()).expect_err("bad json fails");

	assert!(matches!(err, ResolveError::Data(DataError::Parse { .. })));
	assert!(leftovers(temp.path()).is_empty(), "temporary file should be removed after failure");
}

#[test]
fn unwritable_temp_dir_is_temp_file_error() {
	let temp = scratch_dir();
	let missing = temp.path().join("does-not-exist");

	let err = resolve_root_value_in(&DotSource::Inline("x".to_owned()), "text", &missing).expect_err("missing temp dir fails");
	assert!(matches!(err, ResolveError::TempFile(_)));
}

#[test]
fn both_sources_are_rejected() {
	let err = DotSource::from_parts(Some(PathBuf::from("data.json")), Some("{}".to_owned())).expect_err("both sources fail");
	assert!(matches!(err, ResolveError::ConflictingSources));

	assert_eq!(DotSource::from_parts(None, None).expect("no source is fine"), DotSource::None);
	assert_eq!(
		DotSource::from_parts(None, Some(String::new())).expect("empty string is a source"),
		DotSource::Inline(String::new())
	);
}

#[test]
fn missing_dot_file_surfaces_io_error() {
	let dir = scratch_dir();
	let err = resolve_root_value(&DotSource::File(dir.path().join("absent.yaml")), "yaml").expect_err("missing file fails");

	assert!(matches!(err, ResolveError::Data(DataError::Io { .. })));
}

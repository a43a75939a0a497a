use std::thread;

use dotplate_testkit::{scratch_dir, write_file};

use super::{FunctionRegistry, Output, TemplateFn, Trust};
use crate::data::{DataError, DataFormat, Value};

#[test]
fn standard_table_has_exact_names() {
	let registry = FunctionRegistry::standard();
	let names: Vec<_> = registry.names().collect();

	assert_eq!(
		names,
		[
			"readJSON",
			"readYAML",
			"readCSV",
			"readCSVMap",
			"readText",
			"readLines",
			"readXML",
			"readTOML",
			"fileExists",
			"fileStat",
			"fileRead",
			"toTypeHTML",
			"toTypeCSS",
			"toTypeJS",
			"toTypeURL",
		]
	);
	assert_eq!(registry.get("readCSVMap"), Some(TemplateFn::Read(DataFormat::CsvMap)));
	assert_eq!(registry.get("readjson"), None);
}

#[test]
fn read_entries_dispatch_to_readers() {
	let dir = scratch_dir();
	let path = write_file(dir.path(), "list.txt", "a\nb\n");
	let registry = FunctionRegistry::standard();

	let output = registry.call("readLines", &path.display().to_string()).expect("readLines succeeds");
	assert_eq!(output, Output::Data(Value::from(vec![Value::from("a"), Value::from("b")])));

	let exists = registry.call("fileExists", &path.display().to_string()).expect("fileExists succeeds");
	assert_eq!(exists, Output::Data(Value::Bool(true)));
}

#[test]
fn reader_errors_propagate() {
	let registry = FunctionRegistry::standard();

	let err = registry.call("readYAML", "").expect_err("empty path fails");
	assert!(matches!(err, DataError::MissingPath { format: DataFormat::Yaml }));
	assert_eq!(err.to_string(), "readYAML needs a filename");
}

#[test]
fn exists_never_fails() {
	let registry = FunctionRegistry::standard();
	assert_eq!(registry.call("fileExists", "").expect("empty path probes"), Output::Data(Value::Bool(false)));
}

#[test]
fn trust_entries_are_identity() {
	let registry = FunctionRegistry::standard();

	assert_eq!(
		registry.call("toTypeHTML", "<b>bold</b>").expect("toTypeHTML succeeds"),
		Output::Trusted(Trust::Html, "<b>bold</b>".to_owned())
	);
	assert_eq!(
		registry.call("toTypeURL", "https://example.com/?a=1&b=2").expect("toTypeURL succeeds"),
		Output::Trusted(Trust::Url, "https://example.com/?a=1&b=2".to_owned())
	);
}

#[test]
fn unknown_name_is_rejected() {
	let registry = FunctionRegistry::standard();
	assert!(matches!(registry.call("readINI", "x.ini"), Err(DataError::UnknownFunction { .. })));
}

#[test]
fn concurrent_calls_do_not_interfere() {
	let dir = scratch_dir();
	let json = write_file(dir.path(), "a.json", r#"{"n":1}"#);
	let csv = write_file(dir.path(), "b.csv", "x\n1\n");
	let registry = FunctionRegistry::standard();

	thread::scope(|scope| {
		for _ in 0..4 {
			scope.spawn(|| {
				for _ in 0..16 {
					let left = registry.call("readJSON", &json.display().to_string()).expect("json read");
					let right = registry.call("readCSV", &csv.display().to_string()).expect("csv read");
					assert!(matches!(left, Output::Data(Value::Record(_))));
					assert!(matches!(right, Output::Data(Value::Array(_))));
				}
			});
		}
	});
}

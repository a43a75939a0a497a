use dotplate_testkit::{scratch_dir, write_file};

use crate::data::{DataError, DataFormat, Value, read_xml};

fn read(source: &str) -> crate::data::Result<Value> {
	let dir = scratch_dir();
	let path = write_file(dir.path(), "doc.xml", source);
	read_xml(&path)
}

#[test]
fn root_element_is_unwrapped() {
	let value = read("<?xml version=\"1.0\"?>\n<forum>\n  <name>meta.discourse.org</name>\n  <topic>69776</topic>\n</forum>\n")
		.expect("xml reads");

	let record = value.as_record().expect("root content is a record");
	assert_eq!(record.keys().collect::<Vec<_>>(), ["name", "topic"]);
	assert_eq!(value.get("name"), Some(&Value::from("meta.discourse.org")));
	assert_eq!(value.get("topic"), Some(&Value::from("69776")));
}

#[test]
fn repeated_children_collapse_into_list() {
	let value = read("<menu><item>a</item><title>t</title><item>b</item><item>c</item></menu>").expect("xml reads");

	assert_eq!(value.get("item"), Some(&Value::from(vec![Value::from("a"), Value::from("b"), Value::from("c")])));
	assert_eq!(value.as_record().map(|record| record.keys().collect::<Vec<_>>()), Some(vec!["item", "title"]));
}

#[test]
fn attributes_and_mixed_text_get_reserved_keys() {
	let value = read(r#"<book lang="en"><title edition="2">Rust &amp; You</title>notes<![CDATA[ <raw> ]]></book>"#).expect("xml reads");

	assert_eq!(value.get("-lang"), Some(&Value::from("en")));
	let title = value.get("title").expect("title present");
	assert_eq!(title.get("-edition"), Some(&Value::from("2")));
	assert_eq!(title.get("#text"), Some(&Value::from("Rust & You")));
	assert_eq!(value.get("#text"), Some(&Value::from("notes <raw>")));
}

#[test]
fn character_references_resolve() {
	let value = read("<r><v>&#65;&#x42;&lt;</v></r>").expect("xml reads");
	assert_eq!(value.get("v"), Some(&Value::from("AB<")));
}

#[test]
fn bad_references_are_rejected() {
	for input in ["<r><v>&#xZZ;</v></r>", "<r><v>&nbsp;</v></r>"] {
		let err = read(input).expect_err("reference fails");
		assert!(matches!(err, DataError::Parse { format: DataFormat::Xml, .. }), "{input}: unexpected error: {err}");
	}
}

#[test]
fn empty_root_is_empty_record() {
	let value = read("<root/>").expect("empty root reads");
	assert_eq!(value.as_record().map(|record| record.len()), Some(0));
}

#[test]
fn text_only_root_is_rejected() {
	let err = read("<root>just text</root>").expect_err("text-only root fails");
	assert!(matches!(err, DataError::Parse { format: DataFormat::Xml, .. }), "unexpected error: {err}");
	assert!(err.to_string().contains("only text"), "unexpected message: {err}");
}

#[test]
fn structural_errors_are_parse_errors() {
	for source in ["", "<a><b></a>", "<a/><b/>", "<a>"] {
		let err = read(source).expect_err("malformed document fails");
		assert!(matches!(err, DataError::Parse { format: DataFormat::Xml, .. }), "source {source:?} gave {err}");
	}
}

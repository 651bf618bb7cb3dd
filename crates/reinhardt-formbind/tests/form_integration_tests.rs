//! Form Binding Integration Tests
//!
//! Exercises `Form` against the in-memory DOM backend.
//!
//! Test Categories:
//! - Category 1: Construction
//! - Category 2: Reading single keys (`get`)
//! - Category 3: Writing single keys (`set`)
//! - Category 4: Whole-form reads and writes (`get_data` / `set_data` / `reset`)

mod utils;

use reinhardt_formbind::dom::memory::MemoryDocument;
use reinhardt_formbind::{FieldValue, Form, FormControl, FormData};
use rstest::rstest;
use serde_json::json;
use utils::{TestForm, test_form};

// ============================================================================
// Category 1: Construction
// ============================================================================

/// Tests wrapping an element directly and through a document query
#[rstest]
fn test_creates_forms() {
	let document = MemoryDocument::new();
	let element = document.element("form", &[]);
	document.body().append_child(&element);

	let direct = Form::new(element.clone()).unwrap();
	let queried = Form::query(&document, None).unwrap();
	assert_eq!(direct.host(), queried.host());
}

// ============================================================================
// Category 2: Reading single keys
// ============================================================================

/// Tests reading text inputs
#[rstest]
fn test_reads_text_inputs(test_form: TestForm) {
	test_form.append("input", &[("type", "text"), ("name", "foo"), ("value", "FOO")]);
	assert_eq!(test_form.form.get("foo"), Some(FieldValue::from("FOO")));
}

/// Tests reading a select-one, which defaults to its first option
#[rstest]
fn test_reads_select_inputs(test_form: TestForm) {
	test_form.select(&[("name", "thing")], &["a", "b", "c"], &[]);
	assert_eq!(test_form.form.get("thing"), Some(FieldValue::from("a")));
}

/// Tests reading a select-multiple
#[rstest]
fn test_reads_select_multiple_inputs(test_form: TestForm) {
	test_form.select(
		&[("name", "things"), ("multiple", "multiple")],
		&["a", "b", "c"],
		&["a", "b", "c"],
	);
	assert_eq!(
		test_form.form.get("things"),
		Some(FieldValue::from(vec!["a", "b", "c"]))
	);
}

/// Tests reading a single checkbox
#[rstest]
fn test_reads_single_checkboxes(test_form: TestForm) {
	let basic = test_form.append(
		"input",
		&[("type", "checkbox"), ("name", "foo"), ("value", "123")],
	);
	assert_eq!(test_form.form.get("foo"), None);
	basic.set_checked(true);
	assert_eq!(test_form.form.get("foo"), Some(FieldValue::from("123")));
}

/// Tests reading grouped checkboxes as scalars and lists
#[rstest]
fn test_reads_grouped_checkboxes(test_form: TestForm) {
	let boxes = test_form.checkboxes("foo", &["1", "2", "3"]);
	assert_eq!(test_form.form.get("foo"), None);

	boxes[0].set_checked(true);
	assert_eq!(test_form.form.get("foo"), Some(FieldValue::from("1")));

	boxes[1].set_checked(true);
	assert_eq!(test_form.form.get("foo"), Some(FieldValue::from(vec!["1", "2"])));

	boxes[2].set_checked(true);
	assert_eq!(
		test_form.form.get("foo"),
		Some(FieldValue::from(vec!["1", "2", "3"]))
	);

	boxes[0].set_checked(false);
	assert_eq!(test_form.form.get("foo"), Some(FieldValue::from(vec!["2", "3"])));
}

/// Tests that a checkbox without a value reads as `true`
#[rstest]
fn test_reads_checkboxes_without_a_value_as_true(test_form: TestForm) {
	test_form.append("input", &[("name", "blah"), ("type", "checkbox"), ("checked", "checked")]);
	assert_eq!(test_form.form.get("blah"), Some(FieldValue::Flag(true)));
}

/// Tests mixing valued and value-less checkboxes in one group
#[rstest]
fn test_reads_grouped_checkboxes_with_no_value_as_true(test_form: TestForm) {
	test_form.append(
		"input",
		&[("name", "blah"), ("type", "checkbox"), ("value", "a"), ("checked", "")],
	);
	test_form.append("input", &[("name", "blah"), ("type", "checkbox"), ("checked", "")]);
	assert_eq!(
		test_form.form.get_data().to_json(),
		json!({"blah": ["a", true]})
	);
}

/// Tests reading radio groups
#[rstest]
fn test_reads_radio_buttons(test_form: TestForm) {
	let radios = test_form.radios("dim", &["x", "y", "z"]);
	assert_eq!(test_form.form.get("dim"), None);

	radios[0].set_checked(true);
	assert_eq!(test_form.form.get("dim"), Some(FieldValue::from("x")));

	radios[1].set_checked(true);
	assert_eq!(test_form.form.get("dim"), Some(FieldValue::from("y")));

	radios[1].set_checked(false);
	assert_eq!(test_form.form.get("dim"), None);
}

/// Tests reading textareas
#[rstest]
fn test_reads_textareas(test_form: TestForm) {
	let area = test_form.append("textarea", &[("name", "foo")]);
	area.set_text("hello");
	assert_eq!(test_form.form.get("foo"), Some(FieldValue::from("hello")));
}

/// Tests that disabled and unnamed controls are skipped
#[rstest]
fn test_skips_disabled_and_unnamed_controls(test_form: TestForm) {
	test_form.append("input", &[("name", "a"), ("value", "1"), ("disabled", "disabled")]);
	test_form.append("input", &[("value", "2")]);
	assert!(test_form.form.get_data().is_empty());
}

// ============================================================================
// Category 3: Writing single keys
// ============================================================================

/// Tests writing text inputs
#[rstest]
fn test_writes_text_inputs(test_form: TestForm) {
	test_form.append("input", &[("type", "text"), ("name", "foo")]);
	test_form.form.set("foo", "bar");
	assert_eq!(test_form.form.get("foo"), Some(FieldValue::from("bar")));
}

/// Tests writing a select-one, falling back to the first option on a miss
#[rstest]
fn test_writes_select_inputs(test_form: TestForm) {
	test_form.select(&[("name", "thing")], &["a", "b", "c"], &[]);
	test_form.form.set("thing", "b");
	assert_eq!(test_form.form.get("thing"), Some(FieldValue::from("b")));
	test_form.form.set("thing", "d");
	assert_eq!(test_form.form.get("thing"), Some(FieldValue::from("a")));
}

/// Tests writing a select-multiple from lists and scalars
#[rstest]
fn test_writes_select_multiple_inputs(test_form: TestForm) {
	test_form.select(
		&[("name", "things"), ("multiple", "multiple")],
		&["a", "b", "c"],
		&[],
	);
	test_form.form.set("things", vec!["b"]);
	assert_eq!(test_form.form.get("things"), Some(FieldValue::from(vec!["b"])));

	test_form.form.set("things", Vec::<String>::new());
	assert_eq!(test_form.form.get("things"), Some(FieldValue::List(vec![])));

	test_form.form.set("things", "c");
	assert_eq!(test_form.form.get("things"), Some(FieldValue::from(vec!["c"])));

	test_form.form.set("things", "d");
	assert_eq!(test_form.form.get("things"), Some(FieldValue::List(vec![])));
}

/// Tests that writing an unknown value unchecks a single checkbox
#[rstest]
fn test_writes_single_checkboxes(test_form: TestForm) {
	test_form.append("input", &[("type", "checkbox"), ("name", "foo"), ("value", "123")]);
	test_form.form.set("foo", "bar");
	assert_eq!(test_form.form.get("foo"), None);
	test_form.form.set("foo", "123");
	assert_eq!(test_form.form.get("foo"), Some(FieldValue::from("123")));
}

/// Tests writing checkbox groups from lists, null and empty lists
#[rstest]
fn test_writes_grouped_checkboxes(test_form: TestForm) {
	let boxes = test_form.checkboxes("foo", &["1", "2", "3"]);
	let checked = || boxes.iter().map(|b| b.is_checked()).collect::<Vec<_>>();

	test_form.form.set("foo", vec![2]);
	assert_eq!(checked(), vec![false, true, false]);

	test_form.form.set("foo", vec![1, 3]);
	assert_eq!(checked(), vec![true, false, true]);

	test_form.form.set("foo", FieldValue::Null);
	assert_eq!(checked(), vec![false, false, false]);

	test_form.form.set("foo", vec![3]);
	test_form.form.set("foo", Vec::<i32>::new());
	assert_eq!(checked(), vec![false, false, false]);
}

/// Tests writing a value-less checkbox from a boolean
#[rstest]
fn test_writes_checkboxes_without_a_value(test_form: TestForm) {
	let b = test_form.append("input", &[("name", "blah"), ("type", "checkbox")]);
	test_form.form.set("blah", true);
	assert!(b.is_checked());
	test_form.form.set("blah", false);
	assert!(!b.is_checked());
}

/// Tests writing a mixed checkbox group
#[rstest]
fn test_writes_grouped_checkboxes_with_no_value(test_form: TestForm) {
	let valued = test_form.append(
		"input",
		&[("name", "blah"), ("type", "checkbox"), ("value", "a")],
	);
	let plain = test_form.append("input", &[("name", "blah"), ("type", "checkbox")]);
	test_form
		.form
		.set("blah", FieldValue::List(vec![FieldValue::from("a"), FieldValue::Flag(true)]));
	assert!(valued.is_checked());
	assert!(plain.is_checked());
}

/// Tests writing radio groups
#[rstest]
fn test_writes_radio_buttons(test_form: TestForm) {
	let radios = test_form.radios("dim", &["x", "y", "z"]);
	test_form.form.set("dim", "y");
	assert!(radios[1].is_checked());
	assert!(!radios[0].is_checked());
	assert!(!radios[2].is_checked());

	test_form.form.set("dim", FieldValue::Null);
	assert!(radios.iter().all(|radio| !radio.is_checked()));
}

/// Tests writing textareas
#[rstest]
fn test_writes_textareas(test_form: TestForm) {
	let area = test_form.append("textarea", &[("name", "foo")]);
	test_form.form.set("foo", "hi");
	assert_eq!(area.value(), "hi");
}

// ============================================================================
// Category 4: Whole-form reads and writes
// ============================================================================

/// Tests reading a form mixing every control type
#[rstest]
fn test_reads_all_sorts_of_data(test_form: TestForm) {
	test_form.profile();
	assert_eq!(
		test_form.form.get_data().to_json(),
		json!({
			"first_name": "Shawn",
			"last_name": "Allen",
			"gender": "male",
			"languages": ["javascript", "python"],
			"skills": ["frontend", "backend"],
		})
	);
}

/// Tests that keys come back in document order
#[rstest]
fn test_reads_keys_in_document_order(test_form: TestForm) {
	test_form.profile();
	let keys: Vec<String> = test_form
		.form
		.get_data()
		.keys()
		.map(str::to_string)
		.collect();
	assert_eq!(keys, vec!["first_name", "last_name", "gender", "languages", "skills"]);
}

/// Tests that serialized data keeps document order
#[rstest]
fn test_serializes_keys_in_document_order(test_form: TestForm) {
	test_form.profile();
	let data = test_form.form.get_data();

	let json_keys: Vec<String> = data
		.to_json()
		.as_object()
		.map(|object| object.keys().cloned().collect())
		.unwrap_or_default();
	assert_eq!(json_keys, vec!["first_name", "last_name", "gender", "languages", "skills"]);

	assert_eq!(
		serde_json::to_string(&data).unwrap(),
		concat!(
			r#"{"first_name":"Shawn","last_name":"Allen","gender":"male","#,
			r#""languages":["javascript","python"],"skills":["frontend","backend"]}"#,
		)
	);
}

/// Tests that absent and null keys leave text inputs alone
#[rstest]
fn test_does_not_write_null_or_absent(test_form: TestForm) {
	let input = test_form.append("input", &[("name", "foo"), ("type", "text")]);
	test_form.form.set_data(&FormData::new());
	assert_eq!(input.value(), "");
	test_form.form.set_data(&FormData::from([("foo", FieldValue::Null)]));
	assert_eq!(input.value(), "");
}

/// Tests that only the passed keys are written
#[rstest]
fn test_only_writes_the_data_you_pass_it(test_form: TestForm) {
	let a = test_form.append("input", &[("name", "foo"), ("value", "foo")]);
	let b = test_form.append("input", &[("name", "bar")]);
	test_form.form.set_data(&FormData::from([("bar", "bar")]));
	assert_eq!(a.value(), "foo");
	assert_eq!(b.value(), "bar");
}

/// Tests writing a form mixing every control type
#[rstest]
fn test_writes_all_sorts_of_data(test_form: TestForm) {
	test_form.profile();
	let data: FormData = serde_json::from_value(json!({
		"first_name": "Jane",
		"last_name": "Doe",
		"gender": "female",
		"languages": ["ruby"],
		"skills": "devops",
	}))
	.unwrap();

	test_form.form.set_data(&data);
	assert_eq!(test_form.form.get_data().to_json(), data.to_json());
}

/// Tests resetting a form after writes
#[rstest]
fn test_can_reset_a_form(test_form: TestForm) {
	test_form.profile();
	let original = test_form.form.get_data();

	test_form.form.set_data(&FormData::from([
		("first_name", FieldValue::from("Jane")),
		("last_name", FieldValue::from("Doe")),
		("gender", FieldValue::from("female")),
		("languages", FieldValue::from(vec!["ruby"])),
		("skills", FieldValue::from("devops")),
	]));
	assert_ne!(test_form.form.get_data(), original);

	test_form.form.reset();
	assert_eq!(test_form.form.get_data(), original);
}

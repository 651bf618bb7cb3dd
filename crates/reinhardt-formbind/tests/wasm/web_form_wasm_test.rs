//! Browser tests for the `web-sys` backend
//!
//! Run with `wasm-pack test --headless --chrome`.
//!
//! Test Categories:
//! - Category 1: Reads and writes against live controls
//! - Category 2: Native events

#![cfg(target_arch = "wasm32")]

use reinhardt_formbind::dom::web::{WebDocument, WebForm};
use reinhardt_formbind::{FieldValue, Form, FormData, FormEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Mounts a `<form>` with the given markup and binds it.
fn mount(markup: &str) -> (Element, Form<WebForm>) {
	let document = WebDocument::global().expect("document").0;
	let element = document.create_element("form").unwrap();
	element.set_inner_html(markup);
	document
		.document_element()
		.expect("root element")
		.append_child(&element)
		.unwrap();
	let form = Form::new(WebForm(element.clone())).unwrap();
	(element, form)
}

fn click(root: &Element, selector: &str) {
	root.query_selector(selector)
		.unwrap()
		.expect("control")
		.dyn_into::<HtmlElement>()
		.unwrap()
		.click();
}

// ============================================================================
// Category 1: Reads and writes
// ============================================================================

#[wasm_bindgen_test]
fn test_reads_mixed_controls() {
	let (element, form) = mount(
		r#"<input type="text" name="first_name" value="Shawn">
		<input type="checkbox" name="skills" value="frontend" checked>
		<input type="checkbox" name="skills" value="backend" checked>
		<select name="languages" multiple>
			<option value="javascript" selected>JavaScript</option>
			<option value="ruby">Ruby</option>
		</select>"#,
	);

	let data = form.get_data();
	assert_eq!(data.get("first_name"), Some(&FieldValue::from("Shawn")));
	assert_eq!(data.get("skills"), Some(&FieldValue::from(vec!["frontend", "backend"])));
	assert_eq!(data.get("languages"), Some(&FieldValue::from(vec!["javascript"])));
	element.remove();
}

#[wasm_bindgen_test]
fn test_writes_and_resets() {
	let (element, form) = mount(
		r#"<input type="text" name="first_name" value="Shawn">
		<input type="radio" name="gender" value="female">
		<input type="radio" name="gender" value="male" checked>"#,
	);
	let original = form.get_data();

	form.set_data(&FormData::from([("first_name", "Jane"), ("gender", "female")]));
	assert_eq!(form.get("first_name"), Some(FieldValue::from("Jane")));
	assert_eq!(form.get("gender"), Some(FieldValue::from("female")));

	form.reset();
	assert_eq!(form.get_data(), original);
	element.remove();
}

#[wasm_bindgen_test]
fn test_query_reports_missing_form() {
	let document = WebDocument::global().expect("document");
	assert!(Form::query(&document, Some("#no-such-form")).is_err());
}

// ============================================================================
// Category 2: Native events
// ============================================================================

#[wasm_bindgen_test]
fn test_field_change_on_click() {
	let (element, form) = mount(r#"<input type="checkbox" name="foo" value="bar">"#);
	let seen = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&seen);
	form.on_field_change("foo", move |value: &str, _event| {
		sink.borrow_mut().push(value.to_string());
	})
	.unwrap();

	click(&element, "input");

	assert_eq!(*seen.borrow(), vec!["bar"]);
	element.remove();
}

#[wasm_bindgen_test]
fn test_dropped_handle_keeps_listening() {
	let (element, form) = mount(r#"<input type="checkbox" name="foo" value="bar">"#);
	let count = Rc::new(RefCell::new(0));
	let sink = Rc::clone(&count);
	let handle = form.on_change(move |_data, _event| *sink.borrow_mut() += 1).unwrap();
	drop(handle);

	click(&element, "input");
	click(&element, "input");

	assert_eq!(*count.borrow(), 2);
	element.remove();
}

#[wasm_bindgen_test]
fn test_off_removes_native_listener() {
	let (element, form) = mount(r#"<input type="checkbox" name="foo" value="bar">"#);
	let count = Rc::new(RefCell::new(0));
	let sink = Rc::clone(&count);
	let handle = form.on_change(move |_data, _event| *sink.borrow_mut() += 1).unwrap();

	click(&element, "input");
	form.off(handle);
	click(&element, "input");

	assert_eq!(*count.borrow(), 1);
	element.remove();
}

#[wasm_bindgen_test]
fn test_listeners_outlive_form() {
	let (element, form) = mount(r#"<input type="checkbox" name="foo" value="bar">"#);
	let count = Rc::new(RefCell::new(0));
	let sink = Rc::clone(&count);
	form.on_change(move |_data, _event| *sink.borrow_mut() += 1).unwrap();
	drop(form);

	click(&element, "input");

	assert_eq!(*count.borrow(), 1);
	element.remove();
}

#[wasm_bindgen_test]
fn test_submit_includes_pressed_button() {
	let (element, form) = mount(
		r#"<input name="foo" value="bar">
		<button type="submit" name="submit" value="go">Go</button>"#,
	);
	let seen = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&seen);
	form.on_submit(move |data, event| {
		event.prevent_default();
		sink.borrow_mut().push(data.clone());
	})
	.unwrap();

	click(&element, "button");

	let seen = seen.borrow();
	assert_eq!(seen.len(), 1);
	assert_eq!(seen[0].get("submit"), Some(&FieldValue::from("go")));
	assert_eq!(seen[0].get("foo"), Some(&FieldValue::from("bar")));
	element.remove();
}

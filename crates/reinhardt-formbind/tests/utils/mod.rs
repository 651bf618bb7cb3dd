//! Shared fixtures for the integration tests.
//!
//! Every test gets a fresh [`MemoryDocument`] holding one `<form>` in its
//! body, already bound to a [`Form`].

#![allow(dead_code)]

use reinhardt_formbind::Form;
use reinhardt_formbind::dom::memory::{MemoryDocument, MemoryElement};
use rstest::fixture;

/// A bound form inside its own document.
pub struct TestForm {
	pub document: MemoryDocument,
	pub element: MemoryElement,
	pub form: Form<MemoryElement>,
}

impl TestForm {
	/// Appends an element with the given attributes to the form.
	pub fn append(&self, tag: &str, attributes: &[(&str, &str)]) -> MemoryElement {
		let child = self.document.element(tag, attributes);
		self.element.append_child(&child);
		child
	}

	/// Appends a `<select>` with one `<option>` per value, marking the
	/// `selected` ones.
	pub fn select(
		&self,
		attributes: &[(&str, &str)],
		values: &[&str],
		selected: &[&str],
	) -> MemoryElement {
		let select = self.document.element("select", attributes);
		for value in values {
			let option = self.document.element("option", &[("value", value)]);
			if selected.contains(value) {
				option.set_attribute("selected", "selected");
			}
			option.set_text(value);
			select.append_child(&option);
		}
		self.element.append_child(&select);
		select
	}

	/// Appends unchecked checkboxes sharing `name`.
	pub fn checkboxes(&self, name: &str, values: &[&str]) -> Vec<MemoryElement> {
		self.group("checkbox", name, values)
	}

	/// Appends unchecked radio buttons sharing `name`.
	pub fn radios(&self, name: &str, values: &[&str]) -> Vec<MemoryElement> {
		self.group("radio", name, values)
	}

	fn group(&self, control_type: &str, name: &str, values: &[&str]) -> Vec<MemoryElement> {
		values
			.iter()
			.map(|value| {
				self.append(
					"input",
					&[("type", control_type), ("name", name), ("value", value)],
				)
			})
			.collect()
	}

	/// Builds a profile form mixing every control type.
	pub fn profile(&self) {
		self.append(
			"input",
			&[("type", "text"), ("name", "first_name"), ("value", "Shawn")],
		);
		self.append(
			"input",
			&[("type", "text"), ("name", "last_name"), ("value", "Allen")],
		);
		self.append(
			"input",
			&[("type", "radio"), ("name", "gender"), ("value", "female")],
		);
		self.append(
			"input",
			&[
				("type", "radio"),
				("name", "gender"),
				("value", "male"),
				("checked", "checked"),
			],
		);
		self.select(
			&[("name", "languages"), ("multiple", "multiple")],
			&["javascript", "python", "ruby"],
			&["javascript", "python"],
		);
		for (value, checked) in [("frontend", true), ("backend", true), ("devops", false)] {
			let skill = self.append(
				"input",
				&[("type", "checkbox"), ("name", "skills"), ("value", value)],
			);
			if checked {
				skill.set_attribute("checked", "checked");
			}
		}
	}
}

/// A fresh document with an empty bound form.
#[fixture]
pub fn test_form() -> TestForm {
	let document = MemoryDocument::new();
	let element = document.element("form", &[]);
	document.body().append_child(&element);
	let form = Form::new(element.clone()).unwrap();
	TestForm {
		document,
		element,
		form,
	}
}

//! Per-control encoding rules between control state and [`FormData`].
//!
//! | Kind | Read | Write |
//! |------|------|-------|
//! | select-one | selected option's value | select the option equal to the value |
//! | select-multiple | list of selected values (possibly empty) | select options contained in the list |
//! | checkbox | value (or `true`) when checked, merged into a list | checked iff value is listed (value-less: truthiness) |
//! | radio | value when checked | checked iff equal |
//! | submit | value when pressed | never written |
//! | other | value | value as text (`null` is skipped) |
//!
//! Controls without a name and disabled controls are ignored in both
//! directions, and empty strings are never stored on read.

use crate::dom::{ControlKind, FormControl};
use crate::value::{FieldValue, FormData};

/// Returns `true` if `control` takes part in reads and writes.
pub fn valid_control<C: FormControl>(control: &C) -> bool {
	!control.name().is_empty() && !control.is_disabled()
}

/// Merges the state of `control` into `data`.
///
/// Returns `true` if a value was stored.
pub fn read_control<C: FormControl>(control: &C, data: &mut FormData) -> bool {
	if !valid_control(control) {
		return false;
	}
	let name = control.name();

	let value = match control.kind() {
		ControlKind::SelectOne => control
			.options()
			.into_iter()
			.find(|option| option.selected)
			.map(|option| FieldValue::Text(option.value)),
		ControlKind::SelectMultiple => Some(FieldValue::List(
			control
				.options()
				.into_iter()
				.filter(|option| option.selected)
				.map(|option| FieldValue::Text(option.value))
				.collect(),
		)),
		ControlKind::Checkbox => {
			if !control.is_checked() {
				return false;
			}
			let own = match control.value() {
				value if value.is_empty() => FieldValue::Flag(true),
				value => FieldValue::Text(value),
			};
			match data.get_mut(&name) {
				Some(FieldValue::List(items)) => {
					items.push(own);
					return true;
				}
				Some(existing) => {
					let previous = std::mem::take(existing);
					*existing = FieldValue::List(vec![previous, own]);
					return true;
				}
				None => Some(own),
			}
		}
		ControlKind::Radio => control
			.is_checked()
			.then(|| FieldValue::Text(control.value())),
		ControlKind::Submit => control
			.is_pressed()
			.then(|| FieldValue::Text(control.value())),
		ControlKind::Other(_) => Some(FieldValue::Text(control.value())),
	};

	match value {
		Some(FieldValue::Text(text)) if text.is_empty() => false,
		Some(value) => {
			data.insert(name, value);
			true
		}
		None => false,
	}
}

/// Applies `data[name]` to `control`.
///
/// Keys missing from `data` leave the control untouched. Returns `true` if
/// the control was written.
pub fn write_control<C: FormControl>(control: &C, data: &FormData) -> bool {
	if !valid_control(control) {
		return false;
	}
	let Some(value) = data.get(&control.name()) else {
		return false;
	};

	match control.kind() {
		ControlKind::SelectOne => {
			let wanted = match value {
				FieldValue::List(items) => items.first().map(FieldValue::to_text),
				FieldValue::Null => None,
				scalar => Some(scalar.to_text()),
			};
			control.select_options(&mut |option| wanted.as_deref() == Some(option));
			true
		}
		ControlKind::SelectMultiple => {
			let wanted = value.to_text_list();
			control.select_options(&mut |option| wanted.iter().any(|v| v == option));
			true
		}
		ControlKind::Checkbox => {
			let own = control.value();
			let checked = if own.is_empty() {
				value.is_truthy()
			} else {
				value.to_text_list().contains(&own)
			};
			control.set_checked(checked);
			true
		}
		ControlKind::Radio => {
			let checked = !value.is_null() && value.to_text() == control.value();
			control.set_checked(checked);
			true
		}
		ControlKind::Submit => false,
		ControlKind::Other(_) => {
			if value.is_null() {
				return false;
			}
			control.set_value(&value.to_text());
			true
		}
	}
}

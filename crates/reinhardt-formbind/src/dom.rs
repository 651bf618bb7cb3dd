//! DOM abstraction layer
//!
//! The form adapter never touches a concrete DOM. It is written against the
//! traits in this module, which describe just enough of a document to read and
//! write form controls and to listen for events bubbling up to a form.
//!
//! ## Backends
//!
//! - [`memory`]: an in-memory element tree with browser-like control
//!   semantics and bubbling event dispatch. Works on every target.
//! - `web` (wasm32 only): `web-sys` elements and `wasm-bindgen` closures.
//!
//! ```text
//! ┌────────────┐  query_controls()  ┌──────────────┐
//! │    Form    │ ─────────────────▶ │   FormHost   │
//! │  (adapter) │  add_listener()    │ (form elem.) │
//! └────────────┘                    └──────────────┘
//!        │                                 │
//!        ▼                                 ▼
//!   FormControl                       FormEvent
//! ```

pub mod memory;
pub mod selector;
#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::error::FormResult;
use std::rc::Rc;

/// Callback invoked with a native event.
pub type EventCallback<E> = Rc<dyn Fn(&E)>;

/// Control classification, derived from the DOM `type` property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControlKind {
	/// `<select>` without `multiple`.
	SelectOne,
	/// `<select multiple>`.
	SelectMultiple,
	/// `<input type="checkbox">`.
	Checkbox,
	/// `<input type="radio">`.
	Radio,
	/// `<input type="submit">` or `<button type="submit">`.
	Submit,
	/// Every other control, carrying its `type` (`text`, `textarea`, `hidden`...).
	Other(String),
}

impl ControlKind {
	/// Maps a DOM `type` property to a kind.
	pub fn from_type(control_type: &str) -> Self {
		match control_type.to_ascii_lowercase().as_str() {
			"select-one" => Self::SelectOne,
			"select-multiple" => Self::SelectMultiple,
			"checkbox" => Self::Checkbox,
			"radio" => Self::Radio,
			"submit" => Self::Submit,
			other => Self::Other(other.to_string()),
		}
	}

	/// Returns the DOM `type` string for this kind.
	pub fn as_type(&self) -> &str {
		match self {
			Self::SelectOne => "select-one",
			Self::SelectMultiple => "select-multiple",
			Self::Checkbox => "checkbox",
			Self::Radio => "radio",
			Self::Submit => "submit",
			Self::Other(other) => other,
		}
	}

	/// Returns `true` for checkboxes and radios.
	pub fn is_checkable(&self) -> bool {
		matches!(self, Self::Checkbox | Self::Radio)
	}
}

/// Snapshot of one `<option>` of a select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
	/// The option's value.
	pub value: String,
	/// Whether the option is currently selected.
	pub selected: bool,
}

/// A named form control.
///
/// Implementations are cheap handles onto a live element, so setters take
/// `&self`. Equality is element identity.
pub trait FormControl: Clone + PartialEq + 'static {
	/// The `name` attribute, or an empty string.
	fn name(&self) -> String;

	/// The control's kind.
	fn kind(&self) -> ControlKind;

	/// Whether the control is disabled.
	fn is_disabled(&self) -> bool;

	/// The current value. For checkboxes and radios this is the `value`
	/// attribute, empty when absent.
	fn value(&self) -> String;

	/// Sets the current value.
	fn set_value(&self, value: &str);

	/// Checkedness of checkboxes and radios.
	fn is_checked(&self) -> bool;

	/// Sets checkedness.
	fn set_checked(&self, checked: bool);

	/// Whether this submit control was the last one clicked.
	fn is_pressed(&self) -> bool;

	/// Sets the pressed flag.
	fn set_pressed(&self, pressed: bool);

	/// Options of a select control in document order; empty otherwise.
	fn options(&self) -> Vec<SelectOption>;

	/// Sets each option's selectedness to `predicate(option_value)`.
	fn select_options(&self, predicate: &mut dyn FnMut(&str) -> bool);
}

/// A native event delivered to a listener on the form.
pub trait FormEvent: 'static {
	/// The control type targeted by events.
	type Control: FormControl;

	/// The event type, e.g. `change`.
	fn event_type(&self) -> String;

	/// The element the event was dispatched on.
	fn target(&self) -> Option<Self::Control>;

	/// Cancels the event's default action.
	fn prevent_default(&self);
}

/// A form-like container element.
pub trait FormHost: Clone + 'static {
	/// Control handle type.
	type Control: FormControl;
	/// Native event type.
	type Event: FormEvent<Control = Self::Control>;
	/// Token returned by [`FormHost::add_listener`].
	type Listener;

	/// Returns descendant controls matching `selector`, in document order.
	fn query_controls(&self, selector: &str) -> FormResult<Vec<Self::Control>>;

	/// Attaches `callback` for `event_type` on this element.
	fn add_listener(
		&self,
		event_type: &str,
		callback: EventCallback<Self::Event>,
	) -> FormResult<Self::Listener>;

	/// Detaches a listener previously returned by [`FormHost::add_listener`].
	fn remove_listener(&self, event_type: &str, listener: Self::Listener);

	/// Restores every control to its default state.
	fn reset(&self);
}

/// A document that can locate form hosts.
pub trait FormDocument {
	/// Host type produced by this document.
	type Host: FormHost;

	/// Returns the first element matching `selector`.
	fn query_form(&self, selector: &str) -> FormResult<Option<Self::Host>>;
}

//! The form adapter.
//!
//! [`Form`] wraps one form-like element and maps its controls to and from a
//! flat [`FormData`] map.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐  get_data() / get()   ┌──────────┐
//! │          │ ◄──────────────────── │          │
//! │ FormData │                       │   Form   │ ──▶ FormHost (DOM)
//! │          │ ────────────────────▶ │          │
//! └──────────┘  set_data() / set()   └──────────┘
//!                                         │
//!                             on("change" | "change:<field>" | "submit")
//! ```
//!
//! ## Example
//!
//! ```
//! use reinhardt_formbind::dom::memory::MemoryDocument;
//! use reinhardt_formbind::{FieldValue, Form, FormData};
//!
//! let document = MemoryDocument::new();
//! let element = document.element("form", &[]);
//! element.append_child(&document.element("input", &[("name", "first_name"), ("value", "Shawn")]));
//! document.body().append_child(&element);
//!
//! let form = Form::new(element).unwrap();
//! assert_eq!(form.get("first_name"), Some(FieldValue::from("Shawn")));
//!
//! form.set_data(&FormData::from([("first_name", "Jane")]));
//! assert_eq!(form.get("first_name"), Some(FieldValue::from("Jane")));
//! ```
//!
//! ## Listener lifetime
//!
//! Listeners registered through a `Form`, including the submit press
//! tracker, capture their own copy of the element handle and options. They
//! keep working after every clone of the `Form` is dropped and stay attached
//! until [`Form::off`] or [`Form::detach`] removes them.

use crate::codec::{read_control, write_control};
use crate::config::{DEFAULT_FORM_SELECTOR, FormOptions};
use crate::dom::{ControlKind, EventCallback, FormControl, FormDocument, FormEvent, FormHost};
use crate::error::{FormError, FormResult};
use crate::events::{EventName, EventPayload, ListenerHandle};
use crate::value::{FieldValue, FormData};
use crate::{debug_log, error_log};
use std::cell::RefCell;
use std::rc::Rc;

/// Event type the submit press tracker listens for.
const CLICK: &str = "click";

/// Element handle and options, cloned into every listener.
#[derive(Clone)]
struct Binding<H: FormHost> {
	host: H,
	options: FormOptions,
}

impl<H: FormHost> Binding<H> {
	fn controls(&self) -> Vec<H::Control> {
		match self.host.query_controls(&self.options.control_selector) {
			Ok(controls) => controls,
			Err(err) => {
				error_log!("failed to query form controls: {}", err);
				Vec::new()
			}
		}
	}

	fn read_all(&self) -> FormData {
		let mut data = FormData::new();
		for control in self.controls() {
			read_control(&control, &mut data);
		}
		data
	}

	fn write_all(&self, data: &FormData) {
		let written = self
			.controls()
			.iter()
			.filter(|control| write_control(*control, data))
			.count();
		debug_log!("wrote {} form controls from {} keys", written, data.len());
	}

	/// Marks `target` as the pressed submit control and clears the others.
	fn track_press(&self, target: &H::Control) {
		if target.kind() != ControlKind::Submit {
			return;
		}
		for control in self.controls() {
			if control.kind() == ControlKind::Submit {
				control.set_pressed(control == *target);
			}
		}
	}
}

struct FormInner<H: FormHost> {
	binding: Binding<H>,
	tracker: RefCell<Option<H::Listener>>,
}

/// Binds a form element to flat key/value data.
///
/// Cloning is cheap; clones share the same element and listeners.
pub struct Form<H: FormHost> {
	inner: Rc<FormInner<H>>,
}

impl<H: FormHost> Clone for Form<H> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<H: FormHost> std::fmt::Debug for Form<H> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Form")
			.field("options", &self.inner.binding.options)
			.field("tracking_submit", &self.inner.tracker.borrow().is_some())
			.finish()
	}
}

impl<H: FormHost> Form<H> {
	/// Wraps `host` with default options.
	///
	/// # Errors
	///
	/// Fails if the press tracker cannot be attached.
	pub fn new(host: H) -> FormResult<Self> {
		Self::with_options(host, FormOptions::default())
	}

	/// Wraps `host` with the given options.
	///
	/// # Errors
	///
	/// Fails if `options.control_selector` is rejected by the host or the
	/// press tracker cannot be attached.
	pub fn with_options(host: H, options: FormOptions) -> FormResult<Self> {
		host.query_controls(&options.control_selector)?;

		let binding = Binding { host, options };
		let tracker = if binding.options.track_submit {
			let tracking = binding.clone();
			let listener = binding.host.add_listener(
				CLICK,
				Rc::new(move |event: &H::Event| {
					if let Some(target) = event.target() {
						tracking.track_press(&target);
					}
				}),
			)?;
			Some(listener)
		} else {
			None
		};

		Ok(Self {
			inner: Rc::new(FormInner {
				binding,
				tracker: RefCell::new(tracker),
			}),
		})
	}

	/// Locates the form in `document` (default selector `"form"`).
	///
	/// # Errors
	///
	/// [`FormError::NotFound`] when nothing matches.
	pub fn query<D>(document: &D, selector: Option<&str>) -> FormResult<Self>
	where
		D: FormDocument<Host = H>,
	{
		let selector = selector.unwrap_or(DEFAULT_FORM_SELECTOR);
		let host = document
			.query_form(selector)?
			.ok_or_else(|| FormError::NotFound {
				selector: selector.to_string(),
			})?;
		Self::new(host)
	}

	/// The wrapped element.
	pub fn host(&self) -> &H {
		&self.inner.binding.host
	}

	/// The options this form was created with.
	pub fn options(&self) -> &FormOptions {
		&self.inner.binding.options
	}

	/// Controls matching the control selector, in document order.
	pub fn controls(&self) -> Vec<H::Control> {
		self.inner.binding.controls()
	}

	/// Controls for which `filter` returns `true`.
	pub fn controls_where(&self, filter: impl Fn(&H::Control) -> bool) -> Vec<H::Control> {
		self.controls()
			.into_iter()
			.filter(|control| filter(control))
			.collect()
	}

	/// Controls named `name`.
	pub fn controls_by_name(&self, name: &str) -> Vec<H::Control> {
		self.controls_where(|control| control.name() == name)
	}

	/// Reads every control into a [`FormData`] map.
	pub fn get_data(&self) -> FormData {
		self.inner.binding.read_all()
	}

	/// Writes `data` into the controls. Keys not present in `data` leave
	/// their controls untouched.
	pub fn set_data(&self, data: &FormData) -> &Self {
		self.inner.binding.write_all(data);
		self
	}

	/// Reads the value of a single key.
	pub fn get(&self, key: &str) -> Option<FieldValue> {
		self.get_data().remove(key)
	}

	/// Writes a single key.
	pub fn set(&self, key: &str, value: impl Into<FieldValue>) -> &Self {
		let mut data = FormData::new();
		data.insert(key, value);
		self.set_data(&data)
	}

	/// Restores the controls to their default state.
	pub fn reset(&self) -> &Self {
		self.inner.binding.host.reset();
		self
	}

	/// Stops tracking submit presses. Pressed flags keep their last state.
	pub fn detach(&self) {
		if let Some(listener) = self.inner.tracker.borrow_mut().take() {
			self.inner.binding.host.remove_listener(CLICK, listener);
		}
	}

	/// Registers `callback` for the event `name`.
	///
	/// See [`events`](crate::events) for the accepted names and their payloads.
	///
	/// # Errors
	///
	/// Fails if the host refuses the listener.
	///
	/// # Example
	///
	/// ```
	/// use reinhardt_formbind::dom::memory::MemoryDocument;
	/// use reinhardt_formbind::{FieldValue, Form};
	/// use std::cell::RefCell;
	/// use std::rc::Rc;
	///
	/// let document = MemoryDocument::new();
	/// let element = document.element("form", &[]);
	/// for tag in ["a", "b"] {
	///     element.append_child(&document.element(
	///         "input",
	///         &[("type", "checkbox"), ("name", "tags"), ("value", tag)],
	///     ));
	/// }
	/// let boxes = element.children();
	///
	/// let form = Form::new(element).unwrap();
	/// let seen = Rc::new(RefCell::new(Vec::new()));
	/// let sink = Rc::clone(&seen);
	/// form.on("change:tags", move |payload, _event| {
	///     let target = payload.target_value().unwrap_or_default().to_string();
	///     sink.borrow_mut().push((target, payload.field().cloned()));
	/// })
	/// .unwrap();
	///
	/// boxes[0].click();
	/// boxes[1].click();
	/// assert_eq!(
	///     *seen.borrow(),
	///     vec![
	///         ("a".to_string(), Some(FieldValue::from("a"))),
	///         ("b".to_string(), Some(FieldValue::from(vec!["a", "b"]))),
	///     ]
	/// );
	/// ```
	pub fn on<F>(&self, name: &str, callback: F) -> FormResult<ListenerHandle<H::Listener>>
	where
		F: Fn(EventPayload<'_>, &H::Event) + 'static,
	{
		self.listen(EventName::parse(name), callback)
	}

	fn listen<F>(
		&self,
		event_name: EventName,
		callback: F,
	) -> FormResult<ListenerHandle<H::Listener>>
	where
		F: Fn(EventPayload<'_>, &H::Event) + 'static,
	{
		let binding = self.inner.binding.clone();

		let native: EventCallback<H::Event> = match &event_name {
			EventName::Change | EventName::Submit => Rc::new(move |event: &H::Event| {
				let data = binding.read_all();
				callback(EventPayload::Data(&data), event);
			}),
			EventName::FieldChange(field) => {
				let field = field.clone();
				Rc::new(move |event: &H::Event| {
					let Some(target) = event.target() else {
						return;
					};
					if target.name() != field {
						return;
					}
					let target_value = target.value();
					let data = binding.read_all();
					callback(
						EventPayload::Field {
							target: &target_value,
							value: data.get(&field),
						},
						event,
					);
				})
			}
			EventName::Native(_) => {
				Rc::new(move |event: &H::Event| callback(EventPayload::Native, event))
			}
		};

		let listener = self
			.inner
			.binding
			.host
			.add_listener(event_name.dom_type(), native)?;
		debug_log!("registered '{}' form listener", event_name);
		Ok(ListenerHandle {
			name: event_name,
			listener,
		})
	}

	/// Registers a `change` listener receiving the whole form data.
	pub fn on_change<F>(&self, callback: F) -> FormResult<ListenerHandle<H::Listener>>
	where
		F: Fn(&FormData, &H::Event) + 'static,
	{
		self.on("change", move |payload, event| {
			if let Some(data) = payload.data() {
				callback(data, event);
			}
		})
	}

	/// Registers a listener for changes of the control named `field`.
	///
	/// The callback receives the raw value of the control that changed. Use
	/// [`Form::on`] with `change:<field>` to also get the field's read value.
	pub fn on_field_change<F>(
		&self,
		field: &str,
		callback: F,
	) -> FormResult<ListenerHandle<H::Listener>>
	where
		F: Fn(&str, &H::Event) + 'static,
	{
		self.listen(EventName::FieldChange(field.to_string()), move |payload, event| {
			if let Some(target) = payload.target_value() {
				callback(target, event);
			}
		})
	}

	/// Registers a `submit` listener receiving the whole form data.
	pub fn on_submit<F>(&self, callback: F) -> FormResult<ListenerHandle<H::Listener>>
	where
		F: Fn(&FormData, &H::Event) + 'static,
	{
		self.on("submit", move |payload, event| {
			if let Some(data) = payload.data() {
				callback(data, event);
			}
		})
	}

	/// Removes a listener registered with [`Form::on`].
	pub fn off(&self, handle: ListenerHandle<H::Listener>) -> &Self {
		debug_log!("removing '{}' form listener", handle.name);
		self.inner
			.binding
			.host
			.remove_listener(handle.name.dom_type(), handle.listener);
		self
	}
}

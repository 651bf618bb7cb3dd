//! Browser backend built on `web-sys` (wasm32 only).
//!
//! - [`WebDocument`] locates forms in a live document.
//! - [`WebForm`] wraps the container element. Listener closures are moved
//!   into JS and referenced by [`WebListener`] for removal.
//! - [`WebControl`] reads and writes control state through the typed
//!   `Html*Element` interfaces. The submit press flag lives in an expando
//!   property on the element.

use super::{
	ControlKind, EventCallback, FormControl, FormDocument, FormEvent, FormHost, SelectOption,
};
use crate::error::{FormError, FormResult};
use crate::{debug_log, warn_log};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
	Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlOptionElement,
	HtmlSelectElement, HtmlTextAreaElement,
};

/// Expando property holding the pressed flag of submit controls.
const PRESSED_PROPERTY: &str = "__formbind_pressed";

fn describe(value: &JsValue) -> String {
	value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn elements(list: &web_sys::NodeList) -> Vec<Element> {
	(0..list.length())
		.filter_map(|index| list.item(index))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

/// A live browser document.
#[derive(Debug, Clone)]
pub struct WebDocument(pub web_sys::Document);

impl WebDocument {
	/// The document of the global window, if any.
	pub fn global() -> Option<Self> {
		web_sys::window()?.document().map(Self)
	}
}

impl FormDocument for WebDocument {
	type Host = WebForm;

	fn query_form(&self, selector: &str) -> FormResult<Option<WebForm>> {
		self.0
			.query_selector(selector)
			.map(|found| found.map(WebForm))
			.map_err(|err| FormError::selector(selector, describe(&err)))
	}
}

/// A form-like container element.
#[derive(Debug, Clone)]
pub struct WebForm(pub Element);

/// A native listener attached to a [`WebForm`].
///
/// The backing closure is handed over to JS when the listener is attached,
/// so it stays callable for as long as the element references it. Dropping
/// the handle keeps the listener attached; pass it to
/// [`FormHost::remove_listener`] to detach it.
#[derive(Debug, Clone)]
pub struct WebListener {
	function: js_sys::Function,
}

impl FormHost for WebForm {
	type Control = WebControl;
	type Event = WebEvent;
	type Listener = WebListener;

	fn query_controls(&self, selector: &str) -> FormResult<Vec<WebControl>> {
		let list = self
			.0
			.query_selector_all(selector)
			.map_err(|err| FormError::selector(selector, describe(&err)))?;
		Ok(elements(&list).into_iter().map(WebControl).collect())
	}

	fn add_listener(
		&self,
		event_type: &str,
		callback: EventCallback<WebEvent>,
	) -> FormResult<WebListener> {
		let closure = Closure::<dyn Fn(web_sys::Event)>::new(move |event: web_sys::Event| {
			callback(&WebEvent(event));
		});
		let function: js_sys::Function = closure.into_js_value().unchecked_into();
		self.0
			.add_event_listener_with_callback(event_type, &function)
			.map_err(|err| FormError::Listener {
				event_type: event_type.to_string(),
				reason: describe(&err),
			})?;
		debug_log!("web dom: added '{}' listener", event_type);
		Ok(WebListener { function })
	}

	fn remove_listener(&self, event_type: &str, listener: WebListener) {
		if let Err(err) = self
			.0
			.remove_event_listener_with_callback(event_type, &listener.function)
		{
			warn_log!(
				"web dom: failed to remove '{}' listener: {}",
				event_type,
				describe(&err)
			);
		}
	}

	fn reset(&self) {
		match self.0.dyn_ref::<HtmlFormElement>() {
			Some(form) => form.reset(),
			None => warn_log!("web dom: reset() requires a <form> element"),
		}
	}
}

/// A form control element.
#[derive(Debug, Clone)]
pub struct WebControl(pub Element);

impl PartialEq for WebControl {
	fn eq(&self, other: &Self) -> bool {
		let other: &web_sys::Node = &other.0;
		self.0.is_same_node(Some(other))
	}
}

impl WebControl {
	fn input(&self) -> Option<&HtmlInputElement> {
		self.0.dyn_ref::<HtmlInputElement>()
	}

	fn select(&self) -> Option<&HtmlSelectElement> {
		self.0.dyn_ref::<HtmlSelectElement>()
	}

	fn select_option_elements(&self) -> Vec<HtmlOptionElement> {
		let Some(select) = self.select() else {
			return Vec::new();
		};
		(0..select.length())
			.filter_map(|index| select.item(index))
			.filter_map(|element| element.dyn_into::<HtmlOptionElement>().ok())
			.collect()
	}

	fn is_checkable_input(&self) -> bool {
		self.input()
			.is_some_and(|input| ControlKind::from_type(&input.type_()).is_checkable())
	}
}

impl FormControl for WebControl {
	fn name(&self) -> String {
		self.0.get_attribute("name").unwrap_or_default()
	}

	fn kind(&self) -> ControlKind {
		let control_type = if let Some(input) = self.input() {
			input.type_()
		} else if let Some(select) = self.select() {
			select.type_()
		} else if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
			area.type_()
		} else if let Some(button) = self.0.dyn_ref::<HtmlButtonElement>() {
			button.type_()
		} else {
			String::new()
		};
		ControlKind::from_type(&control_type)
	}

	fn is_disabled(&self) -> bool {
		self.0.has_attribute("disabled")
	}

	fn value(&self) -> String {
		if self.is_checkable_input() {
			return self.0.get_attribute("value").unwrap_or_default();
		}
		if let Some(input) = self.input() {
			input.value()
		} else if let Some(select) = self.select() {
			select.value()
		} else if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
			area.value()
		} else if let Some(button) = self.0.dyn_ref::<HtmlButtonElement>() {
			button.value()
		} else {
			self.0.get_attribute("value").unwrap_or_default()
		}
	}

	fn set_value(&self, value: &str) {
		if self.is_checkable_input() {
			if let Err(err) = self.0.set_attribute("value", value) {
				warn_log!("web dom: failed to set value: {}", describe(&err));
			}
			return;
		}
		if let Some(input) = self.input() {
			input.set_value(value);
		} else if let Some(select) = self.select() {
			select.set_value(value);
		} else if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
			area.set_value(value);
		} else if let Some(button) = self.0.dyn_ref::<HtmlButtonElement>() {
			button.set_value(value);
		} else if let Err(err) = self.0.set_attribute("value", value) {
			warn_log!("web dom: failed to set value: {}", describe(&err));
		}
	}

	fn is_checked(&self) -> bool {
		self.input().is_some_and(HtmlInputElement::checked)
	}

	fn set_checked(&self, checked: bool) {
		if let Some(input) = self.input() {
			input.set_checked(checked);
		}
	}

	fn is_pressed(&self) -> bool {
		js_sys::Reflect::get(&self.0, &JsValue::from_str(PRESSED_PROPERTY))
			.map(|value| value.is_truthy())
			.unwrap_or(false)
	}

	fn set_pressed(&self, pressed: bool) {
		let stored = js_sys::Reflect::set(
			&self.0,
			&JsValue::from_str(PRESSED_PROPERTY),
			&JsValue::from_bool(pressed),
		);
		if let Err(err) = stored {
			warn_log!("web dom: failed to store pressed flag: {}", describe(&err));
		}
	}

	fn options(&self) -> Vec<SelectOption> {
		self.select_option_elements()
			.into_iter()
			.map(|option| SelectOption {
				value: option.value(),
				selected: option.selected(),
			})
			.collect()
	}

	fn select_options(&self, predicate: &mut dyn FnMut(&str) -> bool) {
		for option in self.select_option_elements() {
			option.set_selected(predicate(&option.value()));
		}
	}
}

/// A native browser event.
#[derive(Debug, Clone)]
pub struct WebEvent(pub web_sys::Event);

impl FormEvent for WebEvent {
	type Control = WebControl;

	fn event_type(&self) -> String {
		self.0.type_()
	}

	fn target(&self) -> Option<WebControl> {
		self.0
			.target()
			.and_then(|target| target.dyn_into::<Element>().ok())
			.map(WebControl)
	}

	fn prevent_default(&self) {
		self.0.prevent_default();
	}
}

//! In-memory DOM backend
//!
//! A small element tree that behaves like a browser where form controls are
//! concerned. It lets the form adapter run headless (server-side, in native
//! tests, in tools) with the same semantics it has in a real page.
//!
//! ## Behaviour
//!
//! - `checked` / `selected` attributes define the default state; setting the
//!   property marks the control dirty so later attribute changes no longer
//!   affect it. [`FormHost::reset`] restores the defaults.
//! - Checking a radio unchecks the other radios of its group (same name,
//!   same form).
//! - A select-one always has exactly one selected option when it has any;
//!   it falls back to the first option.
//! - [`MemoryElement::click`] toggles checkables, dispatches `click`, then
//!   `change` for checkables and `submit` on the enclosing form for submit
//!   controls. Cancelling the click reverts the toggle.
//! - Events bubble from the target up to the root of its tree.
//!
//! ## Example
//!
//! ```
//! use reinhardt_formbind::dom::memory::MemoryDocument;
//! use reinhardt_formbind::dom::FormControl;
//!
//! let document = MemoryDocument::new();
//! let form = document.element("form", &[]);
//! document.body().append_child(&form);
//!
//! let agree = document.element("input", &[("type", "checkbox"), ("name", "agree")]);
//! form.append_child(&agree);
//! agree.click();
//! assert!(agree.is_checked());
//! ```

use super::selector::Selector;
use super::{
	ControlKind, EventCallback, FormControl, FormDocument, FormEvent, FormHost, SelectOption,
};
use crate::debug_log;
use crate::error::FormResult;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct NodeId(usize);

#[derive(Debug, Default)]
struct Node {
	tag: String,
	attributes: Vec<(String, String)>,
	parent: Option<NodeId>,
	children: Vec<NodeId>,
	text: String,
	/// Dirty value set through the `value` property.
	value: Option<String>,
	checked: bool,
	dirty_checked: bool,
	selected: bool,
	dirty_selected: bool,
	pressed: bool,
}

struct ListenerEntry {
	id: u64,
	node: NodeId,
	event_type: String,
	callback: EventCallback<MemoryEvent>,
}

#[derive(Default)]
struct Dom {
	nodes: Vec<Node>,
	listeners: Vec<ListenerEntry>,
	next_listener: u64,
}

impl Dom {
	fn create(&mut self, tag: &str) -> NodeId {
		self.nodes.push(Node {
			tag: tag.to_ascii_lowercase(),
			..Node::default()
		});
		NodeId(self.nodes.len() - 1)
	}

	fn node(&self, id: NodeId) -> &Node {
		&self.nodes[id.0]
	}

	fn node_mut(&mut self, id: NodeId) -> &mut Node {
		&mut self.nodes[id.0]
	}

	fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
		self.node(id)
			.attributes
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.as_str())
	}

	fn has_attribute(&self, id: NodeId, name: &str) -> bool {
		self.attribute(id, name).is_some()
	}

	fn is_tag(&self, id: NodeId, tag: &str) -> bool {
		self.node(id).tag == tag
	}

	/// `id` followed by its ancestors, nearest first.
	fn path(&self, id: NodeId) -> Vec<NodeId> {
		let mut path = vec![id];
		let mut current = self.node(id).parent;
		while let Some(parent) = current {
			path.push(parent);
			current = self.node(parent).parent;
		}
		path
	}

	fn closest_ancestor(&self, id: NodeId, tag: &str) -> Option<NodeId> {
		self.path(id).into_iter().skip(1).find(|&node| self.is_tag(node, tag))
	}

	fn root(&self, id: NodeId) -> NodeId {
		self.path(id).pop().unwrap_or(id)
	}

	/// Descendants of `id` in document order, excluding `id`.
	fn descendants(&self, id: NodeId) -> Vec<NodeId> {
		let mut out = Vec::new();
		let mut stack: Vec<NodeId> = self.node(id).children.iter().rev().copied().collect();
		while let Some(node) = stack.pop() {
			out.push(node);
			stack.extend(self.node(node).children.iter().rev().copied());
		}
		out
	}

	fn text_content(&self, id: NodeId) -> String {
		let mut text = self.node(id).text.clone();
		for child in &self.node(id).children {
			text.push_str(&self.text_content(*child));
		}
		text
	}

	fn control_type(&self, id: NodeId) -> String {
		let node = self.node(id);
		match node.tag.as_str() {
			"input" => self
				.attribute(id, "type")
				.map(str::to_ascii_lowercase)
				.filter(|kind| !kind.is_empty())
				.unwrap_or_else(|| "text".to_string()),
			"button" => self
				.attribute(id, "type")
				.map(str::to_ascii_lowercase)
				.filter(|kind| !kind.is_empty())
				.unwrap_or_else(|| "submit".to_string()),
			"select" if self.has_attribute(id, "multiple") => "select-multiple".to_string(),
			"select" => "select-one".to_string(),
			"textarea" => "textarea".to_string(),
			_ => String::new(),
		}
	}

	fn options(&self, select: NodeId) -> Vec<NodeId> {
		self.descendants(select)
			.into_iter()
			.filter(|&node| self.is_tag(node, "option"))
			.collect()
	}

	fn option_value(&self, option: NodeId) -> String {
		match self.attribute(option, "value") {
			Some(value) => value.to_string(),
			None => self.text_content(option),
		}
	}

	fn value(&self, id: NodeId) -> String {
		let node = self.node(id);
		match node.tag.as_str() {
			"input" if ControlKind::from_type(&self.control_type(id)).is_checkable() => {
				self.attribute(id, "value").unwrap_or_default().to_string()
			}
			"input" => node
				.value
				.clone()
				.or_else(|| self.attribute(id, "value").map(str::to_string))
				.unwrap_or_default(),
			"textarea" => node.value.clone().unwrap_or_else(|| self.text_content(id)),
			"select" => self
				.options(id)
				.into_iter()
				.find(|&option| self.node(option).selected)
				.map(|option| self.option_value(option))
				.unwrap_or_default(),
			"option" => self.option_value(id),
			_ => self.attribute(id, "value").unwrap_or_default().to_string(),
		}
	}

	/// Keeps a select-one at exactly one selected option.
	///
	/// `preferred` wins when it is selected; otherwise the last selected
	/// option is kept, or the first option when none is.
	fn normalize_select(&mut self, select: NodeId, preferred: Option<NodeId>) {
		if self.has_attribute(select, "multiple") {
			return;
		}
		let options = self.options(select);
		let keep = preferred
			.filter(|option| options.contains(option) && self.node(*option).selected)
			.or_else(|| {
				options
					.iter()
					.rev()
					.copied()
					.find(|&option| self.node(option).selected)
			})
			.or_else(|| options.first().copied());
		for option in options {
			self.node_mut(option).selected = Some(option) == keep;
		}
	}

	fn normalize_enclosing_select(&mut self, id: NodeId, preferred: Option<NodeId>) {
		let select = if self.is_tag(id, "select") {
			Some(id)
		} else {
			self.closest_ancestor(id, "select")
		};
		if let Some(select) = select {
			self.normalize_select(select, preferred);
		}
	}

	fn set_checked(&mut self, id: NodeId, checked: bool) {
		{
			let node = self.node_mut(id);
			node.checked = checked;
			node.dirty_checked = true;
		}
		if checked && self.control_type(id) == "radio" {
			self.uncheck_radio_group(id);
		}
	}

	fn uncheck_radio_group(&mut self, id: NodeId) {
		let Some(name) = self.attribute(id, "name").map(str::to_string) else {
			return;
		};
		if name.is_empty() {
			return;
		}
		let scope = self
			.closest_ancestor(id, "form")
			.unwrap_or_else(|| self.root(id));
		let group: Vec<NodeId> = self
			.descendants(scope)
			.into_iter()
			.filter(|&node| {
				node != id
					&& self.is_tag(node, "input")
					&& self.control_type(node) == "radio"
					&& self.attribute(node, "name") == Some(name.as_str())
			})
			.collect();
		for node in group {
			self.node_mut(node).checked = false;
		}
	}

	fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
		let name = name.to_ascii_lowercase();
		{
			let node = self.node_mut(id);
			match node.attributes.iter_mut().find(|(key, _)| *key == name) {
				Some(slot) => slot.1 = value.to_string(),
				None => node.attributes.push((name.clone(), value.to_string())),
			}
		}
		match name.as_str() {
			"checked" if !self.node(id).dirty_checked => {
				self.node_mut(id).checked = true;
				if self.control_type(id) == "radio" {
					self.uncheck_radio_group(id);
				}
			}
			"selected" if !self.node(id).dirty_selected => {
				self.node_mut(id).selected = true;
				self.normalize_enclosing_select(id, Some(id));
			}
			"multiple" if self.is_tag(id, "select") => self.normalize_select(id, None),
			_ => {}
		}
	}

	fn remove_attribute(&mut self, id: NodeId, name: &str) {
		let name = name.to_ascii_lowercase();
		self.node_mut(id).attributes.retain(|(key, _)| *key != name);
		match name.as_str() {
			"checked" if !self.node(id).dirty_checked => self.node_mut(id).checked = false,
			"selected" if !self.node(id).dirty_selected => {
				self.node_mut(id).selected = false;
				self.normalize_enclosing_select(id, None);
			}
			"multiple" if self.is_tag(id, "select") => self.normalize_select(id, None),
			_ => {}
		}
	}

	fn detach(&mut self, child: NodeId) -> Option<NodeId> {
		let parent = self.node_mut(child).parent.take()?;
		self.node_mut(parent).children.retain(|&node| node != child);
		Some(parent)
	}

	fn append_child(&mut self, parent: NodeId, child: NodeId) {
		if self.path(parent).contains(&child) {
			// Appending an ancestor would create a cycle.
			return;
		}
		if let Some(old_parent) = self.detach(child) {
			self.normalize_enclosing_select(old_parent, None);
		}
		self.node_mut(child).parent = Some(parent);
		self.node_mut(parent).children.push(child);

		let inserted_selected = std::iter::once(child)
			.chain(self.descendants(child))
			.filter(|&node| self.is_tag(node, "option") && self.node(node).selected)
			.last();
		self.normalize_enclosing_select(parent, inserted_selected);
		if self.is_tag(child, "select") {
			self.normalize_select(child, None);
		}
	}

	fn reset(&mut self, id: NodeId) {
		let nodes = self.descendants(id);
		for &node in &nodes {
			let checked = self.has_attribute(node, "checked");
			let selected = self.has_attribute(node, "selected");
			let entry = self.node_mut(node);
			entry.value = None;
			entry.checked = checked;
			entry.dirty_checked = false;
			entry.selected = selected;
			entry.dirty_selected = false;
			entry.pressed = false;
		}
		for node in nodes {
			if self.is_tag(node, "select") {
				self.normalize_select(node, None);
			}
		}
	}
}

/// A document owning a tree of [`MemoryElement`]s rooted at `<body>`.
#[derive(Clone)]
pub struct MemoryDocument {
	dom: Rc<RefCell<Dom>>,
	body: NodeId,
}

impl MemoryDocument {
	/// Creates an empty document.
	pub fn new() -> Self {
		let mut dom = Dom::default();
		let body = dom.create("body");
		Self {
			dom: Rc::new(RefCell::new(dom)),
			body,
		}
	}

	fn handle(&self, id: NodeId) -> MemoryElement {
		MemoryElement {
			dom: Rc::clone(&self.dom),
			id,
		}
	}

	/// The document's `<body>`.
	pub fn body(&self) -> MemoryElement {
		self.handle(self.body)
	}

	/// Creates a detached element.
	pub fn create_element(&self, tag: &str) -> MemoryElement {
		let id = self.dom.borrow_mut().create(tag);
		self.handle(id)
	}

	/// Creates a detached element with the given attributes.
	pub fn element(&self, tag: &str, attributes: &[(&str, &str)]) -> MemoryElement {
		let element = self.create_element(tag);
		for (name, value) in attributes {
			element.set_attribute(name, value);
		}
		element
	}

	/// Returns the first element under `<body>` matching `selector`.
	pub fn query_selector(&self, selector: &str) -> FormResult<Option<MemoryElement>> {
		self.body().query_selector(selector)
	}

	/// Returns every element under `<body>` matching `selector`.
	pub fn query_selector_all(&self, selector: &str) -> FormResult<Vec<MemoryElement>> {
		self.body().query_selector_all(selector)
	}
}

impl Default for MemoryDocument {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for MemoryDocument {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MemoryDocument")
			.field("nodes", &self.dom.borrow().nodes.len())
			.finish()
	}
}

impl FormDocument for MemoryDocument {
	type Host = MemoryElement;

	fn query_form(&self, selector: &str) -> FormResult<Option<MemoryElement>> {
		self.query_selector(selector)
	}
}

/// Handle onto an element of a [`MemoryDocument`].
#[derive(Clone)]
pub struct MemoryElement {
	dom: Rc<RefCell<Dom>>,
	id: NodeId,
}

impl PartialEq for MemoryElement {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.dom, &other.dom) && self.id == other.id
	}
}

impl Eq for MemoryElement {}

impl fmt::Debug for MemoryElement {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let dom = self.dom.borrow();
		let node = dom.node(self.id);
		f.debug_struct("MemoryElement")
			.field("tag", &node.tag)
			.field("attributes", &node.attributes)
			.finish()
	}
}

impl MemoryElement {
	fn handle(&self, id: NodeId) -> MemoryElement {
		MemoryElement {
			dom: Rc::clone(&self.dom),
			id,
		}
	}

	/// Lower-case tag name.
	pub fn tag_name(&self) -> String {
		self.dom.borrow().node(self.id).tag.clone()
	}

	/// Sets an attribute. `checked` and `selected` also update the current
	/// state of controls that were not changed through their properties.
	pub fn set_attribute(&self, name: &str, value: &str) {
		self.dom.borrow_mut().set_attribute(self.id, name, value);
	}

	/// Removes an attribute.
	pub fn remove_attribute(&self, name: &str) {
		self.dom.borrow_mut().remove_attribute(self.id, name);
	}

	/// Returns an attribute value.
	pub fn get_attribute(&self, name: &str) -> Option<String> {
		self.dom
			.borrow()
			.attribute(self.id, &name.to_ascii_lowercase())
			.map(str::to_string)
	}

	/// Appends `child`, moving it from its current parent if needed.
	pub fn append_child(&self, child: &MemoryElement) -> &Self {
		self.dom.borrow_mut().append_child(self.id, child.id);
		self
	}

	/// Removes `child` if it is a child of this element.
	pub fn remove_child(&self, child: &MemoryElement) {
		let mut dom = self.dom.borrow_mut();
		if dom.node(child.id).parent == Some(self.id) {
			dom.detach(child.id);
			dom.normalize_enclosing_select(self.id, None);
		}
	}

	/// Detaches every child.
	pub fn clear_children(&self) {
		let mut dom = self.dom.borrow_mut();
		let children = std::mem::take(&mut dom.node_mut(self.id).children);
		for child in children {
			dom.node_mut(child).parent = None;
		}
	}

	/// Child elements.
	pub fn children(&self) -> Vec<MemoryElement> {
		let children = self.dom.borrow().node(self.id).children.clone();
		children.into_iter().map(|id| self.handle(id)).collect()
	}

	/// The parent element, if attached.
	pub fn parent(&self) -> Option<MemoryElement> {
		let parent = self.dom.borrow().node(self.id).parent;
		parent.map(|id| self.handle(id))
	}

	/// Sets the element's own text (textarea default value, option label).
	pub fn set_text(&self, text: &str) {
		self.dom.borrow_mut().node_mut(self.id).text = text.to_string();
	}

	/// Text content of the element and its descendants.
	pub fn text(&self) -> String {
		self.dom.borrow().text_content(self.id)
	}

	/// Whether an option is selected.
	pub fn is_selected(&self) -> bool {
		self.dom.borrow().node(self.id).selected
	}

	/// Sets an option's selectedness, keeping select-one invariants.
	pub fn set_selected(&self, selected: bool) {
		let mut dom = self.dom.borrow_mut();
		{
			let node = dom.node_mut(self.id);
			node.selected = selected;
			node.dirty_selected = true;
		}
		let preferred = selected.then_some(self.id);
		dom.normalize_enclosing_select(self.id, preferred);
	}

	/// Returns the first descendant matching `selector`.
	pub fn query_selector(&self, selector: &str) -> FormResult<Option<MemoryElement>> {
		Ok(self.query_selector_all(selector)?.into_iter().next())
	}

	/// Returns all descendants matching `selector`, in document order.
	pub fn query_selector_all(&self, selector: &str) -> FormResult<Vec<MemoryElement>> {
		let selector = Selector::parse(selector)?;
		let dom = self.dom.borrow();
		let matches = dom
			.descendants(self.id)
			.into_iter()
			.filter(|&node| {
				selector.matches(&dom.node(node).tag, &|name: &str| {
					dom.attribute(node, name).map(str::to_string)
				})
			})
			.collect::<Vec<_>>();
		drop(dom);
		Ok(matches.into_iter().map(|id| self.handle(id)).collect())
	}

	/// The nearest enclosing `<form>`.
	pub fn form(&self) -> Option<MemoryElement> {
		let form = self.dom.borrow().closest_ancestor(self.id, "form");
		form.map(|id| self.handle(id))
	}

	/// Dispatches a bubbling event of `event_type` at this element.
	pub fn dispatch(&self, event_type: &str) -> MemoryEvent {
		let event = MemoryEvent::new(event_type, self.clone());
		self.dispatch_event(&event);
		event
	}

	/// Dispatches `event` from its target up through the ancestors.
	pub fn dispatch_event(&self, event: &MemoryEvent) {
		let path = self.dom.borrow().path(self.id);
		for node in path {
			let callbacks: Vec<(u64, EventCallback<MemoryEvent>)> = self
				.dom
				.borrow()
				.listeners
				.iter()
				.filter(|entry| entry.node == node && entry.event_type == event.event_type)
				.map(|entry| (entry.id, Rc::clone(&entry.callback)))
				.collect();
			for (id, callback) in callbacks {
				let registered = self.dom.borrow().listeners.iter().any(|entry| entry.id == id);
				if registered {
					callback(event);
				}
			}
			if event.propagation_stopped.get() {
				break;
			}
		}
	}

	/// Simulates a user click.
	///
	/// Disabled controls ignore clicks and return `None`.
	pub fn click(&self) -> Option<MemoryEvent> {
		if self.is_disabled() {
			return None;
		}
		let kind = self.kind();
		let previous = self.is_checked();
		let group_state: Vec<(MemoryElement, bool)> = if kind == ControlKind::Radio {
			self.radio_group()
				.into_iter()
				.map(|radio| {
					let checked = radio.is_checked();
					(radio, checked)
				})
				.collect()
		} else {
			Vec::new()
		};

		match kind {
			ControlKind::Checkbox => self.set_checked(!previous),
			ControlKind::Radio => self.set_checked(true),
			_ => {}
		}

		let event = self.dispatch("click");

		if event.default_prevented() {
			if kind.is_checkable() {
				self.dom.borrow_mut().node_mut(self.id).checked = previous;
				for (radio, checked) in group_state {
					radio.dom.borrow_mut().node_mut(radio.id).checked = checked;
				}
			}
			return Some(event);
		}

		if kind.is_checkable() && self.is_checked() != previous {
			self.dispatch("input");
			self.dispatch("change");
		}

		if kind == ControlKind::Submit
			&& let Some(form) = self.form()
		{
			form.dispatch("submit");
		}

		Some(event)
	}

	fn radio_group(&self) -> Vec<MemoryElement> {
		let name = self.name();
		let scope = self.form().unwrap_or_else(|| {
			let root = self.dom.borrow().root(self.id);
			self.handle(root)
		});
		scope
			.query_selector_all("input")
			.unwrap_or_default()
			.into_iter()
			.filter(|input| {
				*input != *self && input.kind() == ControlKind::Radio && input.name() == name
			})
			.collect()
	}
}

impl FormControl for MemoryElement {
	fn name(&self) -> String {
		self.get_attribute("name").unwrap_or_default()
	}

	fn kind(&self) -> ControlKind {
		ControlKind::from_type(&self.dom.borrow().control_type(self.id))
	}

	fn is_disabled(&self) -> bool {
		self.dom.borrow().has_attribute(self.id, "disabled")
	}

	fn value(&self) -> String {
		self.dom.borrow().value(self.id)
	}

	fn set_value(&self, value: &str) {
		let mut dom = self.dom.borrow_mut();
		let control_type = dom.control_type(self.id);
		let tag = dom.node(self.id).tag.clone();
		match tag.as_str() {
			"input" if ControlKind::from_type(&control_type).is_checkable() => {
				dom.set_attribute(self.id, "value", value);
			}
			"input" | "textarea" => dom.node_mut(self.id).value = Some(value.to_string()),
			"select" => {
				let mut matched = None;
				for option in dom.options(self.id) {
					let selected = matched.is_none() && dom.option_value(option) == value;
					let node = dom.node_mut(option);
					node.selected = selected;
					node.dirty_selected = true;
					if selected {
						matched = Some(option);
					}
				}
				dom.normalize_select(self.id, matched);
			}
			_ => dom.set_attribute(self.id, "value", value),
		}
	}

	fn is_checked(&self) -> bool {
		self.dom.borrow().node(self.id).checked
	}

	fn set_checked(&self, checked: bool) {
		self.dom.borrow_mut().set_checked(self.id, checked);
	}

	fn is_pressed(&self) -> bool {
		self.dom.borrow().node(self.id).pressed
	}

	fn set_pressed(&self, pressed: bool) {
		self.dom.borrow_mut().node_mut(self.id).pressed = pressed;
	}

	fn options(&self) -> Vec<SelectOption> {
		let dom = self.dom.borrow();
		if !dom.is_tag(self.id, "select") {
			return Vec::new();
		}
		dom.options(self.id)
			.into_iter()
			.map(|option| SelectOption {
				value: dom.option_value(option),
				selected: dom.node(option).selected,
			})
			.collect()
	}

	fn select_options(&self, predicate: &mut dyn FnMut(&str) -> bool) {
		let mut dom = self.dom.borrow_mut();
		if !dom.is_tag(self.id, "select") {
			return;
		}
		let mut last_selected = None;
		for option in dom.options(self.id) {
			let selected = predicate(&dom.option_value(option));
			let node = dom.node_mut(option);
			node.selected = selected;
			node.dirty_selected = true;
			if selected {
				last_selected = Some(option);
			}
		}
		dom.normalize_select(self.id, last_selected);
	}
}

/// Token identifying a listener registered on a [`MemoryElement`].
#[derive(Debug, PartialEq, Eq)]
pub struct MemoryListener {
	id: u64,
}

impl FormHost for MemoryElement {
	type Control = MemoryElement;
	type Event = MemoryEvent;
	type Listener = MemoryListener;

	fn query_controls(&self, selector: &str) -> FormResult<Vec<MemoryElement>> {
		self.query_selector_all(selector)
	}

	fn add_listener(
		&self,
		event_type: &str,
		callback: EventCallback<MemoryEvent>,
	) -> FormResult<MemoryListener> {
		let mut dom = self.dom.borrow_mut();
		dom.next_listener += 1;
		let id = dom.next_listener;
		dom.listeners.push(ListenerEntry {
			id,
			node: self.id,
			event_type: event_type.to_string(),
			callback,
		});
		debug_log!("memory dom: added '{}' listener #{}", event_type, id);
		Ok(MemoryListener { id })
	}

	fn remove_listener(&self, event_type: &str, listener: MemoryListener) {
		self.dom.borrow_mut().listeners.retain(|entry| {
			!(entry.id == listener.id && entry.node == self.id && entry.event_type == event_type)
		});
		debug_log!("memory dom: removed '{}' listener #{}", event_type, listener.id);
	}

	fn reset(&self) {
		let event = self.dispatch("reset");
		if !event.default_prevented() {
			self.dom.borrow_mut().reset(self.id);
		}
	}
}

/// An event dispatched through a [`MemoryDocument`].
pub struct MemoryEvent {
	event_type: String,
	target: MemoryElement,
	default_prevented: Cell<bool>,
	propagation_stopped: Cell<bool>,
}

impl MemoryEvent {
	/// Creates an undispatched event.
	pub fn new(event_type: impl Into<String>, target: MemoryElement) -> Self {
		Self {
			event_type: event_type.into(),
			target,
			default_prevented: Cell::new(false),
			propagation_stopped: Cell::new(false),
		}
	}

	/// Whether a listener called `prevent_default`.
	pub fn default_prevented(&self) -> bool {
		self.default_prevented.get()
	}

	/// Stops the event from reaching further ancestors.
	pub fn stop_propagation(&self) {
		self.propagation_stopped.set(true);
	}
}

impl fmt::Debug for MemoryEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MemoryEvent")
			.field("event_type", &self.event_type)
			.field("target", &self.target)
			.field("default_prevented", &self.default_prevented.get())
			.finish()
	}
}

impl FormEvent for MemoryEvent {
	type Control = MemoryElement;

	fn event_type(&self) -> String {
		self.event_type.clone()
	}

	fn target(&self) -> Option<MemoryElement> {
		Some(self.target.clone())
	}

	fn prevent_default(&self) {
		self.default_prevented.set(true);
	}
}

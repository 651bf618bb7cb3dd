//! Form adapter configuration.

use serde::{Deserialize, Serialize};

/// Selector matching the controls a form reads and writes by default.
pub const DEFAULT_CONTROL_SELECTOR: &str = "[name]";

/// Selector used by [`Form::query`](crate::Form::query) when none is given.
pub const DEFAULT_FORM_SELECTOR: &str = "form";

/// Options controlling how a [`Form`](crate::Form) binds to its element.
///
/// Deserializable so applications can ship it alongside other settings:
///
/// ```
/// use reinhardt_formbind::FormOptions;
///
/// let options: FormOptions = serde_json::from_str(r#"{"track_submit": false}"#).unwrap();
/// assert_eq!(options.control_selector, "[name]");
/// assert!(!options.track_submit);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormOptions {
	/// Selector for the controls taking part in reads and writes.
	pub control_selector: String,
	/// Whether clicks on submit controls update their pressed state.
	pub track_submit: bool,
}

impl Default for FormOptions {
	fn default() -> Self {
		Self {
			control_selector: DEFAULT_CONTROL_SELECTOR.to_string(),
			track_submit: true,
		}
	}
}

impl FormOptions {
	/// Creates the default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the control selector.
	pub fn control_selector(mut self, selector: impl Into<String>) -> Self {
		self.control_selector = selector.into();
		self
	}

	/// Sets whether submit presses are tracked.
	pub fn track_submit(mut self, track: bool) -> Self {
		self.track_submit = track;
		self
	}
}

//! Error types for form binding.

/// Errors raised while locating forms, matching controls or wiring listeners.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
	/// No element matched the selector used to locate a form.
	#[error("No form element matches selector '{selector}'")]
	NotFound {
		/// The selector that matched nothing.
		selector: String,
	},
	/// A selector could not be parsed or evaluated.
	#[error("Invalid selector '{selector}': {reason}")]
	Selector {
		/// The offending selector.
		selector: String,
		/// Why it was rejected.
		reason: String,
	},
	/// An event listener could not be attached.
	#[error("Failed to attach '{event_type}' listener: {reason}")]
	Listener {
		/// The native event type.
		event_type: String,
		/// The reason for failure.
		reason: String,
	},
	/// The underlying DOM reported an error.
	#[error("DOM error: {0}")]
	Dom(String),
}

impl FormError {
	pub(crate) fn selector(selector: &str, reason: impl Into<String>) -> Self {
		Self::Selector {
			selector: selector.to_string(),
			reason: reason.into(),
		}
	}
}

/// Result alias used throughout the crate.
pub type FormResult<T> = Result<T, FormError>;

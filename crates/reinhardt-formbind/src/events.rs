//! Event-name rewriting.
//!
//! [`Form::on`](crate::Form::on) accepts the names below and maps them onto
//! native listeners on the form element:
//!
//! | Name | Native event | Payload |
//! |------|--------------|---------|
//! | `change` | `change` | whole form data |
//! | `change:<field>` | `change`, filtered on the target's name | the target's raw value and the field's read value |
//! | `submit` | `submit` | whole form data, including the pressed submit control |
//! | anything else | same name | none |

use crate::value::{FieldValue, FormData};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Prefix of per-field change event names.
const FIELD_CHANGE_PREFIX: &str = "change:";

/// A parsed event name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventName {
	/// Any control changed.
	Change,
	/// The named control changed.
	FieldChange(String),
	/// The form was submitted.
	Submit,
	/// Passed through to the native listener unchanged.
	Native(String),
}

impl EventName {
	/// Parses an event name. The field of a `change:` name is its last
	/// `:`-separated segment, so `change:a:b` watches `b`; an empty field
	/// name means `change`.
	pub fn parse(name: &str) -> Self {
		if name.starts_with(FIELD_CHANGE_PREFIX)
			&& let Some((_, field)) = name.rsplit_once(':')
		{
			return if field.is_empty() {
				Self::Change
			} else {
				Self::FieldChange(field.to_string())
			};
		}
		match name {
			"change" => Self::Change,
			"submit" => Self::Submit,
			other => Self::Native(other.to_string()),
		}
	}

	/// The native event type the listener is registered for.
	pub fn dom_type(&self) -> &str {
		match self {
			Self::Change | Self::FieldChange(_) => "change",
			Self::Submit => "submit",
			Self::Native(name) => name,
		}
	}
}

impl FromStr for EventName {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::parse(s))
	}
}

impl fmt::Display for EventName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::FieldChange(field) => write!(f, "{FIELD_CHANGE_PREFIX}{field}"),
			other => f.write_str(other.dom_type()),
		}
	}
}

/// Data handed to a listener registered with [`Form::on`](crate::Form::on).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventPayload<'a> {
	/// The whole form, read when the event fired.
	Data(&'a FormData),
	/// A `change:<field>` event.
	Field {
		/// Raw value of the control that changed.
		target: &'a str,
		/// The field as read from the whole form after the change.
		value: Option<&'a FieldValue>,
	},
	/// Pass-through events carry no payload.
	Native,
}

impl<'a> EventPayload<'a> {
	/// Returns the form data for `change` and `submit` payloads.
	pub fn data(&self) -> Option<&'a FormData> {
		match self {
			Self::Data(data) => Some(data),
			_ => None,
		}
	}

	/// Returns the field's read value for `change:<field>` payloads.
	pub fn field(&self) -> Option<&'a FieldValue> {
		match self {
			Self::Field { value, .. } => *value,
			_ => None,
		}
	}

	/// Returns the changed control's raw value for `change:<field>` payloads.
	pub fn target_value(&self) -> Option<&'a str> {
		match self {
			Self::Field { target, .. } => Some(*target),
			_ => None,
		}
	}
}

/// Registration returned by [`Form::on`](crate::Form::on); pass it to
/// [`Form::off`](crate::Form::off) to remove the listener.
#[derive(Debug)]
pub struct ListenerHandle<L> {
	pub(crate) name: EventName,
	pub(crate) listener: L,
}

impl<L> ListenerHandle<L> {
	/// The event name the listener was registered with.
	pub fn event_name(&self) -> &EventName {
		&self.name
	}
}

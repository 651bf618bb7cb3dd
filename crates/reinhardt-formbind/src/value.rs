//! Flat key/value representation of form state.
//!
//! A form reads into a [`FormData`] map whose values are [`FieldValue`]s:
//!
//! | Control state | Value |
//! |---------------|-------|
//! | text-like input, textarea, select-one | `Text` |
//! | checked checkbox without a value | `Flag(true)` |
//! | several checked checkboxes, select-multiple | `List` |
//!
//! `Null` never comes out of a read. On write it means "clear": checkbox and
//! radio groups become unchecked and multi-selects lose their selection.
//!
//! Both types serialize to plain JSON (`null`, `true`, `"text"`, `[...]`,
//! `{"key": ...}`). Numbers are accepted on input and stored as text, since
//! every control value is a string.

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;

/// The value of a single form key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
	/// Explicit absence; clears checkable groups and selections on write.
	#[default]
	Null,
	/// Boolean state of a value-less checkbox.
	Flag(bool),
	/// A control's string value.
	Text(String),
	/// Values contributed by several controls or a multi-select.
	List(Vec<FieldValue>),
}

impl FieldValue {
	/// Coerces the value to the string used when comparing against control
	/// values. Lists are joined with `,`.
	pub fn to_text(&self) -> String {
		match self {
			Self::Null => "null".to_string(),
			Self::Flag(flag) => flag.to_string(),
			Self::Text(text) => text.clone(),
			Self::List(items) => items
				.iter()
				.map(FieldValue::to_text)
				.collect::<Vec<_>>()
				.join(","),
		}
	}

	/// Coerces the value to a list of strings for membership tests.
	///
	/// `Null` yields an empty list and scalars a single-element list.
	pub fn to_text_list(&self) -> Vec<String> {
		match self {
			Self::Null => Vec::new(),
			Self::List(items) => items.iter().map(FieldValue::to_text).collect(),
			other => vec![other.to_text()],
		}
	}

	/// Truthiness used by value-less checkboxes.
	pub fn is_truthy(&self) -> bool {
		match self {
			Self::Null => false,
			Self::Flag(flag) => *flag,
			Self::Text(text) => !text.is_empty(),
			Self::List(_) => true,
		}
	}

	/// Returns `true` for [`FieldValue::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Returns the text if this is a [`FieldValue::Text`].
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			_ => None,
		}
	}

	/// Returns the items if this is a [`FieldValue::List`].
	pub fn as_list(&self) -> Option<&[FieldValue]> {
		match self {
			Self::List(items) => Some(items),
			_ => None,
		}
	}

	/// Converts to the equivalent `serde_json::Value`.
	pub fn to_json(&self) -> serde_json::Value {
		match self {
			Self::Null => serde_json::Value::Null,
			Self::Flag(flag) => serde_json::Value::Bool(*flag),
			Self::Text(text) => serde_json::Value::String(text.clone()),
			Self::List(items) => {
				serde_json::Value::Array(items.iter().map(FieldValue::to_json).collect())
			}
		}
	}
}

impl fmt::Display for FieldValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_text())
	}
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for FieldValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&String> for FieldValue {
	fn from(value: &String) -> Self {
		Self::Text(value.clone())
	}
}

impl From<bool> for FieldValue {
	fn from(value: bool) -> Self {
		Self::Flag(value)
	}
}

macro_rules! impl_from_number {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for FieldValue {
				fn from(value: $ty) -> Self {
					Self::Text(value.to_string())
				}
			}
		)*
	};
}

impl_from_number!(i32, i64, u32, u64, usize, f64);

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
	fn from(items: Vec<T>) -> Self {
		Self::List(items.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or(Self::Null)
	}
}

impl From<&serde_json::Value> for FieldValue {
	fn from(value: &serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(flag) => Self::Flag(*flag),
			serde_json::Value::Number(number) => Self::Text(number.to_string()),
			serde_json::Value::String(text) => Self::Text(text.clone()),
			serde_json::Value::Array(items) => {
				Self::List(items.iter().map(FieldValue::from).collect())
			}
			// Nested field names are not supported; objects collapse to their JSON text.
			serde_json::Value::Object(_) => Self::Text(value.to_string()),
		}
	}
}

impl PartialEq<&str> for FieldValue {
	fn eq(&self, other: &&str) -> bool {
		self.as_text() == Some(*other)
	}
}

impl Serialize for FieldValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Null => serializer.serialize_unit(),
			Self::Flag(flag) => serializer.serialize_bool(*flag),
			Self::Text(text) => serializer.serialize_str(text),
			Self::List(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
		}
	}
}

struct FieldValueVisitor;

impl<'de> Visitor<'de> for FieldValueVisitor {
	type Value = FieldValue;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("null, a boolean, a string, a number or a list of those")
	}

	fn visit_unit<E: de::Error>(self) -> Result<FieldValue, E> {
		Ok(FieldValue::Null)
	}

	fn visit_none<E: de::Error>(self) -> Result<FieldValue, E> {
		Ok(FieldValue::Null)
	}

	fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<FieldValue, D::Error> {
		FieldValue::deserialize(deserializer)
	}

	fn visit_bool<E: de::Error>(self, value: bool) -> Result<FieldValue, E> {
		Ok(FieldValue::Flag(value))
	}

	fn visit_i64<E: de::Error>(self, value: i64) -> Result<FieldValue, E> {
		Ok(FieldValue::from(value))
	}

	fn visit_u64<E: de::Error>(self, value: u64) -> Result<FieldValue, E> {
		Ok(FieldValue::from(value))
	}

	fn visit_f64<E: de::Error>(self, value: f64) -> Result<FieldValue, E> {
		Ok(FieldValue::from(value))
	}

	fn visit_str<E: de::Error>(self, value: &str) -> Result<FieldValue, E> {
		Ok(FieldValue::from(value))
	}

	fn visit_string<E: de::Error>(self, value: String) -> Result<FieldValue, E> {
		Ok(FieldValue::Text(value))
	}

	fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<FieldValue, A::Error> {
		let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
		while let Some(item) = seq.next_element::<FieldValue>()? {
			items.push(item);
		}
		Ok(FieldValue::List(items))
	}
}

impl<'de> Deserialize<'de> for FieldValue {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_any(FieldValueVisitor)
	}
}

/// Ordered map from control name to [`FieldValue`].
///
/// Keys keep the order in which they were first inserted, which for
/// [`Form::get_data`](crate::Form::get_data) is document order. Equality
/// ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct FormData {
	entries: IndexMap<String, FieldValue>,
}

impl FormData {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&FieldValue> {
		self.entries.get(key)
	}

	/// Returns a mutable reference to the value stored under `key`.
	pub fn get_mut(&mut self, key: &str) -> Option<&mut FieldValue> {
		self.entries.get_mut(key)
	}

	/// Stores `value` under `key`, returning the previous value.
	///
	/// Replacing a key keeps its original position.
	pub fn insert(
		&mut self,
		key: impl Into<String>,
		value: impl Into<FieldValue>,
	) -> Option<FieldValue> {
		self.entries.insert(key.into(), value.into())
	}

	/// Removes `key`, returning its value. Later keys keep their order.
	pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
		self.entries.shift_remove(key)
	}

	/// Returns `true` if `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Number of keys.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if no keys are stored.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over `(key, value)` pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
		self.entries.iter().map(|(name, value)| (name.as_str(), value))
	}

	/// Iterates over keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	/// Converts to a JSON object with keys in insertion order.
	pub fn to_json(&self) -> serde_json::Value {
		serde_json::Value::Object(
			self.entries
				.iter()
				.map(|(name, value)| (name.clone(), value.to_json()))
				.collect(),
		)
	}
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FormData {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			entries: iter
				.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		}
	}
}

impl<K: Into<String>, V: Into<FieldValue>, const N: usize> From<[(K, V); N]> for FormData {
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

impl IntoIterator for FormData {
	type Item = (String, FieldValue);
	type IntoIter = indexmap::map::IntoIter<String, FieldValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

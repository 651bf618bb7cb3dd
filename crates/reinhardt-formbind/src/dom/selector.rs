//! Minimal CSS selector matching for the in-memory backend.
//!
//! Supported: comma-separated compound selectors built from a tag name or
//! `*`, `#id`, `.class`, `[attr]` and `[attr=value]` (value optionally
//! quoted). Combinators and pseudo-classes are rejected.

use crate::error::{FormError, FormResult};

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttributeMatch {
	name: String,
	value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
	tag: Option<String>,
	id: Option<String>,
	classes: Vec<String>,
	attributes: Vec<AttributeMatch>,
}

/// A parsed selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
	alternatives: Vec<Compound>,
}

impl Selector {
	/// Parses `source`.
	pub fn parse(source: &str) -> FormResult<Self> {
		let alternatives = source
			.split(',')
			.map(|part| parse_compound(source, part.trim()))
			.collect::<FormResult<Vec<_>>>()?;
		Ok(Self { alternatives })
	}

	/// Tests an element given its tag name and an attribute lookup.
	pub fn matches(&self, tag: &str, attribute: &dyn Fn(&str) -> Option<String>) -> bool {
		self.alternatives
			.iter()
			.any(|compound| compound_matches(compound, tag, attribute))
	}
}

fn compound_matches(
	compound: &Compound,
	tag: &str,
	attribute: &dyn Fn(&str) -> Option<String>,
) -> bool {
	if let Some(expected) = &compound.tag
		&& !expected.eq_ignore_ascii_case(tag)
	{
		return false;
	}
	if let Some(id) = &compound.id
		&& attribute("id").as_deref() != Some(id.as_str())
	{
		return false;
	}
	if !compound.classes.is_empty() {
		let classes = attribute("class").unwrap_or_default();
		let present: Vec<&str> = classes.split_whitespace().collect();
		if !compound.classes.iter().all(|class| present.contains(&class.as_str())) {
			return false;
		}
	}
	compound
		.attributes
		.iter()
		.all(|matcher| match (attribute(&matcher.name), &matcher.value) {
			(Some(_), None) => true,
			(Some(actual), Some(expected)) => &actual == expected,
			(None, _) => false,
		})
}

fn is_ident_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(chars: &[char], pos: &mut usize) -> String {
	let start = *pos;
	while *pos < chars.len() && is_ident_char(chars[*pos]) {
		*pos += 1;
	}
	chars[start..*pos].iter().collect()
}

fn parse_compound(source: &str, part: &str) -> FormResult<Compound> {
	if part.is_empty() {
		return Err(FormError::selector(source, "empty selector"));
	}

	let chars: Vec<char> = part.chars().collect();
	let mut compound = Compound::default();
	let mut pos = 0;

	if chars[0] == '*' {
		pos = 1;
	} else if is_ident_char(chars[0]) {
		compound.tag = Some(take_ident(&chars, &mut pos).to_ascii_lowercase());
	}

	while pos < chars.len() {
		let c = chars[pos];
		pos += 1;
		match c {
			'#' | '.' => {
				let ident = take_ident(&chars, &mut pos);
				if ident.is_empty() {
					return Err(FormError::selector(source, format!("expected a name after '{c}'")));
				}
				if c == '#' {
					compound.id = Some(ident);
				} else {
					compound.classes.push(ident);
				}
			}
			'[' => {
				let close = chars[pos..]
					.iter()
					.position(|&c| c == ']')
					.ok_or_else(|| FormError::selector(source, "unterminated attribute selector"))?;
				let body: String = chars[pos..pos + close].iter().collect();
				pos += close + 1;
				compound.attributes.push(parse_attribute(source, &body)?);
			}
			c if c.is_whitespace() || matches!(c, '>' | '+' | '~') => {
				return Err(FormError::selector(source, "combinators are not supported"));
			}
			other => {
				return Err(FormError::selector(source, format!("unexpected character '{other}'")));
			}
		}
	}

	Ok(compound)
}

fn parse_attribute(source: &str, body: &str) -> FormResult<AttributeMatch> {
	let (name, value) = match body.split_once('=') {
		Some((name, value)) => {
			let value = value.trim();
			let unquoted = value
				.strip_prefix('"')
				.and_then(|v| v.strip_suffix('"'))
				.or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
				.unwrap_or(value);
			(name.trim(), Some(unquoted.to_string()))
		}
		None => (body.trim(), None),
	};

	if name.is_empty() || !name.chars().all(is_ident_char) {
		return Err(FormError::selector(source, format!("invalid attribute name '{name}'")));
	}

	Ok(AttributeMatch {
		name: name.to_ascii_lowercase(),
		value,
	})
}

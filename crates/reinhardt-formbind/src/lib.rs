//! Reinhardt Formbind - two-way binding between HTML forms and flat data
//!
//! Reads the current state of a form's controls into a key/value map, writes
//! a map back into the controls, and re-emits `change`/`submit` events with
//! the aggregated form data instead of the raw event.
//!
//! ## Architecture
//!
//! - [`value`]: [`FieldValue`] and [`FormData`], the flat representation
//! - [`codec`]: per-control encoding rules (text, checkbox groups, radios,
//!   selects, submit press state)
//! - [`dom`]: DOM abstraction traits with an in-memory backend and, on
//!   wasm32, a `web-sys` backend
//! - [`form`](mod@form): the [`Form`] adapter
//! - [`events`]: event-name rewriting (`change`, `change:<field>`, `submit`)
//! - [`config`]: [`FormOptions`]
//! - [`logging`]: logging macros for WASM and native targets
//!
//! ## Example
//!
//! ```
//! use reinhardt_formbind::dom::memory::MemoryDocument;
//! use reinhardt_formbind::{FieldValue, Form};
//!
//! let document = MemoryDocument::new();
//! let element = document.element("form", &[]);
//! for skill in ["frontend", "backend", "devops"] {
//!     element.append_child(&document.element(
//!         "input",
//!         &[("type", "checkbox"), ("name", "skills"), ("value", skill)],
//!     ));
//! }
//! document.body().append_child(&element);
//!
//! let form = Form::new(element).unwrap();
//! form.set("skills", vec!["frontend", "devops"]);
//! assert_eq!(
//!     form.get("skills"),
//!     Some(FieldValue::from(vec!["frontend", "devops"]))
//! );
//! ```
//!
//! In the browser, wrap a live element instead:
//!
//! ```ignore
//! use reinhardt_formbind::dom::web::WebDocument;
//! use reinhardt_formbind::Form;
//!
//! let document = WebDocument::global().expect("no document");
//! let form = Form::query(&document, Some("#signup"))?;
//! form.on_submit(|data, event| {
//!     event.prevent_default();
//!     web_sys::console::log_1(&data.to_json().to_string().into());
//! })?;
//! ```

#![warn(missing_docs)]

pub mod codec;
pub mod config;
pub mod dom;
pub mod error;
pub mod events;
pub mod form;
pub mod logging;
pub mod value;

pub use codec::{read_control, valid_control, write_control};
pub use config::FormOptions;
pub use dom::{ControlKind, FormControl, FormDocument, FormEvent, FormHost, SelectOption};
pub use error::{FormError, FormResult};
pub use events::{EventName, EventPayload, ListenerHandle};
pub use form::Form;
pub use value::{FieldValue, FormData};

#[doc(hidden)]
pub mod __private {
	pub use tracing;
	#[cfg(target_arch = "wasm32")]
	pub use web_sys;
}

#![warn(clippy::pedantic)]

//! Client-side half of the dynamic-form-fragment protocol: regions of a form whose
//! markup is re-rendered by the server whenever a trigger field changes.
//!
//! The crate is two cooperating pieces. [`bind`] scans a scope for fragment
//! containers and arms their declared trigger events. [`refresh`] handles a fired
//! trigger: it captures the enclosing [***form***](https://developer.mozilla.org/en-US/docs/Web/API/HTMLFormElement)'s
//! state, exchanges it with the server endpoint and swaps the returned markup into
//! the fragment wholesale, after which the replaced subtree is re-armed. The cycle
//! repeats indefinitely; no state is kept between cycles beyond the live DOM and
//! the binding registry.

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::UnwrapThrowExt;

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod bind;
pub mod config;
pub mod refresh;
pub mod token;
pub mod trigger;

/// Class naming a fragment container element. The container also carries
/// [`FORM_KEY_ATTRIBUTE`] and must be a descendant of a `<form>`.
pub const CONTAINER_CLASS: &str = "ddf-form-container";

/// Attribute on a fragment container holding its server-issued form key.
/// The key is stable across refreshes; it names *which* fragment to render,
/// not a version of its content.
pub const FORM_KEY_ATTRIBUTE: &str = "data-form-key";

/// Attribute on a trigger element naming the DOM event that starts a refresh.
pub const TRIGGER_ATTRIBUTE: &str = "data-ddf-trigger";

/// Synthetic field appended (last) to the captured form state on each request.
pub const FORM_KEY_FIELD: &str = "ddf-form-key";

/// Document-level [***CustomEvent***](https://developer.mozilla.org/en-US/docs/Web/API/CustomEvent)
/// dispatched once at [`init`] and again after every successful fragment swap.
pub const UPDATED_EVENT: &str = "ddfFormUpdated";

/// Arms every fragment in the document and announces [`UPDATED_EVENT`] once.
///
/// Call this exactly once, after the document has been parsed. Fragments injected
/// by later refreshes are re-armed by the refresh cycle itself; there is no need
/// to call this again.
#[wasm_bindgen]
pub fn init() {
	let document = web_sys::window()
		.expect_throw("dynamic-form-dom: No `window`.")
		.document()
		.expect_throw("dynamic-form-dom: No `document` on `window`.");
	bind::bind(document.as_ref());
	refresh::announce_update(&document);
}

use crate::{bind, config, token, CONTAINER_CLASS, FORM_KEY_ATTRIBUTE, FORM_KEY_FIELD, UPDATED_EVENT};
use tracing::{debug, trace, warn};
use wasm_bindgen::{closure::Closure, JsCast, UnwrapThrowExt};
use web_sys::{CustomEvent, Document, Element, Event, FormData, HtmlFormElement, XmlHttpRequest};

/// Runs one refresh cycle for the fragment enclosing the origin of `event`.
///
/// Resolves the nearest fragment container of the event's target and that
/// container's enclosing form, captures the form state and exchanges it with the
/// server. The handler returns as soon as the request is issued; the swap (or
/// silent no-op on failure) happens when the response arrives.
///
/// A trigger that fires outside a fragment container, or a container outside a
/// form, is a wiring bug in the page markup. Both are skipped without touching
/// the DOM, so one miswired fragment never affects the rest of the page.
pub fn refresh(event: &Event) {
	let target = match event.target().and_then(|target| target.dyn_into::<Element>().ok()) {
		Some(target) => target,
		None => return warn!("Trigger event {:?} carries no element target.", event.type_()),
	};
	let container = match target.closest(&format!(".{}", CONTAINER_CLASS)).ok().flatten() {
		Some(container) => container,
		None => return warn!("Trigger element {:?} is not inside a fragment container.", target),
	};
	let form = match container
		.closest("form")
		.ok()
		.flatten()
		.and_then(|form| form.dyn_into::<HtmlFormElement>().ok())
	{
		Some(form) => form,
		None => return warn!("Fragment container {:?} is not inside a form.", container),
	};
	let form_key = match container.get_attribute(FORM_KEY_ATTRIBUTE) {
		Some(form_key) => form_key,
		None => return warn!("Fragment container {:?} declares no form key.", container),
	};

	send(&form_state(&form, &form_key), container);
}

/// Snapshots the submittable fields of `form` in document order (standard
/// browser semantics: unchecked checkboxes and disabled fields excluded,
/// multi-valued fields contribute one pair each) and appends the fragment's
/// `form_key` as the final [`FORM_KEY_FIELD`] pair.
#[must_use]
pub fn form_state(form: &HtmlFormElement, form_key: &str) -> FormData {
	let state = FormData::new_with_form(form).expect_throw("dynamic-form-dom: Could not capture form state.");
	state
		.append_with_str(FORM_KEY_FIELD, form_key)
		.expect_throw("dynamic-form-dom: Could not append the form key.");
	state
}

/// Applies one server response to `container`.
///
/// Status 200 replaces the container's contents wholesale with `body`, re-arms
/// the replaced subtree and announces [`UPDATED_EVENT`] on the owner document.
/// Any other status leaves the fragment exactly as it was. Responses are applied
/// strictly in arrival order; overlapping refreshes of one fragment are not
/// sequenced, so the last arrival wins regardless of send order.
pub fn apply(container: &Element, status: u16, body: &str) {
	if status != 200 {
		return debug!("Refresh answered with status {}; fragment unchanged.", status);
	}
	container.set_inner_html(body);
	bind::bind(container.as_ref());
	if let Some(document) = container.owner_document() {
		announce_update(&document);
	}
	trace!("Fragment refreshed.");
}

pub(crate) fn announce_update(document: &Document) {
	match CustomEvent::new(UPDATED_EVENT) {
		Ok(event) => {
			let _ = document.dispatch_event(&event);
		}
		Err(error) => debug!("Could not announce the update: {:?}", error),
	}
}

fn send(state: &FormData, container: Element) {
	let config = config::current();

	let request = match XmlHttpRequest::new() {
		Ok(request) => request,
		Err(error) => return debug!("Could not create a refresh request: {:?}", error),
	};
	if request.open("POST", &config.endpoint).is_err() {
		return debug!("Could not open a refresh request to {:?}.", config.endpoint);
	}
	match token::csrf_token(&config.token_cookie) {
		Some(token) => {
			if request.set_request_header(&config.token_header, &token).is_err() {
				return debug!("Could not set the {:?} header.", config.token_header);
			}
		}
		None => trace!("No {:?} cookie; sending without {:?}.", config.token_cookie, config.token_header),
	}

	// `once_into_js` hands the closure to the JavaScript side, which reclaims it
	// after the first call. A response that never arrives leaks it, along with
	// the request it belongs to.
	let receiver = request.clone();
	let on_load = Closure::once_into_js(move || {
		let status = receiver.status().unwrap_or(0);
		let body = receiver.response_text().ok().flatten().unwrap_or_default();
		apply(&container, status, &body);
	});
	if request
		.add_event_listener_with_callback("load", on_load.unchecked_ref())
		.is_err()
	{
		return debug!("Could not attach the response listener.");
	}

	if let Err(error) = request.send_with_opt_form_data(Some(state)) {
		debug!("Could not send the refresh request: {:?}", error);
	}
}

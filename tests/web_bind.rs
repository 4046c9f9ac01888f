use dynamic_form_dom::{bind, trigger::TriggerEvent};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{window, Document, Element};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
	window().unwrap().document().unwrap()
}

fn set_page(markup: &str) -> Document {
	let document = document();
	document.body().unwrap().set_inner_html(markup);
	document
}

fn by_id(document: &Document, id: &str) -> Element {
	document.get_element_by_id(id).unwrap()
}

#[wasm_bindgen_test]
fn binds_every_declared_trigger() {
	let document = set_page(
		"<form>\
			<div class=\"ddf-form-container\" data-form-key=\"a\">\
				<select id=\"country\" name=\"country\" data-ddf-trigger=\"change\"></select>\
				<button id=\"reload\" type=\"button\" data-ddf-trigger=\"click\"></button>\
			</div>\
			<div class=\"ddf-form-container\" data-form-key=\"b\">\
				<input id=\"query\" name=\"query\" data-ddf-trigger=\"keyup\" />\
			</div>\
		</form>",
	);

	assert_eq!(bind::trigger_elements(document.as_ref()).len(), 3);

	bind::bind(document.as_ref());
	assert_eq!(bind::binding_count(), 3);
	assert!(bind::is_bound(&by_id(&document, "country"), "change"));
	assert!(bind::is_bound(&by_id(&document, "reload"), "click"));
	assert!(bind::is_bound(&by_id(&document, "query"), "keyup"));
	assert!(!bind::is_bound(&by_id(&document, "country"), "click"));
}

#[wasm_bindgen_test]
fn rebinding_attaches_nothing_new() {
	let document = set_page(
		"<form>\
			<div class=\"ddf-form-container\" data-form-key=\"a\">\
				<select id=\"first\" name=\"first\" data-ddf-trigger=\"change\"></select>\
			</div>\
			<div id=\"second-fragment\" class=\"ddf-form-container\" data-form-key=\"b\">\
				<select id=\"second\" name=\"second\" data-ddf-trigger=\"change\"></select>\
			</div>\
		</form>",
	);

	bind::bind(document.as_ref());
	assert_eq!(bind::binding_count(), 2);

	// Whole-document pass over still-live bindings.
	bind::bind(document.as_ref());
	assert_eq!(bind::binding_count(), 2);

	// Scoped pass, as after a refresh of the second fragment.
	bind::bind(by_id(&document, "second-fragment").as_ref());
	assert_eq!(bind::binding_count(), 2);
}

#[wasm_bindgen_test]
fn nested_containers_bind_once() {
	let document = set_page(
		"<form>\
			<div class=\"ddf-form-container\" data-form-key=\"outer\">\
				<select id=\"outer-select\" name=\"outer\" data-ddf-trigger=\"change\"></select>\
				<div class=\"ddf-form-container\" data-form-key=\"inner\">\
					<select id=\"inner-select\" name=\"inner\" data-ddf-trigger=\"change\"></select>\
				</div>\
			</div>\
		</form>",
	);

	// The outer container's scan sees the inner trigger too; it must still
	// appear exactly once.
	assert_eq!(bind::trigger_elements(document.as_ref()).len(), 2);

	bind::bind(document.as_ref());
	assert_eq!(bind::binding_count(), 2);
	assert!(bind::is_bound(&by_id(&document, "inner-select"), "change"));
}

#[wasm_bindgen_test]
fn scoped_scan_includes_the_scope_container_itself() {
	let document = set_page(
		"<form>\
			<div id=\"fragment\" class=\"ddf-form-container\" data-form-key=\"a\">\
				<select id=\"field\" name=\"field\" data-ddf-trigger=\"change\"></select>\
			</div>\
		</form>",
	);

	let fragment = by_id(&document, "fragment");
	assert_eq!(bind::trigger_elements(fragment.as_ref()).len(), 1);

	bind::bind(fragment.as_ref());
	assert!(bind::is_bound(&by_id(&document, "field"), "change"));
}

#[wasm_bindgen_test]
fn unrecognised_event_names_are_still_bound() {
	let document = set_page(
		"<form>\
			<div class=\"ddf-form-container\" data-form-key=\"a\">\
				<input id=\"custom\" name=\"custom\" data-ddf-trigger=\"focus\" />\
			</div>\
		</form>",
	);

	bind::bind(document.as_ref());
	assert!(bind::is_bound(&by_id(&document, "custom"), "focus"));
}

#[wasm_bindgen_test]
fn triggers_outside_containers_are_ignored() {
	let document = set_page(
		"<form>\
			<input id=\"stray\" name=\"stray\" data-ddf-trigger=\"change\" />\
		</form>",
	);

	assert!(bind::trigger_elements(document.as_ref()).is_empty());
	bind::bind(document.as_ref());
	assert_eq!(bind::binding_count(), 0);
}

#[wasm_bindgen_test]
fn trigger_vocabulary_round_trips() {
	for &event in &[
		TriggerEvent::Blur,
		TriggerEvent::Change,
		TriggerEvent::Click,
		TriggerEvent::DoubleClick,
		TriggerEvent::Input,
		TriggerEvent::KeyUp,
		TriggerEvent::KeyDown,
		TriggerEvent::Select,
	] {
		assert_eq!(TriggerEvent::parse(event.as_str()), Some(event));
		assert_eq!(event.to_string(), event.as_str());
	}
	assert_eq!(TriggerEvent::parse("dblclick"), Some(TriggerEvent::DoubleClick));
	assert_eq!(TriggerEvent::parse("hover"), None);
}

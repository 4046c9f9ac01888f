use crate::{refresh, trigger::TriggerEvent, CONTAINER_CLASS, TRIGGER_ATTRIBUTE};
use core::cell::RefCell;
use tracing::{trace, warn};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, Node, NodeList};

struct Binding {
	target: Element,
	event: String,
}

thread_local! {
	static BINDINGS: RefCell<Vec<Binding>> = RefCell::new(Vec::new());

	// One JavaScript function shared by every binding. Registering the same
	// function twice for one target and event is a no-op for `addEventListener`,
	// so a stray double-bind can't fan out into duplicate refresh requests even
	// if the registry were bypassed.
	static TRIGGER_HANDLER: Closure<dyn Fn(web_sys::Event)> =
		Closure::wrap(Box::new(|event: web_sys::Event| refresh::refresh(&event)) as Box<dyn Fn(web_sys::Event)>);
}

/// Arms every trigger element inside the fragment containers of `scope`.
///
/// `scope` is the whole [***Document***](https://developer.mozilla.org/en-US/docs/Web/API/Document)
/// at page load, or the just-replaced fragment container after a refresh; other
/// node types are a no-op. Idempotent per element and event: re-invoking over a
/// scope whose bindings are still live attaches nothing new, so unaffected
/// sibling and ancestor fragments keep their single binding.
pub fn bind(scope: &Node) {
	prune();
	for (target, event) in trigger_elements(scope) {
		if TriggerEvent::parse(&event).is_none() {
			warn!("Unrecognised trigger event {:?} on {:?}; binding it anyway.", event, target);
		}
		attach(&target, &event);
	}
}

/// Every element under `scope` (fragment containers included when `scope` is
/// one itself) that declares a trigger, paired with its declared event name.
/// Pure lookup against the live tree at call time; attaches nothing.
#[must_use]
pub fn trigger_elements(scope: &Node) -> Vec<(Element, String)> {
	let mut containers = Vec::new();
	if let Some(element) = scope.dyn_ref::<Element>() {
		if element.matches(&format!(".{}", CONTAINER_CLASS)).unwrap_or(false) {
			containers.push(element.clone());
		}
	}
	if let Some(list) = query_all(scope, &format!(".{}", CONTAINER_CLASS)) {
		collect_elements(&list, &mut containers);
	}

	let mut found: Vec<(Element, String)> = Vec::new();
	for container in &containers {
		let list = match container.query_selector_all(&format!("[{}]", TRIGGER_ATTRIBUTE)) {
			Ok(list) => list,
			Err(_) => continue,
		};
		let mut triggers = Vec::new();
		collect_elements(&list, &mut triggers);
		for element in triggers {
			// Nested containers are scanned by their ancestors too.
			if found.iter().any(|(seen, _)| seen.is_same_node(Some(element.as_ref()))) {
				continue;
			}
			match element.get_attribute(TRIGGER_ATTRIBUTE) {
				Some(event) if !event.is_empty() => found.push((element, event)),
				_ => warn!("Trigger element {:?} declares no event name.", element),
			}
		}
	}
	found
}

/// Whether `target` currently holds a live binding for `event`.
#[must_use]
pub fn is_bound(target: &Element, event: &str) -> bool {
	BINDINGS.with(|bindings| {
		bindings
			.borrow()
			.iter()
			.any(|binding| binding.event == event && binding.target.is_same_node(Some(target.as_ref())))
	})
}

/// Number of registered bindings. Bindings whose element has left the document
/// are only discarded by the next [`bind`] pass, so this may briefly overcount
/// after a swap.
#[must_use]
pub fn binding_count() -> usize {
	BINDINGS.with(|bindings| bindings.borrow().len())
}

fn attach(target: &Element, event: &str) {
	if is_bound(target, event) {
		return;
	}
	let attached = TRIGGER_HANDLER.with(|handler| {
		target.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
	});
	match attached {
		Ok(()) => {
			BINDINGS.with(|bindings| {
				bindings.borrow_mut().push(Binding {
					target: target.clone(),
					event: event.to_owned(),
				});
			});
			trace!("Bound {:?} on {:?}.", event, target);
		}
		Err(error) => warn!("Failed to bind {:?} on {:?}: {:?}", event, target, error),
	}
}

fn prune() {
	BINDINGS.with(|bindings| {
		let mut bindings = bindings.borrow_mut();
		let before = bindings.len();
		bindings.retain(|binding| binding.target.is_connected());
		let freed = before - bindings.len();
		if freed > 0 {
			trace!("Dropped {} stale binding(s).", freed);
		}
	});
}

fn query_all(scope: &Node, selector: &str) -> Option<NodeList> {
	if let Some(document) = scope.dyn_ref::<Document>() {
		document.query_selector_all(selector).ok()
	} else if let Some(element) = scope.dyn_ref::<Element>() {
		element.query_selector_all(selector).ok()
	} else {
		None
	}
}

fn collect_elements(list: &NodeList, out: &mut Vec<Element>) {
	for i in 0..list.length() {
		if let Some(element) = list.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
			out.push(element);
		}
	}
}

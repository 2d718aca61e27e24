//! The browser side: [`DomPort`] over [`web_sys`], and the window `scroll` listener.

use crate::{
	config::{NavSyncConfig, Selectors},
	controller::PageController,
	dom::{DomPort, Role},
};
use core::cell::{Ref, RefCell};
use js_sys::Function;
use std::rc::Rc;
#[cfg(feature = "console-log")]
use tracing::debug;
use tracing::{error, instrument, trace, warn};
use wasm_bindgen::{closure::Closure, prelude::wasm_bindgen, JsCast, UnwrapThrowExt};
use web_sys::{Document, Element, Window};

/// Resolves [`Role`]s with CSS selectors against a live [`Document`].
///
/// Selector syntax errors are logged and treated like a missing element.
#[derive(Debug, Clone)]
pub struct WebDom {
	document: Document,
	selectors: Selectors,
}

impl WebDom {
	#[must_use]
	pub fn new(document: Document, selectors: Selectors) -> Self {
		Self { document, selectors }
	}

	fn query(&self, scope: Option<&Element>, selector: &str) -> Option<Element> {
		let result = match scope {
			Some(scope) => scope.query_selector(selector),
			None => self.document.query_selector(selector),
		};
		result.unwrap_or_else(|error| {
			error!("`querySelector({:?})` failed: {:?}", selector, error);
			None
		})
	}
}

impl DomPort for WebDom {
	type Handle = Element;

	fn find_by_role(&self, scope: Option<&Element>, role: Role) -> Option<Element> {
		let selector = self.selectors.for_role(role)?;
		self.query(scope, selector)
	}

	fn find_all_by_role(&self, role: Role) -> Vec<Element> {
		let selector = match self.selectors.for_role(role) {
			Some(selector) => selector,
			None => return Vec::new(),
		};
		let nodes = match self.document.query_selector_all(selector) {
			Ok(nodes) => nodes,
			Err(error) => {
				error!("`querySelectorAll({:?})` failed: {:?}", selector, error);
				return Vec::new();
			}
		};
		(0..nodes.length()).filter_map(|i| nodes.item(i)).filter_map(|node| node.dyn_into::<Element>().ok()).collect()
	}

	fn child_elements(&self, element: &Element) -> Vec<Element> {
		let children = element.children();
		(0..children.length()).filter_map(|i| children.item(i)).collect()
	}

	fn first_descendant(&self, element: &Element, tag: &str) -> Option<Element> {
		self.query(Some(element), tag)
	}

	fn tag_name(&self, element: &Element) -> String {
		element.tag_name()
	}

	fn attribute(&self, element: &Element, name: &str) -> Option<String> {
		element.get_attribute(name)
	}

	fn bounding_top(&self, element: &Element) -> f64 {
		element.get_bounding_client_rect().top()
	}

	fn set_class(&self, element: &Element, class: &str) {
		element.set_class_name(class);
	}

	fn toggle_class(&self, element: &Element, class: &str, force: bool) {
		if let Err(error) = element.class_list().toggle_with_force(class, force) {
			error!("Failed to toggle class {:?}: {:?}", class, error);
		}
	}

	fn set_text(&self, element: &Element, text: &str) {
		element.set_text_content(Some(text));
	}
}

/// Runs a [`PageController`]'s callbacks on every `scroll` event of a [`Window`].
///
/// The listener is removed when this is dropped. Use [`forget`](`ScrollListener::forget`) to keep it for the page's lifetime.
pub struct ScrollListener {
	window: Window,
	handler: Closure<dyn FnMut()>,
	controller: Rc<RefCell<PageController<WebDom>>>,
}

impl ScrollListener {
	#[must_use]
	#[instrument(skip(window, controller))]
	pub fn attach(window: Window, controller: PageController<WebDom>) -> Self {
		let controller = Rc::new(RefCell::new(controller));
		let handler = Closure::wrap(Box::new({
			let controller = Rc::clone(&controller);
			move || match controller.try_borrow_mut() {
				Ok(mut controller) => controller.on_scroll(),
				// Only reachable if a callback itself dispatches `scroll` synchronously.
				Err(_) => warn!("Re-entrant scroll event ignored"),
			}
		}) as Box<dyn FnMut()>);

		match window.add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref::<Function>()) {
			Ok(()) => trace!("Listening for scroll events"),
			Err(error) => error!("Failed to listen for scroll events: {:?}", error),
		}
		Self { window, handler, controller }
	}

	/// # Panics
	///
	/// Iff called from within one of the controller's own callbacks.
	#[must_use]
	pub fn controller(&self) -> Ref<'_, PageController<WebDom>> {
		self.controller.borrow()
	}

	/// Leaks the listener so that it stays attached until the page unloads.
	pub fn forget(self) {
		core::mem::forget(self);
	}
}

impl Drop for ScrollListener {
	fn drop(&mut self) {
		if let Err(error) = self.window.remove_event_listener_with_callback("scroll", self.handler.as_ref().unchecked_ref::<Function>()) {
			error!("Failed to stop listening for scroll events: {:?}", error);
		}
	}
}

/// Sets up the current page according to `config` and starts following scroll events.
///
/// Must run after the document has been parsed, e.g. from a `defer`red script.
#[must_use]
pub fn install(config: NavSyncConfig) -> ScrollListener {
	let window = web_sys::window().expect_throw("navsync-dom: No `window` found.");
	let document = window.document().expect_throw("navsync-dom: No document found for `window`.");

	let mut controller = PageController::new(WebDom::new(document, config.selectors.clone()), config);
	controller.setup();
	ScrollListener::attach(window, controller)
}

/// [`install`]s the default theme configuration for the rest of the page's lifetime.
#[wasm_bindgen(js_name = installTheme)]
pub fn install_theme() {
	init_console_log();
	install(NavSyncConfig::default()).forget();
}

#[cfg(feature = "console-log")]
fn init_console_log() {
	if let Err(error) = tracing_wasm::try_set_as_global_default() {
		debug!("Keeping the existing global subscriber: {}", error);
	}
}

#[cfg(not(feature = "console-log"))]
fn init_console_log() {}

//! Page-lifetime wiring: finding the optional widgets once and refreshing them on every scroll.

use crate::{
	config::NavSyncConfig,
	dom::{DomPort, Role},
	highlight::{document_sections, highlight_current_section},
	profile::{resize_profile, update_nav_shadow},
	toc::{NavList, TocIndex},
};
use tracing::{debug, error, info, instrument, trace_span};

/// Owns a document's [`DomPort`], the configuration and the callbacks run on each scroll event.
///
/// Callbacks only ever get appended, and run in the order they were registered.
pub struct PageController<D: DomPort> {
	dom: D,
	config: NavSyncConfig,
	on_scroll: Vec<Box<dyn FnMut(&D)>>,
}

impl<D: DomPort> core::fmt::Debug for PageController<D>
where
	D: core::fmt::Debug,
{
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("PageController")
			.field("dom", &self.dom)
			.field("config", &self.config)
			.field("on_scroll", &self.on_scroll.len())
			.finish()
	}
}

impl<D: DomPort + 'static> PageController<D> {
	#[must_use]
	pub fn new(dom: D, config: NavSyncConfig) -> Self {
		Self { dom, config, on_scroll: Vec::new() }
	}

	#[must_use]
	pub fn dom(&self) -> &D {
		&self.dom
	}

	/// How many callbacks each [`on_scroll`](`PageController::on_scroll`) runs.
	#[must_use]
	pub fn callback_count(&self) -> usize {
		self.on_scroll.len()
	}

	pub fn register(&mut self, callback: impl FnMut(&D) + 'static) {
		self.on_scroll.push(Box::new(callback));
	}

	/// Looks for the profile card, the nav bar and the local table of contents,
	/// brings each one that is present up to date and registers it for scroll updates.
	///
	/// Absent widgets are skipped. Call this once per page.
	#[instrument(skip(self))]
	pub fn setup(&mut self) {
		self.setup_profile();
		self.setup_nav_shadow();
		self.setup_local_toc();
		info!("{} scroll callback(s) registered", self.on_scroll.len());
	}

	/// Runs every registered callback.
	pub fn on_scroll(&mut self) {
		let span = trace_span!("on_scroll", callbacks = self.on_scroll.len());
		let _enter = span.enter();

		let Self { dom, on_scroll, .. } = self;
		for callback in on_scroll.iter_mut() {
			callback(&*dom);
		}
	}

	fn setup_profile(&mut self) {
		let profile = match self.dom.find_by_role(None, Role::ProfileCard) {
			Some(profile) => profile,
			None => return debug!("No profile card"),
		};
		let reference = match self.dom.find_by_role(None, Role::ContentReference) {
			Some(reference) => reference,
			None => return debug!("Profile card without content reference; it won't be resized"),
		};

		let classes = self.config.classes.clone();
		resize_profile(&self.dom, &profile, &reference, &classes);
		self.register(move |dom| resize_profile(dom, &profile, &reference, &classes));
	}

	fn setup_nav_shadow(&mut self) {
		let nav_bar = match self.dom.find_by_role(None, Role::NavBar) {
			Some(nav_bar) => nav_bar,
			None => return debug!("No nav bar"),
		};
		let reference = match self.dom.find_by_role(None, Role::ContentReference) {
			Some(reference) => reference,
			None => return debug!("Nav bar without content reference; no shadow"),
		};

		let classes = self.config.classes.clone();
		update_nav_shadow(&self.dom, &nav_bar, &reference, &classes);
		self.register(move |dom| update_nav_shadow(dom, &nav_bar, &reference, &classes));
	}

	fn setup_local_toc(&mut self) {
		let local_toc = match self.dom.find_by_role(None, Role::LocalToc) {
			Some(local_toc) => local_toc,
			None => return debug!("No local table of contents"),
		};
		let nav_root = self.dom.find_by_role(Some(&local_toc), Role::TocRoot);
		debug!(?local_toc, ?nav_root, "Found local table of contents");

		if let Some(title) = self.dom.find_by_role(Some(&local_toc), Role::TocTitle) {
			self.dom.set_text(&title, &self.config.toc_caption);
		}

		let nav_root = match nav_root {
			Some(nav_root) => nav_root,
			None => {
				debug!("Local table of contents is empty; hiding it");
				return self.dom.set_class(&local_toc, &self.config.classes.toc_hidden);
			}
		};

		let nav = match NavList::load(&self.dom, &nav_root) {
			Ok(nav) => nav,
			Err(error) => return error!("Leaving the table of contents as-is: {}", error),
		};
		let index = TocIndex::build(&nav);
		let sections = document_sections(&self.dom);

		let threshold = self.config.section_threshold;
		let classes = self.config.classes.clone();
		highlight_current_section(&self.dom, &nav, &index, &sections, threshold, &classes);
		self.register(move |dom| highlight_current_section(dom, &nav, &index, &sections, threshold, &classes));
	}
}

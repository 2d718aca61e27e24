//! Selectors, class names and thresholds.
//!
//! The defaults match the documentation theme's markup and Tailwind classes.

use crate::dom::Role;

/// How far below the viewport top (in CSS pixels) a section may start and still count as the current one.
pub const DEFAULT_SECTION_THRESHOLD: f64 = 30.0;

/// Caption the local table of contents title is relabelled to.
pub const DEFAULT_TOC_CAPTION: &str = "Contents";

#[derive(Debug, Clone, PartialEq)]
pub struct NavSyncConfig {
	pub selectors: Selectors,
	pub classes: Classes,
	/// A section is a candidate for "current" while its top edge is at or above this offset.
	pub section_threshold: f64,
	pub toc_caption: String,
}

impl Default for NavSyncConfig {
	fn default() -> Self {
		Self {
			selectors: Selectors::default(),
			classes: Classes::default(),
			section_threshold: DEFAULT_SECTION_THRESHOLD,
			toc_caption: DEFAULT_TOC_CAPTION.to_owned(),
		}
	}
}

impl NavSyncConfig {
	#[must_use]
	pub fn with_section_threshold(mut self, section_threshold: f64) -> Self {
		self.section_threshold = section_threshold;
		self
	}

	#[must_use]
	pub fn with_toc_caption(mut self, toc_caption: impl Into<String>) -> Self {
		self.toc_caption = toc_caption.into();
		self
	}

	#[must_use]
	pub fn with_selectors(mut self, selectors: Selectors) -> Self {
		self.selectors = selectors;
		self
	}

	#[must_use]
	pub fn with_classes(mut self, classes: Classes) -> Self {
		self.classes = classes;
		self
	}
}

/// CSS selectors used by [`WebDom`](`crate::web::WebDom`) to resolve each [`Role`].
///
/// [`Role::TocTitle`] and [`Role::TocRoot`] are evaluated relative to the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectors {
	pub profile_card: String,
	pub content_reference: String,
	/// Unset by default, which disables the nav shadow.
	pub nav_bar: Option<String>,
	pub local_toc: String,
	pub toc_title: String,
	pub toc_root: String,
	pub section: String,
}

impl Default for Selectors {
	fn default() -> Self {
		Self {
			profile_card: "#profile-card".to_owned(),
			content_reference: "#content".to_owned(),
			nav_bar: None,
			local_toc: "#localtoc".to_owned(),
			toc_title: "a[href='#']".to_owned(),
			toc_root: "a[href='#'] + ul".to_owned(),
			section: "section".to_owned(),
		}
	}
}

impl Selectors {
	#[must_use]
	pub fn for_role(&self, role: Role) -> Option<&str> {
		match role {
			Role::ProfileCard => Some(&self.profile_card),
			Role::ContentReference => Some(&self.content_reference),
			Role::NavBar => self.nav_bar.as_deref(),
			Role::LocalToc => Some(&self.local_toc),
			Role::TocTitle => Some(&self.toc_title),
			Role::TocRoot => Some(&self.toc_root),
			Role::Section => Some(&self.section),
		}
	}
}

/// Class attribute values written for each visual state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classes {
	pub small_profile: String,
	pub full_profile: String,
	pub list_hidden: String,
	pub list_visible: String,
	pub link_normal: String,
	pub link_highlighted: String,
	/// Toggled on the nav bar, not written over its other classes.
	pub nav_shadow: String,
	/// Written to the panel when it has no nav tree.
	pub toc_hidden: String,
}

impl Default for Classes {
	fn default() -> Self {
		Self {
			small_profile: "small-profile".to_owned(),
			full_profile: "full-profile".to_owned(),
			list_hidden: "hidden".to_owned(),
			list_visible: "ml-2 border-l".to_owned(),
			link_normal: "pl-2 border-l-4 border-white dark:border-gray-800".to_owned(),
			link_highlighted: "pl-2 text-green-600 border-l-4 border-green-600".to_owned(),
			nav_shadow: "shadow-md".to_owned(),
			toc_hidden: "hidden".to_owned(),
		}
	}
}

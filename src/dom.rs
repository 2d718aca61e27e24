//! The narrow boundary between the scroll synchronisation logic and a document.
//!
//! Everything that reads or writes page state goes through [`DomPort`].
//! [`WebDom`](`crate::web::WebDom`) implements it over [`web_sys`], which keeps index building,
//! section selection and highlight planning testable against plain data.

use core::fmt::Debug;

/// The elements the page is expected to carry, by what they do rather than how they are found.
///
/// How a role maps to concrete markup is up to the [`DomPort`] implementation,
/// see [`Selectors`](`crate::config::Selectors`) for the browser defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
	/// The card that switches between its full and small variant.
	ProfileCard,
	/// The content area whose top edge decides whether the page has been scrolled into.
	ContentReference,
	/// A header that gains a shadow once content scrolls beneath it.
	NavBar,
	/// The local table of contents panel.
	LocalToc,
	/// The panel's title link, scoped to [`Role::LocalToc`].
	TocTitle,
	/// The outermost list of the panel's nav tree, scoped to [`Role::LocalToc`].
	TocRoot,
	/// A document section carrying an `id`.
	Section,
}

/// Read/write access to a document's elements.
///
/// Implementations must not fail into the caller: lookups that cannot be answered report absence,
/// and writes that cannot be performed are logged and dropped.
pub trait DomPort {
	/// A cheap, clonable reference to one element.
	type Handle: Clone + Debug + 'static;

	/// Finds the first element playing `role`, optionally only below `scope`.
	fn find_by_role(&self, scope: Option<&Self::Handle>, role: Role) -> Option<Self::Handle>;

	/// Finds every element playing `role`, in document order.
	fn find_all_by_role(&self, role: Role) -> Vec<Self::Handle>;

	/// The direct element children of `element`, in document order.
	fn child_elements(&self, element: &Self::Handle) -> Vec<Self::Handle>;

	/// The first descendant of `element` (in document order) with the given tag name.
	fn first_descendant(&self, element: &Self::Handle, tag: &str) -> Option<Self::Handle>;

	/// The element's tag name as reported by the document, e.g. `"UL"` for HTML lists.
	fn tag_name(&self, element: &Self::Handle) -> String;

	fn attribute(&self, element: &Self::Handle, name: &str) -> Option<String>;

	/// The top edge of the element's bounding box, relative to the viewport.
	fn bounding_top(&self, element: &Self::Handle) -> f64;

	/// Replaces the element's whole class attribute.
	fn set_class(&self, element: &Self::Handle, class: &str);

	/// Adds (`force == true`) or removes a single class, leaving others intact.
	fn toggle_class(&self, element: &Self::Handle, class: &str, force: bool);

	/// Replaces the element's content with plain text.
	fn set_text(&self, element: &Self::Handle, text: &str);
}

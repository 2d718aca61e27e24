//! Picking the current section and reflecting it in the nav tree.

use crate::{
	config::Classes,
	dom::{DomPort, Role},
	toc::{NavList, TocIndex},
};
use tracing::{debug, instrument, trace};

/// Returns the last of `sections` (in iteration order, i.e. document order) whose top edge is at or above `threshold`.
///
/// Later sections win even if an earlier one sits further down, so the result doesn't depend on layout quirks.
#[must_use]
pub fn current_section<T>(sections: impl IntoIterator<Item = (T, f64)>, threshold: f64) -> Option<T> {
	sections.into_iter().filter(|&(_, top)| top <= threshold).map(|(section, _)| section).last()
}

/// What one highlight pass writes, on top of collapsing every list and normalising every link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightPlan<'a, H> {
	pub highlighted: Option<&'a H>,
	/// Lists to reveal: the highlighted link's ancestors, then the list directly under it.
	pub expanded: Vec<&'a H>,
}

impl<'a, H> HighlightPlan<'a, H> {
	/// Plans the pass for `current`. Unknown or absent identifiers leave everything collapsed.
	#[must_use]
	pub fn new(index: &'a TocIndex<H>, current: Option<&str>) -> Self {
		let entry = match current.and_then(|identifier| index.get(identifier)) {
			Some(entry) => entry,
			None => return Self { highlighted: None, expanded: Vec::new() },
		};

		let mut expanded: Vec<&H> = entry.ancestors.iter().collect();
		expanded.extend(entry.children.as_ref());
		Self { highlighted: Some(&entry.link), expanded }
	}

	/// Writes the plan: every list in `nav` hidden and every link normal, then the planned exceptions.
	pub fn apply<D: DomPort<Handle = H>>(&self, dom: &D, nav: &NavList<H>, classes: &Classes)
	where
		H: Clone,
	{
		for container in nav.nested_containers() {
			dom.set_class(container, &classes.list_hidden);
		}
		for link in nav.links() {
			dom.set_class(link, &classes.link_normal);
		}

		if let Some(link) = self.highlighted {
			dom.set_class(link, &classes.link_highlighted);
		}
		for container in &self.expanded {
			dom.set_class(container, &classes.list_visible);
		}
	}
}

/// Reads section positions from `dom` and rewrites the nav tree's classes to match.
#[instrument(skip(dom, nav, index, sections, classes))]
pub fn highlight_current_section<D: DomPort>(dom: &D, nav: &NavList<D::Handle>, index: &TocIndex<D::Handle>, sections: &[D::Handle], threshold: f64, classes: &Classes) {
	let current = current_section(sections.iter().map(|section| (section, dom.bounding_top(section))), threshold).and_then(|section| dom.attribute(section, "id"));
	debug!("Current section: {:?}", current);

	let plan = HighlightPlan::new(index, current.as_deref());
	trace!(?plan);
	plan.apply(dom, nav, classes);
}

/// Looks up the document's sections once, for repeated [`highlight_current_section`] passes.
#[must_use]
pub fn document_sections<D: DomPort>(dom: &D) -> Vec<D::Handle> {
	let sections = dom.find_all_by_role(Role::Section);
	debug!("Found {} document section(s)", sections.len());
	sections
}

//! Scroll-dependent chrome: the profile card variant and the nav bar shadow.

use crate::{config::Classes, dom::DomPort};
use tracing::trace;

/// Whether the content's top edge has moved above the viewport.
///
/// Exactly `0.0` (and NaN) counts as not scrolled.
#[must_use]
pub fn scrolled_past(reference_top: f64) -> bool {
	reference_top < 0.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSize {
	Small,
	Full,
}

impl ProfileSize {
	#[must_use]
	pub fn for_reference_top(reference_top: f64) -> Self {
		if scrolled_past(reference_top) {
			Self::Small
		} else {
			Self::Full
		}
	}

	#[must_use]
	pub fn class(self, classes: &Classes) -> &str {
		match self {
			Self::Small => &classes.small_profile,
			Self::Full => &classes.full_profile,
		}
	}
}

/// Switches `profile` to the variant matching `reference`'s position.
pub fn resize_profile<D: DomPort>(dom: &D, profile: &D::Handle, reference: &D::Handle, classes: &Classes) {
	let size = ProfileSize::for_reference_top(dom.bounding_top(reference));
	trace!(?size, "Resizing profile");
	dom.set_class(profile, size.class(classes));
}

/// Shows the nav bar's shadow iff `reference` has scrolled under it.
pub fn update_nav_shadow<D: DomPort>(dom: &D, nav_bar: &D::Handle, reference: &D::Handle, classes: &Classes) {
	let shadow = scrolled_past(dom.bounding_top(reference));
	dom.toggle_class(nav_bar, &classes.nav_shadow, shadow);
}

//! The local table of contents as a tree, and the identifier index built from it.

use crate::dom::DomPort;
use hashbrown::HashMap;
use thiserror::Error;
use tracing::{debug, instrument, trace, warn};

/// A nav item that can't be indexed.
///
/// `depth` counts nested lists below the nav root (which is depth `0`),
/// `position` is the item's index among its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TocError {
	#[error("nav item {position} at depth {depth} contains no link")]
	MissingLink { depth: usize, position: usize },
	#[error("nav link {position} at depth {depth} has no `href`")]
	MissingHref { depth: usize, position: usize },
}

/// One list of the nav tree, e.g. a `<ul>` and its `<li>` items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavList<H> {
	pub container: H,
	pub items: Vec<NavNode<H>>,
}

/// One nav item: its link and, optionally, the list nested under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavNode<H> {
	/// The link's fragment, without the `#`.
	pub identifier: String,
	pub link: H,
	pub children: Option<NavList<H>>,
}

impl<H: Clone> NavList<H> {
	/// Reads the nav tree below `root`.
	///
	/// A container that isn't a `<ul>` is reported, but still read as if it were one.
	///
	/// # Errors
	///
	/// Iff an item has no link or its link has no `href`.
	#[instrument(skip(dom))]
	pub fn load<D>(dom: &D, root: &H) -> Result<Self, TocError>
	where
		D: DomPort<Handle = H>,
		H: core::fmt::Debug,
	{
		Self::load_at(dom, root, 0)
	}

	fn load_at<D: DomPort<Handle = H>>(dom: &D, container: &H, depth: usize) -> Result<Self, TocError> {
		let tag_name = dom.tag_name(container);
		if !tag_name.eq_ignore_ascii_case("ul") {
			warn!("Expected <ul> as nav list, got <{}>", tag_name.to_ascii_lowercase());
		}

		let mut items = Vec::new();
		for (position, item) in dom.child_elements(container).into_iter().enumerate() {
			let link = dom.first_descendant(&item, "a").ok_or(TocError::MissingLink { depth, position })?;
			let href = dom.attribute(&link, "href").ok_or(TocError::MissingHref { depth, position })?;
			let identifier = href.replacen('#', "", 1);
			trace!(depth, position, identifier = identifier.as_str(), "Loaded nav item");

			let children = match dom.first_descendant(&item, "ul") {
				Some(nested) => Some(Self::load_at(dom, &nested, depth + 1)?),
				None => None,
			};
			items.push(NavNode { identifier, link, children });
		}

		Ok(Self { container: container.clone(), items })
	}

	/// Every list nested below this one, not including this one.
	#[must_use]
	pub fn nested_containers(&self) -> Vec<&H> {
		let mut containers = Vec::new();
		self.collect(&mut containers, &mut Vec::new());
		containers
	}

	/// Every link in the tree, in document order.
	#[must_use]
	pub fn links(&self) -> Vec<&H> {
		let mut links = Vec::new();
		self.collect(&mut Vec::new(), &mut links);
		links
	}

	fn collect<'a>(&'a self, containers: &mut Vec<&'a H>, links: &mut Vec<&'a H>) {
		for node in &self.items {
			links.push(&node.link);
			if let Some(children) = &node.children {
				containers.push(&children.container);
				children.collect(containers, links);
			}
		}
	}
}

/// Where a nav link sits in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry<H> {
	/// The nested lists enclosing the link, outermost first. The nav root itself is not included.
	pub ancestors: Vec<H>,
	pub link: H,
	/// The list nested directly under the link's item, if any.
	pub children: Option<H>,
}

impl<H> TocEntry<H> {
	/// The ancestors followed by the link itself.
	#[must_use]
	pub fn path(&self) -> impl Iterator<Item = &H> {
		self.ancestors.iter().chain(core::iter::once(&self.link))
	}
}

/// Identifier → [`TocEntry`], iterable in document order.
#[derive(Debug, Clone)]
pub struct TocIndex<H> {
	entries: HashMap<String, TocEntry<H>>,
	order: Vec<String>,
}

impl<H> Default for TocIndex<H> {
	fn default() -> Self {
		Self { entries: HashMap::new(), order: Vec::new() }
	}
}

impl<H: Clone> TocIndex<H> {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	#[instrument(skip(root))]
	pub fn build(root: &NavList<H>) -> Self {
		let mut index = Self::new();
		index.extend_from(root, &[]);
		debug!("Indexed {} nav link(s)", index.len());
		index
	}

	/// Adds every link below `list`, prefixing each path with `ancestors`.
	///
	/// An identifier that is already present is replaced, keeping its original position.
	pub fn extend_from(&mut self, list: &NavList<H>, ancestors: &[H]) {
		for node in &list.items {
			let entry = TocEntry {
				ancestors: ancestors.to_vec(),
				link: node.link.clone(),
				children: node.children.as_ref().map(|children| children.container.clone()),
			};
			if self.entries.insert(node.identifier.clone(), entry).is_some() {
				warn!("Duplicate nav identifier {:?}; the later link wins", node.identifier);
			} else {
				self.order.push(node.identifier.clone());
			}

			if let Some(children) = &node.children {
				let mut nested_ancestors = ancestors.to_vec();
				nested_ancestors.push(children.container.clone());
				self.extend_from(children, &nested_ancestors);
			}
		}
	}
}

impl<H> TocIndex<H> {
	#[must_use]
	pub fn get(&self, identifier: &str) -> Option<&TocEntry<H>> {
		self.entries.get(identifier)
	}

	#[must_use]
	pub fn contains(&self, identifier: &str) -> bool {
		self.entries.contains_key(identifier)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Identifiers in the order their links first appear in the document.
	#[must_use]
	pub fn identifiers(&self) -> impl Iterator<Item = &str> {
		self.order.iter().map(String::as_str)
	}
}

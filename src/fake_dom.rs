//! In-memory [`DomPort`] for native unit tests.

use crate::dom::{DomPort, Role};
use core::cell::RefCell;
use hashbrown::HashMap;

#[derive(Debug, Default)]
struct FakeNode {
	tag: String,
	attributes: HashMap<String, String>,
	parent: Option<usize>,
	children: Vec<usize>,
	top: f64,
	class: String,
	text: String,
}

#[derive(Debug, Default)]
pub struct FakeDom {
	nodes: RefCell<Vec<FakeNode>>,
	roles: RefCell<HashMap<Role, Vec<usize>>>,
}

impl FakeDom {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn element(&self, tag: &str) -> usize {
		let mut nodes = self.nodes.borrow_mut();
		nodes.push(FakeNode { tag: tag.to_ascii_uppercase(), ..FakeNode::default() });
		nodes.len() - 1
	}

	pub fn append(&self, parent: usize, child: usize) {
		let mut nodes = self.nodes.borrow_mut();
		nodes[parent].children.push(child);
		nodes[child].parent = Some(parent);
	}

	pub fn child(&self, parent: usize, tag: &str) -> usize {
		let child = self.element(tag);
		self.append(parent, child);
		child
	}

	pub fn set_attribute(&self, element: usize, name: &str, value: &str) {
		self.nodes.borrow_mut()[element].attributes.insert(name.to_owned(), value.to_owned());
	}

	pub fn set_top(&self, element: usize, top: f64) {
		self.nodes.borrow_mut()[element].top = top;
	}

	pub fn assign(&self, role: Role, element: usize) {
		self.roles.borrow_mut().entry(role).or_default().push(element);
	}

	pub fn class(&self, element: usize) -> String {
		self.nodes.borrow()[element].class.clone()
	}

	pub fn text(&self, element: usize) -> String {
		self.nodes.borrow()[element].text.clone()
	}

	/// Appends `<li><a href="{href}"></a></li>` to `list`, returning `(li, a)`.
	pub fn item(&self, list: usize, href: &str) -> (usize, usize) {
		let li = self.child(list, "li");
		let a = self.child(li, "a");
		self.set_attribute(a, "href", href);
		(li, a)
	}

	/// Appends a `<section id="{id}">` at the given viewport offset.
	pub fn section(&self, id: &str, top: f64) -> usize {
		let section = self.element("section");
		self.set_attribute(section, "id", id);
		self.set_top(section, top);
		self.assign(Role::Section, section);
		section
	}

	fn is_descendant(&self, element: usize, ancestor: usize) -> bool {
		let nodes = self.nodes.borrow();
		let mut current = nodes[element].parent;
		while let Some(parent) = current {
			if parent == ancestor {
				return true;
			}
			current = nodes[parent].parent;
		}
		false
	}

	fn preorder(&self, element: usize, out: &mut Vec<usize>) {
		let children = self.nodes.borrow()[element].children.clone();
		for child in children {
			out.push(child);
			self.preorder(child, out);
		}
	}
}

impl DomPort for FakeDom {
	type Handle = usize;

	fn find_by_role(&self, scope: Option<&usize>, role: Role) -> Option<usize> {
		let candidates = self.roles.borrow().get(&role).cloned().unwrap_or_default();
		candidates.into_iter().find(|&candidate| scope.map_or(true, |&scope| self.is_descendant(candidate, scope)))
	}

	fn find_all_by_role(&self, role: Role) -> Vec<usize> {
		self.roles.borrow().get(&role).cloned().unwrap_or_default()
	}

	fn child_elements(&self, element: &usize) -> Vec<usize> {
		self.nodes.borrow()[*element].children.clone()
	}

	fn first_descendant(&self, element: &usize, tag: &str) -> Option<usize> {
		let mut descendants = Vec::new();
		self.preorder(*element, &mut descendants);
		let nodes = self.nodes.borrow();
		descendants.into_iter().find(|&d| nodes[d].tag.eq_ignore_ascii_case(tag))
	}

	fn tag_name(&self, element: &usize) -> String {
		self.nodes.borrow()[*element].tag.clone()
	}

	fn attribute(&self, element: &usize, name: &str) -> Option<String> {
		self.nodes.borrow()[*element].attributes.get(name).cloned()
	}

	fn bounding_top(&self, element: &usize) -> f64 {
		self.nodes.borrow()[*element].top
	}

	fn set_class(&self, element: &usize, class: &str) {
		self.nodes.borrow_mut()[*element].class = class.to_owned();
	}

	fn toggle_class(&self, element: &usize, class: &str, force: bool) {
		let mut nodes = self.nodes.borrow_mut();
		let node = &mut nodes[*element];
		let mut classes: Vec<&str> = node.class.split_whitespace().filter(|&c| c != class).collect();
		if force {
			classes.push(class);
		}
		let class = classes.join(" ");
		node.class = class;
	}

	fn set_text(&self, element: &usize, text: &str) {
		let mut nodes = self.nodes.borrow_mut();
		let node = &mut nodes[*element];
		node.text = text.to_owned();
		node.children.clear();
	}
}

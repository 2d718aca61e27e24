#![doc(html_root_url = "https://docs.rs/navsync-dom/0.0.1")]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Keeps a documentation page's profile card and local table of contents in step with the scroll position.
//!
//! [`web::install`] wires everything up for a live page. The logic itself only talks to the page through
//! [`dom::DomPort`], so it can run against any document model.

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod config;
pub mod controller;
pub mod dom;
pub mod highlight;
pub mod profile;
pub mod toc;
pub mod web;

#[cfg(test)]
mod fake_dom;

pub use config::NavSyncConfig;
pub use controller::PageController;
pub use dom::{DomPort, Role};
pub use web::{install, ScrollListener, WebDom};

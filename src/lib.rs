//! Type-safe scoped builder for markup trees.
//!
//! A tree is built by nested construction blocks. Each block receives exactly
//! one [`Scope`] for the node it populates; the operations available on that
//! scope are fixed by the node's kind, declared with [`vocabulary!`]. Nested
//! blocks cannot touch ancestor scopes unless handed one explicitly
//! ([`Scope::child_with_outer`]). The finished [`Element`] renders
//! deterministically to indented text.
//!
//! ```
//! use tagtree::{build, render, vocabulary};
//!
//! vocabulary! {
//!     pub Doc("doc") as DocOps {
//!         text: false;
//!         attrs {}
//!         children { section => Section }
//!     }
//!     pub Section("section") as SectionOps {
//!         text: true;
//!         attrs { id: "id" }
//!         children { section => Section }
//!     }
//! }
//!
//! let tree = build::<Doc, _>(|doc| {
//!     doc.section(|s| {
//!         s.id("intro").text("hello");
//!     });
//! });
//!
//! assert_eq!(
//!     render(&tree),
//!     "<doc>\n  <section id=\"intro\">\n    hello\n  </section>\n</doc>\n"
//! );
//! ```

pub mod builder;
pub mod config;
pub mod domain;
pub mod errors;
mod macros;
pub mod render;
pub mod scope;
pub mod tree_traits;
pub mod util;

#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
}

pub use builder::{build, try_build};
pub use crate::config::RenderSettings;
pub use domain::{AttributeOrder, Attributes, Element, Node};
pub use errors::{TagTreeError, TagTreeResult};
pub use render::{render, Renderer};
pub use scope::{AcceptsText, Contains, Scope, Tag};
pub use tree_traits::ToOutline;

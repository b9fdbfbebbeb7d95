//! Capability handles for nodes under construction.
//!
//! Every node kind is a distinct zero-sized type implementing [`Tag`]. A
//! construction block receives exactly one `&mut Scope<'_, Kind>`; the
//! operations callable on it are the generic ones below plus whatever the
//! vocabulary declares for `Kind`. Child construction borrows the parent scope
//! mutably until the child block returns, so a nested block cannot reach an
//! ancestor scope. The borrow checker rejects it:
//!
//! ```compile_fail
//! use tagtree::{build, vocabulary};
//!
//! vocabulary! {
//!     pub Html("html") as HtmlOps { text: false; attrs {} children { body => Body } }
//!     pub Body("body") as BodyOps { text: true; attrs {} children { p => P } }
//!     pub P("p") as POps { text: true; attrs {} children {} }
//! }
//!
//! build::<Html, _>(|html| {
//!     html.body(|body| {
//!         body.p(|_p| {
//!             // ancestor two levels up, captured implicitly
//!             html.body(|_| {});
//!         });
//!     });
//! });
//! ```
//!
//! Operations of another kind do not exist on the inner handle either:
//!
//! ```compile_fail
//! use tagtree::{build, vocabulary};
//!
//! vocabulary! {
//!     pub Html("html") as HtmlOps { text: false; attrs {} children { body => Body } }
//!     pub Body("body") as BodyOps { text: true; attrs {} children { p => P } }
//!     pub P("p") as POps { text: true; attrs {} children {} }
//! }
//!
//! build::<Html, _>(|html| {
//!     html.body(|body| {
//!         body.p(|p| {
//!             p.body(|_| {});
//!         });
//!     });
//! });
//! ```
//!
//! Nor can the generic entry point attach an undeclared kind:
//!
//! ```compile_fail
//! use tagtree::{build, vocabulary};
//!
//! vocabulary! {
//!     pub Html("html") as HtmlOps { text: false; attrs {} children { body => Body } }
//!     pub Body("body") as BodyOps { text: true; attrs {} children {} }
//! }
//!
//! build::<Html, _>(|html| {
//!     html.child::<Html, _>(|_| {});
//! });
//! ```
//!
//! Reaching the enclosing node is possible only through an explicit, named
//! parameter:
//!
//! ```
//! use tagtree::{build, render, vocabulary};
//!
//! vocabulary! {
//!     pub Body("body") as BodyOps { text: true; attrs {} children { p => P } }
//!     pub P("p") as POps { text: true; attrs {} children {} }
//! }
//!
//! let tree = build::<Body, _>(|body| {
//!     body.child_with_outer::<P, _>(|p, outer| {
//!         outer.attr("data-has-p", "yes");
//!         p.text("hi");
//!     });
//! });
//! assert_eq!(tree.attr("data-has-p"), Some("yes"));
//! assert_eq!(render(&tree), "<body data-has-p=\"yes\">\n  <p>\n    hi\n  </p>\n</body>\n");
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::domain::Element;

/// A node kind.
///
/// Implementors are nominal marker types; two kinds never unify even when
/// they expose identical operations.
pub trait Tag: 'static {
    /// Tag name written by the renderer.
    const KIND: &'static str;
}

/// `C` may be attached as a child of `Self`.
pub trait Contains<C: Tag>: Tag {}

/// `Self` may hold text leaves.
pub trait AcceptsText: Tag {}

/// Capability handle for a node of kind `T` under construction.
pub struct Scope<'a, T: Tag> {
    pub(crate) element: &'a mut Element,
    _tag: PhantomData<fn() -> T>,
}

impl<'a, T: Tag> Scope<'a, T> {
    pub(crate) fn new(element: &'a mut Element) -> Self {
        Self {
            element,
            _tag: PhantomData,
        }
    }

    pub fn kind(&self) -> &str {
        self.element.kind()
    }

    /// Read-only view of the node as built so far.
    pub fn element(&self) -> &Element {
        &*self.element
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.element.attr(name)
    }

    /// Sets an attribute; last write wins.
    pub fn attr(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.element.set_attr(name, value);
        self
    }

    /// Appends a text leaf after the current children.
    pub fn text(&mut self, value: impl Into<String>) -> &mut Self
    where
        T: AcceptsText,
    {
        self.element.push_text(value.into());
        self
    }
}

impl<T: Tag> fmt::Debug for Scope<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("kind", &T::KIND)
            .field("attributes", self.element.attributes())
            .field("children", &self.element.children().len())
            .finish()
    }
}

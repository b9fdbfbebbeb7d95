//! Root entry points and the attachment protocol.
//!
//! Every child-construction operation funnels through [`Scope::child`] (or its
//! fallible and outer-aware variants): allocate the child, run its block
//! against a fresh scope, append it to the parent, hand back a scope over the
//! attached child. A child whose block fails is dropped and never attached.

use tracing::{debug, instrument, trace};

use crate::domain::Element;
use crate::scope::{Contains, Scope, Tag};

/// Builds a tree rooted at a node of kind `T`.
///
/// The block receives the root scope as its only context. When it returns, the
/// completed root is handed to the caller.
#[instrument(level = "debug", skip(block), fields(kind = T::KIND))]
pub fn build<T, F>(block: F) -> Element
where
    T: Tag,
    F: FnOnce(&mut Scope<'_, T>),
{
    let mut root = Element::new(T::KIND);
    block(&mut Scope::new(&mut root));
    debug!(children = root.children().len(), "root complete");
    root
}

/// Like [`build`], propagating the first error raised by the root block.
#[instrument(level = "debug", skip(block), fields(kind = T::KIND))]
pub fn try_build<T, E, F>(block: F) -> Result<Element, E>
where
    T: Tag,
    F: FnOnce(&mut Scope<'_, T>) -> Result<(), E>,
{
    let mut root = Element::new(T::KIND);
    block(&mut Scope::new(&mut root))?;
    debug!(children = root.children().len(), "root complete");
    Ok(root)
}

impl<'a, T: Tag> Scope<'a, T> {
    /// Constructs a child of kind `C`, attaches it after the current children
    /// and returns its scope for follow-up mutation.
    pub fn child<C, F>(&mut self, block: F) -> Scope<'_, C>
    where
        T: Contains<C>,
        C: Tag,
        F: FnOnce(&mut Scope<'_, C>),
    {
        let mut child = Element::new(C::KIND);
        block(&mut Scope::new(&mut child));
        self.attach(child)
    }

    /// Fallible [`child`](Self::child). On error nothing is attached.
    pub fn try_child<C, E, F>(&mut self, block: F) -> Result<Scope<'_, C>, E>
    where
        T: Contains<C>,
        C: Tag,
        F: FnOnce(&mut Scope<'_, C>) -> Result<(), E>,
    {
        let mut child = Element::new(C::KIND);
        if let Err(err) = block(&mut Scope::new(&mut child)) {
            debug!(parent = T::KIND, child = C::KIND, "block failed, child discarded");
            return Err(err);
        }
        Ok(self.attach(child))
    }

    /// Like [`child`](Self::child), but the block also receives this scope as
    /// an explicit second parameter.
    ///
    /// Whatever the block appends to `outer` lands before the new child, which
    /// is attached only once the block returns.
    pub fn child_with_outer<C, F>(&mut self, block: F) -> Scope<'_, C>
    where
        T: Contains<C>,
        C: Tag,
        F: FnOnce(&mut Scope<'_, C>, &mut Scope<'_, T>),
    {
        let mut child = Element::new(C::KIND);
        block(
            &mut Scope::new(&mut child),
            &mut Scope::<T>::new(&mut *self.element),
        );
        self.attach(child)
    }

    fn attach<C: Tag>(&mut self, child: Element) -> Scope<'_, C> {
        trace!(
            parent = T::KIND,
            child = C::KIND,
            position = self.element.children().len(),
            "attach"
        );
        Scope::new(self.element.attach(child))
    }
}

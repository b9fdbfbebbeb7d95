//! Node model: elements, text leaves and attribute mappings
//!
//! This layer is independent of construction and rendering (no scopes, no I/O).

pub mod attributes;
pub mod node;
pub mod traverse;

pub use attributes::{AttributeOrder, Attributes};
pub use node::{Element, Node};
pub use traverse::{PostOrderIterator, TreeIterator};

//! Visitor pattern for document tree traversal.
//!
//! - [`Visitor`] - Read-only traversal trait
//! - [`walk_node`] - Dispatch function for type-specific visitors
//! - [`walk_children`] - Traverse all children of a node
//!
//! Traversal is pre-order and depth-first. Any `visit_*` method may return
//! `ControlFlow::Break(())` to stop the whole walk.
//!
//! # Early Termination
//!
//! ```rust
//! use hooktable_ast::{TxtNode, NodeType, Span, AstArena};
//! use hooktable_ast::visitor::{Visitor, VisitResult, walk_node};
//! use std::ops::ControlFlow;
//!
//! struct FirstLinkFinder<'a> {
//!     found: Option<TxtNode<'a>>,
//! }
//!
//! impl<'a> Visitor<'a> for FirstLinkFinder<'a> {
//!     fn visit_link(&mut self, node: &TxtNode<'a>) -> VisitResult {
//!         self.found = Some(*node);
//!         ControlFlow::Break(())
//!     }
//! }
//!
//! let arena = AstArena::new();
//! let text = arena.alloc(TxtNode::new_text(NodeType::Str, Span::new(1, 5), "push"));
//! let link = arena.alloc(TxtNode::new_parent(
//!     NodeType::Link,
//!     Span::new(0, 11),
//!     arena.alloc_slice_copy(&[*text]),
//! ));
//! let cell = TxtNode::new_parent(NodeType::TableCell, Span::new(0, 11), arena.alloc_slice_copy(&[*link]));
//!
//! let mut finder = FirstLinkFinder { found: None };
//! assert!(walk_node(&mut finder, &cell).is_break());
//! assert_eq!(finder.found.map(|n| n.node_type), Some(NodeType::Link));
//! ```

mod visit;
mod walk;

pub use visit::{VisitResult, Visitor};
pub use walk::{walk_children, walk_node};

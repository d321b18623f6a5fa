//! # hooktable_ast
//!
//! Document tree definitions for hooktable.
//!
//! The tree is a read-only view over a single markdown source buffer. Every
//! node keeps a byte [`Span`] into that buffer, and text-bearing leaves borrow
//! their literal text from it instead of owning a copy.
//!
//! ## Architecture
//!
//! - Uses `bumpalo` for arena allocation
//! - All nodes of one document are allocated in a single arena
//! - The arena is dropped as a whole once extraction is finished
//!
//! ## Example
//!
//! ```rust
//! use hooktable_ast::{AstArena, TxtNode, NodeType, Span};
//!
//! let arena = AstArena::new();
//!
//! let text = arena.alloc(TxtNode::new_text(NodeType::Str, Span::new(3, 17), "Webhook events"));
//! let children = arena.alloc_slice_copy(&[*text]);
//! let heading = TxtNode::new_parent(NodeType::Header, Span::new(0, 17), children);
//!
//! assert!(heading.text_eq("Webhook events"));
//! ```

mod arena;
mod node;
mod node_type;
mod span;
pub mod visitor;

pub use arena::AstArena;
pub use node::{LinkData, NodeData, TxtNode};
pub use node_type::NodeType;
pub use span::Span;

pub use visitor::{VisitResult, Visitor};

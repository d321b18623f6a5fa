//! # hooktable_parser
//!
//! Parser abstraction layer for hooktable.
//!
//! This crate provides:
//! - A `Parser` trait producing a document tree from source text
//! - The built-in Markdown parser using `markdown-rs` with GFM tables
//!
//! ## Example
//!
//! ```rust
//! use hooktable_ast::{AstArena, NodeType};
//! use hooktable_parser::{MarkdownParser, Parser};
//!
//! let arena = AstArena::new();
//! let parser = MarkdownParser::new();
//! let source = "## Webhook events\n\n| Webhook event payload |\n| --- |\n| [push](url) |\n";
//!
//! let ast = parser.parse(&arena, source).unwrap();
//! assert_eq!(ast.children[1].node_type, NodeType::Table);
//! ```

mod error;
mod markdown;
mod traits;

pub use error::ParseError;
pub use markdown::MarkdownParser;
pub use traits::Parser;

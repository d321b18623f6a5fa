//! TxtNode definition.
//!
//! The node type of the document tree.

use std::ops::ControlFlow;

use crate::visitor::{VisitResult, Visitor, walk_node};
use crate::{NodeType, Span};

/// A node in the document tree.
///
/// # Lifetime
///
/// The `'a` lifetime ties this node to both its arena allocator and the
/// source buffer its literal text borrows from.
///
/// # Example
///
/// ```rust
/// use hooktable_ast::{AstArena, TxtNode, NodeType, Span};
///
/// let arena = AstArena::new();
///
/// let code = arena.alloc(TxtNode::new_text(NodeType::Code, Span::new(0, 8), "opened"));
/// let children = arena.alloc_slice_copy(&[*code]);
/// let cell = TxtNode::new_parent(NodeType::TableCell, Span::new(0, 8), children);
///
/// let mut text = String::new();
/// cell.write_text(&mut text);
/// assert_eq!(text, "opened");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TxtNode<'a> {
    /// The type of this node.
    pub node_type: NodeType,

    /// Byte span in the source text.
    pub span: Span,

    /// Child nodes (for parent nodes).
    pub children: &'a [TxtNode<'a>],

    /// Literal text (for `Str`, `Code`, `CodeBlock` and `Html`).
    pub value: Option<&'a str>,

    /// Additional node-specific data.
    pub data: NodeData<'a>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NodeData<'a> {
    #[default]
    None,
    Header(u8),
    Link(LinkData<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkData<'a> {
    pub url: &'a str,
    pub title: Option<&'a str>,
}

impl<'a> TxtNode<'a> {
    /// Creates a new parent node with children.
    #[inline]
    pub const fn new_parent(node_type: NodeType, span: Span, children: &'a [TxtNode<'a>]) -> Self {
        Self {
            node_type,
            span,
            children,
            value: None,
            data: NodeData::None,
        }
    }

    /// Creates a new text node with a value.
    #[inline]
    pub const fn new_text(node_type: NodeType, span: Span, value: &'a str) -> Self {
        Self {
            node_type,
            span,
            children: &[],
            value: Some(value),
            data: NodeData::None,
        }
    }

    /// Creates a new leaf node (no children, no value).
    #[inline]
    pub const fn new_leaf(node_type: NodeType, span: Span) -> Self {
        Self {
            node_type,
            span,
            children: &[],
            value: None,
            data: NodeData::None,
        }
    }

    /// Returns this node with `data` attached.
    #[inline]
    pub const fn with_data(mut self, data: NodeData<'a>) -> Self {
        self.data = data;
        self
    }

    /// Returns true if this node has children.
    #[inline]
    pub const fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns the heading depth for `Header` nodes.
    #[inline]
    pub const fn depth(&self) -> Option<u8> {
        match self.data {
            NodeData::Header(depth) => Some(depth),
            _ => None,
        }
    }

    /// Returns the destination for `Link` and `Image` nodes.
    #[inline]
    pub const fn link(&self) -> Option<LinkData<'a>> {
        match self.data {
            NodeData::Link(link) => Some(link),
            _ => None,
        }
    }

    /// Appends the literal text of this subtree to `buf`.
    ///
    /// The literal text is the in-order concatenation of every `Str` and
    /// `Code` value below (and including) this node. Markup such as emphasis
    /// delimiters, backticks and link destinations is not part of it.
    pub fn write_text(&self, buf: &mut String) {
        let mut writer = TextWriter { buf };
        let _ = walk_node(&mut writer, self);
    }

    /// Returns true if the literal text of this subtree equals `expected`.
    ///
    /// Compares fragment by fragment without materializing the text.
    pub fn text_eq(&self, expected: &str) -> bool {
        let mut matcher = TextMatcher { rest: expected };
        walk_node(&mut matcher, self).is_continue() && matcher.rest.is_empty()
    }
}

struct TextWriter<'b> {
    buf: &'b mut String,
}

impl<'a> Visitor<'a> for TextWriter<'_> {
    fn enter_node(&mut self, node: &TxtNode<'a>) -> VisitResult {
        if node.node_type.is_text()
            && let Some(value) = node.value
        {
            self.buf.push_str(value);
        }
        ControlFlow::Continue(())
    }
}

struct TextMatcher<'e> {
    rest: &'e str,
}

impl<'a> Visitor<'a> for TextMatcher<'_> {
    fn enter_node(&mut self, node: &TxtNode<'a>) -> VisitResult {
        if node.node_type.is_text()
            && let Some(value) = node.value
        {
            match self.rest.strip_prefix(value) {
                Some(rest) => self.rest = rest,
                None => return ControlFlow::Break(()),
            }
        }
        ControlFlow::Continue(())
    }
}

//! Walk functions for tree traversal.
//!
//! These provide the traversal logic behind the default `Visitor` methods.

use std::ops::ControlFlow;

use crate::{NodeType, TxtNode};

use super::visit::{VisitResult, Visitor};

/// Walks a node by dispatching to the appropriate type-specific visitor method.
///
/// Calls `enter_node`, then the `visit_*` method for the node type, then
/// `exit_node`. A `Break` from any of them ends the walk immediately.
pub fn walk_node<'a, V>(visitor: &mut V, node: &TxtNode<'a>) -> VisitResult
where
    V: Visitor<'a>,
{
    visitor.enter_node(node)?;

    let result = match node.node_type {
        // Block-level nodes
        NodeType::Document => visitor.visit_document(node),
        NodeType::Paragraph => visitor.visit_paragraph(node),
        NodeType::Header => visitor.visit_header(node),
        NodeType::BlockQuote => visitor.visit_block_quote(node),
        NodeType::List => visitor.visit_list(node),
        NodeType::ListItem => visitor.visit_list_item(node),
        NodeType::CodeBlock => visitor.visit_code_block(node),
        NodeType::HorizontalRule => visitor.visit_horizontal_rule(node),
        NodeType::Html => visitor.visit_html(node),

        // Inline-level nodes
        NodeType::Str => visitor.visit_str(node),
        NodeType::Break => visitor.visit_break(node),
        NodeType::Emphasis => visitor.visit_emphasis(node),
        NodeType::Strong => visitor.visit_strong(node),
        NodeType::Delete => visitor.visit_delete(node),
        NodeType::Code => visitor.visit_code(node),
        NodeType::Link => visitor.visit_link(node),
        NodeType::Image => visitor.visit_image(node),

        // Reference nodes
        NodeType::LinkReference => visitor.visit_link_reference(node),
        NodeType::ImageReference => visitor.visit_image_reference(node),
        NodeType::Definition => visitor.visit_definition(node),

        // Table nodes (GFM)
        NodeType::Table => visitor.visit_table(node),
        NodeType::TableHeader => visitor.visit_table_header(node),
        NodeType::TableRow => visitor.visit_table_row(node),
        NodeType::TableCell => visitor.visit_table_cell(node),

        // Footnote nodes
        NodeType::FootnoteDefinition => visitor.visit_footnote_definition(node),
        NodeType::FootnoteReference => visitor.visit_footnote_reference(node),
    };

    result?;

    visitor.exit_node(node)
}

/// Walks all children of a node, in order.
///
/// Stops at the first child whose walk returns `ControlFlow::Break`.
#[inline]
pub fn walk_children<'a, V>(visitor: &mut V, node: &TxtNode<'a>) -> VisitResult
where
    V: Visitor<'a>,
{
    for child in node.children {
        walk_node(visitor, child)?;
    }
    ControlFlow::Continue(())
}

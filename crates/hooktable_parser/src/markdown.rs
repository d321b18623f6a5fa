//! Markdown parser using markdown-rs (wooorm/markdown-rs).
//!
//! Converts the mdast produced by the `markdown` crate into the document tree.
//! GFM is enabled so pipe tables are recognized; the first row of each table
//! becomes a `TableHeader` node and the remaining rows `TableRow` nodes.

use markdown::mdast::Node;
use markdown::{ParseOptions, to_mdast};
use tracing::debug;

use hooktable_ast::{AstArena, LinkData, NodeData, NodeType, Span, TxtNode};

use crate::{ParseError, Parser};

/// Markdown parser implementation.
pub struct MarkdownParser;

impl MarkdownParser {
    /// Creates a new Markdown parser.
    pub fn new() -> Self {
        Self
    }

    /// Gets default parse options (GFM).
    fn default_options() -> ParseOptions {
        ParseOptions::gfm()
    }

    /// Converts an mdast node to a TxtNode.
    fn convert_node<'a>(&self, arena: &'a AstArena, node: &Node, source: &'a str) -> TxtNode<'a> {
        match node {
            Node::Root(root) => {
                self.create_parent_node(arena, node, &root.children, source, NodeType::Document)
            }

            Node::Paragraph(para) => {
                self.create_parent_node(arena, node, &para.children, source, NodeType::Paragraph)
            }

            Node::Heading(heading) => self
                .create_parent_node(arena, node, &heading.children, source, NodeType::Header)
                .with_data(NodeData::Header(heading.depth)),

            Node::Text(text) => {
                self.create_text_node(arena, node, &text.value, source, NodeType::Str)
            }

            Node::Emphasis(em) => {
                self.create_parent_node(arena, node, &em.children, source, NodeType::Emphasis)
            }

            Node::Strong(strong) => {
                self.create_parent_node(arena, node, &strong.children, source, NodeType::Strong)
            }

            Node::Delete(del) => {
                self.create_parent_node(arena, node, &del.children, source, NodeType::Delete)
            }

            Node::InlineCode(code) => {
                self.create_text_node(arena, node, &code.value, source, NodeType::Code)
            }

            Node::Code(code) => {
                self.create_text_node(arena, node, &code.value, source, NodeType::CodeBlock)
            }

            Node::Html(html) => {
                self.create_text_node(arena, node, &html.value, source, NodeType::Html)
            }

            Node::Link(link) => {
                let data = NodeData::Link(LinkData {
                    url: arena.alloc_str(&link.url),
                    title: link.title.as_deref().map(|t| arena.alloc_str(t)),
                });
                self.create_parent_node(arena, node, &link.children, source, NodeType::Link)
                    .with_data(data)
            }

            Node::Image(image) => {
                let data = NodeData::Link(LinkData {
                    url: arena.alloc_str(&image.url),
                    title: image.title.as_deref().map(|t| arena.alloc_str(t)),
                });
                self.create_leaf_node(node, NodeType::Image).with_data(data)
            }

            Node::List(list) => {
                self.create_parent_node(arena, node, &list.children, source, NodeType::List)
            }

            Node::ListItem(item) => {
                self.create_parent_node(arena, node, &item.children, source, NodeType::ListItem)
            }

            Node::Blockquote(quote) => {
                self.create_parent_node(arena, node, &quote.children, source, NodeType::BlockQuote)
            }

            Node::ThematicBreak(_) => self.create_leaf_node(node, NodeType::HorizontalRule),

            Node::Break(_) => self.create_leaf_node(node, NodeType::Break),

            // Table support (GFM)
            Node::Table(table) => {
                let rows = arena.alloc_slice_fill_iter(
                    table
                        .children
                        .iter()
                        .enumerate()
                        .map(|(index, row)| self.convert_table_row(arena, row, source, index == 0)),
                );
                TxtNode::new_parent(NodeType::Table, self.node_span(node), rows)
            }

            Node::TableRow(row) => {
                self.create_parent_node(arena, node, &row.children, source, NodeType::TableRow)
            }

            Node::TableCell(cell) => {
                self.create_parent_node(arena, node, &cell.children, source, NodeType::TableCell)
            }

            // Reference nodes
            Node::LinkReference(reference) => self.create_parent_node(
                arena,
                node,
                &reference.children,
                source,
                NodeType::LinkReference,
            ),

            Node::ImageReference(_) => self.create_leaf_node(node, NodeType::ImageReference),

            Node::Definition(_) => self.create_leaf_node(node, NodeType::Definition),

            // Footnotes (GFM)
            Node::FootnoteDefinition(def) => self.create_parent_node(
                arena,
                node,
                &def.children,
                source,
                NodeType::FootnoteDefinition,
            ),

            Node::FootnoteReference(_) => self.create_leaf_node(node, NodeType::FootnoteReference),

            // Fallback for constructs without a dedicated kind
            _ => self.create_leaf_node(node, NodeType::Html),
        }
    }

    /// Converts one row of a table, tagging the first row as its header.
    fn convert_table_row<'a>(
        &self,
        arena: &'a AstArena,
        row: &Node,
        source: &'a str,
        is_header: bool,
    ) -> TxtNode<'a> {
        match row {
            Node::TableRow(r) if is_header => {
                self.create_parent_node(arena, row, &r.children, source, NodeType::TableHeader)
            }
            _ => self.convert_node(arena, row, source),
        }
    }

    /// Helper to create a parent node.
    fn create_parent_node<'a>(
        &self,
        arena: &'a AstArena,
        node: &Node,
        children: &[Node],
        source: &'a str,
        node_type: NodeType,
    ) -> TxtNode<'a> {
        let children = self.convert_children(arena, children, source);
        TxtNode::new_parent(node_type, self.node_span(node), children)
    }

    /// Helper to create a text node whose value borrows from `source`.
    fn create_text_node<'a>(
        &self,
        arena: &'a AstArena,
        node: &Node,
        text: &str,
        source: &'a str,
        node_type: NodeType,
    ) -> TxtNode<'a> {
        let span = self.node_span(node);
        let value = Self::literal(arena, source, span, text);
        TxtNode::new_text(node_type, span, value)
    }

    /// Helper to create a leaf node.
    fn create_leaf_node<'a>(&self, node: &Node, node_type: NodeType) -> TxtNode<'a> {
        TxtNode::new_leaf(node_type, self.node_span(node))
    }

    /// Converts a list of mdast children to a TxtNode slice.
    fn convert_children<'a>(
        &self,
        arena: &'a AstArena,
        children: &[Node],
        source: &'a str,
    ) -> &'a [TxtNode<'a>] {
        arena.alloc_slice_fill_iter(
            children
                .iter()
                .map(|child| self.convert_node(arena, child, source)),
        )
    }

    /// Gets the span for an mdast node.
    fn node_span(&self, node: &Node) -> Span {
        if let Some(pos) = node.position() {
            Span::new(pos.start.offset as u32, pos.end.offset as u32)
        } else {
            Span::new(0, 0)
        }
    }

    /// Resolves the literal text of a node to a slice of `source`.
    ///
    /// The literal sits verbatim inside the node's span unless the markdown
    /// used escapes or entity references; only then is it copied into the
    /// arena.
    fn literal<'a>(arena: &'a AstArena, source: &'a str, span: Span, value: &str) -> &'a str {
        if let Some(raw) = span.slice(source)
            && let Some(start) = raw.find(value)
        {
            return &raw[start..start + value.len()];
        }
        arena.alloc_str(value)
    }
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for MarkdownParser {
    fn name(&self) -> &str {
        "markdown"
    }

    fn extensions(&self) -> &[&str] {
        &["md", "markdown", "mdown", "mkdn", "mkd"]
    }

    fn parse<'a>(&self, arena: &'a AstArena, source: &'a str) -> Result<TxtNode<'a>, ParseError> {
        debug!(bytes = source.len(), "Parsing markdown source");

        let options = Self::default_options();
        let mdast =
            to_mdast(source, &options).map_err(|e| ParseError::invalid_source(e.to_string()))?;

        Ok(self.convert_node(arena, &mdast, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn is_borrowed_from(value: &str, source: &str) -> bool {
        source.as_bytes().as_ptr_range().contains(&value.as_ptr())
    }

    #[test]
    fn test_parse_empty_document() {
        let arena = AstArena::new();
        let parser = MarkdownParser::new();

        let ast = parser.parse(&arena, "").unwrap();

        assert_eq!(ast.node_type, NodeType::Document);
        assert!(ast.children.is_empty());
    }

    #[test]
    fn test_parse_heading_depths() {
        let arena = AstArena::new();
        let parser = MarkdownParser::new();
        let source = "# Title\n\n## Webhook events\n\n### Sub";

        let ast = parser.parse(&arena, source).unwrap();

        assert_eq!(ast.children.len(), 3);
        for (i, child) in ast.children.iter().enumerate() {
            assert_eq!(child.node_type, NodeType::Header);
            assert_eq!(child.depth(), Some((i + 1) as u8));
        }
        assert!(ast.children[1].text_eq("Webhook events"));
    }

    #[rstest]
    #[case::atx_one("# Webhook events", 1)]
    #[case::atx_two("## Webhook events", 2)]
    #[case::atx_closed("## Webhook events ##", 2)]
    #[case::atx_six("###### Webhook events", 6)]
    #[case::setext_one("Webhook events\n===", 1)]
    #[case::setext_two("Webhook events\n---", 2)]
    fn test_parse_heading_syntax(#[case] source: &str, #[case] depth: u8) {
        let arena = AstArena::new();
        let ast = MarkdownParser::new().parse(&arena, source).unwrap();

        let heading = &ast.children[0];
        assert_eq!(heading.node_type, NodeType::Header);
        assert_eq!(heading.depth(), Some(depth));
        assert!(heading.text_eq("Webhook events"));
    }

    #[test]
    fn test_parse_table_marks_header_row() {
        let arena = AstArena::new();
        let parser = MarkdownParser::new();
        let source = "| Webhook event payload | Activity types |\n| --- | --- |\n| [push](https://example.com) | n/a |\n| second | row |\n";

        let ast = parser.parse(&arena, source).unwrap();

        let table = &ast.children[0];
        assert_eq!(table.node_type, NodeType::Table);
        let kinds: Vec<NodeType> = table.children.iter().map(|row| row.node_type).collect();
        assert_eq!(
            kinds,
            vec![NodeType::TableHeader, NodeType::TableRow, NodeType::TableRow]
        );

        let header_cell = &table.children[0].children[0];
        assert_eq!(header_cell.node_type, NodeType::TableCell);
        assert!(header_cell.text_eq("Webhook event payload"));
    }

    #[test]
    fn test_parse_link_in_table_cell() {
        let arena = AstArena::new();
        let parser = MarkdownParser::new();
        let source = "| Webhook event payload |\n| --- |\n| [pull_request](https://example.com/pr) |\n";

        let ast = parser.parse(&arena, source).unwrap();

        let cell = &ast.children[0].children[1].children[0];
        let link = &cell.children[0];
        assert_eq!(link.node_type, NodeType::Link);
        assert_eq!(link.link().map(|l| l.url), Some("https://example.com/pr"));

        let mut text = String::new();
        link.write_text(&mut text);
        assert_eq!(text, "pull_request");
    }

    #[test]
    fn test_parse_inline_code_borrows_source() {
        let arena = AstArena::new();
        let parser = MarkdownParser::new();
        let source = "Use `opened` here";

        let ast = parser.parse(&arena, source).unwrap();

        let code = ast.children[0]
            .children
            .iter()
            .find(|c| c.node_type == NodeType::Code)
            .unwrap();
        let value = code.value.unwrap();
        assert_eq!(value, "opened");
        assert!(is_borrowed_from(value, source));
        assert_eq!(code.span.slice(source), Some("`opened`"));
    }

    #[test]
    fn test_parse_escaped_text_falls_back_to_arena() {
        let arena = AstArena::new();
        let parser = MarkdownParser::new();
        let source = "pull\\_request";

        let ast = parser.parse(&arena, source).unwrap();

        let paragraph = &ast.children[0];
        let mut text = String::new();
        paragraph.write_text(&mut text);
        assert_eq!(text, "pull_request");
    }

    #[test]
    fn test_parse_emphasis() {
        let arena = AstArena::new();
        let parser = MarkdownParser::new();
        let source = "*italic* and **bold**";

        let ast = parser.parse(&arena, source).unwrap();

        let paragraph = &ast.children[0];
        assert_eq!(paragraph.node_type, NodeType::Paragraph);
        assert!(paragraph.children.iter().any(|c| c.node_type == NodeType::Emphasis));
        assert!(paragraph.children.iter().any(|c| c.node_type == NodeType::Strong));
        assert!(paragraph.text_eq("italic and bold"));
    }

    #[test]
    fn test_parse_code_block() {
        let arena = AstArena::new();
        let parser = MarkdownParser::new();
        let source = "```yaml\non: push\n```";

        let ast = parser.parse(&arena, source).unwrap();

        let code_block = &ast.children[0];
        assert_eq!(code_block.node_type, NodeType::CodeBlock);
        assert_eq!(code_block.value, Some("on: push"));
    }

    #[test]
    fn test_parse_html_block() {
        let arena = AstArena::new();
        let parser = MarkdownParser::new();
        let source = "<div>HTML content</div>";

        let ast = parser.parse(&arena, source).unwrap();

        assert!(ast.children.iter().any(|c| c.node_type == NodeType::Html));
    }

    #[test]
    fn test_extensions() {
        let parser = MarkdownParser::new();

        assert!(parser.can_parse("md"));
        assert!(parser.can_parse("MD"));
        assert!(parser.can_parse("markdown"));
        assert!(!parser.can_parse("txt"));
        assert_eq!(parser.name(), "markdown");
    }

    #[test]
    fn test_span_positions() {
        let arena = AstArena::new();
        let parser = MarkdownParser::default();
        let source = "Hello";

        let ast = parser.parse(&arena, source).unwrap();

        assert_eq!(ast.span, Span::new(0, 5));
    }
}

//! Node kinds of the document tree.
//!
//! Names follow textlint's TxtAST where an equivalent exists; GFM table rows
//! are split into a header kind and a data kind.

/// Node types of the document tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum NodeType {
    // Document structure
    /// Root document node.
    Document,

    // Block elements
    /// Paragraph containing inline content.
    Paragraph,
    /// Header/Heading (H1-H6).
    Header,
    /// Block quote.
    BlockQuote,
    /// Ordered or unordered list.
    List,
    /// Item in a list.
    ListItem,
    /// Fenced or indented code block.
    CodeBlock,
    /// Horizontal rule / thematic break.
    HorizontalRule,
    /// Raw HTML, or any construct without a dedicated kind.
    Html,

    // Inline elements
    /// Plain text string.
    Str,
    /// Soft or hard line break.
    Break,
    /// Emphasis (italic).
    Emphasis,
    /// Strong emphasis (bold).
    Strong,
    /// Strikethrough text.
    Delete,
    /// Inline code span.
    Code,
    /// Hyperlink.
    Link,
    /// Image.
    Image,

    // Reference elements
    /// Link reference.
    LinkReference,
    /// Image reference.
    ImageReference,
    /// Reference definition.
    Definition,

    // Extension elements (GFM)
    /// Table.
    Table,
    /// First row of a table.
    TableHeader,
    /// Body row of a table.
    TableRow,
    /// Table cell.
    TableCell,
    /// Footnote definition.
    FootnoteDefinition,
    /// Footnote reference.
    FootnoteReference,
}

impl NodeType {
    /// Returns true if this node type is a block element.
    #[inline]
    pub const fn is_block(&self) -> bool {
        matches!(
            self,
            NodeType::Document
                | NodeType::Paragraph
                | NodeType::Header
                | NodeType::BlockQuote
                | NodeType::List
                | NodeType::ListItem
                | NodeType::CodeBlock
                | NodeType::HorizontalRule
                | NodeType::Html
                | NodeType::Table
                | NodeType::TableHeader
                | NodeType::TableRow
                | NodeType::FootnoteDefinition
        )
    }

    /// Returns true if this node type is an inline element.
    #[inline]
    pub const fn is_inline(&self) -> bool {
        matches!(
            self,
            NodeType::Str
                | NodeType::Break
                | NodeType::Emphasis
                | NodeType::Strong
                | NodeType::Delete
                | NodeType::Code
                | NodeType::Link
                | NodeType::Image
                | NodeType::LinkReference
                | NodeType::ImageReference
                | NodeType::FootnoteReference
        )
    }

    /// Returns true if this node type can contain children.
    #[inline]
    pub const fn is_parent(&self) -> bool {
        matches!(
            self,
            NodeType::Document
                | NodeType::Paragraph
                | NodeType::Header
                | NodeType::BlockQuote
                | NodeType::List
                | NodeType::ListItem
                | NodeType::Emphasis
                | NodeType::Strong
                | NodeType::Delete
                | NodeType::Link
                | NodeType::LinkReference
                | NodeType::Table
                | NodeType::TableHeader
                | NodeType::TableRow
                | NodeType::TableCell
                | NodeType::FootnoteDefinition
        )
    }

    /// Returns true if this node type is a table row of either kind.
    #[inline]
    pub const fn is_table_row(&self) -> bool {
        matches!(self, NodeType::TableHeader | NodeType::TableRow)
    }

    /// Returns true if this node's value contributes to the literal text of
    /// its ancestors.
    #[inline]
    pub const fn is_text(&self) -> bool {
        matches!(self, NodeType::Str | NodeType::Code)
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NodeType::Document => "Document",
            NodeType::Paragraph => "Paragraph",
            NodeType::Header => "Header",
            NodeType::BlockQuote => "BlockQuote",
            NodeType::List => "List",
            NodeType::ListItem => "ListItem",
            NodeType::CodeBlock => "CodeBlock",
            NodeType::HorizontalRule => "HorizontalRule",
            NodeType::Html => "Html",
            NodeType::Str => "Str",
            NodeType::Break => "Break",
            NodeType::Emphasis => "Emphasis",
            NodeType::Strong => "Strong",
            NodeType::Delete => "Delete",
            NodeType::Code => "Code",
            NodeType::Link => "Link",
            NodeType::Image => "Image",
            NodeType::LinkReference => "LinkReference",
            NodeType::ImageReference => "ImageReference",
            NodeType::Definition => "Definition",
            NodeType::Table => "Table",
            NodeType::TableHeader => "TableHeader",
            NodeType::TableRow => "TableRow",
            NodeType::TableCell => "TableCell",
            NodeType::FootnoteDefinition => "FootnoteDefinition",
            NodeType::FootnoteReference => "FootnoteReference",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(NodeType::Table)]
    #[case(NodeType::TableHeader)]
    #[case(NodeType::TableRow)]
    #[case(NodeType::Header)]
    fn test_block_elements(#[case] node_type: NodeType) {
        assert!(node_type.is_block(), "{:?} should be block", node_type);
        assert!(!node_type.is_inline(), "{:?} should not be inline", node_type);
    }

    #[rstest]
    #[case(NodeType::Str)]
    #[case(NodeType::Code)]
    #[case(NodeType::Link)]
    #[case(NodeType::Emphasis)]
    #[case(NodeType::Strong)]
    fn test_inline_elements(#[case] node_type: NodeType) {
        assert!(node_type.is_inline(), "{:?} should be inline", node_type);
    }

    #[test]
    fn test_table_cell_is_parent_not_block() {
        assert!(NodeType::TableCell.is_parent());
        assert!(!NodeType::TableCell.is_block());
    }

    #[test]
    fn test_link_is_both_inline_and_parent() {
        assert!(NodeType::Link.is_inline());
        assert!(NodeType::Link.is_parent());
    }

    #[test]
    fn test_table_row_kinds() {
        assert!(NodeType::TableHeader.is_table_row());
        assert!(NodeType::TableRow.is_table_row());
        assert!(!NodeType::TableCell.is_table_row());
    }

    #[test]
    fn test_text_kinds() {
        assert!(NodeType::Str.is_text());
        assert!(NodeType::Code.is_text());
        assert!(!NodeType::CodeBlock.is_text());
        assert!(!NodeType::Html.is_text());
    }

    #[test]
    fn test_display_matches_debug() {
        for node_type in [
            NodeType::Document,
            NodeType::TableHeader,
            NodeType::FootnoteReference,
        ] {
            assert_eq!(node_type.to_string(), format!("{:?}", node_type));
        }
    }
}

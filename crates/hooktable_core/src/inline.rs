//! Text extraction from inline content.
//!
//! Both helpers walk a subtree (typically a table cell) in pre-order.

use std::ops::ControlFlow;

use hooktable_ast::visitor::walk_node;
use hooktable_ast::{TxtNode, VisitResult, Visitor};

/// Returns the text of the first link in `node`, or `None` without one.
///
/// The link text is the concatenation of the literal text of every direct
/// child of the link. Markdown splits link text into several fragments
/// around `_` and `*` even when they open no emphasis, so `pull_request` may
/// arrive as `pull_` and `request`; taking only the first child would
/// truncate the name.
///
/// Reference-style links count as links.
pub fn first_link_text(node: &TxtNode<'_>) -> Option<String> {
    let mut finder = FirstLinkFinder { found: None };
    let _ = walk_node(&mut finder, node);
    let link = finder.found?;

    let mut text = String::new();
    for child in link.children {
        child.write_text(&mut text);
    }
    Some(text)
}

/// Returns the literal text of every inline code span in `node`, in
/// document order.
pub fn collect_code_spans(node: &TxtNode<'_>) -> Vec<String> {
    let mut collector = CodeSpanCollector { spans: Vec::new() };
    let _ = walk_node(&mut collector, node);
    collector.spans
}

struct FirstLinkFinder<'a> {
    found: Option<TxtNode<'a>>,
}

impl<'a> Visitor<'a> for FirstLinkFinder<'a> {
    fn visit_link(&mut self, node: &TxtNode<'a>) -> VisitResult {
        self.found = Some(*node);
        ControlFlow::Break(())
    }

    fn visit_link_reference(&mut self, node: &TxtNode<'a>) -> VisitResult {
        self.found = Some(*node);
        ControlFlow::Break(())
    }
}

struct CodeSpanCollector {
    spans: Vec<String>,
}

impl<'a> Visitor<'a> for CodeSpanCollector {
    fn visit_code(&mut self, node: &TxtNode<'a>) -> VisitResult {
        if let Some(value) = node.value {
            self.spans.push(value.to_string());
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hooktable_ast::{AstArena, NodeType, Span};
    use hooktable_parser::{MarkdownParser, Parser};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn text(value: &str) -> TxtNode<'_> {
        TxtNode::new_text(NodeType::Str, Span::default(), value)
    }

    fn code(value: &str) -> TxtNode<'_> {
        TxtNode::new_text(NodeType::Code, Span::default(), value)
    }

    fn parent<'a>(arena: &'a AstArena, node_type: NodeType, children: &[TxtNode<'a>]) -> TxtNode<'a> {
        TxtNode::new_parent(node_type, Span::default(), arena.alloc_slice_copy(children))
    }

    /// Parses `cell` as the first data cell of a one-column table and
    /// returns the extracted link text.
    fn link_text_of_cell(cell: &str) -> Option<String> {
        let source = format!("| Webhook event payload |\n| --- |\n| {cell} |\n");
        let arena = AstArena::new();
        let ast = MarkdownParser::new().parse(&arena, &source).unwrap();
        let cell = &ast.children[0].children[1].children[0];
        first_link_text(cell)
    }

    #[test]
    fn first_link_text_joins_fragments_split_by_delimiters() {
        let arena = AstArena::new();
        let emphasis = parent(&arena, NodeType::Emphasis, &[text("request")]);
        let link = parent(&arena, NodeType::Link, &[text("pull_"), emphasis]);
        let cell = parent(&arena, NodeType::TableCell, &[link]);

        assert_eq!(first_link_text(&cell), Some("pull_request".to_string()));
    }

    #[test]
    fn first_link_text_uses_only_the_first_link() {
        let arena = AstArena::new();
        let first = parent(&arena, NodeType::Link, &[text("push")]);
        let second = parent(&arena, NodeType::Link, &[text("pull_request")]);
        let strong = parent(&arena, NodeType::Strong, &[first]);
        let cell = parent(&arena, NodeType::TableCell, &[text("see "), strong, second]);

        assert_eq!(first_link_text(&cell), Some("push".to_string()));
    }

    #[test]
    fn first_link_text_without_link() {
        let arena = AstArena::new();
        let cell = parent(&arena, NodeType::TableCell, &[text("push"), code("opened")]);

        assert_eq!(first_link_text(&cell), None);
    }

    #[rstest]
    #[case("[pull_request](https://example.com)", Some("pull_request"))]
    #[case("[`check_run`](/webhooks#check_run)", Some("check_run"))]
    #[case("[pull_request_review_comment](/x)", Some("pull_request_review_comment"))]
    #[case("[*branch*_protection](/x)", Some("branch_protection"))]
    #[case("[registry\\_package](/x)", Some("registry_package"))]
    #[case("see [push](/x) and [fork](/y)", Some("push"))]
    #[case("`push`", None)]
    #[case("plain", None)]
    fn first_link_text_from_markdown(#[case] cell: &str, #[case] expected: Option<&str>) {
        assert_eq!(link_text_of_cell(cell), expected.map(str::to_string));
    }

    #[test]
    fn first_link_text_accepts_reference_links() {
        let source = "| Webhook event payload |\n| --- |\n| [`push`][push-event] |\n\n[push-event]: /webhooks#push\n";
        let arena = AstArena::new();
        let ast = MarkdownParser::new().parse(&arena, source).unwrap();
        let cell = &ast.children[0].children[1].children[0];

        assert_eq!(first_link_text(cell), Some("push".to_string()));
    }

    #[test]
    fn collect_code_spans_in_document_order() {
        let arena = AstArena::new();
        let nested = parent(&arena, NodeType::Emphasis, &[code("edited")]);
        let cell = parent(
            &arena,
            NodeType::TableCell,
            &[text("- "), code("opened"), nested, code("closed")],
        );

        assert_eq!(collect_code_spans(&cell), vec!["opened", "edited", "closed"]);
    }

    #[test]
    fn collect_code_spans_empty() {
        let arena = AstArena::new();
        let cell = parent(&arena, NodeType::TableCell, &[text("n/a")]);

        assert!(collect_code_spans(&cell).is_empty());
    }

    #[test]
    fn collect_code_spans_from_markdown() {
        let source = "| Webhook event payload | Activity types |\n| --- | --- |\n| [issues](/x) | - `opened`<br/>- `edited`<br/>- `deleted` |\n";
        let arena = AstArena::new();
        let ast = MarkdownParser::new().parse(&arena, source).unwrap();
        let cell = &ast.children[0].children[1].children[1];

        assert_eq!(collect_code_spans(cell), vec!["opened", "edited", "deleted"]);
    }
}

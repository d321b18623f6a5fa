//! Parser trait definition.

use hooktable_ast::{AstArena, TxtNode};

use crate::ParseError;

/// Trait for parsing source text into a document tree.
///
/// Nodes are allocated in `arena`; their literal text may borrow from
/// `source`, so both must outlive the returned tree.
pub trait Parser {
    /// Returns the name of this parser.
    fn name(&self) -> &str;

    /// Returns the file extensions this parser handles.
    ///
    /// Extensions should not include the leading dot (e.g., `["md", "markdown"]`).
    fn extensions(&self) -> &[&str];

    /// Parses the source text into a document tree rooted at a `Document` node.
    fn parse<'a>(&self, arena: &'a AstArena, source: &'a str) -> Result<TxtNode<'a>, ParseError>;

    /// Returns true if this parser can handle the given file extension.
    fn can_parse(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}

//! Classification of tables as webhook event payload tables.
//!
//! Rejections are not errors: most tables in the document are simply not
//! about webhooks. Only the scanner decides whether zero matches is fatal.

use std::fmt;

use hooktable_ast::{NodeType, TxtNode};
use tracing::debug;

use crate::inline::{collect_code_spans, first_link_text};
use crate::webhook::Webhook;

/// Outcome of classifying one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableMatch {
    /// The table describes a webhook; holds the record of its first row.
    Matched(Webhook),
    /// The table is irrelevant.
    NotMatched(SkipReason),
}

/// Why a table was not taken as a webhook table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The first header cell has some other text.
    HeaderMismatch,
    /// A data row came before any header row.
    MissingHeader,
    /// The first cell of the first data row holds no link.
    MissingLink,
    /// The link in the first cell has no text.
    EmptyName,
    /// The header matched but no data row follows it.
    MissingRow,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::HeaderMismatch => "header is not for webhook event payload",
            SkipReason::MissingHeader => "table does not have a header",
            SkipReason::MissingLink => "first cell of the first row has no link",
            SkipReason::EmptyName => "link in the first cell has no text",
            SkipReason::MissingRow => "table has no row after its header",
        };
        f.write_str(reason)
    }
}

/// Classifies `table` and extracts its webhook record.
///
/// `header` is the exact text expected in the first header cell. Only the
/// first data row is read; later rows are ignored.
pub fn classify_table(table: &TxtNode<'_>, header: &str) -> TableMatch {
    debug!(span = ?table.span, "Inspecting table");

    let mut saw_header = false;
    for row in table.children {
        match row.node_type {
            NodeType::TableHeader => {
                saw_header = true;
                let matches = row.children.first().is_some_and(|cell| cell.text_eq(header));
                if !matches {
                    return skip(SkipReason::HeaderMismatch);
                }
                debug!("Found table header for {:?}", header);
            }
            NodeType::TableRow => {
                if !saw_header {
                    return skip(SkipReason::MissingHeader);
                }
                return extract_row(row);
            }
            _ => {}
        }
    }

    debug!(saw_header, "Table row was not found");
    skip(SkipReason::MissingRow)
}

fn extract_row(row: &TxtNode<'_>) -> TableMatch {
    let mut cells = row.children.iter();

    let Some(name) = cells.next().and_then(first_link_text) else {
        return skip(SkipReason::MissingLink);
    };
    if name.is_empty() {
        return skip(SkipReason::EmptyName);
    }

    let types = cells.next().map(collect_code_spans).unwrap_or_default();

    debug!(name = %name, types = ?types, "Found webhook table");
    TableMatch::Matched(Webhook { name, types })
}

fn skip(reason: SkipReason) -> TableMatch {
    debug!(%reason, "Skip this table");
    TableMatch::NotMatched(reason)
}

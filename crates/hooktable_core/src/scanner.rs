//! Section scanner over the top-level nodes of a document.

use hooktable_ast::{NodeType, TxtNode};
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::ScanError;
use crate::table::{TableMatch, classify_table};
use crate::webhook::WebhookTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    BeforeHeading,
    AfterHeading,
}

/// Collects webhook records from the tables following the webhook heading.
///
/// Only direct children of `root` are considered. Tables before the heading
/// are never inspected; once the heading has been seen every later table is
/// classified, up to the end of the document.
///
/// # Errors
///
/// Both conditions are checked after the whole document was scanned:
/// - [`ScanError::HeadingMissing`] when no level-2 heading has the
///   configured text
/// - [`ScanError::NoWebhookTable`] when no table after it matched
pub fn scan_document(
    root: &TxtNode<'_>,
    config: &GeneratorConfig,
) -> Result<WebhookTable, ScanError> {
    let mut state = ScanState::BeforeHeading;
    let mut webhooks = WebhookTable::new();

    for node in root.children {
        match state {
            ScanState::BeforeHeading => {
                if is_section_heading(node, &config.heading) {
                    debug!(span = ?node.span, "Found \"## {}\" heading", config.heading);
                    state = ScanState::AfterHeading;
                }
            }
            ScanState::AfterHeading => {
                if node.node_type != NodeType::Table {
                    continue;
                }
                if let TableMatch::Matched(webhook) = classify_table(node, &config.table_header) {
                    let name = webhook.name.clone();
                    if !webhooks.insert(webhook) {
                        debug!(name = %name, "Webhook listed twice; keeping the latest types");
                    }
                }
            }
        }
    }

    if state == ScanState::BeforeHeading {
        return Err(ScanError::HeadingMissing {
            heading: config.heading.clone(),
        });
    }
    if webhooks.is_empty() {
        return Err(ScanError::NoWebhookTable);
    }

    debug!(count = webhooks.len(), "Collected webhooks");
    Ok(webhooks)
}

fn is_section_heading(node: &TxtNode<'_>, heading: &str) -> bool {
    node.node_type == NodeType::Header && node.depth() == Some(2) && node.text_eq(heading)
}

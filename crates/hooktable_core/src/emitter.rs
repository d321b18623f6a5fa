//! Rendering of the webhook table as Rust source.

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::EmitError;
use crate::webhook::WebhookTable;

/// Renders `webhooks` as a formatted Rust source file.
///
/// The file holds a single `pub static` slice of `(name, types)` pairs in
/// the table's insertion order, preceded by a generated-file header naming
/// `config.source_url`.
pub fn emit(webhooks: &WebhookTable, config: &GeneratorConfig) -> Result<String, EmitError> {
    let mut src = String::new();
    src.push_str("//! Code generated by hooktable. DO NOT EDIT.\n");
    src.push_str("//!\n");
    src.push_str("//! Webhook events and their activity types, extracted from\n");
    src.push_str(&format!("//! <{}>\n\n", config.source_url));

    src.push_str("/// Every webhook event paired with the activity types it can be triggered with.\n");
    src.push_str("///\n");
    src.push_str("/// Events without activity types map to an empty slice.\n");
    src.push_str(&format!(
        "pub static {}: &[(&str, &[&str])] = &[\n",
        config.const_name
    ));
    for webhook in webhooks {
        let types = webhook
            .types
            .iter()
            .map(|t| format!("{:?}", t))
            .collect::<Vec<_>>()
            .join(", ");
        src.push_str(&format!("    ({:?}, &[{}]),\n", webhook.name, types));
    }
    src.push_str("];\n");

    debug!(entries = webhooks.len(), bytes = src.len(), "Rendered webhook table");
    format_source(&src)
}

/// Parses `src` as a Rust file and pretty-prints it.
///
/// Formatting already formatted output returns it unchanged.
pub fn format_source(src: &str) -> Result<String, EmitError> {
    let file = syn::parse_file(src)?;
    Ok(prettyplease::unparse(&file))
}

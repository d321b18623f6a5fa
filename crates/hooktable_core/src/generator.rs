//! Markdown to Rust source pipeline.

use std::io::Write;

use hooktable_ast::AstArena;
use hooktable_parser::{MarkdownParser, Parser};
use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::emitter::emit;
use crate::error::GenerateError;
use crate::scanner::scan_document;
use crate::webhook::WebhookTable;

/// Turns the *Events that trigger workflows* document into Rust source.
///
/// # Example
///
/// ```rust
/// use hooktable_core::{Generator, GeneratorConfig};
///
/// let generator = Generator::new(GeneratorConfig::default());
/// let err = generator.generate(b"# Nothing to see").unwrap_err();
/// assert_eq!(err.to_string(), "\"## Webhook events\" heading was missing");
/// ```
pub struct Generator {
    config: GeneratorConfig,
    parser: MarkdownParser,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            parser: MarkdownParser::new(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Parses `markdown` and collects its webhook table.
    pub fn extract(&self, markdown: &str) -> Result<WebhookTable, GenerateError> {
        // The AST typically needs a few times the source size.
        let arena = AstArena::with_capacity(markdown.len() * 4);
        let ast = self.parser.parse(&arena, markdown)?;
        debug!(allocated = arena.allocated_bytes(), "Parsed document");

        let webhooks = scan_document(&ast, &self.config)?;
        info!("Found {} webhook events", webhooks.len());
        Ok(webhooks)
    }

    /// Generates the Rust source for a markdown document.
    ///
    /// `src` must be UTF-8; a byte order mark is not stripped.
    pub fn generate(&self, src: &[u8]) -> Result<String, GenerateError> {
        let markdown = std::str::from_utf8(src)?;
        let webhooks = self.extract(markdown)?;
        Ok(emit(&webhooks, &self.config)?)
    }

    /// Generates the Rust source and writes it to `out`.
    ///
    /// Nothing is written unless generation succeeded.
    pub fn generate_to<W: Write>(&self, src: &[u8], out: &mut W) -> Result<(), GenerateError> {
        let generated = self.generate(src)?;
        out.write_all(generated.as_bytes())
            .and_then(|()| out.flush())
            .map_err(GenerateError::Write)
    }
}

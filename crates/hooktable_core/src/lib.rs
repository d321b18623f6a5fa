//! # hooktable_core
//!
//! Extracts the "webhook event -> activity types" table from the GitHub Docs
//! page *Events that trigger workflows* and renders it as Rust source.
//!
//! This crate provides:
//! - The extraction engine (section scanner, table classifier, inline text
//!   helpers)
//! - The Rust source emitter
//! - Configuration loading
//! - Source loading (file or URL) and output destinations
//!
//! ## Example
//!
//! ```rust
//! use hooktable_core::{Generator, GeneratorConfig};
//!
//! let markdown = "## Webhook events\n\n\
//!     | Webhook event payload | Activity types |\n\
//!     | --------------------- | -------------- |\n\
//!     | [`push`](/webhooks#push) | n/a |\n";
//!
//! let generator = Generator::new(GeneratorConfig::default());
//! let table = generator.extract(markdown).unwrap();
//! assert_eq!(table.get("push"), Some(&[][..]));
//!
//! let source = generator.generate(markdown.as_bytes()).unwrap();
//! assert!(source.contains("(\"push\", &[])"));
//! ```

mod config;
mod emitter;
mod error;
mod generator;
pub mod inline;
mod output;
mod scanner;
mod source;
mod table;
mod webhook;

pub use config::GeneratorConfig;
pub use emitter::{emit, format_source};
pub use error::{ConfigError, EmitError, GenerateError, OutputError, ScanError, SourceError};
pub use generator::Generator;
pub use output::Destination;
pub use scanner::scan_document;
pub use source::{DEFAULT_SOURCE_URL, Source};
pub use table::{SkipReason, TableMatch, classify_table};
pub use webhook::{Webhook, WebhookTable};

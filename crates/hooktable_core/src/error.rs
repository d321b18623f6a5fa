//! Error types.

use std::path::PathBuf;

use hooktable_parser::ParseError;
use thiserror::Error;

/// Structural failures of the section scanner.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// The level-2 heading introducing the webhook tables was not found.
    #[error("\"## {heading}\" heading was missing")]
    HeadingMissing {
        /// The heading text that was searched for.
        heading: String,
    },

    /// The heading was found but no table after it matched.
    #[error("no webhook table was found in given markdown source")]
    NoWebhookTable,
}

/// Errors raised while rendering the generated source.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The rendered text is not valid Rust.
    #[error("could not format generated Rust source: {0}")]
    Format(#[from] syn::Error),
}

/// Errors raised while loading the markdown source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The HTTP request could not be completed.
    #[error("could not fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("request was not successful for {url}: {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The local file could not be read.
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while writing the generated source.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("could not write output to {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write output to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),

    #[error("invalid constant name `{0}`: expected an upper-case Rust identifier")]
    InvalidConstName(String),
}

impl ConfigError {
    /// Creates an invalid configuration error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// Errors of the whole markdown-to-source transformation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("source document is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error("could not write output: {0}")]
    Write(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_error_messages() {
        let missing = ScanError::HeadingMissing {
            heading: "Webhook events".to_string(),
        };
        assert_eq!(missing.to_string(), "\"## Webhook events\" heading was missing");
        assert_eq!(
            ScanError::NoWebhookTable.to_string(),
            "no webhook table was found in given markdown source"
        );
    }

    #[test]
    fn test_generate_error_is_transparent_for_scan_errors() {
        let err = GenerateError::from(ScanError::NoWebhookTable);
        assert_eq!(
            err.to_string(),
            "no webhook table was found in given markdown source"
        );
    }

    #[test]
    fn test_read_error_names_path() {
        let err = SourceError::Read {
            path: PathBuf::from("events.md"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "could not read events.md: not found");
    }
}

//! Loading the markdown document from a file or URL.

use std::fmt;
use std::path::PathBuf;

use tracing::info;

use crate::error::SourceError;

/// Raw markdown of the *Events that trigger workflows* page in the GitHub
/// Docs repository.
pub const DEFAULT_SOURCE_URL: &str = "https://raw.githubusercontent.com/github/docs/main/content/actions/reference/events-that-trigger-workflows.md";

/// Where the markdown document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

impl Source {
    /// Reads the whole document.
    ///
    /// URLs are fetched with a single GET request; any non-2xx status is an
    /// error.
    pub async fn load(&self) -> Result<Vec<u8>, SourceError> {
        match self {
            Source::File(path) => std::fs::read(path).map_err(|source| SourceError::Read {
                path: path.clone(),
                source,
            }),
            Source::Url(url) => fetch(url).await,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Url(url) => f.write_str(url),
        }
    }
}

async fn fetch(url: &str) -> Result<Vec<u8>, SourceError> {
    info!("Fetching {}", url);

    let fetch_error = |source| SourceError::Fetch {
        url: url.to_string(),
        source,
    };

    let response = reqwest::get(url).await.map_err(fetch_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.bytes().await.map_err(fetch_error)?;
    info!("Fetched {} bytes from {}", body.len(), url);
    Ok(body.to_vec())
}

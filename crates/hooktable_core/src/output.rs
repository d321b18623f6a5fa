//! Output destinations for the generated source.

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use crate::error::OutputError;

/// Where the generated source is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// Interprets a command line argument. Missing or `-` means stdout.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => Destination::Stdout,
            Some(path) => Destination::File(PathBuf::from(path)),
        }
    }

    /// Writes `contents` in full.
    ///
    /// A file is created (or truncated) only when this is called, so callers
    /// should hand over completely generated text.
    pub fn write(&self, contents: &str) -> Result<(), OutputError> {
        match self {
            Destination::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(contents.as_bytes())
                    .and_then(|()| stdout.flush())
                    .map_err(OutputError::Stdout)
            }
            Destination::File(path) => {
                std::fs::write(path, contents).map_err(|source| OutputError::File {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => f.write_str("stdout"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(None, Destination::Stdout)]
    #[case(Some("-"), Destination::Stdout)]
    #[case(Some("webhooks.rs"), Destination::File(PathBuf::from("webhooks.rs")))]
    fn test_from_arg(#[case] arg: Option<&str>, #[case] expected: Destination) {
        assert_eq!(Destination::from_arg(arg), expected);
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("webhooks.rs");

        Destination::File(path.clone()).write("pub static X: u8 = 0;\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "pub static X: u8 = 0;\n");
    }

    #[test]
    fn test_write_file_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("webhooks.rs");

        let err = Destination::File(path.clone()).write("").unwrap_err();

        assert!(matches!(&err, OutputError::File { path: p, .. } if p == &path));
        assert!(err.to_string().starts_with("could not write output to"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Destination::Stdout.to_string(), "stdout");
        assert_eq!(Destination::File(PathBuf::from("out.rs")).to_string(), "out.rs");
    }
}

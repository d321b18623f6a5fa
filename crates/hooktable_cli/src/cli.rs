//! CLI argument definitions

use std::path::PathBuf;

use clap::Parser;

/// hooktable - Generate the GitHub webhook event table as Rust source
///
/// With no file arguments the source document is fetched and the result is
/// printed to stdout. A single argument names the output file. With two
/// arguments the first is a local markdown file to read instead of fetching.
#[derive(Parser)]
#[command(name = "hooktable")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Markdown source file, or the output file when given alone
    #[arg(value_name = "SRCFILE")]
    pub first: Option<String>,

    /// Output file (`-` for stdout)
    #[arg(value_name = "DSTFILE")]
    pub second: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// URL to fetch the markdown source from
    #[arg(long)]
    pub url: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Splits the positional arguments into `(srcfile, dstfile)`.
    pub fn source_and_destination(&self) -> (Option<&str>, Option<&str>) {
        match (self.first.as_deref(), self.second.as_deref()) {
            (Some(src), Some(dst)) => (Some(src), Some(dst)),
            (dst, None) => (None, dst),
            // clap fills positionals in order
            (None, Some(dst)) => (None, Some(dst)),
        }
    }
}

// crates/splice_readme/src/error.rs

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of a splice run. Every variant is fatal.
#[derive(Debug, Error)]
pub enum SpliceError {
    #[error("cannot open {}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("cannot read source document")]
    ReadSource(#[source] io::Error),
    #[error("cannot read README")]
    ReadReadme(#[source] io::Error),
    #[error("cannot write output")]
    Write(#[source] io::Error),
}

impl SpliceError {
    /// True for errors caused by an input that could not be opened or read.
    pub fn is_input(&self) -> bool {
        !self.is_output()
    }

    /// True when the output sink refused a write or flush.
    pub fn is_output(&self) -> bool {
        matches!(self, SpliceError::Write(_))
    }
}

//! Typed errors for the dump session and its sinks.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DumpError {
    /// The in-memory output buffer could not be created or grown.
    #[error("could not allocate output buffer ({requested} bytes)")]
    Allocation { requested: usize },

    /// The output destination could not be created.
    #[error("could not create output '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An I/O error while writing sample data or flushing.
    #[error("failed writing output: {0}")]
    Write(#[from] io::Error),

    /// The destination accepted fewer bytes than requested during flush.
    /// The remainder of the flush is abandoned; there is no retry.
    #[error("short write: {written} of {expected} bytes accepted")]
    ShortWrite { written: usize, expected: usize },
}

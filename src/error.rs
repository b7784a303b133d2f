use std::io;
use std::path::PathBuf;

use crate::{ReaderError, WriterError};

/// Error type for operations that touch the file system, or that wrap reader and writer errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file could not be read in full.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A file could not be written in full.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// The file that was being written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Decoding failed.
    #[error(transparent)]
    Reader(#[from] ReaderError),

    /// Encoding failed.
    #[error(transparent)]
    Writer(#[from] WriterError),
}

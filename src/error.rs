use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by [`List`](crate::List) operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An element was popped from an empty list.
    #[error("list is empty")]
    EmptyContainer,
    /// An index was outside of `0..len`.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// A handle refers to a removed node, or to a node of another list.
    #[error("stale or foreign node handle")]
    InvalidHandle,
    /// A file could not be opened for reading or writing.
    #[error("cannot open `{}`", path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

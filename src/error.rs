//! Error type shared by loading, selection and series shaping.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed results document")]
    Json(#[from] json::Error),

    /// Top level object has no `results` key.
    #[error("document has no `results` field")]
    MissingResults,

    #[error("`results` is not an array")]
    ResultsNotArray,

    /// Record `index` (position in `results`) has a missing or unusable field.
    #[error("record {index}: field `{field}` {reason}")]
    InvalidField {
        index: usize,
        field: &'static str,
        reason: String,
    },

    /// `readers` length disagrees with the declared `num_readers`.
    #[error("{implementation} (block size {block_size}): declares {declared} readers, has {actual} reader timings")]
    ReaderCountMismatch {
        implementation: String,
        block_size: u64,
        declared: u64,
        actual: usize,
    },

    /// Records of one series were measured with different reader counts.
    #[error("{implementation}: mixed reader counts in one series ({expected} and {found})")]
    MixedReaderCount {
        implementation: String,
        expected: u64,
        found: u64,
    },

    #[error("series for {expected} received a record of {found}")]
    MixedImplementation {
        expected: String,
        found: String,
    },
}

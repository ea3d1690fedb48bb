use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between a csv path and a returned set.
///
/// `NotFound`, `Io`, `Parse` and `MissingColumn` surface from the loading
/// factory and are fatal to construction. `Conversion` is the only
/// query-time failure and is fatal to that query alone. A lookup that simply
/// matches nothing is `Ok(None)`, not an error.
#[derive(Debug, Error)]
pub enum Error {
    /// The dataset file does not exist.
    #[error("dataset not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The dataset file exists but could not be read.
    #[error("reading dataset {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid comma-separated tabular text.
    #[error("malformed dataset: {detail}")]
    Parse {
        detail: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// The header row lacks a column the lookup needs.
    #[error("dataset header is missing required column '{column}'")]
    MissingColumn { column: &'static str },

    /// A matched row could not be converted into a record. Matched rows are
    /// expected to be well-formed, so this indicates a data-integrity bug in
    /// the source table rather than a bad query.
    #[error("row '{set_num}' is not a valid set record: {detail}")]
    Conversion { set_num: String, detail: String },
}

impl Error {
    pub(crate) fn parse(source: csv::Error) -> Self {
        Error::Parse {
            detail: source.to_string(),
            source: Some(source),
        }
    }

    pub(crate) fn bad_row(row: usize, detail: impl Into<String>) -> Self {
        Error::Parse {
            detail: format!("row {row}: {}", detail.into()),
            source: None,
        }
    }
}

use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use crate::data::model::{SetRow, SetTable};
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Column names of the Rebrickable sets export. Extra columns are allowed
/// and ignored; a missing one rejects the whole file at load time.
pub const COL_ID: &str = "set_num";
pub const COL_NAME: &str = "name";
pub const COL_REL_YEAR: &str = "year";
pub const COL_PART_COUNT: &str = "num_parts";

const REQUIRED_COLUMNS: [&str; 4] = [COL_ID, COL_NAME, COL_REL_YEAR, COL_PART_COUNT];

// ---------------------------------------------------------------------------
// Blocking load
// ---------------------------------------------------------------------------

/// Read a comma-separated sets export into a [`SetTable`], blocking the
/// calling thread for the duration. A caller with other concurrent
/// responsibilities should go through [`load_csv_in_background`] instead.
pub fn load_csv(path: &Path) -> Result<SetTable> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let mut reader = csv::Reader::from_reader(file);

    {
        let headers = reader.headers().map_err(Error::parse)?;
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(Error::MissingColumn { column });
            }
        }
    }

    let mut rows = Vec::new();
    for (i, record) in reader.deserialize::<SetRow>().enumerate() {
        let row = record.map_err(Error::parse)?;
        // An identifier cell must hold text. An empty cell fails the load
        // rather than being skipped, so data-integrity problems stay visible.
        if row.set_num.is_empty() {
            return Err(Error::bad_row(i + 1, "empty set identifier"));
        }
        rows.push(row);
    }

    log::info!("loaded {} sets from {}", rows.len(), path.display());
    Ok(SetTable::from_rows(rows))
}

// ---------------------------------------------------------------------------
// Background load
// ---------------------------------------------------------------------------

/// Handle to a load running on a worker thread.
pub struct LoadHandle {
    worker: JoinHandle<Result<SetTable>>,
}

impl LoadHandle {
    /// True once the worker has finished and [`LoadHandle::wait`] will not
    /// block. Lets an event-loop caller poll instead of suspending.
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Block until the load completes and yield its result. A panic on the
    /// worker thread is resumed on the caller.
    pub fn wait(self) -> Result<SetTable> {
        match self.worker.join() {
            Ok(outcome) => outcome,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}

/// Run [`load_csv`] on a dedicated worker thread so the caller's own thread
/// (a UI loop, a request handler) is not stalled by file I/O and parsing.
///
/// There is no cancellation; a caller wanting a timeout wraps the handle
/// externally and drops it.
pub fn load_csv_in_background(path: impl Into<PathBuf>) -> LoadHandle {
    let path = path.into();
    let worker = thread::spawn(move || load_csv(&path));
    LoadHandle { worker }
}

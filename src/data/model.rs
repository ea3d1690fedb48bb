use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Externally visible numeric id of a set (the digits before the variant
/// suffix).
pub type SetId = u32;

// ---------------------------------------------------------------------------
// LegoSet – the looked-up record
// ---------------------------------------------------------------------------

/// Metadata of one official LEGO set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegoSet {
    pub set_id: SetId,
    pub set_name: String,
    /// Absent when the source table has no release year for the set.
    pub release_year: Option<i32>,
    /// Absent when the source table has no part count for the set.
    pub part_count: Option<u32>,
}

impl fmt::Display for LegoSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.set_id, self.set_name)?;
        match (self.release_year, self.part_count) {
            (Some(year), Some(parts)) => write!(f, " ({year}, {parts} parts)"),
            (Some(year), None) => write!(f, " ({year})"),
            (None, Some(parts)) => write!(f, " ({parts} parts)"),
            (None, None) => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// SetRow – one raw row of the source table
// ---------------------------------------------------------------------------

/// One row of the source table, cells kept as text until a lookup converts
/// them. Field names mirror the Rebrickable export headers; columns the
/// lookup does not use (theme id, image url, …) are ignored on read.
#[derive(Debug, Clone, Deserialize)]
pub struct SetRow {
    pub set_num: String,
    pub name: String,
    pub year: String,
    pub num_parts: String,
}

impl SetRow {
    /// Convert a matched row into a [`LegoSet`].
    ///
    /// Identifiers carry a `-1`/`-2` variant suffix; the numeric id is the
    /// segment before the first dash. A matched row is expected to be
    /// well-formed, so any malformed cell is a hard [`Error::Conversion`],
    /// never a silent skip.
    pub fn to_lego_set(&self) -> Result<LegoSet> {
        let id_digits = self.set_num.split('-').next().unwrap_or("");
        let set_id = id_digits
            .parse::<SetId>()
            .map_err(|_| self.conversion_error("identifier does not start with a numeric id"))?;

        if self.name.is_empty() {
            return Err(self.conversion_error("set name is empty"));
        }

        let release_year = parse_optional::<i32>(&self.year)
            .map_err(|_| self.conversion_error("release year is not an integer"))?;
        let part_count = parse_optional::<u32>(&self.num_parts)
            .map_err(|_| self.conversion_error("part count is not a non-negative integer"))?;

        Ok(LegoSet {
            set_id,
            set_name: self.name.clone(),
            release_year,
            part_count,
        })
    }

    fn conversion_error(&self, detail: &str) -> Error {
        Error::Conversion {
            set_num: self.set_num.clone(),
            detail: detail.to_string(),
        }
    }
}

/// Empty cell → `None`; anything else must parse.
fn parse_optional<T: FromStr>(cell: &str) -> std::result::Result<Option<T>, T::Err> {
    let cell = cell.trim();
    if cell.is_empty() {
        Ok(None)
    } else {
        cell.parse().map(Some)
    }
}

// ---------------------------------------------------------------------------
// SetTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full in-memory dataset, rows in file order. Built once by the loader;
/// no mutation path exists afterwards, so shared reads need no locking.
#[derive(Debug, Clone, Default)]
pub struct SetTable {
    rows: Vec<SetRow>,
}

impl SetTable {
    pub(crate) fn from_rows(rows: Vec<SetRow>) -> Self {
        Self { rows }
    }

    /// All rows, in file order.
    pub fn rows(&self) -> &[SetRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

use std::path::Path;

use crate::data::loader;
use crate::data::model::{LegoSet, SetId, SetTable};
use crate::error::Result;

// ---------------------------------------------------------------------------
// Capability contract
// ---------------------------------------------------------------------------

/// Anything that can resolve a set id to its metadata.
///
/// The table-backed [`RebrickableStore`] is the only implementation today; a
/// future variant (say, one querying the Rebrickable API directly) slots in
/// behind the same trait without touching callers.
pub trait LegoSetStore {
    /// Look up a set by its numeric id.
    ///
    /// Returns `Ok(None)` when nothing matches; absence is a normal,
    /// expected outcome, not an error.
    fn by_id(&self, set_id: SetId) -> Result<Option<LegoSet>>;
}

// ---------------------------------------------------------------------------
// Table-backed store
// ---------------------------------------------------------------------------

/// Set store backed by the Rebrickable bulk `sets.csv` export
/// (<https://rebrickable.com/downloads/>), held fully in memory.
///
/// Read-only after construction, so a single store can serve concurrent
/// lookups from multiple threads without locking.
pub struct RebrickableStore {
    table: SetTable,
}

impl RebrickableStore {
    /// Load the export at `path` and build a store over it.
    ///
    /// The read+parse runs on a worker thread and this call waits for it, so
    /// the table is always fully resident before the first query. This is
    /// the only way to construct a store.
    pub fn from_csv(path: &Path) -> Result<Self> {
        let table = loader::load_csv_in_background(path).wait()?;
        Ok(Self { table })
    }

    /// Number of rows in the backing table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the backing table is empty.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl LegoSetStore for RebrickableStore {
    fn by_id(&self, set_id: SetId) -> Result<Option<LegoSet>> {
        // Identifiers carry a -1/-2 variant suffix, so matching is
        // starts-with rather than equality, and the first row in file order
        // wins among variants. Note the match is a plain string prefix:
        // by_id(7) also matches "71-1".
        // TODO: decide whether the match should require the dash boundary.
        let needle = set_id.to_string();
        let hit = self
            .table
            .rows()
            .iter()
            .find(|row| row.set_num.starts_with(&needle));

        match hit {
            Some(row) => row.to_lego_set().map(Some),
            None => {
                log::debug!("no set matching id {set_id}");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::data::model::SetRow;
    use crate::error::Error;

    use super::*;

    fn store(rows: &[(&str, &str, &str, &str)]) -> RebrickableStore {
        let rows = rows
            .iter()
            .map(|(set_num, name, year, num_parts)| SetRow {
                set_num: set_num.to_string(),
                name: name.to_string(),
                year: year.to_string(),
                num_parts: num_parts.to_string(),
            })
            .collect();
        RebrickableStore {
            table: SetTable::from_rows(rows),
        }
    }

    #[test]
    fn unmatched_id_is_absent_not_an_error() {
        let store = store(&[("7140-1", "X-wing Fighter", "1999", "266")]);
        assert_eq!(store.by_id(42).unwrap(), None);
    }

    #[test]
    fn matched_row_becomes_a_record() {
        let store = store(&[("7140-1", "Brick Separator", "2001", "4")]);
        let set = store.by_id(7140).unwrap().unwrap();

        assert_eq!(set.set_id, 7140);
        assert_eq!(set.set_name, "Brick Separator");
        assert_eq!(set.release_year, Some(2001));
        assert_eq!(set.part_count, Some(4));
    }

    #[test]
    fn first_variant_in_table_order_wins() {
        let store = store(&[
            ("1000-1", "Mosaic Set", "1985", "1000"),
            ("1000-2", "Mosaic Set (reissue)", "1986", "1000"),
        ]);
        let set = store.by_id(1000).unwrap().unwrap();
        assert_eq!(set.set_name, "Mosaic Set");
    }

    // Pins the loose prefix rule: a shorter id matches any identifier that
    // merely starts with its digits, and the returned record carries the
    // matched row's id, not the queried one.
    #[test]
    fn prefix_match_is_string_starts_with() {
        let store = store(&[("71-1", "Small House", "1958", "45")]);
        let set = store.by_id(7).unwrap().unwrap();
        assert_eq!(set.set_id, 71);
    }

    #[test]
    fn repeated_lookups_return_equal_results() {
        let store = store(&[("7140-1", "X-wing Fighter", "1999", "266")]);
        assert_eq!(store.by_id(7140).unwrap(), store.by_id(7140).unwrap());
        assert_eq!(store.by_id(9).unwrap(), store.by_id(9).unwrap());
    }

    #[test]
    fn malformed_matched_row_is_a_query_error() {
        let store = store(&[("7140-1", "X-wing Fighter", "unknown", "266")]);
        let err = store.by_id(7140).unwrap_err();
        assert!(matches!(err, Error::Conversion { .. }), "got {err:?}");
    }
}

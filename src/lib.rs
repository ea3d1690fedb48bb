//! Look up LEGO set metadata (name, release year, part count) by numeric id,
//! backed by the Rebrickable bulk `sets.csv` export loaded into memory.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use legodex::{LegoSetStore, RebrickableStore};
//!
//! # fn main() -> legodex::Result<()> {
//! let store = RebrickableStore::from_csv(Path::new("sets.csv"))?;
//! match store.by_id(7140)? {
//!     Some(set) => println!("found: {set}"),
//!     None => println!("no such set"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod error;
pub mod store;

pub use data::loader::{LoadHandle, load_csv, load_csv_in_background};
pub use data::model::{LegoSet, SetId, SetTable};
pub use error::{Error, Result};
pub use store::{LegoSetStore, RebrickableStore};

//! Data layer: core types and dataset loading.
//!
//! Architecture:
//! ```text
//!   sets.csv
//!      │
//!      ▼
//! ┌─────────┐
//! │ loader  │  parse file → SetTable  (worker thread)
//! └─────────┘
//!      │
//!      ▼
//! ┌──────────┐
//! │ SetTable │  Vec<SetRow>, file order
//! └──────────┘
//!      │
//!      ▼
//! ┌──────────┐
//! │  store   │  by_id prefix lookup → LegoSet
//! └──────────┘
//! ```

pub mod loader;
pub mod model;

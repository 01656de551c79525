//! Table normalization for tabclean.
//!
//! [`normalize`] turns a loaded [`Table`](tabclean_model::Table) into a
//! [`CleanTable`](tabclean_model::CleanTable): duplicate columns merged under
//! their first-seen label, cells trimmed, duplicate rows dropped and absent
//! cells replaced with [`NULL_SENTINEL`]. The pipeline is pure and cannot
//! fail.

pub mod dedupe;
pub mod keys;
pub mod merge;
pub mod pipeline;
pub mod sentinel;
pub mod trim;

pub use dedupe::dedupe_rows;
pub use keys::{ColumnAssignment, column_key, resolve_columns};
pub use merge::{MergedTable, group_columns, merge_columns};
pub use pipeline::{Normalized, normalize};
pub use sentinel::{NULL_SENTINEL, fill_absent, fill_cell};
pub use trim::{trim_cell, trim_rows};

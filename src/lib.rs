//! Sortable node details tables for topology graphs.

pub mod table;
pub mod topology;
pub mod util;

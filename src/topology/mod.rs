mod collect;
mod error;
mod model;
mod parse;

pub use collect::{DEFAULT_TABLE_LABEL, Snapshot, infer_columns, load_snapshot, snapshot_from_str};
pub use error::{SnapshotError, SnapshotResult};
pub use model::{Column, DataType, Field, FieldValue, MetricFormat, Node, Relative};

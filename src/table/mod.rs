//! Node details table: value lookup, sorting and view model.

mod format;
mod interaction;
mod resolve;
mod row;
mod sort;
mod sort_key;
mod view;

pub use format::{FormattedText, format_data_type, format_large_value, format_metric};
pub use interaction::{DRAG_THRESHOLD_PX, Point, RowPointer};
pub use resolve::{ResolvedValue, resolve};
pub use row::{Cell, CellContent, NodeLink, NodeRow, RowOptions, RowView, build_row};
pub use sort::sort_nodes;
pub use sort_key::{
    SortKey, build_key, compare_optional, default_sort_desc, default_sorted_by, field_key, sort_key,
};
pub use view::{
    DEFAULT_ROW_LIMIT, Header, SortChange, TableView, ViewState, build_table, clamp_limit,
    header_columns,
};

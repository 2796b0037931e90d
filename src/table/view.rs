use std::fmt;

use tracing::debug;

use crate::topology::{Column, DataType, Node};

use super::row::{RowOptions, RowView, build_row};
use super::sort::sort_nodes;
use super::sort_key::{default_sort_desc, default_sorted_by};

pub const DEFAULT_ROW_LIMIT: usize = 5;

pub fn clamp_limit(limit: i64) -> usize {
    usize::try_from(limit).unwrap_or(0)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortChange {
    pub sorted_by: String,
    pub sorted_desc: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub sorted_by: Option<String>,
    pub sorted_desc: Option<bool>,
    pub limit: usize,
    pub default_limit: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_ROW_LIMIT)
    }
}

impl ViewState {
    pub fn new(default_limit: usize) -> Self {
        Self {
            sorted_by: None,
            sorted_desc: None,
            limit: default_limit,
            default_limit,
        }
    }

    pub fn with_sort(mut self, sorted_by: Option<String>, sorted_desc: Option<bool>) -> Self {
        self.sorted_by = sorted_by;
        self.sorted_desc = sorted_desc;
        self
    }

    pub fn set_sort(self, sorted_by: impl Into<String>, sorted_desc: bool) -> (Self, SortChange) {
        let sorted_by = sorted_by.into();
        debug!(sorted_by = %sorted_by, sorted_desc, "node table sort changed");

        let change = SortChange {
            sorted_by: sorted_by.clone(),
            sorted_desc,
        };
        let next = Self {
            sorted_by: Some(sorted_by),
            sorted_desc: Some(sorted_desc),
            ..self
        };
        (next, change)
    }

    pub fn click_header(self, header: &Header) -> (Self, SortChange) {
        self.set_sort(header.id.clone(), header.next_sort_desc)
    }

    pub fn toggle_limit(self) -> Self {
        let limit = if self.limit > 0 { 0 } else { self.default_limit };
        Self { limit, ..self }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub id: String,
    pub label: String,
    pub data_type: Option<DataType>,
    /// `Some(descending)` on the column the table is sorted by.
    pub sorted: Option<bool>,
    pub next_sort_desc: bool,
}

#[derive(Clone, Debug)]
pub struct TableView<'a> {
    pub headers: Vec<Header>,
    pub sorted_by: String,
    pub sorted_desc: bool,
    pub rows: Vec<RowView>,
    pub nodes: Vec<&'a Node>,
    pub total_rows: usize,
    pub hidden_count: usize,
    pub is_expanded: bool,
}

impl TableView<'_> {
    pub fn is_limited(&self) -> bool {
        self.hidden_count > 0
    }
}

pub fn header_columns(columns: &[Column], label: &str) -> Vec<Column> {
    std::iter::once(Column::label_column(label))
        .chain(columns.iter().cloned())
        .collect()
}

pub fn build_table<'a>(
    nodes: &'a [Node],
    columns: &[Column],
    label: &str,
    state: &ViewState,
    options: &RowOptions,
) -> TableView<'a> {
    let header_columns = header_columns(columns, label);

    let sorted_by = state
        .sorted_by
        .clone()
        .unwrap_or_else(|| default_sorted_by(columns, nodes));
    let sort_column = header_columns
        .iter()
        .find(|column| column.id == sorted_by)
        .cloned()
        .unwrap_or_else(|| Column::new(&sorted_by, &sorted_by));
    let sorted_desc = state
        .sorted_desc
        .unwrap_or_else(|| default_sort_desc(Some(&sort_column), nodes));

    let mut sorted = sort_nodes(nodes, Some(&sort_column), sorted_desc);
    let total_rows = sorted.len();
    let limited = state.limit > 0 && total_rows > state.limit;
    let hidden_count = if limited { total_rows - state.limit } else { 0 };
    if limited {
        sorted.truncate(state.limit);
    }

    let headers = header_columns
        .iter()
        .map(|column| {
            let is_sorted = column.id == sorted_by;
            Header {
                id: column.id.clone(),
                label: column.label.clone(),
                data_type: column.data_type.clone(),
                sorted: is_sorted.then_some(sorted_desc),
                next_sort_desc: if is_sorted {
                    !sorted_desc
                } else {
                    default_sort_desc(Some(column), nodes)
                },
            }
        })
        .collect();

    let rows = sorted
        .iter()
        .map(|node| build_row(node, columns, options))
        .collect();

    TableView {
        headers,
        sorted_by,
        sorted_desc,
        rows,
        nodes: sorted,
        total_rows,
        hidden_count,
        is_expanded: state.limit == 0,
    }
}

impl fmt::Display for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header_line = self
            .headers
            .iter()
            .map(|header| match header.sorted {
                Some(true) => format!("{} ▼", header.label),
                Some(false) => format!("{} ▲", header.label),
                None => header.label.clone(),
            })
            .collect::<Vec<_>>()
            .join("\t");
        writeln!(f, "{header_line}")?;

        for row in &self.rows {
            match row {
                RowView::Node(row) => {
                    let cells = std::iter::once(row.label.as_str())
                        .chain(row.cells.iter().map(|cell| cell.text()))
                        .collect::<Vec<_>>()
                        .join("\t");
                    writeln!(f, "{cells}")?;
                }
                RowView::Placeholder => writeln!(f)?,
            }
        }

        if self.hidden_count > 0 {
            writeln!(f, "... {} more", self.hidden_count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::topology::Field;

    use super::*;

    fn nodes(count: usize) -> Vec<Node> {
        (0..count)
            .map(|index| {
                Node::new(format!("n{index:02}")).with_metric(Field::new("cpu", index as f64))
            })
            .collect()
    }

    #[test]
    fn headers_start_with_the_label_column() {
        let columns = vec![Column::new("cpu", "CPU")];
        let nodes = nodes(2);
        let view = build_table(&nodes, &columns, "Name", &ViewState::default(), &RowOptions::default());

        let ids = view.headers.iter().map(|header| header.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, ["label", "cpu"]);
        assert_eq!(view.headers[0].label, "Name");
    }

    #[test]
    fn defaults_to_first_metric_descending() {
        let columns = vec![Column::new("cpu", "CPU")];
        let nodes = nodes(3);
        let view = build_table(&nodes, &columns, "Name", &ViewState::default(), &RowOptions::default());

        assert_eq!(view.sorted_by, "cpu");
        assert!(view.sorted_desc);
        assert_eq!(view.rows[0].node_id(), Some("n02"));
        assert_eq!(view.headers[1].sorted, Some(true));
        assert!(!view.headers[1].next_sort_desc);
        assert_eq!(view.headers[0].sorted, None);
        assert!(!view.headers[0].next_sort_desc);
    }

    #[test]
    fn explicit_state_overrides_defaults() {
        let columns = vec![Column::new("cpu", "CPU")];
        let nodes = nodes(3);
        let state = ViewState::default().with_sort(Some("cpu".to_owned()), Some(false));
        let view = build_table(&nodes, &columns, "Name", &state, &RowOptions::default());

        assert!(!view.sorted_desc);
        assert_eq!(view.rows[0].node_id(), Some("n00"));
    }

    #[test]
    fn sort_column_outside_headers_still_sorts() {
        let columns = vec![Column::new("state", "State")];
        let nodes = nodes(3);
        let view = build_table(&nodes, &columns, "Name", &ViewState::default(), &RowOptions::default());

        assert_eq!(view.sorted_by, "cpu");
        assert!(view.sorted_desc);
        assert_eq!(view.nodes[0].id.as_deref(), Some("n02"));
        assert!(view.headers.iter().all(|header| header.sorted.is_none()));
    }

    #[test]
    fn limit_hides_trailing_rows() {
        let nodes = nodes(12);
        let state = ViewState::new(10);
        let view = build_table(&nodes, &[], "Name", &state, &RowOptions::default());

        assert_eq!(view.rows.len(), 10);
        assert_eq!(view.hidden_count, 2);
        assert!(!view.is_expanded);
        assert!(view.is_limited());

        let expanded = state.toggle_limit();
        let view = build_table(&nodes, &[], "Name", &expanded, &RowOptions::default());
        assert_eq!(view.rows.len(), 12);
        assert_eq!(view.hidden_count, 0);
        assert!(view.is_expanded);

        assert_eq!(expanded.toggle_limit().limit, 10);
    }

    #[test]
    fn limit_above_row_count_hides_nothing() {
        let nodes = nodes(3);
        let view = build_table(&nodes, &[], "Name", &ViewState::new(5), &RowOptions::default());

        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.hidden_count, 0);
        assert!(!view.is_expanded);
    }

    #[test]
    fn header_click_toggles_current_column() {
        let columns = vec![Column::new("cpu", "CPU")];
        let nodes = nodes(3);
        let state = ViewState::default();
        let view = build_table(&nodes, &columns, "Name", &state, &RowOptions::default());

        let (state, change) = state.click_header(&view.headers[1]);
        assert_eq!(
            change,
            SortChange {
                sorted_by: "cpu".to_owned(),
                sorted_desc: false,
            }
        );

        let view = build_table(&nodes, &columns, "Name", &state, &RowOptions::default());
        assert_eq!(view.rows[0].node_id(), Some("n00"));

        let (state, change) = state.click_header(&view.headers[0]);
        assert_eq!(change.sorted_by, "label");
        assert!(!change.sorted_desc);
        assert_eq!(state.sorted_by.as_deref(), Some("label"));
    }

    #[test]
    fn negative_limits_clamp_to_unlimited() {
        assert_eq!(clamp_limit(-3), 0);
        assert_eq!(clamp_limit(0), 0);
        assert_eq!(clamp_limit(7), 7);
    }

    #[test]
    fn renders_as_text() {
        let columns = vec![Column::new("cpu", "CPU")];
        let nodes = nodes(3);
        let view = build_table(&nodes, &columns, "Name", &ViewState::new(2), &RowOptions::default());

        assert_eq!(view.to_string(), "Name\tCPU ▼\nn02\t2\nn01\t1\n... 1 more\n");
    }
}

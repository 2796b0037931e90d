use chrono::{DateTime, Utc};

use crate::topology::{Column, FieldValue, Node};

use super::format::{FormattedText, format_data_type, format_metric};
use super::resolve::{ResolvedValue, resolve};

#[derive(Clone, Debug, PartialEq)]
pub struct RowOptions {
    pub node_id_key: String,
    pub topology_id: Option<String>,
    /// Datetime metadata renders relative to this instant when set.
    pub reference_time: Option<DateTime<Utc>>,
}

impl Default for RowOptions {
    fn default() -> Self {
        Self {
            node_id_key: "id".to_owned(),
            topology_id: None,
            reference_time: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeLink {
    pub topology_id: Option<String>,
    pub node_id: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CellContent {
    Metadata(FormattedText),
    Relative { link: NodeLink, title: String },
    Value { value: FieldValue, text: String },
    Empty,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub column_id: String,
    pub content: CellContent,
}

impl Cell {
    pub fn text(&self) -> &str {
        match &self.content {
            CellContent::Metadata(formatted) => &formatted.text,
            CellContent::Relative { link, .. } => &link.label,
            CellContent::Value { text, .. } => text,
            CellContent::Empty => "",
        }
    }

    pub fn title(&self) -> Option<&str> {
        match &self.content {
            CellContent::Metadata(formatted) => Some(&formatted.title),
            CellContent::Relative { title, .. } => Some(title),
            CellContent::Value { .. } | CellContent::Empty => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeRow {
    pub node_id: String,
    pub label: String,
    pub link: NodeLink,
    pub cells: Vec<Cell>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RowView {
    Node(NodeRow),
    Placeholder,
}

impl RowView {
    pub fn node_id(&self) -> Option<&str> {
        match self {
            Self::Node(row) => Some(&row.node_id),
            Self::Placeholder => None,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        match self {
            Self::Node(row) => &row.cells,
            Self::Placeholder => &[],
        }
    }
}

fn build_cell(node: &Node, column: &Column, options: &RowOptions) -> Cell {
    let content = match resolve(node, Some(&column.id)) {
        ResolvedValue::Metadata(field) => {
            CellContent::Metadata(format_data_type(field, options.reference_time))
        }
        ResolvedValue::Relative(relative) => CellContent::Relative {
            link: NodeLink {
                topology_id: Some(relative.topology_id.clone()),
                node_id: relative.id.clone(),
                label: relative.label.clone(),
            },
            title: relative.label.clone(),
        },
        ResolvedValue::Metric(field) => CellContent::Value {
            text: format_metric(&field.value, field.format),
            value: field.value.clone(),
        },
        ResolvedValue::Attribute(value) => CellContent::Value {
            text: value.to_string(),
            value,
        },
        ResolvedValue::Absent => CellContent::Empty,
    };

    Cell {
        column_id: column.id.clone(),
        content,
    }
}

pub fn build_row(node: &Node, columns: &[Column], options: &RowOptions) -> RowView {
    let Some(node_id) = node.id.as_deref().filter(|id| !id.is_empty()) else {
        return RowView::Placeholder;
    };

    let link_id = node
        .attribute(&options.node_id_key)
        .map_or_else(|| node_id.to_owned(), |value| value.to_string());

    RowView::Node(NodeRow {
        node_id: node_id.to_owned(),
        label: node.display_label().to_owned(),
        link: NodeLink {
            topology_id: options.topology_id.clone(),
            node_id: link_id,
            label: node.display_label().to_owned(),
        },
        cells: columns
            .iter()
            .map(|column| build_cell(node, column, options))
            .collect(),
    })
}

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use super::error::{SnapshotError, SnapshotResult};
use super::model::{Column, DataType, Field, Node};
use super::parse::{RawSnapshot, parse_snapshot_json};

pub const DEFAULT_TABLE_LABEL: &str = "Name";

#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub label: String,
    pub topology_id: Option<String>,
    pub columns: Vec<Column>,
    pub nodes: Vec<Node>,
}

impl Snapshot {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

pub fn load_snapshot(path: &Path) -> SnapshotResult<Snapshot> {
    let raw = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot = snapshot_from_str(&raw)?;

    info!(
        path = %path.display(),
        nodes = snapshot.nodes.len(),
        columns = snapshot.columns.len(),
        "loaded topology snapshot"
    );
    Ok(snapshot)
}

pub fn snapshot_from_str(raw: &str) -> SnapshotResult<Snapshot> {
    let RawSnapshot {
        label,
        topology_id,
        columns,
        mut nodes,
    } = parse_snapshot_json(raw)?;

    for node in &mut nodes {
        let node_id = node.id.clone().unwrap_or_default();
        dedup_fields(&node_id, "metrics", &mut node.metrics);
        dedup_fields(&node_id, "metadata", &mut node.metadata);
    }

    let columns = if columns.is_empty() {
        infer_columns(&nodes)
    } else {
        columns
    };

    Ok(Snapshot {
        label: label.unwrap_or_else(|| DEFAULT_TABLE_LABEL.to_owned()),
        topology_id,
        columns,
        nodes,
    })
}

fn dedup_fields(node_id: &str, list: &str, fields: &mut Vec<Field>) {
    let mut seen = HashSet::with_capacity(fields.len());
    fields.retain(|field| {
        let first = seen.insert(field.id.clone());
        if !first {
            warn!(node = node_id, list, field = %field.id, "dropping duplicate field id");
        }
        first
    });
}

/// Columns for snapshots that carry none: every metric, then metadata, then
/// parent topology, in order of first appearance.
pub fn infer_columns(nodes: &[Node]) -> Vec<Column> {
    let mut seen = HashSet::new();
    let mut columns = Vec::new();

    for node in nodes {
        for field in &node.metrics {
            if seen.insert(field.id.clone()) {
                columns.push(Column::new(&field.id, &field.label).with_data_type(DataType::Number));
            }
        }
    }

    for node in nodes {
        for field in &node.metadata {
            if seen.insert(field.id.clone()) {
                let mut column = Column::new(&field.id, &field.label);
                column.data_type = match &field.data_type {
                    Some(data_type @ (DataType::Ip | DataType::Number | DataType::String)) => {
                        Some(data_type.clone())
                    }
                    _ => None,
                };
                columns.push(column);
            }
        }
    }

    for node in nodes {
        for parent in &node.parents {
            if seen.insert(parent.topology_id.clone()) {
                columns.push(Column::new(&parent.topology_id, &parent.topology_id));
            }
        }
    }

    columns
}

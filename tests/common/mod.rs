//! Shared builders for integration tests.

#![allow(dead_code)]

use topology_details::topology::{Column, DataType, Field, Node, Relative};

pub fn node_with_metric(id: &str, metric: &str, value: f64) -> Node {
    Node::new(id).with_metric(Field::new(metric, value))
}

pub fn node_with_ip(id: &str, ip: &str) -> Node {
    Node::new(id).with_metadata(Field::new("ip", ip))
}

pub fn ip_column() -> Column {
    Column::new("ip", "IP").with_data_type(DataType::Ip)
}

pub fn host(label: &str) -> Relative {
    Relative {
        topology_id: "hosts".to_owned(),
        id: format!("{label};<host>"),
        label: label.to_owned(),
    }
}

pub fn ids<'a>(nodes: &[&'a Node]) -> Vec<&'a str> {
    nodes
        .iter()
        .map(|node| node.id.as_deref().unwrap_or_default())
        .collect()
}

pub fn fixture_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

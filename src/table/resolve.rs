//! Column value lookup across a node's metrics, metadata, parents and
//! attributes.

use crate::topology::{Field, FieldValue, Node, Relative};

#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedValue<'a> {
    Metric(&'a Field),
    Metadata(&'a Field),
    Relative(&'a Relative),
    Attribute(FieldValue),
    Absent,
}

impl ResolvedValue<'_> {
    pub fn value(&self) -> Option<FieldValue> {
        match self {
            Self::Metric(field) | Self::Metadata(field) => Some(field.value.clone()),
            Self::Relative(relative) => Some(FieldValue::Text(relative.label.clone())),
            Self::Attribute(value) => Some(value.clone()),
            Self::Absent => None,
        }
    }
}

/// Looks a column up on a node. Fields win over parents, parents over
/// attributes, and a metric shadows a metadata field with the same id.
pub fn resolve<'a>(node: &'a Node, column_id: Option<&str>) -> ResolvedValue<'a> {
    let Some(column_id) = column_id else {
        return ResolvedValue::Absent;
    };

    if let Some(field) = node.metrics.iter().find(|field| field.id == column_id) {
        return ResolvedValue::Metric(field);
    }

    if let Some(field) = node.metadata.iter().find(|field| field.id == column_id) {
        return ResolvedValue::Metadata(field);
    }

    if let Some(relative) = node
        .parents
        .iter()
        .find(|relative| relative.topology_id == column_id)
    {
        return ResolvedValue::Relative(relative);
    }

    node.attribute(column_id)
        .map_or(ResolvedValue::Absent, ResolvedValue::Attribute)
}

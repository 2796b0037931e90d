use std::cmp::Ordering;

use crate::topology::{Column, DataType, FieldValue, Node};
use crate::util::{ip_to_padded_string, parse_float_prefix};

use super::resolve::{ResolvedValue, resolve};

/// Comparable form of a cell value. Numbers order before text.
#[derive(Clone, Debug, PartialEq)]
pub enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }

    fn from_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Number(number) => number_key(*number),
            FieldValue::Text(text) => Some(Self::Text(text.clone())),
        }
    }

    fn lowercased(self) -> Self {
        match self {
            Self::Text(text) => Self::Text(text.to_lowercase()),
            number => number,
        }
    }
}

pub fn compare_optional(a: Option<&SortKey>, b: Option<&SortKey>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.compare(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn number_key(number: f64) -> Option<SortKey> {
    // -0.0 and 0.0 are the same key
    (!number.is_nan()).then_some(SortKey::Number(number + 0.0))
}

/// Key for a field value under a data type hint. Numeric parse failures
/// yield no key.
pub fn field_key(value: &FieldValue, data_type: Option<&DataType>) -> Option<SortKey> {
    match data_type {
        Some(DataType::Ip) => Some(SortKey::Text(ip_to_padded_string(&value.to_string()))),
        Some(DataType::Number) => match value {
            FieldValue::Number(number) => number_key(*number),
            FieldValue::Text(text) => number_key(parse_float_prefix(text)),
        },
        _ => SortKey::from_value(value),
    }
}

pub fn sort_key(node: &Node, column: Option<&Column>) -> Option<SortKey> {
    let column_id = column.map(|column| column.id.as_str());
    let data_type = column.and_then(|column| column.data_type.as_ref());

    let resolved = resolve(node, column_id);
    let value = resolved.value()?;
    let key = match resolved {
        ResolvedValue::Metric(_) | ResolvedValue::Metadata(_) => field_key(&value, data_type),
        _ => SortKey::from_value(&value),
    };

    key.map(SortKey::lowercased)
}

pub fn build_key(column: Option<&Column>) -> impl Fn(&Node) -> Option<SortKey> + '_ {
    move |node| sort_key(node, column)
}

/// Column sorted by when no explicit choice was made: the `defaultSort`
/// column, else the first metric of the first node that has one, else the
/// label.
pub fn default_sorted_by(columns: &[Column], nodes: &[Node]) -> String {
    if let Some(column) = columns.iter().find(|column| column.default_sort) {
        return column.id.clone();
    }

    nodes
        .iter()
        .find_map(|node| node.metrics.first())
        .map(|field| field.id.clone())
        .unwrap_or_else(|| Column::LABEL_ID.to_owned())
}

/// Direction used when no explicit choice was made. Numeric columns, and
/// untyped columns that hold metrics, sort highest first.
pub fn default_sort_desc(column: Option<&Column>, nodes: &[Node]) -> bool {
    let Some(column) = column else {
        return false;
    };

    if let Some(sort_desc) = column.sort_desc {
        return sort_desc;
    }

    if column.is_number() {
        return true;
    }

    column.data_type.is_none() && nodes.iter().any(|node| node.has_metric(&column.id))
}

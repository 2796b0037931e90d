use std::cmp::Ordering;

use tracing::debug;

use crate::topology::{Column, Node};

use super::sort_key::{SortKey, compare_optional, field_key, sort_key};

struct Keyed<'a> {
    node: &'a Node,
    primary: Option<SortKey>,
    tiebreakers: Vec<Option<SortKey>>,
}

impl Keyed<'_> {
    fn compare(&self, other: &Self) -> Ordering {
        compare_optional(self.primary.as_ref(), other.primary.as_ref()).then_with(|| {
            self.tiebreakers
                .iter()
                .zip(&other.tiebreakers)
                .map(|(a, b)| compare_optional(a.as_ref(), b.as_ref()))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

/// Positional metadata keys. The first node of the collection decides how
/// many positions take part.
fn metadata_tiebreakers(node: &Node, positions: usize) -> Vec<Option<SortKey>> {
    (0..positions)
        .map(|index| {
            node.metadata
                .get(index)
                .and_then(|field| field_key(&field.value, field.data_type.as_ref()))
        })
        .collect()
}

/// Orders `nodes` by `column`, keeping nodes without a value for the column
/// after all nodes with one in both directions. Equal keys keep their input
/// order.
pub fn sort_nodes<'a>(nodes: &'a [Node], column: Option<&Column>, descending: bool) -> Vec<&'a Node> {
    let positions = nodes.first().map_or(0, |node| node.metadata.len());

    let (mut with_value, mut without_value): (Vec<_>, Vec<_>) = nodes
        .iter()
        .map(|node| Keyed {
            node,
            primary: sort_key(node, column),
            tiebreakers: metadata_tiebreakers(node, positions),
        })
        .partition(|keyed| keyed.primary.is_some());

    debug!(
        column = column.map(|column| column.id.as_str()),
        descending,
        with_value = with_value.len(),
        without_value = without_value.len(),
        "sorting node table"
    );

    for partition in [&mut with_value, &mut without_value] {
        if descending {
            partition.sort_by(|a, b| b.compare(a));
        } else {
            partition.sort_by(|a, b| a.compare(b));
        }
    }

    with_value
        .into_iter()
        .chain(without_value)
        .map(|keyed| keyed.node)
        .collect()
}

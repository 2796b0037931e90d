mod common;

use topology_details::table::{
    CellContent, Point, RowOptions, RowPointer, RowView, ViewState, build_table, sort_nodes,
};
use topology_details::topology::{Column, DataType, Field, Node};

use common::{host, ids, ip_column, node_with_ip, node_with_metric};

#[test]
fn ip_columns_order_by_address() {
    let nodes = vec![
        node_with_ip("a", "10.0.0.2"),
        node_with_ip("b", "10.0.0.10"),
        node_with_ip("c", "2.2.2.2"),
    ];
    let sorted = sort_nodes(&nodes, Some(&ip_column()), false);

    let values = sorted
        .iter()
        .map(|node| node.metadata[0].value.to_string())
        .collect::<Vec<_>>();
    assert_eq!(values, ["2.2.2.2", "10.0.0.2", "10.0.0.10"]);
}

#[test]
fn malformed_ips_still_sort_without_failing() {
    let nodes = vec![
        node_with_ip("good", "10.0.0.1"),
        node_with_ip("bad", "10.0.x"),
        Node::new("none"),
    ];
    let sorted = sort_nodes(&nodes, Some(&ip_column()), false);

    assert_eq!(ids(&sorted), ["good", "bad", "none"]);
}

#[test]
fn unparsable_numbers_trail_in_both_directions() {
    let column = Column::new("cpu", "CPU").with_data_type(DataType::Number);
    let nodes = vec![
        Node::new("broken").with_metric(Field::new("cpu", "not-a-number")),
        node_with_metric("low", "cpu", 1.0),
        node_with_metric("high", "cpu", 3.0),
    ];

    for descending in [false, true] {
        let sorted = sort_nodes(&nodes, Some(&column), descending);
        assert_eq!(ids(&sorted).last(), Some(&"broken"));
    }
}

#[test]
fn default_sort_column_beats_earlier_columns_and_metrics() {
    let columns = vec![
        Column::new("cpu", "CPU"),
        Column::new("mem", "Memory").with_default_sort(),
    ];
    let nodes = vec![
        node_with_metric("a", "cpu", 5.0).with_metric(Field::new("mem", 1.0)),
        node_with_metric("b", "cpu", 1.0).with_metric(Field::new("mem", 7.0)),
    ];
    let view = build_table(&nodes, &columns, "Name", &ViewState::default(), &RowOptions::default());

    assert_eq!(view.sorted_by, "mem");
    assert_eq!(view.rows[0].node_id(), Some("b"));
}

#[test]
fn show_more_toggles_between_limit_and_everything() {
    let nodes = (0..12)
        .map(|index| node_with_metric(&format!("n{index}"), "cpu", f64::from(index)))
        .collect::<Vec<_>>();
    let state = ViewState::new(10);

    let limited = build_table(&nodes, &[], "Name", &state, &RowOptions::default());
    assert_eq!(limited.rows.len(), 10);
    assert_eq!(limited.hidden_count, 2);
    assert!(!limited.is_expanded);

    let state = state.toggle_limit();
    let expanded = build_table(&nodes, &[], "Name", &state, &RowOptions::default());
    assert_eq!(expanded.rows.len(), 12);
    assert_eq!(expanded.hidden_count, 0);
    assert!(expanded.is_expanded);
}

#[test]
fn sort_clicks_resort_on_the_next_build() {
    let columns = vec![Column::new("hosts", "Host")];
    let nodes = vec![
        Node::new("x").with_parent(host("beta")),
        Node::new("y").with_parent(host("Alpha")),
        Node::new("z"),
    ];

    let state = ViewState::default().with_sort(Some("hosts".to_owned()), None);
    let view = build_table(&nodes, &columns, "Name", &state, &RowOptions::default());
    assert!(!view.sorted_desc);
    assert_eq!(
        view.rows.iter().map(|row| row.node_id()).collect::<Vec<_>>(),
        [Some("y"), Some("x"), Some("z")]
    );

    let hosts_header = view.headers[1].clone();
    let (state, change) = state.click_header(&hosts_header);
    assert!(change.sorted_desc);

    let view = build_table(&nodes, &columns, "Name", &state, &RowOptions::default());
    assert_eq!(
        view.rows.iter().map(|row| row.node_id()).collect::<Vec<_>>(),
        [Some("x"), Some("y"), Some("z")]
    );
    assert!(matches!(
        &view.rows[2],
        RowView::Node(row) if row.cells[0].content == CellContent::Empty
    ));
}

#[test]
fn drag_gestures_do_not_click_rows() {
    let dragged = RowPointer::default()
        .press(Point::new(100.0, 100.0))
        .release(Point::new(105.0, 100.0));
    assert!(!dragged.is_click());

    let clicked = RowPointer::default()
        .press(Point::new(100.0, 100.0))
        .release(Point::new(101.0, 100.0));
    assert!(clicked.is_click());
}

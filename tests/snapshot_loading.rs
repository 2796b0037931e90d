mod common;

use std::io::Write;

use topology_details::table::{CellContent, RowOptions, RowView, ViewState, build_table};
use topology_details::topology::{SnapshotError, load_snapshot};

use common::fixture_path;

#[test]
fn loads_fixture_snapshot() {
    let snapshot = load_snapshot(&fixture_path("containers.json")).expect("fixture loads");

    assert_eq!(snapshot.label, "Containers");
    assert_eq!(snapshot.topology_id.as_deref(), Some("containers"));
    assert_eq!(snapshot.node_count(), 4);
    assert_eq!(snapshot.columns.len(), 5);
}

#[test]
fn fixture_table_sorts_numeric_metrics_with_unknown_values_last() {
    let snapshot = load_snapshot(&fixture_path("containers.json")).expect("fixture loads");
    let state = ViewState::new(0).with_sort(Some("cpu".to_owned()), None);
    let view = build_table(
        &snapshot.nodes,
        &snapshot.columns,
        &snapshot.label,
        &state,
        &RowOptions::default(),
    );

    assert!(view.sorted_desc);
    let order = view
        .rows
        .iter()
        .map(|row| row.node_id().unwrap_or("<placeholder>"))
        .collect::<Vec<_>>();
    // descending also flips the ip tiebreaker, so the id-less node leads
    assert_eq!(order, ["c-db", "c-web", "<placeholder>", "c-cache"]);
    assert_eq!(view.rows[2], RowView::Placeholder);
}

#[test]
fn fixture_rows_carry_formatted_cells() {
    let snapshot = load_snapshot(&fixture_path("containers.json")).expect("fixture loads");
    let state = ViewState::new(0).with_sort(Some("ip".to_owned()), None);
    let view = build_table(
        &snapshot.nodes,
        &snapshot.columns,
        &snapshot.label,
        &state,
        &RowOptions::default(),
    );

    assert!(!view.sorted_desc);
    let RowView::Node(first) = &view.rows[0] else {
        panic!("expected a node row first");
    };
    assert_eq!(first.node_id, "c-cache");

    let RowView::Node(db) = &view.rows[1] else {
        panic!("expected a node row second");
    };
    assert_eq!(db.node_id, "c-db");
    assert_eq!(db.cells[0].text(), "40.00%");
    assert_eq!(db.cells[1].text(), "1.00 GiB");
    assert_eq!(db.cells[2].text(), "10.0.0.2");
    assert!(matches!(
        &db.cells[3].content,
        CellContent::Relative { link, .. } if link.node_id == "node-b;<host>"
    ));
    assert_eq!(db.cells[4].text(), "2024-04-01 08:30:00");
    assert_eq!(db.link.topology_id, None);
}

#[test]
fn loads_bare_arrays_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"[{{ "id": "a", "metrics": [{{ "id": "cpu", "label": "CPU", "value": 1 }}] }}]"#
    )
    .expect("write snapshot");

    let snapshot = load_snapshot(file.path()).expect("snapshot loads");
    assert_eq!(snapshot.node_count(), 1);
    assert_eq!(snapshot.columns[0].id, "cpu");
}

#[test]
fn invalid_json_is_reported() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{{ not json").expect("write snapshot");

    let error = load_snapshot(file.path()).expect_err("invalid json");
    assert!(matches!(error, SnapshotError::Json(_)));
}

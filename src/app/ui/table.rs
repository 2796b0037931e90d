use eframe::egui::{self, Rect, Response, RichText, Sense, Ui};
use tracing::debug;

use topology_details::table::{
    Cell, CellContent, Header, NodeLink, Point, RowView, build_table,
};

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_table(&mut self, ui: &mut Ui) {
        let nodes = self.filtered_nodes();
        let view = build_table(
            &nodes,
            &self.snapshot.columns,
            &self.label,
            &self.view_state,
            &self.row_options,
        );

        let mut clicked_header: Option<Header> = None;
        let mut clicked_row: Option<String> = None;
        let mut followed_link: Option<NodeLink> = None;

        egui::ScrollArea::both()
            .id_salt("node_details_table_scroll")
            .auto_shrink([false, false])
            .max_height(ui.available_height() - 28.0)
            .show(ui, |ui| {
                egui::Grid::new("node_details_table")
                    .striped(true)
                    .num_columns(view.headers.len())
                    .show(ui, |ui| {
                        for header in &view.headers {
                            let text = match header.sorted {
                                Some(true) => format!("{} ⏷", header.label),
                                Some(false) => format!("{} ⏶", header.label),
                                None => header.label.clone(),
                            };
                            if ui.button(RichText::new(text).strong()).clicked() {
                                clicked_header = Some(header.clone());
                            }
                        }
                        ui.end_row();

                        for row in &view.rows {
                            match row {
                                RowView::Node(row) => {
                                    let selected =
                                        self.selected.as_deref() == Some(row.node_id.as_str());
                                    let label = if selected {
                                        RichText::new(&row.label).strong().underline()
                                    } else {
                                        RichText::new(&row.label).strong()
                                    };
                                    let label_response = ui
                                        .add(egui::Label::new(label).truncate().sense(Sense::click()))
                                        .on_hover_text(row.link.node_id.as_str());

                                    let mut cell_rects = vec![label_response.rect];
                                    for cell in &row.cells {
                                        let (response, link) = draw_cell(ui, cell);
                                        cell_rects.push(response.rect);
                                        if link.is_some() {
                                            followed_link = link;
                                        }
                                    }

                                    if let Some(row_rect) = row_bounds(cell_rects) {
                                        if self.track_row_pointer(ui, row_rect, &row.node_id) {
                                            clicked_row = Some(row.node_id.clone());
                                        }
                                    }
                                }
                                RowView::Placeholder => {
                                    for _ in &view.headers {
                                        ui.label("");
                                    }
                                }
                            }
                            ui.end_row();
                        }
                    });
            });

        let toggle_text = if view.is_expanded {
            (view.total_rows > self.view_state.default_limit && self.view_state.default_limit > 0)
                .then(|| "Show less".to_owned())
        } else {
            view.is_limited()
                .then(|| format!("Show more ({} hidden)", view.hidden_count))
        };
        if let Some(text) = toggle_text {
            if ui.link(text).clicked() {
                self.view_state = std::mem::take(&mut self.view_state).toggle_limit();
            }
        }

        if let Some(header) = clicked_header {
            let (state, change) = std::mem::take(&mut self.view_state).click_header(&header);
            self.view_state = state;
            self.last_sort_change = Some(change);
        }

        if let Some(node_id) = clicked_row {
            debug!(node = %node_id, "node table row clicked");
            self.set_selected(Some(node_id));
        }

        if let Some(link) = followed_link {
            self.follow_link(&link);
        }
    }

    /// Feeds pointer presses and releases over a whole row into the row
    /// pointer state machine. Returns true when the release counts as a click.
    fn track_row_pointer(&mut self, ui: &Ui, row_rect: Rect, node_id: &str) -> bool {
        let (pressed, released, position) = ui.input(|input| {
            (
                input.pointer.primary_pressed(),
                input.pointer.primary_released(),
                input.pointer.interact_pos(),
            )
        });
        let Some(position) = position else {
            return false;
        };
        let point = Point::new(position.x, position.y);

        if pressed && row_rect.contains(position) {
            self.pointer = self.pointer.press(point);
            self.pressed_row = Some(node_id.to_owned());
        }

        if released && self.pressed_row.as_deref() == Some(node_id) {
            self.pointer = self.pointer.release(point);
            self.pressed_row = None;
            return self.pointer.is_click();
        }

        false
    }

    pub(in crate::app) fn follow_link(&mut self, link: &NodeLink) {
        if self.node_by_id(&link.node_id).is_some() {
            self.set_selected(Some(link.node_id.clone()));
        } else {
            debug!(
                topology = link.topology_id.as_deref(),
                node = %link.node_id,
                "link target is outside this snapshot"
            );
        }
    }
}

fn row_bounds(cell_rects: impl IntoIterator<Item = Rect>) -> Option<Rect> {
    cell_rects.into_iter().reduce(|bounds, rect| bounds.union(rect))
}

fn draw_cell(ui: &mut Ui, cell: &Cell) -> (Response, Option<NodeLink>) {
    match &cell.content {
        CellContent::Metadata(formatted) => {
            let response = ui
                .add(egui::Label::new(formatted.text.as_str()).truncate())
                .on_hover_text(formatted.title.as_str());
            (response, None)
        }
        CellContent::Relative { link, title } => {
            let response = ui.link(link.label.as_str()).on_hover_text(title.as_str());
            let followed = response.clicked().then(|| link.clone());
            (response, followed)
        }
        CellContent::Value { text, .. } => (ui.label(text.as_str()), None),
        CellContent::Empty => (ui.label(""), None),
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{Rect, pos2};

    use super::row_bounds;

    #[test]
    fn row_bounds_cover_cells_beyond_the_label() {
        let label = Rect::from_min_max(pos2(0.0, 10.0), pos2(80.0, 30.0));
        let cpu = Rect::from_min_max(pos2(90.0, 10.0), pos2(140.0, 30.0));
        let host = Rect::from_min_max(pos2(150.0, 12.0), pos2(260.0, 28.0));

        let bounds = row_bounds([label, cpu, host]).expect("row has cells");

        assert!(bounds.contains(pos2(120.0, 20.0)));
        assert!(bounds.contains(pos2(255.0, 15.0)));
        // gaps between cells belong to the row too
        assert!(bounds.contains(pos2(85.0, 20.0)));
        assert!(!bounds.contains(pos2(120.0, 35.0)));
    }

    #[test]
    fn rows_without_cells_have_no_bounds() {
        assert_eq!(row_bounds([]), None);
    }
}

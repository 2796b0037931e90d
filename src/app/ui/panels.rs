use std::path::Path;

use eframe::egui::{self, Align, Context, Layout};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use topology_details::topology::Node;

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn show(
        &mut self,
        ctx: &Context,
        snapshot_path: &Path,
        reload_requested: &mut bool,
        is_loading: bool,
    ) {
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("topology-details");
                    ui.separator();
                    ui.label(format!("snapshot: {}", snapshot_path.display()));
                    if let Some(topology_id) = &self.row_options.topology_id {
                        ui.label(format!("topology: {topology_id}"));
                    }
                    ui.label(format!("nodes: {}", self.snapshot.node_count()));
                    ui.label(format!("columns: {}", self.snapshot.columns.len()));
                    let reload_button =
                        ui.add_enabled(!is_loading, egui::Button::new("Reload snapshot"));
                    if reload_button.clicked() {
                        *reload_requested = true;
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if let Some(change) = &self.last_sort_change {
                            let direction = if change.sorted_desc {
                                "descending"
                            } else {
                                "ascending"
                            };
                            ui.label(format!("sorted by {} ({direction})", change.sorted_by));
                        }
                    });
                });
            });

        egui::SidePanel::right("details")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| self.draw_details(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Filter:");
                ui.text_edit_singleline(&mut self.search);
                if !self.search.is_empty() && ui.button("Clear").clicked() {
                    self.search.clear();
                }
            });
            ui.separator();
            self.draw_table(ui);
        });
    }

    pub(in crate::app) fn filtered_nodes(&self) -> Vec<Node> {
        let query = self.search.trim();
        if query.is_empty() {
            return self.snapshot.nodes.clone();
        }

        let matcher = SkimMatcherV2::default();
        self.snapshot
            .nodes
            .iter()
            .filter(|node| matcher.fuzzy_match(node.display_label(), query).is_some())
            .cloned()
            .collect()
    }

    pub(in crate::app) fn set_selected(&mut self, selected: Option<String>) {
        if self.selected == selected {
            return;
        }
        tracing::debug!(selected = ?selected, "node selection changed");
        self.selected = selected;
    }

    pub(in crate::app) fn node_by_id(&self, node_id: &str) -> Option<&Node> {
        self.snapshot
            .nodes
            .iter()
            .find(|node| node.id.as_deref() == Some(node_id))
    }
}

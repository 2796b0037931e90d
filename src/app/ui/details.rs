use eframe::egui::{self, RichText, Ui};

use topology_details::table::{NodeLink, format_data_type, format_metric};

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        ui.heading("Selection Details");
        ui.add_space(6.0);

        let Some(selected_id) = self.selected.clone() else {
            ui.label("Select a row from the table.");
            return;
        };

        let Some(node) = self.node_by_id(&selected_id) else {
            ui.label("Selected node is not part of the current snapshot.");
            return;
        };

        ui.label(RichText::new(node.display_label()).strong());
        ui.small(selected_id.as_str());
        ui.add_space(6.0);

        let metrics = node
            .metrics
            .iter()
            .map(|field| (field.label.clone(), format_metric(&field.value, field.format)))
            .collect::<Vec<_>>();
        let metadata = node
            .metadata
            .iter()
            .map(|field| {
                let formatted = format_data_type(field, self.row_options.reference_time);
                (field.label.clone(), formatted.text, formatted.title)
            })
            .collect::<Vec<_>>();
        let parents = node
            .parents
            .iter()
            .map(|relative| NodeLink {
                topology_id: Some(relative.topology_id.clone()),
                node_id: relative.id.clone(),
                label: relative.label.clone(),
            })
            .collect::<Vec<_>>();

        ui.separator();
        ui.label(RichText::new("Metrics").strong());
        if metrics.is_empty() {
            ui.label("No metrics.");
        }
        egui::Grid::new("details_metrics").num_columns(2).show(ui, |ui| {
            for (label, value) in &metrics {
                ui.label(label.as_str());
                ui.label(value.as_str());
                ui.end_row();
            }
        });

        ui.separator();
        ui.label(RichText::new("Info").strong());
        if metadata.is_empty() {
            ui.label("No metadata.");
        }
        egui::Grid::new("details_metadata").num_columns(2).show(ui, |ui| {
            for (label, text, title) in &metadata {
                ui.label(label.as_str());
                ui.add(egui::Label::new(text.as_str()).truncate())
                    .on_hover_text(title.as_str());
                ui.end_row();
            }
        });

        if parents.is_empty() {
            return;
        }

        ui.separator();
        ui.label(RichText::new("Relatives").strong());
        let mut followed = None;
        for link in &parents {
            ui.horizontal(|ui| {
                if let Some(topology_id) = &link.topology_id {
                    ui.label(format!("{topology_id}:"));
                }
                if ui.link(link.label.as_str()).clicked() {
                    followed = Some(link.clone());
                }
            });
        }

        if let Some(link) = followed {
            self.follow_link(&link);
        }
    }
}

use dayplan::search::{no_results_text, PlaceCatalog, SearchMode};
use dayplan::PlannerAction;
use egui::{RichText, TextEdit};

use crate::theme;

#[derive(Default)]
pub struct SearchBar {
    query: String,
}

impl SearchBar {
    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        catalog: &PlaceCatalog,
        mode: SearchMode,
        actions: &mut Vec<PlannerAction>,
    ) {
        ui.horizontal(|ui| {
            ui.label("🔍");
            ui.add(
                TextEdit::singleline(&mut self.query)
                    .hint_text(mode.placeholder())
                    .desired_width(ui.available_width() - 32.0),
            );
            if !self.query.is_empty() && ui.small_button("✖").clicked() {
                self.query.clear();
            }
        });

        if self.query.trim().is_empty() {
            return;
        }

        let results = catalog.search(&self.query);
        if results.is_empty() {
            ui.label(RichText::new(no_results_text(&self.query)).weak());
            return;
        }

        let mut chosen = None;
        egui::ScrollArea::vertical()
            .id_salt("search-results")
            .max_height(180.0)
            .show(ui, |ui| {
                for place in results {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(place.name).strong());
                            ui.label(
                                RichText::new(format!("{} · {}", place.kind, place.address))
                                    .small()
                                    .weak(),
                            );
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let button = egui::Button::new(
                                RichText::new(mode.action_label()).color(egui::Color32::WHITE),
                            )
                            .fill(theme::ACCENT);
                            if ui.add(button).clicked() {
                                chosen = Some(place.id);
                            }
                        });
                    });
                    ui.separator();
                }
            });

        if let Some(id) = chosen {
            actions.push(PlannerAction::ChoosePlace(id));
            self.query.clear();
        }
    }
}

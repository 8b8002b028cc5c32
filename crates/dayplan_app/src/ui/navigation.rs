use dayplan::navigation::{NavigationTarget, TransportMode};
use dayplan::PlannerAction;
use egui::{Color32, CornerRadius, Frame, Margin, RichText};

use crate::theme;

#[profiling::function]
pub fn navigation_ui(
    ui: &mut egui::Ui,
    target: &NavigationTarget,
    actions: &mut Vec<PlannerAction>,
) {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("🧭").size(22.0));
        ui.vertical(|ui| {
            ui.label(RichText::new(&target.destination.name).heading().strong());
            if let Some(address) = &target.destination.address {
                ui.label(RichText::new(address).small().weak());
            }
        });
    });

    let from = target
        .origin
        .as_ref()
        .map(|e| e.title.as_str())
        .unwrap_or("Current location");
    ui.label(RichText::new(format!("From: {from}")).weak());
    ui.separator();

    ui.horizontal(|ui| {
        for mode in TransportMode::ALL {
            let text = format!("{} {}", mode.icon(), mode.label());
            if ui.selectable_label(target.mode == mode, text).clicked() && target.mode != mode {
                actions.push(PlannerAction::SetTransportMode(mode));
            }
        }
    });

    let estimate = target.estimate();
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(estimate.duration_text())
                .size(28.0)
                .strong()
                .color(theme::ACCENT),
        );
        ui.label(RichText::new(estimate.distance_text()).size(18.0).weak());
        if let Some(arrival) = target.arrival_text() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(arrival).strong());
            });
        }
    });

    if let Some(hint) = &target.travel_hint {
        ui.label(
            RichText::new(format!("Planned: {} {}", hint.method.icon(), hint.summary()))
                .small()
                .weak(),
        );
    }

    ui.add_space(8.0);
    next_turn_ui(ui);

    ui.add_space(10.0);
    let end = egui::Button::new(RichText::new("End navigation").color(Color32::WHITE))
        .fill(theme::DESTRUCTIVE);
    if ui.add(end).clicked() {
        actions.push(PlannerAction::EndNavigation);
    }
}

/// Turn-by-turn is simulated, so the card always shows the same step.
fn next_turn_ui(ui: &mut egui::Ui) {
    Frame::new()
        .fill(theme::PRIMARY)
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("⬆").size(22.0).color(Color32::WHITE));
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new("Continue on 5th Avenue")
                            .strong()
                            .color(Color32::WHITE),
                    );
                    ui.label(
                        RichText::new("Then turn right on 42nd St")
                            .small()
                            .color(Color32::WHITE.gamma_multiply(0.8)),
                    );
                });
            });
        });
}

use dayplan::account::{AccountProfile, MenuItem, MenuVariant, MENU_ITEMS};
use dayplan::PlannerAction;
use egui::{Align2, RichText, Sense};

use crate::theme;

pub fn account_ui(ctx: &egui::Context, profile: &AccountProfile, actions: &mut Vec<PlannerAction>) {
    egui::Window::new("Account")
        .id(egui::Id::new("dayplan-account"))
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::RIGHT_TOP, egui::vec2(-8.0, 56.0))
        .default_width(280.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("👤").size(28.0));
                ui.vertical(|ui| {
                    ui.label(RichText::new(&profile.display_name).strong());
                    ui.label(RichText::new(&profile.email).small().weak());
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    if ui.small_button("✖").clicked() {
                        actions.push(PlannerAction::CloseAccount);
                    }
                });
            });
            ui.separator();

            for item in MENU_ITEMS {
                if item_ui(ui, item).clicked() {
                    actions.push(PlannerAction::AccountItem(item.label));
                }
                if item.divider_after {
                    ui.separator();
                }
            }
        });
}

fn item_ui(ui: &mut egui::Ui, item: &MenuItem) -> egui::Response {
    let color = match item.variant {
        MenuVariant::Destructive => theme::DESTRUCTIVE,
        MenuVariant::Default => ui.visuals().text_color(),
    };

    let inner = ui.horizontal(|ui| {
        ui.label(RichText::new(item.icon).size(18.0).color(color));
        ui.vertical(|ui| {
            ui.label(RichText::new(item.label).color(color));
            ui.label(RichText::new(item.description).small().weak());
        });
    });

    let response = ui.interact(
        inner.response.rect,
        ui.make_persistent_id(("account-item", item.label)),
        Sense::click(),
    );
    if response.hovered() {
        ui.painter().rect_filled(
            inner.response.rect,
            egui::CornerRadius::same(6),
            ui.visuals().selection.bg_fill.gamma_multiply(0.1),
        );
    }
    response
}

mod account;
mod chat;
mod detail;
mod map;
mod navigation;
mod search;
mod sheet;

pub use account::account_ui;
pub use chat::chat_ui;
pub use detail::{detail_ui, DetailState};
pub use map::map_ui;
pub use navigation::navigation_ui;
pub use search::SearchBar;
pub use sheet::{sheet_ui, SheetState};

use dayplan::toast::Toasts;
use dayplan::{Category, Planner, PlannerAction};
use egui::{Align2, Color32, CornerRadius, FontId, Frame, Margin, RichText, Sense, Vec2};

use crate::theme;

/// Numbered category-coloured disc, as on the map.
pub(crate) fn number_badge(ui: &mut egui::Ui, number: usize, category: Category, size: f32) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.circle_filled(rect.center(), size / 2.0, theme::category_color(category));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        number.to_string(),
        FontId::proportional(size * 0.5),
        Color32::WHITE,
    );
}

pub(crate) fn suggested_badge(ui: &mut egui::Ui) {
    Frame::new()
        .fill(theme::SUGGESTED.gamma_multiply(0.18))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new("✨ Suggested").small().color(theme::SUGGESTED));
        });
}

pub fn header_ui(
    ui: &mut egui::Ui,
    planner: &Planner,
    search: &mut SearchBar,
    actions: &mut Vec<PlannerAction>,
) {
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Day Planner")
                .heading()
                .strong()
                .color(theme::PRIMARY),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("👤").on_hover_text("Account").clicked() {
                actions.push(PlannerAction::OpenAccount);
            }
            if ui.button("💬").on_hover_text("Plan with chat").clicked() {
                actions.push(PlannerAction::ToggleChat);
            }
        });
    });

    search.ui(ui, planner.catalog(), planner.search_mode(), actions);
    ui.add_space(4.0);
}

pub fn toast_ui(ctx: &egui::Context, toasts: &Toasts) {
    let Some(toast) = toasts.latest() else {
        return;
    };

    egui::Area::new(egui::Id::new("dayplan-toast"))
        .anchor(Align2::CENTER_TOP, egui::vec2(0.0, 72.0))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            Frame::new()
                .fill(theme::PRIMARY)
                .corner_radius(CornerRadius::same(10))
                .inner_margin(Margin::symmetric(14, 8))
                .show(ui, |ui| {
                    ui.label(RichText::new(&toast.message).color(Color32::WHITE));
                });
        });
}

pub fn debug_ui(ctx: &egui::Context, planner: &Planner) {
    egui::Window::new("Debug")
        .default_open(false)
        .anchor(Align2::RIGHT_TOP, egui::vec2(-8.0, 80.0))
        .show(ctx, |ui| {
            let selection = planner.selection();
            ui.label(format!("date: {}", selection.date()));
            ui.label(format!("overlay: {}", selection.overlay().name()));
            ui.label(format!("revision: {}", planner.store().revision()));
            ui.label(format!("toasts: {}", planner.toasts().len()));
            ui.label(format!("chat typing: {}", planner.chat().is_typing()));
        });
}

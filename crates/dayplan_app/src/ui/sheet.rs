use chrono::NaiveDate;
use dayplan::list::{day_items, ListItem};
use dayplan::seed::{day_of_month, relative_day_label};
use dayplan::{DayItinerary, Event, Planner, PlannerAction, TravelSegment};
use egui::{vec2, Color32, CornerRadius, Frame, Margin, RichText, Sense};

use crate::theme;
use crate::ui::{number_badge, suggested_badge};

/// Vertical drag on the handle, accumulated until it is released.
#[derive(Default)]
pub struct SheetState {
    drag_offset: f32,
}

#[profiling::function]
pub fn sheet_ui(
    ui: &mut egui::Ui,
    planner: &Planner,
    today: NaiveDate,
    state: &mut SheetState,
    actions: &mut Vec<PlannerAction>,
) {
    drag_handle_ui(ui, state, actions);
    date_chips_ui(ui, planner, today, actions);
    ui.separator();

    let Some(day) = planner.current_day() else {
        ui.label("No itinerary loaded.");
        return;
    };

    ui.horizontal(|ui| {
        ui.label(RichText::new(&day.label).strong());
        ui.label(RichText::new(day.event_count_text()).weak());
    });

    egui::ScrollArea::vertical()
        .id_salt(("itinerary-list", day.date))
        .auto_shrink([false, false])
        .show(ui, |ui| event_list_ui(ui, day, actions));
}

fn drag_handle_ui(ui: &mut egui::Ui, state: &mut SheetState, actions: &mut Vec<PlannerAction>) {
    let (rect, response) =
        ui.allocate_exact_size(vec2(ui.available_width(), 18.0), Sense::click_and_drag());
    let bar = egui::Rect::from_center_size(rect.center(), vec2(40.0, 5.0));
    ui.painter()
        .rect_filled(bar, CornerRadius::same(3), ui.visuals().weak_text_color());

    if response.dragged() {
        state.drag_offset += response.drag_delta().y;
    }

    if response.drag_stopped() {
        actions.push(PlannerAction::DragSheet(state.drag_offset));
        state.drag_offset = 0.0;
    } else if response.clicked() {
        actions.push(PlannerAction::ToggleSheet);
    }
}

fn date_chips_ui(
    ui: &mut egui::Ui,
    planner: &Planner,
    today: NaiveDate,
    actions: &mut Vec<PlannerAction>,
) {
    let selected = planner.selection().date();

    egui::ScrollArea::horizontal()
        .id_salt("date-chips")
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for day in planner.store().days() {
                    let is_selected = day.date == selected;
                    let text = RichText::new(format!(
                        "{}\n{}",
                        relative_day_label(day.date, today),
                        day_of_month(day.date)
                    ));
                    let text = if is_selected {
                        text.strong().color(Color32::WHITE)
                    } else {
                        text
                    };

                    let mut button = egui::Button::new(text).min_size(vec2(64.0, 44.0));
                    if is_selected {
                        button = button.fill(theme::PRIMARY);
                    }

                    if ui.add(button).clicked() && !is_selected {
                        actions.push(PlannerAction::SelectDate(day.date));
                    }
                }
            });
        });
}

fn event_list_ui(ui: &mut egui::Ui, day: &DayItinerary, actions: &mut Vec<PlannerAction>) {
    let items = day_items(day);
    if items.is_empty() {
        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Nothing planned for this day.").weak());
        });
        return;
    }

    for item in items {
        match item {
            ListItem::Event { event, .. } => {
                if event_row_ui(ui, event).clicked() {
                    actions.push(PlannerAction::SelectEvent(event.id.clone()));
                }
            }
            ListItem::Travel(segment) => travel_row_ui(ui, segment),
        }
    }
}

fn event_row_ui(ui: &mut egui::Ui, event: &Event) -> egui::Response {
    let inner = Frame::new()
        .fill(ui.visuals().extreme_bg_color)
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                number_badge(ui, event.number, event.category, 28.0);
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&event.title).strong());
                        if event.origin.is_suggested() {
                            suggested_badge(ui);
                        }
                    });
                    ui.label(RichText::new(event.time_range()).small());
                    ui.label(
                        RichText::new(format!("📍 {}", event.location))
                            .small()
                            .weak(),
                    );
                });
            });
        });

    ui.interact(
        inner.response.rect,
        ui.make_persistent_id(("event-row", event.id.as_str())),
        Sense::click(),
    )
}

fn travel_row_ui(ui: &mut egui::Ui, segment: &TravelSegment) {
    ui.horizontal(|ui| {
        ui.add_space(20.0);
        ui.label(
            RichText::new(format!("{} {}", segment.method.icon(), segment.summary()))
                .small()
                .weak(),
        );
    });
}

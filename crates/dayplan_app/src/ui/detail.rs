use dayplan::form::EventForm;
use dayplan::{Category, Event, EventId, Planner, PlannerAction};
use egui::{Color32, RichText, TextEdit};

use crate::theme;
use crate::ui::{number_badge, suggested_badge};

/// The edit form, while one is open.
#[derive(Default)]
pub struct DetailState {
    editing: Option<(EventId, EventForm)>,
}

impl DetailState {
    /// Drops the form once its event is no longer the one on screen.
    pub fn sync(&mut self, selected: Option<&Event>) {
        let stale = match (&self.editing, selected) {
            (Some((id, _)), Some(event)) => *id != event.id,
            (Some(_), None) => true,
            (None, _) => false,
        };

        if stale {
            self.editing = None;
        }
    }
}

#[profiling::function]
pub fn detail_ui(
    ui: &mut egui::Ui,
    planner: &Planner,
    event: &Event,
    state: &mut DetailState,
    actions: &mut Vec<PlannerAction>,
) {
    state.sync(Some(event));

    let mut start_edit = false;
    let mut close_edit = false;
    egui::ScrollArea::vertical()
        .id_salt("event-detail")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if let Some((_, form)) = &mut state.editing {
                close_edit = edit_form_ui(ui, event, form, actions);
            } else {
                start_edit = view_ui(ui, planner, event, actions);
            }
        });

    if close_edit {
        state.editing = None;
    } else if start_edit {
        state.editing = Some((event.id.clone(), EventForm::for_edit(event)));
    }
}

/// Returns true when the user asked to edit.
fn view_ui(
    ui: &mut egui::Ui,
    planner: &Planner,
    event: &Event,
    actions: &mut Vec<PlannerAction>,
) -> bool {
    let mut edit = false;

    ui.horizontal(|ui| {
        number_badge(ui, event.number, event.category, 32.0);
        ui.heading(RichText::new(&event.title).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("✖").clicked() {
                actions.push(PlannerAction::CloseDetail);
            }
        });
    });

    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!("{} {}", event.category.icon(), event.category.as_str()))
                .color(theme::category_color(event.category)),
        );
        if event.origin.is_suggested() {
            suggested_badge(ui);
        }
    });
    ui.separator();

    ui.label(format!("🕒 {} ({})", event.time_range(), event.duration));
    ui.label(format!("📍 {}", event.location));

    if let Some(segment) = planner.travel_to_selected() {
        ui.label(
            RichText::new(format!(
                "{} From previous stop: {}",
                segment.method.icon(),
                segment.summary()
            ))
            .weak(),
        );
    }

    if let Some(description) = &event.description {
        ui.add_space(6.0);
        ui.label(description);
    }

    if !event.attendees().is_empty() {
        ui.add_space(6.0);
        ui.label(RichText::new("Attendees").strong());
        for attendee in event.attendees() {
            ui.label(format!("• {attendee}"));
        }
    }

    if !event.reminders().is_empty() {
        ui.add_space(6.0);
        ui.label(RichText::new("Reminders").strong());
        for reminder in event.reminders() {
            ui.label(format!("🔔 {reminder}"));
        }
    }

    if let Some(notes) = &event.notes {
        ui.add_space(6.0);
        ui.label(RichText::new("Notes").strong());
        ui.label(notes);
    }

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        let navigate = egui::Button::new(RichText::new("🧭 Navigate").color(Color32::WHITE))
            .fill(theme::ACCENT);
        if ui.add(navigate).clicked() {
            actions.push(PlannerAction::NavigateToSelected);
        }
        if ui.button("✏ Edit").clicked() {
            edit = true;
        }
    });

    edit
}

/// Returns true when the form should close.
fn edit_form_ui(
    ui: &mut egui::Ui,
    original: &Event,
    form: &mut EventForm,
    actions: &mut Vec<PlannerAction>,
) -> bool {
    ui.heading("Edit event");
    ui.separator();

    egui::Grid::new("event-edit-grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            text_row(ui, "Title", &mut form.title);
            text_row(ui, "Start", &mut form.start_time);
            text_row(ui, "End", &mut form.end_time);
            text_row(ui, "Duration", &mut form.duration);
            text_row(ui, "Location", &mut form.location);

            ui.label("Category");
            egui::ComboBox::from_id_salt("event-edit-category")
                .selected_text(form.category.as_str())
                .show_ui(ui, |ui| {
                    for category in Category::ALL {
                        ui.selectable_value(&mut form.category, category, category.as_str());
                    }
                });
            ui.end_row();

            text_row(ui, "Attendees", &mut form.attendees);
            text_row(ui, "Reminders", &mut form.reminders);
        });

    ui.label("Description");
    ui.add(TextEdit::multiline(&mut form.description).desired_rows(2));
    ui.label("Notes");
    ui.add(TextEdit::multiline(&mut form.notes).desired_rows(2));

    if !form.is_valid() {
        ui.colored_label(ui.visuals().error_fg_color, "A title is required.");
    }

    let mut close = false;
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let save = egui::Button::new(RichText::new("Save").color(Color32::WHITE))
            .fill(theme::ACCENT);
        if ui.add_enabled(form.is_valid(), save).clicked() {
            actions.push(PlannerAction::SaveEvent(form.apply(original)));
            close = true;
        }
        if ui.button("Cancel").clicked() {
            close = true;
        }
    });

    close
}

fn text_row(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(TextEdit::singleline(value).desired_width(f32::INFINITY));
    ui.end_row();
}

#[cfg(test)]
mod tests {
    use super::*;
    use dayplan::{Coordinate, EventOrigin};

    fn event(id: &str) -> Event {
        Event {
            id: EventId::new(id),
            number: 1,
            title: "Coffee".to_string(),
            start_time: "10:30 AM".to_string(),
            end_time: "11:15 AM".to_string(),
            duration: "45 min".to_string(),
            location: "Blue Bottle".to_string(),
            coordinate: Coordinate::new(40.7536, -73.9832),
            origin: EventOrigin::UserAuthored,
            description: None,
            attendees: None,
            reminders: None,
            notes: None,
            category: Category::Social,
        }
    }

    #[test]
    fn form_is_dropped_when_selection_changes() {
        let a = event("a");
        let mut state = DetailState {
            editing: Some((a.id.clone(), EventForm::for_edit(&a))),
        };

        state.sync(Some(&a));
        assert!(state.editing.is_some());

        state.sync(Some(&event("b")));
        assert!(state.editing.is_none());

        state.editing = Some((a.id.clone(), EventForm::for_edit(&a)));
        state.sync(None);
        assert!(state.editing.is_none());
    }
}

use std::time::Instant;

use dayplan::chat::{ChatMessage, ChatPanel, Role};
use dayplan::PlannerAction;
use egui::{Align, Align2, Color32, CornerRadius, Frame, Key, Layout, Margin, RichText, TextEdit};

use crate::theme;

#[profiling::function]
pub fn chat_ui(
    ctx: &egui::Context,
    chat: &mut ChatPanel,
    now: Instant,
    actions: &mut Vec<PlannerAction>,
) {
    let mut open = true;

    egui::Window::new("Plan with chat")
        .id(egui::Id::new("dayplan-chat"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
        .default_width(360.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("chat-messages")
                .max_height(360.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for message in chat.messages() {
                        message_ui(ui, message);
                    }
                    if chat.is_typing() {
                        ui.label(RichText::new("Typing…").italics().weak());
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                let response = ui.add(
                    TextEdit::singleline(&mut chat.input)
                        .hint_text("Ask me to plan something...")
                        .desired_width(ui.available_width() - 60.0),
                );
                let enter = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

                let send = ui.add_enabled(chat.can_send(), egui::Button::new("Send"));
                if (send.clicked() || enter) && chat.can_send() {
                    actions.push(PlannerAction::SendChat);
                    response.request_focus();
                }
            });
        });

    if !open {
        actions.push(PlannerAction::CloseChat);
    }

    if let Some(due) = chat.next_due() {
        ctx.request_repaint_after(due.saturating_duration_since(now));
    }
}

fn message_ui(ui: &mut egui::Ui, message: &ChatMessage) {
    let (layout, fill, text_color) = match message.role {
        Role::User => (
            Layout::right_to_left(Align::TOP),
            theme::ACCENT,
            Color32::WHITE,
        ),
        Role::Agent => (
            Layout::left_to_right(Align::TOP),
            ui.visuals().extreme_bg_color,
            ui.visuals().text_color(),
        ),
    };

    ui.with_layout(layout, |ui| {
        Frame::new()
            .fill(fill)
            .corner_radius(CornerRadius::same(12))
            .inner_margin(Margin::symmetric(10, 6))
            .show(ui, |ui| {
                ui.set_max_width(260.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(&message.content).color(text_color));
                    if let Some(suggestion) = &message.suggestion {
                        ui.add_space(4.0);
                        ui.label(RichText::new(&suggestion.title).strong().color(theme::PRIMARY));
                        for item in &suggestion.items {
                            ui.label(RichText::new(format!("• {item}")).small());
                        }
                    }
                });
            });
    });
    ui.add_space(4.0);
}

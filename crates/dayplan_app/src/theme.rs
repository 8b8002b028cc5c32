use dayplan::Category;
use egui::{style::Interaction, Color32, CornerRadius, Stroke, Style, Visuals};

/// Warm coral used for the route, the user marker and primary buttons.
pub const ACCENT: Color32 = Color32::from_rgb(234, 96, 62);
/// Deep navy for headings and the header bar.
pub const PRIMARY: Color32 = Color32::from_rgb(22, 45, 90);
/// Badge fill for system-suggested events.
pub const SUGGESTED: Color32 = Color32::from_rgb(124, 92, 214);
pub const DESTRUCTIVE: Color32 = Color32::from_rgb(0xC7, 0x37, 0x5A);
const WARNING: Color32 = Color32::from_rgb(0xE8, 0xA3, 0x3D);

/// Surfaces and ink for one theme. Widget geometry comes from the egui base.
struct Palette {
    /// Header and sheet background.
    paper: Color32,
    /// Event rows, text fields, chat bubbles.
    card: Color32,
    /// Floating windows (chat, account).
    raised: Color32,
    ink: Color32,
    muted: Color32,
    hairline: Color32,
    map: Color32,
}

/// Warm paper with navy ink.
const DAY: Palette = Palette {
    paper: Color32::from_rgb(0xFB, 0xF8, 0xF3),
    card: Color32::from_rgb(0xF1, 0xEC, 0xE3),
    raised: Color32::WHITE,
    ink: Color32::from_rgb(0x1C, 0x24, 0x36),
    muted: Color32::from_rgb(0x6E, 0x6A, 0x63),
    hairline: Color32::from_rgb(0xDD, 0xD5, 0xC8),
    map: Color32::from_rgb(0xE8, 0xEC, 0xE4),
};

/// Blue-black night surfaces with pale ink.
const NIGHT: Palette = Palette {
    paper: Color32::from_rgb(0x13, 0x19, 0x26),
    card: Color32::from_rgb(0x1C, 0x24, 0x35),
    raised: Color32::from_rgb(0x22, 0x2B, 0x3E),
    ink: Color32::from_rgb(0xE8, 0xEB, 0xF2),
    muted: Color32::from_rgb(0x92, 0x9A, 0xAD),
    hairline: Color32::from_rgb(0x2E, 0x39, 0x4F),
    map: Color32::from_rgb(0x1E, 0x27, 0x33),
};

const WIDGET_RADIUS: CornerRadius = CornerRadius::same(8);

pub fn category_color(category: Category) -> Color32 {
    let [r, g, b] = category.rgb();
    Color32::from_rgb(r, g, b)
}

pub fn map_background(dark: bool) -> Color32 {
    if dark {
        NIGHT.map
    } else {
        DAY.map
    }
}

fn planner_visuals(palette: &Palette, mut visuals: Visuals) -> Visuals {
    visuals.override_text_color = Some(palette.ink);
    visuals.panel_fill = palette.paper;
    visuals.extreme_bg_color = palette.card;
    visuals.faint_bg_color = palette.card;
    visuals.window_fill = palette.raised;
    visuals.window_stroke = Stroke::new(1.0, palette.hairline);
    visuals.window_corner_radius = CornerRadius::same(14);
    visuals.hyperlink_color = ACCENT;
    visuals.error_fg_color = DESTRUCTIVE;
    visuals.warn_fg_color = WARNING;
    visuals.selection.bg_fill = ACCENT;
    visuals.selection.stroke = Stroke::new(1.0, Color32::WHITE);

    let widgets = &mut visuals.widgets;
    widgets.noninteractive.bg_fill = palette.paper;
    widgets.noninteractive.weak_bg_fill = palette.card;
    widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette.hairline);
    widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.muted);
    widgets.inactive.bg_fill = palette.card;
    widgets.inactive.weak_bg_fill = palette.card;
    widgets.inactive.bg_stroke = Stroke::NONE;
    widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT.gamma_multiply(0.6));

    for state in [
        &mut widgets.noninteractive,
        &mut widgets.inactive,
        &mut widgets.hovered,
        &mut widgets.active,
        &mut widgets.open,
    ] {
        state.corner_radius = WIDGET_RADIUS;
    }

    visuals
}

pub fn light_mode() -> Visuals {
    planner_visuals(&DAY, Visuals::light())
}

pub fn dark_mode() -> Visuals {
    planner_visuals(&NIGHT, Visuals::dark())
}

pub fn add_custom_style(is_mobile: bool, style: &mut Style) {
    style.interaction = Interaction {
        tooltip_delay: 0.1,
        show_tooltips_only_when_still: false,
        ..Interaction::default()
    };

    // bigger hit targets on a phone-sized window
    if is_mobile {
        style.spacing.interact_size.y = 32.0;
        style.spacing.button_padding = egui::vec2(10.0, 6.0);
    }
}

use std::path::{Path, PathBuf};

use eframe::NativeOptions;

use crate::theme;

/// Phone-sized window, points.
pub const MOBILE_WINDOW_SIZE: [f32; 2] = [405.0, 915.0];
const DESKTOP_WINDOW_SIZE: [f32; 2] = [1100.0, 780.0];

#[derive(Debug, Clone)]
pub struct DataPath {
    base: PathBuf,
}

pub enum DataPathType {
    Log,
}

impl DataPath {
    pub fn new(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref().to_path_buf();
        Self { base }
    }

    pub fn default_base() -> Option<PathBuf> {
        dirs::data_local_dir().map(|pb| pb.join("dayplan"))
    }

    pub fn default_base_or_cwd() -> PathBuf {
        Self::default_base().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn rel_path(&self, typ: DataPathType) -> PathBuf {
        match typ {
            DataPathType::Log => PathBuf::from("logs"),
        }
    }

    pub fn path(&self, typ: DataPathType) -> PathBuf {
        self.base.join(self.rel_path(typ))
    }
}

impl Default for DataPath {
    fn default() -> Self {
        Self::new(Self::default_base_or_cwd())
    }
}

pub fn generate_native_options(is_mobile: bool) -> NativeOptions {
    let size = if is_mobile {
        MOBILE_WINDOW_SIZE
    } else {
        DESKTOP_WINDOW_SIZE
    };

    NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Day Planner")
            .with_inner_size(size)
            .with_min_inner_size([360.0, 560.0]),
        ..Default::default()
    }
}

/// Visuals and style for both themes, then picks one.
pub fn setup_cc(ctx: &egui::Context, is_mobile: bool, light: bool) {
    ctx.set_visuals_of(egui::Theme::Dark, theme::dark_mode());
    ctx.set_visuals_of(egui::Theme::Light, theme::light_mode());
    ctx.set_theme(if light {
        egui::Theme::Light
    } else {
        egui::Theme::Dark
    });

    ctx.all_styles_mut(|style| theme::add_custom_style(is_mobile, style));
}

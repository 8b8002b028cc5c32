use std::path::Path;
use std::time::Instant;

use chrono::{Local, NaiveDate};
use dayplan::account::AccountProfile;
use dayplan::chat::ScriptedProvider;
use dayplan::search::SearchMode;
use dayplan::seed::sample_itineraries;
use dayplan::{ItineraryStore, Overlay, Planner, PlannerAction};
use tracing::{error, info};

use crate::args::Args;
use crate::ui::{self, DetailState, SearchBar, SheetState};

pub struct DayPlanApp {
    planner: Planner,
    profile: AccountProfile,
    today: NaiveDate,
    search: SearchBar,
    detail: DetailState,
    sheet: SheetState,
    debug: bool,
}

/// Loads the plan from `path`, or the built-in sample plan when there is no
/// path or the file cannot be read.
pub fn load_store(path: Option<&Path>, today: NaiveDate) -> ItineraryStore {
    let Some(path) = path else {
        return ItineraryStore::new(sample_itineraries(today));
    };

    match ItineraryStore::from_json_file(path) {
        Ok(store) => store,
        Err(err) => {
            error!("failed to load {}: {err}, using sample plan", path.display());
            ItineraryStore::new(sample_itineraries(today))
        }
    }
}

impl DayPlanApp {
    pub fn new(args: &Args) -> Self {
        let today = Local::now().date_naive();
        let store = load_store(args.itinerary.as_deref().map(Path::new), today);
        info!("loaded {} day(s)", store.days().len());

        let search_mode = if args.search_adds() {
            SearchMode::AddToItinerary
        } else {
            SearchMode::Navigate
        };

        let mut planner = Planner::new(store, args.date).with_search_mode(search_mode);
        if let Some(delay) = args.chat_delay {
            planner = planner.with_provider(Box::new(ScriptedProvider::new(delay)));
        }

        let mut profile = AccountProfile::default();
        if let Some(email) = &args.email {
            profile.email = email.clone();
        }

        Self {
            planner,
            profile,
            today,
            search: SearchBar::default(),
            detail: DetailState::default(),
            sheet: SheetState::default(),
            debug: args.is_debug(),
        }
    }

    pub fn planner(&self) -> &Planner {
        &self.planner
    }

    pub fn planner_mut(&mut self) -> &mut Planner {
        &mut self.planner
    }

    #[profiling::function]
    pub fn render(&mut self, ctx: &egui::Context, now: Instant) {
        if let Some(wake) = self.planner.tick(now) {
            ctx.request_repaint_after(wake.saturating_duration_since(now));
        }

        let mut actions: Vec<PlannerAction> = Vec::new();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui::header_ui(ui, &self.planner, &mut self.search, &mut actions);
        });

        let sheet_height = if self.planner.selection().sheet_expanded() {
            ctx.screen_rect().height() * 0.62
        } else {
            260.0
        };

        egui::TopBottomPanel::bottom("sheet")
            .resizable(false)
            .exact_height(sheet_height)
            .show(ctx, |ui| match self.planner.selection().overlay() {
                Overlay::Detail(event) => {
                    ui::detail_ui(ui, &self.planner, event, &mut self.detail, &mut actions);
                }
                Overlay::Navigating(target) => ui::navigation_ui(ui, target, &mut actions),
                Overlay::Idle | Overlay::Chat | Overlay::Account => {
                    ui::sheet_ui(ui, &self.planner, self.today, &mut self.sheet, &mut actions);
                }
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| ui::map_ui(ui, &self.planner, &mut actions));

        if *self.planner.selection().overlay() == Overlay::Chat {
            ui::chat_ui(ctx, self.planner.chat_mut(), now, &mut actions);
        } else if *self.planner.selection().overlay() == Overlay::Account {
            ui::account_ui(ctx, &self.profile, &mut actions);
        }

        ui::toast_ui(ctx, self.planner.toasts());

        if self.debug {
            ui::debug_ui(ctx, &self.planner);
        }

        if !actions.is_empty() {
            self.planner.process_all(actions, now);
            self.detail.sync(self.planner.selection().selected_event());
            ctx.request_repaint();
        }
    }
}

impl eframe::App for DayPlanApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render(ctx, Instant::now());
    }
}

//! The planner: one owned root for everything the views read.
//!
//! Views never mutate state directly. They push [`PlannerAction`]s while
//! rendering and the app hands them to [`Planner::process`] afterwards.

use std::time::Instant;

use chrono::NaiveDate;
use tracing::{error, info, warn};

use crate::chat::{ChatPanel, SuggestionProvider};
use crate::model::{DayItinerary, Event, EventId, TravelSegment};
use crate::navigation::TransportMode;
use crate::search::{Place, PlaceCatalog, SearchMode};
use crate::selection::{Overlay, Selection};
use crate::store::ItineraryStore;
use crate::toast::Toasts;
use crate::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum PlannerAction {
    SelectDate(NaiveDate),
    SelectEvent(EventId),
    CloseDetail,
    /// Navigate to the event open in the detail sheet.
    NavigateToSelected,
    /// A search result was picked. What happens depends on the [`SearchMode`].
    ChoosePlace(&'static str),
    SetTransportMode(TransportMode),
    EndNavigation,
    SaveEvent(Event),
    OpenChat,
    CloseChat,
    ToggleChat,
    SendChat,
    OpenAccount,
    CloseAccount,
    AccountItem(&'static str),
    ToggleSheet,
    DragSheet(f32),
}

pub struct Planner {
    store: ItineraryStore,
    selection: Selection,
    catalog: PlaceCatalog,
    search_mode: SearchMode,
    chat: ChatPanel,
    toasts: Toasts,
}

impl Planner {
    pub fn new(store: ItineraryStore, initial_date: Option<NaiveDate>) -> Self {
        let selection = Selection::new(&store, initial_date);
        Self {
            store,
            selection,
            catalog: PlaceCatalog::default(),
            search_mode: SearchMode::default(),
            chat: ChatPanel::default(),
            toasts: Toasts::default(),
        }
    }

    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        self
    }

    pub fn with_provider(mut self, provider: Box<dyn SuggestionProvider>) -> Self {
        self.chat = ChatPanel::new(provider);
        self
    }

    pub fn store(&self) -> &ItineraryStore {
        &self.store
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn catalog(&self) -> &PlaceCatalog {
        &self.catalog
    }

    pub fn search_mode(&self) -> SearchMode {
        self.search_mode
    }

    pub fn chat(&self) -> &ChatPanel {
        &self.chat
    }

    /// The chat text box is edited in place by the view.
    pub fn chat_mut(&mut self) -> &mut ChatPanel {
        &mut self.chat
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn current_day(&self) -> Option<&DayItinerary> {
        self.selection.current_day(&self.store)
    }

    pub fn travel_to_selected(&self) -> Option<&TravelSegment> {
        self.selection.travel_to_selected(&self.store)
    }

    #[profiling::function]
    pub fn process(&mut self, action: PlannerAction, now: Instant) {
        let was_chat = *self.selection.overlay() == Overlay::Chat;
        self.apply(action, now);

        // a reply must never land in a panel that is no longer on screen
        if was_chat && *self.selection.overlay() != Overlay::Chat {
            self.chat.close();
        }
    }

    fn apply(&mut self, action: PlannerAction, now: Instant) {
        match action {
            PlannerAction::SelectDate(date) => self.selection.select_date(&self.store, date),
            PlannerAction::SelectEvent(id) => {
                self.selection.select_event(&self.store, &id);
            }
            PlannerAction::CloseDetail => self.selection.close_detail(),
            PlannerAction::NavigateToSelected => {
                if self.selection.begin_navigation_from_event(&self.store) {
                    info!("Planner: navigating to selected event");
                }
            }
            PlannerAction::ChoosePlace(id) => self.choose_place(id, now),
            PlannerAction::SetTransportMode(mode) => self.selection.set_transport_mode(mode),
            PlannerAction::EndNavigation => self.selection.end_navigation(),
            PlannerAction::SaveEvent(event) => self.save_event(event, now),
            PlannerAction::OpenChat => {
                if self.selection.open_chat() {
                    self.chat.open();
                }
            }
            PlannerAction::CloseChat => self.selection.close_chat(),
            PlannerAction::ToggleChat => {
                if self.selection.toggle_chat() {
                    self.chat.open();
                }
            }
            PlannerAction::SendChat => {
                self.chat.send(now);
            }
            PlannerAction::OpenAccount => {
                self.selection.open_account();
            }
            PlannerAction::CloseAccount => self.selection.close_account(),
            PlannerAction::AccountItem(label) => {
                info!("Account: '{label}' selected");
                self.selection.close_account();
            }
            PlannerAction::ToggleSheet => self.selection.toggle_sheet(),
            PlannerAction::DragSheet(offset_y) => self.selection.drag_sheet(offset_y),
        }
    }

    pub fn process_all(&mut self, actions: impl IntoIterator<Item = PlannerAction>, now: Instant) {
        for action in actions {
            self.process(action, now);
        }
    }

    /// Lands due chat replies and expires toasts. Returns when the next
    /// timed change happens, if any.
    pub fn tick(&mut self, now: Instant) -> Option<Instant> {
        self.chat.poll(now);
        self.toasts.prune(now);

        match (self.chat.next_due(), self.toasts.next_expiry()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn save_event(&mut self, event: Event, now: Instant) {
        let id = event.id.clone();
        match self.store.update_event(event) {
            Ok(()) => {
                if let Some(stored) = self.store.event(&id) {
                    self.selection.event_updated(stored);
                }
                self.toasts.push("Event updated", now);
            }
            Err(Error::EventNotFound(id)) => {
                warn!("Planner: tried to update missing event {id}, ignoring");
            }
            Err(err) => error!("Planner: update of {id} failed: {err}"),
        }
    }

    fn choose_place(&mut self, id: &str, now: Instant) {
        let Some(place) = self.catalog.get(id) else {
            warn!("Planner: unknown place {id}");
            return;
        };

        match self.search_mode {
            SearchMode::Navigate => {
                info!("Planner: navigating to {}", place.name);
                self.selection
                    .begin_navigation_from_search(&self.store, place.destination());
            }
            SearchMode::AddToItinerary => self.add_place(place, now),
        }
    }

    fn add_place(&mut self, place: &Place, now: Instant) {
        let date = self.selection.date();
        match self
            .store
            .append_event(date, place.to_new_event(), TravelSegment::placeholder())
        {
            Ok(_) => self
                .toasts
                .push(format!("{} added to itinerary", place.name), now),
            Err(err) => error!("Planner: could not add {} to {date}: {err}", place.name),
        }
    }
}

//! Which day is shown, which event is open, and which overlay covers the
//! itinerary view.
//!
//! Only one overlay is active at a time. Navigation supersedes the detail
//! sheet; the chat panel and the account menu can only be opened from the
//! plain itinerary view (or swap with each other).

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::model::{DayItinerary, Event, EventId, TravelSegment};
use crate::navigation::{Destination, NavigationTarget, TransportMode};
use crate::store::ItineraryStore;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Overlay {
    #[default]
    Idle,
    /// Detail sheet for a cached copy of the selected event.
    Detail(Event),
    Navigating(NavigationTarget),
    Chat,
    Account,
}

impl Overlay {
    pub fn name(&self) -> &'static str {
        match self {
            Overlay::Idle => "idle",
            Overlay::Detail(_) => "detail",
            Overlay::Navigating(_) => "navigating",
            Overlay::Chat => "chat",
            Overlay::Account => "account",
        }
    }

    fn is_modal(&self) -> bool {
        matches!(self, Overlay::Chat | Overlay::Account)
    }
}

#[derive(Debug, Clone)]
pub struct Selection {
    date: NaiveDate,
    overlay: Overlay,
    sheet_expanded: bool,
}

/// Drag distance (in points) that flips the bottom sheet.
pub const SHEET_DRAG_THRESHOLD: f32 = 50.0;

impl Selection {
    /// Starts on `date` if the store has it, otherwise on the first day.
    pub fn new(store: &ItineraryStore, date: Option<NaiveDate>) -> Self {
        let fallback = store
            .first_day()
            .map(|d| d.date)
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let date = match date {
            Some(date) if store.contains_day(date) => date,
            Some(date) => {
                warn!("Selection: no itinerary for {date}, showing {fallback}");
                fallback
            }
            None => fallback,
        };

        Self {
            date,
            overlay: Overlay::Idle,
            sheet_expanded: false,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn sheet_expanded(&self) -> bool {
        self.sheet_expanded
    }

    /// The day being shown. Falls back to the first day when the selected
    /// date has gone missing.
    pub fn current_day<'a>(&self, store: &'a ItineraryStore) -> Option<&'a DayItinerary> {
        store.day(self.date).ok().or_else(|| store.first_day())
    }

    pub fn selected_event(&self) -> Option<&Event> {
        match &self.overlay {
            Overlay::Detail(event) => Some(event),
            _ => None,
        }
    }

    pub fn navigation(&self) -> Option<&NavigationTarget> {
        match &self.overlay {
            Overlay::Navigating(target) => Some(target),
            _ => None,
        }
    }

    pub fn is_navigating(&self) -> bool {
        matches!(self.overlay, Overlay::Navigating(_))
    }

    /// Index of the selected event in the current day.
    pub fn selected_index(&self, store: &ItineraryStore) -> Option<usize> {
        let event = self.selected_event()?;
        self.current_day(store)?.position_of(&event.id)
    }

    /// The leg arriving at the selected event. None for the first event of
    /// the day or when nothing is selected.
    pub fn travel_to_selected<'a>(&self, store: &'a ItineraryStore) -> Option<&'a TravelSegment> {
        let index = self.selected_index(store)?;
        self.current_day(store)?.travel_before(index)
    }

    pub fn select_date(&mut self, store: &ItineraryStore, date: NaiveDate) {
        if store.contains_day(date) {
            self.date = date;
        } else if let Some(first) = store.first_day() {
            warn!("Selection: no itinerary for {date}, falling back to {}", first.date);
            self.date = first.date;
        }

        let stale = match (self.selected_event(), self.current_day(store)) {
            (Some(event), Some(day)) => !day.contains(&event.id),
            (Some(_), None) => true,
            _ => false,
        };

        if stale {
            debug!("Selection: selected event not on {}, closing detail", self.date);
            self.overlay = Overlay::Idle;
        }
    }

    /// Opens the detail sheet. Ignored while navigating or while the chat or
    /// account sheet is up, and for ids outside the current day.
    pub fn select_event(&mut self, store: &ItineraryStore, id: &EventId) -> bool {
        if self.is_navigating() || self.overlay.is_modal() {
            debug!("Selection: ignoring select of {id} while {}", self.overlay.name());
            return false;
        }

        let Some(event) = self.current_day(store).and_then(|d| d.event(id)) else {
            warn!("Selection: event {id} is not on {}", self.date);
            return false;
        };

        self.overlay = Overlay::Detail(event.clone());
        true
    }

    pub fn close_detail(&mut self) {
        if matches!(self.overlay, Overlay::Detail(_)) {
            self.overlay = Overlay::Idle;
        }
    }

    /// Navigate from the previous event of the day to the selected one. Only
    /// valid while the detail sheet is open.
    pub fn begin_navigation_from_event(&mut self, store: &ItineraryStore) -> bool {
        let Some(selected) = self.selected_event() else {
            debug!("Selection: navigation requested without an open event");
            return false;
        };

        let destination = Destination::from_event(selected);
        let (origin, hint) = match (self.current_day(store), self.selected_index(store)) {
            (Some(day), Some(index)) => (
                day.event_before(index).cloned(),
                day.travel_before(index).cloned(),
            ),
            _ => (None, None),
        };

        self.overlay = Overlay::Navigating(NavigationTarget::new(destination, origin, hint));
        true
    }

    /// Navigate to an arbitrary place from the last event of the day.
    pub fn begin_navigation_from_search(
        &mut self,
        store: &ItineraryStore,
        destination: Destination,
    ) {
        let origin = self
            .current_day(store)
            .and_then(|d| d.last_event())
            .cloned();

        self.overlay = Overlay::Navigating(NavigationTarget::new(destination, origin, None));
    }

    pub fn set_transport_mode(&mut self, mode: TransportMode) {
        if let Overlay::Navigating(target) = &mut self.overlay {
            target.set_mode(mode);
        }
    }

    pub fn end_navigation(&mut self) {
        if self.is_navigating() {
            self.overlay = Overlay::Idle;
        }
    }

    /// Refreshes the cached detail copy after the store accepted an edit.
    pub fn event_updated(&mut self, updated: &Event) {
        if let Overlay::Detail(selected) = &mut self.overlay {
            if selected.id == updated.id {
                *selected = updated.clone();
            }
        }
    }

    pub fn open_chat(&mut self) -> bool {
        self.open_modal(Overlay::Chat)
    }

    pub fn close_chat(&mut self) {
        if self.overlay == Overlay::Chat {
            self.overlay = Overlay::Idle;
        }
    }

    pub fn toggle_chat(&mut self) -> bool {
        if self.overlay == Overlay::Chat {
            self.close_chat();
            false
        } else {
            self.open_chat()
        }
    }

    pub fn open_account(&mut self) -> bool {
        self.open_modal(Overlay::Account)
    }

    pub fn close_account(&mut self) {
        if self.overlay == Overlay::Account {
            self.overlay = Overlay::Idle;
        }
    }

    fn open_modal(&mut self, modal: Overlay) -> bool {
        match self.overlay {
            Overlay::Idle | Overlay::Chat | Overlay::Account => {
                self.overlay = modal;
                true
            }
            Overlay::Detail(_) | Overlay::Navigating(_) => {
                debug!(
                    "Selection: not opening {} over {}",
                    modal.name(),
                    self.overlay.name()
                );
                false
            }
        }
    }

    pub fn set_sheet_expanded(&mut self, expanded: bool) {
        self.sheet_expanded = expanded;
    }

    pub fn toggle_sheet(&mut self) {
        self.sheet_expanded = !self.sheet_expanded;
    }

    /// Applies a finished vertical drag of the sheet handle. Negative is up.
    pub fn drag_sheet(&mut self, offset_y: f32) {
        if offset_y < -SHEET_DRAG_THRESHOLD {
            self.sheet_expanded = true;
        } else if offset_y > SHEET_DRAG_THRESHOLD {
            self.sheet_expanded = false;
        }
    }
}

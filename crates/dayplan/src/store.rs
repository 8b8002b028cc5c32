//! The itinerary store: every day of the plan, keyed by date.
//!
//! All mutations are whole-record replacements that leave each day
//! consistent (contiguous numbering, one travel leg between consecutive
//! events). Views observe changes through [`ItineraryStore::revision`].

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::model::{DayItinerary, Event, EventId, NewEvent, TravelSegment};
use crate::{Error, Result};

/// Where an event lives inside the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventLocation {
    pub day: usize,
    pub index: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ItineraryStore {
    days: Vec<DayItinerary>,
    revision: u64,
}

impl ItineraryStore {
    /// Builds a store, sorting days chronologically, dropping duplicate dates,
    /// renaming reused event ids and repairing any day that breaks its
    /// invariants.
    pub fn new(mut days: Vec<DayItinerary>) -> Self {
        days.sort_by_key(|d| d.date);

        let before = days.len();
        days.dedup_by_key(|d| d.date);
        if days.len() != before {
            warn!(
                "Itinerary: dropped {} day(s) with duplicate dates",
                before - days.len()
            );
        }

        let mut seen = HashSet::new();
        for day in &mut days {
            if day.repair() {
                warn!("Itinerary: repaired inconsistent day {}", day.date);
            }

            for event in &mut day.events {
                if !seen.insert(event.id.clone()) {
                    let fresh = EventId::generate();
                    warn!(
                        "Itinerary: event id {} on {} already used, renamed to {fresh}",
                        event.id, day.date
                    );
                    event.id = fresh;
                    seen.insert(event.id.clone());
                }
            }
        }

        Self { days, revision: 0 }
    }

    /// Loads days from a JSON file holding a non-empty list of itineraries.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let days: Vec<DayItinerary> = serde_json::from_str(&data)?;
        if days.is_empty() {
            return Err(Error::Generic(format!("{} has no days", path.display())));
        }
        info!("Itinerary: loaded {} day(s) from {}", days.len(), path.display());
        Ok(Self::new(days))
    }

    pub fn days(&self) -> &[DayItinerary] {
        &self.days
    }

    pub fn first_day(&self) -> Option<&DayItinerary> {
        self.days.first()
    }

    pub fn contains_day(&self, date: NaiveDate) -> bool {
        self.day_index(date).is_some()
    }

    pub fn day(&self, date: NaiveDate) -> Result<&DayItinerary> {
        self.day_index(date)
            .map(|i| &self.days[i])
            .ok_or(Error::DayNotFound(date))
    }

    /// Bumped after every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn find_event(&self, id: &EventId) -> Option<EventLocation> {
        self.days.iter().enumerate().find_map(|(day, d)| {
            d.position_of(id)
                .map(|index| EventLocation { day, index })
        })
    }

    pub fn event(&self, id: &EventId) -> Option<&Event> {
        let loc = self.find_event(id)?;
        self.days.get(loc.day)?.events.get(loc.index)
    }

    /// Replaces the event with the same id, keeping its slot and number.
    /// Travel legs are left alone.
    pub fn update_event(&mut self, mut updated: Event) -> Result<()> {
        let Some(loc) = self.find_event(&updated.id) else {
            return Err(Error::EventNotFound(updated.id));
        };

        let slot = &mut self.days[loc.day].events[loc.index];
        if updated.number != slot.number {
            debug!(
                "Itinerary: ignoring number {} on update of {}, keeping {}",
                updated.number, updated.id, slot.number
            );
            updated.number = slot.number;
        }
        *slot = updated;
        self.revision += 1;

        Ok(())
    }

    /// Appends an event to the end of `date`, numbering it and adding the
    /// leg that reaches it from the previous last event.
    pub fn append_event(
        &mut self,
        date: NaiveDate,
        new_event: NewEvent,
        travel_from_previous: TravelSegment,
    ) -> Result<Event> {
        let index = self.day_index(date).ok_or(Error::DayNotFound(date))?;
        let day = &mut self.days[index];

        let event = new_event.into_event(day.events.len() + 1);
        if !day.events.is_empty() {
            day.travel.push(travel_from_previous);
        }
        day.events.push(event.clone());
        debug_assert!(day.is_consistent());
        self.revision += 1;

        info!(
            "Itinerary: appended '{}' as #{} on {}",
            event.title, event.number, date
        );
        Ok(event)
    }

    fn day_index(&self, date: NaiveDate) -> Option<usize> {
        self.days.iter().position(|d| d.date == date)
    }
}

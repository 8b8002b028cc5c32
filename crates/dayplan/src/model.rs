use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh id for events created at runtime.
    pub fn generate() -> Self {
        Self(format!("local-{}", uuid::Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn offset(self, dlat: f64, dlng: f64) -> Self {
        Self::new(self.lat + dlat, self.lng + dlng)
    }

    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.lat + other.lat) / 2.0, (self.lng + other.lng) / 2.0)
    }
}

/// Where an event came from: the user's calendar, or suggested by the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventOrigin {
    #[serde(alias = "calendar")]
    UserAuthored,
    #[serde(alias = "ai-generated")]
    SystemSuggested,
}

impl EventOrigin {
    pub fn is_suggested(&self) -> bool {
        matches!(self, EventOrigin::SystemSuggested)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Personal,
    Fitness,
    Food,
    Errand,
    Social,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Work,
        Category::Personal,
        Category::Fitness,
        Category::Food,
        Category::Errand,
        Category::Social,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Fitness => "fitness",
            Category::Food => "food",
            Category::Errand => "errand",
            Category::Social => "social",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Work => "💼",
            Category::Personal => "🏠",
            Category::Fitness => "🏃",
            Category::Food => "🍽",
            Category::Errand => "📦",
            Category::Social => "☕",
        }
    }

    /// Accent colour as sRGB bytes.
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            Category::Work => [51, 102, 204],
            Category::Personal => [161, 77, 203],
            Category::Fitness => [46, 184, 115],
            Category::Food => [238, 157, 43],
            Category::Errand => [52, 157, 178],
            Category::Social => [215, 66, 115],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMethod {
    Walking,
    Car,
    Transit,
    Bike,
}

impl TravelMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMethod::Walking => "walking",
            TravelMethod::Car => "car",
            TravelMethod::Transit => "transit",
            TravelMethod::Bike => "bike",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TravelMethod::Walking => "🚶",
            TravelMethod::Car => "🚗",
            TravelMethod::Transit => "🚇",
            TravelMethod::Bike => "🚲",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelSegment {
    pub method: TravelMethod,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
}

impl TravelSegment {
    pub fn new(method: TravelMethod, duration: impl Into<String>) -> Self {
        Self {
            method,
            duration: duration.into(),
            distance: None,
        }
    }

    pub fn with_distance(mut self, distance: impl Into<String>) -> Self {
        self.distance = Some(distance.into());
        self
    }

    /// Stand-in segment used when an event is added without a known route.
    /// Not an estimate.
    pub fn placeholder() -> Self {
        Self::new(TravelMethod::Walking, "~10 min")
    }

    pub fn summary(&self) -> String {
        match &self.distance {
            Some(distance) => format!("{} by {} · {}", self.duration, self.method.as_str(), distance),
            None => format!("{} by {}", self.duration, self.method.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub number: usize,
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub location: String,
    pub coordinate: Coordinate,
    pub origin: EventOrigin,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminders: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub category: Category,
}

impl Event {
    pub fn time_range(&self) -> String {
        format!("{} – {}", self.start_time, self.end_time)
    }

    pub fn attendees(&self) -> &[String] {
        self.attendees.as_deref().unwrap_or_default()
    }

    pub fn reminders(&self) -> &[String] {
        self.reminders.as_deref().unwrap_or_default()
    }
}

/// An event that has not been placed in a day yet. The store assigns the
/// `number` when it is appended.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub id: EventId,
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub location: String,
    pub coordinate: Coordinate,
    pub origin: EventOrigin,
    pub description: Option<String>,
    pub category: Category,
}

impl NewEvent {
    pub fn into_event(self, number: usize) -> Event {
        Event {
            id: self.id,
            number,
            title: self.title,
            start_time: self.start_time,
            end_time: self.end_time,
            duration: self.duration,
            location: self.location,
            coordinate: self.coordinate,
            origin: self.origin,
            description: self.description,
            attendees: None,
            reminders: None,
            notes: None,
            category: self.category,
        }
    }
}

/// One day of the plan. `travel[i]` is the leg from `events[i]` to
/// `events[i + 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayItinerary {
    pub date: NaiveDate,
    pub label: String,
    pub events: Vec<Event>,
    #[serde(default)]
    pub travel: Vec<TravelSegment>,
}

impl DayItinerary {
    pub fn new(date: NaiveDate, label: impl Into<String>) -> Self {
        Self {
            date,
            label: label.into(),
            events: Vec::new(),
            travel: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn expected_travel_len(&self) -> usize {
        self.events.len().saturating_sub(1)
    }

    pub fn position_of(&self, id: &EventId) -> Option<usize> {
        self.events.iter().position(|e| &e.id == id)
    }

    pub fn contains(&self, id: &EventId) -> bool {
        self.position_of(id).is_some()
    }

    pub fn event(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| &e.id == id)
    }

    /// The leg that arrives at the event at `index`.
    pub fn travel_before(&self, index: usize) -> Option<&TravelSegment> {
        index.checked_sub(1).and_then(|i| self.travel.get(i))
    }

    pub fn event_before(&self, index: usize) -> Option<&Event> {
        index.checked_sub(1).and_then(|i| self.events.get(i))
    }

    pub fn last_event(&self) -> Option<&Event> {
        self.events.last()
    }

    pub fn is_consistent(&self) -> bool {
        self.travel.len() == self.expected_travel_len()
            && self
                .events
                .iter()
                .enumerate()
                .all(|(i, e)| e.number == i + 1)
    }

    /// Rewrites numbers and pads or truncates travel so the day satisfies its
    /// invariants. Returns true if anything changed.
    pub fn repair(&mut self) -> bool {
        let mut changed = false;

        for (i, event) in self.events.iter_mut().enumerate() {
            if event.number != i + 1 {
                event.number = i + 1;
                changed = true;
            }
        }

        let expected = self.expected_travel_len();
        if self.travel.len() != expected {
            self.travel.resize_with(expected, TravelSegment::placeholder);
            changed = true;
        }

        changed
    }

    pub fn event_count_text(&self) -> String {
        match self.events.len() {
            1 => "1 event".to_string(),
            n => format!("{n} events"),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    pub(crate) fn event(id: &str, number: usize) -> Event {
        Event {
            id: EventId::new(id),
            number,
            title: format!("Event {id}"),
            start_time: "9:00 AM".to_string(),
            end_time: "10:00 AM".to_string(),
            duration: "1 hr".to_string(),
            location: "Somewhere".to_string(),
            coordinate: Coordinate::new(40.75, -73.98),
            origin: EventOrigin::UserAuthored,
            description: None,
            attendees: None,
            reminders: None,
            notes: None,
            category: Category::Work,
        }
    }

    pub(crate) fn day(date: NaiveDate, ids: &[&str]) -> DayItinerary {
        let mut day = DayItinerary::new(date, "Test");
        day.events = ids
            .iter()
            .enumerate()
            .map(|(i, id)| event(id, i + 1))
            .collect();
        day.travel = (1..ids.len())
            .map(|i| TravelSegment::new(TravelMethod::Car, format!("{i} min")))
            .collect();
        day
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn travel_before_first_event_is_none() {
        let day = day(date(), &["a", "b", "c"]);
        assert!(day.travel_before(0).is_none());
        assert_eq!(day.travel_before(2).map(|t| t.duration.as_str()), Some("2 min"));
        assert!(day.travel_before(3).is_none());
    }

    #[test]
    fn repair_pads_and_renumbers() {
        let mut day = day(date(), &["a", "b", "c"]);
        day.travel.clear();
        day.events[2].number = 7;

        assert!(!day.is_consistent());
        assert!(day.repair());
        assert!(day.is_consistent());
        assert_eq!(day.travel, vec![TravelSegment::placeholder(); 2]);
        assert_eq!(day.events[2].number, 3);
        assert!(!day.repair());
    }

    #[test]
    fn empty_day_is_consistent() {
        let day = DayItinerary::new(date(), "Empty");
        assert!(day.is_consistent());
        assert_eq!(day.expected_travel_len(), 0);
        assert!(day.last_event().is_none());
        assert_eq!(day.event_count_text(), "0 events");
    }

    #[test]
    fn origin_accepts_prototype_names() {
        let origin: EventOrigin = serde_json::from_str("\"ai-generated\"").unwrap();
        assert_eq!(origin, EventOrigin::SystemSuggested);
        let origin: EventOrigin = serde_json::from_str("\"calendar\"").unwrap();
        assert_eq!(origin, EventOrigin::UserAuthored);
    }

    #[test]
    fn segment_summary() {
        let seg = TravelSegment::new(TravelMethod::Transit, "10 min").with_distance("1.1 mi");
        assert_eq!(seg.summary(), "10 min by transit · 1.1 mi");
        assert_eq!(TravelSegment::placeholder().summary(), "~10 min by walking");
    }
}

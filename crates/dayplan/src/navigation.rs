//! Straight-line travel estimates for the navigation screen.
//!
//! There is no routing here: distance is the great-circle distance between
//! the two points and the ETA assumes a constant speed per mode.

use crate::model::{Coordinate, Event, TravelMethod, TravelSegment};

pub const EARTH_RADIUS_MILES: f64 = 3958.8;
const FEET_PER_MILE: f64 = 5280.0;

/// Offset applied to the destination to simulate the user's current position
/// when navigation has no origin event.
const SIMULATED_START_OFFSET: (f64, f64) = (0.005, 0.003);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportMode {
    #[default]
    Walking,
    Car,
}

impl TransportMode {
    pub const ALL: [TransportMode; 2] = [TransportMode::Walking, TransportMode::Car];

    pub fn speed_mph(&self) -> f64 {
        match self {
            TransportMode::Walking => 4.5,
            TransportMode::Car => 35.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Walking => "Walk",
            TransportMode::Car => "Drive",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TransportMode::Walking => TravelMethod::Walking.icon(),
            TransportMode::Car => TravelMethod::Car.icon(),
        }
    }

    /// Initial mode for a leg: drive if the itinerary says car, otherwise walk.
    pub fn from_hint(segment: Option<&TravelSegment>) -> Self {
        match segment.map(|s| s.method) {
            Some(TravelMethod::Car) => TransportMode::Car,
            _ => TransportMode::Walking,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub distance_miles: f64,
    pub eta_minutes: u32,
}

impl Estimate {
    pub fn distance_text(&self) -> String {
        format_distance(self.distance_miles)
    }

    pub fn duration_text(&self) -> String {
        format_duration(self.eta_minutes)
    }
}

pub fn haversine_miles(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let dlat = (to.lat - from.lat).to_radians();
    let dlng = (to.lng - from.lng).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_MILES * c
}

/// Distance and ETA between two points for a mode. ETA never drops below a
/// minute.
pub fn estimate(from: Coordinate, to: Coordinate, mode: TransportMode) -> Estimate {
    let distance_miles = haversine_miles(from, to);
    let minutes = (distance_miles / mode.speed_mph() * 60.0).round();

    Estimate {
        distance_miles,
        eta_minutes: (minutes as u32).max(1),
    }
}

pub fn format_distance(miles: f64) -> String {
    if miles < 0.1 {
        format!("{} ft", (miles * FEET_PER_MILE).round() as u64)
    } else {
        format!("{miles:.1} mi")
    }
}

pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        format!("{minutes} min")
    } else {
        format!("{} hr {} min", minutes / 60, minutes % 60)
    }
}

/// Where a navigation session is headed.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub name: String,
    pub coordinate: Coordinate,
    pub address: Option<String>,
    /// Scheduled start of the event being travelled to.
    pub arrive_by: Option<String>,
}

impl Destination {
    pub fn from_event(event: &Event) -> Self {
        Self {
            name: event.title.clone(),
            coordinate: event.coordinate,
            address: Some(event.location.clone()),
            arrive_by: Some(event.start_time.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationTarget {
    pub destination: Destination,
    /// The event the user is travelling from, if any.
    pub origin: Option<Event>,
    /// The itinerary leg that ends at the destination, used as the initial
    /// transport hint.
    pub travel_hint: Option<TravelSegment>,
    pub mode: TransportMode,
}

impl NavigationTarget {
    pub fn new(
        destination: Destination,
        origin: Option<Event>,
        travel_hint: Option<TravelSegment>,
    ) -> Self {
        let mode = TransportMode::from_hint(travel_hint.as_ref());
        Self {
            destination,
            origin,
            travel_hint,
            mode,
        }
    }

    pub fn start(&self) -> Coordinate {
        match &self.origin {
            Some(origin) => origin.coordinate,
            None => self
                .destination
                .coordinate
                .offset(SIMULATED_START_OFFSET.0, SIMULATED_START_OFFSET.1),
        }
    }

    pub fn set_mode(&mut self, mode: TransportMode) {
        self.mode = mode;
    }

    pub fn arrival_text(&self) -> Option<String> {
        self.destination
            .arrive_by
            .as_ref()
            .map(|time| format!("ETA {time}"))
    }

    /// Recomputed on every call so a mode change is reflected immediately.
    pub fn estimate(&self) -> Estimate {
        estimate(self.start(), self.destination.coordinate, self.mode)
    }
}

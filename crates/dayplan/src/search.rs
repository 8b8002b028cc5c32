//! Place search over a small built-in catalog.

use crate::model::{Category, Coordinate, EventId, EventOrigin, NewEvent};
use crate::navigation::Destination;

#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: &'static str,
    pub name: &'static str,
    pub address: &'static str,
    pub coordinate: Coordinate,
    pub kind: &'static str,
}

impl Place {
    pub fn destination(&self) -> Destination {
        Destination {
            name: self.name.to_string(),
            coordinate: self.coordinate,
            address: Some(self.address.to_string()),
            arrive_by: None,
        }
    }

    /// The event created when this place is added to a day. Times are left
    /// for the user to fill in.
    pub fn to_new_event(&self) -> NewEvent {
        NewEvent {
            id: EventId::generate(),
            title: self.name.to_string(),
            start_time: "TBD".to_string(),
            end_time: "TBD".to_string(),
            duration: "TBD".to_string(),
            location: self.address.to_string(),
            coordinate: self.coordinate,
            origin: EventOrigin::SystemSuggested,
            description: Some("Added from search. Tap edit to set the time.".to_string()),
            category: Category::Personal,
        }
    }
}

pub const PLACES: &[Place] = &[
    Place {
        id: "s1",
        name: "Central Park",
        address: "Central Park, New York, NY",
        coordinate: Coordinate::new(40.7829, -73.9654),
        kind: "Park",
    },
    Place {
        id: "s2",
        name: "MoMA",
        address: "11 W 53rd St, New York, NY",
        coordinate: Coordinate::new(40.7614, -73.9776),
        kind: "Museum",
    },
    Place {
        id: "s3",
        name: "Times Square",
        address: "Manhattan, NY 10036",
        coordinate: Coordinate::new(40.758, -73.9855),
        kind: "Landmark",
    },
    Place {
        id: "s4",
        name: "Grand Central Terminal",
        address: "89 E 42nd St, New York, NY",
        coordinate: Coordinate::new(40.7527, -73.9772),
        kind: "Transit",
    },
    Place {
        id: "s5",
        name: "Brooklyn Bridge",
        address: "Brooklyn Bridge, New York, NY",
        coordinate: Coordinate::new(40.7061, -73.9969),
        kind: "Landmark",
    },
    Place {
        id: "s6",
        name: "Chelsea Market",
        address: "75 9th Ave, New York, NY",
        coordinate: Coordinate::new(40.7424, -74.0061),
        kind: "Food",
    },
    Place {
        id: "s7",
        name: "The High Line",
        address: "New York, NY 10011",
        coordinate: Coordinate::new(40.748, -74.0048),
        kind: "Park",
    },
    Place {
        id: "s8",
        name: "Shake Shack",
        address: "Madison Square Park, New York, NY",
        coordinate: Coordinate::new(40.7408, -73.988),
        kind: "Food",
    },
];

/// What picking a search result does. A deployment picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Navigate,
    AddToItinerary,
}

impl SearchMode {
    pub fn action_label(&self) -> &'static str {
        match self {
            SearchMode::Navigate => "Go",
            SearchMode::AddToItinerary => "Add",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            SearchMode::Navigate => "Search for a place to go...",
            SearchMode::AddToItinerary => "Search for a place to add...",
        }
    }
}

pub struct PlaceCatalog {
    places: &'static [Place],
}

impl Default for PlaceCatalog {
    fn default() -> Self {
        Self { places: PLACES }
    }
}

impl PlaceCatalog {
    pub fn get(&self, id: &str) -> Option<&'static Place> {
        self.places.iter().find(|p| p.id == id)
    }

    /// Case-insensitive substring match on name or address. A blank query
    /// matches nothing.
    pub fn search(&self, query: &str) -> Vec<&'static Place> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.places
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query) || p.address.to_lowercase().contains(&query)
            })
            .collect()
    }
}

pub fn no_results_text(query: &str) -> String {
    format!("No places found for \"{}\"", query.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(results: &[&Place]) -> Vec<&'static str> {
        results.iter().map(|p| p.name).collect()
    }

    #[test]
    fn blank_query_matches_nothing() {
        let catalog = PlaceCatalog::default();
        assert!(catalog.search("").is_empty());
        assert!(catalog.search("   ").is_empty());
    }

    #[test]
    fn matches_name_case_insensitively() {
        let catalog = PlaceCatalog::default();
        assert_eq!(names(&catalog.search("moma")), vec!["MoMA"]);
        assert_eq!(names(&catalog.search("  SHAKE ")), vec!["Shake Shack"]);
    }

    #[test]
    fn matches_address() {
        let catalog = PlaceCatalog::default();
        assert_eq!(names(&catalog.search("42nd")), vec!["Grand Central Terminal"]);
        assert_eq!(
            names(&catalog.search("park")),
            vec!["Central Park", "Shake Shack"]
        );
    }

    #[test]
    fn no_results() {
        let catalog = PlaceCatalog::default();
        assert!(catalog.search("zzz").is_empty());
        assert_eq!(no_results_text(" zzz "), "No places found for \"zzz\"");
    }

    #[test]
    fn new_event_from_place() {
        let place = PlaceCatalog::default().get("s2").unwrap();
        let event = place.to_new_event().into_event(4);
        assert_eq!(event.title, "MoMA");
        assert_eq!(event.location, "11 W 53rd St, New York, NY");
        assert_eq!(event.start_time, "TBD");
        assert_eq!(event.origin, EventOrigin::SystemSuggested);
        assert_eq!(event.category, Category::Personal);
        assert!(event.id.as_str().starts_with("local-"));
        assert_eq!(event.number, 4);
    }
}

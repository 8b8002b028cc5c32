use std::time::Instant;

use chrono::{Duration, NaiveDate};
use dayplan::list::{day_items, ListItem};
use dayplan::map::pins;
use dayplan::navigation::{estimate, TransportMode};
use dayplan::search::SearchMode;
use dayplan::seed::sample_itineraries;
use dayplan::{
    Coordinate, DayItinerary, EventId, ItineraryStore, Overlay, Planner, PlannerAction,
    TravelMethod,
};
use pretty_assertions::assert_eq;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn sample_planner() -> Planner {
    Planner::new(ItineraryStore::new(sample_itineraries(today())), None)
}

fn assert_invariants(store: &ItineraryStore) {
    for day in store.days() {
        assert_eq!(day.travel.len(), day.events.len().saturating_sub(1));
        for (i, event) in day.events.iter().enumerate() {
            assert_eq!(event.number, i + 1, "{} on {}", event.id, day.date);
        }
    }
}

#[test]
fn empty_day_has_nothing_to_show() {
    let mut days = sample_itineraries(today());
    let empty = today() + Duration::days(3);
    days.push(DayItinerary::new(empty, "Empty"));
    let mut planner = Planner::new(ItineraryStore::new(days), None);
    let now = Instant::now();

    planner.process(PlannerAction::SelectDate(empty), now);
    let day = planner.current_day().unwrap();
    assert_eq!(day.date, empty);
    assert!(day_items(day).is_empty());
    assert!(pins(day).is_empty());

    planner.process(PlannerAction::SelectEvent(EventId::new("e1")), now);
    assert_eq!(planner.selection().overlay(), &Overlay::Idle);
    assert!(planner.travel_to_selected().is_none());
}

#[test]
fn add_from_search_extends_three_event_day() {
    let mut planner = sample_planner().with_search_mode(SearchMode::AddToItinerary);
    let now = Instant::now();
    let day3 = today() + Duration::days(2);
    planner.process(PlannerAction::SelectDate(day3), now);
    assert_eq!(planner.current_day().unwrap().events.len(), 3);

    planner.process(PlannerAction::ChoosePlace("s2"), now);

    let day = planner.current_day().unwrap();
    assert_eq!(day.events.len(), 4);
    assert_eq!(day.events[3].number, 4);
    assert_eq!(day.events[3].title, "MoMA");
    assert_eq!(day.travel.len(), 3);
    assert_eq!(day.travel[2].method, TravelMethod::Walking);
    assert_eq!(day.travel[2].duration, "~10 min");

    let items = day_items(day);
    assert_eq!(items.len(), 7);
    assert!(matches!(items[6], ListItem::Event { index: 3, .. }));
    assert_invariants(planner.store());
}

#[test]
fn edit_from_detail_is_reflected_without_refetch() {
    let mut planner = sample_planner();
    let now = Instant::now();
    planner.process(PlannerAction::SelectEvent(EventId::new("e3")), now);

    let mut edited = planner.selection().selected_event().unwrap().clone();
    edited.title = "Coffee with Alex and Sam".to_string();
    planner.process(PlannerAction::SaveEvent(edited), now);

    let day = planner.current_day().unwrap();
    assert_eq!(day.events[2].title, "Coffee with Alex and Sam");
    assert_eq!(day.events[2].number, 3);
    assert_eq!(
        planner.selection().selected_event().map(|e| e.title.as_str()),
        Some("Coffee with Alex and Sam")
    );
    assert_invariants(planner.store());
}

#[test]
fn navigation_origin_follows_day_order() {
    let mut planner = sample_planner();
    let now = Instant::now();

    planner.process(PlannerAction::SelectEvent(EventId::new("e1")), now);
    planner.process(PlannerAction::NavigateToSelected, now);
    let nav = planner.selection().navigation().unwrap();
    assert!(nav.origin.is_none());
    assert_eq!(nav.mode, TransportMode::Walking);

    planner.process(PlannerAction::EndNavigation, now);
    planner.process(PlannerAction::SelectEvent(EventId::new("e3")), now);
    assert_eq!(
        planner.travel_to_selected().map(|t| t.duration.as_str()),
        Some("8 min")
    );
    planner.process(PlannerAction::NavigateToSelected, now);

    let nav = planner.selection().navigation().unwrap();
    assert_eq!(nav.origin.as_ref().map(|e| e.id.as_str()), Some("e2"));
    assert_eq!(nav.destination.name, "Coffee with Alex");
    assert_eq!(nav.estimate().eta_minutes, 5);

    planner.process(PlannerAction::SetTransportMode(TransportMode::Car), now);
    assert_eq!(
        planner.selection().navigation().unwrap().estimate().eta_minutes,
        1
    );
}

#[test]
fn travel_to_selected_matches_previous_leg() {
    let mut planner = sample_planner();
    let now = Instant::now();
    let ids: Vec<EventId> = planner
        .current_day()
        .unwrap()
        .events
        .iter()
        .map(|e| e.id.clone())
        .collect();

    for (i, id) in ids.iter().enumerate() {
        planner.process(PlannerAction::SelectEvent(id.clone()), now);
        let expected = i
            .checked_sub(1)
            .map(|j| planner.current_day().unwrap().travel[j].clone());
        assert_eq!(planner.travel_to_selected().cloned(), expected);
        planner.process(PlannerAction::CloseDetail, now);
    }
}

#[test]
fn known_pair_estimates() {
    let from = Coordinate::new(40.7484, -73.9857);
    let to = Coordinate::new(40.7614, -73.9776);

    let walk = estimate(from, to, TransportMode::Walking);
    let drive = estimate(from, to, TransportMode::Car);
    assert!((walk.distance_miles - 0.993).abs() < 0.01);
    assert_eq!(walk.eta_minutes, 13);
    assert_eq!(drive.eta_minutes, 2);

    let same = estimate(from, from, TransportMode::Walking);
    assert_eq!(same.distance_miles, 0.0);
    assert_eq!(same.eta_minutes, 1);
}

#[test]
fn mixed_mutations_keep_invariants() {
    let mut planner = sample_planner().with_search_mode(SearchMode::AddToItinerary);
    let now = Instant::now();

    for (date_offset, place) in [(0, "s1"), (1, "s5"), (2, "s8"), (0, "s6")] {
        planner.process(
            PlannerAction::SelectDate(today() + Duration::days(date_offset)),
            now,
        );
        planner.process(PlannerAction::ChoosePlace(place), now);

        let first = planner.current_day().unwrap().events[0].clone();
        let mut edited = first;
        edited.notes = Some(format!("visited {place}"));
        planner.process(PlannerAction::SaveEvent(edited), now);
        assert_invariants(planner.store());
    }

    assert_eq!(planner.store().day(today()).unwrap().events.len(), 9);
}

#[test]
fn seed_round_trips_through_json_file() {
    let days = sample_itineraries(today());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("itinerary.json");
    std::fs::write(&path, serde_json::to_string_pretty(&days).unwrap()).unwrap();

    let store = ItineraryStore::from_json_file(&path).unwrap();
    assert_eq!(store.days(), days.as_slice());
}

//! Built-in sample plan: today, tomorrow and the day after.

use chrono::{Datelike, Duration, NaiveDate};

use crate::model::{
    Category, Coordinate, DayItinerary, Event, EventId, EventOrigin, TravelMethod, TravelSegment,
};
use crate::model::EventOrigin::{SystemSuggested as Suggested, UserAuthored as Calendar};
use crate::model::TravelMethod::{Car, Transit, Walking};

/// Chip label for a day relative to `today`: "Today", "Tomorrow", or the
/// short weekday.
pub fn relative_day_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a").to_string(),
    }
}

pub fn day_of_month(date: NaiveDate) -> u32 {
    date.day()
}

struct SeedEvent<'a> {
    id: &'a str,
    title: &'a str,
    times: (&'a str, &'a str, &'a str),
    location: &'a str,
    at: (f64, f64),
    origin: EventOrigin,
    category: Category,
    description: &'a str,
    attendees: &'a [&'a str],
    reminders: &'a [&'a str],
    notes: Option<&'a str>,
}

fn build(seeds: &[SeedEvent<'_>]) -> Vec<Event> {
    seeds
        .iter()
        .enumerate()
        .map(|(i, s)| Event {
            id: EventId::new(s.id),
            number: i + 1,
            title: s.title.to_string(),
            start_time: s.times.0.to_string(),
            end_time: s.times.1.to_string(),
            duration: s.times.2.to_string(),
            location: s.location.to_string(),
            coordinate: Coordinate::new(s.at.0, s.at.1),
            origin: s.origin,
            description: Some(s.description.to_string()),
            attendees: list(s.attendees),
            reminders: list(s.reminders),
            notes: s.notes.map(str::to_string),
            category: s.category,
        })
        .collect()
}

fn list(items: &[&str]) -> Option<Vec<String>> {
    (!items.is_empty()).then(|| items.iter().map(|s| s.to_string()).collect())
}

fn leg(method: TravelMethod, duration: &str, distance: &str) -> TravelSegment {
    TravelSegment::new(method, duration).with_distance(distance)
}

pub fn sample_itineraries(today: NaiveDate) -> Vec<DayItinerary> {
    let tomorrow = today + Duration::days(1);
    let later = today + Duration::days(2);

    vec![
        DayItinerary {
            date: today,
            label: "Today".to_string(),
            events: build(&[
                SeedEvent {
                    id: "e1",
                    title: "Morning Run",
                    times: ("7:00 AM", "7:45 AM", "45 min"),
                    location: "Central Park West",
                    at: (40.7829, -73.9654),
                    origin: Suggested,
                    category: Category::Fitness,
                    description: "Suggested morning run based on your fitness goal. Route along the reservoir loop.",
                    attendees: &[],
                    reminders: &[],
                    notes: Some("Bring water bottle. Weather: 62°F, partly cloudy."),
                },
                SeedEvent {
                    id: "e2",
                    title: "Team Standup",
                    times: ("9:00 AM", "9:30 AM", "30 min"),
                    location: "WeWork, 5th Ave",
                    at: (40.7484, -73.9857),
                    origin: Calendar,
                    category: Category::Work,
                    description: "Daily standup with engineering team. Discuss sprint progress and blockers.",
                    attendees: &["Sarah Chen", "Mike Rivera", "Priya Patel"],
                    reminders: &["15 min before"],
                    notes: None,
                },
                SeedEvent {
                    id: "e3",
                    title: "Coffee with Alex",
                    times: ("10:30 AM", "11:15 AM", "45 min"),
                    location: "Blue Bottle, Bryant Park",
                    at: (40.7536, -73.9832),
                    origin: Suggested,
                    category: Category::Social,
                    description: "Catch up with Alex about the new project opportunity. Scheduled during your free slot.",
                    attendees: &["Alex Kim"],
                    reminders: &[],
                    notes: None,
                },
                SeedEvent {
                    id: "e4",
                    title: "Lunch Break",
                    times: ("12:30 PM", "1:15 PM", "45 min"),
                    location: "Sweetgreen, Midtown",
                    at: (40.7549, -73.9840),
                    origin: Suggested,
                    category: Category::Food,
                    description: "A healthy lunch spot near your next meeting. Try the Harvest Bowl!",
                    attendees: &[],
                    reminders: &[],
                    notes: None,
                },
                SeedEvent {
                    id: "e5",
                    title: "Client Presentation",
                    times: ("2:00 PM", "3:30 PM", "1h 30m"),
                    location: "Acme Corp, Park Ave",
                    at: (40.7527, -73.9772),
                    origin: Calendar,
                    category: Category::Work,
                    description: "Q1 results presentation for Acme Corp stakeholders. Slides finalized yesterday.",
                    attendees: &["Jennifer Moss", "Tom Wang", "Client Team"],
                    reminders: &["30 min before", "1 hour before"],
                    notes: Some("Bring printed handouts. Projector in Room 4B."),
                },
                SeedEvent {
                    id: "e6",
                    title: "Pick up Dry Cleaning",
                    times: ("4:30 PM", "4:45 PM", "15 min"),
                    location: "Quick Clean, Lexington",
                    at: (40.7505, -73.9755),
                    origin: Suggested,
                    category: Category::Errand,
                    description: "Your suit has been ready since Tuesday. The shop closes at 6 PM.",
                    attendees: &[],
                    reminders: &[],
                    notes: None,
                },
                SeedEvent {
                    id: "e7",
                    title: "Yoga Class",
                    times: ("6:00 PM", "7:00 PM", "1 hr"),
                    location: "Y7 Studio, Flatiron",
                    at: (40.7401, -73.9903),
                    origin: Calendar,
                    category: Category::Fitness,
                    description: "Hot yoga flow class. Bring mat and towel.",
                    attendees: &[],
                    reminders: &["30 min before"],
                    notes: None,
                },
            ]),
            travel: vec![
                leg(Car, "12 min", "3.2 mi"),
                leg(Walking, "8 min", "0.4 mi"),
                leg(Walking, "5 min", "0.2 mi"),
                leg(Transit, "10 min", "1.1 mi"),
                leg(Walking, "6 min", "0.3 mi"),
                leg(Transit, "15 min", "1.8 mi"),
            ],
        },
        DayItinerary {
            date: tomorrow,
            label: "Tomorrow".to_string(),
            events: build(&[
                SeedEvent {
                    id: "e8",
                    title: "Brunch with Mom",
                    times: ("10:00 AM", "11:30 AM", "1h 30m"),
                    location: "Sarabeth's, UWS",
                    at: (40.7870, -73.9754),
                    origin: Calendar,
                    category: Category::Personal,
                    description: "Monthly brunch catch-up. She mentioned wanting to try the lemon ricotta pancakes.",
                    attendees: &["Mom"],
                    reminders: &[],
                    notes: None,
                },
                SeedEvent {
                    id: "e9",
                    title: "Grocery Shopping",
                    times: ("12:30 PM", "1:15 PM", "45 min"),
                    location: "Trader Joe's, 72nd St",
                    at: (40.7785, -73.9802),
                    origin: Suggested,
                    category: Category::Errand,
                    description: "Added based on your meal prep schedule. List: chicken, broccoli, rice, avocados.",
                    attendees: &[],
                    reminders: &[],
                    notes: None,
                },
                SeedEvent {
                    id: "e10",
                    title: "Deep Work Session",
                    times: ("2:00 PM", "4:30 PM", "2h 30m"),
                    location: "Home Office",
                    at: (40.7831, -73.9712),
                    origin: Suggested,
                    category: Category::Work,
                    description: "Time blocked for focused work. No meetings scheduled.",
                    attendees: &[],
                    reminders: &[],
                    notes: Some("Work on the Q2 roadmap document."),
                },
                SeedEvent {
                    id: "e11",
                    title: "Dinner Reservation",
                    times: ("7:30 PM", "9:00 PM", "1h 30m"),
                    location: "Carbone, Greenwich Village",
                    at: (40.7264, -73.9994),
                    origin: Calendar,
                    category: Category::Personal,
                    description: "Anniversary dinner. Reservation for 2 under your name.",
                    attendees: &["Jordan"],
                    reminders: &["1 hour before"],
                    notes: None,
                },
            ]),
            travel: vec![
                leg(Walking, "10 min", "0.5 mi"),
                leg(Car, "8 min", "1.2 mi"),
                leg(Transit, "25 min", "4.5 mi"),
            ],
        },
        DayItinerary {
            date: later,
            label: later.format("%m-%d").to_string(),
            events: build(&[
                SeedEvent {
                    id: "e12",
                    title: "Doctor's Appointment",
                    times: ("9:00 AM", "9:45 AM", "45 min"),
                    location: "NYU Langone, 1st Ave",
                    at: (40.7421, -73.9739),
                    origin: Calendar,
                    category: Category::Personal,
                    description: "Annual checkup with Dr. Martinez. Bring insurance card.",
                    attendees: &[],
                    reminders: &["1 day before", "1 hour before"],
                    notes: None,
                },
                SeedEvent {
                    id: "e13",
                    title: "Sprint Planning",
                    times: ("11:00 AM", "12:30 PM", "1h 30m"),
                    location: "WeWork, 5th Ave",
                    at: (40.7484, -73.9857),
                    origin: Calendar,
                    category: Category::Work,
                    description: "Q2 sprint planning session. Review backlog and assign stories.",
                    attendees: &["Full Engineering Team"],
                    reminders: &[],
                    notes: None,
                },
                SeedEvent {
                    id: "e14",
                    title: "Library Book Return",
                    times: ("1:30 PM", "1:45 PM", "15 min"),
                    location: "NYPL, 42nd St",
                    at: (40.7532, -73.9822),
                    origin: Suggested,
                    category: Category::Errand,
                    description: "Books are due today. Reminder to avoid late fees.",
                    attendees: &[],
                    reminders: &[],
                    notes: None,
                },
            ]),
            travel: vec![
                leg(Transit, "18 min", "2.1 mi"),
                leg(Walking, "12 min", "0.6 mi"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn sample_days_are_consistent() {
        let days = sample_itineraries(today());
        let counts: Vec<_> = days.iter().map(|d| d.events.len()).collect();
        assert_eq!(counts, vec![7, 4, 3]);
        for day in &days {
            assert!(day.is_consistent(), "{} is inconsistent", day.date);
        }
        assert_eq!(days[2].label, "10-18");
    }

    #[test]
    fn ids_are_unique() {
        let days = sample_itineraries(today());
        let mut ids: Vec<_> = days
            .iter()
            .flat_map(|d| d.events.iter().map(|e| e.id.clone()))
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn relative_labels() {
        let t = today();
        assert_eq!(relative_day_label(t, t), "Today");
        assert_eq!(relative_day_label(t + Duration::days(1), t), "Tomorrow");
        assert_eq!(relative_day_label(t + Duration::days(2), t), "Sun");
        assert_eq!(day_of_month(t + Duration::days(2)), 18);
    }
}

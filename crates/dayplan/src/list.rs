use crate::model::{DayItinerary, Event, TravelSegment};

/// One row of the itinerary list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListItem<'a> {
    Event { index: usize, event: &'a Event },
    Travel(&'a TravelSegment),
}

/// Events interleaved with the leg that follows each of them. Borrowed
/// straight from the day, so it always matches the store.
pub fn day_items(day: &DayItinerary) -> Vec<ListItem<'_>> {
    let mut items = Vec::with_capacity(day.events.len() * 2);
    let last = day.events.len().saturating_sub(1);

    for (index, event) in day.events.iter().enumerate() {
        items.push(ListItem::Event { index, event });
        if index < last {
            if let Some(segment) = day.travel.get(index) {
                items.push(ListItem::Travel(segment));
            }
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::day;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn shape(items: &[ListItem<'_>]) -> String {
        items
            .iter()
            .map(|item| match item {
                ListItem::Event { event, .. } => event.id.to_string(),
                ListItem::Travel(seg) => format!("[{}]", seg.duration),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn interleaves_travel() {
        let day = day(date(), &["a", "b", "c"]);
        assert_eq!(shape(&day_items(&day)), "a [1 min] b [2 min] c");
    }

    #[test]
    fn single_and_empty_days() {
        assert_eq!(shape(&day_items(&day(date(), &["a"]))), "a");
        assert!(day_items(&DayItinerary::new(date(), "Empty")).is_empty());
    }

    #[test]
    fn event_indices_follow_order() {
        let day = day(date(), &["a", "b"]);
        let indices: Vec<_> = day_items(&day)
            .into_iter()
            .filter_map(|item| match item {
                ListItem::Event { index, event } => Some((index, event.number)),
                ListItem::Travel(_) => None,
            })
            .collect();
        assert_eq!(indices, vec![(0, 1), (1, 2)]);
    }
}

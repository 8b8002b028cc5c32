//! Form state for editing an event from the detail sheet.

use crate::model::{Category, Event};

/// Editable copy of an event's text fields.
#[derive(Debug, Clone, PartialEq)]
pub struct EventForm {
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub location: String,
    pub description: String,
    pub notes: String,
    pub category: Category,
    /// Comma-separated names.
    pub attendees: String,
    /// Comma-separated reminder labels.
    pub reminders: String,
}

impl EventForm {
    pub fn for_edit(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            start_time: event.start_time.clone(),
            end_time: event.end_time.clone(),
            duration: event.duration.clone(),
            location: event.location.clone(),
            description: event.description.clone().unwrap_or_default(),
            notes: event.notes.clone().unwrap_or_default(),
            category: event.category,
            attendees: event.attendees().join(", "),
            reminders: event.reminders().join(", "),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Builds the replacement record. Identity, position, coordinate and
    /// origin come from `original`.
    pub fn apply(&self, original: &Event) -> Event {
        Event {
            id: original.id.clone(),
            number: original.number,
            title: self.title.trim().to_string(),
            start_time: self.start_time.trim().to_string(),
            end_time: self.end_time.trim().to_string(),
            duration: self.duration.trim().to_string(),
            location: self.location.trim().to_string(),
            coordinate: original.coordinate,
            origin: original.origin,
            description: optional_text(&self.description),
            attendees: optional_list(&self.attendees),
            reminders: optional_list(&self.reminders),
            notes: optional_text(&self.notes),
            category: self.category,
        }
    }
}

fn optional_text(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

fn optional_list(s: &str) -> Option<Vec<String>> {
    let items: Vec<String> = s
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();

    (!items.is_empty()).then_some(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::event;
    use pretty_assertions::assert_eq;

    #[test]
    fn untouched_form_round_trips() {
        let mut original = event("e2", 2);
        original.attendees = Some(vec!["Sarah Chen".to_string(), "Mike Rivera".to_string()]);
        original.notes = Some("Bring slides".to_string());

        let form = EventForm::for_edit(&original);
        assert_eq!(form.attendees, "Sarah Chen, Mike Rivera");
        assert_eq!(form.apply(&original), original);
    }

    #[test]
    fn edits_are_normalized() {
        let original = event("e2", 2);
        let mut form = EventForm::for_edit(&original);
        form.title = "  Standup  ".to_string();
        form.reminders = "15 min before, , 1 hour before ".to_string();
        form.description = "   ".to_string();
        form.category = Category::Social;

        let updated = form.apply(&original);
        assert_eq!(updated.title, "Standup");
        assert_eq!(
            updated.reminders,
            Some(vec!["15 min before".to_string(), "1 hour before".to_string()])
        );
        assert_eq!(updated.description, None);
        assert_eq!(updated.category, Category::Social);
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.number, 2);
    }

    #[test]
    fn title_is_required() {
        let mut form = EventForm::for_edit(&event("e1", 1));
        assert!(form.is_valid());
        form.title = " ".to_string();
        assert!(!form.is_valid());
    }
}

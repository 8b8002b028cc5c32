use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const TOAST_TTL: Duration = Duration::from_secs(3);
const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub created: Instant,
}

/// Short-lived status messages. Fire and forget.
#[derive(Debug, Default)]
pub struct Toasts {
    queue: VecDeque<Toast>,
}

impl Toasts {
    pub fn push(&mut self, message: impl Into<String>, now: Instant) {
        if self.queue.len() == MAX_TOASTS {
            self.queue.pop_front();
        }
        self.queue.push_back(Toast {
            message: message.into(),
            created: now,
        });
    }

    pub fn prune(&mut self, now: Instant) {
        self.queue
            .retain(|t| now.saturating_duration_since(t.created) < TOAST_TTL);
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.queue.back()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// When the oldest toast expires.
    pub fn next_expiry(&self) -> Option<Instant> {
        self.queue.front().map(|t| t.created + TOAST_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toasts_expire() {
        let t0 = Instant::now();
        let mut toasts = Toasts::default();
        toasts.push("Event updated", t0);
        toasts.push("MoMA added to itinerary", t0 + Duration::from_secs(2));

        assert_eq!(toasts.latest().unwrap().message, "MoMA added to itinerary");
        assert_eq!(toasts.next_expiry(), Some(t0 + TOAST_TTL));

        toasts.prune(t0 + Duration::from_secs(4));
        assert_eq!(toasts.len(), 1);
        toasts.prune(t0 + Duration::from_secs(6));
        assert!(toasts.is_empty());
    }

    #[test]
    fn queue_is_bounded() {
        let t0 = Instant::now();
        let mut toasts = Toasts::default();
        for i in 0..10 {
            toasts.push(format!("toast {i}"), t0);
        }
        assert_eq!(toasts.len(), MAX_TOASTS);
        assert_eq!(toasts.latest().unwrap().message, "toast 9");
    }
}

//! The planner chat panel.
//!
//! Replies come from a [`SuggestionProvider`]. The panel does not block:
//! a reply is scheduled for a point in time and applied by [`ChatPanel::poll`]
//! once it is due. Every open/close starts a new session, and a reply
//! scheduled in an older session is dropped instead of applied.

use std::time::{Duration, Instant};

use tracing::{debug, info};

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);

const GREETING: &str = "Hey! 👋 I'm your day planner. I can help you organize your schedule, \
find the best routes, or suggest activities. What would you like to plan?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Agent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub suggestion: Option<Suggestion>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content.into(), None)
    }

    pub fn agent(content: impl Into<String>, suggestion: Option<Suggestion>) -> Self {
        Self::new(Role::Agent, content.into(), suggestion)
    }

    fn new(role: Role, content: String, suggestion: Option<Suggestion>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content,
            suggestion,
        }
    }
}

/// What a provider answers with.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentReply {
    pub content: String,
    pub suggestion: Option<Suggestion>,
}

/// Produces a contextual suggestion from the conversation so far.
pub trait SuggestionProvider {
    /// `None` means the provider has nothing to say.
    fn reply(&self, history: &[ChatMessage]) -> Option<AgentReply>;

    /// How long the panel shows the typing indicator before the reply lands.
    fn delay(&self) -> Duration {
        DEFAULT_REPLY_DELAY
    }
}

/// Always answers with the same plan after a fixed delay.
#[derive(Debug, Clone)]
pub struct ScriptedProvider {
    delay: Duration,
}

impl Default for ScriptedProvider {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY)
    }
}

impl ScriptedProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl SuggestionProvider for ScriptedProvider {
    fn reply(&self, history: &[ChatMessage]) -> Option<AgentReply> {
        if !history.iter().any(|m| m.role == Role::User) {
            return None;
        }

        Some(AgentReply {
            content: "Great idea! I've looked at your calendar and found a couple of good time \
                      slots. Here's what I suggest:"
                .to_string(),
            suggestion: Some(Suggestion {
                title: "Suggested Plan".to_string(),
                items: vec![
                    "11:30 AM – Coffee meeting at Blue Bottle (15 min walk from standup)"
                        .to_string(),
                    "12:30 PM – Lunch at Sweetgreen nearby".to_string(),
                    "Free block 4-5 PM for the new task".to_string(),
                ],
            }),
        })
    }

    fn delay(&self) -> Duration {
        self.delay
    }
}

#[derive(Debug)]
struct PendingReply {
    session: u64,
    due: Instant,
}

pub struct ChatPanel {
    provider: Box<dyn SuggestionProvider>,
    messages: Vec<ChatMessage>,
    pub input: String,
    pending: Option<PendingReply>,
    session: u64,
}

impl ChatPanel {
    pub fn new(provider: Box<dyn SuggestionProvider>) -> Self {
        Self {
            provider,
            messages: vec![ChatMessage::agent(GREETING, None)],
            input: String::new(),
            pending: None,
            session: 0,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|p| p.session == self.session)
    }

    pub fn can_send(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// When the pending reply is due, so the caller can schedule a repaint.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Starts a new session. Called whenever the panel is shown.
    pub fn open(&mut self) {
        self.session += 1;
        self.pending = None;
    }

    /// Ends the session and drops any reply that has not landed yet.
    pub fn close(&mut self) {
        if self.pending.take().is_some() {
            debug!("Chat: dropped pending reply on close");
        }
        self.session += 1;
    }

    /// Sends the current input. Blank input is ignored.
    pub fn send(&mut self, now: Instant) -> bool {
        let text = self.input.trim();
        if text.is_empty() {
            return false;
        }

        self.messages.push(ChatMessage::user(text));
        self.input.clear();
        self.pending = Some(PendingReply {
            session: self.session,
            due: now + self.provider.delay(),
        });
        info!("Chat: message sent, reply scheduled");
        true
    }

    /// Applies the pending reply if it is due and still belongs to the
    /// current session. Returns true if a message was added.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(pending) = &self.pending else {
            return false;
        };

        if pending.session != self.session {
            self.pending = None;
            return false;
        }

        if now < pending.due {
            return false;
        }

        self.pending = None;
        match self.provider.reply(&self.messages) {
            Some(reply) => {
                self.messages
                    .push(ChatMessage::agent(reply.content, reply.suggestion));
                true
            }
            None => {
                debug!("Chat: provider had no reply");
                false
            }
        }
    }
}

impl Default for ChatPanel {
    fn default() -> Self {
        Self::new(Box::new(ScriptedProvider::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn panel() -> ChatPanel {
        let mut panel = ChatPanel::default();
        panel.open();
        panel
    }

    #[test]
    fn starts_with_greeting() {
        let panel = panel();
        assert_eq!(panel.messages().len(), 1);
        assert_eq!(panel.messages()[0].role, Role::Agent);
        assert!(!panel.is_typing());
    }

    #[test]
    fn blank_input_is_not_sent() {
        let mut panel = panel();
        panel.input = "   ".to_string();
        assert!(!panel.can_send());
        assert!(!panel.send(Instant::now()));
        assert_eq!(panel.messages().len(), 1);
    }

    #[test]
    fn reply_lands_after_delay() {
        let mut panel = panel();
        let t0 = Instant::now();
        panel.input = " Plan my afternoon ".to_string();
        assert!(panel.send(t0));

        assert_eq!(panel.messages()[1].content, "Plan my afternoon");
        assert!(panel.input.is_empty());
        assert!(panel.is_typing());
        assert_eq!(panel.next_due(), Some(t0 + DEFAULT_REPLY_DELAY));

        assert!(!panel.poll(t0 + Duration::from_millis(1000)));
        assert!(panel.poll(t0 + DEFAULT_REPLY_DELAY));
        assert!(!panel.is_typing());

        let reply = &panel.messages()[2];
        assert_eq!(reply.role, Role::Agent);
        let suggestion = reply.suggestion.as_ref().unwrap();
        assert_eq!(suggestion.title, "Suggested Plan");
        assert_eq!(suggestion.items.len(), 3);

        assert!(!panel.poll(t0 + Duration::from_secs(10)));
        assert_eq!(panel.messages().len(), 3);
    }

    #[test]
    fn closing_cancels_pending_reply() {
        let mut panel = panel();
        let t0 = Instant::now();
        panel.input = "hello".to_string();
        panel.send(t0);

        panel.close();
        assert!(!panel.poll(t0 + Duration::from_secs(5)));
        panel.open();
        assert!(!panel.poll(t0 + Duration::from_secs(5)));
        assert_eq!(panel.messages().len(), 2);
        assert!(!panel.is_typing());
    }

    struct Silent;

    impl SuggestionProvider for Silent {
        fn reply(&self, _history: &[ChatMessage]) -> Option<AgentReply> {
            None
        }

        fn delay(&self) -> Duration {
            Duration::ZERO
        }
    }

    #[test]
    fn provider_can_decline() {
        let mut panel = ChatPanel::new(Box::new(Silent));
        let t0 = Instant::now();
        panel.input = "anything".to_string();
        panel.send(t0);
        assert!(!panel.poll(t0));
        assert!(!panel.is_typing());
        assert_eq!(panel.messages().len(), 2);
    }

    #[test]
    fn scripted_provider_needs_a_user_message() {
        let provider = ScriptedProvider::new(Duration::from_millis(10));
        assert!(provider.reply(&[ChatMessage::agent("hi", None)]).is_none());
        assert!(provider.reply(&[ChatMessage::user("hi")]).is_some());
        assert_eq!(provider.delay(), Duration::from_millis(10));
    }
}

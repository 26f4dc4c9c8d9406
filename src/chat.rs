use crate::models::{ChatMessage, ChatResponse, Sender};
use rand::Rng;
use std::time::Duration;

pub const WELCOME_MESSAGE: &str = "Hello! I'm your Nexus. How can I help you today?";

pub const FALLBACK_RESPONSE: &str =
    "I'm here to support you. Would you like to explore our resources or talk to a professional?";

pub const TYPING_INDICATOR: &str = "...";

#[derive(Debug)]
pub struct ChatCategory {
    pub name: &'static str,
    pub patterns: &'static [&'static str],
    pub responses: &'static [&'static str],
}

/// Evaluated top to bottom; the first category with a matching pattern wins.
pub static CATEGORIES: [ChatCategory; 4] = [
    ChatCategory {
        name: "greetings",
        patterns: &["hello", "hi", "hey", "good morning", "good afternoon", "good evening"],
        responses: &[
            "Hi! How can I help you today?",
            "Hello! What brings you here today?",
            "Hey there! How are you feeling?",
        ],
    },
    ChatCategory {
        name: "anxiety",
        patterns: &["anxiety", "anxious", "worried", "stress", "stressed"],
        responses: &[
            "I understand anxiety can be overwhelming. Would you like to learn some coping techniques?",
            "It's common to feel anxious. Let's explore some calming exercises together.",
            "I'm here to help you manage your anxiety. Would you like to try a breathing exercise?",
        ],
    },
    ChatCategory {
        name: "depression",
        patterns: &["depression", "depressed", "sad", "hopeless", "down"],
        responses: &[
            "I'm sorry you're feeling this way. Would you like to talk to a counselor?",
            "Depression can be really tough. Let's explore some resources that might help.",
            "You're not alone in this. Would you like to learn about professional support options?",
        ],
    },
    ChatCategory {
        name: "help",
        patterns: &["help", "support", "guidance", "assist"],
        responses: &[
            "I'm here to help! What kind of support are you looking for?",
            "I can help you with various mental health resources. What specific area interests you?",
            "Let me know what you need help with, and I'll guide you to the right resources.",
        ],
    },
];

impl ChatCategory {
    pub fn matches(&self, lowered: &str) -> bool {
        self.patterns.iter().any(|pattern| lowered.contains(pattern))
    }
}

pub fn match_category(message: &str) -> Option<&'static ChatCategory> {
    let lowered = message.to_lowercase();
    CATEGORIES.iter().find(|category| category.matches(&lowered))
}

pub fn classify<R: Rng>(message: &str, rng: &mut R) -> &'static str {
    match match_category(message) {
        Some(category) => category.responses[rng.random_range(0..category.responses.len())],
        None => FALLBACK_RESPONSE,
    }
}

/// Picks the simulated typing delay, uniformly in `[min, max)`.
pub fn reply_delay<R: Rng>(min: Duration, max: Duration, rng: &mut R) -> Duration {
    let min_ms = u64::try_from(min.as_millis()).unwrap_or(u64::MAX);
    let max_ms = u64::try_from(max.as_millis())
        .unwrap_or(u64::MAX)
        .max(min_ms.saturating_add(1));
    if max_ms <= min_ms {
        return Duration::from_millis(min_ms);
    }
    Duration::from_millis(rng.random_range(min_ms..max_ms))
}

/// Transcript plus the widget flags; one reply in flight at a time.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pending: bool,
    open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Accepted,
    Busy,
    Empty,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                text: WELCOME_MESSAGE.to_string(),
                sender: Sender::Bot,
            }],
            pending: false,
            open: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Echoes the user's text and shows the typing indicator.
    pub fn submit(&mut self, text: &str) -> Submission {
        let text = text.trim();
        if text.is_empty() {
            return Submission::Empty;
        }
        if self.pending {
            return Submission::Busy;
        }
        self.pending = true;
        self.messages.push(ChatMessage {
            text: text.to_string(),
            sender: Sender::User,
        });
        self.messages.push(ChatMessage {
            text: TYPING_INDICATOR.to_string(),
            sender: Sender::Bot,
        });
        Submission::Accepted
    }

    /// Replaces the typing indicator with the reply and clears the pending flag.
    pub fn complete(&mut self, reply: &str) {
        if !self.pending {
            return;
        }
        if let Some(index) = self
            .messages
            .iter()
            .rposition(|message| message.sender == Sender::Bot && message.text == TYPING_INDICATOR)
        {
            self.messages.remove(index);
        }
        self.messages.push(ChatMessage {
            text: reply.to_string(),
            sender: Sender::Bot,
        });
        self.pending = false;
    }

    pub fn to_response(&self) -> ChatResponse {
        ChatResponse {
            messages: self.messages.clone(),
            pending: self.pending,
            open: self.open,
        }
    }
}

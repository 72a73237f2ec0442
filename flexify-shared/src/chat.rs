//! Local chat transcript for the Flex AI assistant page.
//!
//! The assistant does not call a model yet: every prompt is answered with a
//! canned reply after [`BOT_REPLY_DELAY_MS`].

use serde::{Deserialize, Serialize};

use crate::models::Timestamp;

/// Delay before the simulated assistant reply is appended.
pub const BOT_REPLY_DELAY_MS: u32 = 1_500;

/// First message shown when the chat opens.
pub const GREETING: &str = "Hello! I'm Flex AI, your personal fitness and nutrition assistant. How can I help you today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatSender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: ChatSender,
    pub content: String,
    pub timestamp: Timestamp,
}

/// Ordered list of chat messages with monotonically increasing ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatTranscript {
    /// A transcript seeded with the assistant greeting.
    #[must_use]
    pub fn new() -> Self {
        let mut transcript = Self {
            messages: Vec::new(),
            next_id: 1,
        };
        transcript.push(ChatSender::Bot, GREETING.to_string());
        transcript
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Append a user prompt. Blank input is ignored and yields `None`.
    pub fn push_user(&mut self, input: &str) -> Option<ChatMessage> {
        if input.trim().is_empty() {
            return None;
        }
        Some(self.push(ChatSender::User, input.to_string()))
    }

    pub fn push_bot(&mut self, content: impl Into<String>) -> ChatMessage {
        self.push(ChatSender::Bot, content.into())
    }

    fn push(&mut self, sender: ChatSender, content: String) -> ChatMessage {
        let message = ChatMessage {
            id: self.next_id,
            sender,
            content,
            timestamp: Timestamp::now(),
        };
        self.next_id += 1;
        self.messages.push(message.clone());
        message
    }
}

/// Canned assistant answer echoing the prompt.
#[must_use]
pub fn placeholder_reply(prompt: &str) -> String {
    format!(
        "I understand you're asking about: \"{prompt}\". This is where I would provide a helpful response based on your fitness and nutrition needs. I'm currently in development mode!"
    )
}

/// Whether the send button is enabled.
#[must_use]
pub fn can_send(input: &str, typing: bool) -> bool {
    !typing && !input.trim().is_empty()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickActionCategory {
    Workout,
    Nutrition,
    Progress,
    Goals,
}

/// Suggestion chip that pre-fills the chat input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub category: QuickActionCategory,
}

const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        label: "Create workout plan",
        category: QuickActionCategory::Workout,
    },
    QuickAction {
        label: "Suggest healthy meals",
        category: QuickActionCategory::Nutrition,
    },
    QuickAction {
        label: "Track my progress",
        category: QuickActionCategory::Progress,
    },
    QuickAction {
        label: "Set fitness goals",
        category: QuickActionCategory::Goals,
    },
];

#[must_use]
pub fn quick_actions() -> &'static [QuickAction] {
    &QUICK_ACTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_starts_with_greeting() {
        let transcript = ChatTranscript::new();
        assert_eq!(transcript.len(), 1);
        let greeting = transcript.last().unwrap();
        assert_eq!(greeting.sender, ChatSender::Bot);
        assert_eq!(greeting.content, GREETING);
        assert_eq!(greeting.id, 1);
    }

    #[test]
    fn blank_prompts_are_rejected() {
        let mut transcript = ChatTranscript::new();
        assert!(transcript.push_user("").is_none());
        assert!(transcript.push_user("   \n\t").is_none());
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn prompt_keeps_original_text() {
        let mut transcript = ChatTranscript::new();
        let message = transcript.push_user("  leg day?  ").unwrap();
        assert_eq!(message.content, "  leg day?  ");
        assert_eq!(message.sender, ChatSender::User);
    }

    #[test]
    fn ids_stay_unique_when_prompts_overlap() {
        let mut transcript = ChatTranscript::new();
        let first = transcript.push_user("first").unwrap();
        let second = transcript.push_user("second").unwrap();
        let reply_one = transcript.push_bot(placeholder_reply("first"));
        let reply_two = transcript.push_bot(placeholder_reply("second"));

        let ids: Vec<u64> = transcript.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, first.id, second.id, reply_one.id, reply_two.id]);
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn placeholder_reply_echoes_prompt() {
        let reply = placeholder_reply("Create workout plan");
        assert!(reply.starts_with("I understand you're asking about: \"Create workout plan\"."));
        assert!(reply.ends_with("I'm currently in development mode!"));
    }

    #[test]
    fn send_is_disabled_while_typing_or_blank() {
        assert!(can_send("squats", false));
        assert!(!can_send("squats", true));
        assert!(!can_send("   ", false));
    }

    #[test]
    fn quick_actions_cover_each_category() {
        let labels: Vec<&str> = quick_actions().iter().map(|action| action.label).collect();
        assert_eq!(
            labels,
            vec![
                "Create workout plan",
                "Suggest healthy meals",
                "Track my progress",
                "Set fitness goals"
            ]
        );
        assert_eq!(quick_actions()[1].category, QuickActionCategory::Nutrition);
    }
}

//! Assistant Chat Session
//!
//! Append-only message log scoped to one section. Switching section wipes
//! the log; nothing persists across reloads. A send never fails: transport
//! errors become a fixed assistant message.

use serde::{Deserialize, Serialize};

use crate::api::AgentApi;
use crate::error::DomainResult;
use crate::models::AgentReply;
use crate::nav::Section;

/// Shown when the agent endpoint cannot be reached
pub const OFFLINE_REPLY: &str = "Backend not connected yet. Add your API key to start chatting.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub role: ChatRole,
    pub content: String,
}

/// A user turn that has been logged and is awaiting the agent
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTurn {
    pub section: Section,
    pub message: String,
    generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatSession {
    section: Section,
    messages: Vec<ChatMessage>,
    pending: bool,
    next_id: u64,
    /// Bumped on every reset so replies for a wiped log are dropped
    generation: u64,
}

impl ChatSession {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            ..Self::default()
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Move to another section; the log is cleared only when it actually changes
    pub fn switch_section(&mut self, section: Section) {
        if section != self.section {
            self.section = section;
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        self.messages.clear();
        self.pending = false;
        self.generation += 1;
    }

    /// Log the user turn. Returns None for blank text or while a reply is outstanding.
    pub fn begin_send(&mut self, text: &str) -> Option<PendingTurn> {
        if text.trim().is_empty() || self.pending {
            return None;
        }
        self.push(ChatRole::User, text.to_string());
        self.pending = true;
        Some(PendingTurn {
            section: self.section,
            message: text.to_string(),
            generation: self.generation,
        })
    }

    /// Append the assistant turn for `turn`. Stale turns (log reset meanwhile) are ignored.
    pub fn complete(&mut self, turn: &PendingTurn, reply: DomainResult<AgentReply>) -> bool {
        if turn.generation != self.generation {
            return false;
        }
        let content = match reply {
            Ok(reply) => reply.text(),
            Err(e) => {
                log::warn!("[CHAT] agent {} unreachable: {}", turn.section.id(), e);
                OFFLINE_REPLY.to_string()
            }
        };
        self.push(ChatRole::Assistant, content);
        self.pending = false;
        true
    }

    /// Full round trip: log, ask, append reply
    pub async fn send<A: AgentApi + ?Sized>(&mut self, api: &A, text: &str) -> bool {
        let Some(turn) = self.begin_send(text) else {
            return false;
        };
        let reply = api.ask(turn.section, &turn.message).await;
        self.complete(&turn, reply)
    }

    fn push(&mut self, role: ChatRole, content: String) {
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: self.next_id,
            role,
            content,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;
    use async_trait::async_trait;
    use std::cell::RefCell;

    struct ScriptedAgent {
        reply: DomainResult<AgentReply>,
        asked: RefCell<Vec<(Section, String)>>,
    }

    #[async_trait(?Send)]
    impl AgentApi for ScriptedAgent {
        async fn ask(&self, section: Section, message: &str) -> DomainResult<AgentReply> {
            self.asked.borrow_mut().push((section, message.to_string()));
            self.reply.clone()
        }
    }

    fn agent(reply: DomainResult<AgentReply>) -> ScriptedAgent {
        ScriptedAgent { reply, asked: RefCell::new(Vec::new()) }
    }

    #[tokio::test]
    async fn test_send_appends_user_then_assistant() {
        let api = agent(Ok(AgentReply { response: Some("Margin is 21%".into()), detail: None }));
        let mut chat = ChatSession::new(Section::Finance);

        assert!(chat.send(&api, "What's our profit margin?").await);

        let roles: Vec<ChatRole> = chat.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![ChatRole::User, ChatRole::Assistant]);
        assert_eq!(chat.messages()[1].content, "Margin is 21%");
        assert_eq!(api.asked.borrow()[0], (Section::Finance, "What's our profit margin?".to_string()));
        assert!(!chat.is_pending());
    }

    #[tokio::test]
    async fn test_transport_failure_appends_fallback() {
        let api = agent(Err(DomainError::Network("connection refused".into())));
        let mut chat = ChatSession::new(Section::Hr);

        assert!(chat.send(&api, "Who is on leave?").await);
        assert_eq!(chat.messages().last().unwrap().content, OFFLINE_REPLY);
    }

    #[tokio::test]
    async fn test_detail_reply_is_shown() {
        let api = agent(Ok(AgentReply { response: None, detail: Some("Message cannot be empty".into()) }));
        let mut chat = ChatSession::new(Section::Sales);
        chat.send(&api, "hi").await;
        assert_eq!(chat.messages()[1].content, "Message cannot be empty");
    }

    #[test]
    fn test_blank_and_concurrent_sends_are_ignored() {
        let mut chat = ChatSession::new(Section::Dashboard);
        assert!(chat.begin_send("   ").is_none());
        assert!(chat.begin_send("first").is_some());
        assert!(chat.begin_send("second").is_none());
        assert_eq!(chat.messages().len(), 1);
    }

    #[test]
    fn test_switch_section_resets_and_drops_stale_reply() {
        let mut chat = ChatSession::new(Section::Finance);
        let turn = chat.begin_send("cash flow?").unwrap();

        chat.switch_section(Section::Finance);
        assert_eq!(chat.messages().len(), 1);

        chat.switch_section(Section::Hr);
        assert!(chat.is_empty());
        assert!(!chat.is_pending());

        let applied = chat.complete(&turn, Ok(AgentReply { response: Some("late".into()), detail: None }));
        assert!(!applied);
        assert!(chat.is_empty());
    }

    #[test]
    fn test_message_ids_increase() {
        let mut chat = ChatSession::new(Section::Legal);
        let turn = chat.begin_send("a").unwrap();
        chat.complete(&turn, Ok(AgentReply::default()));
        let ids: Vec<u64> = chat.messages().iter().map(|m| m.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}

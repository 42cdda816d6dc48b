//! Assistant agent request/reply bodies

use serde::{Deserialize, Serialize};

/// Body for `POST /agents/{section}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRequest {
    pub message: String,
}

/// Either a successful `{response}` or a FastAPI `{detail}` error body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentReply {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl AgentReply {
    pub const FALLBACK: &'static str = "Something went wrong.";

    /// Text to show: response, else detail, else a generic message
    pub fn text(&self) -> String {
        self.response
            .clone()
            .or_else(|| self.detail.clone())
            .unwrap_or_else(|| Self::FALLBACK.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_text_precedence() {
        let ok: AgentReply = serde_json::from_str(r#"{"agent":"Finance Agent","message":"hi","response":"Cash is fine"}"#).unwrap();
        assert_eq!(ok.text(), "Cash is fine");
        let err: AgentReply = serde_json::from_str(r#"{"detail":"Message cannot be empty"}"#).unwrap();
        assert_eq!(err.text(), "Message cannot be empty");
        assert_eq!(AgentReply::default().text(), AgentReply::FALLBACK);
    }
}

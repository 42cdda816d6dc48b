//! Domain Errors
//!
//! Shared error type for every layer. The host stringifies it at the Tauri
//! IPC boundary and the front end rebuilds it with `from_message`.

use serde::{Deserialize, Serialize};

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    Conflict(String),
    /// Transport failure or a non-success reply from the backend
    Network(String),
    Internal(String),
}

impl DomainError {
    pub fn not_found(what: &str, id: u32) -> Self {
        DomainError::NotFound(format!("{} {}", what, id))
    }

    /// True for failures of the transport itself, as opposed to a rejected request
    pub fn is_network(&self) -> bool {
        matches!(self, DomainError::Network(_))
    }

    /// Rebuild an error from its `Display` text. Unrecognized text is a network error.
    pub fn from_message(text: &str) -> Self {
        let text = text.trim();
        if let Some(msg) = text.strip_prefix("Not found: ") {
            DomainError::NotFound(msg.to_string())
        } else if let Some(msg) = text.strip_prefix("Invalid input: ") {
            DomainError::InvalidInput(msg.to_string())
        } else if let Some(msg) = text.strip_prefix("Conflict: ") {
            DomainError::Conflict(msg.to_string())
        } else if let Some(msg) = text.strip_prefix("Internal error: ") {
            DomainError::Internal(msg.to_string())
        } else if let Some(msg) = text.strip_prefix("Network error: ") {
            DomainError::Network(msg.to_string())
        } else {
            DomainError::Network(text.to_string())
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            DomainError::Network(msg) => write!(f, "Network error: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::not_found("Task", 7);
        assert_eq!(err.to_string(), "Not found: Task 7");
        assert!(!err.is_network());
        assert!(DomainError::Network("refused".into()).is_network());
    }

    #[test]
    fn test_error_from_message() {
        for err in [
            DomainError::not_found("Column", 3),
            DomainError::InvalidInput("Task title is required".into()),
            DomainError::Conflict("no project is open".into()),
            DomainError::Internal("bad body".into()),
            DomainError::Network("timed out".into()),
        ] {
            assert_eq!(DomainError::from_message(&err.to_string()), err);
        }
        assert_eq!(
            DomainError::from_message("invoke failed"),
            DomainError::Network("invoke failed".into())
        );
    }

    #[test]
    fn test_error_wire_format() {
        let err = DomainError::InvalidInput("amount".into());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "invalid_input", "message": "amount"}));
        let back: DomainError = serde_json::from_value(json).unwrap();
        assert_eq!(back, err);
    }
}

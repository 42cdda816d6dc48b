//! Session Command

use erp_core::{DomainResult, SessionInfo};

use super::call_no_args;

/// Signed-in user; anonymous when the host has no identity credentials
pub async fn get_session() -> DomainResult<SessionInfo> {
    call_no_args("get_session").await
}

/// Tail of the host log, oldest first
pub async fn recent_logs() -> DomainResult<Vec<String>> {
    call_no_args("recent_logs").await
}

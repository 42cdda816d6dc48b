//! Commands Layer
//!
//! Tauri command handlers that bridge the frontend to the API gateway.
//! Errors cross IPC as strings.

mod admin_cmd;
mod agent_cmd;
mod finance_cmd;
mod hr_cmd;
mod project_cmd;
mod session_cmd;

pub use admin_cmd::*;
pub use agent_cmd::*;
pub use finance_cmd::*;
pub use hr_cmd::*;
pub use project_cmd::*;
pub use session_cmd::*;

use erp_core::DomainError;

use crate::gateway::GatewayResult;

/// Log a failed gateway call and stringify it for the frontend
pub(crate) fn to_ipc<T>(operation: &str, result: GatewayResult<T>) -> Result<T, String> {
    result.map_err(|e| {
        log::warn!("{} failed: {}", operation, e);
        DomainError::from(e).to_string()
    })
}

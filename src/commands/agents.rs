//! Assistant Command

use async_trait::async_trait;
use serde::Serialize;

use erp_core::models::AgentReply;
use erp_core::{AgentApi, DomainResult, Section};

use super::call;

#[derive(Serialize)]
struct AskArgs<'a> {
    section: Section,
    message: &'a str,
}

#[derive(Clone, Copy, Default)]
pub struct TauriAgent;

#[async_trait(?Send)]
impl AgentApi for TauriAgent {
    async fn ask(&self, section: Section, message: &str) -> DomainResult<AgentReply> {
        call("ask_agent", &AskArgs { section, message }).await
    }
}

//! Section assistants

use reqwest::Method;

use erp_core::models::{AgentReply, AgentRequest};
use erp_core::Section;

use super::{ApiGateway, GatewayError, GatewayResult};

impl ApiGateway {
    /// `POST /agents/{section}`. An error reply that still carries `{detail}` is
    /// returned as a reply so the panel can show it.
    pub async fn ask_agent(&self, section: Section, message: &str) -> GatewayResult<AgentReply> {
        let request = AgentRequest {
            message: message.to_string(),
        };
        let path = format!("/agents/{}", section.id());
        match self.send_json::<_, AgentReply>(Method::POST, &path, &request).await {
            Ok(reply) => Ok(reply),
            Err(GatewayError::Status { detail, .. }) => Ok(AgentReply {
                response: None,
                detail: Some(detail),
            }),
            Err(e) => Err(e),
        }
    }
}

//! Platform administration (read-mostly)

use reqwest::Method;

use erp_core::models::{ActivityItem, Client, ClientRecord, PlatformSummary, RevenuePoint};

use super::{ApiGateway, GatewayResult};

impl ApiGateway {
    pub async fn platform_summary(&self) -> GatewayResult<PlatformSummary> {
        self.get_json("/admin/summary").await
    }

    pub async fn list_clients(&self) -> GatewayResult<Vec<ClientRecord>> {
        self.get_json("/admin/clients").await
    }

    /// Paid revenue per month for the trailing year
    pub async fn revenue_analytics(&self) -> GatewayResult<Vec<RevenuePoint>> {
        self.get_json("/admin/analytics/revenue").await
    }

    pub async fn recent_activity(&self, limit: u32) -> GatewayResult<Vec<ActivityItem>> {
        self.get_json(&format!("/admin/activity?limit={}", limit)).await
    }

    /// `suspended == true` suspends, otherwise lifts the suspension
    pub async fn set_client_suspended(&self, id: u32, suspended: bool) -> GatewayResult<Client> {
        let action = if suspended { "suspend" } else { "unsuspend" };
        self.send_json(Method::PATCH, &format!("/admin/clients/{}/{}", id, action), &serde_json::json!({}))
            .await
    }
}

//! Admin Overview Commands

use serde::Serialize;

use erp_core::models::{ActivityItem, Client, ClientRecord, PlatformSummary, RevenuePoint};
use erp_core::DomainResult;

use super::{call, call_no_args};

#[derive(Serialize)]
struct ActivityArgs {
    limit: u32,
}

#[derive(Serialize)]
struct SuspendArgs {
    id: u32,
    suspended: bool,
}

pub async fn platform_summary() -> DomainResult<PlatformSummary> {
    call_no_args("platform_summary").await
}

pub async fn list_clients() -> DomainResult<Vec<ClientRecord>> {
    call_no_args("list_clients").await
}

pub async fn revenue_analytics() -> DomainResult<Vec<RevenuePoint>> {
    call_no_args("revenue_analytics").await
}

pub async fn recent_activity(limit: u32) -> DomainResult<Vec<ActivityItem>> {
    call("recent_activity", &ActivityArgs { limit }).await
}

pub async fn set_client_suspended(id: u32, suspended: bool) -> DomainResult<Client> {
    call("set_client_suspended", &SuspendArgs { id, suspended }).await
}

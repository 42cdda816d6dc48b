//! Platform administration entities (tenants and their subscriptions)

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Entity;

/// A tenant company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: u32,
    pub name: String,
    pub slug: String,
    pub owner_name: String,
    pub owner_email: String,
    pub owner_phone: Option<String>,
    pub industry: Option<String>,
    pub company_size: Option<String>,
    pub country: Option<String>,
    pub is_active: bool,
    pub is_suspended: bool,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Entity for Client {
    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: u32,
    pub client_id: u32,
    pub plan_tier: String,
    pub status: String,
    pub price_monthly: f64,
    pub seats: u32,
    /// Comma-delimited module ids, e.g. "finance,hr"
    pub modules: String,
    pub billing_cycle: String,
    pub trial_ends_at: Option<NaiveDateTime>,
    pub current_period_end: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

/// One row of `GET /admin/clients`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub client: Client,
    pub subscription: Option<Subscription>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformSummary {
    pub total_clients: u32,
    pub active_clients: u32,
    pub suspended: u32,
    pub monthly_recurring_revenue: f64,
    pub paid_this_month: f64,
    pub trials_active: u32,
    #[serde(default)]
    pub plan_breakdown: BTreeMap<String, u32>,
}

/// One month of `GET /admin/analytics/revenue`, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    /// Display label such as "Mar 2026"
    pub month: String,
    pub revenue: f64,
}

impl RevenuePoint {
    /// Bar height as a percentage of `peak`
    pub fn share_of(&self, peak: f64) -> f64 {
        if peak <= 0.0 {
            return 0.0;
        }
        (self.revenue / peak * 100.0).clamp(0.0, 100.0)
    }
}

/// Largest monthly revenue, never below 1 so empty months still scale
pub fn revenue_peak(points: &[RevenuePoint]) -> f64 {
    points.iter().map(|p| p.revenue).fold(1.0, f64::max)
}

/// A platform audit entry, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: u32,
    pub client_id: u32,
    pub action: String,
    pub actor: Option<String>,
    #[serde(default)]
    pub metadata: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Entity for ActivityItem {
    fn id(&self) -> u32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(month: &str, revenue: f64) -> RevenuePoint {
        RevenuePoint {
            month: month.to_string(),
            revenue,
        }
    }

    #[test]
    fn test_revenue_bars_scale_to_peak() {
        let points = vec![point("Jan 2026", 0.0), point("Feb 2026", 250.0), point("Mar 2026", 1000.0)];
        let peak = revenue_peak(&points);
        assert_eq!(peak, 1000.0);
        let shares: Vec<f64> = points.iter().map(|p| p.share_of(peak)).collect();
        assert_eq!(shares, vec![0.0, 25.0, 100.0]);
    }

    #[test]
    fn test_revenue_peak_floor() {
        assert_eq!(revenue_peak(&[]), 1.0);
        assert_eq!(revenue_peak(&[point("Jan 2026", 0.0)]), 1.0);
        assert_eq!(point("Jan 2026", 5.0).share_of(0.0), 0.0);
    }

    #[test]
    fn test_activity_without_metadata_decodes() {
        let item: ActivityItem = serde_json::from_str(
            r#"{"id":3,"client_id":7,"action":"Subscription upgraded to pro","actor":null,"created_at":"2026-03-04T09:15:00.123456"}"#,
        )
        .unwrap();
        assert_eq!(item.client_id, 7);
        assert_eq!(item.actor, None);
        assert_eq!(item.metadata, None);
    }
}

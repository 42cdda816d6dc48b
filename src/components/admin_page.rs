//! Admin Overview
//!
//! Platform figures, monthly revenue, recent activity and the client list.
//! Only rendered for admin sessions; the shell redirects everyone else.

use leptos::prelude::*;
use leptos::task::spawn_local;

use erp_core::models::{revenue_peak, ActivityItem, ClientRecord, PlatformSummary, RevenuePoint};
use erp_core::Confirm;

use crate::commands;
use crate::components::stat_card::money;
use crate::components::StatCard;
use crate::confirm::BrowserConfirm;

const ACTIVITY_FETCH: u32 = 15;
const ACTIVITY_SHOWN: usize = 8;

fn log_error(what: &str, e: impl std::fmt::Display) {
    web_sys::console::error_1(&format!("[ADMIN] {} failed: {}", what, e).into());
}

/// "$1.3k" style bar label
fn thousands(amount: f64) -> String {
    format!("${:.1}k", amount / 1000.0)
}

#[component]
fn RevenueChart(points: Vec<RevenuePoint>) -> impl IntoView {
    let peak = revenue_peak(&points);
    view! {
        <div class="panel revenue-panel">
            <h2>"Revenue, last 12 months"</h2>
            {if points.is_empty() {
                view! { <div class="muted">"No revenue recorded yet"</div> }.into_any()
            } else {
                view! {
                    <div class="revenue-chart">
                        {points
                            .into_iter()
                            .map(|p| {
                                let height = format!("height: {:.1}%", p.share_of(peak));
                                view! {
                                    <div class="revenue-col" title=money(p.revenue)>
                                        <span class="revenue-value">{thousands(p.revenue)}</span>
                                        <div class="revenue-track">
                                            <div class="revenue-bar" style=height></div>
                                        </div>
                                        <span class="revenue-month">{p.month}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
fn ActivityFeed(items: Vec<ActivityItem>) -> impl IntoView {
    view! {
        <div class="panel activity-panel">
            <h2>"Recent activity"</h2>
            {if items.is_empty() {
                view! { <div class="muted">"Nothing yet"</div> }.into_any()
            } else {
                view! {
                    <ul class="activity-list">
                        {items
                            .into_iter()
                            .take(ACTIVITY_SHOWN)
                            .map(|item| {
                                let actor = item.actor.as_ref().map(|a| format!(" · {}", a)).unwrap_or_default();
                                let meta = format!(
                                    "Client #{}{} · {}",
                                    item.client_id,
                                    actor,
                                    item.created_at.format("%Y-%m-%d")
                                );
                                view! {
                                    <li class="activity-item">
                                        <div>{item.action}</div>
                                        <div class="muted">{meta}</div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let reload = RwSignal::new(0u32);
    let summary = RwSignal::new(PlatformSummary::default());
    let clients = RwSignal::new(Vec::<ClientRecord>::new());
    let revenue = RwSignal::new(Vec::<RevenuePoint>::new());
    let activity = RwSignal::new(Vec::<ActivityItem>::new());
    let load_error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let _ = reload.get();
        spawn_local(async move {
            let (s, c, r, a) = futures::join!(
                commands::platform_summary(),
                commands::list_clients(),
                commands::revenue_analytics(),
                commands::recent_activity(ACTIVITY_FETCH)
            );
            revenue.set(r.unwrap_or_else(|e| {
                log_error("load revenue", &e);
                Vec::new()
            }));
            activity.set(a.unwrap_or_else(|e| {
                log_error("load activity", &e);
                Vec::new()
            }));
            summary.set(s.unwrap_or_else(|e| {
                log_error("load summary", &e);
                PlatformSummary::default()
            }));
            match c {
                Ok(list) => {
                    clients.set(list);
                    load_error.set(None);
                }
                Err(e) => {
                    log_error("load clients", &e);
                    clients.set(Vec::new());
                    load_error.set(Some(e.to_string()));
                }
            }
        });
    });

    let toggle_suspended = move |id: u32, name: String, suspend: bool| {
        let prompt = if suspend {
            format!("Suspend {}? Their users lose access immediately.", name)
        } else {
            format!("Restore access for {}?", name)
        };
        if !BrowserConfirm.confirm(&prompt) {
            return;
        }
        spawn_local(async move {
            match commands::set_client_suspended(id, suspend).await {
                Ok(_) => reload.update(|n| *n += 1),
                Err(e) => log_error("suspend client", e),
            }
        });
    };

    view! {
        <div class="module-page admin-page">
            <div class="page-header">
                <h1>"Platform overview"</h1>
            </div>

            {move || load_error.get().map(|e| view! {
                <div class="banner-error">"Could not load clients: " {e}</div>
            })}

            {move || {
                let s = summary.get();
                view! {
                    <div class="stat-grid">
                        <StatCard label="Clients" value=s.total_clients.to_string() />
                        <StatCard label="Active" value=s.active_clients.to_string() />
                        <StatCard label="Suspended" value=s.suspended.to_string() />
                        <StatCard label="Trials" value=s.trials_active.to_string() />
                        <StatCard label="MRR" value=money(s.monthly_recurring_revenue) />
                        <StatCard label="Paid this month" value=money(s.paid_this_month) />
                    </div>
                    <div class="plan-breakdown">
                        {s.plan_breakdown
                            .into_iter()
                            .map(|(plan, count)| view! { <span class="tag-chip">{format!("{}: {}", plan, count)}</span> })
                            .collect_view()}
                    </div>
                }
            }}

            <div class="admin-panels">
                {move || view! { <RevenueChart points=revenue.get() /> }}
                {move || view! { <ActivityFeed items=activity.get() /> }}
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Client"</th>
                        <th>"Owner"</th>
                        <th>"Plan"</th>
                        <th>"Status"</th>
                        <th class="num">"Monthly"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || clients.get()
                        key=|r| (r.client.id, r.client.is_suspended, r.subscription.as_ref().map(|s| s.status.clone()))
                        children=move |record: ClientRecord| {
                            let client = record.client;
                            let id = client.id;
                            let name = client.name.clone();
                            let suspended = client.is_suspended;
                            let (plan, status, price) = match &record.subscription {
                                Some(s) => (s.plan_tier.clone(), s.status.clone(), money(s.price_monthly)),
                                None => ("—".to_string(), "none".to_string(), "—".to_string()),
                            };
                            view! {
                                <tr class:suspended=suspended>
                                    <td>
                                        <div>{client.name.clone()}</div>
                                        <div class="muted">{client.slug.clone()}</div>
                                    </td>
                                    <td>
                                        <div>{client.owner_name.clone()}</div>
                                        <div class="muted">{client.owner_email.clone()}</div>
                                    </td>
                                    <td>{plan}</td>
                                    <td><span class="status-badge">{if suspended { "suspended".to_string() } else { status }}</span></td>
                                    <td class="num">{price}</td>
                                    <td>
                                        <button
                                            class=if suspended { "btn-secondary" } else { "btn-danger" }
                                            on:click=move |_| toggle_suspended(id, name.clone(), !suspended)
                                        >
                                            {if suspended { "Unsuspend" } else { "Suspend" }}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

//! Navigation Model
//!
//! Sections of the tenant dashboard, the shell reducer, and admin/tenant
//! layout gating.

use serde::{Deserialize, Serialize};

/// A dashboard section. The id doubles as the assistant endpoint key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Dashboard,
    Projects,
    Finance,
    Hr,
    Sales,
    Support,
    Legal,
    Marketing,
    SupplyChain,
    Procurement,
    Insights,
    Settings,
}

impl Section {
    /// Sidebar order; settings is reached from the profile menu instead
    pub const NAV: [Section; 11] = [
        Section::Dashboard,
        Section::Projects,
        Section::Finance,
        Section::Hr,
        Section::Sales,
        Section::Support,
        Section::Legal,
        Section::Marketing,
        Section::SupplyChain,
        Section::Procurement,
        Section::Insights,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Projects => "projects",
            Section::Finance => "finance",
            Section::Hr => "hr",
            Section::Sales => "sales",
            Section::Support => "support",
            Section::Legal => "legal",
            Section::Marketing => "marketing",
            Section::SupplyChain => "supply_chain",
            Section::Procurement => "procurement",
            Section::Insights => "insights",
            Section::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Projects => "Projects",
            Section::Finance => "Finance",
            Section::Hr => "HR",
            Section::Sales => "Sales",
            Section::Support => "Support",
            Section::Legal => "Legal",
            Section::Marketing => "Marketing",
            Section::SupplyChain => "Supply Chain",
            Section::Procurement => "Procurement",
            Section::Insights => "Insights",
            Section::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "⊞",
            Section::Projects => "▦",
            Section::Finance => "💰",
            Section::Hr => "👥",
            Section::Sales => "📈",
            Section::Support => "🎧",
            Section::Legal => "⚖️",
            Section::Marketing => "📣",
            Section::SupplyChain => "🚚",
            Section::Procurement => "🛒",
            Section::Insights => "📊",
            Section::Settings => "⚙",
        }
    }

    /// Starter prompts offered by the assistant panel
    pub fn prompts(&self) -> [&'static str; 3] {
        match self {
            Section::Dashboard | Section::Settings => [
                "Give me a business health summary",
                "Which module needs attention?",
                "What are the top risks this week?",
            ],
            Section::Projects => [
                "Which projects are behind schedule?",
                "Summarize open critical tasks",
                "Who has the most tasks assigned?",
            ],
            Section::Finance => [
                "Analyze our cash flow this month",
                "Flag any unusual transactions",
                "What's our profit margin?",
            ],
            Section::Hr => [
                "Who is on leave this week?",
                "Summarize open positions",
                "Suggest hiring priorities",
            ],
            Section::Sales => [
                "Which deals are at risk?",
                "What's our pipeline coverage?",
                "Draft a follow-up for Acme Corp",
            ],
            Section::Support => [
                "What are the most common issues?",
                "Summarize open tickets",
                "Draft a response for an angry customer",
            ],
            Section::Legal => [
                "Any compliance risks this week?",
                "Summarize pending contracts",
                "Flag overdue reviews",
            ],
            Section::Marketing => [
                "What's our best performing channel?",
                "Suggest a campaign idea",
                "Analyze this month's ROI",
            ],
            Section::SupplyChain => [
                "Which products are low on stock?",
                "Flag any supplier risks",
                "Forecast demand for next month",
            ],
            Section::Procurement => [
                "List pending purchase orders",
                "Compare vendor quotes",
                "Flag overdue approvals",
            ],
            Section::Insights => [
                "Give me an executive summary",
                "What trends should I know about?",
                "Compare this quarter vs last",
            ],
        }
    }
}

/// Shell view state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellState {
    pub section: Section,
    pub ai_panel_open: bool,
    pub profile_menu_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    Navigate(Section),
    ToggleAiPanel,
    CloseAiPanel,
    ToggleProfileMenu,
    CloseProfileMenu,
}

impl ShellState {
    pub fn apply(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::Navigate(section) => {
                self.section = section;
                self.profile_menu_open = false;
            }
            ShellEvent::ToggleAiPanel => self.ai_panel_open = !self.ai_panel_open,
            ShellEvent::CloseAiPanel => self.ai_panel_open = false,
            ShellEvent::ToggleProfileMenu => self.profile_menu_open = !self.profile_menu_open,
            ShellEvent::CloseProfileMenu => self.profile_menu_open = false,
        }
    }
}

/// Role carried in the identity provider's user metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Tenant,
    Admin,
}

/// Signed-in user as reported by the identity provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub email: Option<String>,
    pub role: UserRole,
    pub signed_in: bool,
}

/// Top-level layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Area {
    Tenant,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    RedirectToLogin,
}

/// Decide whether a session may see an area
pub fn gate(session: &SessionInfo, area: Area) -> Access {
    match area {
        Area::Tenant => Access::Granted,
        Area::Admin if session.signed_in && session.role == UserRole::Admin => Access::Granted,
        Area::Admin => Access::RedirectToLogin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_match_wire_names() {
        for section in Section::NAV {
            let json = serde_json::to_string(&section).unwrap();
            assert_eq!(json, format!("\"{}\"", section.id()));
        }
    }

    #[test]
    fn test_navigate_closes_profile_menu() {
        let mut shell = ShellState::default();
        shell.apply(ShellEvent::ToggleProfileMenu);
        shell.apply(ShellEvent::ToggleAiPanel);
        shell.apply(ShellEvent::Navigate(Section::Finance));
        assert_eq!(shell.section, Section::Finance);
        assert!(!shell.profile_menu_open);
        assert!(shell.ai_panel_open);
    }

    #[test]
    fn test_admin_gate() {
        let tenant = SessionInfo { email: Some("a@b.c".into()), role: UserRole::Tenant, signed_in: true };
        let admin = SessionInfo { role: UserRole::Admin, ..tenant.clone() };
        let anonymous = SessionInfo { role: UserRole::Admin, signed_in: false, ..tenant.clone() };

        assert_eq!(gate(&tenant, Area::Tenant), Access::Granted);
        assert_eq!(gate(&tenant, Area::Admin), Access::RedirectToLogin);
        assert_eq!(gate(&admin, Area::Admin), Access::Granted);
        assert_eq!(gate(&anonymous, Area::Admin), Access::RedirectToLogin);
    }
}

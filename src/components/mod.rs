//! UI Components
//!
//! Shell chrome, module pages and the kanban board.

pub(crate) mod form_fields;
mod admin_page;
mod ai_panel;
mod dashboard;
mod finance_page;
mod hr_page;
mod kanban_board;
mod modal;
mod module_placeholder;
mod projects_page;
mod settings_page;
mod sidebar;
pub(crate) mod stat_card;
mod top_bar;

pub use admin_page::AdminPage;
pub use ai_panel::AiPanel;
pub use dashboard::Dashboard;
pub use finance_page::FinancePage;
pub use hr_page::HrPage;
pub use kanban_board::KanbanBoard;
pub use modal::Modal;
pub use module_placeholder::ModulePlaceholder;
pub use projects_page::ProjectsPage;
pub use settings_page::SettingsPage;
pub use sidebar::Sidebar;
pub use stat_card::StatCard;
pub use top_bar::TopBar;

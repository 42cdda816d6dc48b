//! Domain Models
//!
//! Typed records for every entity exchanged with the backend.
//! Field names match the backend JSON exactly.

mod admin;
mod agent;
mod board;
mod finance;
mod hr;
mod project;

pub use admin::{revenue_peak, ActivityItem, Client, ClientRecord, PlatformSummary, RevenuePoint, Subscription};
pub use agent::{AgentReply, AgentRequest};
pub use board::{BoardColumn, ColumnPatch, NewColumn, NewTask, Task, TaskMove, TaskPatch, TaskPriority};
pub use finance::{FinanceSummary, Invoice, InvoicePayload, Transaction, TransactionPayload, TransactionStatus, TransactionType};
pub use hr::{Employee, EmployeePayload, HrSummary, Position, PositionPayload};
pub use project::{Project, ProjectPayload, ProjectStatus, ProjectSummary};

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// Returns the entity's unique identifier
    fn id(&self) -> u32;
}

/// Find an entity by ID in a slice
pub fn find_by_id<T: Entity>(items: &[T], id: u32) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}

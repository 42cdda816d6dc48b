//! HR Commands

use erp_core::models::{Employee, EmployeePayload, HrSummary, Position, PositionPayload};
use erp_core::DomainResult;

use super::{call, call_no_args, delete_by_id, PayloadArgs, UpdateArgs};

pub async fn hr_summary() -> DomainResult<HrSummary> {
    call_no_args("hr_summary").await
}

pub async fn list_employees() -> DomainResult<Vec<Employee>> {
    call_no_args("list_employees").await
}

pub async fn save_employee(id: Option<u32>, payload: &EmployeePayload) -> DomainResult<Employee> {
    match id {
        Some(id) => call("update_employee", &UpdateArgs { id, payload }).await,
        None => call("create_employee", &PayloadArgs { payload }).await,
    }
}

pub async fn delete_employee(id: u32) -> DomainResult<()> {
    delete_by_id("delete_employee", id).await
}

pub async fn list_positions() -> DomainResult<Vec<Position>> {
    call_no_args("list_positions").await
}

pub async fn save_position(id: Option<u32>, payload: &PositionPayload) -> DomainResult<Position> {
    match id {
        Some(id) => call("update_position", &UpdateArgs { id, payload }).await,
        None => call("create_position", &PayloadArgs { payload }).await,
    }
}

pub async fn delete_position(id: u32) -> DomainResult<()> {
    delete_by_id("delete_position", id).await
}

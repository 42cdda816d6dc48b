//! HR: employees and open positions

use reqwest::Method;

use erp_core::models::{Employee, EmployeePayload, HrSummary, Position, PositionPayload};

use super::{ApiGateway, GatewayResult};

impl ApiGateway {
    pub async fn hr_summary(&self) -> GatewayResult<HrSummary> {
        self.get_json("/hr/summary").await
    }

    pub async fn list_employees(&self) -> GatewayResult<Vec<Employee>> {
        self.get_json("/hr/employees").await
    }

    pub async fn create_employee(&self, payload: &EmployeePayload) -> GatewayResult<Employee> {
        self.send_json(Method::POST, "/hr/employees", payload).await
    }

    pub async fn update_employee(&self, id: u32, payload: &EmployeePayload) -> GatewayResult<Employee> {
        self.send_json(Method::PUT, &format!("/hr/employees/{}", id), payload).await
    }

    pub async fn delete_employee(&self, id: u32) -> GatewayResult<()> {
        self.delete(&format!("/hr/employees/{}", id)).await
    }

    pub async fn list_positions(&self) -> GatewayResult<Vec<Position>> {
        self.get_json("/hr/positions").await
    }

    pub async fn create_position(&self, payload: &PositionPayload) -> GatewayResult<Position> {
        self.send_json(Method::POST, "/hr/positions", payload).await
    }

    pub async fn update_position(&self, id: u32, payload: &PositionPayload) -> GatewayResult<Position> {
        self.send_json(Method::PUT, &format!("/hr/positions/{}", id), payload).await
    }

    pub async fn delete_position(&self, id: u32) -> GatewayResult<()> {
        self.delete(&format!("/hr/positions/{}", id)).await
    }
}

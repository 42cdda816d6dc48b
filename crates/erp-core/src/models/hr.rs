//! HR Entities: employees and open positions

use serde::{Deserialize, Serialize};

use super::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: String,
    pub role: String,
    pub salary: Option<f64>,
    /// active, on_leave or terminated
    pub status: String,
    #[serde(default)]
    pub start_date: Option<String>,
}

impl Entity for Employee {
    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: String,
    pub role: String,
    pub salary: Option<f64>,
    pub status: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: u32,
    pub title: String,
    pub department: String,
    pub description: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    /// open, closed or on_hold
    pub status: String,
    #[serde(default)]
    pub opened_date: Option<String>,
}

impl Position {
    /// "60000 – 80000", one-sided ranges, or None when neither bound is known
    pub fn salary_range(&self) -> Option<String> {
        match (self.salary_min, self.salary_max) {
            (Some(min), Some(max)) => Some(format!("{:.0} – {:.0}", min, max)),
            (Some(min), None) => Some(format!("from {:.0}", min)),
            (None, Some(max)) => Some(format!("up to {:.0}", max)),
            (None, None) => None,
        }
    }
}

impl Entity for Position {
    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionPayload {
    pub title: String,
    pub department: String,
    pub description: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HrSummary {
    pub total_employees: u32,
    pub active: u32,
    pub on_leave: u32,
    pub open_positions: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_range() {
        let mut position = Position {
            id: 1,
            title: "Engineer".to_string(),
            department: "R&D".to_string(),
            description: None,
            salary_min: Some(60000.0),
            salary_max: Some(80000.0),
            status: "open".to_string(),
            opened_date: None,
        };
        assert_eq!(position.salary_range().as_deref(), Some("60000 – 80000"));
        position.salary_max = None;
        assert_eq!(position.salary_range().as_deref(), Some("from 60000"));
        position.salary_min = None;
        assert!(position.salary_range().is_none());
    }
}

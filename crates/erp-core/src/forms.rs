//! Entity Forms
//!
//! One record per resource holding the raw text of each input. `to_payload`
//! applies the only validation the screens perform: required text must be
//! non-blank and numeric text must parse. Blank optional inputs become `None`
//! so they go over the wire as `null`.

use crate::error::{DomainError, DomainResult};
use crate::models::{
    BoardColumn, ColumnPatch, Employee, EmployeePayload, Invoice, InvoicePayload, NewColumn,
    NewTask, Position, PositionPayload, Project, ProjectPayload, ProjectStatus, Task, TaskPatch,
    TaskPriority, Transaction, TransactionPayload, TransactionStatus, TransactionType,
};

pub const DEFAULT_PROJECT_COLOR: &str = "#7c6aff";
pub const DEFAULT_COLUMN_COLOR: &str = "#555555";

fn required(field: &str, value: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidInput(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn or_default(value: &str, default: &str) -> String {
    optional(value).unwrap_or_else(|| default.to_string())
}

fn required_amount(field: &str, value: &str) -> DomainResult<f64> {
    let text = required(field, value)?;
    parse_amount(field, &text)
}

fn optional_amount(field: &str, value: &str) -> DomainResult<Option<f64>> {
    optional(value).map(|text| parse_amount(field, &text)).transpose()
}

fn parse_amount(field: &str, text: &str) -> DomainResult<f64> {
    text.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| DomainError::InvalidInput(format!("{} must be a number", field)))
}

fn amount_text(value: Option<f64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

// ========================
// Projects board
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectForm {
    pub name: String,
    pub description: String,
    pub owner: String,
    pub status: ProjectStatus,
    pub color: String,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            owner: String::new(),
            status: ProjectStatus::Active,
            color: DEFAULT_PROJECT_COLOR.to_string(),
        }
    }
}

impl ProjectForm {
    pub fn from_project(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone().unwrap_or_default(),
            owner: project.owner.clone().unwrap_or_default(),
            status: project.status,
            color: or_default(&project.color, DEFAULT_PROJECT_COLOR),
        }
    }

    pub fn to_payload(&self) -> DomainResult<ProjectPayload> {
        Ok(ProjectPayload {
            name: required("Project name", &self.name)?,
            description: optional(&self.description),
            owner: optional(&self.owner),
            status: self.status,
            color: or_default(&self.color, DEFAULT_PROJECT_COLOR),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnForm {
    pub name: String,
    pub color: String,
}

impl Default for ColumnForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            color: DEFAULT_COLUMN_COLOR.to_string(),
        }
    }
}

impl ColumnForm {
    pub fn from_column(column: &BoardColumn) -> Self {
        Self {
            name: column.name.clone(),
            color: or_default(&column.color, DEFAULT_COLUMN_COLOR),
        }
    }

    /// Create body; the position comes from the board, never from the form
    pub fn to_new_column(&self, project_id: u32, position: i32) -> DomainResult<NewColumn> {
        let patch = self.to_patch()?;
        Ok(NewColumn {
            project_id,
            name: patch.name,
            color: patch.color,
            position,
        })
    }

    pub fn to_patch(&self) -> DomainResult<ColumnPatch> {
        Ok(ColumnPatch {
            name: required("Column name", &self.name)?,
            color: or_default(&self.color, DEFAULT_COLUMN_COLOR),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub assignee: String,
    pub tags: String,
}

impl TaskForm {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            priority: task.priority,
            assignee: task.assignee.clone().unwrap_or_default(),
            tags: task.tags.clone().unwrap_or_default(),
        }
    }

    pub fn to_new_task(&self, project_id: u32, column_id: u32, position: i32) -> DomainResult<NewTask> {
        let patch = self.to_patch()?;
        Ok(NewTask {
            project_id,
            column_id,
            title: patch.title,
            description: patch.description,
            priority: patch.priority,
            assignee: patch.assignee,
            tags: patch.tags,
            position,
        })
    }

    pub fn to_patch(&self) -> DomainResult<TaskPatch> {
        Ok(TaskPatch {
            title: required("Task title", &self.title)?,
            description: optional(&self.description),
            priority: self.priority,
            assignee: optional(&self.assignee),
            tags: optional(&self.tags),
        })
    }
}

// ========================
// Finance
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionForm {
    pub description: String,
    pub category: String,
    pub amount: String,
    pub kind: TransactionType,
    pub status: TransactionStatus,
    pub notes: String,
}

impl TransactionForm {
    pub fn from_transaction(tx: &Transaction) -> Self {
        Self {
            description: tx.description.clone(),
            category: tx.category.clone(),
            amount: tx.amount.to_string(),
            kind: tx.kind,
            status: tx.status,
            notes: tx.notes.clone().unwrap_or_default(),
        }
    }

    pub fn to_payload(&self) -> DomainResult<TransactionPayload> {
        Ok(TransactionPayload {
            description: required("Description", &self.description)?,
            category: required("Category", &self.category)?,
            amount: required_amount("Amount", &self.amount)?,
            kind: self.kind,
            status: self.status,
            notes: optional(&self.notes),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceForm {
    pub invoice_number: String,
    pub client_name: String,
    pub client_email: String,
    pub amount: String,
    pub tax: String,
    pub status: String,
    pub notes: String,
}

impl Default for InvoiceForm {
    fn default() -> Self {
        Self {
            invoice_number: String::new(),
            client_name: String::new(),
            client_email: String::new(),
            amount: String::new(),
            tax: "0".to_string(),
            status: "draft".to_string(),
            notes: String::new(),
        }
    }
}

impl InvoiceForm {
    pub const STATUSES: [&'static str; 4] = ["draft", "sent", "paid", "overdue"];

    pub fn from_invoice(invoice: &Invoice) -> Self {
        Self {
            invoice_number: invoice.invoice_number.clone(),
            client_name: invoice.client_name.clone(),
            client_email: invoice.client_email.clone().unwrap_or_default(),
            amount: invoice.amount.to_string(),
            tax: invoice.tax.to_string(),
            status: invoice.status.clone(),
            notes: String::new(),
        }
    }

    pub fn to_payload(&self) -> DomainResult<InvoicePayload> {
        Ok(InvoicePayload {
            invoice_number: required("Invoice number", &self.invoice_number)?,
            client_name: required("Client name", &self.client_name)?,
            client_email: optional(&self.client_email),
            amount: required_amount("Amount", &self.amount)?,
            tax: optional_amount("Tax", &self.tax)?.unwrap_or(0.0),
            status: or_default(&self.status, "draft"),
            notes: optional(&self.notes),
        })
    }
}

// ========================
// HR
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub role: String,
    pub salary: String,
    pub status: String,
    pub notes: String,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            department: String::new(),
            role: String::new(),
            salary: String::new(),
            status: "active".to_string(),
            notes: String::new(),
        }
    }
}

impl EmployeeForm {
    pub const STATUSES: [&'static str; 3] = ["active", "on_leave", "terminated"];

    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            full_name: employee.full_name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone().unwrap_or_default(),
            department: employee.department.clone(),
            role: employee.role.clone(),
            salary: amount_text(employee.salary),
            status: employee.status.clone(),
            notes: String::new(),
        }
    }

    pub fn to_payload(&self) -> DomainResult<EmployeePayload> {
        Ok(EmployeePayload {
            full_name: required("Full name", &self.full_name)?,
            email: required("Email", &self.email)?,
            phone: optional(&self.phone),
            department: required("Department", &self.department)?,
            role: required("Role", &self.role)?,
            salary: optional_amount("Salary", &self.salary)?,
            status: or_default(&self.status, "active"),
            notes: optional(&self.notes),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionForm {
    pub title: String,
    pub department: String,
    pub description: String,
    pub salary_min: String,
    pub salary_max: String,
    pub status: String,
}

impl Default for PositionForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            department: String::new(),
            description: String::new(),
            salary_min: String::new(),
            salary_max: String::new(),
            status: "open".to_string(),
        }
    }
}

impl PositionForm {
    pub const STATUSES: [&'static str; 3] = ["open", "on_hold", "closed"];

    pub fn from_position(position: &Position) -> Self {
        Self {
            title: position.title.clone(),
            department: position.department.clone(),
            description: position.description.clone().unwrap_or_default(),
            salary_min: amount_text(position.salary_min),
            salary_max: amount_text(position.salary_max),
            status: position.status.clone(),
        }
    }

    pub fn to_payload(&self) -> DomainResult<PositionPayload> {
        Ok(PositionPayload {
            title: required("Title", &self.title)?,
            department: required("Department", &self.department)?,
            description: optional(&self.description),
            salary_min: optional_amount("Minimum salary", &self.salary_min)?,
            salary_max: optional_amount("Maximum salary", &self.salary_max)?,
            status: or_default(&self.status, "open"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_form_defaults_and_blank_optionals() {
        let form = ProjectForm {
            name: "  Launch ".to_string(),
            color: String::new(),
            ..ProjectForm::default()
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.name, "Launch");
        assert_eq!(payload.color, DEFAULT_PROJECT_COLOR);
        assert!(payload.description.is_none());
        assert!(payload.owner.is_none());
        assert_eq!(payload.status, ProjectStatus::Active);
    }

    #[test]
    fn test_required_fields_are_enforced() {
        assert!(matches!(ProjectForm::default().to_payload(), Err(DomainError::InvalidInput(_))));
        assert!(ColumnForm::default().to_patch().is_err());
        assert!(TaskForm::default().to_patch().is_err());
    }

    #[test]
    fn test_column_form_takes_position_from_caller() {
        let form = ColumnForm { name: "Todo".to_string(), ..ColumnForm::default() };
        let column = form.to_new_column(4, 2).unwrap();
        assert_eq!(column.project_id, 4);
        assert_eq!(column.position, 2);
        assert_eq!(column.color, DEFAULT_COLUMN_COLOR);
    }

    #[test]
    fn test_task_form_round_trip_through_edit() {
        let form = TaskForm {
            title: "Draft launch plan".to_string(),
            tags: "docs, q3".to_string(),
            priority: TaskPriority::High,
            ..TaskForm::default()
        };
        let new_task = form.to_new_task(1, 2, 0).unwrap();
        assert_eq!(new_task.tags.as_deref(), Some("docs, q3"));
        assert_eq!(new_task.assignee, None);
        assert_eq!(new_task.priority, TaskPriority::High);
    }

    #[test]
    fn test_transaction_amount_coercion() {
        let mut form = TransactionForm {
            description: "Invoice 12".to_string(),
            category: "Sales".to_string(),
            amount: "1250.75".to_string(),
            ..TransactionForm::default()
        };
        assert_eq!(form.to_payload().unwrap().amount, 1250.75);

        form.amount = "twelve".to_string();
        assert!(form.to_payload().is_err());
        form.amount = String::new();
        assert!(form.to_payload().is_err());
    }

    #[test]
    fn test_invoice_blank_tax_is_zero() {
        let form = InvoiceForm {
            invoice_number: "INV-001".to_string(),
            client_name: "Acme".to_string(),
            amount: "100".to_string(),
            tax: " ".to_string(),
            ..InvoiceForm::default()
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.tax, 0.0);
        assert_eq!(payload.status, "draft");
        assert!(payload.client_email.is_none());
    }

    #[test]
    fn test_employee_salary_is_optional_but_numeric() {
        let mut form = EmployeeForm {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            department: "R&D".to_string(),
            role: "Engineer".to_string(),
            ..EmployeeForm::default()
        };
        assert_eq!(form.to_payload().unwrap().salary, None);
        form.salary = "98000".to_string();
        assert_eq!(form.to_payload().unwrap().salary, Some(98000.0));
        form.salary = "lots".to_string();
        assert!(form.to_payload().is_err());
    }

    #[test]
    fn test_position_salary_bounds() {
        let form = PositionForm {
            title: "Designer".to_string(),
            department: "Product".to_string(),
            salary_min: "50000".to_string(),
            ..PositionForm::default()
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.salary_min, Some(50000.0));
        assert_eq!(payload.salary_max, None);
        assert_eq!(payload.status, "open");
    }
}

//! Finance Entities: transactions and invoices

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    #[default]
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "expense" => TransactionType::Expense,
            _ => TransactionType::Income,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Paid,
    #[default]
    Pending,
    Received,
    Overdue,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 4] = [
        TransactionStatus::Paid,
        TransactionStatus::Pending,
        TransactionStatus::Received,
        TransactionStatus::Overdue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Paid => "paid",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Received => "received",
            TransactionStatus::Overdue => "overdue",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "paid" => TransactionStatus::Paid,
            "received" => TransactionStatus::Received,
            "overdue" => TransactionStatus::Overdue,
            _ => TransactionStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub date: NaiveDateTime,
    pub description: String,
    pub category: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub status: TransactionStatus,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Entity for Transaction {
    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPayload {
    pub description: String,
    pub category: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub status: TransactionStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: u32,
    pub invoice_number: String,
    pub client_name: String,
    pub client_email: Option<String>,
    pub amount: f64,
    pub tax: f64,
    /// draft, sent, paid or overdue; kept as text since the backend stores it untyped
    pub status: String,
    pub issue_date: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

impl Invoice {
    pub fn total(&self) -> f64 {
        self.amount + self.tax
    }
}

impl Entity for Invoice {
    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoicePayload {
    pub invoice_number: String,
    pub client_name: String,
    pub client_email: Option<String>,
    pub amount: f64,
    pub tax: f64,
    pub status: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinanceSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
    pub pending_invoices: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_type_field_is_renamed() {
        let payload = TransactionPayload {
            description: "Hosting".to_string(),
            category: "Infra".to_string(),
            amount: 120.5,
            kind: TransactionType::Expense,
            status: TransactionStatus::Paid,
            notes: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "expense");
        assert_eq!(json["notes"], serde_json::Value::Null);
        assert!(json.get("kind").is_none());
    }
}

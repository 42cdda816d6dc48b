//! Finance Commands

use erp_core::models::{FinanceSummary, Invoice, InvoicePayload, Transaction, TransactionPayload};
use erp_core::DomainResult;

use super::{call, call_no_args, delete_by_id, PayloadArgs, UpdateArgs};

pub async fn finance_summary() -> DomainResult<FinanceSummary> {
    call_no_args("finance_summary").await
}

pub async fn list_transactions() -> DomainResult<Vec<Transaction>> {
    call_no_args("list_transactions").await
}

/// Create when `id` is None, otherwise update
pub async fn save_transaction(id: Option<u32>, payload: &TransactionPayload) -> DomainResult<Transaction> {
    match id {
        Some(id) => call("update_transaction", &UpdateArgs { id, payload }).await,
        None => call("create_transaction", &PayloadArgs { payload }).await,
    }
}

pub async fn delete_transaction(id: u32) -> DomainResult<()> {
    delete_by_id("delete_transaction", id).await
}

pub async fn list_invoices() -> DomainResult<Vec<Invoice>> {
    call_no_args("list_invoices").await
}

/// Create when `id` is None, otherwise update
pub async fn save_invoice(id: Option<u32>, payload: &InvoicePayload) -> DomainResult<Invoice> {
    match id {
        Some(id) => call("update_invoice", &UpdateArgs { id, payload }).await,
        None => call("create_invoice", &PayloadArgs { payload }).await,
    }
}

pub async fn delete_invoice(id: u32) -> DomainResult<()> {
    delete_by_id("delete_invoice", id).await
}

//! Tauri Commands for Finance

use tauri::State;

use erp_core::models::{FinanceSummary, Invoice, InvoicePayload, Transaction, TransactionPayload};

use super::to_ipc;
use crate::AppState;

#[tauri::command]
pub async fn finance_summary(state: State<'_, AppState>) -> Result<FinanceSummary, String> {
    to_ipc("finance_summary", state.gateway.finance_summary().await)
}

#[tauri::command]
pub async fn list_transactions(state: State<'_, AppState>) -> Result<Vec<Transaction>, String> {
    to_ipc("list_transactions", state.gateway.list_transactions().await)
}

#[tauri::command]
pub async fn create_transaction(
    state: State<'_, AppState>,
    payload: TransactionPayload,
) -> Result<Transaction, String> {
    to_ipc("create_transaction", state.gateway.create_transaction(&payload).await)
}

#[tauri::command]
pub async fn update_transaction(
    state: State<'_, AppState>,
    id: u32,
    payload: TransactionPayload,
) -> Result<Transaction, String> {
    to_ipc("update_transaction", state.gateway.update_transaction(id, &payload).await)
}

#[tauri::command]
pub async fn delete_transaction(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    to_ipc("delete_transaction", state.gateway.delete_transaction(id).await)
}

#[tauri::command]
pub async fn list_invoices(state: State<'_, AppState>) -> Result<Vec<Invoice>, String> {
    to_ipc("list_invoices", state.gateway.list_invoices().await)
}

#[tauri::command]
pub async fn create_invoice(state: State<'_, AppState>, payload: InvoicePayload) -> Result<Invoice, String> {
    to_ipc("create_invoice", state.gateway.create_invoice(&payload).await)
}

#[tauri::command]
pub async fn update_invoice(
    state: State<'_, AppState>,
    id: u32,
    payload: InvoicePayload,
) -> Result<Invoice, String> {
    to_ipc("update_invoice", state.gateway.update_invoice(id, &payload).await)
}

#[tauri::command]
pub async fn delete_invoice(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    to_ipc("delete_invoice", state.gateway.delete_invoice(id).await)
}

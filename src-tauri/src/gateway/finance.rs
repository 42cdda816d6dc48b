//! Finance: transactions and invoices

use reqwest::Method;

use erp_core::models::{FinanceSummary, Invoice, InvoicePayload, Transaction, TransactionPayload};

use super::{ApiGateway, GatewayResult};

impl ApiGateway {
    pub async fn finance_summary(&self) -> GatewayResult<FinanceSummary> {
        self.get_json("/finance/summary").await
    }

    pub async fn list_transactions(&self) -> GatewayResult<Vec<Transaction>> {
        self.get_json("/finance/transactions").await
    }

    pub async fn create_transaction(&self, payload: &TransactionPayload) -> GatewayResult<Transaction> {
        self.send_json(Method::POST, "/finance/transactions", payload).await
    }

    pub async fn update_transaction(&self, id: u32, payload: &TransactionPayload) -> GatewayResult<Transaction> {
        self.send_json(Method::PUT, &format!("/finance/transactions/{}", id), payload)
            .await
    }

    pub async fn delete_transaction(&self, id: u32) -> GatewayResult<()> {
        self.delete(&format!("/finance/transactions/{}", id)).await
    }

    pub async fn list_invoices(&self) -> GatewayResult<Vec<Invoice>> {
        self.get_json("/finance/invoices").await
    }

    pub async fn create_invoice(&self, payload: &InvoicePayload) -> GatewayResult<Invoice> {
        self.send_json(Method::POST, "/finance/invoices", payload).await
    }

    pub async fn update_invoice(&self, id: u32, payload: &InvoicePayload) -> GatewayResult<Invoice> {
        self.send_json(Method::PUT, &format!("/finance/invoices/{}", id), payload)
            .await
    }

    pub async fn delete_invoice(&self, id: u32) -> GatewayResult<()> {
        self.delete(&format!("/finance/invoices/{}", id)).await
    }
}

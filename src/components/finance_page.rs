//! Finance Page
//!
//! Summary cards plus transaction and invoice tables. Each save or delete
//! reloads the affected list and the summary.

use leptos::prelude::*;
use leptos::task::spawn_local;

use erp_core::forms::{InvoiceForm, TransactionForm};
use erp_core::models::{FinanceSummary, Invoice, Transaction, TransactionStatus, TransactionType};
use erp_core::Confirm;

use crate::commands;
use crate::components::form_fields::{form_input, form_select, form_textarea, status_options};
use crate::components::stat_card::money;
use crate::components::{Modal, StatCard};
use crate::confirm::BrowserConfirm;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Transactions,
    Invoices,
}

#[derive(Clone, Copy, PartialEq)]
enum Editing {
    Transaction(Option<u32>),
    Invoice(Option<u32>),
}

fn log_error(what: &str, e: impl std::fmt::Display) {
    web_sys::console::error_1(&format!("[FINANCE] {} failed: {}", what, e).into());
}

#[component]
pub fn FinancePage() -> impl IntoView {
    let tab = RwSignal::new(Tab::Transactions);
    let reload = RwSignal::new(0u32);

    let summary = RwSignal::new(FinanceSummary::default());
    let transactions = RwSignal::new(Vec::<Transaction>::new());
    let invoices = RwSignal::new(Vec::<Invoice>::new());
    let load_error = RwSignal::new(None::<String>);

    let editing = RwSignal::new(None::<Editing>);
    let tx_form = RwSignal::new(TransactionForm::default());
    let invoice_form = RwSignal::new(InvoiceForm::default());
    let form_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    Effect::new(move |_| {
        let _ = reload.get();
        spawn_local(async move {
            let (s, t, i) = futures::join!(
                commands::finance_summary(),
                commands::list_transactions(),
                commands::list_invoices()
            );
            let mut error = None;
            summary.set(s.unwrap_or_else(|e| {
                log_error("load summary", &e);
                FinanceSummary::default()
            }));
            transactions.set(t.unwrap_or_else(|e| {
                log_error("load transactions", &e);
                error = Some(e.to_string());
                Vec::new()
            }));
            invoices.set(i.unwrap_or_else(|e| {
                log_error("load invoices", &e);
                error = Some(e.to_string());
                Vec::new()
            }));
            load_error.set(error);
        });
    });

    let edit_transaction = move |tx: Option<&Transaction>| {
        tx_form.set(tx.map(TransactionForm::from_transaction).unwrap_or_default());
        form_error.set(None);
        editing.set(Some(Editing::Transaction(tx.map(|t| t.id))));
    };

    let edit_invoice = move |invoice: Option<&Invoice>| {
        invoice_form.set(invoice.map(InvoiceForm::from_invoice).unwrap_or_default());
        form_error.set(None);
        editing.set(Some(Editing::Invoice(invoice.map(|i| i.id))));
    };

    let save = move |_: ()| {
        let Some(target) = editing.get_untracked() else { return };
        saving.set(true);
        spawn_local(async move {
            let result = match target {
                Editing::Transaction(id) => match tx_form.get_untracked().to_payload() {
                    Ok(payload) => commands::save_transaction(id, &payload).await.map(|_| ()),
                    Err(e) => Err(e),
                },
                Editing::Invoice(id) => match invoice_form.get_untracked().to_payload() {
                    Ok(payload) => commands::save_invoice(id, &payload).await.map(|_| ()),
                    Err(e) => Err(e),
                },
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    editing.set(None);
                    reload.update(|n| *n += 1);
                }
                Err(e) => {
                    log_error("save", &e);
                    form_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let delete_transaction = move |id: u32| {
        if !BrowserConfirm.confirm("Delete this transaction?") {
            return;
        }
        spawn_local(async move {
            match commands::delete_transaction(id).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(e) => log_error("delete transaction", e),
            }
        });
    };

    let delete_invoice = move |id: u32| {
        if !BrowserConfirm.confirm("Delete this invoice?") {
            return;
        }
        spawn_local(async move {
            match commands::delete_invoice(id).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(e) => log_error("delete invoice", e),
            }
        });
    };

    let transactions_table = move || {
        view! {
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Description"</th>
                        <th>"Category"</th>
                        <th>"Type"</th>
                        <th>"Status"</th>
                        <th class="num">"Amount"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || transactions.get()
                        key=|tx| (tx.id, tx.description.clone(), tx.amount.to_bits(), tx.status, tx.kind, tx.category.clone())
                        children=move |tx: Transaction| {
                            let id = tx.id;
                            let for_edit = tx.clone();
                            let sign = if tx.kind == TransactionType::Expense { "-" } else { "+" };
                            view! {
                                <tr on:click=move |_| edit_transaction(Some(&for_edit))>
                                    <td>{tx.date.format("%Y-%m-%d").to_string()}</td>
                                    <td>{tx.description.clone()}</td>
                                    <td>{tx.category.clone()}</td>
                                    <td>{tx.kind.as_str()}</td>
                                    <td><span class="status-badge">{tx.status.as_str()}</span></td>
                                    <td class="num">{format!("{}{}", sign, money(tx.amount))}</td>
                                    <td>
                                        <button
                                            class="icon-btn"
                                            title="Delete"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                delete_transaction(id);
                                            }
                                        >
                                            "×"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        }
    };

    let invoices_table = move || {
        view! {
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Number"</th>
                        <th>"Client"</th>
                        <th>"Issued"</th>
                        <th>"Status"</th>
                        <th class="num">"Total"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || invoices.get()
                        key=|inv| (inv.id, inv.invoice_number.clone(), inv.status.clone(), inv.total().to_bits(), inv.client_name.clone())
                        children=move |inv: Invoice| {
                            let id = inv.id;
                            let for_edit = inv.clone();
                            view! {
                                <tr on:click=move |_| edit_invoice(Some(&for_edit))>
                                    <td>{inv.invoice_number.clone()}</td>
                                    <td>{inv.client_name.clone()}</td>
                                    <td>{inv.issue_date.format("%Y-%m-%d").to_string()}</td>
                                    <td><span class="status-badge">{inv.status.clone()}</span></td>
                                    <td class="num">{money(inv.total())}</td>
                                    <td>
                                        <button
                                            class="icon-btn"
                                            title="Delete"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                delete_invoice(id);
                                            }
                                        >
                                            "×"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        }
    };

    view! {
        <div class="module-page">
            <div class="page-header">
                <h1>"Finance"</h1>
                <button
                    class="btn-primary"
                    on:click=move |_| match tab.get_untracked() {
                        Tab::Transactions => edit_transaction(None),
                        Tab::Invoices => edit_invoice(None),
                    }
                >
                    {move || match tab.get() {
                        Tab::Transactions => "+ New transaction",
                        Tab::Invoices => "+ New invoice",
                    }}
                </button>
            </div>

            {move || load_error.get().map(|e| view! {
                <div class="banner-error">"Could not load finance data: " {e}</div>
            })}

            {move || {
                let s = summary.get();
                view! {
                    <div class="stat-grid">
                        <StatCard label="Income" value=money(s.total_income) />
                        <StatCard label="Expenses" value=money(s.total_expenses) />
                        <StatCard label="Net profit" value=money(s.net_profit) />
                        <StatCard label="Pending invoices" value=s.pending_invoices.to_string() />
                    </div>
                }
            }}

            <div class="tab-bar">
                <button
                    class:active=move || tab.get() == Tab::Transactions
                    on:click=move |_| tab.set(Tab::Transactions)
                >
                    "Transactions"
                </button>
                <button
                    class:active=move || tab.get() == Tab::Invoices
                    on:click=move |_| tab.set(Tab::Invoices)
                >
                    "Invoices"
                </button>
            </div>

            <Show when=move || tab.get() == Tab::Transactions fallback=invoices_table>
                {transactions_table}
            </Show>

            <Show when=move || matches!(editing.get(), Some(Editing::Transaction(_)))>
                <Modal
                    title=Signal::derive(move || match editing.get() {
                        Some(Editing::Transaction(Some(_))) => "Edit transaction".to_string(),
                        _ => "New transaction".to_string(),
                    })
                    on_submit=Callback::new(save)
                    on_close=Callback::new(move |_| editing.set(None))
                    error=form_error
                    busy=saving
                >
                    {form_input(tx_form, "Description", "text", true, |f| f.description.as_str(), |f, v| f.description = v)}
                    {form_input(tx_form, "Category", "text", true, |f| f.category.as_str(), |f, v| f.category = v)}
                    {form_input(tx_form, "Amount", "number", true, |f| f.amount.as_str(), |f, v| f.amount = v)}
                    {form_select(
                        tx_form,
                        "Type",
                        status_options(&["income", "expense"]),
                        |f| f.kind.as_str().to_string(),
                        |f, v| f.kind = TransactionType::from_str(&v),
                    )}
                    {form_select(
                        tx_form,
                        "Status",
                        TransactionStatus::ALL.iter().map(|s| (s.as_str().to_string(), s.as_str().to_string())).collect(),
                        |f| f.status.as_str().to_string(),
                        |f, v| f.status = TransactionStatus::from_str(&v),
                    )}
                    {form_textarea(tx_form, "Notes", |f| f.notes.as_str(), |f, v| f.notes = v)}
                </Modal>
            </Show>

            <Show when=move || matches!(editing.get(), Some(Editing::Invoice(_)))>
                <Modal
                    title=Signal::derive(move || match editing.get() {
                        Some(Editing::Invoice(Some(_))) => "Edit invoice".to_string(),
                        _ => "New invoice".to_string(),
                    })
                    on_submit=Callback::new(save)
                    on_close=Callback::new(move |_| editing.set(None))
                    error=form_error
                    busy=saving
                >
                    {form_input(invoice_form, "Invoice number", "text", true, |f| f.invoice_number.as_str(), |f, v| f.invoice_number = v)}
                    {form_input(invoice_form, "Client name", "text", true, |f| f.client_name.as_str(), |f, v| f.client_name = v)}
                    {form_input(invoice_form, "Client email", "email", false, |f| f.client_email.as_str(), |f, v| f.client_email = v)}
                    {form_input(invoice_form, "Amount", "number", true, |f| f.amount.as_str(), |f, v| f.amount = v)}
                    {form_input(invoice_form, "Tax", "number", false, |f| f.tax.as_str(), |f, v| f.tax = v)}
                    {form_select(
                        invoice_form,
                        "Status",
                        status_options(&InvoiceForm::STATUSES),
                        |f| f.status.clone(),
                        |f, v| f.status = v,
                    )}
                    {form_textarea(invoice_form, "Notes", |f| f.notes.as_str(), |f, v| f.notes = v)}
                </Modal>
            </Show>
        </div>
    }
}

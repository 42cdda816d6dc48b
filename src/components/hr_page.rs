//! HR Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use erp_core::forms::{EmployeeForm, PositionForm};
use erp_core::models::{Employee, HrSummary, Position};
use erp_core::Confirm;

use crate::commands;
use crate::components::form_fields::{form_input, form_select, form_textarea, status_options};
use crate::components::stat_card::money;
use crate::components::{Modal, StatCard};
use crate::confirm::BrowserConfirm;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Employees,
    Positions,
}

#[derive(Clone, Copy, PartialEq)]
enum Editing {
    Employee(Option<u32>),
    Position(Option<u32>),
}

fn log_error(what: &str, e: impl std::fmt::Display) {
    web_sys::console::error_1(&format!("[HR] {} failed: {}", what, e).into());
}

#[component]
pub fn HrPage() -> impl IntoView {
    let tab = RwSignal::new(Tab::Employees);
    let reload = RwSignal::new(0u32);

    let summary = RwSignal::new(HrSummary::default());
    let employees = RwSignal::new(Vec::<Employee>::new());
    let positions = RwSignal::new(Vec::<Position>::new());
    let load_error = RwSignal::new(None::<String>);

    let editing = RwSignal::new(None::<Editing>);
    let employee_form = RwSignal::new(EmployeeForm::default());
    let position_form = RwSignal::new(PositionForm::default());
    let form_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    Effect::new(move |_| {
        let _ = reload.get();
        spawn_local(async move {
            let (s, e, p) = futures::join!(commands::hr_summary(), commands::list_employees(), commands::list_positions());
            let mut error = None;
            summary.set(s.unwrap_or_else(|err| {
                log_error("load summary", &err);
                HrSummary::default()
            }));
            employees.set(e.unwrap_or_else(|err| {
                log_error("load employees", &err);
                error = Some(err.to_string());
                Vec::new()
            }));
            positions.set(p.unwrap_or_else(|err| {
                log_error("load positions", &err);
                error = Some(err.to_string());
                Vec::new()
            }));
            load_error.set(error);
        });
    });

    let edit_employee = move |employee: Option<&Employee>| {
        employee_form.set(employee.map(EmployeeForm::from_employee).unwrap_or_default());
        form_error.set(None);
        editing.set(Some(Editing::Employee(employee.map(|e| e.id))));
    };

    let edit_position = move |position: Option<&Position>| {
        position_form.set(position.map(PositionForm::from_position).unwrap_or_default());
        form_error.set(None);
        editing.set(Some(Editing::Position(position.map(|p| p.id))));
    };

    let save = move |_: ()| {
        let Some(target) = editing.get_untracked() else { return };
        saving.set(true);
        spawn_local(async move {
            let result = match target {
                Editing::Employee(id) => match employee_form.get_untracked().to_payload() {
                    Ok(payload) => commands::save_employee(id, &payload).await.map(|_| ()),
                    Err(e) => Err(e),
                },
                Editing::Position(id) => match position_form.get_untracked().to_payload() {
                    Ok(payload) => commands::save_position(id, &payload).await.map(|_| ()),
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

    let delete_employee = move |id: u32| {
        if !BrowserConfirm.confirm("Delete this employee?") {
            return;
        }
        spawn_local(async move {
            match commands::delete_employee(id).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(e) => log_error("delete employee", e),
            }
        });
    };

    let delete_position = move |id: u32| {
        if !BrowserConfirm.confirm("Delete this position?") {
            return;
        }
        spawn_local(async move {
            match commands::delete_position(id).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(e) => log_error("delete position", e),
            }
        });
    };

    let employees_table = move || {
        view! {
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Department"</th>
                        <th>"Role"</th>
                        <th>"Status"</th>
                        <th class="num">"Salary"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || employees.get()
                        key=|e| (e.id, e.full_name.clone(), e.email.clone(), e.department.clone(), e.role.clone(), e.status.clone(), e.salary.map(f64::to_bits))
                        children=move |employee: Employee| {
                            let id = employee.id;
                            let for_edit = employee.clone();
                            view! {
                                <tr on:click=move |_| edit_employee(Some(&for_edit))>
                                    <td>{employee.full_name.clone()}</td>
                                    <td>{employee.email.clone()}</td>
                                    <td>{employee.department.clone()}</td>
                                    <td>{employee.role.clone()}</td>
                                    <td><span class="status-badge">{employee.status.replace('_', " ")}</span></td>
                                    <td class="num">{employee.salary.map(money).unwrap_or_else(|| "—".to_string())}</td>
                                    <td>
                                        <button
                                            class="icon-btn"
                                            title="Delete"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                delete_employee(id);
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

    let positions_table = move || {
        view! {
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Department"</th>
                        <th>"Status"</th>
                        <th>"Salary range"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || positions.get()
                        key=|p| (p.id, p.title.clone(), p.department.clone(), p.status.clone(), p.salary_range())
                        children=move |position: Position| {
                            let id = position.id;
                            let for_edit = position.clone();
                            view! {
                                <tr on:click=move |_| edit_position(Some(&for_edit))>
                                    <td>{position.title.clone()}</td>
                                    <td>{position.department.clone()}</td>
                                    <td><span class="status-badge">{position.status.replace('_', " ")}</span></td>
                                    <td>{position.salary_range().unwrap_or_else(|| "—".to_string())}</td>
                                    <td>
                                        <button
                                            class="icon-btn"
                                            title="Delete"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                delete_position(id);
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
                <h1>"Human Resources"</h1>
                <button
                    class="btn-primary"
                    on:click=move |_| match tab.get_untracked() {
                        Tab::Employees => edit_employee(None),
                        Tab::Positions => edit_position(None),
                    }
                >
                    {move || match tab.get() {
                        Tab::Employees => "+ New employee",
                        Tab::Positions => "+ New position",
                    }}
                </button>
            </div>

            {move || load_error.get().map(|e| view! {
                <div class="banner-error">"Could not load HR data: " {e}</div>
            })}

            {move || {
                let s = summary.get();
                view! {
                    <div class="stat-grid">
                        <StatCard label="Employees" value=s.total_employees.to_string() />
                        <StatCard label="Active" value=s.active.to_string() />
                        <StatCard label="On leave" value=s.on_leave.to_string() />
                        <StatCard label="Open positions" value=s.open_positions.to_string() />
                    </div>
                }
            }}

            <div class="tab-bar">
                <button
                    class:active=move || tab.get() == Tab::Employees
                    on:click=move |_| tab.set(Tab::Employees)
                >
                    "Employees"
                </button>
                <button
                    class:active=move || tab.get() == Tab::Positions
                    on:click=move |_| tab.set(Tab::Positions)
                >
                    "Positions"
                </button>
            </div>

            <Show when=move || tab.get() == Tab::Employees fallback=positions_table>
                {employees_table}
            </Show>

            <Show when=move || matches!(editing.get(), Some(Editing::Employee(_)))>
                <Modal
                    title=Signal::derive(move || match editing.get() {
                        Some(Editing::Employee(Some(_))) => "Edit employee".to_string(),
                        _ => "New employee".to_string(),
                    })
                    on_submit=Callback::new(save)
                    on_close=Callback::new(move |_| editing.set(None))
                    error=form_error
                    busy=saving
                >
                    {form_input(employee_form, "Full name", "text", true, |f| f.full_name.as_str(), |f, v| f.full_name = v)}
                    {form_input(employee_form, "Email", "email", true, |f| f.email.as_str(), |f, v| f.email = v)}
                    {form_input(employee_form, "Phone", "tel", false, |f| f.phone.as_str(), |f, v| f.phone = v)}
                    {form_input(employee_form, "Department", "text", true, |f| f.department.as_str(), |f, v| f.department = v)}
                    {form_input(employee_form, "Role", "text", true, |f| f.role.as_str(), |f, v| f.role = v)}
                    {form_input(employee_form, "Salary", "number", false, |f| f.salary.as_str(), |f, v| f.salary = v)}
                    {form_select(
                        employee_form,
                        "Status",
                        status_options(&EmployeeForm::STATUSES),
                        |f| f.status.clone(),
                        |f, v| f.status = v,
                    )}
                    {form_textarea(employee_form, "Notes", |f| f.notes.as_str(), |f, v| f.notes = v)}
                </Modal>
            </Show>

            <Show when=move || matches!(editing.get(), Some(Editing::Position(_)))>
                <Modal
                    title=Signal::derive(move || match editing.get() {
                        Some(Editing::Position(Some(_))) => "Edit position".to_string(),
                        _ => "New position".to_string(),
                    })
                    on_submit=Callback::new(save)
                    on_close=Callback::new(move |_| editing.set(None))
                    error=form_error
                    busy=saving
                >
                    {form_input(position_form, "Title", "text", true, |f| f.title.as_str(), |f, v| f.title = v)}
                    {form_input(position_form, "Department", "text", true, |f| f.department.as_str(), |f, v| f.department = v)}
                    {form_textarea(position_form, "Description", |f| f.description.as_str(), |f, v| f.description = v)}
                    {form_input(position_form, "Minimum salary", "number", false, |f| f.salary_min.as_str(), |f, v| f.salary_min = v)}
                    {form_input(position_form, "Maximum salary", "number", false, |f| f.salary_max.as_str(), |f, v| f.salary_max = v)}
                    {form_select(
                        position_form,
                        "Status",
                        status_options(&PositionForm::STATUSES),
                        |f| f.status.clone(),
                        |f, v| f.status = v,
                    )}
                </Modal>
            </Show>
        </div>
    }
}

//! ERP Desktop Host
//!
//! Layered architecture:
//! - config: gateway settings from environment and `gateway.json`
//! - gateway: REST client for the ERP backend and identity provider
//! - commands: Tauri command handlers

use tauri::Manager;

mod commands;
mod config;
mod gateway;

use config::GatewayConfig;
use gateway::ApiGateway;

/// Application state shared across commands
pub struct AppState {
    pub gateway: ApiGateway,
}

/// Environment settings, overridden by `gateway.json` when the config dir has one
fn load_config(app_handle: &tauri::AppHandle) -> GatewayConfig {
    let config = GatewayConfig::from_env();
    let Ok(config_dir) = app_handle.path().app_config_dir() else {
        return config;
    };
    match config.clone().with_file(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Ignoring gateway config: {}", e);
            config
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            // Initialize logging
            let log_dir = app_handle.path().app_log_dir()?;
            if let Err(e) = rolling_logger::init_logger(log_dir, "ErpDesk") {
                eprintln!("[{}] Logger init failed: {}", chrono::Local::now().format("%H:%M:%S%.3f"), e);
            }

            let config = load_config(&app_handle);
            log::info!(
                "Gateway: api={} identity={}",
                config.api_url,
                if config.identity_configured() { "configured" } else { "off" }
            );

            app.manage(AppState {
                gateway: ApiGateway::new(config),
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Projects board
            commands::list_projects,
            commands::project_summary,
            commands::create_project,
            commands::update_project,
            commands::delete_project,
            commands::list_columns,
            commands::list_tasks,
            commands::create_column,
            commands::update_column,
            commands::delete_column,
            commands::create_task,
            commands::update_task,
            commands::move_task,
            commands::delete_task,
            // Finance
            commands::finance_summary,
            commands::list_transactions,
            commands::create_transaction,
            commands::update_transaction,
            commands::delete_transaction,
            commands::list_invoices,
            commands::create_invoice,
            commands::update_invoice,
            commands::delete_invoice,
            // HR
            commands::hr_summary,
            commands::list_employees,
            commands::create_employee,
            commands::update_employee,
            commands::delete_employee,
            commands::list_positions,
            commands::create_position,
            commands::update_position,
            commands::delete_position,
            // Assistants
            commands::ask_agent,
            // Admin
            commands::platform_summary,
            commands::list_clients,
            commands::revenue_analytics,
            commands::recent_activity,
            commands::set_client_suspended,
            // Session
            commands::get_session,
            commands::recent_logs,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

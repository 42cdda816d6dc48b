//! Tauri Command Wrappers
//!
//! Frontend bindings to host commands, organized by domain.
//! Host errors arrive as strings and are rebuilt into `DomainError`.

mod admin;
mod agents;
mod finance;
mod hr;
mod projects;
mod session;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use erp_core::{DomainError, DomainResult};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// Re-export all public items
pub use admin::*;
pub use agents::*;
pub use finance::*;
pub use hr::*;
pub use projects::*;
pub use session::*;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

#[derive(Serialize)]
struct PayloadArgs<'a, P> {
    payload: &'a P,
}

#[derive(Serialize)]
struct UpdateArgs<'a, P> {
    id: u32,
    payload: &'a P,
}

// ========================
// Invoke helpers
// ========================

fn host_error(err: JsValue) -> DomainError {
    match err.as_string() {
        Some(text) => DomainError::from_message(&text),
        None => DomainError::Network(format!("{:?}", err)),
    }
}

async fn call_js(cmd: &str, args: JsValue) -> DomainResult<JsValue> {
    invoke(cmd, args).await.map_err(|e| {
        let err = host_error(e);
        web_sys::console::warn_1(&format!("[IPC] {} failed: {}", cmd, err).into());
        err
    })
}

/// Invoke `cmd` with serialized `args` and decode the reply
pub(crate) async fn call<A, T>(cmd: &str, args: &A) -> DomainResult<T>
where
    A: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| DomainError::Internal(e.to_string()))?;
    let result = call_js(cmd, js_args).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| DomainError::Internal(e.to_string()))
}

/// Invoke an argument-less `cmd`
pub(crate) async fn call_no_args<T: DeserializeOwned>(cmd: &str) -> DomainResult<T> {
    let result = call_js(cmd, JsValue::NULL).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| DomainError::Internal(e.to_string()))
}

/// Invoke `cmd` and ignore the reply body
pub(crate) async fn call_unit<A: Serialize + ?Sized>(cmd: &str, args: &A) -> DomainResult<()> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| DomainError::Internal(e.to_string()))?;
    call_js(cmd, js_args).await.map(|_| ())
}

async fn delete_by_id(cmd: &str, id: u32) -> DomainResult<()> {
    call_unit(cmd, &IdArgs { id }).await
}

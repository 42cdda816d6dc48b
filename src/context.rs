//! Application Context
//!
//! Non-reactive services provided via Leptos Context API. The board
//! controller lives in local (non-`Send`) storage since it holds `RefCell`s.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use erp_core::{BoardController, DomainResult};

use crate::commands::TauriProjects;
use crate::store::{store_sync_board, AppStateStoreFields, AppStore};

pub type Board = BoardController<TauriProjects>;

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    board: StoredValue<Rc<Board>, LocalStorage>,
    store: AppStore,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self {
            board: StoredValue::new_local(Rc::new(BoardController::new(TauriProjects))),
            store,
        }
    }

    pub fn store(&self) -> AppStore {
        self.store
    }

    /// Push the controller's current snapshots to the store
    pub fn sync(&self) {
        let board = self.board.get_value();
        store_sync_board(&self.store, board.board(), board.overview());
    }

    /// Run a synchronous controller operation, then sync
    pub fn with_board(&self, f: impl FnOnce(&Board)) {
        let board = self.board.get_value();
        f(&board);
        self.sync();
    }

    /// Run an async controller operation in the background, sync, then hand
    /// the result to `on_done`. Failures are logged to the console.
    pub fn spawn_board<F, Fut, T>(&self, label: &'static str, f: F, on_done: impl FnOnce(DomainResult<T>) + 'static)
    where
        F: FnOnce(Rc<Board>) -> Fut + 'static,
        Fut: Future<Output = DomainResult<T>> + 'static,
        T: 'static,
    {
        let ctx = *self;
        let board = self.board.get_value();
        ctx.store.board_busy().update(|n| *n += 1);
        spawn_local(async move {
            let result = f(board).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("[BOARD] {} failed: {}", label, e).into());
            }
            ctx.store.board_busy().update(|n| *n = n.saturating_sub(1));
            ctx.sync();
            on_done(result);
        });
    }

    /// Reload the project list
    pub fn load_projects(&self) {
        self.spawn_board(
            "load projects",
            |board| async move {
                board.load_projects().await;
                Ok(())
            },
            |_| {},
        );
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

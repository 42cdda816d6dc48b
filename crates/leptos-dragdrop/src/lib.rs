//! Leptos DragDrop Utilities
//!
//! Card-to-column dragging for Leptos using mouse events.
//! Uses a movement threshold to distinguish click from drag; only the column
//! hovered at release time receives the card. Escape or a release outside
//! every column cancels the gesture.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Gesture notifications for the owner of the drag state
#[derive(Clone, Copy)]
pub struct DragHooks {
    /// Card moved past the threshold
    pub on_start: Callback<u32>,
    /// Pointer entered a column while dragging
    pub on_hover: Callback<u32>,
    /// Pointer left the hovered column
    pub on_leave: Callback<()>,
    /// Gesture ended: (card, column under the pointer). `None` means cancel.
    pub on_release: Callback<(u32, Option<u32>)>,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    pub hover_column_read: ReadSignal<Option<u32>>,
    pub hover_column_write: WriteSignal<Option<u32>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending card id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    hooks: DragHooks,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals(hooks: DragHooks) -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (hover_column_read, hover_column_write) = signal(None::<u32>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        hover_column_read,
        hover_column_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        hooks,
    }
}

impl DndSignals {
    pub fn is_dragging(&self, card_id: u32) -> bool {
        self.dragging_id_read.get() == Some(card_id)
    }

    pub fn is_hovered(&self, column_id: u32) -> bool {
        self.dragging_id_read.get().is_some() && self.hover_column_read.get() == Some(column_id)
    }
}

/// End drag operation. The just-ended flag suppresses the click that follows mouseup.
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.hover_column_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for a draggable card.
/// Records a pending drag with its start position.
pub fn make_on_mousedown(dnd: DndSignals, card_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Controls inside the card keep their own behavior
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlSelectElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
            {
                return;
            }
        }
        dnd.pending_id_write.set(Some(card_id));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Create mouseenter handler for a column body
pub fn make_on_column_mouseenter(dnd: DndSignals, column_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.hover_column_write.set(Some(column_id));
            dnd.hooks.on_hover.run(column_id);
        }
    }
}

/// Create mouseleave handler for a column body
pub fn make_on_column_mouseleave(dnd: DndSignals, column_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some()
            && dnd.hover_column_read.get_untracked() == Some(column_id)
        {
            dnd.hover_column_write.set(None);
            dnd.hooks.on_leave.run(());
        }
    }
}

fn bind_document<F>(event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Bind the document-level listeners: mousemove starts a drag once past the
/// threshold, mouseup releases, Escape cancels.
pub fn bind_global_handlers(dnd: DndSignals) {
    bind_document("mousemove", move |ev: web_sys::Event| {
        let Some(ev) = ev.dyn_ref::<web_sys::MouseEvent>() else { return };
        let pending = dnd.pending_id_read.get_untracked();
        let Some(card_id) = pending else { return };
        if dnd.dragging_id_read.get_untracked().is_some() {
            return;
        }
        let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
        let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            dnd.dragging_id_write.set(Some(card_id));
            dnd.hooks.on_start.run(card_id);
        }
    });

    bind_document("mouseup", move |_ev: web_sys::Event| {
        let dragging = dnd.dragging_id_read.get_untracked();
        let column = dnd.hover_column_read.get_untracked();
        dnd.pending_id_write.set(None);
        match dragging {
            Some(card_id) => {
                end_drag(&dnd);
                dnd.hooks.on_release.run((card_id, column));
            }
            // Plain click; the click event fires on the element
            None => end_drag(&dnd),
        }
    });

    bind_document("keydown", move |ev: web_sys::Event| {
        let is_escape = ev
            .dyn_ref::<web_sys::KeyboardEvent>()
            .map(|k| k.key() == "Escape")
            .unwrap_or(false);
        if !is_escape {
            return;
        }
        if let Some(card_id) = dnd.dragging_id_read.get_untracked() {
            end_drag(&dnd);
            dnd.hooks.on_release.run((card_id, None));
        }
    });
}

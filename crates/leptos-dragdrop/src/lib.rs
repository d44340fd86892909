//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse and keyboard events.
//! Uses movement threshold to distinguish click from drag; a focused drag
//! handle lifts with Space/Enter and moves with the arrow keys.

use std::sync::Arc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

mod session;

pub use session::{DragKey, DragOutcome, DragSession, Layout, Step};

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

type OutcomeHandler<K> = Arc<dyn Fn(DragOutcome<K>) + Send + Sync>;

/// DnD state signals
pub struct DndSignals<K: Send + Sync + 'static> {
    pub session: RwSignal<DragSession<K>>,
    pub threshold_px: i32,
    on_outcome: StoredValue<Option<OutcomeHandler<K>>>,
}

// Signals are arena handles, so the struct is Copy whatever the key type
impl<K: Send + Sync + 'static> Clone for DndSignals<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Send + Sync + 'static> Copy for DndSignals<K> {}

pub fn create_dnd_signals_with_threshold<K>(threshold_px: i32) -> DndSignals<K>
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    DndSignals {
        session: RwSignal::new(DragSession::Idle),
        threshold_px,
        on_outcome: StoredValue::new(None),
    }
}

impl<K> DndSignals<K>
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    /// Id of the lifted item, tracked
    pub fn active_id(&self) -> Option<K> {
        self.session.with(|s| s.active_id().cloned())
    }

    /// Current drop target, tracked
    pub fn over_id(&self) -> Option<K> {
        self.session.with(|s| s.over_id().cloned())
    }

    pub fn is_dragging(&self) -> bool {
        self.session.with(|s| s.is_active())
    }

    /// Pointer position while dragging, tracked
    pub fn pointer(&self) -> Option<(i32, i32)> {
        self.session.with(|s| s.pointer())
    }

    /// Session is already idle; hand the outcome to the bound handler
    fn finish(&self, outcome: DragOutcome<K>) {
        if let Some(handler) = self.on_outcome.with_value(|h| h.clone()) {
            handler(outcome);
        }
    }
}

/// Presses on form controls belong to the control, not to the drag
fn is_interactive_target(ev: &web_sys::MouseEvent) -> bool {
    let Some(target) = ev.target() else { return false };
    target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown<K>(dnd: DndSignals<K>, item_id: K) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || is_interactive_target(&ev) {
            return;
        }
        // Keep text selection from starting under the pointer
        ev.prevent_default();
        dnd.session
            .set(DragSession::press(item_id.clone(), ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for drop targets (items and columns alike).
/// A keyboard drag keeps its target while the pointer wanders.
pub fn make_on_target_mouseenter<K>(dnd: DndSignals<K>, target_id: K) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.session.with_untracked(|s| s.is_active() && !s.is_keyboard()) {
            dnd.session.update(|s| s.hover(Some(target_id.clone())));
        }
    }
}

/// Create mouseleave handler for drop targets
///
/// Nested targets pass their container as `fallback`; see `DragSession::leave`.
pub fn make_on_target_mouseleave<K>(dnd: DndSignals<K>, target_id: K, fallback: Option<K>) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.session.with_untracked(|s| s.is_active() && !s.is_keyboard()) {
            dnd.session.update(|s| s.leave(&target_id, fallback.clone()));
        }
    }
}

/// Create keydown handler for a focusable drag handle
///
/// Space/Enter lifts the item, arrows step the target through `layout`,
/// Space/Enter drops and Escape cancels. `layout` is read on every arrow
/// key, so it always reflects the current board.
pub fn make_on_handle_keydown<K, L>(dnd: DndSignals<K>, item_id: K, layout: L) -> impl Fn(web_sys::KeyboardEvent) + Clone + 'static
where
    K: Clone + PartialEq + Send + Sync + 'static,
    L: Fn() -> Vec<(K, Vec<K>)> + Clone + 'static,
{
    move |ev: web_sys::KeyboardEvent| {
        let Some(key) = DragKey::from_key(&ev.key()) else { return };
        let session = dnd.session.get_untracked();
        if !session.is_active() && key != DragKey::Activate {
            return;
        }
        // Space would scroll the page, arrows would scroll the board
        ev.prevent_default();
        ev.stop_propagation();

        let targets = match key {
            DragKey::Step(_) => layout(),
            _ => Vec::new(),
        };
        let (next, outcome) = session.key(&item_id, key, &targets);
        if next.is_active() && key == DragKey::Activate {
            log::debug!("[DND] drag started from keyboard");
        }
        dnd.session.set(next);
        if let Some(outcome) = outcome {
            dnd.finish(outcome);
        }
    }
}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|win| win.document())
}

/// Bind document mousemove - starts drag if moved enough, tracks the pointer
pub fn bind_global_mousemove<K>(dnd: DndSignals<K>)
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let (x, y) = (ev.client_x(), ev.client_y());
        let was_active = dnd.session.with_untracked(|s| s.is_active());
        let moved = dnd
            .session
            .with_untracked(|s| s.clone().moved(x, y, dnd.threshold_px));
        if moved != dnd.session.get_untracked() {
            if !was_active && moved.is_active() {
                log::debug!("[DND] drag started");
            }
            dnd.session.set(moved);
        }
    });

    if let Some(doc) = document() {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Bind document keydown - Escape cancels an active drag
pub fn bind_global_keydown<K>(dnd: DndSignals<K>)
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Escape" || !dnd.session.with_untracked(|s| s.is_active()) {
            return;
        }
        let outcome = dnd.session.with_untracked(|s| s.clone().cancel());
        dnd.session.set(DragSession::Idle);
        log::debug!("[DND] drag cancelled by keyboard");
        dnd.finish(outcome);
    });

    if let Some(doc) = document() {
        let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    }
    on_keydown.forget();
}

/// Bind global mouseup handler for drop detection
///
/// Also binds the mousemove and keydown listeners, so a single call wires
/// the whole drag session. `on_outcome` sees every session end, mouse and
/// keyboard alike.
pub fn bind_global_mouseup<K, F>(dnd: DndSignals<K>, on_outcome: F)
where
    K: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(DragOutcome<K>) + Send + Sync + 'static,
{
    use wasm_bindgen::closure::Closure;

    dnd.on_outcome.set_value(Some(Arc::new(on_outcome)));

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let session = dnd.session.get_untracked();
        if matches!(session, DragSession::Idle) || session.is_keyboard() {
            return;
        }
        // Clear state first so the drop handler sees an idle session
        dnd.session.set(DragSession::Idle);
        dnd.finish(session.release());
    });

    if let Some(doc) = document() {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
    bind_global_keydown(dnd);
}

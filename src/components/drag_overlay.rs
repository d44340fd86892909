//! Drag Overlay Component
//!
//! Floating copy of the lifted card that follows the pointer.

use leptos::prelude::*;

use crate::models::ItemId;
use crate::store::{store_item_content, use_board_store};

use leptos_dragdrop::DndSignals;

/// Offset so the copy does not sit under the pointer and swallow mouseenter
const POINTER_OFFSET_PX: i32 = 12;

#[component]
pub fn DragOverlay() -> impl IntoView {
    let store = use_board_store();
    let dnd = expect_context::<DndSignals<ItemId>>();

    let lifted = move || {
        let id = dnd.active_id()?;
        let (x, y) = dnd.pointer()?;
        let content = store_item_content(&store, &id)?;
        Some((content, x + POINTER_OFFSET_PX, y + POINTER_OFFSET_PX))
    };

    move || {
        lifted().map(|(content, left, top)| {
            view! {
                <div class="drag-overlay" style=format!("left: {}px; top: {}px;", left, top)>
                    <div class="item-card overlay">
                        <span class="drag-handle">"⠿"</span>
                        <div class="item-body">
                            <p class="item-content">{content}</p>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
